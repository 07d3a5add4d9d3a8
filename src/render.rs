use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use crate::components::CellPos;
use crate::game::{Game, Outcome};
use crate::ghost::GhostKind;
use crate::level::Cell;

/// Terminal columns per maze cell.
pub const CELL_W: usize = 2;

const PLAYER_FRAMES: [&str; 3] = ["😃", "😮", "😶"];

#[derive(Clone, Copy, PartialEq, Debug)]
enum Glyph {
    Player(u8),
    Ghost,
    Wall,
    Empty,
    Pickup,
    Gate,
}

#[derive(Clone, Copy, PartialEq, Debug)]
struct Paint {
    glyph: Glyph,
    color: Color,
}

/// Redraws only the cells that changed since the previous frame.
pub struct Renderer {
    last: Vec<Paint>,
    last_hud: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            last: vec![
                Paint {
                    glyph: Glyph::Empty,
                    color: Color::Reset,
                };
                width * height
            ],
            last_hud: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }

    pub fn render(&mut self, stdout: &mut Stdout, game: &Game) -> io::Result<()> {
        let grid = game.grid();
        let needed_h = (grid.height() + 2) as u16;
        let needed_w = (grid.width() * CELL_W) as u16;

        stdout.queue(MoveTo(0, 0))?;

        let (term_w, term_h) = terminal::size()?;
        if term_w < needed_w || term_h < needed_h {
            stdout.queue(Clear(ClearType::All))?;
            let msg = format!(
                "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
                needed_w, needed_h, term_w, term_h
            );
            stdout.queue(Print(msg))?;
            stdout.flush()?;
            self.needs_full = true;
            return Ok(());
        }

        let origin_x = (term_w - needed_w) / 2;
        let origin_y = (term_h - needed_h) / 2 + 1;
        if origin_x != self.origin_x || origin_y != self.origin_y {
            stdout.queue(Clear(ClearType::All))?;
            self.origin_x = origin_x;
            self.origin_y = origin_y;
            self.needs_full = true;
        }

        let hud = format!(
            "Score: {}  Pickups: {}  (q to quit)",
            game.display_score(),
            game.pickups().remaining()
        );
        if self.needs_full || hud != self.last_hud {
            stdout.queue(MoveTo(self.origin_x, self.origin_y - 1))?;
            stdout.queue(SetForegroundColor(Color::White))?;
            stdout.queue(Clear(ClearType::CurrentLine))?;
            stdout.queue(Print(&hud))?;
            stdout.queue(ResetColor)?;
            self.last_hud = hud;
        }

        for (pos, _) in grid.cells() {
            let paint = paint_for(game, pos);
            let idx = pos.row * grid.width() + pos.col;
            if self.needs_full || self.last.get(idx) != Some(&paint) {
                if let Some(slot) = self.last.get_mut(idx) {
                    *slot = paint;
                }
                self.draw_cell(stdout, pos, paint)?;
            }
        }
        self.needs_full = false;

        stdout.flush()
    }

    fn draw_cell(&self, stdout: &mut Stdout, pos: CellPos, paint: Paint) -> io::Result<()> {
        let text = match paint.glyph {
            Glyph::Player(frame) => PLAYER_FRAMES[frame as usize % PLAYER_FRAMES.len()],
            Glyph::Ghost => "ᗣ",
            Glyph::Wall => "██",
            Glyph::Empty => "  ",
            Glyph::Pickup => "· ",
            Glyph::Gate => "==",
        };
        let x_pos = self.origin_x + (pos.col * CELL_W) as u16;
        let y_pos = self.origin_y + pos.row as u16;
        stdout.queue(MoveTo(x_pos, y_pos))?;
        stdout.queue(SetForegroundColor(paint.color))?;
        stdout.queue(Print(text))?;
        let w = UnicodeWidthStr::width(text);
        for _ in w..CELL_W {
            stdout.queue(Print(' '))?;
        }
        stdout.queue(ResetColor)?;
        Ok(())
    }

    /// Static end-of-game line under the board.
    pub fn render_banner(&self, stdout: &mut Stdout, game: &Game) -> io::Result<()> {
        let headline = match game.outcome() {
            Outcome::Won => "YOU WIN!",
            Outcome::Lost => "GAME OVER",
            Outcome::Running => return Ok(()),
        };
        let row = self.origin_y + game.grid().height() as u16;
        stdout.queue(MoveTo(self.origin_x, row))?;
        stdout.queue(SetForegroundColor(Color::Magenta))?;
        stdout.queue(Print(format!(
            "{} - Final Score: {} (press q to quit)",
            headline,
            game.display_score()
        )))?;
        stdout.queue(ResetColor)?;
        stdout.flush()
    }
}

fn ghost_color(kind: GhostKind) -> Color {
    match kind {
        GhostKind::Cyan => Color::Cyan,
        GhostKind::Red => Color::Red,
        GhostKind::Yellow => Color::Yellow,
        GhostKind::Pink => Color::Magenta,
    }
}

fn paint_for(game: &Game, pos: CellPos) -> Paint {
    let grid = game.grid();
    if grid.nearest_cell(game.player_position()) == Some(pos) {
        return Paint {
            glyph: Glyph::Player(game.animation_frame()),
            color: Color::Yellow,
        };
    }
    if let Some(ghost) = game
        .ghosts()
        .iter()
        .find(|g| grid.nearest_cell(g.position()) == Some(pos))
    {
        return Paint {
            glyph: Glyph::Ghost,
            color: ghost_color(ghost.kind()),
        };
    }
    if game.pickups().contains(pos) {
        return Paint {
            glyph: Glyph::Pickup,
            color: Color::White,
        };
    }
    match grid.get(pos) {
        Some(Cell::Wall) => Paint {
            glyph: Glyph::Wall,
            color: Color::DarkBlue,
        },
        Some(Cell::GhostGate) => Paint {
            glyph: Glyph::Gate,
            color: Color::Magenta,
        },
        _ => Paint {
            glyph: Glyph::Empty,
            color: Color::Reset,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::PLAYER_SPAWN;

    #[test]
    fn paint_layers_actors_over_the_maze() {
        let game = Game::classic();
        let grid = game.grid();
        let spawn = grid.cell_of(PLAYER_SPAWN).unwrap();
        assert_eq!(paint_for(&game, spawn).glyph, Glyph::Player(0));

        let red = paint_for(&game, CellPos::new(9, 8));
        assert_eq!(red.glyph, Glyph::Ghost);
        assert_eq!(red.color, Color::Red);

        assert_eq!(paint_for(&game, CellPos::new(0, 0)).glyph, Glyph::Wall);
        assert_eq!(paint_for(&game, CellPos::new(9, 9)).glyph, Glyph::Gate);
        assert_eq!(paint_for(&game, CellPos::new(1, 1)).glyph, Glyph::Pickup);
    }
}
