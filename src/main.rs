use std::io::{self, Stdout};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use pacman_chase::config::Settings;
use pacman_chase::input::{command_for_event, Command};
use pacman_chase::render::Renderer;
use pacman_chase::Game;

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = stdout.execute(Show);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let settings = Settings::from_env();

    let mut stdout = io::stdout();
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    let _guard = TerminalGuard;
    stdout
        .execute(EnterAlternateScreen)
        .context("failed to enter alternate screen")?;
    stdout.execute(Hide).context("failed to hide cursor")?;

    run(&mut stdout, &settings)
}

fn run(stdout: &mut Stdout, settings: &Settings) -> anyhow::Result<()> {
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::classic();
    let mut renderer = Renderer::new(game.grid().width(), game.grid().height());
    let frame_time = settings.frame_time();
    info!(
        "starting: tick {:?}, animation {:?}, {} pickups",
        settings.tick,
        settings.animation,
        game.pickups().remaining()
    );

    let mut last_tick = Instant::now();
    let mut last_frame_step = Instant::now();
    loop {
        let frame_start = Instant::now();
        while event::poll(Duration::from_millis(0))? {
            match command_for_event(&event::read()?) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Move(dir)) => game.request_direction(dir),
                None => {}
            }
        }

        if last_frame_step.elapsed() >= settings.animation {
            last_frame_step = Instant::now();
            game.advance_animation();
        }

        if last_tick.elapsed() >= settings.tick {
            last_tick = Instant::now();
            let outcome = game.tick(&mut rng);
            renderer.render(stdout, &game)?;
            if outcome.is_terminal() {
                return show_outcome(stdout, &game, &mut renderer);
            }
        } else {
            renderer.render(stdout, &game)?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

/// The game is frozen: keep the final board and banner up until the player quits.
fn show_outcome(stdout: &mut Stdout, game: &Game, renderer: &mut Renderer) -> anyhow::Result<()> {
    renderer.render_banner(stdout, game)?;
    loop {
        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;
            if let Event::Resize(_, _) = event {
                renderer.render(stdout, game)?;
                renderer.render_banner(stdout, game)?;
            }
            if command_for_event(&event) == Some(Command::Quit) {
                return Ok(());
            }
        }
    }
}
