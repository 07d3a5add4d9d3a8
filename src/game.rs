use log::{debug, info};
use rand::Rng;

use crate::collision::{check_loss, check_pickup};
use crate::components::{Direction, Position};
use crate::ghost::{Ghost, GHOST_SPAWNS};
use crate::level::{MazeGrid, PLAYER_SPAWN};
use crate::pickups::{PickupField, Score};
use crate::player::Player;

/// Frames in the player's animation cycle.
pub const ANIMATION_FRAMES: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Running,
    Lost,
    Won,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Running
    }
}

/// Everything that changes during a game, plus the maze it is played on.
pub struct Game {
    grid: MazeGrid,
    player: Player,
    ghosts: Vec<Ghost>,
    pickups: PickupField,
    score: Score,
    outcome: Outcome,
    ticks: u64,
    animation_frame: u8,
}

impl Game {
    pub fn new(grid: MazeGrid, player_spawn: Position, ghosts: Vec<Ghost>) -> Self {
        let pickups = PickupField::seed(&grid);
        Self::with_pickups(grid, player_spawn, ghosts, pickups)
    }

    pub fn with_pickups(
        grid: MazeGrid,
        player_spawn: Position,
        ghosts: Vec<Ghost>,
        pickups: PickupField,
    ) -> Self {
        Self {
            grid,
            player: Player::new(player_spawn),
            ghosts,
            pickups,
            score: Score::default(),
            outcome: Outcome::Running,
            ticks: 0,
            animation_frame: 0,
        }
    }

    pub fn classic() -> Self {
        let ghosts = GHOST_SPAWNS
            .iter()
            .map(|&(kind, spawn)| Ghost::new(kind, spawn))
            .collect();
        Self::new(MazeGrid::classic(), PLAYER_SPAWN, ghosts)
    }

    pub fn request_direction(&mut self, dir: Direction) {
        if !self.outcome.is_terminal() {
            self.player.request_direction(dir);
        }
    }

    /// One gameplay tick: player, ghosts, pickups, then the loss and win checks.
    pub fn tick(&mut self, rng: &mut impl Rng) -> Outcome {
        if self.outcome.is_terminal() {
            return self.outcome;
        }
        self.ticks += 1;

        self.player.update(&self.grid);
        for ghost in self.ghosts.iter_mut() {
            ghost.update(&self.grid, rng);
        }

        let player = self.player.position();
        let eaten = check_pickup(&self.grid, player, &mut self.pickups, &mut self.score);
        if eaten > 0 {
            debug!(
                "tick {}: ate {} pickup(s), {} left",
                self.ticks,
                eaten,
                self.pickups.remaining()
            );
        }

        if check_loss(&self.grid, player, self.ghosts.iter().map(Ghost::position)) {
            self.outcome = Outcome::Lost;
            info!(
                "caught at ({}, {}) on tick {}, score {}",
                player.x,
                player.y,
                self.ticks,
                self.score.display()
            );
        } else if self.pickups.is_empty() {
            self.outcome = Outcome::Won;
            info!(
                "all pickups eaten on tick {}, score {}",
                self.ticks,
                self.score.display()
            );
        }
        self.outcome
    }

    /// Cosmetic tick for the player's animation. Frozen once the game is over.
    pub fn advance_animation(&mut self) {
        if !self.outcome.is_terminal() {
            self.animation_frame = (self.animation_frame + 1) % ANIMATION_FRAMES;
        }
    }

    pub fn current_score(&self) -> u32 {
        self.score.value()
    }

    pub fn display_score(&self) -> u32 {
        self.score.display()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn player_position(&self) -> Position {
        self.player.position()
    }

    pub fn player_heading(&self) -> Option<Direction> {
        self.player.active_direction()
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    pub fn pickups(&self) -> &PickupField {
        &self.pickups
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn animation_frame(&self) -> u8 {
        self.animation_frame
    }
}
