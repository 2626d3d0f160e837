//! Game state and core simulation types
//!
//! `GameState` is the single owned aggregate every component is handed by
//! `&mut`; nothing lives in globals.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::effects::EffectsState;
use super::geom::{Arena, Rect};
use super::paddle::Paddle;
use super::round::{RoundManager, RoundState};
use crate::consts::*;
use crate::settings::Settings;

/// Something that happened during a tick, for audio and effects to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// Ball bounced off the top or a side wall
    WallBounce,
    /// Ball was deflected by the top of the paddle (scores a point)
    PaddleHit,
    /// Ball fell past the bottom edge
    Miss,
}

/// The ball: a square bounding box with an integer per-frame velocity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    pub vel: IVec2,
}

impl Ball {
    /// Stationary ball at the arena center
    pub fn new(arena: Arena) -> Self {
        Self {
            rect: Rect::centered_at(arena.center(), BALL_SIZE, BALL_SIZE),
            vel: IVec2::ZERO,
        }
    }

    #[inline]
    pub fn center(&self) -> IVec2 {
        self.rect.center()
    }

    #[inline]
    pub fn is_stationary(&self) -> bool {
        self.vel == IVec2::ZERO
    }

    /// Put the ball back at the arena center with no velocity
    pub fn reset(&mut self, arena: Arena) {
        self.rect.set_center(arena.center());
        self.vel = IVec2::ZERO;
    }
}

/// Read-only view of one frame, handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub arena: Arena,
    pub ball: Rect,
    pub paddle: Rect,
    pub score: u32,
    pub best_score: u32,
    pub round: RoundState,
    /// Ball centers, newest first
    pub trail: Vec<IVec2>,
    /// Flash frames left after this one
    pub flash_timer: u32,
    /// Whether the flash overlay is drawn this frame
    pub flash_visible: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub arena: Arena,
    pub ball: Ball,
    pub paddle: Paddle,
    pub round: RoundManager,
    /// Visual-only state (not gameplay-affecting)
    pub effects: EffectsState,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let arena = ARENA;
        Self {
            seed,
            arena,
            ball: Ball::new(arena),
            paddle: Paddle::new(arena, settings.input_model, settings.tuning.paddle_impulse),
            round: RoundManager::new(),
            effects: EffectsState::new(settings.tuning.trail_length),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            arena: self.arena,
            ball: self.ball.rect,
            paddle: self.paddle.rect,
            score: self.round.score(),
            best_score: self.round.best_score(),
            round: self.round.state(),
            trail: self.effects.trail.points().collect(),
            flash_timer: self.effects.flash.remaining(),
            flash_visible: self.effects.flash_visible(),
        }
    }
}
