//! Player paddle and its input models

use serde::{Deserialize, Serialize};

use super::geom::{Arena, Rect};
use crate::consts::*;
use crate::settings::InputModel;

/// Horizontal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// -1 for left, +1 for right
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Input state feeding paddle velocity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaddleControls {
    /// Running total of press/release impulses
    Accumulator { velocity: i32 },
    /// Which directions are currently held
    HeldKeys { left: bool, right: bool },
}

impl PaddleControls {
    pub fn new(model: InputModel) -> Self {
        match model {
            InputModel::Accumulator => PaddleControls::Accumulator { velocity: 0 },
            InputModel::HeldKeys => PaddleControls::HeldKeys {
                left: false,
                right: false,
            },
        }
    }

    pub fn model(&self) -> InputModel {
        match self {
            PaddleControls::Accumulator { .. } => InputModel::Accumulator,
            PaddleControls::HeldKeys { .. } => InputModel::HeldKeys,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub rect: Rect,
    controls: PaddleControls,
    /// Velocity per held direction (or per press in accumulator mode)
    impulse: i32,
}

impl Paddle {
    /// Paddle centered near the bottom edge, at rest
    pub fn new(arena: Arena, model: InputModel, impulse: i32) -> Self {
        Self {
            rect: Rect::new(
                arena.width / 2 - PADDLE_WIDTH / 2,
                arena.height - PADDLE_BOTTOM_OFFSET,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            controls: PaddleControls::new(model),
            impulse: impulse.clamp(0, arena.width),
        }
    }

    pub fn controls(&self) -> &PaddleControls {
        &self.controls
    }

    /// A direction key went down
    pub fn press(&mut self, dir: Direction) {
        match &mut self.controls {
            PaddleControls::Accumulator { velocity } => {
                *velocity = velocity.saturating_add(dir.sign() * self.impulse)
            }
            PaddleControls::HeldKeys { left, right } => match dir {
                Direction::Left => *left = true,
                Direction::Right => *right = true,
            },
        }
    }

    /// A direction key came up
    pub fn release(&mut self, dir: Direction) {
        match &mut self.controls {
            PaddleControls::Accumulator { velocity } => {
                *velocity = velocity.saturating_sub(dir.sign() * self.impulse)
            }
            PaddleControls::HeldKeys { left, right } => match dir {
                Direction::Left => *left = false,
                Direction::Right => *right = false,
            },
        }
    }

    /// Current horizontal velocity
    pub fn velocity(&self) -> i32 {
        match self.controls {
            PaddleControls::Accumulator { velocity } => velocity,
            PaddleControls::HeldKeys { left, right } => {
                (i32::from(right) - i32::from(left)) * self.impulse
            }
        }
    }

    /// Move by the current velocity and snap back inside the arena.
    /// Only position is clamped; held keys keep pushing against the wall.
    pub fn step(&mut self, arena: Arena) {
        self.rect.x = self.rect.x.saturating_add(self.velocity());

        if self.rect.left() < 0 {
            self.rect.set_left(0);
        }
        if self.rect.right() > arena.width {
            self.rect.set_right(arena.width);
        }
    }
}
