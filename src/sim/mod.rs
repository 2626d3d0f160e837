//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Events returned, never dispatched (no audio or rendering calls)

pub mod ball;
pub mod difficulty;
pub mod effects;
pub mod geom;
pub mod paddle;
pub mod round;
pub mod state;
pub mod tick;

pub use ball::{BallStep, step_ball};
pub use difficulty::DifficultyRamp;
pub use effects::{EffectOptions, EffectsState, FlashTimer, TrailBuffer, trail_alpha};
pub use geom::{Arena, Rect};
pub use paddle::{Direction, Paddle, PaddleControls};
pub use round::{RoundManager, RoundState};
pub use state::{Ball, GameEvent, GameState, Snapshot};
pub use tick::{TickInput, tick};
