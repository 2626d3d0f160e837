//! Trail Pong - single-player Pong with a motion trail and hit flash
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle, rounds, effects)
//! - `driver`: Fixed-rate frame loop tying input, simulation, audio and rendering
//! - `input`: Input event vocabulary and input sources
//! - `audio`: Event-to-sound mapping that tolerates missing sounds
//! - `renderer`: Snapshot tessellation into a vertex display list
//! - `settings`: Startup configuration and tuning

pub mod audio;
pub mod driver;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{FrameDriver, StepOutcome};
pub use settings::{InputModel, Settings, Tuning};

/// Game configuration constants
pub mod consts {
    use crate::sim::Arena;

    /// Simulation steps per second (one tick per rendered frame)
    pub const STEPS_PER_SECOND: u32 = 60;

    /// Fixed arena, never resized at runtime
    pub const ARENA: Arena = Arena::new(500, 500);

    /// Ball defaults (square bounding box, drawn as an ellipse)
    pub const BALL_SIZE: i32 = 30;
    pub const LAUNCH_SPEED: i32 = 7;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 200;
    pub const PADDLE_HEIGHT: i32 = 15;
    /// Distance from the arena bottom to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: i32 = 20;
    /// Velocity change per key press/release
    pub const PADDLE_IMPULSE: i32 = 6;
    /// Max gap between ball bottom and paddle top for a hit to count
    pub const PADDLE_HIT_TOLERANCE: i32 = 12;

    /// Difficulty ramp
    pub const HITS_PER_RAMP: u32 = 3;
    pub const SPEED_STEP: i32 = 1;
    pub const SPEED_CAP: i32 = 15;

    /// Trail effect
    pub const TRAIL_LENGTH: usize = 10;
    /// Longest trail a settings file may ask for
    pub const MAX_TRAIL_LENGTH: usize = 64;
    pub const TRAIL_FADE_START: u8 = 18;
    pub const TRAIL_FADE_END: u8 = 0;

    /// Flash effect (on paddle hit)
    pub const FLASH_FRAMES: u32 = 8;
    pub const FLASH_ALPHA: u8 = 100;

    /// Sound files, looked up next to the working directory
    pub const SND_HIT: &str = "hit.wav";
    pub const SND_WALL: &str = "wall.wav";
    pub const SND_OUT: &str = "out.wav";
    pub const MUS_BG: &str = "background.mp3";
}

/// Clamp a speed component's magnitude to `cap`, keeping its sign (zero stays zero)
#[inline]
pub fn clamp_speed_component(v: i32, cap: i32) -> i32 {
    v.clamp(-cap, cap)
}
