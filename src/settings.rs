//! Game settings and tuning
//!
//! Read once at startup from an optional JSON file; never changed while the
//! frame loop runs.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How key events become paddle velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InputModel {
    /// Each press/release adds a signed impulse to a running total.
    /// A lost release event leaves the paddle drifting.
    Accumulator,
    /// Velocity is recomputed each tick from which directions are held
    #[default]
    HeldKeys,
}

impl InputModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputModel::Accumulator => "Accumulator",
            InputModel::HeldKeys => "HeldKeys",
        }
    }

}

impl FromStr for InputModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accumulator" | "acc" => Ok(InputModel::Accumulator),
            "heldkeys" | "held" | "held_keys" => Ok(InputModel::HeldKeys),
            _ => Err(format!("unknown input model {:?}", s)),
        }
    }
}

/// Gameplay numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Speed assigned to each velocity component on launch
    pub launch_speed: i32,
    /// Max absolute value of either velocity component
    pub speed_cap: i32,
    /// Magnitude added per ramp
    pub speed_step: i32,
    /// Paddle hits between ramps
    pub hits_per_ramp: u32,
    /// Paddle velocity per held direction
    pub paddle_impulse: i32,
    /// Max gap between ball bottom and paddle top for a hit
    pub paddle_hit_tolerance: i32,
    /// Trail capacity
    pub trail_length: usize,
    /// Trail alpha for newest/oldest points (0-255)
    pub trail_fade_start: u8,
    pub trail_fade_end: u8,
    /// Frames the hit flash stays up
    pub flash_frames: u32,
    /// Flash overlay alpha (0-255)
    pub flash_alpha: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            launch_speed: LAUNCH_SPEED,
            speed_cap: SPEED_CAP,
            speed_step: SPEED_STEP,
            hits_per_ramp: HITS_PER_RAMP,
            paddle_impulse: PADDLE_IMPULSE,
            paddle_hit_tolerance: PADDLE_HIT_TOLERANCE,
            trail_length: TRAIL_LENGTH,
            trail_fade_start: TRAIL_FADE_START,
            trail_fade_end: TRAIL_FADE_END,
            flash_frames: FLASH_FRAMES,
            flash_alpha: FLASH_ALPHA,
        }
    }
}

impl Tuning {
    /// Clamp values that would break simulation invariants
    pub fn sanitized(mut self) -> Self {
        self.speed_cap = self.speed_cap.clamp(1, ARENA.width);
        self.launch_speed = self.launch_speed.clamp(1, self.speed_cap);
        self.speed_step = self.speed_step.clamp(0, self.speed_cap);
        self.hits_per_ramp = self.hits_per_ramp.max(1);
        self.paddle_impulse = self.paddle_impulse.clamp(0, ARENA.width);
        self.paddle_hit_tolerance = self.paddle_hit_tolerance.clamp(1, ARENA.height);
        self.trail_length = self.trail_length.clamp(1, MAX_TRAIL_LENGTH);
        self
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tuning: Tuning,

    // === Input ===
    pub input_model: InputModel,

    // === Gameplay ===
    /// Speed up every `hits_per_ramp` hits
    pub difficulty_ramp: bool,
    /// RNG seed (None = wall clock)
    pub seed: Option<u64>,

    // === Visual Effects ===
    /// Ball trail
    pub trails: bool,
    /// White flash on paddle hit
    pub flash: bool,

    // === Audio ===
    /// Looping background music
    pub music: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    // === Accessibility ===
    /// Reduced motion (suppresses flashes)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),

            input_model: InputModel::HeldKeys,

            difficulty_ramp: true,
            seed: None,

            // Visual effects - all on by default
            trails: true,
            flash: true,

            // Audio
            music: true,
            master_volume: 1.0,
            sfx_volume: 1.0,
            music_volume: 0.5,
            muted: false,

            // Accessibility
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective flash (respects reduced_motion)
    pub fn effective_flash(&self) -> bool {
        self.flash && !self.reduced_motion
    }

    /// Environment variable naming a settings file
    pub const PATH_ENV: &'static str = "TRAIL_PONG_SETTINGS";

    /// Environment variable overriding the input model
    pub const INPUT_ENV: &'static str = "TRAIL_PONG_INPUT";

    /// Replace the input model with `value` if it names one
    pub fn with_input_override(mut self, value: Option<&str>) -> Self {
        if let Some(value) = value {
            match value.parse() {
                Ok(model) => self.input_model = model,
                Err(e) => log::warn!("Ignoring {}: {}", Self::INPUT_ENV, e),
            }
        }
        self
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        self.tuning = self.tuning.sanitized();
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let settings = Settings::default();
        assert_eq!(settings.tuning.launch_speed, 7);
        assert_eq!(settings.tuning.speed_cap, 15);
        assert_eq!(settings.tuning.hits_per_ramp, 3);
        assert_eq!(settings.tuning.trail_length, 10);
        assert_eq!(settings.input_model, InputModel::HeldKeys);
        assert!(settings.trails && settings.flash && settings.difficulty_ramp);
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.input_model = InputModel::Accumulator;
        settings.seed = Some(42);
        settings.tuning.flash_frames = 4;

        let json = settings.to_json().unwrap();
        let parsed = Settings::from_json(&json).unwrap();
        assert_eq!(parsed.input_model, InputModel::Accumulator);
        assert_eq!(parsed.seed, Some(42));
        assert_eq!(parsed.tuning, settings.tuning);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let parsed = Settings::from_json(r#"{ "trails": false, "tuning": { "speed_cap": 20 } }"#)
            .unwrap();
        assert!(!parsed.trails);
        assert_eq!(parsed.tuning.speed_cap, 20);
        assert_eq!(parsed.tuning.launch_speed, 7);
        assert!(parsed.flash);
    }

    #[test]
    fn test_sanitize_clamps_bad_values() {
        let parsed = Settings::from_json(
            r#"{ "master_volume": 3.0, "tuning": { "speed_cap": 0, "launch_speed": 9, "hits_per_ramp": 0, "trail_length": 0 } }"#,
        )
        .unwrap();
        assert_eq!(parsed.tuning.speed_cap, 1);
        assert_eq!(parsed.tuning.launch_speed, 1);
        assert_eq!(parsed.tuning.hits_per_ramp, 1);
        assert_eq!(parsed.tuning.trail_length, 1);
        assert_eq!(parsed.master_volume, 1.0);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/trail-pong.json"));
        assert_eq!(settings.tuning, Tuning::default());
    }

    #[test]
    fn test_reduced_motion_disables_flash() {
        let mut settings = Settings::default();
        assert!(settings.effective_flash());
        settings.reduced_motion = true;
        assert!(!settings.effective_flash());
    }

    #[test]
    fn test_input_model_parse() {
        assert_eq!("ACC".parse::<InputModel>(), Ok(InputModel::Accumulator));
        assert_eq!("held".parse::<InputModel>(), Ok(InputModel::HeldKeys));
        assert!("mouse".parse::<InputModel>().is_err());
        assert_eq!(InputModel::HeldKeys.as_str(), "HeldKeys");
    }

    #[test]
    fn test_input_override() {
        let settings = Settings::default().with_input_override(Some("accumulator"));
        assert_eq!(settings.input_model, InputModel::Accumulator);

        let settings = settings.with_input_override(Some("joystick"));
        assert_eq!(settings.input_model, InputModel::Accumulator);

        let settings = settings.with_input_override(None);
        assert_eq!(settings.input_model, InputModel::Accumulator);
    }

    #[test]
    fn test_sanitize_bounds_huge_values() {
        let parsed = Settings::from_json(
            r#"{ "tuning": { "paddle_impulse": 2147483647, "speed_step": 2147483647,
                 "speed_cap": 2147483647, "paddle_hit_tolerance": 2147483647,
                 "trail_length": 100000000000000 } }"#,
        )
        .unwrap();
        assert_eq!(parsed.tuning.paddle_impulse, ARENA.width);
        assert_eq!(parsed.tuning.speed_cap, ARENA.width);
        assert_eq!(parsed.tuning.speed_step, ARENA.width);
        assert_eq!(parsed.tuning.paddle_hit_tolerance, ARENA.height);
        assert_eq!(parsed.tuning.trail_length, MAX_TRAIL_LENGTH);
    }

    #[test]
    fn test_extreme_settings_play_without_panicking() {
        use crate::input::{InputEvent, Key, ScriptedInput};
        use crate::{FrameDriver, audio::AudioManager, driver::FramePacer};
        use crate::renderer::VertexRenderer;

        let mut settings = Settings::from_json(
            r#"{ "seed": 7, "tuning": { "paddle_impulse": 2147483647,
                 "speed_step": 2147483647, "hits_per_ramp": 1,
                 "trail_length": 100000000000000 } }"#,
        )
        .unwrap();
        settings.input_model = InputModel::Accumulator;

        let mut script = vec![vec![InputEvent::Press(Key::Right)]];
        script.extend(std::iter::repeat_n(Vec::new(), 300));
        let mut driver = FrameDriver::new(
            settings,
            ScriptedInput::new(script).quit_when_done(),
            VertexRenderer::default(),
            AudioManager::default(),
        )
        .with_pacer(FramePacer::new(std::time::Duration::ZERO));

        assert_eq!(driver.run(), 301);
        let state = driver.state();
        assert_eq!(state.paddle.rect.right(), ARENA.width);
        assert!(state.ball.vel.x.abs() <= ARENA.width);
        assert!(state.effects.trail.len() <= MAX_TRAIL_LENGTH);
    }
}
