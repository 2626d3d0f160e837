//! Sound effects and background music
//!
//! The core never talks to an audio device. A platform `SoundLoader` turns
//! file names into playable `SoundCue`s; any sound that fails to load is
//! simply absent and its cue plays nothing.

use std::path::Path;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle (scores)
    PaddleHit,
    /// Ball hits top or side wall
    WallHit,
    /// Ball lost below the paddle
    Miss,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 3] = [SoundEffect::PaddleHit, SoundEffect::WallHit, SoundEffect::Miss];

    pub fn for_event(event: GameEvent) -> Self {
        match event {
            GameEvent::PaddleHit => SoundEffect::PaddleHit,
            GameEvent::WallBounce => SoundEffect::WallHit,
            GameEvent::Miss => SoundEffect::Miss,
        }
    }

    /// Sound file for this effect
    pub fn file_name(self) -> &'static str {
        match self {
            SoundEffect::PaddleHit => SND_HIT,
            SoundEffect::WallHit => SND_WALL,
            SoundEffect::Miss => SND_OUT,
        }
    }

    fn index(self) -> usize {
        match self {
            SoundEffect::PaddleHit => 0,
            SoundEffect::WallHit => 1,
            SoundEffect::Miss => 2,
        }
    }
}

/// A loaded, playable sound
pub trait SoundCue {
    /// Fire-and-forget playback at `volume` (0.0 - 1.0)
    fn play(&self, volume: f32);

    /// Start looping playback (music)
    fn play_looped(&self, volume: f32) {
        self.play(volume);
    }

    fn stop(&self) {}
}

/// Platform hook that loads sounds by file name
pub trait SoundLoader {
    /// `None` if the sound can't be loaded; the game carries on without it
    fn load(&mut self, path: &str) -> Option<Box<dyn SoundCue>>;
}

/// Loader for headless runs: sounds that exist on disk become cues that log
/// when played
#[derive(Debug, Clone, Default)]
pub struct LogSoundLoader;

struct LogCue {
    name: String,
}

impl SoundCue for LogCue {
    fn play(&self, volume: f32) {
        log::debug!("♪ {} (volume {:.2})", self.name, volume);
    }

    fn play_looped(&self, volume: f32) {
        log::info!("♪ looping {} (volume {:.2})", self.name, volume);
    }

    fn stop(&self) {
        log::info!("♪ stopped {}", self.name);
    }
}

impl SoundLoader for LogSoundLoader {
    fn load(&mut self, path: &str) -> Option<Box<dyn SoundCue>> {
        if !Path::new(path).is_file() {
            return None;
        }
        Some(Box::new(LogCue {
            name: path.to_string(),
        }))
    }
}

/// Audio manager for the game
pub struct AudioManager {
    cues: [Option<Box<dyn SoundCue>>; 3],
    music: Option<Box<dyn SoundCue>>,
    music_playing: bool,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    /// No sounds loaded; every cue is silent
    fn default() -> Self {
        Self {
            cues: [None, None, None],
            music: None,
            music_playing: false,
            master_volume: 1.0,
            sfx_volume: 1.0,
            music_volume: 0.5,
            muted: false,
        }
    }
}

impl std::fmt::Debug for AudioManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioManager")
            .field("loaded", &self.loaded_count())
            .field("music", &self.music.is_some())
            .field("music_playing", &self.music_playing)
            .field("muted", &self.muted)
            .finish()
    }
}

impl AudioManager {
    /// Load every effect (and music if enabled) through `loader`
    pub fn load(loader: &mut dyn SoundLoader, settings: &Settings) -> Self {
        let mut audio = Self {
            music_volume: settings.music_volume,
            ..Self::default()
        };
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);

        for effect in SoundEffect::ALL {
            let cue = loader.load(effect.file_name());
            if cue.is_none() {
                log::warn!("Sound {} not loaded - {:?} will be silent", effect.file_name(), effect);
            }
            audio.cues[effect.index()] = cue;
        }

        if settings.music {
            audio.music = loader.load(MUS_BG);
            if audio.music.is_none() {
                log::warn!("Music {} not loaded - playing without music", MUS_BG);
            }
        }

        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Number of effects that loaded
    pub fn loaded_count(&self) -> usize {
        self.cues.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_music_playing(&self) -> bool {
        self.music_playing
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect (silently does nothing if it isn't loaded)
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        if let Some(cue) = &self.cues[effect.index()] {
            cue.play(vol);
        }
    }

    /// Play the cue for each event, in order
    pub fn play_events(&self, events: &[GameEvent]) {
        for &event in events {
            self.play(SoundEffect::for_event(event));
        }
    }

    pub fn start_music(&mut self) {
        if self.music_playing || self.muted {
            return;
        }
        if let Some(music) = &self.music {
            music.play_looped(self.master_volume * self.music_volume);
            self.music_playing = true;
        }
    }

    pub fn stop_music(&mut self) {
        if !self.music_playing {
            return;
        }
        if let Some(music) = &self.music {
            music.stop();
        }
        self.music_playing = false;
    }
}
