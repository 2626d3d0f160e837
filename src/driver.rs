//! Fixed-rate frame loop
//!
//! One iteration = one input drain, one simulation tick, one render. The loop
//! sleeps out whatever is left of the frame budget and exits when the input
//! source reports `Quit` (or an optional frame limit is reached).

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crate::audio::AudioManager;
use crate::consts::STEPS_PER_SECOND;
use crate::input::{InputEvent, InputSource, Key};
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::{EffectOptions, GameState, TickInput, tick};

/// Whether the loop should keep going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Quit,
}

/// Seed from the wall clock, for runs without a configured seed
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Sleeps until the next frame boundary. A zero budget never sleeps.
#[derive(Debug, Clone)]
pub struct FramePacer {
    budget: Duration,
    next_frame: Instant,
}

impl FramePacer {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            next_frame: Instant::now() + budget,
        }
    }

    pub fn per_second(steps: u32) -> Self {
        Self::new(Duration::from_secs(1) / steps.max(1))
    }

    /// Block until the current frame's budget has elapsed
    pub fn wait(&mut self) {
        if self.budget.is_zero() {
            return;
        }
        let now = Instant::now();
        if self.next_frame > now {
            thread::sleep(self.next_frame - now);
            self.next_frame += self.budget;
        } else {
            // Running behind: don't try to catch up with a burst of frames
            self.next_frame = now + self.budget;
        }
    }
}

/// Owns the game state and every collaborator for the life of the loop
pub struct FrameDriver<I: InputSource, R: Renderer> {
    settings: Settings,
    state: GameState,
    effects: EffectOptions,
    input: I,
    renderer: R,
    audio: AudioManager,
    pacer: FramePacer,
    max_frames: Option<u64>,
    frames: u64,
}

impl<I: InputSource, R: Renderer> FrameDriver<I, R> {
    pub fn new(settings: Settings, input: I, renderer: R, audio: AudioManager) -> Self {
        let seed = settings.seed.unwrap_or_else(clock_seed);
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(seed, &settings),
            effects: EffectOptions::from_settings(&settings),
            settings,
            input,
            renderer,
            audio,
            pacer: FramePacer::per_second(STEPS_PER_SECOND),
            max_frames: None,
            frames: 0,
        }
    }

    /// Stop after `frames` frames even without a quit event
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    pub fn with_pacer(mut self, pacer: FramePacer) -> Self {
        self.pacer = pacer;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &AudioManager {
        &self.audio
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame: input, tick, audio, effects, render
    pub fn step(&mut self) -> StepOutcome {
        let events = self.input.poll(&self.state);
        if events.contains(&InputEvent::Quit) {
            return StepOutcome::Quit;
        }
        let input = self.apply_input(&events);

        let game_events = tick(&mut self.state, &input, &self.settings);
        self.audio.play_events(&game_events);
        self.state
            .effects
            .update(&game_events, self.state.ball.center(), self.effects);

        let snapshot = self.state.snapshot();
        if log::log_enabled!(log::Level::Trace)
            && let Ok(json) = serde_json::to_string(&snapshot)
        {
            log::trace!("{}", json);
        }
        self.renderer.render(&snapshot);
        self.frames += 1;

        StepOutcome::Continue
    }

    /// Feed key events to the paddle; returns the tick's one-shot commands
    fn apply_input(&mut self, events: &[InputEvent]) -> TickInput {
        let mut input = TickInput::default();
        for &event in events {
            match event {
                InputEvent::Press(Key::Launch) => input.launch = true,
                InputEvent::Press(key) => {
                    if let Some(dir) = key.direction() {
                        self.state.paddle.press(dir);
                    }
                }
                InputEvent::Release(key) => {
                    if let Some(dir) = key.direction() {
                        self.state.paddle.release(dir);
                    }
                }
                InputEvent::Quit => {}
            }
        }
        input
    }

    /// Loop until quit or the frame limit, then shut down. Returns frames run.
    pub fn run(&mut self) -> u64 {
        log::info!(
            "Running at {} steps/s ({} input)",
            STEPS_PER_SECOND,
            self.state.paddle.controls().model().as_str()
        );
        self.audio.start_music();

        loop {
            if self.max_frames.is_some_and(|max| self.frames >= max) {
                log::info!("Frame limit reached");
                break;
            }
            if self.step() == StepOutcome::Quit {
                log::info!("Quit requested");
                break;
            }
            self.pacer.wait();
        }

        self.shutdown();
        self.frames
    }

    fn shutdown(&mut self) {
        self.audio.stop_music();
        self.renderer.shutdown();
        log::info!(
            "Shut down after {} frames (best score {})",
            self.frames,
            self.state.round.best_score()
        );
    }
}
