//! Input events and sources
//!
//! The frame driver drains one batch of events per tick from an
//! `InputSource`. Platform backends (window events, gamepads) implement the
//! trait; two sources ship with the crate:
//! - `ScriptedInput`: fixed per-frame batches, for tests and replays
//! - `Autopilot`: tracks the ball for headless demo runs

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::sim::{Direction, GameState};

/// Logical keys the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Launch,
}

impl Key {
    /// Paddle direction this key drives, if any
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Launch => None,
        }
    }
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Press(Key),
    Release(Key),
    /// Window closed / quit requested
    Quit,
}

/// Something that produces input events once per frame
pub trait InputSource {
    /// Drain events queued since the last call, oldest first
    fn poll(&mut self, state: &GameState) -> Vec<InputEvent>;
}

/// Replays a fixed list of per-frame event batches
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
    /// Emit `Quit` once the script runs out
    quit_when_done: bool,
}

impl ScriptedInput {
    pub fn new(frames: Vec<Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into(),
            quit_when_done: false,
        }
    }

    pub fn quit_when_done(mut self) -> Self {
        self.quit_when_done = true;
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) -> Vec<InputEvent> {
        match self.frames.pop_front() {
            Some(events) => events,
            None if self.quit_when_done => vec![InputEvent::Quit],
            None => Vec::new(),
        }
    }
}

/// Demo player that steers the paddle under the ball
#[derive(Debug, Clone)]
pub struct Autopilot {
    held: Option<Direction>,
    /// Don't move while the target is this close to the paddle center
    deadzone: i32,
    /// Frames of ball velocity to lead the target by
    lead_frames: i32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            held: None,
            deadzone: 8,
            lead_frames: 4,
        }
    }
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direction the paddle should move to meet the ball
    fn desired(&self, state: &GameState) -> Option<Direction> {
        let ball = &state.ball;
        // Oscillating aim offset so rallies don't repeat exactly
        let time_factor = state.time_ticks as f32 * 0.01;
        let offset = (time_factor.sin() * 30.0 + (time_factor * 0.7).sin() * 15.0) as i32;
        let target = ball.rect.center_x() + ball.vel.x * self.lead_frames + offset;
        let paddle_center = state.paddle.rect.center_x();

        if target < paddle_center - self.deadzone {
            Some(Direction::Left)
        } else if target > paddle_center + self.deadzone {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

fn direction_key(dir: Direction) -> Key {
    match dir {
        Direction::Left => Key::Left,
        Direction::Right => Key::Right,
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> Vec<InputEvent> {
        let desired = self.desired(state);
        if desired == self.held {
            return Vec::new();
        }

        // Paired press/release so either input model tracks correctly
        let mut events = Vec::with_capacity(2);
        if let Some(dir) = self.held {
            events.push(InputEvent::Release(direction_key(dir)));
        }
        if let Some(dir) = desired {
            events.push(InputEvent::Press(direction_key(dir)));
        }
        self.held = desired;
        events
    }
}
