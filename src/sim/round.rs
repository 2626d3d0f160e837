//! Score and round lifecycle

use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyRamp;
use super::geom::Arena;
use super::state::{Ball, GameEvent};

/// Where the current round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Ball is parked at the center; the next tick launches it
    AwaitingLaunch,
    /// Ball is in motion
    InPlay,
}

/// Owns the score, the hit counter and the round state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundManager {
    score: u32,
    hit_counter: u32,
    state: RoundState,
    /// Best score this session (not persisted)
    best_score: u32,
    rounds_played: u32,
}

impl Default for RoundManager {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundManager {
    pub fn new() -> Self {
        Self {
            score: 0,
            hit_counter: 0,
            state: RoundState::AwaitingLaunch,
            best_score: 0,
            rounds_played: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hit_counter(&self) -> u32 {
        self.hit_counter
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn is_awaiting_launch(&self) -> bool {
        self.state == RoundState::AwaitingLaunch
    }

    /// AwaitingLaunch -> InPlay (no-op when already in play)
    pub fn begin_play(&mut self) {
        if self.state == RoundState::AwaitingLaunch {
            self.state = RoundState::InPlay;
        }
    }

    /// React to one simulation event. Wall bounces don't concern the round.
    pub fn handle(
        &mut self,
        event: GameEvent,
        ball: &mut Ball,
        arena: Arena,
        ramp: Option<&DifficultyRamp>,
    ) {
        match event {
            GameEvent::PaddleHit => self.on_paddle_hit(ball, ramp),
            GameEvent::Miss => self.on_miss(ball, arena),
            GameEvent::WallBounce => {}
        }
    }

    /// Score a hit and ramp the ball speed if it's due
    pub fn on_paddle_hit(&mut self, ball: &mut Ball, ramp: Option<&DifficultyRamp>) {
        self.score += 1;
        self.hit_counter += 1;
        self.best_score = self.best_score.max(self.score);

        if let Some(ramp) = ramp {
            ramp.on_hit(self.hit_counter, &mut ball.vel);
        }
    }

    /// Ball escaped: park it at the center and start over from zero
    pub fn on_miss(&mut self, ball: &mut Ball, arena: Arena) {
        log::info!(
            "Round {} over with score {} (best {})",
            self.rounds_played + 1,
            self.score,
            self.best_score
        );
        ball.reset(arena);
        self.score = 0;
        self.hit_counter = 0;
        self.state = RoundState::AwaitingLaunch;
        self.rounds_played += 1;
    }
}
