//! Fixed timestep simulation tick
//!
//! Advances ball, round and paddle by one frame, in that order.

use super::ball::step_ball;
use super::difficulty::DifficultyRamp;
use super::state::{GameEvent, GameState};
use crate::settings::Settings;

/// One-shot commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Relaunch the ball (space)
    pub launch: bool,
}

/// Advance the game state by one fixed timestep
///
/// Paddle key state is applied to `state.paddle` before calling. Returns the
/// events that happened, in order, for audio and effects.
pub fn tick(state: &mut GameState, input: &TickInput, settings: &Settings) -> Vec<GameEvent> {
    state.time_ticks += 1;

    let launch_due = input.launch || state.round.is_awaiting_launch();
    let step = step_ball(
        &mut state.ball,
        &state.paddle.rect,
        state.arena,
        launch_due,
        &mut state.rng,
        &settings.tuning,
    );
    if step.launched {
        state.round.begin_play();
    }

    let ramp = settings
        .difficulty_ramp
        .then(|| DifficultyRamp::from_tuning(&settings.tuning));
    for &event in &step.events {
        state
            .round
            .handle(event, &mut state.ball, state.arena, ramp.as_ref());
    }

    state.paddle.step(state.arena);

    step.events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::InputModel;
    use crate::sim::effects::EffectOptions;
    use crate::sim::paddle::Direction;
    use crate::sim::round::RoundState;
    use glam::IVec2;
    use proptest::prelude::*;

    /// Put the ball where integrating `vel` lands it dead center on the
    /// paddle, 4px into its top face
    fn aim_at_paddle(state: &mut GameState, vel: IVec2) {
        let paddle = state.paddle.rect;
        state.ball.rect.set_center(IVec2::new(paddle.center_x(), 0));
        state.ball.rect.set_bottom(paddle.top() + 4);
        state.ball.rect.translate(-vel);
        state.ball.vel = vel;
    }

    fn launched_state(settings: &Settings) -> GameState {
        let mut state = GameState::new(12345, settings);
        tick(&mut state, &TickInput::default(), settings);
        state
    }

    #[test]
    fn test_tick_launches_resting_ball() {
        let settings = Settings::default();
        let mut state = GameState::new(12345, &settings);
        assert_eq!(state.ball.center(), IVec2::new(250, 250));
        assert!(state.ball.is_stationary());
        assert_eq!(state.round.state(), RoundState::AwaitingLaunch);

        tick(&mut state, &TickInput::default(), &settings);

        assert_eq!(state.ball.vel.x.abs(), 7);
        assert_eq!(state.ball.vel.y.abs(), 7);
        assert_eq!(state.round.state(), RoundState::InPlay);
    }

    #[test]
    fn test_ball_keeps_velocity_once_in_play() {
        let settings = Settings::default();
        let mut state = launched_state(&settings);
        let vel = state.ball.vel;
        let before = state.ball.center();

        tick(&mut state, &TickInput::default(), &settings);

        assert_eq!(state.ball.vel, vel);
        assert_eq!(state.ball.center(), before + vel);
    }

    #[test]
    fn test_dead_center_hit_scores() {
        let settings = Settings::default();
        let mut state = launched_state(&settings);
        aim_at_paddle(&mut state, IVec2::new(7, 7));

        let events = tick(&mut state, &TickInput::default(), &settings);

        assert_eq!(events, vec![GameEvent::PaddleHit]);
        assert_eq!(state.ball.vel, IVec2::new(7, -7));
        assert_eq!(state.round.score(), 1);
        assert_eq!(state.round.hit_counter(), 1);
    }

    #[test]
    fn test_miss_resets_round() {
        let settings = Settings::default();
        let mut state = launched_state(&settings);
        aim_at_paddle(&mut state, IVec2::new(7, 7));
        tick(&mut state, &TickInput::default(), &settings);
        assert_eq!(state.round.score(), 1);

        // Far from the paddle, bottom lands at 505
        state.ball.rect.x = 20;
        state.ball.rect.set_bottom(498);
        state.ball.vel = IVec2::new(-2, 7);
        let events = tick(&mut state, &TickInput::default(), &settings);

        assert!(events.contains(&GameEvent::Miss));
        assert_eq!(state.round.score(), 0);
        assert_eq!(state.round.hit_counter(), 0);
        assert_eq!(state.ball.vel, IVec2::ZERO);
        assert_eq!(state.ball.center(), ARENA.center());
        assert_eq!(state.round.state(), RoundState::AwaitingLaunch);

        // Next tick relaunches from the center
        tick(&mut state, &TickInput::default(), &settings);
        assert_eq!(state.round.state(), RoundState::InPlay);
        assert_eq!(state.ball.center(), ARENA.center());
        assert_eq!(state.ball.vel.x.abs(), LAUNCH_SPEED);
    }

    #[test]
    fn test_third_hit_ramps_speed() {
        let settings = Settings::default();
        let mut state = launched_state(&settings);

        for _ in 0..2 {
            aim_at_paddle(&mut state, IVec2::new(7, 7));
            tick(&mut state, &TickInput::default(), &settings);
            assert_eq!(state.ball.vel, IVec2::new(7, -7));
        }
        aim_at_paddle(&mut state, IVec2::new(7, 7));
        tick(&mut state, &TickInput::default(), &settings);

        assert_eq!(state.round.hit_counter(), 3);
        assert_eq!(state.ball.vel, IVec2::new(8, -8));
    }

    #[test]
    fn test_ramp_can_be_disabled() {
        let settings = Settings {
            difficulty_ramp: false,
            ..Settings::default()
        };
        let mut state = launched_state(&settings);
        for _ in 0..3 {
            aim_at_paddle(&mut state, IVec2::new(7, 7));
            tick(&mut state, &TickInput::default(), &settings);
        }
        assert_eq!(state.round.score(), 3);
        assert_eq!(state.ball.vel, IVec2::new(7, -7));
    }

    #[test]
    fn test_manual_launch_relaunches_mid_play() {
        let settings = Settings::default();
        let mut state = launched_state(&settings);
        state.ball.vel = IVec2::new(12, -3);

        let launch = TickInput { launch: true };
        tick(&mut state, &launch, &settings);

        assert_eq!(state.ball.vel.x.abs(), 7);
        assert_eq!(state.ball.vel.y.abs(), 7);
        assert_eq!(state.round.state(), RoundState::InPlay);
    }

    #[test]
    fn test_held_key_moves_paddle() {
        let settings = Settings::default();
        let mut state = launched_state(&settings);
        state.paddle.press(Direction::Left);

        tick(&mut state, &TickInput::default(), &settings);
        assert_eq!(state.paddle.rect.x, 144);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let settings = Settings::default();
        let mut state1 = GameState::new(99999, &settings);
        let mut state2 = GameState::new(99999, &settings);

        for i in 0..600 {
            let input = TickInput {
                launch: i % 97 == 0,
            };
            let e1 = tick(&mut state1, &input, &settings);
            let e2 = tick(&mut state2, &input, &settings);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.round, state2.round);
    }

    fn apply_action(state: &mut GameState, action: u8) -> TickInput {
        match action {
            1 => state.paddle.press(Direction::Left),
            2 => state.paddle.release(Direction::Left),
            3 => state.paddle.press(Direction::Right),
            4 => state.paddle.release(Direction::Right),
            5 => return TickInput { launch: true },
            _ => {}
        }
        TickInput::default()
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_every_tick(
            seed in any::<u64>(),
            accumulator in any::<bool>(),
            actions in proptest::collection::vec(0u8..8, 1..600),
        ) {
            let settings = Settings {
                input_model: if accumulator { InputModel::Accumulator } else { InputModel::HeldKeys },
                ..Settings::default()
            };
            let opts = EffectOptions::from_settings(&settings);
            let mut state = GameState::new(seed, &settings);

            for action in actions {
                let input = apply_action(&mut state, action);
                let score_before = state.round.score();

                let events = tick(&mut state, &input, &settings);
                state.effects.update(&events, state.ball.center(), opts);

                // Velocity cap
                prop_assert!(state.ball.vel.x.abs() <= SPEED_CAP);
                prop_assert!(state.ball.vel.y.abs() <= SPEED_CAP);

                // Paddle containment
                prop_assert!(state.paddle.rect.left() >= 0);
                prop_assert!(state.paddle.rect.right() <= ARENA.width);

                // Score moves only by +1 on a hit or to 0 on a miss
                let score = state.round.score();
                if events.contains(&GameEvent::Miss) {
                    prop_assert_eq!(score, 0);
                    prop_assert!(state.ball.is_stationary());
                    prop_assert_eq!(state.ball.center(), ARENA.center());
                } else if events.contains(&GameEvent::PaddleHit) {
                    prop_assert_eq!(score, score_before + 1);
                } else {
                    prop_assert_eq!(score, score_before);
                }

                // Trail bound
                prop_assert!(state.effects.trail.len() <= TRAIL_LENGTH);
            }
        }
    }
}
