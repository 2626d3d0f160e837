//! Ball integration and collision response
//!
//! `step_ball` has no side effects beyond the ball itself: it reports what
//! happened as events and leaves scoring, resets, sound and effects to the
//! caller.

use glam::IVec2;
use rand::Rng;

use super::geom::{Arena, Rect};
use super::state::{Ball, GameEvent};
use crate::clamp_speed_component;
use crate::settings::Tuning;

/// Outcome of one ball step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BallStep {
    pub events: Vec<GameEvent>,
    /// Velocity was (re)assigned this step
    pub launched: bool,
}

impl BallStep {
    pub fn contains(&self, event: GameEvent) -> bool {
        self.events.contains(&event)
    }
}

/// +1 or -1 with equal probability
pub fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    if rng.random_bool(0.5) { 1 } else { -1 }
}

/// Give the ball a diagonal launch velocity in a random quadrant
pub fn launch<R: Rng + ?Sized>(ball: &mut Ball, rng: &mut R, tuning: &Tuning) {
    let speed = clamp_speed_component(tuning.launch_speed, tuning.speed_cap);
    ball.vel = IVec2::new(speed * random_sign(rng), speed * random_sign(rng));
}

/// Advance the ball by one tick
///
/// `launch_due` is set while the round awaits launch or when the player asked
/// for a relaunch; a stationary ball is always relaunched.
pub fn step_ball<R: Rng + ?Sized>(
    ball: &mut Ball,
    paddle: &Rect,
    arena: Arena,
    launch_due: bool,
    rng: &mut R,
    tuning: &Tuning,
) -> BallStep {
    let mut step = BallStep::default();

    // Integrate first: a freshly launched ball starts moving next tick
    ball.rect.translate(ball.vel);

    if launch_due || ball.is_stationary() {
        launch(ball, rng, tuning);
        step.launched = true;
        log::debug!("Ball launched with velocity {:?}", ball.vel);
    }

    if paddle_deflect(ball, paddle, tuning) {
        step.events.push(GameEvent::PaddleHit);
    }

    // Top wall
    if ball.rect.top() <= 0 {
        ball.vel.y = -ball.vel.y;
        step.events.push(GameEvent::WallBounce);
    }

    // Side walls
    if ball.rect.left() <= 0 || ball.rect.right() >= arena.width {
        ball.vel.x = -ball.vel.x;
        step.events.push(GameEvent::WallBounce);
    }

    if ball.rect.bottom() > arena.height {
        step.events.push(GameEvent::Miss);
    }

    step
}

/// Bounce the ball off the paddle's top face. Returns true on a scoring hit.
///
/// Only a downward-moving ball whose bottom is within the tolerance band of
/// the paddle top counts; side and underside contacts pass through.
fn paddle_deflect(ball: &mut Ball, paddle: &Rect, tuning: &Tuning) -> bool {
    if !ball.rect.intersects(paddle) {
        return false;
    }
    if (ball.rect.bottom() - paddle.top()).abs() >= tuning.paddle_hit_tolerance || ball.vel.y <= 0 {
        return false;
    }

    ball.vel.y = -ball.vel.y;

    // Off-center hits angle the rebound toward that edge
    let offset = (ball.rect.center_x() - paddle.center_x()) as f32 / (paddle.w as f32 / 2.0);
    ball.vel.x += (offset * 2.0).round() as i32;

    ball.vel.x = clamp_speed_component(ball.vel.x, tuning.speed_cap);
    ball.vel.y = clamp_speed_component(ball.vel.y, tuning.speed_cap);

    // Lift clear of the paddle so the next tick can't hit again
    ball.rect.set_bottom(paddle.top() - 1);
    true
}
