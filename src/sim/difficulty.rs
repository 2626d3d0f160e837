//! Progressive speed-up driven by paddle hits

use glam::IVec2;

use crate::clamp_speed_component;
use crate::settings::Tuning;

/// Every `hits_per_ramp` hits, both speed components grow by `speed_step`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyRamp {
    pub hits_per_ramp: u32,
    pub speed_step: i32,
    pub speed_cap: i32,
}

impl DifficultyRamp {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            hits_per_ramp: tuning.hits_per_ramp.max(1),
            speed_step: tuning.speed_step,
            speed_cap: tuning.speed_cap,
        }
    }

    /// Whether the hit that brought the counter to `hit_counter` triggers a ramp
    pub fn is_due(&self, hit_counter: u32) -> bool {
        hit_counter > 0 && hit_counter % self.hits_per_ramp == 0
    }

    /// Faster velocity in the same direction, each component capped.
    ///
    /// A stationary ball is left alone. A zero component on a moving ball has
    /// no sign to keep and picks up speed leftward/upward.
    pub fn ramp_up(&self, vel: IVec2) -> IVec2 {
        if vel == IVec2::ZERO {
            return vel;
        }
        let bump = |v: i32| {
            let magnitude = v.saturating_abs().saturating_add(self.speed_step);
            clamp_speed_component(if v > 0 { magnitude } else { -magnitude }, self.speed_cap)
        };
        IVec2::new(bump(vel.x), bump(vel.y))
    }

    /// Apply the ramp if this hit count calls for it. Returns true if it ran.
    pub fn on_hit(&self, hit_counter: u32, vel: &mut IVec2) -> bool {
        if !self.is_due(hit_counter) || *vel == IVec2::ZERO {
            return false;
        }
        *vel = self.ramp_up(*vel);
        log::debug!("Difficulty ramp at {} hits: velocity now {:?}", hit_counter, vel);
        true
    }
}

impl Default for DifficultyRamp {
    fn default() -> Self {
        Self::from_tuning(&Tuning::default())
    }
}
