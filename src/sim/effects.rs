//! Visual effect state: ball trail and hit flash
//!
//! Derived from simulation events and ball position; nothing here feeds back
//! into gameplay.

use std::collections::VecDeque;

use glam::IVec2;

use super::state::GameEvent;
use crate::settings::Settings;

/// Bounded history of ball centers (newest first)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailBuffer {
    points: VecDeque<IVec2>,
    capacity: usize,
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn newest(&self) -> Option<IVec2> {
        self.points.front().copied()
    }

    /// Newest first
    pub fn points(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.points.iter().copied()
    }

    /// Push a position, evicting the oldest when full
    pub fn push(&mut self, pos: IVec2) {
        self.points.push_front(pos);
        self.points.truncate(self.capacity);
    }

    /// Push only if the ball moved since the last recorded point
    pub fn record(&mut self, pos: IVec2) {
        if self.newest() != Some(pos) {
            self.push(pos);
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// Trail alpha for entry `idx` of a trail `len` long, fading linearly from
/// `start` (newest) to `end` (oldest). `None` when the trail is too short to
/// draw.
pub fn trail_alpha(idx: usize, len: usize, start: u8, end: u8) -> Option<u8> {
    if len <= 1 || idx >= len {
        return None;
    }
    let t = idx as f64 / (len - 1) as f64;
    let alpha = f64::from(start) + (f64::from(end) - f64::from(start)) * t;
    Some((alpha as i32).clamp(0, 255) as u8)
}

/// Countdown of frames the flash overlay stays up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlashTimer {
    remaining: u32,
}

impl FlashTimer {
    pub fn trigger(&mut self, frames: u32) {
        self.remaining = frames;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Consume one frame. Returns true if the overlay shows this frame.
    pub fn advance(&mut self) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
            true
        } else {
            false
        }
    }
}

/// Per-frame effect switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectOptions {
    pub trails: bool,
    pub flash: bool,
    pub flash_frames: u32,
}

impl EffectOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            trails: settings.trails,
            flash: settings.effective_flash(),
            flash_frames: settings.tuning.flash_frames,
        }
    }
}

/// All visual-only state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectsState {
    pub trail: TrailBuffer,
    pub flash: FlashTimer,
    flash_visible: bool,
}

impl EffectsState {
    pub fn new(trail_length: usize) -> Self {
        Self {
            trail: TrailBuffer::new(trail_length),
            flash: FlashTimer::default(),
            flash_visible: false,
        }
    }

    /// Whether the flash overlay should be drawn for the current frame
    pub fn flash_visible(&self) -> bool {
        self.flash_visible
    }

    /// Fold one tick's events and the ball's new center into the effects
    pub fn update(&mut self, events: &[GameEvent], ball_center: IVec2, opts: EffectOptions) {
        for event in events {
            match event {
                GameEvent::PaddleHit if opts.flash => self.flash.trigger(opts.flash_frames),
                GameEvent::Miss => self.trail.clear(),
                _ => {}
            }
        }

        if opts.trails {
            self.trail.record(ball_center);
        }

        self.flash_visible = self.flash.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTS: EffectOptions = EffectOptions {
        trails: true,
        flash: true,
        flash_frames: 8,
    };

    #[test]
    fn test_trail_is_newest_first_and_bounded() {
        let mut trail = TrailBuffer::new(3);
        for x in 0..5 {
            trail.push(IVec2::new(x, 0));
        }
        assert_eq!(trail.len(), 3);
        let xs: Vec<i32> = trail.points().map(|p| p.x).collect();
        assert_eq!(xs, vec![4, 3, 2]);
    }

    #[test]
    fn test_huge_trail_capacity_allocates_lazily() {
        let mut trail = TrailBuffer::new(usize::MAX);
        for i in 0..5 {
            trail.record(IVec2::new(i, i));
        }
        assert_eq!(trail.len(), 5);
        assert_eq!(trail.newest(), Some(IVec2::new(4, 4)));
    }

    #[test]
    fn test_trail_skips_unmoved_ball() {
        let mut trail = TrailBuffer::new(10);
        trail.record(IVec2::new(250, 250));
        trail.record(IVec2::new(250, 250));
        assert_eq!(trail.len(), 1);
        trail.record(IVec2::new(257, 243));
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn test_trail_alpha_endpoints() {
        assert_eq!(trail_alpha(0, 10, 18, 0), Some(18));
        assert_eq!(trail_alpha(9, 10, 18, 0), Some(0));
        assert_eq!(trail_alpha(1, 3, 18, 0), Some(9));
        // Fractional alphas truncate
        assert_eq!(trail_alpha(1, 5, 18, 0), Some(13));
    }

    #[test]
    fn test_trail_alpha_degenerate() {
        assert_eq!(trail_alpha(0, 1, 18, 0), None);
        assert_eq!(trail_alpha(0, 0, 18, 0), None);
        assert_eq!(trail_alpha(5, 3, 18, 0), None);
    }

    #[test]
    fn test_flash_runs_exact_frame_count() {
        let mut flash = FlashTimer::default();
        flash.trigger(8);
        let shown = (0..20).filter(|_| flash.advance()).count();
        assert_eq!(shown, 8);
        assert_eq!(flash.remaining(), 0);
    }

    #[test]
    fn test_update_paddle_hit_triggers_flash() {
        let mut fx = EffectsState::new(10);
        fx.update(&[GameEvent::PaddleHit], IVec2::new(1, 1), OPTS);
        assert!(fx.flash_visible());
        assert_eq!(fx.flash.remaining(), 7);

        for _ in 0..7 {
            fx.update(&[], IVec2::new(1, 1), OPTS);
            assert!(fx.flash_visible());
        }
        fx.update(&[], IVec2::new(1, 1), OPTS);
        assert!(!fx.flash_visible());
    }

    #[test]
    fn test_update_respects_toggles() {
        let mut fx = EffectsState::new(10);
        let off = EffectOptions {
            trails: false,
            flash: false,
            flash_frames: 8,
        };
        fx.update(&[GameEvent::PaddleHit], IVec2::new(5, 5), off);
        assert!(fx.trail.is_empty());
        assert!(!fx.flash_visible());
    }

    #[test]
    fn test_miss_clears_trail() {
        let mut fx = EffectsState::new(10);
        for y in 0..5 {
            fx.update(&[], IVec2::new(100, 400 + y), OPTS);
        }
        assert_eq!(fx.trail.len(), 5);
        fx.update(&[GameEvent::Miss], IVec2::new(250, 250), OPTS);
        assert_eq!(fx.trail.len(), 1);
        assert_eq!(fx.trail.newest(), Some(IVec2::new(250, 250)));
    }
}
