//! Entrance animation presets.
//!
//! A [`Motion`] describes where an element starts (opacity, offset, scale)
//! and how long it takes to settle. [`Motion::sample`] turns elapsed time into
//! a [`Frame`] the view can apply.

use std::time::Duration;

/// Cubic ease-out over `[0, 1]`.
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl Frame {
    pub const SETTLED: Frame = Frame {
        opacity: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub delay: Duration,
    pub duration: Duration,
    pub from_opacity: f32,
    pub from_x: f32,
    pub from_y: f32,
    pub from_scale: f32,
}

impl Motion {
    const fn base(duration_ms: u64) -> Self {
        Motion {
            delay: Duration::ZERO,
            duration: Duration::from_millis(duration_ms),
            from_opacity: 0.0,
            from_x: 0.0,
            from_y: 0.0,
            from_scale: 1.0,
        }
    }

    /// Staggered child of a section: rises 20 units while fading in.
    pub const fn item() -> Self {
        Motion {
            from_y: 20.0,
            ..Motion::base(500)
        }
    }

    pub const fn fade_in() -> Self {
        Motion::base(800)
    }

    pub const fn slide_in_from_left() -> Self {
        Motion {
            from_x: -50.0,
            ..Motion::base(600)
        }
    }

    pub const fn slide_in_from_right() -> Self {
        Motion {
            from_x: 50.0,
            ..Motion::base(600)
        }
    }

    pub const fn scale_up() -> Self {
        Motion {
            from_scale: 0.9,
            ..Motion::base(500)
        }
    }

    /// Navigation bar dropping in from above, fully opaque throughout.
    pub const fn nav_drop() -> Self {
        Motion {
            from_opacity: 1.0,
            from_y: -100.0,
            ..Motion::base(500)
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn end(&self) -> Duration {
        self.delay + self.duration
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.end()
    }

    /// Eased completion in `[0, 1]`.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = active.as_secs_f32() / self.duration.as_secs_f32();
        ease_out(t)
    }

    pub fn sample(&self, elapsed: Duration) -> Frame {
        self.frame_at(self.progress(elapsed))
    }

    fn frame_at(&self, progress: f32) -> Frame {
        let lerp = |from: f32, to: f32| from + (to - from) * progress;
        Frame {
            opacity: lerp(self.from_opacity, 1.0),
            offset_x: lerp(self.from_x, 0.0),
            offset_y: lerp(self.from_y, 0.0),
            scale: lerp(self.from_scale, 1.0),
        }
    }
}

/// Delays successive children of a container by a fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub step: Duration,
}

impl Stagger {
    pub const CONTAINER: Stagger = Stagger {
        step: Duration::from_millis(100),
    };

    pub fn child(&self, motion: Motion, index: usize) -> Motion {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        motion.delayed(motion.delay + self.step.saturating_mul(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_settles() {
        let m = Motion::item();
        let start = m.sample(Duration::ZERO);
        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.offset_y, 20.0);
        assert_eq!(m.sample(Duration::from_secs(1)), Frame::SETTLED);
    }

    #[test]
    fn delay_holds_initial_frame() {
        let m = Motion::slide_in_from_left().delayed(Duration::from_millis(200));
        let held = m.sample(Duration::from_millis(100));
        assert_eq!(held.offset_x, -50.0);
        assert!(!m.is_finished(Duration::from_millis(700)));
        assert!(m.is_finished(Duration::from_millis(800)));
    }

    #[test]
    fn stagger_offsets_children() {
        let third = Stagger::CONTAINER.child(Motion::item(), 2);
        assert_eq!(third.delay, Duration::from_millis(200));
        assert_eq!(third.end(), Duration::from_millis(700));
    }

    #[test]
    fn progress_is_clamped() {
        let m = Motion::fade_in();
        assert_eq!(m.progress(Duration::ZERO), 0.0);
        assert_eq!(m.progress(Duration::from_secs(5)), 1.0);
        assert_eq!(ease_out(0.5), 0.875);
    }

    #[test]
    fn nav_stays_opaque() {
        let m = Motion::nav_drop();
        assert_eq!(m.sample(Duration::ZERO).opacity, 1.0);
        assert_eq!(m.sample(Duration::ZERO).offset_y, -100.0);
    }
}
