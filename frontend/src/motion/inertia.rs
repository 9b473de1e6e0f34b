//! Scroll-driven inertial rotation for the navbar logo glyph.
//!
//! While the page scrolls the rotation follows the scroll delta directly.
//! Once scrolling has been quiet for [`DEBOUNCE_MS`] the last velocity
//! keeps turning the glyph and bleeds off with exponential friction until
//! it drops to [`REST_VELOCITY`].
//!
//! The controller never reads a clock itself; callers pass timestamps in
//! milliseconds, which keeps it deterministic under test.

/// Scroll offset past which the navbar switches to its solid background.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
/// Quiet period after the last scroll event before decay starts.
pub const DEBOUNCE_MS: u32 = 50;
/// Velocity multiplier per 1/60s.
pub const FRICTION: f64 = 0.92;
pub const REFERENCE_FPS: f64 = 60.0;
/// Velocity per pixel of scroll delta.
pub const VELOCITY_GAIN: f64 = 2.0;
/// Degrees of rotation applied immediately per pixel of scroll delta.
pub const DIRECT_GAIN: f64 = 0.5;
pub const REST_VELOCITY: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Tracking,
    Decaying,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollUpdate {
    pub is_scrolled: bool,
    pub rotation: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Moving(f64),
    Settled(f64),
}

impl Step {
    pub fn rotation(&self) -> f64 {
        match *self {
            Step::Moving(r) | Step::Settled(r) => r,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScrollInertia {
    last_scroll_y: f64,
    velocity: f64,
    rotation: f64,
    last_time_ms: f64,
    phase: Phase,
}

impl ScrollInertia {
    pub fn new(initial_scroll_y: f64) -> Self {
        Self {
            last_scroll_y: initial_scroll_y,
            velocity: 0.0,
            rotation: 0.0,
            last_time_ms: 0.0,
            phase: Phase::Idle,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Feeds an absolute scroll position, as read from the window.
    pub fn on_scroll(&mut self, scroll_y: f64) -> ScrollUpdate {
        let delta = scroll_y - self.last_scroll_y;
        self.last_scroll_y = scroll_y;
        let rotation = self.on_scroll_delta(delta);
        ScrollUpdate {
            is_scrolled: scroll_y > SCROLLED_THRESHOLD_PX,
            rotation,
        }
    }

    /// Velocity is overwritten, never blended, so a reversal takes effect
    /// at once while rotation keeps accumulating from where it was.
    pub fn on_scroll_delta(&mut self, delta: f64) -> f64 {
        self.velocity = delta * VELOCITY_GAIN;
        self.rotation += delta * DIRECT_GAIN;
        self.phase = Phase::Tracking;
        self.rotation
    }

    pub fn begin_decay(&mut self, now_ms: f64) {
        self.last_time_ms = now_ms;
        self.phase = Phase::Decaying;
    }

    /// Advances one animation frame. Decay is scaled by elapsed time so the
    /// glyph slows at the same rate whatever the frame rate.
    pub fn tick(&mut self, now_ms: f64) -> Step {
        if self.phase != Phase::Decaying {
            return Step::Settled(self.rotation);
        }

        let elapsed = ((now_ms - self.last_time_ms) / 1000.0).max(0.0);
        self.last_time_ms = now_ms;

        let frames = elapsed * REFERENCE_FPS;
        self.velocity *= FRICTION.powf(frames);
        self.rotation += self.velocity * frames;

        if self.velocity.abs() > REST_VELOCITY {
            Step::Moving(self.rotation)
        } else {
            self.velocity = 0.0;
            self.phase = Phase::Idle;
            Step::Settled(self.rotation)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn run_until_settled(inertia: &mut ScrollInertia, start_ms: f64, frame_ms: f64, max_frames: usize) -> (usize, Vec<f64>) {
        inertia.begin_decay(start_ms);
        let mut seen = Vec::new();
        for n in 1..=max_frames {
            match inertia.tick(start_ms + n as f64 * frame_ms) {
                Step::Moving(r) => seen.push(r),
                Step::Settled(r) => {
                    seen.push(r);
                    return (n, seen);
                }
            }
        }
        panic!("inertia did not settle within {max_frames} frames");
    }

    #[test]
    fn scroll_sets_velocity_and_rotation_directly() {
        let mut inertia = ScrollInertia::new(0.0);
        let update = inertia.on_scroll(40.0);
        assert_eq!(update.rotation, 20.0);
        assert!(!update.is_scrolled);
        assert_eq!(inertia.velocity(), 80.0);
        assert_eq!(inertia.phase(), Phase::Tracking);
    }

    #[test]
    fn scrolled_flag_flips_past_threshold() {
        let mut inertia = ScrollInertia::new(0.0);
        assert!(!inertia.on_scroll(50.0).is_scrolled);
        assert!(inertia.on_scroll(51.0).is_scrolled);
        assert!(!inertia.on_scroll(10.0).is_scrolled);
    }

    #[test]
    fn direction_reversal_does_not_snap() {
        let mut inertia = ScrollInertia::new(0.0);
        inertia.on_scroll(100.0);
        let before = inertia.rotation();
        let after = inertia.on_scroll(90.0).rotation;
        assert_eq!(after, before - 5.0);
        assert_eq!(inertia.velocity(), -20.0);
    }

    #[test]
    fn decay_settles_within_bounded_frames() {
        let mut inertia = ScrollInertia::new(0.0);
        for y in [30.0, 80.0, 150.0, 250.0] {
            inertia.on_scroll(y);
        }
        let (frames, rotations) = run_until_settled(&mut inertia, 1_000.0, FRAME_MS, 500);
        // |v0| = 200; 0.92^n < 0.1 / 200 needs about 92 frames at 60fps
        assert!(frames <= 100, "took {frames} frames");
        assert_eq!(inertia.velocity(), 0.0);
        assert_eq!(inertia.phase(), Phase::Idle);

        // forward scroll keeps turning forward, monotonically
        assert!(rotations.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn rotation_stays_put_after_settling() {
        let mut inertia = ScrollInertia::new(0.0);
        inertia.on_scroll(-60.0);
        let (_, rotations) = run_until_settled(&mut inertia, 0.0, FRAME_MS, 500);
        let settled = *rotations.last().unwrap();
        assert!(settled < 0.0);
        for n in 1..20 {
            assert_eq!(inertia.tick(10_000.0 + n as f64 * FRAME_MS), Step::Settled(settled));
        }
    }

    #[test]
    fn decay_rate_is_frame_rate_independent() {
        let mut fast = ScrollInertia::new(0.0);
        let mut slow = ScrollInertia::new(0.0);
        fast.on_scroll_delta(10.0);
        slow.on_scroll_delta(10.0);
        fast.begin_decay(0.0);
        slow.begin_decay(0.0);
        for n in 1..=6 {
            fast.tick(n as f64 * FRAME_MS);
        }
        for n in 1..=3 {
            slow.tick(n as f64 * 2.0 * FRAME_MS);
        }
        assert!((fast.velocity() - slow.velocity()).abs() < 1e-9);
    }

    #[test]
    fn new_scroll_interrupts_decay() {
        let mut inertia = ScrollInertia::new(0.0);
        inertia.on_scroll(100.0);
        inertia.begin_decay(0.0);
        inertia.tick(FRAME_MS);
        inertia.on_scroll(95.0);
        assert_eq!(inertia.phase(), Phase::Tracking);
        assert_eq!(inertia.velocity(), -10.0);
        // ticks are ignored until the debounce restarts decay
        let r = inertia.rotation();
        assert_eq!(inertia.tick(2.0 * FRAME_MS), Step::Settled(r));
    }

    #[test]
    fn tiny_velocity_settles_on_first_frame() {
        let mut inertia = ScrollInertia::new(0.0);
        inertia.on_scroll_delta(0.04);
        inertia.begin_decay(0.0);
        assert!(matches!(inertia.tick(FRAME_MS), Step::Settled(_)));
    }

    #[test]
    fn clock_going_backwards_does_not_reverse_motion() {
        let mut inertia = ScrollInertia::new(0.0);
        inertia.on_scroll_delta(50.0);
        inertia.begin_decay(1_000.0);
        let before = inertia.rotation();
        let step = inertia.tick(900.0);
        assert_eq!(step.rotation(), before);
        assert_eq!(inertia.velocity(), 100.0);
    }

    #[test]
    fn frame_stamped_before_decay_start_keeps_coasting() {
        // rAF timestamps mark the start of the frame, which can precede the
        // moment the debounce timer fired.
        let mut inertia = ScrollInertia::new(0.0);
        inertia.on_scroll_delta(20.0);
        inertia.begin_decay(1_003.25);
        assert_eq!(inertia.tick(1_000.0), Step::Moving(10.0));
        assert_eq!(inertia.velocity(), 40.0);

        let (frames, _) = run_until_settled(&mut inertia, 1_000.0, FRAME_MS, 500);
        assert!(frames < 500);
        assert_eq!(inertia.phase(), Phase::Idle);
    }
}
