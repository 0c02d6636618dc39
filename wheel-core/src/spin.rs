use std::f64::consts::TAU;

use rand::Rng;

/// Extra full turns added to every spin so the deceleration reads as real
/// and the stopping point decouples from the starting point.
pub const MIN_EXTRA_TURNS: f64 = 5.0;
pub const MAX_EXTRA_TURNS: f64 = 10.0;

/// Lifecycle of a single spin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinPhase {
    #[default]
    Idle,
    Spinning,
    /// Motion has stopped; the winner has not been reported yet.
    Resolving,
}

/// What a `tick` call observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Not spinning; nothing to advance.
    Idle,
    /// Still decelerating; schedule another frame.
    Animating,
    /// This tick brought the rotation to its target. Reported exactly once
    /// per spin; the caller resolves the winner and then calls `settle`.
    Finished,
}

/// Rotation state advanced by timestamped ticks. Timestamps are milliseconds
/// from any monotonic source (`performance.now()` in the browser, plain
/// numbers in tests); only differences matter.
#[derive(Clone, Debug, Default)]
pub struct SpinState {
    rotation: f64,
    phase: SpinPhase,
    start_rotation: f64,
    target_rotation: f64,
    start_time_ms: f64,
    duration_ms: f64,
}

/// Cubic ease-out: fast start, smooth asymptotic stop, no overshoot.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

impl SpinState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rotation in radians. Unbounded; grows monotonically while a
    /// spin is in flight.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }

    /// Where the current (or last) spin will stop.
    pub fn target_rotation(&self) -> f64 {
        self.target_rotation
    }

    /// Start a spin. Rejected with `false` unless idle; the rejected call
    /// leaves the state untouched.
    pub fn begin<R: Rng + ?Sized>(&mut self, duration_s: f64, now_ms: f64, rng: &mut R) -> bool {
        if self.phase != SpinPhase::Idle {
            return false;
        }
        let extra_turns = rng.gen_range(MIN_EXTRA_TURNS..MAX_EXTRA_TURNS);
        let final_offset = rng.gen_range(0.0..TAU);
        self.start_rotation = self.rotation;
        self.target_rotation = self.rotation + extra_turns * TAU + final_offset;
        self.start_time_ms = now_ms;
        self.duration_ms = duration_s * 1000.0;
        self.phase = SpinPhase::Spinning;
        true
    }

    /// Advance the animation to `now_ms`. On the tick where progress reaches
    /// 1 the rotation snaps to the exact target (eliminating accumulated
    /// float drift) and `Tick::Finished` is returned.
    pub fn tick(&mut self, now_ms: f64) -> Tick {
        if self.phase != SpinPhase::Spinning {
            return Tick::Idle;
        }
        let progress = ((now_ms - self.start_time_ms) / self.duration_ms).clamp(0.0, 1.0);
        if progress < 1.0 {
            let eased = ease_out_cubic(progress);
            self.rotation = self.start_rotation + (self.target_rotation - self.start_rotation) * eased;
            Tick::Animating
        } else {
            self.rotation = self.target_rotation;
            self.phase = SpinPhase::Resolving;
            Tick::Finished
        }
    }

    /// Return to idle once the winner has been reported.
    pub fn settle(&mut self) {
        if self.phase == SpinPhase::Resolving {
            self.phase = SpinPhase::Idle;
        }
    }
}
