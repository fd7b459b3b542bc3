use std::time::Duration;

/// Cubic ease-in-out over `t` in `[0, 1]`.
#[must_use]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Eased progress of a transition that started at `started_at`.
///
/// A zero duration completes immediately.
#[must_use]
pub fn transition_progress(started_at: Duration, duration: Duration, now: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_sub(started_at).as_secs_f64();
    ease_cubic_in_out(elapsed / duration.as_secs_f64())
}

#[must_use]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// One animated scalar with a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    started_at: Duration,
    duration: Duration,
}

impl Tween {
    /// A tween already settled at `value`.
    #[must_use]
    pub fn settled(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            started_at: Duration::ZERO,
            duration: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn new(from: f64, to: f64, started_at: Duration, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    /// Retargets from the value displayed at `now`.
    ///
    /// A non-finite displayed value snaps straight to the target.
    #[must_use]
    pub fn retarget(self, to: f64, now: Duration, duration: Duration) -> Self {
        let current = self.value_at(now);
        if current.is_finite() {
            Self::new(current, to, now, duration)
        } else {
            Self::settled(to)
        }
    }

    #[must_use]
    pub fn value_at(self, now: Duration) -> f64 {
        if self.from == self.to {
            return self.to;
        }
        lerp(
            self.from,
            self.to,
            transition_progress(self.started_at, self.duration, now),
        )
    }

    #[must_use]
    pub fn target(self) -> f64 {
        self.to
    }

    #[must_use]
    pub fn is_settled(self, now: Duration) -> bool {
        self.from == self.to || now >= self.started_at + self.duration
    }
}
