use std::time::{Duration, Instant};

/// Per-frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds elapsed since the previous tick, clamped (see [`FrameClock`]).
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,
}

/// Monotonic clock producing clamped frame deltas.
///
/// Delta time is clamped into `[dt_min, dt_max]` so downstream animation
/// stays stable when the loop spins faster than the timer resolution or
/// stalls (debugger, minimized window).
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            dt_min,
            dt_max,
        }
    }

    /// Resets the baseline, e.g. after a surface reconfigure.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns the elapsed time since the last tick.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        FrameTime {
            dt: dt.as_secs_f32(),
            now,
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dt_is_clamped_below() {
        let mut clock = FrameClock::new();
        // Two immediate ticks elapse less than dt_min.
        clock.tick();
        let ft = clock.tick();
        assert!(ft.dt >= 0.0001);
    }

    #[test]
    fn dt_is_clamped_above() {
        let mut clock = FrameClock::with_clamps(Duration::ZERO, Duration::from_millis(10));
        clock.last = Instant::now() - Duration::from_secs(5);
        let ft = clock.tick();
        assert!(ft.dt <= 0.010001);
    }

    #[test]
    fn reset_moves_baseline_forward() {
        let mut clock = FrameClock::with_clamps(Duration::ZERO, Duration::from_secs(60));
        clock.last = Instant::now() - Duration::from_secs(5);
        clock.reset();
        let ft = clock.tick();
        assert!(ft.dt < 1.0);
    }
}
