/// Rotation rate of the animated model.
///
/// Equivalent to a 0.1-degree increment applied at 60 Hz, but expressed
/// against real elapsed time so the speed does not depend on the frame rate.
pub const DEGREES_PER_SECOND: f32 = 6.0;

/// Advances the rotation angle by `dt` seconds of animation.
///
/// The result is wrapped into `[0, 360)` so the angle stays well-conditioned
/// no matter how long the loop runs.
pub fn next_rotation(current_degrees: f32, dt_seconds: f32) -> f32 {
    (current_degrees + DEGREES_PER_SECOND * dt_seconds).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn zero_elapsed_time_leaves_rotation_unchanged() {
        assert_eq!(next_rotation(42.0, 0.0), 42.0);
    }

    #[test]
    fn one_second_advances_six_degrees() {
        assert!((next_rotation(10.0, 1.0) - 16.0).abs() < EPS);
    }

    #[test]
    fn rotation_wraps_at_full_revolution() {
        let r = next_rotation(359.0, 1.0);
        assert!((r - 5.0).abs() < EPS);
        assert!((0.0..360.0).contains(&r));
    }

    #[test]
    fn rate_is_independent_of_tick_granularity() {
        let mut fine = 0.0;
        for _ in 0..60 {
            fine = next_rotation(fine, 1.0 / 60.0);
        }
        let coarse = next_rotation(0.0, 1.0);
        assert!((fine - coarse).abs() < EPS);
    }
}
