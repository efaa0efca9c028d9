//! Longitude rate by symmetric finite difference.

use jyoti_frames::wrap_180;

/// One minute of time, in days.
pub const DEFAULT_SPEED_STEP_DAYS: f64 = 1.0 / 1440.0;

/// Speeds at or below this (deg/day) count as retrograde.
pub const RETROGRADE_THRESHOLD_DEG_PER_DAY: f64 = -1e-5;

/// `(after - before) / (2 step)`, with the difference wrapped across 0/360.
pub fn central_difference_speed(before_deg: f64, after_deg: f64, step_days: f64) -> f64 {
    wrap_180(after_deg - before_deg) / (2.0 * step_days)
}

pub fn is_retrograde(speed_deg_per_day: f64) -> bool {
    speed_deg_per_day <= RETROGRADE_THRESHOLD_DEG_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_band() {
        assert!(is_retrograde(-0.05));
        assert!(is_retrograde(-1e-5));
        assert!(!is_retrograde(-9e-6));
        assert!(!is_retrograde(0.0));
        assert!(!is_retrograde(0.0001));
    }

    #[test]
    fn wraps_through_zero() {
        let step = DEFAULT_SPEED_STEP_DAYS;
        let v = central_difference_speed(359.9995, 0.0005, step);
        assert!((v - 0.001 / (2.0 * step)).abs() < 1e-6, "v = {v}");
        let v = central_difference_speed(0.0005, 359.9995, step);
        assert!(v < 0.0);
    }
}
