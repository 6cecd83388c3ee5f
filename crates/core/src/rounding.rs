//! Output rounding used by every derived view.
//!
//! `f64::round` rounds half away from zero, which is the policy for all
//! published figures.

/// Round to the nearest integer.
///
/// The cast saturates at the `i64` bounds and maps NaN to 0. Store validation
/// keeps every price finite, so totals stay well inside the range.
pub fn round_whole(value: f64) -> i64 {
    debug_assert!(value.is_finite(), "round_whole on non-finite {value}");
    value.round() as i64
}

/// Round to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// `part / total * 100`, or 0.0 when `total` is zero.
pub fn percent_of(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part / total * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_whole(2.5), 3);
        assert_eq!(round_whole(-2.5), -3);
        assert_eq!(round_to(0.25, 1), 0.3);
        assert_eq!(round_to(-0.25, 1), -0.3);
    }

    #[test]
    fn round_whole_saturates_past_i64_range() {
        assert_eq!(round_whole(1e20), i64::MAX);
        assert_eq!(round_whole(-1e20), i64::MIN);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-finite")]
    fn round_whole_asserts_finite_in_debug() {
        round_whole(f64::NAN);
    }

    #[test]
    fn percent_of_zero_total_is_zero() {
        assert_eq!(percent_of(10.0, 0.0), 0.0);
        assert_eq!(percent_of(0.0, 0.0), 0.0);
    }

    #[test]
    fn percent_of_regular_total() {
        assert_eq!(percent_of(25.0, 200.0), 12.5);
    }
}
