//! Score display helpers

/// Round a score for display: `87.0` → `"87"`, `72.5` → `"73"`.
///
/// Non-finite values display as `"0"`.
pub fn format_score(score: f64) -> String {
    if !score.is_finite() {
        return "0".to_string();
    }
    // f64::round rounds half away from zero, and `as i64` keeps "-0" from appearing
    format!("{}", score.round() as i64)
}

/// Score as a percentage label, e.g. `"87%"`
pub fn format_percent(score: f64) -> String {
    format!("{}%", format_score(score))
}

/// Ratio in 0.0..=1.0 for gauge widgets; the printed number stays unclamped
pub fn gauge_ratio(score: f64, max: f64) -> f64 {
    if !score.is_finite() || max <= 0.0 {
        return 0.0;
    }
    (score / max).clamp(0.0, 1.0)
}

/// Category sub-score label, e.g. `"18/25"`
pub fn format_category(score: f64) -> String {
    format!("{}/25", format_score(score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_like_score_has_no_decimal_point() {
        assert_eq!(format_score(87.0), "87");
        assert_eq!(format_percent(87.0), "87%");
    }

    #[test]
    fn test_fractional_scores_round_half_away_from_zero() {
        assert_eq!(format_score(72.5), "73");
        assert_eq!(format_score(72.4), "72");
        assert_eq!(format_score(66.666), "67");
    }

    #[test]
    fn test_non_finite_score() {
        assert_eq!(format_score(f64::NAN), "0");
        assert_eq!(format_score(f64::INFINITY), "0");
    }

    #[test]
    fn test_gauge_ratio_clamps() {
        assert_eq!(gauge_ratio(50.0, 100.0), 0.5);
        assert_eq!(gauge_ratio(150.0, 100.0), 1.0);
        assert_eq!(gauge_ratio(-5.0, 100.0), 0.0);
        assert_eq!(gauge_ratio(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_format_category() {
        assert_eq!(format_category(18.0), "18/25");
    }
}
