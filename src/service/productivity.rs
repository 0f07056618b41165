//! Productivity scoring.

/// Weighted productivity percentage from visit and report counts:
/// `((visits * 0.4 + reports * 0.6) / 10) * 100`.
///
/// Deliberately unclamped: weighted sums above 10 yield scores above 100.
/// That is accepted input-dependent behavior, not something to normalize
/// away here.
pub fn calculate_score(visits: i64, reports_submitted: i64) -> f64 {
    ((visits as f64 * 0.4 + reports_submitted as f64 * 0.6) / 10.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::calculate_score;

    #[test]
    fn weighted_formula() {
        assert_eq!(calculate_score(0, 0), 0.0);
        assert_eq!(calculate_score(10, 0), 40.0);
        assert_eq!(calculate_score(0, 10), 60.0);
        assert_eq!(calculate_score(10, 10), 100.0);
        assert_eq!(calculate_score(5, 5), 50.0);
    }

    #[test]
    fn reports_weigh_more_than_visits() {
        assert!(calculate_score(0, 7) > calculate_score(7, 0));
    }

    #[test]
    fn scores_above_one_hundred_are_not_clamped() {
        assert_eq!(calculate_score(20, 20), 200.0);
        assert_eq!(calculate_score(25, 0), 100.0);
        assert!(calculate_score(30, 1) > 100.0);
    }
}
