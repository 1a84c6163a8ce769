//! Annualized return estimate for the projection schedule
//!
//! The schedule reports a geometric-mean growth rate over invested
//! capital. This is an indicative figure, not a money-weighted IRR:
//! it treats all invested capital as if it were in place for the full
//! elapsed period and ignores intra-year contribution timing.
//! Downstream consumers pin these exact values, so the estimate must
//! not be swapped for a cash-flow-dated solve.

/// Calculate the annualized return over the elapsed projection years.
///
/// # Arguments
/// * `total_value` - Compounded portfolio value at the year boundary
/// * `total_invested` - Total capital put in so far
/// * `elapsed_years` - Whole years elapsed since projection start
///
/// # Returns
/// * Annualized growth rate as a percentage (e.g. 8.86 for 8.86%),
///   unrounded. Returns 0.0 when nothing has been invested or no time
///   has elapsed, so the degenerate all-zero plan reports a flat 0.
pub fn annualized_return_pct(total_value: f64, total_invested: f64, elapsed_years: u32) -> f64 {
    if elapsed_years == 0 || total_invested <= 0.0 {
        return 0.0;
    }

    let growth = total_value / total_invested;
    (growth.powf(1.0 / elapsed_years as f64) - 1.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_year() {
        // After one year the annualized rate is just the growth ratio
        let pct = annualized_return_pct(239_507.5331451667, 220_000.0, 1);
        assert_relative_eq!(pct, 8.867060520530323, epsilon = 1e-9);
    }

    #[test]
    fn test_multi_year_geometric_mean() {
        // Doubling over 10 years is about 7.18% a year
        let pct = annualized_return_pct(2_000.0, 1_000.0, 10);
        assert_relative_eq!(pct, (2.0_f64.powf(0.1) - 1.0) * 100.0, epsilon = 1e-12);
        assert_relative_eq!(pct, 7.177, epsilon = 1e-3);
    }

    #[test]
    fn test_flat_and_losing_positions() {
        assert_relative_eq!(annualized_return_pct(1_000.0, 1_000.0, 5), 0.0, epsilon = 1e-12);

        // A losing position reports a negative rate
        let pct = annualized_return_pct(900.0, 1_000.0, 1);
        assert_relative_eq!(pct, -10.0, epsilon = 1e-9);

        // Total loss bottoms out at -100%
        assert_relative_eq!(annualized_return_pct(0.0, 1_000.0, 3), -100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(annualized_return_pct(0.0, 0.0, 5), 0.0);
        assert_eq!(annualized_return_pct(1_000.0, 0.0, 5), 0.0);
        assert_eq!(annualized_return_pct(1_000.0, 500.0, 0), 0.0);
    }
}
