//! Schedule output structures for projections

use serde::{Deserialize, Serialize};

/// Round a money amount to the nearest whole currency unit.
/// Applied only when a snapshot is emitted; the running accumulators
/// keep full precision between snapshots.
pub fn round_currency(amount: f64) -> f64 {
    amount.round()
}

/// Round a percentage to two decimal places
pub fn round_rate2(pct: f64) -> f64 {
    (pct * 100.0).round() / 100.0
}

/// One row of projection output per plan year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearSnapshot {
    /// Plan year (1-indexed)
    pub year: u32,

    /// Monthly contribution in force during this year
    pub monthly_contribution: f64,

    /// Total put in through the end of this year, lumpsum included
    pub cumulative_invested: f64,

    /// Compounded value at the end of this year
    pub cumulative_value: f64,

    /// Gain over invested capital. Derived from the unrounded
    /// accumulators, so it can differ from the difference of the two
    /// rounded fields above by one unit.
    pub estimated_return: f64,

    /// Annualized growth estimate since projection start, percent
    pub annualized_return_pct: f64,
}

/// One row of month-level detail, emitted only when requested
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSnapshot {
    /// Projection month (1-indexed)
    pub month: u32,

    /// Plan year this month falls in
    pub year: u32,

    /// Month within the plan year (1-12)
    pub month_in_year: u32,

    /// Contribution deposited this month
    pub monthly_contribution: f64,

    /// Total put in through the end of this month
    pub cumulative_invested: f64,

    /// Compounded value at the end of this month
    pub cumulative_value: f64,
}

/// Complete projection result for one plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Plan identifier
    pub plan_id: u32,

    /// Year-end snapshots in ascending year order
    pub years: Vec<YearSnapshot>,

    /// Month-end snapshots (empty unless monthly detail was requested)
    pub months: Vec<MonthSnapshot>,
}

impl ProjectionResult {
    pub fn new(plan_id: u32) -> Self {
        Self {
            plan_id,
            years: Vec::new(),
            months: Vec::new(),
        }
    }

    /// Add a year-end snapshot
    pub fn add_year(&mut self, snapshot: YearSnapshot) {
        self.years.push(snapshot);
    }

    /// Add a month-end snapshot
    pub fn add_month(&mut self, snapshot: MonthSnapshot) {
        self.months.push(snapshot);
    }

    /// Get summary statistics from the final year row
    pub fn summary(&self) -> PlanSummary {
        let total_invested = self.years.last().map(|r| r.cumulative_invested).unwrap_or(0.0);
        let final_value = self.years.last().map(|r| r.cumulative_value).unwrap_or(0.0);
        let estimated_return = self.years.last().map(|r| r.estimated_return).unwrap_or(0.0);
        let annualized_return_pct = self
            .years
            .last()
            .map(|r| r.annualized_return_pct)
            .unwrap_or(0.0);

        PlanSummary {
            years_projected: self.years.len() as u32,
            total_invested,
            final_value,
            estimated_return,
            annualized_return_pct,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    pub years_projected: u32,
    pub total_invested: f64,
    pub final_value: f64,
    pub estimated_return: f64,
    pub annualized_return_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(round_currency(239_507.5331451667), 239_508.0);
        assert_eq!(round_currency(19_507.4), 19_507.0);
        // Ties round away from zero
        assert_eq!(round_currency(2.5), 3.0);
        assert_eq!(round_currency(-2.5), -3.0);

        assert_eq!(round_rate2(8.867060520530323), 8.87);
        assert_eq!(round_rate2(6.195110630117062), 6.2);
        assert_eq!(round_rate2(-0.004), -0.0);
    }

    #[test]
    fn test_empty_result_summary() {
        let result = ProjectionResult::new(7);
        let summary = result.summary();

        assert_eq!(result.plan_id, 7);
        assert_eq!(summary.years_projected, 0);
        assert_eq!(summary.total_invested, 0.0);
        assert_eq!(summary.final_value, 0.0);
        assert_eq!(summary.estimated_return, 0.0);
        assert_eq!(summary.annualized_return_pct, 0.0);
    }

    #[test]
    fn test_summary_reads_final_year() {
        let mut result = ProjectionResult::new(1);
        result.add_year(YearSnapshot {
            year: 1,
            monthly_contribution: 10_000.0,
            cumulative_invested: 220_000.0,
            cumulative_value: 239_508.0,
            estimated_return: 19_508.0,
            annualized_return_pct: 8.87,
        });
        result.add_year(YearSnapshot {
            year: 2,
            monthly_contribution: 11_000.0,
            cumulative_invested: 352_000.0,
            cumulative_value: 409_391.0,
            estimated_return: 57_391.0,
            annualized_return_pct: 7.84,
        });

        let summary = result.summary();
        assert_eq!(summary.years_projected, 2);
        assert_eq!(summary.total_invested, 352_000.0);
        assert_eq!(summary.final_value, 409_391.0);
        assert_eq!(summary.estimated_return, 57_391.0);
        assert_eq!(summary.annualized_return_pct, 7.84);
    }
}
