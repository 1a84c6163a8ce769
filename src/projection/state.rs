//! Projection state tracking for a single plan

use crate::plan::SipPlan;

/// State of a plan at a point in time during projection.
/// Accumulators keep full precision; rounding happens only when a
/// snapshot is emitted.
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current projection month (1-indexed, 0 before the first advance)
    pub month: u32,

    /// Plan year (1-indexed)
    pub year: u32,

    /// Monthly contribution currently in force (grows at step-up)
    pub current_contribution: f64,

    /// Total money put in so far, including the initial lumpsum
    pub total_invested: f64,

    /// Compounded portfolio value
    pub total_value: f64,
}

impl ProjectionState {
    /// Initialize state from a plan at projection start
    pub fn from_plan(plan: &SipPlan) -> Self {
        Self {
            month: 0,
            year: 1,
            current_contribution: plan.monthly_contribution,
            total_invested: plan.initial_investment,
            total_value: plan.initial_investment,
        }
    }

    /// Advance one month: compound the running value, then deposit the
    /// contribution at end of month. Order matters; the deposit earns
    /// nothing in the month it arrives.
    pub fn advance_month(&mut self, monthly_rate: f64) {
        self.month += 1;
        self.year = self.month.saturating_sub(1) / 12 + 1;

        self.total_value *= 1.0 + monthly_rate;
        self.total_value += self.current_contribution;
        self.total_invested += self.current_contribution;
    }

    /// Grow the contribution at a year boundary
    pub fn apply_step_up(&mut self, annual_step_up_pct: f64) {
        self.current_contribution *= 1.0 + annual_step_up_pct / 100.0;
    }

    /// Month within the current plan year (1-12)
    pub fn month_in_year(&self) -> u32 {
        (self.month.saturating_sub(1) % 12) + 1
    }

    /// Unrounded gain over invested capital
    pub fn estimated_return(&self) -> f64 {
        self.total_value - self.total_invested
    }
}
