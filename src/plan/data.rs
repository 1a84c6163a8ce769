//! Plan data structures matching the batch input format

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum projection horizon accepted at the process boundaries.
/// The engine itself handles any horizon; this cap only guards the
/// CLI, batch loader and HTTP handler against runaway requests.
pub const MAX_PLAN_YEARS: u32 = 100;

/// Validation failure for a plan submitted at a process boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Field holds NaN or infinity
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    /// Amount field is below zero
    #[error("{field} must be non-negative (got {value})")]
    NegativeAmount { field: &'static str, value: f64 },

    /// Horizon exceeds the supported maximum
    #[error("total_years {years} exceeds the supported maximum of {max}")]
    HorizonTooLong { years: u32, max: u32 },
}

/// A single systematic investment plan record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipPlan {
    /// Identifier for batch bookkeeping (0 for standalone runs)
    #[serde(default)]
    pub plan_id: u32,

    /// Lumpsum invested at time zero
    pub initial_investment: f64,

    /// Contribution deposited at the end of each month during year 1
    pub monthly_contribution: f64,

    /// Percentage growth applied to the monthly contribution at the
    /// start of each year after the first (negative = step-down)
    pub annual_step_up_pct: f64,

    /// Number of years to project (0 = empty schedule)
    pub total_years: u32,

    /// Nominal annual return percentage, compounded monthly
    pub annual_return_pct: f64,
}

impl SipPlan {
    /// Create a plan with no batch identifier
    pub fn new(
        initial_investment: f64,
        monthly_contribution: f64,
        annual_step_up_pct: f64,
        total_years: u32,
        annual_return_pct: f64,
    ) -> Self {
        Self::with_id(
            0,
            initial_investment,
            monthly_contribution,
            annual_step_up_pct,
            total_years,
            annual_return_pct,
        )
    }

    /// Create a plan carrying a batch identifier
    pub fn with_id(
        plan_id: u32,
        initial_investment: f64,
        monthly_contribution: f64,
        annual_step_up_pct: f64,
        total_years: u32,
        annual_return_pct: f64,
    ) -> Self {
        Self {
            plan_id,
            initial_investment,
            monthly_contribution,
            annual_step_up_pct,
            total_years,
            annual_return_pct,
        }
    }

    /// Periodic rate applied once per month
    pub fn monthly_rate(&self) -> f64 {
        self.annual_return_pct / 12.0 / 100.0
    }

    /// Multiplier applied to the contribution at each year boundary
    pub fn step_up_factor(&self) -> f64 {
        1.0 + self.annual_step_up_pct / 100.0
    }

    /// Monthly contribution in force during a given plan year (1-based).
    /// Closed form of the year-end step-ups: year k pays the year-1
    /// contribution scaled by the step-up factor k-1 times.
    pub fn contribution_for_year(&self, year: u32) -> f64 {
        self.monthly_contribution * self.step_up_factor().powi(year.saturating_sub(1) as i32)
    }

    /// Total number of monthly steps in the projection
    pub fn total_months(&self) -> u32 {
        self.total_years * 12
    }

    /// Boundary validation. The projection itself accepts any finite
    /// input; this gatekeeps user-supplied plans before they reach it.
    /// Zero years, zero rates, negative step-ups and negative returns
    /// are all legitimate and pass.
    pub fn validate(&self) -> Result<(), PlanError> {
        let finite_checks = [
            ("initial_investment", self.initial_investment),
            ("monthly_contribution", self.monthly_contribution),
            ("annual_step_up_pct", self.annual_step_up_pct),
            ("annual_return_pct", self.annual_return_pct),
        ];
        for (field, value) in finite_checks {
            if !value.is_finite() {
                return Err(PlanError::NonFinite { field });
            }
        }

        if self.initial_investment < 0.0 {
            return Err(PlanError::NegativeAmount {
                field: "initial_investment",
                value: self.initial_investment,
            });
        }
        if self.monthly_contribution < 0.0 {
            return Err(PlanError::NegativeAmount {
                field: "monthly_contribution",
                value: self.monthly_contribution,
            });
        }

        if self.total_years > MAX_PLAN_YEARS {
            return Err(PlanError::HorizonTooLong {
                years: self.total_years,
                max: MAX_PLAN_YEARS,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_plan() -> SipPlan {
        SipPlan::new(100_000.0, 10_000.0, 10.0, 10, 12.0)
    }

    #[test]
    fn test_derived_rates() {
        let plan = test_plan();
        assert_relative_eq!(plan.monthly_rate(), 0.01, epsilon = 1e-15);
        assert_relative_eq!(plan.step_up_factor(), 1.1, epsilon = 1e-15);
        assert_eq!(plan.total_months(), 120);
    }

    #[test]
    fn test_contribution_for_year() {
        let plan = test_plan();
        assert_relative_eq!(plan.contribution_for_year(1), 10_000.0, epsilon = 1e-9);
        assert_relative_eq!(plan.contribution_for_year(2), 11_000.0, epsilon = 1e-9);
        assert_relative_eq!(plan.contribution_for_year(3), 12_100.0, epsilon = 1e-9);

        // Flat plan never steps
        let flat = SipPlan::new(0.0, 5_000.0, 0.0, 5, 8.0);
        assert_relative_eq!(flat.contribution_for_year(5), 5_000.0, epsilon = 1e-12);
    }

    #[test]
    fn test_validate_accepts_tolerated_inputs() {
        assert!(test_plan().validate().is_ok());

        // Zero everywhere is a legal degenerate plan
        assert!(SipPlan::new(0.0, 0.0, 0.0, 0, 0.0).validate().is_ok());

        // Step-down and negative return are tolerated
        assert!(SipPlan::new(1_000.0, 100.0, -5.0, 10, 12.0).validate().is_ok());
        assert!(SipPlan::new(1_000.0, 100.0, 10.0, 10, -4.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejections() {
        let mut plan = test_plan();
        plan.initial_investment = -1.0;
        assert_eq!(
            plan.validate(),
            Err(PlanError::NegativeAmount {
                field: "initial_investment",
                value: -1.0
            })
        );

        let mut plan = test_plan();
        plan.monthly_contribution = -500.0;
        assert!(matches!(
            plan.validate(),
            Err(PlanError::NegativeAmount { field: "monthly_contribution", .. })
        ));

        let mut plan = test_plan();
        plan.annual_return_pct = f64::NAN;
        assert_eq!(
            plan.validate(),
            Err(PlanError::NonFinite { field: "annual_return_pct" })
        );

        let mut plan = test_plan();
        plan.total_years = MAX_PLAN_YEARS + 1;
        assert_eq!(
            plan.validate(),
            Err(PlanError::HorizonTooLong { years: 101, max: 100 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = PlanError::NegativeAmount {
            field: "monthly_contribution",
            value: -500.0,
        };
        assert_eq!(
            err.to_string(),
            "monthly_contribution must be non-negative (got -500)"
        );

        let err = PlanError::HorizonTooLong { years: 250, max: 100 };
        assert_eq!(
            err.to_string(),
            "total_years 250 exceeds the supported maximum of 100"
        );
    }
}
