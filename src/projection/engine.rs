//! Core projection engine for step-up plan growth schedules

use crate::plan::SipPlan;
use super::returns::annualized_return_pct;
use super::schedule::{round_currency, round_rate2, MonthSnapshot, ProjectionResult, YearSnapshot};
use super::state::ProjectionState;

/// Configuration for a projection run
#[derive(Debug, Clone, Default)]
pub struct ProjectionConfig {
    /// Materialize month-end rows alongside the yearly schedule.
    /// Off by default; the monthly detail multiplies the output size
    /// by twelve and most consumers only chart year ends.
    pub include_monthly: bool,
}

/// Main projection engine.
///
/// Holds no per-plan state; every call to [`project_plan`] recomputes
/// the schedule from the plan alone, so one engine can serve any
/// number of plans from any number of threads.
///
/// [`project_plan`]: ProjectionEngine::project_plan
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run the projection for a single plan.
    ///
    /// Total over its whole input domain: a zero-year plan yields an
    /// empty schedule and nothing here returns an error or panics for
    /// finite inputs. Non-finite inputs propagate through the
    /// arithmetic; callers that accept user input should run
    /// [`SipPlan::validate`] first.
    pub fn project_plan(&self, plan: &SipPlan) -> ProjectionResult {
        let mut result = ProjectionResult::new(plan.plan_id);
        let mut state = ProjectionState::from_plan(plan);
        let monthly_rate = plan.monthly_rate();

        for year in 1..=plan.total_years {
            for _month_in_year in 1..=12 {
                // Compound the running value, then deposit at end of month
                state.advance_month(monthly_rate);

                if self.config.include_monthly {
                    result.add_month(self.month_snapshot(&state));
                }
            }

            result.add_year(self.year_snapshot(year, &state));

            // Contribution grows once the year closes; after the final
            // year the stepped amount is never deposited
            state.apply_step_up(plan.annual_step_up_pct);
        }

        result
    }

    /// Materialize a year-end snapshot from the running state.
    /// Money fields round to whole units here and only here.
    fn year_snapshot(&self, year: u32, state: &ProjectionState) -> YearSnapshot {
        YearSnapshot {
            year,
            monthly_contribution: round_currency(state.current_contribution),
            cumulative_invested: round_currency(state.total_invested),
            cumulative_value: round_currency(state.total_value),
            estimated_return: round_currency(state.estimated_return()),
            annualized_return_pct: round_rate2(annualized_return_pct(
                state.total_value,
                state.total_invested,
                year,
            )),
        }
    }

    /// Materialize a month-end snapshot from the running state
    fn month_snapshot(&self, state: &ProjectionState) -> MonthSnapshot {
        MonthSnapshot {
            month: state.month,
            year: state.year,
            month_in_year: state.month_in_year(),
            monthly_contribution: round_currency(state.current_contribution),
            cumulative_invested: round_currency(state.total_invested),
            cumulative_value: round_currency(state.total_value),
        }
    }
}

/// Project a plan with the default configuration (yearly rows only)
pub fn project(plan: &SipPlan) -> ProjectionResult {
    ProjectionEngine::new(ProjectionConfig::default()).project_plan(plan)
}
