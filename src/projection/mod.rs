//! Projection engine for single and multi-plan growth schedules

mod state;
mod engine;
mod schedule;
mod returns;

pub use state::ProjectionState;
pub use engine::{ProjectionEngine, ProjectionConfig, project};
pub use schedule::{YearSnapshot, MonthSnapshot, ProjectionResult, PlanSummary};
pub use returns::annualized_return_pct;
