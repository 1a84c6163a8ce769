//! SIP Engine - Growth projection engine for systematic investment plans
//!
//! This library provides:
//! - Year-by-year growth schedules for step-up SIPs with monthly compounding
//! - Optional month-level detail from the same projection pass
//! - Plan validation for user-facing entry points
//! - CSV batch loading and a scenario runner for what-if sweeps

pub mod plan;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use plan::{SipPlan, PlanError};
pub use projection::{ProjectionEngine, ProjectionResult, YearSnapshot, project};
pub use scenario::ScenarioRunner;
