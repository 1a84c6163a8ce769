//! Plan data structures and batch loading

mod data;
pub mod loader;

pub use data::{SipPlan, PlanError, MAX_PLAN_YEARS};
pub use loader::{load_plans, load_plans_from_reader, load_default_plans};
