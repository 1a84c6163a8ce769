//! Scenario runner for what-if reruns
//!
//! Holds a base plan and recomputes the full schedule on every call,
//! so a caller can tweak one input at a time and compare outcomes
//! without tracking any incremental state.

use crate::plan::SipPlan;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Base-plan holder for repeated what-if projections
///
/// # Example
/// ```ignore
/// let mut runner = ScenarioRunner::new(plan);
///
/// // Re-run after each input change
/// runner.base_mut().monthly_contribution = 12_000.0;
/// let result = runner.run();
///
/// // Or sweep a single input across candidates
/// let sweeps = runner.return_sweep(&[8.0, 10.0, 12.0]);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// The plan each run and sweep starts from
    base: SipPlan,
}

impl ScenarioRunner {
    /// Create a runner around a base plan
    pub fn new(base: SipPlan) -> Self {
        Self { base }
    }

    /// Project the base plan as it currently stands
    pub fn run(&self) -> ProjectionResult {
        self.run_for(&self.base)
    }

    /// Project an arbitrary plan without touching the base
    pub fn run_for(&self, plan: &SipPlan) -> ProjectionResult {
        let engine = ProjectionEngine::new(ProjectionConfig::default());
        engine.project_plan(plan)
    }

    /// Project several plans with the same engine, preserving order
    pub fn run_batch(&self, plans: &[SipPlan]) -> Vec<ProjectionResult> {
        let engine = ProjectionEngine::new(ProjectionConfig::default());
        plans.iter().map(|p| engine.project_plan(p)).collect()
    }

    /// Re-project the base once per candidate annual return, in input
    /// order. The base plan itself is never modified.
    pub fn return_sweep(&self, annual_return_pcts: &[f64]) -> Vec<ProjectionResult> {
        annual_return_pcts
            .iter()
            .map(|&pct| {
                let mut plan = self.base.clone();
                plan.annual_return_pct = pct;
                self.run_for(&plan)
            })
            .collect()
    }

    /// Re-project the base once per candidate step-up percentage
    pub fn step_up_sweep(&self, step_up_pcts: &[f64]) -> Vec<ProjectionResult> {
        step_up_pcts
            .iter()
            .map(|&pct| {
                let mut plan = self.base.clone();
                plan.annual_step_up_pct = pct;
                self.run_for(&plan)
            })
            .collect()
    }

    /// Get reference to the base plan for inspection
    pub fn base(&self) -> &SipPlan {
        &self.base
    }

    /// Get mutable reference to the base plan for the next run
    pub fn base_mut(&mut self) -> &mut SipPlan {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_plan() -> SipPlan {
        SipPlan::new(100_000.0, 10_000.0, 10.0, 10, 12.0)
    }

    #[test]
    fn test_rerun_after_input_change() {
        let mut runner = ScenarioRunner::new(test_plan());
        let before = runner.run().summary();

        runner.base_mut().monthly_contribution = 12_000.0;
        let after = runner.run().summary();

        assert!(after.total_invested > before.total_invested);
        assert!(after.final_value > before.final_value);
    }

    #[test]
    fn test_return_sweep_ordering() {
        let runner = ScenarioRunner::new(test_plan());
        let results = runner.return_sweep(&[4.0, 8.0, 12.0]);

        assert_eq!(results.len(), 3);

        // Same deposits in every sweep; only growth differs
        let invested: Vec<f64> = results
            .iter()
            .map(|r| r.summary().total_invested)
            .collect();
        assert_eq!(invested[0], invested[1]);
        assert_eq!(invested[1], invested[2]);

        let finals: Vec<f64> = results.iter().map(|r| r.summary().final_value).collect();
        assert!(finals[0] < finals[1]);
        assert!(finals[1] < finals[2]);

        // Sweeps never touch the base
        assert_eq!(runner.base().annual_return_pct, 12.0);
    }

    #[test]
    fn test_step_up_sweep_ordering() {
        let runner = ScenarioRunner::new(test_plan());
        let results = runner.step_up_sweep(&[0.0, 10.0, 20.0]);

        assert_eq!(results.len(), 3);

        let invested: Vec<f64> = results
            .iter()
            .map(|r| r.summary().total_invested)
            .collect();
        assert!(invested[0] < invested[1]);
        assert!(invested[1] < invested[2]);

        assert_eq!(runner.base().annual_step_up_pct, 10.0);
    }

    #[test]
    fn test_run_batch_preserves_order() {
        let runner = ScenarioRunner::new(test_plan());
        let plans = vec![
            SipPlan::with_id(11, 0.0, 1_000.0, 0.0, 5, 8.0),
            SipPlan::with_id(22, 50_000.0, 0.0, 0.0, 5, 8.0),
        ];

        let results = runner.run_batch(&plans);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].plan_id, 11);
        assert_eq!(results[1].plan_id, 22);
    }
}
