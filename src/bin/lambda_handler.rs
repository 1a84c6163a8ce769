//! AWS Lambda handler for plan projections
//!
//! Accepts plan inputs via JSON and returns the yearly growth schedule
//! with summary figures, plus month-level detail on request.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use chrono::{DateTime, Utc};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};
use sip_engine::plan::SipPlan;
use sip_engine::projection::{
    MonthSnapshot, PlanSummary, ProjectionConfig, ProjectionEngine, YearSnapshot,
};

/// Input for the projection
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    /// Lumpsum invested at time zero (default: 100000)
    #[serde(default = "default_initial_investment")]
    pub initial_investment: f64,

    /// Monthly contribution during year 1 (default: 10000)
    #[serde(default = "default_monthly_contribution")]
    pub monthly_contribution: f64,

    /// Annual contribution step-up percentage (default: 10%)
    #[serde(default = "default_step_up")]
    pub annual_step_up_pct: f64,

    /// Years to project (default: 10)
    #[serde(default = "default_total_years")]
    pub total_years: u32,

    /// Nominal annual return percentage (default: 12%)
    #[serde(default = "default_annual_return")]
    pub annual_return_pct: f64,

    /// Whether to include month-level rows in the response
    #[serde(default)]
    pub include_monthly: bool,
}

fn default_initial_investment() -> f64 { 100_000.0 }
fn default_monthly_contribution() -> f64 { 10_000.0 }
fn default_step_up() -> f64 { 10.0 }
fn default_total_years() -> u32 { 10 }
fn default_annual_return() -> f64 { 12.0 }

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub summary: PlanSummary,
    pub schedule: Vec<YearSnapshot>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monthly: Vec<MonthSnapshot>,
    pub generated_at: DateTime<Utc>,
    pub execution_time_ms: u64,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response(body: &ProjectionResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body = event.body();
    let body_str = match body {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: ProjectionRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let plan = SipPlan::new(
        request.initial_investment,
        request.monthly_contribution,
        request.annual_step_up_pct,
        request.total_years,
        request.annual_return_pct,
    );

    // The engine accepts anything finite; user input gets gated here
    if let Err(e) = plan.validate() {
        return Ok(error_response(400, &format!("Invalid plan: {}", e)));
    }

    log::info!(
        "projecting {} years (monthly detail: {})",
        plan.total_years,
        request.include_monthly
    );

    let config = ProjectionConfig {
        include_monthly: request.include_monthly,
    };
    let engine = ProjectionEngine::new(config);
    let result = engine.project_plan(&plan);

    let execution_time_ms = start.elapsed().as_millis() as u64;

    let response = ProjectionResponse {
        summary: result.summary(),
        schedule: result.years,
        monthly: result.months,
        generated_at: Utc::now(),
        execution_time_ms,
    };

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
