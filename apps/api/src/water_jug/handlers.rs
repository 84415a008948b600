//! Axum route handlers for the Water Jug API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::state::AppState;
use crate::water_jug::models::{Action, Solution};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Validated request body. Every field is a JSON integer that fits in 32 bits;
/// positivity is left to the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveRequest {
    pub x_capacity: i64,
    pub y_capacity: i64,
    pub z_amount_wanted: i64,
}

impl SolveRequest {
    pub fn from_json(body: &Value) -> Result<Self, AppError> {
        let fields = body
            .as_object()
            .ok_or_else(|| AppError::Validation("Invalid JSON format".to_string()))?;

        Ok(Self {
            x_capacity: integer_field(fields, "x_capacity")?,
            y_capacity: integer_field(fields, "y_capacity")?,
            z_amount_wanted: integer_field(fields, "z_amount_wanted")?,
        })
    }
}

fn integer_field(fields: &Map<String, Value>, key: &str) -> Result<i64, AppError> {
    fields
        .get(key)
        .and_then(Value::as_i64)
        .filter(|v| i32::try_from(*v).is_ok())
        .ok_or_else(|| AppError::Validation(format!("the provided {key} is not a positive integer")))
}

#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub step: u32,
    #[serde(rename = "bucketX")]
    pub bucket_x: i64,
    #[serde(rename = "bucketY")]
    pub bucket_y: i64,
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct SolveResponse {
    pub solution: Vec<StepResponse>,
}

impl From<Solution> for SolveResponse {
    fn from(solution: Solution) -> Self {
        let solution = solution
            .steps
            .into_iter()
            .map(|step| StepResponse {
                step: step.number,
                bucket_x: step.x,
                bucket_y: step.y,
                action: step.action,
                status: step.solved.then_some("Solved"),
            })
            .collect();
        Self { solution }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/waterjug/solve
///
/// Returns the step sequence that leaves `z_amount_wanted` in one of the jugs.
pub async fn handle_solve(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SolveResponse>, AppError> {
    let Json(body) = body.map_err(|rejection| {
        debug!("Rejected solve body: {rejection}");
        AppError::Validation("Invalid JSON format".to_string())
    })?;
    let request = SolveRequest::from_json(&body)?;

    let solver = state.solver;
    let result = tokio::task::spawn_blocking(move || {
        solver.solve(
            request.x_capacity,
            request.y_capacity,
            request.z_amount_wanted,
        )
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in solve: {e}")))?;

    let solution = result?;
    if let Some(last) = solution.last() {
        info!(
            x = request.x_capacity,
            y = request.y_capacity,
            z = request.z_amount_wanted,
            steps = solution.len(),
            final_x = last.x,
            final_y = last.y,
            "Solved water jug request"
        );
    }

    Ok(Json(SolveResponse::from(solution)))
}
