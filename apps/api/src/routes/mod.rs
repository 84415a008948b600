pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::water_jug::handlers;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/waterjug/solve", post(handlers::handle_solve))
        // Route casing used by earlier clients
        .route("/api/WaterJug/solve", post(handlers::handle_solve))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::water_jug::Solver;

    fn app() -> Router {
        build_router(AppState {
            solver: Solver::default(),
        })
    }

    async fn post_solve(uri: &str, body: String) -> (StatusCode, Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn solve(x: Value, y: Value, z: Value) -> (StatusCode, Value) {
        let body = json!({"x_capacity": x, "y_capacity": y, "z_amount_wanted": z});
        post_solve("/api/waterjug/solve", body.to_string()).await
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_solve_success() {
        let (status, body) = solve(json!(3), json!(5), json!(4)).await;
        assert_eq!(status, StatusCode::OK);

        let steps = body["solution"].as_array().unwrap();
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[0]["action"], "Fill bucket Y");
        assert!(steps[..5].iter().all(|s| s.get("status").is_none()));
        let last = &steps[5];
        assert_eq!(last["step"], 6);
        assert_eq!(last["bucketX"], 3);
        assert_eq!(last["bucketY"], 4);
        assert_eq!(last["status"], "Solved");
    }

    #[tokio::test]
    async fn test_legacy_route() {
        let body = json!({"x_capacity": 2, "y_capacity": 10, "z_amount_wanted": 4});
        let (status, body) = post_solve("/api/WaterJug/solve", body.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["solution"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_infeasible_is_bad_request() {
        let (status, body) = solve(json!(2), json!(6), json!(5)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "no solution exists for the given values");

        let (status, body) = solve(json!(2), json!(6), json!(7)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "target amount cannot be greater than the larger jug"
        );
    }

    #[tokio::test]
    async fn test_non_positive_is_bad_request() {
        let (status, body) = solve(json!(0), json!(5), json!(3)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "all values must be positive integers");
    }

    #[tokio::test]
    async fn test_non_integer_field() {
        let (status, body) = solve(json!(3), json!("five"), json!(4)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "the provided y_capacity is not a positive integer");
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let (status, body) = post_solve("/api/waterjug/solve", "{not json".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid JSON format");
    }

    #[tokio::test]
    async fn test_round_cap_is_server_error() {
        let (status, body) = solve(json!(1000), json!(1001), json!(500)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "solution requires more than 1000 steps");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = post_solve("/api/waterjug/other", "{}".to_string()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not found: /api/waterjug/other");
    }
}
