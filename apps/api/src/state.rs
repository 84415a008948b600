use crate::water_jug::Solver;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration only; each request builds its own search state.
    pub solver: Solver,
}
