// Water jug solver and its HTTP adapter.
// The solver is pure and synchronous; handlers run it on the blocking pool.

pub mod handlers;
pub mod models;
pub mod solver;
pub mod strategy;

pub use solver::Solver;
