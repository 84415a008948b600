//! Two-jug solver.
//!
//! # Algorithm
//! 1. Reject non-positive input, targets above the larger jug, and targets that are not a
//!    multiple of `gcd(x, y)`.
//! 2. Race the X-first and Y-first strategies from (0, 0) in lockstep. Both share the round
//!    counter, so a step's number is the round that produced it.
//! 3. The first strategy to put the target in either jug wins; X-first is advanced first in
//!    each round, so it wins ties.
//!
//! A strategy that is about to revisit a state is retired and its sibling keeps going. The
//! solve only fails on a cycle once both have retired.

use tracing::{debug, warn};

use crate::water_jug::models::{Capacities, Solution, SolveError};
use crate::water_jug::strategy::{Advance, Runner, Strategy};

pub const DEFAULT_MAX_ROUNDS: u32 = 1000;

/// Holds configuration only. All search state lives inside a single `solve` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver {
    max_rounds: u32,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl Solver {
    pub fn new(max_rounds: u32) -> Self {
        Self { max_rounds }
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn solve(&self, x: i64, y: i64, z: i64) -> Result<Solution, SolveError> {
        check_feasible(x, y, z)?;
        self.race(Capacities { x, y }, z)
    }

    /// Runs both strategies without the feasibility pre-check.
    fn race(&self, caps: Capacities, target: i64) -> Result<Solution, SolveError> {
        let mut runners = [Runner::new(Strategy::XFirst), Runner::new(Strategy::YFirst)];

        for round in 1..=self.max_rounds {
            for runner in runners.iter_mut() {
                match runner.advance(round, caps, target) {
                    Advance::Reached => {
                        debug!(
                            strategy = runner.strategy().name(),
                            round, "target reached"
                        );
                        return Ok(runner.take_solution());
                    }
                    Advance::Cycled => {
                        warn!(
                            strategy = runner.strategy().name(),
                            round,
                            state = ?runner.state(),
                            "strategy revisited a state, retiring it"
                        );
                    }
                    Advance::Moved | Advance::Idle => {}
                }
            }

            if runners.iter().all(Runner::is_retired) {
                return Err(SolveError::Infeasible(
                    "no solution exists - cycle detected".to_string(),
                ));
            }
        }

        Err(SolveError::ResourceExceeded(format!(
            "solution requires more than {} steps",
            self.max_rounds
        )))
    }
}

fn check_feasible(x: i64, y: i64, z: i64) -> Result<(), SolveError> {
    if x <= 0 || y <= 0 || z <= 0 {
        return Err(SolveError::InvalidInput(
            "all values must be positive integers".to_string(),
        ));
    }
    if z > x.max(y) {
        return Err(SolveError::Infeasible(
            "target amount cannot be greater than the larger jug".to_string(),
        ));
    }
    if z % gcd(x, y) != 0 {
        return Err(SolveError::Infeasible(
            "no solution exists for the given values".to_string(),
        ));
    }
    Ok(())
}

/// Euclidean greatest common divisor; `gcd(a, 0) == a`.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
