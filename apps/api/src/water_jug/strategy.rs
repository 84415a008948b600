//! The two greedy pouring policies and the per-solve runner that drives one of them.

use std::collections::HashSet;

use crate::water_jug::models::{Action, Capacities, JugState, Solution, Step};

/// A fixed greedy policy for picking the next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Keep X busy: fill X, empty Y when full, otherwise pour X into Y.
    XFirst,
    /// Mirror image of `XFirst`.
    YFirst,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::XFirst => "x-first",
            Strategy::YFirst => "y-first",
        }
    }

    /// Applies one move to `state`. Volumes never leave `[0, capacity]`.
    pub fn next(self, state: JugState, caps: Capacities) -> (JugState, Action) {
        match self {
            Strategy::XFirst => {
                if state.x == 0 {
                    (JugState { x: caps.x, ..state }, Action::FillX)
                } else if state.y == caps.y {
                    (JugState { y: 0, ..state }, Action::EmptyY)
                } else {
                    let poured = state.x.min(caps.y - state.y);
                    (
                        JugState {
                            x: state.x - poured,
                            y: state.y + poured,
                        },
                        Action::TransferXToY,
                    )
                }
            }
            Strategy::YFirst => {
                if state.y == 0 {
                    (JugState { y: caps.y, ..state }, Action::FillY)
                } else if state.x == caps.x {
                    (JugState { x: 0, ..state }, Action::EmptyX)
                } else {
                    let poured = state.y.min(caps.x - state.x);
                    (
                        JugState {
                            x: state.x + poured,
                            y: state.y - poured,
                        },
                        Action::TransferYToX,
                    )
                }
            }
        }
    }
}

/// Outcome of advancing a runner by one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved,
    Reached,
    /// The runner was about to revisit a state and is now retired.
    Cycled,
    /// Already retired; nothing happened.
    Idle,
}

/// Drives one strategy from the empty state. Created fresh for every solve.
#[derive(Debug)]
pub struct Runner {
    strategy: Strategy,
    state: JugState,
    visited: HashSet<JugState>,
    steps: Vec<Step>,
    retired: bool,
}

impl Runner {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            state: JugState::default(),
            visited: HashSet::new(),
            steps: Vec::new(),
            retired: false,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn is_retired(&self) -> bool {
        self.retired
    }

    pub fn state(&self) -> JugState {
        self.state
    }

    /// Makes one move and records it as step `round`.
    pub fn advance(&mut self, round: u32, caps: Capacities, target: i64) -> Advance {
        if self.retired {
            return Advance::Idle;
        }
        if !self.visited.insert(self.state) {
            self.retired = true;
            return Advance::Cycled;
        }

        let (next, action) = self.strategy.next(self.state, caps);
        self.state = next;
        let solved = next.holds(target);
        self.steps.push(Step {
            number: round,
            x: next.x,
            y: next.y,
            action,
            solved,
        });

        if solved {
            Advance::Reached
        } else {
            Advance::Moved
        }
    }

    /// Hands over the recorded steps, leaving the runner empty.
    pub fn take_solution(&mut self) -> Solution {
        Solution {
            steps: std::mem::take(&mut self.steps),
        }
    }
}
