use serde::Serialize;
use thiserror::Error;

/// The six moves a strategy can make. Rendered to display text only at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    FillX,
    FillY,
    EmptyX,
    EmptyY,
    TransferXToY,
    TransferYToX,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::FillX => "Fill bucket X",
            Action::FillY => "Fill bucket Y",
            Action::EmptyX => "Empty bucket X",
            Action::EmptyY => "Empty bucket Y",
            Action::TransferXToY => "Transfer from bucket X to Y",
            Action::TransferYToX => "Transfer from bucket Y to X",
        }
    }
}

impl Serialize for Action {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Jug capacities for one solve. Both are positive once validation has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacities {
    pub x: i64,
    pub y: i64,
}

/// Volumes currently held in each jug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct JugState {
    pub x: i64,
    pub y: i64,
}

impl JugState {
    pub fn holds(&self, target: i64) -> bool {
        self.x == target || self.y == target
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// 1-based, equal to the round that produced it.
    pub number: u32,
    pub x: i64,
    pub y: i64,
    pub action: Action,
    /// Set only on the last step of a solution.
    pub solved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub steps: Vec<Step>,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Infeasible(String),

    #[error("{0}")]
    ResourceExceeded(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_labels_are_distinct() {
        let all = [
            Action::FillX,
            Action::FillY,
            Action::EmptyX,
            Action::EmptyY,
            Action::TransferXToY,
            Action::TransferYToX,
        ];
        let labels: std::collections::HashSet<_> = all.iter().map(|a| a.label()).collect();
        assert_eq!(labels.len(), all.len());
    }

    #[test]
    fn test_action_serializes_as_label() {
        let json = serde_json::to_string(&Action::TransferYToX).unwrap();
        assert_eq!(json, "\"Transfer from bucket Y to X\"");
    }

    #[test]
    fn test_state_holds_target_in_either_jug() {
        assert!(JugState { x: 4, y: 0 }.holds(4));
        assert!(JugState { x: 0, y: 4 }.holds(4));
        assert!(!JugState { x: 3, y: 5 }.holds(4));
    }
}
