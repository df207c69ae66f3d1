//! Captured engine state for lifecycle restore

use crate::operator::Operator;
use serde::{Deserialize, Serialize};

/// Plain copy of the four engine fields
///
/// Produced by [`CalculatorEngine::snapshot`](crate::CalculatorEngine::snapshot)
/// and handed back to [`CalculatorEngine::restore`](crate::CalculatorEngine::restore).
/// Restore trusts the caller and applies the fields as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Operand text under construction
    pub current_input: String,
    /// Pending operator
    pub operator: Option<Operator>,
    /// Frozen left-hand operand
    pub operand1: f64,
    /// Whether the next digit starts a fresh operand
    pub is_new_input: bool,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::cleared()
    }
}

impl Snapshot {
    /// The post-clear state
    #[must_use]
    pub const fn cleared() -> Self {
        Self {
            current_input: String::new(),
            operator: None,
            operand1: 0.0,
            is_new_input: true,
        }
    }

    /// Returns true if this equals the post-clear state
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self == &Self::cleared()
    }
}
