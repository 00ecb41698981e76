//! Error types for clausal

use crate::fol::{Formula, Variable};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The resolver budget that ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetLimit {
    Iterations,
    Clauses,
    Timeout,
}

impl fmt::Display for BudgetLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetLimit::Iterations => write!(f, "iteration limit"),
            BudgetLimit::Clauses => write!(f, "clause limit"),
            BudgetLimit::Timeout => write!(f, "timeout"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClausalError {
    /// A variable occurs with no enclosing quantifier
    #[error("Unbound variable `{variable}` in {node}")]
    UnboundVariable {
        variable: Variable,
        node: Box<Formula>,
    },

    /// The fresh-name generator produced a name that is already taken
    #[error("Skolem name collision: `{name}` is already in use")]
    SkolemNameCollision { name: String },

    /// A formula does not have the shape a stage requires
    #[error("Malformed formula at {stage}: {reason}: {node}")]
    MalformedFormula {
        stage: &'static str,
        reason: String,
        node: Box<Formula>,
    },

    /// The resolver ran out of budget before reaching a verdict
    #[error("Resolution exhausted its {limit} after {iterations} iterations ({clauses} clauses)")]
    ResolutionResourceExhausted {
        limit: BudgetLimit,
        iterations: usize,
        clauses: usize,
    },
}

impl ClausalError {
    pub(crate) fn malformed(stage: &'static str, reason: impl Into<String>, node: Formula) -> Self {
        ClausalError::MalformedFormula {
            stage,
            reason: reason.into(),
            node: Box::new(node),
        }
    }

    /// Whether retrying with a larger budget can help
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ClausalError::ResolutionResourceExhausted { .. })
    }
}

pub type Result<T> = std::result::Result<T, ClausalError>;
