//! Resolution refutation over a clause set.
//!
//! The [`Resolver`] is a state machine over an append-only [`ClauseSet`]:
//! it examines clause pairs in a fixed order, appends every new non-tautological
//! resolvent, and stops when the empty clause appears (`Refuted`) or when every
//! pair has been examined without producing anything new (`Saturated`).

mod resolver;
mod rule;
mod trace;

pub use resolver::Resolver;
pub use rule::resolvents;
pub use trace::extract_proof;

use crate::config::ResolverConfig;
use crate::error::Result;
use crate::fol::{clause_label, ClauseSet, Literal};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the search stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolverState {
    Searching,
    /// The empty clause was derived
    Refuted,
    /// Every pair was examined and nothing new was derived
    Saturated,
}

impl ResolverState {
    pub fn is_terminal(self) -> bool {
        self != ResolverState::Searching
    }
}

/// One derived clause: `result` was resolved from `parent_a` and `parent_b`
/// on `literal` (as it occurs in `parent_a`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionStep {
    pub parent_a: usize,
    pub parent_b: usize,
    pub literal: Literal,
    pub result: usize,
}

impl fmt::Display for ResolutionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = resolve({}, {}) on {}",
            clause_label(self.result),
            clause_label(self.parent_a),
            clause_label(self.parent_b),
            self.literal
        )
    }
}

/// A successful refutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refutation {
    /// Index of the empty clause
    pub empty_clause: usize,
    /// The steps the empty clause depends on, in index order
    pub proof: Vec<ResolutionStep>,
    /// All clauses at the time of refutation
    pub clauses: ClauseSet,
}

impl fmt::Display for Refutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.proof.is_empty() {
            return write!(f, "{}: ⊥", clause_label(self.empty_clause));
        }
        let lines: Vec<String> = self
            .proof
            .iter()
            .map(|step| format!("{}: {}", step, self.clauses[step.result]))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Final verdict of a resolution run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Refuted(Refutation),
    Saturated(ClauseSet),
}

impl Outcome {
    pub fn is_refuted(&self) -> bool {
        matches!(self, Outcome::Refuted(_))
    }

    /// The clause set at the end of the run
    pub fn clauses(&self) -> &ClauseSet {
        match self {
            Outcome::Refuted(refutation) => &refutation.clauses,
            Outcome::Saturated(clauses) => clauses,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Refuted(_) => write!(f, "REFUTED"),
            Outcome::Saturated(_) => write!(f, "SATURATED"),
        }
    }
}

/// Run a resolver over `clauses` to a verdict
pub fn resolve(clauses: ClauseSet, config: ResolverConfig) -> Result<Outcome> {
    Resolver::new(clauses, config).run()
}
