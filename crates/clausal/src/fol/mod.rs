//! First-order logic data structures
//!
//! This module provides the fundamental types shared by every stage:
//! terms, formulas, literals, clauses and substitutions.

pub mod clause;
pub mod formula;
pub mod literal;
pub mod substitution;
pub mod term;

// Re-export commonly used types
pub use clause::{clause_label, Clause, ClauseSet};
pub use formula::{Formula, Quantifier};
pub use literal::{Atom, Literal, PredicateSymbol};
pub use substitution::Substitution;
pub use term::{Constant, SkolemSymbol, Term, Variable};
