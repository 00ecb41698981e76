//! clausal: clause normal form and resolution refutation for first-order logic
//!
//! Formulas are normalized into a clause set by an eight-stage pipeline
//! (see [`normalize`]), and the clause set is searched for a contradiction by
//! a resolution refutation procedure (see [`resolution`]).
//!
//! ```
//! use clausal::{clausify_all, resolve, Formula, ResolverConfig, Term};
//!
//! let p = |name: &str| Formula::atom(name, vec![Term::constant("socrates")]);
//! let clauses = clausify_all([
//!     Formula::implies(p("Man"), p("Mortal")),
//!     p("Man"),
//!     Formula::not(p("Mortal")),
//! ])
//! .unwrap();
//!
//! let outcome = resolve(clauses, ResolverConfig::default()).unwrap();
//! assert_eq!(outcome.to_string(), "REFUTED");
//! ```

pub mod config;
pub mod error;
pub mod fol;
pub mod json;
pub mod normalize;
pub mod resolution;
pub mod unification;

pub use config::{ClausifyConfig, MatchMode, ResolverConfig};
pub use error::{BudgetLimit, ClausalError, Result};

// Re-export commonly used types from fol
pub use fol::{
    clause_label, Atom, Clause, ClauseSet, Constant, Formula, Literal, PredicateSymbol,
    Quantifier, SkolemSymbol, Substitution, Term, Variable,
};

pub use normalize::{clausify, clausify_all, Pipeline, ScopeContext, Stage};

pub use resolution::{
    extract_proof, resolve, Outcome, Refutation, ResolutionStep, Resolver, ResolverState,
};

pub use json::OutcomeJson;

pub use unification::{unify, unify_atoms, UnificationError, UnificationResult};
