//! Unification algorithm for first-order terms

mod mgu;


pub use mgu::{unify, unify_atoms, UnificationError, UnificationResult};
