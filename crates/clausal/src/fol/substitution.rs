//! Variable substitutions

use super::term::{Term, Variable};
use std::collections::HashMap;

/// A substitution mapping variables to terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    pub map: HashMap<Variable, Term>,
}

impl Substitution {
    /// Create a new empty substitution
    pub fn new() -> Self {
        Substitution {
            map: HashMap::new(),
        }
    }

    /// Add a variable -> term mapping
    pub fn insert(&mut self, var: Variable, term: Term) {
        self.map.insert(var, term);
    }

    /// Add a variable -> term mapping with eager propagation, so that every
    /// term in the map stays fully substituted
    pub fn insert_normalized(&mut self, var: Variable, term: Term) {
        let normalized = term.apply_substitution(self);

        let mut single = Substitution::new();
        single.insert(var.clone(), normalized.clone());
        for existing in self.map.values_mut() {
            *existing = existing.apply_substitution(&single);
        }

        self.map.insert(var, normalized);
    }

    pub fn get(&self, var: &Variable) -> Option<&Term> {
        self.map.get(var)
    }

    pub fn remove(&mut self, var: &Variable) -> Option<Term> {
        self.map.remove(var)
    }

    pub fn contains(&self, var: &Variable) -> bool {
        self.map.contains_key(var)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}
