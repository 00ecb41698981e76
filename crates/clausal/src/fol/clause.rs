//! Clauses and clause sets

use super::literal::Literal;
use super::substitution::Substitution;
use super::term::Variable;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::ops::Index;

/// A clause (disjunction of literals), stored as a set.
///
/// Literals are kept sorted and deduplicated, so two clauses with the same
/// literals compare and hash equal regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Literal>", into = "Vec<Literal>")]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        let mut literals: Vec<Literal> = literals.into_iter().collect();
        literals.sort();
        literals.dedup();
        Clause { literals }
    }

    /// The empty clause (contradiction)
    pub fn empty() -> Self {
        Clause::default()
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Check if this clause is empty (contradiction)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.binary_search(literal).is_ok()
    }

    /// Check if this clause is a tautology (contains complementary literals)
    pub fn is_tautology(&self) -> bool {
        self.literals
            .windows(2)
            .any(|pair| pair[0].is_complement_of(&pair[1]))
    }

    /// Collect all variables in this clause
    pub fn variables(&self) -> HashSet<Variable> {
        let mut vars = HashSet::new();
        for lit in &self.literals {
            lit.collect_variables(&mut vars);
        }
        vars
    }

    /// All literals except `literal`
    pub fn without(&self, literal: &Literal) -> impl Iterator<Item = &Literal> + '_ {
        let literal = literal.clone();
        self.literals.iter().filter(move |l| **l != literal)
    }

    pub fn apply_substitution(&self, subst: &Substitution) -> Clause {
        Clause::new(self.literals.iter().map(|l| l.apply_substitution(subst)))
    }

    pub fn rename_variables(&self, mut rename: impl FnMut(&Variable) -> Variable) -> Clause {
        Clause::new(self.literals.iter().map(|l| l.rename_variables(&mut rename)))
    }

    /// Rename variables to `{prefix}0`, `{prefix}1`, ... in order of first
    /// appearance
    pub fn normalize_variables(&self, prefix: &str) -> Clause {
        let mut names: HashMap<Variable, Variable> = HashMap::new();
        self.rename_variables(|v| {
            let next = names.len();
            names
                .entry(v.clone())
                .or_insert_with(|| Variable::new(format!("{}{}", prefix, next)))
                .clone()
        })
    }
}

impl From<Vec<Literal>> for Clause {
    fn from(literals: Vec<Literal>) -> Self {
        Clause::new(literals)
    }
}

impl From<Clause> for Vec<Literal> {
    fn from(clause: Clause) -> Self {
        clause.literals
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause::new(iter)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "⊥")
        } else {
            for (i, lit) in self.literals.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", lit)?;
            }
            Ok(())
        }
    }
}

/// An append-only, indexed set of distinct clauses.
///
/// The index of a clause never changes once it is added; a clause that is
/// already present is not added again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseSet {
    clauses: IndexSet<Clause>,
}

impl ClauseSet {
    pub fn new() -> Self {
        ClauseSet::default()
    }

    /// Append `clause` unless it is already present. Returns its index and
    /// whether it was newly added.
    pub fn insert(&mut self, clause: Clause) -> (usize, bool) {
        self.clauses.insert_full(clause)
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.contains(clause)
    }

    /// Index of the empty clause, if present
    pub fn empty_clause(&self) -> Option<usize> {
        self.clauses.iter().position(Clause::is_empty)
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> indexmap::set::Iter<'_, Clause> {
        self.clauses.iter()
    }
}

impl Index<usize> for ClauseSet {
    type Output = Clause;

    fn index(&self, idx: usize) -> &Clause {
        &self.clauses[idx]
    }
}

impl FromIterator<Clause> for ClauseSet {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        ClauseSet {
            clauses: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ClauseSet {
    type Item = &'a Clause;
    type IntoIter = indexmap::set::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

/// Label used when rendering clause `idx` (labels are 1-based)
pub fn clause_label(idx: usize) -> String {
    format!("C{}", idx + 1)
}

impl fmt::Display for ClauseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (idx, clause) in self.clauses.iter().enumerate() {
            if idx > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", clause_label(idx), clause)?;
        }
        write!(f, "}}")
    }
}
