//! First-order formula representation
//!
//! Formulas are trees: each node owns its children, there is no sharing.
//! Every normalization stage consumes a `Formula` and produces a new one.

use super::literal::{Atom, Literal};
use super::substitution::Substitution;
use super::term::{Term, Variable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Quantifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantifier {
    Forall,
    Exists,
}

impl Quantifier {
    /// The quantifier obtained by pushing a negation through this one
    pub fn dual(self) -> Self {
        match self {
            Quantifier::Forall => Quantifier::Exists,
            Quantifier::Exists => Quantifier::Forall,
        }
    }
}

/// First-order formula
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    /// Atomic formula (predicate application)
    Atom(Atom),
    /// Negation
    Not(Box<Formula>),
    /// Conjunction
    And(Box<Formula>, Box<Formula>),
    /// Disjunction
    Or(Box<Formula>, Box<Formula>),
    /// Implication
    Implies(Box<Formula>, Box<Formula>),
    /// Biconditional
    Iff(Box<Formula>, Box<Formula>),
    /// Quantified formula
    Quantified(Quantifier, Variable, Box<Formula>),
}

impl Formula {
    pub fn atom(name: impl Into<String>, args: Vec<Term>) -> Self {
        Formula::Atom(Atom::new(name, args))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(formula: Formula) -> Self {
        Formula::Not(Box::new(formula))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Formula, right: Formula) -> Self {
        Formula::Implies(Box::new(left), Box::new(right))
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Iff(Box::new(left), Box::new(right))
    }

    pub fn forall(var: impl Into<String>, body: Formula) -> Self {
        Formula::Quantified(Quantifier::Forall, Variable::new(var), Box::new(body))
    }

    pub fn exists(var: impl Into<String>, body: Formula) -> Self {
        Formula::Quantified(Quantifier::Exists, Variable::new(var), Box::new(body))
    }

    /// Wrap `matrix` in the given quantifier prefix (outermost first)
    pub fn with_prefix(
        prefix: impl IntoIterator<Item = (Quantifier, Variable)>,
        matrix: Formula,
    ) -> Self {
        let prefix: Vec<_> = prefix.into_iter().collect();
        prefix
            .into_iter()
            .rev()
            .fold(matrix, |body, (q, var)| Formula::Quantified(q, var, Box::new(body)))
    }

    /// Split off the leading quantifiers (outermost first) from the body
    pub fn split_prefix(self) -> (Vec<(Quantifier, Variable)>, Formula) {
        let mut prefix = Vec::new();
        let mut current = self;
        while let Formula::Quantified(q, var, body) = current {
            prefix.push((q, var));
            current = *body;
        }
        (prefix, current)
    }

    /// Get all free variables in the formula
    pub fn free_variables(&self) -> HashSet<Variable> {
        match self {
            Formula::Atom(atom) => {
                let mut vars = HashSet::new();
                atom.collect_variables(&mut vars);
                vars
            }
            Formula::Not(f) => f.free_variables(),
            Formula::And(f1, f2)
            | Formula::Or(f1, f2)
            | Formula::Implies(f1, f2)
            | Formula::Iff(f1, f2) => {
                let mut vars = f1.free_variables();
                vars.extend(f2.free_variables());
                vars
            }
            Formula::Quantified(_, var, f) => {
                let mut vars = f.free_variables();
                vars.remove(var);
                vars
            }
        }
    }

    /// Check if the formula is closed (no free variables)
    pub fn is_closed(&self) -> bool {
        self.free_variables().is_empty()
    }

    /// Variables bound by quantifiers, in left-to-right order of appearance
    pub fn bound_variables(&self) -> Vec<Variable> {
        let mut vars = Vec::new();
        self.collect_bound_variables(&mut vars);
        vars
    }

    fn collect_bound_variables(&self, vars: &mut Vec<Variable>) {
        match self {
            Formula::Atom(_) => {}
            Formula::Not(f) => f.collect_bound_variables(vars),
            Formula::And(f1, f2)
            | Formula::Or(f1, f2)
            | Formula::Implies(f1, f2)
            | Formula::Iff(f1, f2) => {
                f1.collect_bound_variables(vars);
                f2.collect_bound_variables(vars);
            }
            Formula::Quantified(_, var, f) => {
                vars.push(var.clone());
                f.collect_bound_variables(vars);
            }
        }
    }

    /// Check if a formula contains any quantifiers
    pub fn contains_quantifier(&self) -> bool {
        self.any_node(&|f| matches!(f, Formula::Quantified(..)))
    }

    /// Check if a formula contains an existential quantifier
    pub fn contains_existential(&self) -> bool {
        self.any_node(&|f| matches!(f, Formula::Quantified(Quantifier::Exists, _, _)))
    }

    /// Check if a formula contains `==>` or `<->`
    pub fn contains_implication(&self) -> bool {
        self.any_node(&|f| matches!(f, Formula::Implies(..) | Formula::Iff(..)))
    }

    fn any_node(&self, pred: &impl Fn(&Formula) -> bool) -> bool {
        if pred(self) {
            return true;
        }
        match self {
            Formula::Atom(_) => false,
            Formula::Not(f) | Formula::Quantified(_, _, f) => f.any_node(pred),
            Formula::And(f1, f2)
            | Formula::Or(f1, f2)
            | Formula::Implies(f1, f2)
            | Formula::Iff(f1, f2) => f1.any_node(pred) || f2.any_node(pred),
        }
    }

    /// An atom or a negated atom
    pub fn is_literal(&self) -> bool {
        self.as_literal().is_some()
    }

    /// View this formula as a literal, if it is one
    pub fn as_literal(&self) -> Option<Literal> {
        match self {
            Formula::Atom(atom) => Some(Literal::positive(atom.clone())),
            Formula::Not(inner) => match inner.as_ref() {
                Formula::Atom(atom) => Some(Literal::negative(atom.clone())),
                _ => None,
            },
            _ => None,
        }
    }

    /// Negation normal form: negation only wraps atoms, no `==>`/`<->`
    pub fn is_nnf(&self) -> bool {
        match self {
            Formula::Atom(_) => true,
            Formula::Not(inner) => matches!(inner.as_ref(), Formula::Atom(_)),
            Formula::And(f1, f2) | Formula::Or(f1, f2) => f1.is_nnf() && f2.is_nnf(),
            Formula::Implies(..) | Formula::Iff(..) => false,
            Formula::Quantified(_, _, f) => f.is_nnf(),
        }
    }

    /// A disjunction of literals (a single literal counts)
    pub fn is_clause(&self) -> bool {
        match self {
            Formula::Or(f1, f2) => f1.is_clause() && f2.is_clause(),
            other => other.is_literal(),
        }
    }

    /// Conjunction of disjunctions of literals
    pub fn is_cnf(&self) -> bool {
        match self {
            Formula::And(f1, f2) => f1.is_cnf() && f2.is_cnf(),
            other => other.is_clause(),
        }
    }

    /// Apply a substitution to the free variables of this formula
    pub fn apply_substitution(&self, subst: &Substitution) -> Formula {
        match self {
            Formula::Atom(atom) => Formula::Atom(atom.apply_substitution(subst)),
            Formula::Not(f) => Formula::not(f.apply_substitution(subst)),
            Formula::And(f1, f2) => {
                Formula::and(f1.apply_substitution(subst), f2.apply_substitution(subst))
            }
            Formula::Or(f1, f2) => {
                Formula::or(f1.apply_substitution(subst), f2.apply_substitution(subst))
            }
            Formula::Implies(f1, f2) => {
                Formula::implies(f1.apply_substitution(subst), f2.apply_substitution(subst))
            }
            Formula::Iff(f1, f2) => {
                Formula::iff(f1.apply_substitution(subst), f2.apply_substitution(subst))
            }
            Formula::Quantified(q, var, f) => {
                let body = if subst.contains(var) {
                    // Variable is bound here, shadowing the outer binding
                    let mut inner = subst.clone();
                    inner.remove(var);
                    f.apply_substitution(&inner)
                } else {
                    f.apply_substitution(subst)
                };
                Formula::Quantified(*q, var.clone(), Box::new(body))
            }
        }
    }

    /// Binding strength used when rendering
    fn precedence(&self) -> u8 {
        match self {
            Formula::Quantified(..) => 0,
            Formula::Iff(..) => 1,
            Formula::Implies(..) => 2,
            Formula::Or(..) => 3,
            Formula::And(..) => 4,
            Formula::Not(_) | Formula::Atom(_) => 5,
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, parent: u8, strict: bool) -> fmt::Result {
        let prec = self.precedence();
        if prec < parent || (strict && prec == parent) {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = self.precedence();
        match self {
            Formula::Atom(atom) => write!(f, "{}", atom),
            Formula::Not(inner) => {
                write!(f, "!")?;
                inner.fmt_operand(f, prec, false)
            }
            Formula::And(l, r) | Formula::Or(l, r) => {
                let op = if matches!(self, Formula::And(..)) { "&" } else { "|" };
                l.fmt_operand(f, prec, false)?;
                write!(f, " {} ", op)?;
                r.fmt_operand(f, prec, false)
            }
            Formula::Implies(l, r) | Formula::Iff(l, r) => {
                let op = if matches!(self, Formula::Implies(..)) { "==>" } else { "<->" };
                l.fmt_operand(f, prec, true)?;
                write!(f, " {} ", op)?;
                r.fmt_operand(f, prec, true)
            }
            Formula::Quantified(q, var, body) => {
                let keyword = match q {
                    Quantifier::Forall => "forall",
                    Quantifier::Exists => "exists",
                };
                write!(f, "{} {}. {}", keyword, var, body)
            }
        }
    }
}
