//! Terms in first-order logic

use super::substitution::Substitution;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A variable in first-order logic
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }
}

/// A constant symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Constant {
    pub name: String,
}

impl Constant {
    pub fn new(name: impl Into<String>) -> Self {
        Constant { name: name.into() }
    }
}

/// A Skolem function symbol with arity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SkolemSymbol {
    pub name: String,
    pub arity: usize,
}

/// A term in first-order logic
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    Variable(Variable),
    Constant(Constant),
    /// Application of a Skolem function to the universals enclosing its
    /// existential. Zero-arity applications act as Skolem constants.
    Skolem(SkolemSymbol, Vec<Term>),
}

impl Term {
    pub fn var(name: impl Into<String>) -> Self {
        Term::Variable(Variable::new(name))
    }

    pub fn constant(name: impl Into<String>) -> Self {
        Term::Constant(Constant::new(name))
    }

    /// Build a Skolem application whose symbol arity matches `args`
    pub fn skolem(name: impl Into<String>, args: Vec<Term>) -> Self {
        Term::Skolem(
            SkolemSymbol {
                name: name.into(),
                arity: args.len(),
            },
            args,
        )
    }

    /// Get all variables in this term
    pub fn variables(&self) -> Vec<Variable> {
        match self {
            Term::Variable(v) => vec![v.clone()],
            Term::Constant(_) => vec![],
            Term::Skolem(_, args) => args.iter().flat_map(|arg| arg.variables()).collect(),
        }
    }

    /// Collect all variables in this term
    pub fn collect_variables(&self, vars: &mut HashSet<Variable>) {
        match self {
            Term::Variable(v) => {
                vars.insert(v.clone());
            }
            Term::Constant(_) => {}
            Term::Skolem(_, args) => {
                for arg in args {
                    arg.collect_variables(vars);
                }
            }
        }
    }

    pub fn contains_variable(&self, var: &Variable) -> bool {
        match self {
            Term::Variable(v) => v == var,
            Term::Constant(_) => false,
            Term::Skolem(_, args) => args.iter().any(|arg| arg.contains_variable(var)),
        }
    }

    /// Apply a substitution to this term
    pub fn apply_substitution(&self, subst: &Substitution) -> Term {
        match self {
            Term::Variable(v) => subst.get(v).cloned().unwrap_or_else(|| self.clone()),
            Term::Constant(_) => self.clone(),
            Term::Skolem(sym, args) => Term::Skolem(
                sym.clone(),
                args.iter().map(|arg| arg.apply_substitution(subst)).collect(),
            ),
        }
    }

    /// Rename every variable through `rename`
    pub fn rename_variables(&self, rename: &mut impl FnMut(&Variable) -> Variable) -> Term {
        match self {
            Term::Variable(v) => Term::Variable(rename(v)),
            Term::Constant(_) => self.clone(),
            Term::Skolem(sym, args) => Term::Skolem(
                sym.clone(),
                args.iter().map(|arg| arg.rename_variables(rename)).collect(),
            ),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(v) => write!(f, "{}", v),
            Term::Constant(c) => write!(f, "{}", c),
            Term::Skolem(sym, args) if args.is_empty() => write!(f, "{}", sym.name),
            Term::Skolem(sym, args) => {
                write!(f, "{}(", sym.name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skolem_display() {
        let sk = Term::skolem("sk0", vec![Term::var("x"), Term::constant("a")]);
        assert_eq!(sk.to_string(), "sk0(x,a)");
        assert_eq!(Term::skolem("sk1", vec![]).to_string(), "sk1");
    }

    #[test]
    fn test_variables() {
        let t = Term::skolem("sk0", vec![Term::var("x"), Term::skolem("sk1", vec![Term::var("y")])]);
        assert_eq!(t.variables(), vec![Variable::new("x"), Variable::new("y")]);
        assert!(t.contains_variable(&Variable::new("y")));
        assert!(Term::skolem("sk2", vec![Term::constant("a")]).variables().is_empty());
    }

    #[test]
    fn test_apply_substitution() {
        let mut subst = Substitution::new();
        subst.insert(Variable::new("x"), Term::constant("a"));
        let t = Term::skolem("sk0", vec![Term::var("x"), Term::var("y")]);
        assert_eq!(
            t.apply_substitution(&subst),
            Term::skolem("sk0", vec![Term::constant("a"), Term::var("y")])
        );
    }
}
