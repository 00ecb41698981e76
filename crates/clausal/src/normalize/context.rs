//! Per-run naming state shared by the standardizer, the Skolemizer and the
//! clause extractor.

use crate::error::{ClausalError, Result};
use crate::fol::{Formula, Term, Variable};
use std::collections::{HashMap, HashSet};

const SKOLEM_PREFIX: &str = "sk";
const CLAUSE_VARIABLE_PREFIX: &str = "X";

/// Fresh-name state for one pipeline run.
///
/// Owned by the caller and threaded through the stages that mint names, so
/// two runs never share counters.
#[derive(Debug, Clone, Default)]
pub struct ScopeContext {
    /// Generation counter per original variable name
    generations: HashMap<String, usize>,
    /// Every variable name bound so far in this run
    bound: HashSet<String>,
    /// Symbol names found in the input (predicates, constants, Skolem functions)
    reserved: HashSet<String>,
    /// Skolem names minted in this run
    skolem_names: HashSet<String>,
    skolem_counter: usize,
    clause_variable_counter: usize,
}

impl ScopeContext {
    pub fn new() -> Self {
        ScopeContext::default()
    }

    /// Record the term-level symbols of `formula` so that minted Skolem names
    /// never coincide with them.
    ///
    /// Fails if the formula mentions a name this run has already minted.
    pub fn reserve_symbols(&mut self, formula: &Formula) -> Result<()> {
        match formula {
            Formula::Atom(atom) => {
                self.reserve_name(&atom.predicate.name)?;
                for term in &atom.args {
                    self.reserve_term(term)?;
                }
                Ok(())
            }
            Formula::Not(f) | Formula::Quantified(_, _, f) => self.reserve_symbols(f),
            Formula::And(f1, f2)
            | Formula::Or(f1, f2)
            | Formula::Implies(f1, f2)
            | Formula::Iff(f1, f2) => {
                self.reserve_symbols(f1)?;
                self.reserve_symbols(f2)
            }
        }
    }

    fn reserve_term(&mut self, term: &Term) -> Result<()> {
        let name = match term {
            Term::Variable(_) => return Ok(()),
            Term::Constant(c) => &c.name,
            Term::Skolem(sym, args) => {
                for arg in args {
                    self.reserve_term(arg)?;
                }
                &sym.name
            }
        };
        self.reserve_name(name)
    }

    fn reserve_name(&mut self, name: &str) -> Result<()> {
        if self.skolem_names.contains(name) {
            return Err(ClausalError::SkolemNameCollision {
                name: name.to_string(),
            });
        }
        self.reserved.insert(name.to_string());
        Ok(())
    }

    /// Name for a quantifier binding `var`: the first binder of a name keeps
    /// it, later binders get `name_<gen>`.
    pub fn bind(&mut self, var: &Variable) -> Variable {
        if self.bound.insert(var.name.clone()) {
            return var.clone();
        }
        let generation = self.generations.entry(var.name.clone()).or_insert(0);
        loop {
            *generation += 1;
            let candidate = format!("{}_{}", var.name, generation);
            if self.bound.insert(candidate.clone()) {
                return Variable::new(candidate);
            }
        }
    }

    /// Mint a Skolem function name that is fresh for this run
    pub fn fresh_skolem(&mut self) -> Result<String> {
        let mut candidate = format!("{}{}", SKOLEM_PREFIX, self.skolem_counter);
        while self.reserved.contains(&candidate) {
            self.skolem_counter += 1;
            candidate = format!("{}{}", SKOLEM_PREFIX, self.skolem_counter);
        }
        self.skolem_counter += 1;

        if !self.skolem_names.insert(candidate.clone()) {
            return Err(ClausalError::SkolemNameCollision { name: candidate });
        }
        Ok(candidate)
    }

    /// Mint a variable name for clause-level renaming
    pub fn fresh_clause_variable(&mut self) -> Variable {
        loop {
            self.clause_variable_counter += 1;
            let candidate = format!("{}{}", CLAUSE_VARIABLE_PREFIX, self.clause_variable_counter);
            if self.bound.insert(candidate.clone()) {
                return Variable::new(candidate);
            }
        }
    }
}
