//! Clause extraction from a distributed (CNF) formula.

use super::ScopeContext;
use crate::config::ClausifyConfig;
use crate::error::{ClausalError, Result};
use crate::fol::{Clause, ClauseSet, Formula, Literal, Variable};
use std::collections::HashMap;
use tracing::trace;

const STAGE: &str = "clause extraction";

/// Final pipeline stage. Unlike the other stages it leaves the formula
/// world, so it does not implement `Stage`.
pub struct ClauseExtractor {
    pub config: ClausifyConfig,
}

impl ClauseExtractor {
    pub fn new(config: ClausifyConfig) -> Self {
        ClauseExtractor { config }
    }

    /// Append the clauses of `formula` to `clauses`
    pub fn extract_into(
        &self,
        formula: Formula,
        ctx: &mut ScopeContext,
        clauses: &mut ClauseSet,
    ) -> Result<()> {
        extract_into(formula, &self.config, ctx, clauses)
    }
}

/// Split a CNF formula into its clause set
pub fn extract_clauses(
    formula: Formula,
    config: &ClausifyConfig,
    ctx: &mut ScopeContext,
) -> Result<ClauseSet> {
    let mut clauses = ClauseSet::new();
    extract_into(formula, config, ctx, &mut clauses)?;
    Ok(clauses)
}

/// Append the clauses of a CNF formula to an existing set
pub fn extract_into(
    formula: Formula,
    config: &ClausifyConfig,
    ctx: &mut ScopeContext,
    clauses: &mut ClauseSet,
) -> Result<()> {
    let mut conjuncts = Vec::new();
    split_conjuncts(formula, &mut conjuncts);

    for conjunct in conjuncts {
        let mut literals = Vec::new();
        collect_literals(conjunct, &mut literals)?;
        let mut clause = Clause::new(literals);

        if config.drop_tautologies && clause.is_tautology() {
            trace!(clause = %clause, "dropped tautology");
            continue;
        }
        if config.rename_clause_variables {
            clause = rename_apart(&clause, ctx);
        }

        let (idx, added) = clauses.insert(clause);
        if added {
            trace!(index = idx, clause = %clauses[idx], "extracted clause");
        }
    }
    Ok(())
}

fn split_conjuncts(formula: Formula, out: &mut Vec<Formula>) {
    match formula {
        Formula::And(f1, f2) => {
            split_conjuncts(*f1, out);
            split_conjuncts(*f2, out);
        }
        other => out.push(other),
    }
}

fn collect_literals(formula: Formula, out: &mut Vec<Literal>) -> Result<()> {
    match formula {
        Formula::Or(f1, f2) => {
            collect_literals(*f1, out)?;
            collect_literals(*f2, out)
        }
        other => match other.as_literal() {
            Some(lit) => {
                out.push(lit);
                Ok(())
            }
            None => Err(ClausalError::malformed(
                STAGE,
                "expected a disjunction of literals",
                other,
            )),
        },
    }
}

/// Give the clause variables that no other clause of the run uses
fn rename_apart(clause: &Clause, ctx: &mut ScopeContext) -> Clause {
    let mut names: HashMap<Variable, Variable> = HashMap::new();
    clause.rename_variables(|v| {
        names
            .entry(v.clone())
            .or_insert_with(|| ctx.fresh_clause_variable())
            .clone()
    })
}
