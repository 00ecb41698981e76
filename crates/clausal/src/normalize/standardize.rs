//! Variable standardization: every quantifier in a run binds its own name.

use super::{ScopeContext, Stage};
use crate::error::{ClausalError, Result};
use crate::fol::{Atom, Formula, Term, Variable};
use tracing::trace;

pub struct VariableStandardizer;

impl Stage for VariableStandardizer {
    fn name(&self) -> &'static str {
        "variable standardization"
    }

    fn apply(&self, formula: Formula, ctx: &mut ScopeContext) -> Result<Formula> {
        standardize_variables(formula, ctx)
    }
}

/// Rename bound variables apart.
///
/// A binder whose name was already bound earlier in the run gets a fresh
/// name from `ctx`, and every occurrence it binds follows it. Variables with
/// no enclosing quantifier are rejected.
pub fn standardize_variables(formula: Formula, ctx: &mut ScopeContext) -> Result<Formula> {
    // Innermost binding last: (original name, name after renaming)
    let mut scope: Vec<(Variable, Variable)> = Vec::new();
    standardize(formula, ctx, &mut scope)
}

fn standardize(
    formula: Formula,
    ctx: &mut ScopeContext,
    scope: &mut Vec<(Variable, Variable)>,
) -> Result<Formula> {
    match formula {
        Formula::Atom(atom) => {
            let args = atom
                .args
                .iter()
                .map(|t| rename_term(t, scope))
                .collect::<std::result::Result<Vec<_>, _>>();
            match args {
                Ok(args) => Ok(Formula::Atom(Atom {
                    predicate: atom.predicate,
                    args,
                })),
                Err(variable) => Err(ClausalError::UnboundVariable {
                    variable,
                    node: Box::new(Formula::Atom(atom)),
                }),
            }
        }
        Formula::Not(f) => Ok(Formula::not(standardize(*f, ctx, scope)?)),
        Formula::And(f1, f2) => Ok(Formula::and(
            standardize(*f1, ctx, scope)?,
            standardize(*f2, ctx, scope)?,
        )),
        Formula::Or(f1, f2) => Ok(Formula::or(
            standardize(*f1, ctx, scope)?,
            standardize(*f2, ctx, scope)?,
        )),
        Formula::Implies(f1, f2) => Ok(Formula::implies(
            standardize(*f1, ctx, scope)?,
            standardize(*f2, ctx, scope)?,
        )),
        Formula::Iff(f1, f2) => Ok(Formula::iff(
            standardize(*f1, ctx, scope)?,
            standardize(*f2, ctx, scope)?,
        )),
        Formula::Quantified(q, var, body) => {
            let renamed = ctx.bind(&var);
            if renamed != var {
                trace!(from = %var, to = %renamed, "renamed bound variable");
            }
            scope.push((var, renamed.clone()));
            let body = standardize(*body, ctx, scope);
            scope.pop();
            Ok(Formula::Quantified(q, renamed, Box::new(body?)))
        }
    }
}

/// Rename the variables of `term` through the innermost binder of each.
/// Returns the first unbound variable on failure.
fn rename_term(term: &Term, scope: &[(Variable, Variable)]) -> std::result::Result<Term, Variable> {
    match term {
        Term::Variable(v) => scope
            .iter()
            .rev()
            .find(|(original, _)| original == v)
            .map(|(_, renamed)| Term::Variable(renamed.clone()))
            .ok_or_else(|| v.clone()),
        Term::Constant(_) => Ok(term.clone()),
        Term::Skolem(sym, args) => Ok(Term::Skolem(
            sym.clone(),
            args.iter()
                .map(|arg| rename_term(arg, scope))
                .collect::<std::result::Result<_, _>>()?,
        )),
    }
}
