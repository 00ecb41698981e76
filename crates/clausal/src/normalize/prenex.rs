//! Prenex form: all quantifiers gathered into a prefix.
//!
//! Runs after negation pushing and standardization, so quantifier polarity
//! no longer changes and pulling a quantifier across `&`/`|` cannot capture
//! a variable.

use super::{ScopeContext, Stage};
use crate::error::{ClausalError, Result};
use crate::fol::{Formula, Quantifier, Variable};
use std::collections::HashSet;

const STAGE: &str = "prenex conversion";

pub struct Prenexer;

impl Stage for Prenexer {
    fn name(&self) -> &'static str {
        STAGE
    }

    fn apply(&self, formula: Formula, _ctx: &mut ScopeContext) -> Result<Formula> {
        prenex(formula)
    }
}

/// Hoist every quantifier to the front, keeping their left-to-right order of
/// appearance.
pub fn prenex(formula: Formula) -> Result<Formula> {
    let mut seen = HashSet::new();
    if let Some(var) = formula
        .bound_variables()
        .into_iter()
        .find(|var| !seen.insert(var.clone()))
    {
        return Err(ClausalError::malformed(
            STAGE,
            format!("variable `{}` is bound more than once", var),
            formula,
        ));
    }

    let mut prefix = Vec::new();
    let matrix = hoist(formula, &mut prefix)?;
    Ok(Formula::with_prefix(prefix, matrix))
}

fn hoist(formula: Formula, prefix: &mut Vec<(Quantifier, Variable)>) -> Result<Formula> {
    match formula {
        Formula::Atom(_) => Ok(formula),
        Formula::Not(inner) => match *inner {
            atom @ Formula::Atom(_) => Ok(Formula::not(atom)),
            other => Err(ClausalError::malformed(
                STAGE,
                "negation must wrap an atom",
                Formula::not(other),
            )),
        },
        Formula::And(f1, f2) => {
            let left = hoist(*f1, prefix)?;
            let right = hoist(*f2, prefix)?;
            Ok(Formula::and(left, right))
        }
        Formula::Or(f1, f2) => {
            let left = hoist(*f1, prefix)?;
            let right = hoist(*f2, prefix)?;
            Ok(Formula::or(left, right))
        }
        Formula::Quantified(q, var, body) => {
            prefix.push((q, var));
            hoist(*body, prefix)
        }
        node @ (Formula::Implies(..) | Formula::Iff(..)) => Err(ClausalError::malformed(
            STAGE,
            "implication must be eliminated first",
            node,
        )),
    }
}
