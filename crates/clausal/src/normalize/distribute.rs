//! Distribution of `|` over `&`, producing a conjunction of disjunctions.

use super::{ScopeContext, Stage};
use crate::error::{ClausalError, Result};
use crate::fol::Formula;

const STAGE: &str = "distribution";

pub struct Distributor;

impl Stage for Distributor {
    fn name(&self) -> &'static str {
        STAGE
    }

    fn apply(&self, formula: Formula, _ctx: &mut ScopeContext) -> Result<Formula> {
        distribute(formula)
    }
}

/// Rewrite a quantifier-free NNF formula into `And*(Or*(literal))`.
///
/// Children are distributed before their parent, so both operands of a
/// disjunction are already in CNF when they are combined; this reaches the
/// fixpoint at any nesting depth.
pub fn distribute(formula: Formula) -> Result<Formula> {
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
        Formula::And(f1, f2) => Ok(Formula::and(distribute(*f1)?, distribute(*f2)?)),
        Formula::Or(f1, f2) => Ok(disjoin(distribute(*f1)?, distribute(*f2)?)),
        node @ (Formula::Implies(..) | Formula::Iff(..)) => Err(ClausalError::malformed(
            STAGE,
            "implication must be eliminated first",
            node,
        )),
        node @ Formula::Quantified(..) => Err(ClausalError::malformed(
            STAGE,
            "quantifiers must be dropped first",
            node,
        )),
    }
}

/// Disjunction of two CNF formulas, as a CNF formula
fn disjoin(left: Formula, right: Formula) -> Formula {
    match (left, right) {
        // (A & B) | C => (A | C) & (B | C)
        (Formula::And(a, b), right) => {
            Formula::and(disjoin(*a, right.clone()), disjoin(*b, right))
        }
        // C | (A & B) => (C | A) & (C | B)
        (left, Formula::And(a, b)) => {
            Formula::and(disjoin(left.clone(), *a), disjoin(left, *b))
        }
        (left, right) => Formula::or(left, right),
    }
}
