//! Implication elimination: rewrites `==>` and `<->` into `!`, `&` and `|`.

use super::{ScopeContext, Stage};
use crate::error::Result;
use crate::fol::Formula;

pub struct ImplicationEliminator;

impl Stage for ImplicationEliminator {
    fn name(&self) -> &'static str {
        "implication elimination"
    }

    fn apply(&self, formula: Formula, _ctx: &mut ScopeContext) -> Result<Formula> {
        Ok(eliminate_implications(formula))
    }
}

/// `A ==> B` becomes `!A | B`; `A <-> B` becomes `(!A | B) & (A | !B)`
pub fn eliminate_implications(formula: Formula) -> Formula {
    match formula {
        Formula::Atom(_) => formula,
        Formula::Not(f) => Formula::not(eliminate_implications(*f)),
        Formula::And(f1, f2) => {
            Formula::and(eliminate_implications(*f1), eliminate_implications(*f2))
        }
        Formula::Or(f1, f2) => Formula::or(eliminate_implications(*f1), eliminate_implications(*f2)),
        Formula::Implies(f1, f2) => Formula::or(
            Formula::not(eliminate_implications(*f1)),
            eliminate_implications(*f2),
        ),
        Formula::Iff(f1, f2) => {
            let a = eliminate_implications(*f1);
            let b = eliminate_implications(*f2);
            Formula::and(
                Formula::or(Formula::not(a.clone()), b.clone()),
                Formula::or(a, Formula::not(b)),
            )
        }
        Formula::Quantified(q, var, f) => {
            Formula::Quantified(q, var, Box::new(eliminate_implications(*f)))
        }
    }
}
