//! Negation normal form: drives negation down to the atoms.
//!
//! The pending negation is carried downward as a flag, and every compound
//! node is rebuilt only after its children are rewritten. A negation is
//! therefore never re-exposed above a compound formula, and one pass
//! reaches the fixpoint.

use super::{ScopeContext, Stage};
use crate::error::{ClausalError, Result};
use crate::fol::Formula;

const STAGE: &str = "negation pushing";

pub struct NegationPusher;

impl Stage for NegationPusher {
    fn name(&self) -> &'static str {
        STAGE
    }

    fn apply(&self, formula: Formula, _ctx: &mut ScopeContext) -> Result<Formula> {
        push_negations(formula)
    }
}

/// Rewrite `formula` into negation normal form.
///
/// Requires implications to be eliminated first.
pub fn push_negations(formula: Formula) -> Result<Formula> {
    nnf(formula, false)
}

fn nnf(formula: Formula, negate: bool) -> Result<Formula> {
    match (formula, negate) {
        // Atom - base case
        (atom @ Formula::Atom(_), false) => Ok(atom),
        (atom @ Formula::Atom(_), true) => Ok(Formula::not(atom)),

        // Double negation - just flip and continue
        (Formula::Not(f), negate) => nnf(*f, !negate),

        (Formula::And(f1, f2), false) => Ok(Formula::and(nnf(*f1, false)?, nnf(*f2, false)?)),
        // De Morgan: ~(A & B) = ~A | ~B
        (Formula::And(f1, f2), true) => Ok(Formula::or(nnf(*f1, true)?, nnf(*f2, true)?)),

        (Formula::Or(f1, f2), false) => Ok(Formula::or(nnf(*f1, false)?, nnf(*f2, false)?)),
        // De Morgan: ~(A | B) = ~A & ~B
        (Formula::Or(f1, f2), true) => Ok(Formula::and(nnf(*f1, true)?, nnf(*f2, true)?)),

        // ~(∀x.P) = ∃x.~P and ~(∃x.P) = ∀x.~P
        (Formula::Quantified(q, var, f), negate) => {
            let q = if negate { q.dual() } else { q };
            Ok(Formula::Quantified(q, var, Box::new(nnf(*f, negate)?)))
        }

        (node @ (Formula::Implies(..) | Formula::Iff(..)), _) => Err(ClausalError::malformed(
            STAGE,
            "implication must be eliminated before negation is pushed",
            node,
        )),
    }
}
