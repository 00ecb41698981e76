//! Universal quantifier removal. In clause form every remaining variable is
//! implicitly universally quantified.

use super::{ScopeContext, Stage};
use crate::error::{ClausalError, Result};
use crate::fol::{Formula, Quantifier};

const STAGE: &str = "quantifier dropping";

pub struct QuantifierDropper;

impl Stage for QuantifierDropper {
    fn name(&self) -> &'static str {
        STAGE
    }

    fn apply(&self, formula: Formula, _ctx: &mut ScopeContext) -> Result<Formula> {
        drop_quantifiers(formula)
    }
}

/// Remove every universal quantifier; existentials must be gone already
pub fn drop_quantifiers(formula: Formula) -> Result<Formula> {
    match formula {
        Formula::Atom(_) => Ok(formula),
        Formula::Quantified(Quantifier::Forall, _, body) => drop_quantifiers(*body),
        node @ Formula::Quantified(Quantifier::Exists, _, _) => Err(ClausalError::malformed(
            STAGE,
            "existential quantifier survived Skolemization",
            node,
        )),
        Formula::Not(f) => Ok(Formula::not(drop_quantifiers(*f)?)),
        Formula::And(f1, f2) => Ok(Formula::and(drop_quantifiers(*f1)?, drop_quantifiers(*f2)?)),
        Formula::Or(f1, f2) => Ok(Formula::or(drop_quantifiers(*f1)?, drop_quantifiers(*f2)?)),
        Formula::Implies(f1, f2) => Ok(Formula::implies(
            drop_quantifiers(*f1)?,
            drop_quantifiers(*f2)?,
        )),
        Formula::Iff(f1, f2) => Ok(Formula::iff(drop_quantifiers(*f1)?, drop_quantifiers(*f2)?)),
    }
}
