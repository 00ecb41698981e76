//! Skolemization of a prenex formula.

use super::{ScopeContext, Stage};
use crate::error::{ClausalError, Result};
use crate::fol::{Formula, Quantifier, Substitution, Term, Variable};
use tracing::trace;

const STAGE: &str = "skolemization";

pub struct Skolemizer;

impl Stage for Skolemizer {
    fn name(&self) -> &'static str {
        STAGE
    }

    fn apply(&self, formula: Formula, ctx: &mut ScopeContext) -> Result<Formula> {
        skolemize(formula, ctx)
    }
}

/// Replace each existential of the prefix by a Skolem function of the
/// universals to its left, and drop it.
///
/// The input must be in prenex form.
pub fn skolemize(formula: Formula, ctx: &mut ScopeContext) -> Result<Formula> {
    let (prefix, matrix) = formula.split_prefix();
    if matrix.contains_quantifier() {
        return Err(ClausalError::malformed(
            STAGE,
            "quantifier inside the matrix; formula is not in prenex form",
            Formula::with_prefix(prefix, matrix),
        ));
    }

    let mut universals: Vec<Variable> = Vec::new();
    let mut subst = Substitution::new();
    for (q, var) in prefix {
        match q {
            Quantifier::Forall => universals.push(var),
            Quantifier::Exists => {
                let name = ctx.fresh_skolem()?;
                let term = Term::skolem(
                    name,
                    universals.iter().cloned().map(Term::Variable).collect(),
                );
                trace!(variable = %var, skolem = %term, "skolemized existential");
                subst.insert(var, term);
            }
        }
    }

    let matrix = matrix.apply_substitution(&subst);
    Ok(Formula::with_prefix(
        universals.into_iter().map(|var| (Quantifier::Forall, var)),
        matrix,
    ))
}
