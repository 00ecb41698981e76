//! Normalization of first-order formulas into clause form.
//!
//! The pipeline runs, in order:
//!
//! 1. implication elimination
//! 2. negation pushing (negation normal form)
//! 3. variable standardization
//! 4. prenex conversion
//! 5. Skolemization
//! 6. quantifier dropping
//! 7. distribution of `|` over `&`
//! 8. clause extraction
//!
//! Input is validated before the first stage. Stages 1-7 rewrite a
//! [`Formula`] and share one [`ScopeContext`] per run; stage 8 produces a
//! [`ClauseSet`]. Any error aborts the run.

pub mod clauses;
pub mod context;
pub mod distribute;
pub mod implication;
pub mod negation;
pub mod prenex;
pub mod quantifiers;
pub mod skolem;
pub mod standardize;
pub mod validate;

#[cfg(test)]
mod proptest_tests;

pub use clauses::{extract_clauses, extract_into, ClauseExtractor};
pub use context::ScopeContext;
pub use distribute::{distribute, Distributor};
pub use implication::{eliminate_implications, ImplicationEliminator};
pub use negation::{push_negations, NegationPusher};
pub use prenex::{prenex, Prenexer};
pub use quantifiers::{drop_quantifiers, QuantifierDropper};
pub use skolem::{skolemize, Skolemizer};
pub use standardize::{standardize_variables, VariableStandardizer};
pub use validate::{validate, validate_all, Validator};

use crate::config::ClausifyConfig;
use crate::error::Result;
use crate::fol::{ClauseSet, Formula};
use tracing::{debug, trace};

/// A formula-to-formula rewrite step of the pipeline
pub trait Stage: Send + Sync {
    /// Get the name of this stage
    fn name(&self) -> &'static str;

    /// Rewrite `formula`, minting any fresh names from `ctx`
    fn apply(&self, formula: Formula, ctx: &mut ScopeContext) -> Result<Formula>;
}

/// The normalization pipeline: the formula stages in order, then clause
/// extraction.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
    extractor: ClauseExtractor,
}

impl Default for Pipeline {
    fn default() -> Self {
        Pipeline::new(ClausifyConfig::default())
    }
}

impl Pipeline {
    pub fn new(config: ClausifyConfig) -> Self {
        Pipeline {
            stages: vec![
                Box::new(ImplicationEliminator),
                Box::new(NegationPusher),
                Box::new(VariableStandardizer),
                Box::new(Prenexer),
                Box::new(Skolemizer),
                Box::new(QuantifierDropper),
                Box::new(Distributor),
            ],
            extractor: ClauseExtractor::new(config),
        }
    }

    pub fn config(&self) -> &ClausifyConfig {
        &self.extractor.config
    }

    /// Names of the formula stages, in order
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|stage| stage.name())
    }

    /// Run the formula stages, leaving a quantifier-free CNF formula.
    ///
    /// Does not validate; symbols of `formula` should already be reserved in
    /// `ctx`.
    pub fn normalize(&self, formula: Formula, ctx: &mut ScopeContext) -> Result<Formula> {
        self.stages.iter().try_fold(formula, |formula, stage| {
            let result = stage.apply(formula, ctx)?;
            trace!(stage = stage.name(), formula = %result, "stage complete");
            Ok(result)
        })
    }

    /// Clausify a single formula
    pub fn clausify(&self, formula: Formula) -> Result<ClauseSet> {
        self.clausify_all(std::iter::once(formula))
    }

    /// Clausify several formulas into one clause set.
    ///
    /// All formulas share one run: predicate arities must agree, Skolem names
    /// are fresh across all of them, and bound variables are renamed apart.
    pub fn clausify_all(&self, formulas: impl IntoIterator<Item = Formula>) -> Result<ClauseSet> {
        let formulas: Vec<Formula> = formulas.into_iter().collect();
        validate_all(&formulas)?;

        let mut ctx = ScopeContext::new();
        for formula in &formulas {
            ctx.reserve_symbols(formula)?;
        }

        let mut clauses = ClauseSet::new();
        for formula in formulas {
            debug!(formula = %formula, "clausifying");
            let cnf = self.normalize(formula, &mut ctx)?;
            self.extractor.extract_into(cnf, &mut ctx, &mut clauses)?;
        }
        debug!(clauses = clauses.len(), "clausification complete");
        Ok(clauses)
    }
}

/// Clausify a formula with the default configuration
pub fn clausify(formula: Formula) -> Result<ClauseSet> {
    Pipeline::default().clausify(formula)
}

/// Clausify formulas into one clause set with the default configuration
pub fn clausify_all(formulas: impl IntoIterator<Item = Formula>) -> Result<ClauseSet> {
    Pipeline::default().clausify_all(formulas)
}
