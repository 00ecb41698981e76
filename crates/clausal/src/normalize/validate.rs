//! Structural checks on input formulas, run before the first rewrite.

use crate::error::{ClausalError, Result};
use crate::fol::{Atom, Formula, Term};
use std::collections::HashMap;

const STAGE: &str = "validation";

/// Checks formulas of one run, remembering the arity each predicate was
/// first used with.
#[derive(Debug, Default)]
pub struct Validator {
    arities: HashMap<String, usize>,
}

impl Validator {
    pub fn new() -> Self {
        Validator::default()
    }

    pub fn check(&mut self, formula: &Formula) -> Result<()> {
        match formula {
            Formula::Atom(atom) => self.check_atom(atom, formula),
            Formula::Not(f) => self.check(f),
            Formula::And(f1, f2)
            | Formula::Or(f1, f2)
            | Formula::Implies(f1, f2)
            | Formula::Iff(f1, f2) => {
                self.check(f1)?;
                self.check(f2)
            }
            Formula::Quantified(_, var, body) => {
                if var.name.is_empty() {
                    return Err(ClausalError::malformed(
                        STAGE,
                        "quantifier binds an empty variable name",
                        formula.clone(),
                    ));
                }
                self.check(body)
            }
        }
    }

    fn check_atom(&mut self, atom: &Atom, node: &Formula) -> Result<()> {
        let fail = |reason: String| ClausalError::malformed(STAGE, reason, node.clone());

        if atom.predicate.name.is_empty() {
            return Err(fail("empty predicate name".to_string()));
        }
        if atom.predicate.arity != atom.args.len() {
            return Err(fail(format!(
                "predicate `{}` declares arity {} but has {} arguments",
                atom.predicate.name,
                atom.predicate.arity,
                atom.args.len()
            )));
        }
        let arity = *self
            .arities
            .entry(atom.predicate.name.clone())
            .or_insert(atom.predicate.arity);
        if arity != atom.predicate.arity {
            return Err(fail(format!(
                "predicate `{}` used with arity {} and {}",
                atom.predicate.name, arity, atom.predicate.arity
            )));
        }

        for term in &atom.args {
            check_term(term).map_err(fail)?;
        }
        Ok(())
    }
}

fn check_term(term: &Term) -> std::result::Result<(), String> {
    match term {
        Term::Variable(v) if v.name.is_empty() => Err("empty variable name".to_string()),
        Term::Constant(c) if c.name.is_empty() => Err("empty constant name".to_string()),
        Term::Variable(_) | Term::Constant(_) => Ok(()),
        Term::Skolem(sym, args) => {
            if sym.name.is_empty() {
                return Err("empty function name".to_string());
            }
            if sym.arity != args.len() {
                return Err(format!(
                    "function `{}` declares arity {} but has {} arguments",
                    sym.name,
                    sym.arity,
                    args.len()
                ));
            }
            args.iter().try_for_each(check_term)
        }
    }
}

/// Validate a single formula
pub fn validate(formula: &Formula) -> Result<()> {
    Validator::new().check(formula)
}

/// Validate formulas that will be clausified together; predicate arities
/// must agree across all of them
pub fn validate_all<'a>(formulas: impl IntoIterator<Item = &'a Formula>) -> Result<()> {
    let mut validator = Validator::new();
    formulas.into_iter().try_for_each(|f| validator.check(f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::{PredicateSymbol, SkolemSymbol, Variable};

    #[test]
    fn test_well_formed_passes() {
        let f = Formula::forall(
            "x",
            Formula::implies(
                Formula::atom("P", vec![Term::var("x")]),
                Formula::atom("Q", vec![Term::skolem("f", vec![Term::var("x")])]),
            ),
        );
        assert!(validate(&f).is_ok());
    }

    #[test]
    fn test_arity_mismatch_in_atom() {
        let f = Formula::Atom(Atom {
            predicate: PredicateSymbol::new("P", 2),
            args: vec![Term::constant("a")],
        });
        let err = validate(&f).unwrap_err();
        assert!(matches!(err, ClausalError::MalformedFormula { stage: STAGE, .. }));
        assert!(err.to_string().contains("declares arity 2"));
    }

    #[test]
    fn test_arity_mismatch_in_skolem_term() {
        let bad = Term::Skolem(
            SkolemSymbol {
                name: "f".to_string(),
                arity: 0,
            },
            vec![Term::constant("a")],
        );
        let f = Formula::atom("P", vec![bad]);
        assert!(validate(&f).is_err());
    }

    #[test]
    fn test_inconsistent_predicate_arity() {
        let f = Formula::and(
            Formula::atom("P", vec![Term::constant("a")]),
            Formula::atom("P", vec![Term::constant("a"), Term::constant("b")]),
        );
        assert!(validate(&f).is_err());
    }

    #[test]
    fn test_inconsistent_arity_across_formulas() {
        let f1 = Formula::atom("P", vec![Term::constant("a")]);
        let f2 = Formula::atom("P", vec![]);
        assert!(validate(&f1).is_ok());
        assert!(validate(&f2).is_ok());
        assert!(validate_all([&f1, &f2]).is_err());
    }

    #[test]
    fn test_empty_names() {
        let empty_var = Formula::Quantified(
            crate::fol::Quantifier::Forall,
            Variable::new(""),
            Box::new(Formula::atom("P", vec![])),
        );
        assert!(validate(&empty_var).is_err());
        assert!(validate(&Formula::atom("", vec![])).is_err());
        assert!(validate(&Formula::atom("P", vec![Term::constant("")])).is_err());
    }
}
