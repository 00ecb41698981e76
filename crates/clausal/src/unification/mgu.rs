//! Most General Unifier (MGU) computation

use crate::fol::{Atom, Substitution, Term, Variable};
use thiserror::Error;

/// Result of a unification attempt
pub type UnificationResult = Result<Substitution, UnificationError>;

/// Why two terms or atoms have no unifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnificationError {
    /// A variable would be bound to a term containing it
    #[error("occurs check: `{0}` occurs in `{1}`")]
    OccursCheck(Variable, Term),
    /// Two Skolem functions with different names
    #[error("function clash: `{0}` vs `{1}`")]
    FunctionClash(String, String),
    /// Argument lists of different length
    #[error("arity mismatch: {0} vs {1}")]
    ArityMismatch(usize, usize),
    /// Two distinct constants
    #[error("constant clash: `{0}` vs `{1}`")]
    ConstantClash(String, String),
    /// A Skolem function against a constant
    #[error("function `{0}` clashes with constant `{1}`")]
    FunctionConstantClash(String, String),
    /// Atoms over different predicates
    #[error("predicate clash: `{0}` vs `{1}`")]
    PredicateClash(String, String),
}

/// Unify two terms, returning a most general unifier (MGU) if one exists
pub fn unify(term1: &Term, term2: &Term) -> UnificationResult {
    let mut subst = Substitution::new();
    solve(vec![(term1.clone(), term2.clone())], &mut subst)?;
    Ok(subst)
}

/// Unify two atoms argument by argument.
///
/// Fails unless both atoms have the same predicate symbol.
pub fn unify_atoms(atom1: &Atom, atom2: &Atom) -> UnificationResult {
    if atom1.predicate.name != atom2.predicate.name {
        return Err(UnificationError::PredicateClash(
            atom1.predicate.name.clone(),
            atom2.predicate.name.clone(),
        ));
    }
    if atom1.args.len() != atom2.args.len() {
        return Err(UnificationError::ArityMismatch(
            atom1.args.len(),
            atom2.args.len(),
        ));
    }

    let mut subst = Substitution::new();
    let equations = atom1.args.iter().cloned().zip(atom2.args.iter().cloned());
    solve(equations.rev().collect(), &mut subst)?;
    Ok(subst)
}

/// Solve a stack of term equations, extending `subst`. The equation on top
/// of the stack is solved first.
fn solve(
    mut equations: Vec<(Term, Term)>,
    subst: &mut Substitution,
) -> Result<(), UnificationError> {
    while let Some((lhs, rhs)) = equations.pop() {
        match (lhs.apply_substitution(subst), rhs.apply_substitution(subst)) {
            (lhs, rhs) if lhs == rhs => {}
            (Term::Variable(var), term) | (term, Term::Variable(var)) => bind(var, term, subst)?,
            (Term::Skolem(f, f_args), Term::Skolem(g, g_args)) => {
                if f.name != g.name {
                    return Err(UnificationError::FunctionClash(f.name, g.name));
                }
                if f_args.len() != g_args.len() {
                    return Err(UnificationError::ArityMismatch(f_args.len(), g_args.len()));
                }
                equations.extend(f_args.into_iter().zip(g_args).rev());
            }
            (Term::Constant(c), Term::Constant(d)) => {
                return Err(UnificationError::ConstantClash(c.name, d.name));
            }
            (Term::Skolem(f, _), Term::Constant(c)) | (Term::Constant(c), Term::Skolem(f, _)) => {
                return Err(UnificationError::FunctionConstantClash(f.name, c.name));
            }
        }
    }
    Ok(())
}

/// Bind `var` to `term` unless `var` occurs inside it. Earlier bindings are
/// rewritten so none of them mentions `var`.
fn bind(var: Variable, term: Term, subst: &mut Substitution) -> Result<(), UnificationError> {
    if term.contains_variable(&var) {
        return Err(UnificationError::OccursCheck(var, term));
    }
    subst.insert_normalized(var, term);
    Ok(())
}
