//! Binary resolution between two clauses

use crate::config::MatchMode;
use crate::fol::{Clause, Literal, Variable};
use crate::unification::unify_atoms;
use std::collections::{HashMap, HashSet};

/// Prefix for canonical variable names of unified resolvents
const RESOLVENT_VARIABLE_PREFIX: &str = "X";

/// All resolvents of `a` and `b`, each paired with the literal of `a` that
/// was resolved upon. Resolvents come out in the order of `a`'s literals.
pub fn resolvents(a: &Clause, b: &Clause, mode: MatchMode) -> Vec<(Literal, Clause)> {
    match mode {
        MatchMode::Exact => exact_resolvents(a, b),
        MatchMode::Unify => unified_resolvents(a, b),
    }
}

fn exact_resolvents(a: &Clause, b: &Clause) -> Vec<(Literal, Clause)> {
    a.literals()
        .iter()
        .filter_map(|lit| {
            let complement = lit.complement();
            if !b.contains(&complement) {
                return None;
            }
            let resolvent = a.without(lit).chain(b.without(&complement)).cloned().collect();
            Some((lit.clone(), resolvent))
        })
        .collect()
}

fn unified_resolvents(a: &Clause, b: &Clause) -> Vec<(Literal, Clause)> {
    // Rename b apart from a
    let b = rename_apart(b, &a.variables());

    let mut results = Vec::new();
    for lit1 in a.literals() {
        for lit2 in b.literals() {
            if lit1.polarity == lit2.polarity || lit1.atom.predicate != lit2.atom.predicate {
                continue;
            }
            if let Ok(mgu) = unify_atoms(&lit1.atom, &lit2.atom) {
                let resolvent: Clause = a
                    .without(lit1)
                    .chain(b.without(lit2))
                    .map(|lit| lit.apply_substitution(&mgu))
                    .collect();
                results.push((
                    lit1.clone(),
                    resolvent.normalize_variables(RESOLVENT_VARIABLE_PREFIX),
                ));
            }
        }
    }
    results
}

/// Rename the variables of `clause` that also occur in `taken`
fn rename_apart(clause: &Clause, taken: &HashSet<Variable>) -> Clause {
    let own = clause.variables();
    let mut names: HashMap<Variable, Variable> = HashMap::new();
    let mut used: HashSet<Variable> = taken.union(&own).cloned().collect();
    clause.rename_variables(|v| {
        if !taken.contains(v) {
            return v.clone();
        }
        names
            .entry(v.clone())
            .or_insert_with(|| {
                let mut n = 1;
                loop {
                    let candidate = Variable::new(format!("{}_{}", v.name, n));
                    if used.insert(candidate.clone()) {
                        return candidate;
                    }
                    n += 1;
                }
            })
            .clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::{Atom, Term};

    fn pos(name: &str, args: Vec<Term>) -> Literal {
        Literal::positive(Atom::new(name, args))
    }

    fn neg(name: &str, args: Vec<Term>) -> Literal {
        Literal::negative(Atom::new(name, args))
    }

    fn a() -> Term {
        Term::constant("a")
    }

    #[test]
    fn test_exact_resolvent() {
        // {!P(a), Q(a)} and {P(a)} -> {Q(a)}
        let c1 = Clause::new(vec![neg("P", vec![a()]), pos("Q", vec![a()])]);
        let c2 = Clause::new(vec![pos("P", vec![a()])]);
        let results = resolvents(&c1, &c2, MatchMode::Exact);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0, neg("P", vec![a()]));
        assert_eq!(results[0].1, Clause::new(vec![pos("Q", vec![a()])]));
    }

    #[test]
    fn test_exact_requires_identical_arguments() {
        let c1 = Clause::new(vec![neg("P", vec![Term::var("x")])]);
        let c2 = Clause::new(vec![pos("P", vec![a()])]);
        assert!(resolvents(&c1, &c2, MatchMode::Exact).is_empty());
    }

    #[test]
    fn test_exact_one_resolvent_per_clashing_literal() {
        // {P, Q} and {!P, !Q} clash twice; both resolvents are tautologies
        let c1 = Clause::new(vec![pos("P", vec![]), pos("Q", vec![])]);
        let c2 = Clause::new(vec![neg("P", vec![]), neg("Q", vec![])]);
        let results = resolvents(&c1, &c2, MatchMode::Exact);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|(_, clause)| clause.is_tautology()));
    }

    #[test]
    fn test_complementary_units_give_empty_clause() {
        let c1 = Clause::new(vec![pos("P", vec![a()])]);
        let c2 = Clause::new(vec![neg("P", vec![a()])]);
        let results = resolvents(&c1, &c2, MatchMode::Exact);
        assert_eq!(results.len(), 1);
        assert!(results[0].1.is_empty());
    }

    #[test]
    fn test_unified_resolvent() {
        // {!P(x), Q(x)} and {P(a)} -> {Q(a)}
        let c1 = Clause::new(vec![neg("P", vec![Term::var("x")]), pos("Q", vec![Term::var("x")])]);
        let c2 = Clause::new(vec![pos("P", vec![a()])]);
        let results = resolvents(&c1, &c2, MatchMode::Unify);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].1, Clause::new(vec![pos("Q", vec![a()])]));
    }

    #[test]
    fn test_unify_renames_apart() {
        // {P(x), Q(x)} and {!P(f(x))} -> {Q(f(X0))}
        let x = Term::var("x");
        let c1 = Clause::new(vec![pos("P", vec![x.clone()]), pos("Q", vec![x.clone()])]);
        let c2 = Clause::new(vec![neg("P", vec![Term::skolem("f", vec![x])])]);
        let results = resolvents(&c1, &c2, MatchMode::Unify);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].1.to_string(), "Q(f(X0))");
    }

    #[test]
    fn test_unify_respects_occurs_check() {
        // {P(x, x)} and {!P(y, f(y))} do not resolve
        let c1 = Clause::new(vec![pos("P", vec![Term::var("x"), Term::var("x")])]);
        let y = Term::var("y");
        let c2 = Clause::new(vec![neg("P", vec![y.clone(), Term::skolem("f", vec![y])])]);
        assert!(resolvents(&c1, &c2, MatchMode::Unify).is_empty());
    }
}
