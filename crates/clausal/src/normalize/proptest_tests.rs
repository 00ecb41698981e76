//! Property-based tests for the normalization stages using proptest.

use super::*;
use crate::fol::{Quantifier, SkolemSymbol, Term};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

const VARIABLES: [&str; 3] = ["x", "y", "z"];
const CONSTANTS: [&str; 2] = ["a", "b"];

fn arb_term() -> impl Strategy<Value = Term> {
    prop_oneof![
        3 => prop::sample::select(VARIABLES.to_vec()).prop_map(|v| Term::var(v)),
        1 => prop::sample::select(CONSTANTS.to_vec()).prop_map(|c| Term::constant(c)),
    ]
}

/// Atoms over a fixed signature: R/0, P/1, Q/2
fn arb_atom() -> impl Strategy<Value = Formula> {
    prop_oneof![
        Just(Formula::atom("R", vec![])),
        arb_term().prop_map(|t| Formula::atom("P", vec![t])),
        (arb_term(), arb_term()).prop_map(|(t1, t2)| Formula::atom("Q", vec![t1, t2])),
    ]
}

/// Formulas of bounded depth, possibly with free variables
fn arb_open_formula() -> impl Strategy<Value = Formula> {
    arb_atom().prop_recursive(3, 16, 2, |inner| {
        let var = prop::sample::select(VARIABLES.to_vec());
        prop_oneof![
            inner.clone().prop_map(Formula::not),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::and(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::or(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::implies(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::iff(a, b)),
            (var.clone(), inner.clone()).prop_map(|(v, f)| Formula::forall(v, f)),
            (var, inner).prop_map(|(v, f)| Formula::exists(v, f)),
        ]
    })
}

/// Closed formulas: free variables are universally quantified at the top
fn arb_formula() -> impl Strategy<Value = Formula> {
    arb_open_formula().prop_map(|f| {
        let mut free: Vec<_> = f.free_variables().into_iter().collect();
        free.sort();
        Formula::with_prefix(free.into_iter().map(|v| (Quantifier::Forall, v)), f)
    })
}

fn collect_skolems(formula: &Formula, out: &mut HashSet<SkolemSymbol>) {
    fn in_term(term: &Term, out: &mut HashSet<SkolemSymbol>) {
        if let Term::Skolem(sym, args) = term {
            out.insert(sym.clone());
            args.iter().for_each(|arg| in_term(arg, out));
        }
    }
    match formula {
        Formula::Atom(atom) => atom.args.iter().for_each(|t| in_term(t, out)),
        Formula::Not(f) | Formula::Quantified(_, _, f) => collect_skolems(f, out),
        Formula::And(f1, f2)
        | Formula::Or(f1, f2)
        | Formula::Implies(f1, f2)
        | Formula::Iff(f1, f2) => {
            collect_skolems(f1, out);
            collect_skolems(f2, out);
        }
    }
}

/// Run the first three stages, which every later property needs
fn to_standardized_nnf(formula: Formula, ctx: &mut ScopeContext) -> Formula {
    let nnf = push_negations(eliminate_implications(formula)).unwrap();
    standardize_variables(nnf, ctx).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn implication_elimination_leaves_no_implications(f in arb_formula()) {
        let result = eliminate_implications(f);
        prop_assert!(!result.contains_implication());
    }

    #[test]
    fn negation_pushing_reaches_nnf_and_is_idempotent(f in arb_formula()) {
        let nnf = push_negations(eliminate_implications(f)).unwrap();
        prop_assert!(nnf.is_nnf());
        prop_assert_eq!(push_negations(nnf.clone()).unwrap(), nnf);
    }

    #[test]
    fn standardization_leaves_unique_binders(f in arb_formula()) {
        let mut ctx = ScopeContext::new();
        let result = to_standardized_nnf(f, &mut ctx);
        let bound = result.bound_variables();
        let unique: HashSet<_> = bound.iter().collect();
        prop_assert_eq!(bound.len(), unique.len());
        prop_assert!(result.is_closed());
    }

    #[test]
    fn prenex_matrix_is_quantifier_free(f in arb_formula()) {
        let mut ctx = ScopeContext::new();
        let standardized = to_standardized_nnf(f, &mut ctx);
        let binders = standardized.bound_variables().len();

        let (prefix, matrix) = prenex(standardized).unwrap().split_prefix();
        prop_assert!(!matrix.contains_quantifier());
        prop_assert_eq!(prefix.len(), binders);
    }

    #[test]
    fn skolem_arity_matches_enclosing_universals(f in arb_formula()) {
        let mut ctx = ScopeContext::new();
        let prenexed = prenex(to_standardized_nnf(f, &mut ctx)).unwrap();

        // Names are minted in prefix order from an empty context
        let mut expected = HashMap::new();
        let mut universals = 0;
        for (q, _) in prenexed.clone().split_prefix().0 {
            match q {
                Quantifier::Forall => universals += 1,
                Quantifier::Exists => {
                    expected.insert(format!("sk{}", expected.len()), universals);
                }
            }
        }

        let result = skolemize(prenexed, &mut ctx).unwrap();
        prop_assert!(!result.contains_existential());

        let mut skolems = HashSet::new();
        collect_skolems(&result, &mut skolems);
        for sym in skolems {
            prop_assert_eq!(Some(&sym.arity), expected.get(&sym.name));
        }
    }

    #[test]
    fn pipeline_yields_cnf(f in arb_formula()) {
        let pipeline = Pipeline::default();
        let mut ctx = ScopeContext::new();
        ctx.reserve_symbols(&f).unwrap();
        let cnf = pipeline.normalize(f, &mut ctx).unwrap();
        prop_assert!(cnf.is_cnf());
        prop_assert!(!cnf.contains_quantifier());
    }

    #[test]
    fn clausified_sets_hold_no_tautologies(f in arb_formula()) {
        let clauses = clausify(f).unwrap();
        for clause in &clauses {
            prop_assert!(!clause.is_tautology());
            prop_assert!(!clause.is_empty());
        }
    }
}
