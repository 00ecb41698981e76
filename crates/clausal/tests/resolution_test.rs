//! Integration tests for the resolver

use clausal::{
    resolve, resolution::resolvents, BudgetLimit, ClausalError, Clause, ClauseSet, Literal,
    MatchMode, Outcome, Refutation, Resolver, ResolverConfig, ResolverState, Term,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn lit(name: &str, args: &[&str], positive: bool) -> Literal {
    let atom = clausal::Atom::new(name, args.iter().map(|a| Term::constant(*a)).collect());
    if positive {
        Literal::positive(atom)
    } else {
        Literal::negative(atom)
    }
}

fn clause_set(clauses: Vec<Vec<Literal>>) -> ClauseSet {
    clauses.into_iter().map(Clause::new).collect()
}

/// Check every proof step against the exact resolution rule
fn verify_exact_proof(refutation: &Refutation) {
    let clauses = &refutation.clauses;
    for step in &refutation.proof {
        assert!(step.parent_a < step.result && step.parent_b < step.result);
        let derived = resolvents(
            &clauses[step.parent_a],
            &clauses[step.parent_b],
            MatchMode::Exact,
        );
        assert!(
            derived
                .iter()
                .any(|(l, c)| *l == step.literal && *c == clauses[step.result]),
            "step {} does not follow from its parents",
            step
        );
    }
    let last = refutation.proof.last().map(|s| s.result);
    assert_eq!(last, Some(refutation.empty_clause));
    assert!(clauses[refutation.empty_clause].is_empty());
}

#[test]
fn test_complementary_units_refuted() {
    init_tracing();
    let clauses = clause_set(vec![
        vec![lit("P", &["a"], true)],
        vec![lit("P", &["a"], false)],
    ]);
    match resolve(clauses, ResolverConfig::default()).unwrap() {
        Outcome::Refuted(refutation) => {
            verify_exact_proof(&refutation);
            assert_eq!(refutation.proof.len(), 1);
            assert_eq!(refutation.to_string(), "C3 = resolve(C1, C2) on P(a): ⊥");
        }
        other => panic!("Expected refutation, got {}", other),
    }
}

#[test]
fn test_input_empty_clause_prints_without_steps() {
    let mut clauses = clause_set(vec![vec![lit("P", &["a"], true)]]);
    clauses.insert(Clause::empty());
    match resolve(clauses, ResolverConfig::default()).unwrap() {
        Outcome::Refuted(refutation) => {
            assert!(refutation.proof.is_empty());
            assert_eq!(refutation.to_string(), "C2: ⊥");
        }
        other => panic!("Expected refutation, got {}", other),
    }
}

#[test]
fn test_unrelated_units_saturate() {
    init_tracing();
    let clauses = clause_set(vec![
        vec![lit("P", &["a"], true)],
        vec![lit("Q", &["a"], true)],
    ]);
    let outcome = resolve(clauses, ResolverConfig::default()).unwrap();
    assert_eq!(outcome.to_string(), "SATURATED");
    assert_eq!(outcome.clauses().len(), 2);
}

#[test]
fn test_chain_refutation_is_sound() {
    init_tracing();
    // P, P -> Q, Q -> R, R -> S, !S
    let clauses = clause_set(vec![
        vec![lit("P", &[], true)],
        vec![lit("P", &[], false), lit("Q", &[], true)],
        vec![lit("Q", &[], false), lit("R", &[], true)],
        vec![lit("R", &[], false), lit("S", &[], true)],
        vec![lit("S", &[], false)],
    ]);
    match resolve(clauses, ResolverConfig::default()).unwrap() {
        Outcome::Refuted(refutation) => verify_exact_proof(&refutation),
        other => panic!("Expected refutation, got {}", other),
    }
}

#[test]
fn test_satisfiable_set_saturates_without_tautologies() {
    init_tracing();
    // {P, Q}, {!P, Q}, {P, !Q} is satisfied by P = Q = true
    let clauses = clause_set(vec![
        vec![lit("P", &[], true), lit("Q", &[], true)],
        vec![lit("P", &[], false), lit("Q", &[], true)],
        vec![lit("P", &[], true), lit("Q", &[], false)],
    ]);
    let outcome = resolve(clauses, ResolverConfig::default()).unwrap();
    assert!(!outcome.is_refuted());
    for clause in outcome.clauses() {
        assert!(!clause.is_tautology());
        assert!(!clause.is_empty());
    }
}

#[test]
fn test_deterministic_trace() {
    let clauses = clause_set(vec![
        vec![lit("P", &[], true), lit("Q", &[], true)],
        vec![lit("P", &[], false), lit("Q", &[], true)],
        vec![lit("P", &[], true), lit("Q", &[], false)],
        vec![lit("P", &[], false), lit("Q", &[], false)],
    ]);

    let mut first = Resolver::new(clauses.clone(), ResolverConfig::default());
    let mut second = Resolver::new(clauses, ResolverConfig::default());
    let a = first.run().unwrap();
    let b = second.run().unwrap();
    assert_eq!(a, b);
    assert_eq!(first.trace(), second.trace());
    assert!(a.is_refuted());
}

#[test]
fn test_step_by_step_matches_run() {
    let clauses = clause_set(vec![
        vec![lit("P", &[], true), lit("Q", &[], true)],
        vec![lit("P", &[], false)],
        vec![lit("Q", &[], false)],
    ]);

    let mut stepped = Resolver::new(clauses.clone(), ResolverConfig::default());
    while stepped.step().unwrap() == ResolverState::Searching {}

    let mut ran = Resolver::new(clauses, ResolverConfig::default());
    ran.run().unwrap();

    assert_eq!(stepped.state(), ResolverState::Refuted);
    assert_eq!(stepped.trace(), ran.trace());
    assert_eq!(stepped.clauses(), ran.clauses());
}

#[test]
fn test_exhausted_budget_can_be_resumed() {
    init_tracing();
    let clauses = clause_set(vec![
        vec![lit("P", &[], true), lit("Q", &[], true)],
        vec![lit("P", &[], false), lit("Q", &[], true)],
        vec![lit("P", &[], true), lit("Q", &[], false)],
        vec![lit("P", &[], false), lit("Q", &[], false)],
    ]);
    let tight = ResolverConfig {
        max_iterations: 3,
        ..ResolverConfig::default()
    };
    let mut resolver = Resolver::new(clauses, tight);

    match resolver.run() {
        Err(ClausalError::ResolutionResourceExhausted {
            limit: BudgetLimit::Iterations,
            iterations,
            ..
        }) => assert_eq!(iterations, 3),
        other => panic!("Expected exhausted budget, got {:?}", other),
    }
    assert_eq!(resolver.state(), ResolverState::Searching);
    let partial_trace = resolver.trace().to_vec();

    resolver.set_config(ResolverConfig::default());
    assert!(resolver.run().unwrap().is_refuted());
    assert!(resolver.trace().starts_with(&partial_trace));
}

#[test]
fn test_unlimited_budget() {
    let config = ResolverConfig {
        max_iterations: 0,
        max_clauses: 0,
        timeout: None,
        match_mode: MatchMode::Exact,
    };
    let clauses = clause_set(vec![
        vec![lit("P", &["a"], true)],
        vec![lit("P", &["a"], false)],
    ]);
    assert!(resolve(clauses, config).unwrap().is_refuted());
}
