//! JSON serialization types for resolution outcomes

use crate::fol::{clause_label, Clause, ClauseSet, Literal, Term};
use crate::resolution::{Outcome, ResolutionStep, Resolver};
use serde::{Deserialize, Serialize};

/// JSON representation of a term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TermJson {
    Variable { name: String },
    Constant { name: String },
    Skolem { name: String, args: Vec<TermJson> },
}

impl From<&Term> for TermJson {
    fn from(term: &Term) -> Self {
        match term {
            Term::Variable(v) => TermJson::Variable {
                name: v.name.clone(),
            },
            Term::Constant(c) => TermJson::Constant {
                name: c.name.clone(),
            },
            Term::Skolem(sym, args) => TermJson::Skolem {
                name: sym.name.clone(),
                args: args.iter().map(TermJson::from).collect(),
            },
        }
    }
}

/// JSON representation of a literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralJson {
    pub polarity: bool,
    pub predicate: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub args: Vec<TermJson>,
}

impl From<&Literal> for LiteralJson {
    fn from(lit: &Literal) -> Self {
        LiteralJson {
            polarity: lit.polarity,
            predicate: lit.atom.predicate.name.clone(),
            args: lit.atom.args.iter().map(TermJson::from).collect(),
        }
    }
}

/// JSON representation of a clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseJson {
    pub id: usize,
    pub label: String,
    /// Rendered clause, e.g. `!P(a),Q(a)`
    pub text: String,
    pub literals: Vec<LiteralJson>,
}

impl ClauseJson {
    pub fn from_clause(id: usize, clause: &Clause) -> Self {
        ClauseJson {
            id,
            label: clause_label(id),
            text: clause.to_string(),
            literals: clause.literals().iter().map(LiteralJson::from).collect(),
        }
    }

    fn all(clauses: &ClauseSet) -> Vec<ClauseJson> {
        clauses
            .iter()
            .enumerate()
            .map(|(id, clause)| ClauseJson::from_clause(id, clause))
            .collect()
    }
}

/// JSON representation of a resolution step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepJson {
    pub clause_idx: usize,
    pub premises: [usize; 2],
    pub literal: LiteralJson,
}

impl From<&ResolutionStep> for StepJson {
    fn from(step: &ResolutionStep) -> Self {
        StepJson {
            clause_idx: step.result,
            premises: [step.parent_a, step.parent_b],
            literal: LiteralJson::from(&step.literal),
        }
    }
}

/// JSON representation of a resolution run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result")]
pub enum OutcomeJson {
    Refuted {
        empty_clause_idx: usize,
        proof: Vec<StepJson>,
        final_clauses: Vec<ClauseJson>,
    },
    Saturated {
        final_clauses: Vec<ClauseJson>,
    },
    /// The resolver stopped before a verdict (budget exhausted or stepping
    /// was abandoned)
    Unfinished {
        iterations: usize,
        steps: Vec<StepJson>,
        final_clauses: Vec<ClauseJson>,
    },
}

impl From<&Outcome> for OutcomeJson {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Refuted(refutation) => OutcomeJson::Refuted {
                empty_clause_idx: refutation.empty_clause,
                proof: refutation.proof.iter().map(StepJson::from).collect(),
                final_clauses: ClauseJson::all(&refutation.clauses),
            },
            Outcome::Saturated(clauses) => OutcomeJson::Saturated {
                final_clauses: ClauseJson::all(clauses),
            },
        }
    }
}

impl OutcomeJson {
    /// Report on a resolver in any state
    pub fn from_resolver(resolver: &Resolver) -> Self {
        match resolver.outcome() {
            Some(outcome) => OutcomeJson::from(&outcome),
            None => OutcomeJson::Unfinished {
                iterations: resolver.iterations(),
                steps: resolver.trace().iter().map(StepJson::from).collect(),
                final_clauses: ClauseJson::all(resolver.clauses()),
            },
        }
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolverConfig;
    use crate::fol::Atom;
    use crate::resolution::resolve;

    fn units() -> ClauseSet {
        let p = Atom::new("P", vec![Term::skolem("f", vec![Term::constant("a")])]);
        [Literal::positive(p.clone()), Literal::negative(p)]
            .into_iter()
            .map(|lit| Clause::new(vec![lit]))
            .collect()
    }

    #[test]
    fn test_refutation_json() {
        let outcome = resolve(units(), ResolverConfig::default()).unwrap();
        let json = serde_json::to_value(OutcomeJson::from(&outcome)).unwrap();

        assert_eq!(json["result"], "Refuted");
        assert_eq!(json["empty_clause_idx"], 2);
        assert_eq!(json["proof"][0]["premises"], serde_json::json!([0, 1]));
        assert_eq!(json["final_clauses"][2]["label"], "C3");
        assert_eq!(json["final_clauses"][2]["text"], "⊥");

        let arg = &json["final_clauses"][0]["literals"][0]["args"][0];
        assert_eq!(arg["type"], "Skolem");
        assert_eq!(arg["args"][0]["name"], "a");
    }

    #[test]
    fn test_round_trip() {
        let outcome = resolve(units(), ResolverConfig::default()).unwrap();
        let report = OutcomeJson::from(&outcome);
        let text = report.to_json_string().unwrap();
        let parsed: OutcomeJson = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_unfinished_resolver() {
        let resolver = Resolver::new(units(), ResolverConfig::default());
        match OutcomeJson::from_resolver(&resolver) {
            OutcomeJson::Unfinished {
                iterations,
                steps,
                final_clauses,
            } => {
                assert_eq!(iterations, 0);
                assert!(steps.is_empty());
                assert_eq!(final_clauses.len(), 2);
            }
            other => panic!("expected unfinished report, got {:?}", other),
        }
    }
}
