//! Clausification and resolver configuration types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for clause extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClausifyConfig {
    /// Discard clauses containing a literal and its complement
    pub drop_tautologies: bool,
    /// Give each clause its own fresh variable names
    pub rename_clause_variables: bool,
}

impl Default for ClausifyConfig {
    fn default() -> Self {
        ClausifyConfig {
            drop_tautologies: true,
            rename_clause_variables: false,
        }
    }
}

/// How the resolver decides that two literals clash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchMode {
    /// Same predicate and identical arguments, opposite polarity
    #[default]
    Exact,
    /// Opposite polarity and unifiable atoms (most general unifier with
    /// occurs check). Incomplete: there is no factoring, so some
    /// unsatisfiable sets saturate.
    Unify,
}

/// Budget and matching configuration for the resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum number of clause pairs examined
    pub max_iterations: usize,
    /// Maximum size of the clause set; a pair whose resolvents would grow
    /// the set past it is not examined
    pub max_clauses: usize,
    pub timeout: Option<Duration>,
    pub match_mode: MatchMode,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            max_iterations: 1_000_000, // 0 means no limit
            max_clauses: 0,            // 0 means no limit
            timeout: Some(Duration::from_secs(60)),
            match_mode: MatchMode::Exact,
        }
    }
}

impl ResolverConfig {
    /// Default budget with unification-based matching
    pub fn unifying() -> Self {
        ResolverConfig {
            match_mode: MatchMode::Unify,
            ..ResolverConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ResolverConfig =
            serde_json::from_str(r#"{"max_iterations": 50, "match_mode": "Unify"}"#).unwrap();
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.max_clauses, 0);
        assert_eq!(config.match_mode, MatchMode::Unify);
        assert_eq!(config.timeout, Some(Duration::from_secs(60)));

        let clausify: ClausifyConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(clausify, ClausifyConfig::default());
    }
}
