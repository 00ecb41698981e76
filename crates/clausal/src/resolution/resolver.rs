//! The resolution state machine

use super::rule::resolvents;
use super::trace::extract_proof;
use super::{Outcome, Refutation, ResolutionStep, ResolverState};
use crate::config::ResolverConfig;
use crate::error::{BudgetLimit, ClausalError, Result};
use crate::fol::{clause_label, Clause, ClauseSet, Literal};
use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, trace};

/// Resolution refutation over a growing clause set.
///
/// Pairs are examined in a fixed order: clause `j` is paired with every
/// `i < j` in ascending `i`, for `j` ascending over the set as it grows. A
/// clause appended later is therefore paired with every earlier one before
/// the search can saturate.
///
/// All appends go through [`Resolver::step`], so clause indices stay dense
/// and the trace always agrees with the clause set.
pub struct Resolver {
    clauses: ClauseSet,
    config: ResolverConfig,
    trace: Vec<ResolutionStep>,
    /// Set once the empty clause is in the set
    empty_clause: Option<usize>,
    saturated: bool,
    /// Next pair to examine
    next_i: usize,
    next_j: usize,
    iterations: usize,
    start_time: Option<Instant>,
}

impl Resolver {
    pub fn new(clauses: ClauseSet, config: ResolverConfig) -> Self {
        Resolver {
            empty_clause: clauses.empty_clause(),
            clauses,
            config,
            trace: Vec::new(),
            saturated: false,
            next_i: 0,
            next_j: 1,
            iterations: 0,
            start_time: None,
        }
    }

    pub fn state(&self) -> ResolverState {
        if self.empty_clause.is_some() {
            ResolverState::Refuted
        } else if self.saturated {
            ResolverState::Saturated
        } else {
            ResolverState::Searching
        }
    }

    pub fn clauses(&self) -> &ClauseSet {
        &self.clauses
    }

    /// Every step taken so far, in derivation order
    pub fn trace(&self) -> &[ResolutionStep] {
        &self.trace
    }

    /// Number of clause pairs examined
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Replace the budget, e.g. to resume after `ResolutionResourceExhausted`.
    /// The timeout clock restarts on the next step.
    pub fn set_config(&mut self, config: ResolverConfig) {
        self.config = config;
        self.start_time = None;
    }

    /// Examine the next clause pair.
    ///
    /// Returns the state after the pair; a terminal state is returned
    /// unchanged. Fails with `ResolutionResourceExhausted` when the budget
    /// is spent, leaving the resolver `Searching` so it can be resumed.
    pub fn step(&mut self) -> Result<ResolverState> {
        if self.state().is_terminal() {
            return Ok(self.state());
        }
        if self.next_j >= self.clauses.len() {
            self.saturated = true;
            debug!(
                iterations = self.iterations,
                clauses = self.clauses.len(),
                "clause set saturated"
            );
            return Ok(ResolverState::Saturated);
        }
        self.check_budget()?;

        let (i, j) = (self.next_i, self.next_j);
        let derived: Vec<_> =
            resolvents(&self.clauses[i], &self.clauses[j], self.config.match_mode)
                .into_iter()
                .filter(|(_, resolvent)| !resolvent.is_tautology())
                .collect();
        self.check_clause_budget(&derived)?;

        self.next_i += 1;
        if self.next_i == self.next_j {
            self.next_i = 0;
            self.next_j += 1;
        }
        self.iterations += 1;

        for (literal, resolvent) in derived {
            let (result, added) = self.clauses.insert(resolvent);
            if !added {
                continue;
            }

            trace!(
                clause = %self.clauses[result],
                index = %clause_label(result),
                parent_a = %clause_label(i),
                parent_b = %clause_label(j),
                "derived clause"
            );
            self.trace.push(ResolutionStep {
                parent_a: i,
                parent_b: j,
                literal,
                result,
            });

            if self.clauses[result].is_empty() {
                self.empty_clause = Some(result);
                debug!(
                    iterations = self.iterations,
                    clauses = self.clauses.len(),
                    "empty clause derived"
                );
                break;
            }
        }
        Ok(self.state())
    }

    /// Step until a verdict is reached
    pub fn run(&mut self) -> Result<Outcome> {
        debug!(
            clauses = self.clauses.len(),
            mode = ?self.config.match_mode,
            "starting resolution"
        );
        loop {
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }
            self.step()?;
        }
    }

    /// The verdict, once the resolver is in a terminal state
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(empty_clause) = self.empty_clause {
            Some(Outcome::Refuted(Refutation {
                empty_clause,
                proof: extract_proof(&self.trace, empty_clause),
                clauses: self.clauses.clone(),
            }))
        } else if self.saturated {
            Some(Outcome::Saturated(self.clauses.clone()))
        } else {
            None
        }
    }

    fn check_budget(&mut self) -> Result<()> {
        let start = *self.start_time.get_or_insert_with(Instant::now);

        if self.config.max_iterations > 0 && self.iterations >= self.config.max_iterations {
            return Err(self.exhausted(BudgetLimit::Iterations));
        }
        if self
            .config
            .timeout
            .is_some_and(|timeout| start.elapsed() >= timeout)
        {
            return Err(self.exhausted(BudgetLimit::Timeout));
        }
        Ok(())
    }

    /// Fails if appending `derived` would take the set past `max_clauses`.
    /// Runs before the pair is consumed, so a resumed resolver retries it.
    fn check_clause_budget(&self, derived: &[(Literal, Clause)]) -> Result<()> {
        if self.config.max_clauses == 0 {
            return Ok(());
        }
        let mut fresh: HashSet<&Clause> = HashSet::new();
        for (_, resolvent) in derived {
            if self.clauses.contains(resolvent) || !fresh.insert(resolvent) {
                continue;
            }
            if resolvent.is_empty() {
                break;
            }
        }
        if self.clauses.len() + fresh.len() > self.config.max_clauses {
            return Err(self.exhausted(BudgetLimit::Clauses));
        }
        Ok(())
    }

    fn exhausted(&self, limit: BudgetLimit) -> ClausalError {
        debug!(%limit, iterations = self.iterations, "resolution budget exhausted");
        ClausalError::ResolutionResourceExhausted {
            limit,
            iterations: self.iterations,
            clauses: self.clauses.len(),
        }
    }
}
