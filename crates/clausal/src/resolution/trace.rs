//! Proof extraction from a resolution trace

use super::ResolutionStep;
use std::collections::{HashMap, HashSet};

/// Steps that `target` depends on, found by backward traversal from it and
/// sorted by result index (parents always have lower indices than results).
///
/// Input clauses have no step, so an input `target` yields an empty proof.
pub fn extract_proof(trace: &[ResolutionStep], target: usize) -> Vec<ResolutionStep> {
    let by_result: HashMap<usize, &ResolutionStep> =
        trace.iter().map(|step| (step.result, step)).collect();

    let mut proof = Vec::new();
    let mut visited = HashSet::new();
    let mut to_visit = vec![target];

    while let Some(idx) = to_visit.pop() {
        if !visited.insert(idx) {
            continue;
        }
        if let Some(step) = by_result.get(&idx) {
            proof.push((*step).clone());
            to_visit.push(step.parent_a);
            to_visit.push(step.parent_b);
        }
    }

    proof.sort_by_key(|step| step.result);
    proof
}
