//! Candidate-contact index.
//!
//! Two agents can only come within touching distance if their commutes
//! overlap, so each agent's contact checks are restricted to agents whose
//! home → office route shares at least one waypoint with its own.  Routes are
//! compared as unordered sets of rounded pixel coordinates.
//!
//! Building the index is an O(n²) set-intersection pass, paid once after the
//! population is created; every motion tick then checks only the candidates.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashSet;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashSet as HashSet;

use ep_agent::Agent;
use ep_core::AgentId;

type WaypointSet = HashSet<(i64, i64)>;

/// For every agent, the other agents whose route overlaps its own.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandidateIndex {
    candidates: Vec<Vec<AgentId>>,
}

impl CandidateIndex {
    /// Index `agents`.  Agent `i` of the slice must have `AgentId(i)`.
    ///
    /// Each list is in ascending agent order.  With the `parallel` feature the
    /// lists are computed on Rayon's pool; the result is identical.
    pub fn build(agents: &[Agent]) -> Self {
        let sets: Vec<WaypointSet> = agents
            .iter()
            .map(|a| a.route_to_office().grid_keys().collect())
            .collect();

        #[cfg(not(feature = "parallel"))]
        let candidates: Vec<Vec<AgentId>> = (0..sets.len()).map(|i| overlapping(&sets, i)).collect();

        #[cfg(feature = "parallel")]
        let candidates: Vec<Vec<AgentId>> = {
            use rayon::prelude::*;
            (0..sets.len()).into_par_iter().map(|i| overlapping(&sets, i)).collect()
        };

        let index = Self { candidates };
        log::debug!(
            "candidate index: {} agents, {} overlapping pairs",
            index.len(),
            index.pair_count(),
        );
        index
    }

    /// Agents that share a waypoint with `agent`; empty for unknown ids.
    #[inline]
    pub fn candidates(&self, agent: AgentId) -> &[AgentId] {
        self.candidates.get(agent.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Unordered overlapping pairs.  The relation is symmetric, so every pair
    /// is listed twice.
    pub fn pair_count(&self) -> usize {
        self.candidates.iter().map(Vec::len).sum::<usize>() / 2
    }
}

fn overlapping(sets: &[WaypointSet], i: usize) -> Vec<AgentId> {
    let mine = &sets[i];
    sets.iter()
        .enumerate()
        .filter(|&(j, other)| j != i && !mine.is_disjoint(other))
        .map(|(j, _)| AgentId(j as u32))
        .collect()
}
