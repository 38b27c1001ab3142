//! Agents per epidemic state.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use crate::EpiState;

/// Number of agents in each SEIRD state.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusCounts {
    counts: [usize; 5],
}

impl StatusCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally an iterator of states.
    pub fn from_states(states: impl IntoIterator<Item = EpiState>) -> Self {
        let mut counts = Self::new();
        for state in states {
            counts.add(state);
        }
        counts
    }

    #[inline]
    pub fn add(&mut self, state: EpiState) {
        self.counts[state.index()] += 1;
    }

    #[inline]
    pub fn get(&self, state: EpiState) -> usize {
        self.counts[state.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Exposed plus infectious.
    pub fn active(&self) -> usize {
        self.get(EpiState::Exposed) + self.get(EpiState::Infectious)
    }

    /// `(state, count)` pairs in S, E, I, R, D order.
    pub fn iter(&self) -> impl Iterator<Item = (EpiState, usize)> + '_ {
        EpiState::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    /// Counts keyed by state symbol.  Every symbol is present, zero or not.
    pub fn to_map(&self) -> BTreeMap<char, usize> {
        self.iter().map(|(s, n)| (s.symbol(), n)).collect()
    }
}

impl Index<EpiState> for StatusCounts {
    type Output = usize;

    fn index(&self, state: EpiState) -> &usize {
        &self.counts[state.index()]
    }
}

impl FromIterator<EpiState> for StatusCounts {
    fn from_iter<I: IntoIterator<Item = EpiState>>(iter: I) -> Self {
        Self::from_states(iter)
    }
}

impl fmt::Display for StatusCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (state, n) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{state}={n}")?;
            first = false;
        }
        Ok(())
    }
}
