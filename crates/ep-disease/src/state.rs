//! Epidemic states.

use std::fmt;

use ep_core::Rgb;

/// SEIRD state of one agent.
///
/// ```text
/// S ──contact──► E ──incubation──► I ──┬─► R
///                                      └─► D
/// ```
///
/// R and D are terminal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EpiState {
    #[default]
    Susceptible,
    Exposed,
    Infectious,
    Recovered,
    Deceased,
}

impl EpiState {
    /// All states in reporting order.
    pub const ALL: [EpiState; 5] = [
        EpiState::Susceptible,
        EpiState::Exposed,
        EpiState::Infectious,
        EpiState::Recovered,
        EpiState::Deceased,
    ];

    /// One-letter symbol used as the key of status counts.
    pub fn symbol(self) -> char {
        match self {
            EpiState::Susceptible => 'S',
            EpiState::Exposed     => 'E',
            EpiState::Infectious  => 'I',
            EpiState::Recovered   => 'R',
            EpiState::Deceased    => 'D',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<EpiState> {
        EpiState::ALL.into_iter().find(|s| s.symbol() == symbol)
    }

    /// Position in [`EpiState::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display colour of an agent in this state.
    pub fn colour(self) -> Rgb {
        match self {
            EpiState::Susceptible => Rgb(144, 238, 144),
            EpiState::Exposed     => Rgb(255, 255, 0),
            EpiState::Infectious  => Rgb(255, 0, 0),
            EpiState::Recovered   => Rgb(204, 153, 255),
            EpiState::Deceased    => Rgb(50, 50, 50),
        }
    }

    /// E or I: the infection is still running its course.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, EpiState::Exposed | EpiState::Infectious)
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, EpiState::Recovered | EpiState::Deceased)
    }
}

impl fmt::Display for EpiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
