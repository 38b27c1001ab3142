//! Roster indices.
//!
//! Agents and buildings are stored in `Vec`s and never removed, so an id is
//! just a position in its roster.  The wrappers keep the two index spaces
//! apart at compile time.

use std::fmt;

macro_rules! roster_id {
    ($(#[$attr:meta])* $name:ident, $label:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            /// Position in the roster.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " #{}"), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;

            fn try_from(n: usize) -> Result<Self, Self::Error> {
                u32::try_from(n).map($name)
            }
        }
    };
}

roster_id! {
    /// An agent's position in the population roster.
    AgentId, "agent"
}

roster_id! {
    /// A building's position in the town, houses and offices alike.
    BuildingId, "building"
}
