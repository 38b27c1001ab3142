//! Building kinds.

/// An RGB colour triple handed to rendering collaborators.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Whether a building is a home or a workplace.
///
/// Houses and offices behave identically in the simulation; the tag only
/// selects the colour and which roster an agent is registered in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuildingKind {
    House,
    Office,
}

impl BuildingKind {
    pub fn colour(self) -> Rgb {
        match self {
            BuildingKind::House  => Rgb(100, 200, 100),
            BuildingKind::Office => Rgb(100, 100, 200),
        }
    }
}

/// Side length of the square slot grid for `occupants` people: `⌈√k⌉`.
#[inline]
pub fn grid_divisions(occupants: usize) -> i32 {
    (occupants as f64).sqrt().ceil() as i32
}

/// Display radius of each of `occupants` people inside a building of `size`
/// pixels: `min(size / 10, size / (2·(⌈√k⌉ + 1)))`.
pub fn occupant_radius(size: i32, occupants: usize) -> i32 {
    let divisions = grid_divisions(occupants);
    (size / 10).min(size / (2 * (divisions + 1)))
}
