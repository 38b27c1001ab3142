//! Buildings and the town that holds them.
//!
//! Houses and offices share one record type; [`BuildingKind`] only selects
//! the colour and which roster an agent joins.

use std::collections::HashMap;

use ep_core::{AgentId, BuildingId, BuildingKind, PixelPos, Rgb, TileCoord, grid_divisions};

use crate::{PopulationError, PopulationResult};

// ── Building ──────────────────────────────────────────────────────────────────

/// One building tile and its registered occupants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Building {
    pub id:       BuildingId,
    pub kind:     BuildingKind,
    pub location: TileCoord,
    occupants:    Vec<AgentId>,
}

impl Building {
    pub fn new(id: BuildingId, kind: BuildingKind, location: TileCoord) -> Self {
        Self { id, kind, location, occupants: Vec::new() }
    }

    pub fn colour(&self) -> Rgb {
        self.kind.colour()
    }

    /// Residents of a house or workers of an office, in registration order.
    pub fn occupants(&self) -> &[AgentId] {
        &self.occupants
    }

    pub fn add_occupant(&mut self, agent: AgentId) {
        self.occupants.push(agent);
    }
}

/// Evenly spaced slots for `occupants` people inside the tile at `location`.
///
/// The tile is divided into a `⌈√k⌉ × ⌈√k⌉` grid; slots are listed row by
/// row, x varying fastest, each rounded to a whole pixel (ties to even).
pub fn interior_positions(location: TileCoord, size: i32, occupants: usize) -> Vec<PixelPos> {
    let divisions = grid_divisions(occupants);
    let offset = f64::from(size) / f64::from(divisions + 1);
    let origin_x = f64::from(location.x * size);
    let origin_y = f64::from(location.y * size);

    let mut slots = Vec::with_capacity((divisions * divisions).max(0) as usize);
    for row in 1..=divisions {
        for col in 1..=divisions {
            slots.push(PixelPos::new(
                (origin_x + offset * f64::from(col)).round_ties_even(),
                (origin_y + offset * f64::from(row)).round_ties_even(),
            ));
        }
    }
    slots
}

// ── Town ──────────────────────────────────────────────────────────────────────

/// Every building in the run, indexed by id and by tile.
#[derive(Clone, Debug)]
pub struct Town {
    building_size: i32,
    buildings:     Vec<Building>,
    by_location:   HashMap<TileCoord, BuildingId>,
}

impl Town {
    pub fn new(building_size: i32) -> Self {
        Self { building_size, buildings: Vec::new(), by_location: HashMap::new() }
    }

    /// Place a building.  Each tile holds at most one.
    pub fn add_building(&mut self, kind: BuildingKind, location: TileCoord) -> PopulationResult<BuildingId> {
        if self.by_location.contains_key(&location) {
            return Err(PopulationError::TileOccupied(location));
        }
        let id = BuildingId(self.buildings.len() as u32);
        self.buildings.push(Building::new(id, kind, location));
        self.by_location.insert(location, id);
        Ok(id)
    }

    /// Side length of a building tile in pixels.
    pub fn building_size(&self) -> i32 {
        self.building_size
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    #[inline]
    pub fn get(&self, id: BuildingId) -> &Building {
        &self.buildings[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: BuildingId) -> &mut Building {
        &mut self.buildings[id.index()]
    }

    /// Building on `location`, if any.
    pub fn at(&self, location: TileCoord) -> Option<&Building> {
        self.by_location.get(&location).map(|&id| self.get(id))
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Houses in placement order.
    pub fn houses(&self) -> impl Iterator<Item = &Building> + '_ {
        self.of_kind(BuildingKind::House)
    }

    /// Offices in placement order.
    pub fn offices(&self) -> impl Iterator<Item = &Building> + '_ {
        self.of_kind(BuildingKind::Office)
    }

    /// Every building tile; the nodes of the road network.
    pub fn locations(&self) -> impl Iterator<Item = TileCoord> + '_ {
        self.buildings.iter().map(|b| b.location)
    }

    fn of_kind(&self, kind: BuildingKind) -> impl Iterator<Item = &Building> + '_ {
        self.buildings.iter().filter(move |b| b.kind == kind)
    }
}
