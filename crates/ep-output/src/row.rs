//! Plain data row types written by output backends.

use ep_disease::{EpiState, StatusCounts};
use ep_spatial::Edge;

/// SEIRD counts at the end of one simulated hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourlyRow {
    pub day:  u32,
    pub hour: u32,
    pub s:    usize,
    pub e:    usize,
    pub i:    usize,
    pub r:    usize,
    pub d:    usize,
}

impl HourlyRow {
    pub fn new(day: u32, hour: u32, counts: &StatusCounts) -> Self {
        Self {
            day,
            hour,
            s: counts[EpiState::Susceptible],
            e: counts[EpiState::Exposed],
            i: counts[EpiState::Infectious],
            r: counts[EpiState::Recovered],
            d: counts[EpiState::Deceased],
        }
    }
}

/// One undirected road between two building tiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadRow {
    pub x1:     i32,
    pub y1:     i32,
    pub x2:     i32,
    pub y2:     i32,
    pub weight: f64,
}

impl From<&Edge> for RoadRow {
    fn from(edge: &Edge) -> Self {
        Self { x1: edge.a.x, y1: edge.a.y, x2: edge.b.x, y2: edge.b.y, weight: edge.weight }
    }
}
