//! Commute routes in pixel space.

use ep_core::PixelPos;
use ep_spatial::Path;

/// Ordered pixel waypoints of one commute leg.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    waypoints: Vec<PixelPos>,
}

impl Route {
    pub fn new(waypoints: Vec<PixelPos>) -> Self {
        Self { waypoints }
    }

    /// Home slot, then the centre pixel of every tile on `path`, then the
    /// office slot.
    pub fn commute(start: PixelPos, path: &Path, end: PixelPos, building_size: i32) -> Self {
        let mut waypoints = Vec::with_capacity(path.nodes.len() + 2);
        waypoints.push(start);
        waypoints.extend(path.nodes.iter().map(|tile| tile.centre_pixel(building_size)));
        waypoints.push(end);
        Self { waypoints }
    }

    /// The same waypoints in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self { waypoints: self.waypoints.iter().rev().copied().collect() }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<PixelPos> {
        self.waypoints.get(index).copied()
    }

    pub fn waypoints(&self) -> &[PixelPos] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Total straight-line length in pixels.
    pub fn pixel_length(&self) -> f64 {
        self.waypoints.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    /// Rounded waypoint coordinates, for route-overlap tests.
    pub fn grid_keys(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.waypoints.iter().map(|p| p.grid_key())
    }
}
