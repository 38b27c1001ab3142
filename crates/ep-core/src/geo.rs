//! Tile and pixel geometry.
//!
//! Buildings sit on an integer tile grid; a [`TileCoord`] is both a building
//! location and a road-graph node.  Agents move in continuous pixel space
//! ([`PixelPos`]), where tile `(x, y)` covers the square
//! `[x·size, (x+1)·size) × [y·size, (y+1)·size)`.

use std::fmt;

/// Integer tile coordinate of a building.  Immutable once placed.
///
/// `Ord` is derived (x first, then y) so graphs keyed by `TileCoord` iterate
/// in a reproducible order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileCoord {
    pub x: i32,
    pub y: i32,
}

impl TileCoord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance in tile units.
    #[inline]
    pub fn distance(self, other: TileCoord) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        dx.hypot(dy)
    }

    /// Centre of this tile in pixel space for buildings of `size` pixels.
    #[inline]
    pub fn centre_pixel(self, size: i32) -> PixelPos {
        PixelPos::new(
            f64::from(self.x * size + size / 2),
            f64::from(self.y * size + size / 2),
        )
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A continuous position in pixel space.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPos {
    pub x: f64,
    pub y: f64,
}

impl PixelPos {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in pixels.
    #[inline]
    pub fn distance(self, other: PixelPos) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Integer key for set membership.  Route waypoints always land on whole
    /// pixels, so rounding is exact for them.
    #[inline]
    pub fn grid_key(self) -> (i64, i64) {
        (self.x.round() as i64, self.y.round() as i64)
    }
}

impl fmt::Display for PixelPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
