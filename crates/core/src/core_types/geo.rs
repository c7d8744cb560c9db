//! Geographic coordinates and the geographic-to-grid mapping.
//!
//! The simulation grid covers a rectangular geographic extent described by
//! a [`BoundingBox`]. A map click arrives as an [`IgnitionPoint`] in
//! degrees and is converted to a clamped [`GridIndex`], so stray clicks
//! near (or beyond) the map edges still seed a valid simulation.

use serde::{Deserialize, Serialize};

/// Geographic coordinate seeding a simulation, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IgnitionPoint {
    /// Latitude in degrees (positive north).
    pub latitude: f64,
    /// Longitude in degrees (positive east).
    pub longitude: f64,
}

impl IgnitionPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        IgnitionPoint {
            latitude,
            longitude,
        }
    }
}

/// Cell address on the simulation grid: `(row, col)` with row 0 at the
/// northern edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridIndex {
    pub row: usize,
    pub col: usize,
}

impl GridIndex {
    pub fn new(row: usize, col: usize) -> Self {
        GridIndex { row, col }
    }
}

/// Geographic rectangle the grid represents.
///
/// Southwest corner `(lat_min, lon_min)`, northeast corner
/// `(lat_max, lon_max)`. A box is usable only when both spans are
/// positive; [`BoundingBox::is_valid`] checks this and the simulation
/// driver rejects degenerate boxes before any stepping runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lon_min: f64,
    pub lat_max: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    pub fn new(lat_min: f64, lon_min: f64, lat_max: f64, lon_max: f64) -> Self {
        BoundingBox {
            lat_min,
            lon_min,
            lat_max,
            lon_max,
        }
    }

    /// Both axis spans are positive.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.lat_max > self.lat_min && self.lon_max > self.lon_min
    }

    /// Latitude extent in degrees.
    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    /// Longitude extent in degrees.
    #[inline]
    pub fn lon_span(&self) -> f64 {
        self.lon_max - self.lon_min
    }

    /// Map a geographic point to a grid index on an `height` x `width`
    /// grid covering this box.
    ///
    /// Latitude maps to the row axis inverted (north is row 0):
    /// `i = floor((lat_max - lat) / lat_span * height)`. Longitude maps
    /// to the column axis directly:
    /// `j = floor((lon - lon_min) / lon_span * width)`.
    ///
    /// The result is always clamped into `[0, height-1] x [0, width-1]`,
    /// so points outside the box pin to the nearest border cell instead
    /// of producing an error. The mapping is a pure function: the same
    /// point, box, and dimensions always yield the same index.
    ///
    /// Requires a valid box and non-zero dimensions; the driver checks
    /// both before mapping.
    pub fn grid_index(&self, point: IgnitionPoint, height: usize, width: usize) -> GridIndex {
        let row = (self.lat_max - point.latitude) / self.lat_span() * height as f64;
        let col = (point.longitude - self.lon_min) / self.lon_span() * width as f64;
        GridIndex::new(clamp_axis(row, height), clamp_axis(col, width))
    }
}

/// Floor a fractional axis position and pin it into `[0, len - 1]`.
#[inline]
fn clamp_axis(position: f64, len: usize) -> usize {
    let max = len.saturating_sub(1) as f64;
    position.floor().clamp(0.0, max) as usize
}
