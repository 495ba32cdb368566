//! Map extents of a ground-motion grid

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FragilityError, FragilityResult};

/// Inward buffer applied to the header extents, in degrees
pub const DEFAULT_BOUNDS_BUFFER: f64 = 0.03;

/// Buffered geographic extents of the motion grid
///
/// The header extents and the actual point extents can disagree in the
/// last digit, so every edge is pulled inward by a fixed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub west: f64,
    pub east: f64,
    pub south: f64,
    pub north: f64,
}

impl MapBounds {
    /// Derive buffered bounds from raw header extents
    pub fn from_extents(
        west: f64,
        south: f64,
        east: f64,
        north: f64,
        buffer: f64,
    ) -> FragilityResult<Self> {
        let bounds = Self {
            west: west + buffer,
            east: east - buffer,
            south: south + buffer,
            north: north - buffer,
        };
        if !(bounds.west < bounds.east) || !(bounds.south < bounds.north) {
            return Err(FragilityError::InvalidBounds(format!(
                "extents W{west} S{south} E{east} N{north} collapse under a {buffer} degree buffer"
            )));
        }
        Ok(bounds)
    }

    /// Check whether a coordinate lies inside the buffered extents
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.south
            && latitude <= self.north
            && longitude >= self.west
            && longitude <= self.east
    }
}

impl fmt::Display for MapBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "W {:.4} E {:.4} S {:.4} N {:.4}",
            self.west, self.east, self.south, self.north
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_buffer_moves_edges_inward() {
        let b = MapBounds::from_extents(-123.0, 46.0, -121.0, 48.0, DEFAULT_BOUNDS_BUFFER).unwrap();
        assert_relative_eq!(b.west, -122.97, epsilon = 1e-12);
        assert_relative_eq!(b.east, -121.03, epsilon = 1e-12);
        assert_relative_eq!(b.south, 46.03, epsilon = 1e-12);
        assert_relative_eq!(b.north, 47.97, epsilon = 1e-12);
    }

    #[test]
    fn test_contains() {
        let b = MapBounds::from_extents(0.0, 0.0, 2.0, 2.0, 0.03).unwrap();
        assert!(b.contains(1.0, 1.0));
        assert!(!b.contains(0.01, 1.0));
        assert!(!b.contains(1.0, 1.99));
    }

    #[test]
    fn test_collapsed_bounds_rejected() {
        assert!(MapBounds::from_extents(0.0, 0.0, 0.05, 1.0, 0.03).is_err());
    }
}
