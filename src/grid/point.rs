//! Ground-motion grid point

use serde::{Deserialize, Serialize};

/// A single ground-motion sample from the motion grid file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Peak ground acceleration
    pub pga: f64,
    /// Pseudo-spectral acceleration at 0.3 s
    pub psa03: f64,
    /// Pseudo-spectral acceleration at 1.0 s
    pub psa10: f64,
    /// Peak ground velocity (carried from the grid file, unused)
    pub pgv: f64,
    /// Instrumental intensity (carried from the grid file, unused)
    pub mmi: f64,
}

impl GridPoint {
    /// Create a grid point carrying only the fields the models consume
    pub fn new(latitude: f64, longitude: f64, pga: f64, psa03: f64, psa10: f64) -> Self {
        Self {
            latitude,
            longitude,
            pga,
            psa03,
            psa10,
            pgv: 0.0,
            mmi: 0.0,
        }
    }

    /// Set the legacy velocity and intensity fields
    pub fn with_legacy(mut self, pgv: f64, mmi: f64) -> Self {
        self.pgv = pgv;
        self.mmi = mmi;
        self
    }

    /// Ordering key of the grid store: latitude, then longitude
    pub(crate) fn cmp_position(&self, other: &GridPoint) -> std::cmp::Ordering {
        self.latitude
            .total_cmp(&other.latitude)
            .then(self.longitude.total_cmp(&other.longitude))
    }
}
