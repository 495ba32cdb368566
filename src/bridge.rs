//! Bridge inventory record and its evaluation results

use serde::{Deserialize, Serialize};

/// Where a bridge ended up in the evaluation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BridgeStatus {
    /// Not evaluated yet
    #[default]
    Pending,
    /// Inventory line could not be parsed; attributes are zeroed
    Malformed,
    /// Outside the buffered map bounds
    OutOfBounds,
    /// Inside the bounds but no consistent grid cell was found
    Dropped,
    /// Interpolated, classified and scored
    Processed,
}

/// A bridge from the inventory, with the results of its evaluation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Bridge {
    /// Position in the inventory (0-based)
    pub index: usize,
    /// State DOT identifier
    pub dot_id: String,
    pub name: String,
    /// Bridge number
    pub number: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    pub year_built: i32,
    /// NBI span design code (item 43B)
    pub span_design_code: u32,
    /// NBI material code (item 43A)
    pub material_code: u32,
    /// General structure length (ft)
    pub length: f64,
    /// NBI structure length (ft), zero when not recorded
    pub nbi_length: f64,
    /// Longest span (ft)
    pub max_span: f64,

    // Results
    pub psa03: f64,
    pub psa10: f64,
    pub pga: f64,
    /// HAZUS bridge class code, zero when not classified
    pub hazus_type: u8,
    pub uw_probability: f64,
    pub hazus_probability: f64,
    pub status: BridgeStatus,
}

impl Bridge {
    /// All-zero stand-in for an inventory line that could not be parsed
    pub fn placeholder(index: usize) -> Self {
        Self {
            index,
            status: BridgeStatus::Malformed,
            ..Default::default()
        }
    }

    /// Length used for classification: the NBI length when recorded,
    /// otherwise the general length
    pub fn effective_length(&self) -> f64 {
        if self.nbi_length > 0.0 {
            self.nbi_length
        } else {
            self.length
        }
    }

    /// Zero the results and location and mark the bridge as excluded
    pub fn exclude(&mut self, status: BridgeStatus) {
        self.psa03 = 0.0;
        self.psa10 = 0.0;
        self.pga = 0.0;
        self.uw_probability = 0.0;
        self.hazus_probability = 0.0;
        self.hazus_type = 0;
        self.latitude = 0.0;
        self.longitude = 0.0;
        self.status = status;
    }

    /// Whether this bridge appears in the report
    pub fn is_processed(&self) -> bool {
        self.status == BridgeStatus::Processed
    }
}
