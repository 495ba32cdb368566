//! Bridge Fragility - post-earthquake damage probabilities for bridges
//!
//! Maps every bridge of an inventory onto a gridded ground-motion field and
//! scores it with two fragility models:
//! - Grid locator (two-phase binary search over a row-major grid)
//! - Inverse-distance interpolation of psa03, psa10 and pga
//! - HAZUS bridge classification from NBI attributes
//! - UW era-based fragility curves on psa03
//! - HAZUS slight-damage curves on psa10
//!
//! ## Example
//! ```rust
//! use bridge_fragility::prelude::*;
//!
//! let mut points = Vec::new();
//! for lat in 0..3 {
//!     for lon in 0..3 {
//!         points.push(GridPoint::new(lat as f64, lon as f64, 0.2, 40.0, 20.0));
//!     }
//! }
//! let grid = GridStore::new(points, 9).unwrap();
//! let bounds = MapBounds::from_extents(0.0, 0.0, 2.0, 2.0, 0.03).unwrap();
//! let model = DamageModel::new(grid, bounds, 9, EvaluationOptions::default()).unwrap();
//!
//! let mut bridges = vec![parse_bridge_line(0, "0001:MILL CREEK:12/3:1.5:0.5:1962:2:1:90:88:40")];
//! let summary = model.evaluate(&mut bridges);
//! assert_eq!(summary.processed, 1);
//!
//! let report = model.report(&bridges);
//! assert_eq!(report.len(), 1);
//! ```

pub mod analysis;
pub mod bridge;
pub mod error;
pub mod fragility;
pub mod grid;
pub mod io;
pub mod math;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{EvaluationOptions, ReportOrder};
    pub use crate::bridge::{Bridge, BridgeStatus};
    pub use crate::error::{FragilityError, FragilityResult};
    pub use crate::fragility::{
        classify, hazus_probability, uw_probability, FragilityCurve, HazusClass, UwCoefficients,
    };
    pub use crate::grid::{
        interpolate, locate, GridPoint, GridSlot, GridStore, GroundMotion, MapBounds, Neighbors,
    };
    pub use crate::io::{
        parse_bridge_line, parse_grid, parse_inventory, read_grid_file, read_inventory_file,
        GridFile,
    };
    pub use crate::model::DamageModel;
    pub use crate::results::{Report, RunSummary, REPORT_HEADER};
}
