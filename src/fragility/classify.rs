//! HAZUS bridge classification from NBI attributes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest span (ft) above which a bridge is a major bridge (150 m)
pub const MAJOR_SPAN_FT: f64 = 492.13;
/// Length (ft) separating short and long steel bridges (20 m)
pub const SHORT_LENGTH_FT: f64 = 65.62;
/// Last year of conventional (non-seismic) design
pub const CONVENTIONAL_DESIGN_YEAR: i32 = 1975;

/// HAZUS highway bridge class (HWB1..HWB28)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HazusClass(pub u8);

impl HazusClass {
    /// Major bridge, conventional design
    pub const MAJOR_CONVENTIONAL: Self = Self(1);
    /// Major bridge, seismic design
    pub const MAJOR_SEISMIC: Self = Self(2);
    /// All other bridges
    pub const OTHER: Self = Self(28);

    pub fn code(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for HazusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HWB{}", self.0)
    }
}

/// Classify a bridge into a HAZUS class.
///
/// Rules are ordered; the first match wins. `effective_length` is the NBI
/// length when recorded, otherwise the general length.
pub fn classify(
    material_code: u32,
    span_design_code: u32,
    year_built: i32,
    max_span: f64,
    effective_length: f64,
) -> HazusClass {
    let conventional = year_built <= CONVENTIONAL_DESIGN_YEAR;

    if max_span >= MAJOR_SPAN_FT {
        return if conventional {
            HazusClass::MAJOR_CONVENTIONAL
        } else {
            HazusClass::MAJOR_SEISMIC
        };
    }

    let short = effective_length <= SHORT_LENGTH_FT;
    let code = match (material_code, span_design_code) {
        // Concrete, simply supported
        (1, 1..=6) => if conventional { 5 } else { 7 },
        // Concrete, continuous
        (2, 1..=6) => if conventional { 10 } else { 11 },
        // Steel, simply supported
        (3, 1..=6) => match (conventional, short) {
            (true, true) => 24,
            (true, false) => 12,
            (false, _) => 14,
        },
        // Steel, continuous
        (4, 2..=10) => match (conventional, short) {
            (true, true) => 26,
            (true, false) => 15,
            (false, _) => 16,
        },
        // Prestressed concrete, simply supported
        (5, 1..=6) => if conventional { 17 } else { 19 },
        // Prestressed concrete, continuous
        (6, 1..=7) => if conventional { 22 } else { 23 },
        _ => return HazusClass::OTHER,
    };
    HazusClass(code)
}
