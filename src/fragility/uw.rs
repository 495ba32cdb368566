//! UW (Washington State) fragility model
//!
//! Bridges are grouped by construction era, with movable and truss spans
//! taking their own curves. The curves act directly on psa03 as supplied
//! by the grid (%g).

use serde::{Deserialize, Serialize};

use crate::error::{FragilityError, FragilityResult};
use crate::math::lognormal_probability;

/// Last year of the earliest era
pub const EARLY_ERA_END: i32 = 1940;
/// Last year of the middle era
pub const MIDDLE_ERA_END: i32 = 1975;

/// Log-normal fragility curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FragilityCurve {
    /// Median capacity, same units as the motion it is applied to
    pub median: f64,
    /// Log-standard deviation
    pub dispersion: f64,
}

impl FragilityCurve {
    pub const fn new(median: f64, dispersion: f64) -> Self {
        Self { median, dispersion }
    }

    /// Probability of exceedance at intensity `x`
    pub fn probability(&self, x: f64) -> f64 {
        lognormal_probability(x, self.median, self.dispersion)
    }
}

/// The five coefficient sets of the UW model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UwCoefficients {
    /// Set 1: built up to 1940
    pub early: FragilityCurve,
    /// Set 2: built 1941-1975
    pub middle: FragilityCurve,
    /// Set 3: built after 1975
    pub modern: FragilityCurve,
    /// Set 4: movable spans (design codes 15-17)
    pub movable: FragilityCurve,
    /// Set 5: truss spans (design codes 9-10), pre-1976 only
    pub truss: FragilityCurve,
}

impl Default for UwCoefficients {
    fn default() -> Self {
        Self {
            early: FragilityCurve::new(45.0, 0.6),
            middle: FragilityCurve::new(60.0, 0.6),
            modern: FragilityCurve::new(90.0, 0.6),
            movable: FragilityCurve::new(25.0, 0.6),
            truss: FragilityCurve::new(35.0, 0.6),
        }
    }
}

impl UwCoefficients {
    /// Pick the curve for a bridge.
    ///
    /// The truss override is not applied to modern bridges.
    pub fn curve(&self, year_built: i32, span_design_code: u32) -> &FragilityCurve {
        let movable = (15..=17).contains(&span_design_code);
        let truss = (9..=10).contains(&span_design_code);

        if year_built <= EARLY_ERA_END {
            if movable {
                &self.movable
            } else if truss {
                &self.truss
            } else {
                &self.early
            }
        } else if year_built <= MIDDLE_ERA_END {
            if movable {
                &self.movable
            } else if truss {
                &self.truss
            } else {
                &self.middle
            }
        } else if movable {
            &self.movable
        } else {
            &self.modern
        }
    }

    /// Probability of damage at psa03
    pub fn probability(&self, year_built: i32, span_design_code: u32, psa03: f64) -> f64 {
        self.curve(year_built, span_design_code).probability(psa03)
    }

    /// Reject curves that cannot produce a probability
    pub fn validate(&self) -> FragilityResult<()> {
        let sets = [
            ("early", &self.early),
            ("middle", &self.middle),
            ("modern", &self.modern),
            ("movable", &self.movable),
            ("truss", &self.truss),
        ];
        for (name, curve) in sets {
            if !(curve.median > 0.0 && curve.dispersion > 0.0) {
                return Err(FragilityError::InvalidOption(format!(
                    "UW curve '{name}' needs a positive median and dispersion"
                )));
            }
        }
        Ok(())
    }
}

/// UW probability with the built-in coefficients
pub fn uw_probability(year_built: i32, span_design_code: u32, psa03: f64) -> f64 {
    UwCoefficients::default().probability(year_built, span_design_code, psa03)
}
