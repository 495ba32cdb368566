//! Bridge classification and fragility models

mod classify;
mod hazus;
mod uw;

pub use classify::{classify, HazusClass, CONVENTIONAL_DESIGN_YEAR, MAJOR_SPAN_FT, SHORT_LENGTH_FT};
pub use hazus::{hazus_median, hazus_probability, HAZUS_DISPERSION};
pub use uw::{uw_probability, FragilityCurve, UwCoefficients, EARLY_ERA_END, MIDDLE_ERA_END};
