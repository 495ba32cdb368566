//! Evaluation options

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{FragilityError, FragilityResult};
use crate::fragility::UwCoefficients;
use crate::grid::DEFAULT_BOUNDS_BUFFER;

/// Row order of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportOrder {
    /// Inventory order
    #[default]
    Input,
    /// Highest UW probability first, ties in inventory order
    ByUwProbability,
}

/// Options for a fragility evaluation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationOptions {
    /// Inward buffer applied to the grid header extents (degrees)
    pub bounds_buffer: f64,
    /// UW model coefficient sets
    pub uw_coefficients: UwCoefficients,
    /// Report row order
    pub report_order: ReportOrder,
    /// Evaluate bridges on the rayon thread pool
    pub parallel: bool,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            bounds_buffer: DEFAULT_BOUNDS_BUFFER,
            uw_coefficients: UwCoefficients::default(),
            report_order: ReportOrder::Input,
            parallel: false,
        }
    }
}

impl EvaluationOptions {
    /// Load options from a JSON file; missing keys take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> FragilityResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse options from JSON and validate them
    pub fn from_json(text: &str) -> FragilityResult<Self> {
        let options: Self = serde_json::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Check the options describe a runnable evaluation
    pub fn validate(&self) -> FragilityResult<()> {
        if !(self.bounds_buffer >= 0.0 && self.bounds_buffer.is_finite()) {
            return Err(FragilityError::InvalidOption(format!(
                "bounds_buffer must be a non-negative number, got {}",
                self.bounds_buffer
            )));
        }
        self.uw_coefficients.validate()
    }

    /// Set the bounds buffer
    pub fn with_bounds_buffer(mut self, buffer: f64) -> Self {
        self.bounds_buffer = buffer;
        self
    }

    /// Set the UW coefficients
    pub fn with_uw_coefficients(mut self, coefficients: UwCoefficients) -> Self {
        self.uw_coefficients = coefficients;
        self
    }

    /// Set the report order
    pub fn with_report_order(mut self, order: ReportOrder) -> Self {
        self.report_order = order;
        self
    }

    /// Enable parallel evaluation
    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }
}
