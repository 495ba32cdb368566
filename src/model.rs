//! Damage model - evaluates bridges against a ground-motion grid

use log::{debug, info};
use std::path::Path;

use crate::analysis::EvaluationOptions;
use crate::bridge::{Bridge, BridgeStatus};
use crate::error::FragilityResult;
use crate::fragility::{classify, hazus_probability};
use crate::grid::{interpolate, locate, GridStore, GroundMotion, MapBounds};
use crate::io::{read_grid_file, GridFile};
use crate::results::{Report, RunSummary};

/// A loaded ground-motion field ready to score bridges
///
/// The grid store and bounds are read-only once built; each bridge's
/// evaluation touches only its own result fields.
#[derive(Debug, Clone)]
pub struct DamageModel {
    grid: GridStore,
    bounds: MapBounds,
    points_read: usize,
    options: EvaluationOptions,
}

impl DamageModel {
    /// Create a model from an already-built grid store
    pub fn new(
        grid: GridStore,
        bounds: MapBounds,
        points_read: usize,
        options: EvaluationOptions,
    ) -> FragilityResult<Self> {
        options.validate()?;
        Ok(Self {
            grid,
            bounds,
            points_read,
            options,
        })
    }

    /// Build the grid store from a parsed grid file
    pub fn from_grid_file(file: GridFile, options: EvaluationOptions) -> FragilityResult<Self> {
        let grid = GridStore::new(file.points, file.points_read)?;
        Self::new(grid, file.bounds, file.points_read, options)
    }

    /// Read a grid file and build the model
    pub fn load(grid_path: impl AsRef<Path>, options: EvaluationOptions) -> FragilityResult<Self> {
        options.validate()?;
        let file = read_grid_file(grid_path, options.bounds_buffer)?;
        Self::from_grid_file(file, options)
    }

    pub fn grid(&self) -> &GridStore {
        &self.grid
    }

    pub fn bounds(&self) -> &MapBounds {
        &self.bounds
    }

    pub fn options(&self) -> &EvaluationOptions {
        &self.options
    }

    /// Interpolated ground motion at a coordinate, or `None` when the grid
    /// cannot place it
    pub fn ground_motion(&self, latitude: f64, longitude: f64) -> Option<GroundMotion> {
        let neighbors = locate(&self.grid, latitude, longitude);
        interpolate(&self.grid, latitude, longitude, &neighbors)
    }

    /// Evaluate one bridge in place.
    ///
    /// Only pending bridges are touched, so each record is scored once.
    pub fn evaluate_bridge(&self, bridge: &mut Bridge) {
        if bridge.status != BridgeStatus::Pending {
            return;
        }

        if !self.bounds.contains(bridge.latitude, bridge.longitude) {
            bridge.exclude(BridgeStatus::OutOfBounds);
            return;
        }

        let Some(motion) = self.ground_motion(bridge.latitude, bridge.longitude) else {
            bridge.exclude(BridgeStatus::Dropped);
            return;
        };

        let class = classify(
            bridge.material_code,
            bridge.span_design_code,
            bridge.year_built,
            bridge.max_span,
            bridge.effective_length(),
        );

        bridge.psa03 = motion.psa03;
        bridge.psa10 = motion.psa10;
        bridge.pga = motion.pga;
        bridge.hazus_type = class.code();
        bridge.uw_probability = self.options.uw_coefficients.probability(
            bridge.year_built,
            bridge.span_design_code,
            motion.psa03,
        );
        bridge.hazus_probability = hazus_probability(class, motion.psa03, motion.psa10);
        bridge.status = BridgeStatus::Processed;

        debug!(
            "Bridge {} ({}): {} psa03={:.2} psa10={:.2} uw={:.5} hazus={:.5}",
            bridge.index,
            bridge.dot_id,
            class,
            bridge.psa03,
            bridge.psa10,
            bridge.uw_probability,
            bridge.hazus_probability
        );
    }

    /// Evaluate every bridge and count the outcomes
    pub fn evaluate(&self, bridges: &mut [Bridge]) -> RunSummary {
        self.evaluate_all(bridges);
        let summary = RunSummary::tally(bridges, self.points_read, self.grid.len(), self.bounds);
        info!("{summary}");
        summary
    }

    /// Report of the processed bridges in the configured order
    pub fn report<'a>(&self, bridges: &'a [Bridge]) -> Report<'a> {
        Report::new(bridges, self.options.report_order)
    }

    #[cfg(feature = "parallel")]
    fn evaluate_all(&self, bridges: &mut [Bridge]) {
        use rayon::prelude::*;

        if self.options.parallel {
            bridges.par_iter_mut().for_each(|b| self.evaluate_bridge(b));
        } else {
            bridges.iter_mut().for_each(|b| self.evaluate_bridge(b));
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_all(&self, bridges: &mut [Bridge]) {
        if self.options.parallel {
            debug!("Built without the parallel feature, evaluating sequentially");
        }
        bridges.iter_mut().for_each(|b| self.evaluate_bridge(b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridPoint;
    use approx::assert_relative_eq;

    fn model() -> DamageModel {
        let mut points = Vec::new();
        for i in 0..3 {
            for j in 0..3 {
                let v = 10.0 * (i * 3 + j + 1) as f64;
                points.push(GridPoint::new(i as f64, j as f64, v / 100.0, v, v / 2.0));
            }
        }
        let grid = GridStore::new(points, 9).unwrap();
        let bounds = MapBounds::from_extents(0.0, 0.0, 2.0, 2.0, 0.0).unwrap();
        DamageModel::new(grid, bounds, 9, EvaluationOptions::default()).unwrap()
    }

    fn bridge(lat: f64, lon: f64) -> Bridge {
        Bridge {
            dot_id: "0001".to_string(),
            latitude: lat,
            longitude: lon,
            year_built: 1960,
            span_design_code: 2,
            material_code: 1,
            length: 100.0,
            max_span: 40.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_processed_bridge() {
        let m = model();
        let mut b = bridge(1.0, 1.0);
        m.evaluate_bridge(&mut b);
        assert_eq!(b.status, BridgeStatus::Processed);
        assert_eq!(b.psa03, 50.0);
        assert_eq!(b.hazus_type, 5);
        assert!(b.uw_probability > 0.0 && b.uw_probability < 1.0);
    }

    #[test]
    fn test_out_of_bounds_bridge_is_zeroed() {
        let m = model();
        let mut b = bridge(2.5, 1.0);
        m.evaluate_bridge(&mut b);
        assert_eq!(b.status, BridgeStatus::OutOfBounds);
        assert_eq!(b.latitude, 0.0);
        assert_eq!(b.hazus_type, 0);
    }

    #[test]
    fn test_malformed_bridge_is_skipped() {
        let m = model();
        let mut b = Bridge::placeholder(4);
        m.evaluate_bridge(&mut b);
        assert_eq!(b, Bridge::placeholder(4));
    }

    #[test]
    fn test_second_evaluation_is_noop() {
        let m = model();
        let mut bridges = vec![bridge(0.5, 0.5)];
        m.evaluate(&mut bridges);
        let first = bridges.clone();
        let summary = m.evaluate(&mut bridges);
        assert_eq!(bridges, first);
        assert_eq!(summary.processed, 1);
    }

    #[test]
    fn test_ground_motion_on_node() {
        let m = model();
        let g = m.ground_motion(2.0, 0.0).unwrap();
        assert_relative_eq!(g.psa03, 70.0);
        assert_relative_eq!(g.psa10, 35.0);
    }
}
