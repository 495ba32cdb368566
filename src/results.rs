//! Result types for a fragility evaluation run

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

use crate::analysis::ReportOrder;
use crate::bridge::{Bridge, BridgeStatus};
use crate::grid::MapBounds;

/// Column labels of the report
pub const REPORT_HEADER: &str =
    "uw_probability,hazus_probability,psa03,dot_id,name,number,latitude,longitude";

/// Counts accumulated over one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Inventory records, malformed ones included
    pub input_bridges: usize,
    /// Bridges interpolated and scored
    pub processed: usize,
    /// Inventory lines that could not be parsed
    pub malformed: usize,
    /// Bridges outside the buffered map bounds
    pub out_of_bounds: usize,
    /// Bridges with no consistent grid cell
    pub dropped: usize,
    /// Grid data lines read
    pub grid_points_read: usize,
    /// Grid points accepted into the store
    pub grid_points_used: usize,
    /// Buffered map bounds
    pub bounds: MapBounds,
}

impl RunSummary {
    /// Count bridge outcomes in inventory order
    pub fn tally(
        bridges: &[Bridge],
        grid_points_read: usize,
        grid_points_used: usize,
        bounds: MapBounds,
    ) -> Self {
        let mut summary = Self {
            input_bridges: 0,
            processed: 0,
            malformed: 0,
            out_of_bounds: 0,
            dropped: 0,
            grid_points_read,
            grid_points_used,
            bounds,
        };
        for bridge in bridges {
            summary.input_bridges += 1;
            match bridge.status {
                BridgeStatus::Processed => summary.processed += 1,
                BridgeStatus::Malformed => summary.malformed += 1,
                BridgeStatus::OutOfBounds => summary.out_of_bounds += 1,
                BridgeStatus::Dropped => summary.dropped += 1,
                BridgeStatus::Pending => {}
            }
        }
        summary
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} input bridges, {} processed, {} grid points read, {} grid points used, bounds {}",
            self.input_bridges,
            self.processed,
            self.grid_points_read,
            self.grid_points_used,
            self.bounds
        )
    }
}

/// Comma-separated report of the processed bridges
#[derive(Debug, Clone)]
pub struct Report<'a> {
    rows: Vec<&'a Bridge>,
}

impl<'a> Report<'a> {
    /// Select the processed bridges and order them
    pub fn new(bridges: &'a [Bridge], order: ReportOrder) -> Self {
        let mut rows: Vec<&Bridge> = bridges.iter().filter(|b| b.is_processed()).collect();
        if order == ReportOrder::ByUwProbability {
            rows.sort_by(|a, b| {
                b.uw_probability
                    .total_cmp(&a.uw_probability)
                    .then(a.index.cmp(&b.index))
            });
        }
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format a single report row
    pub fn row(bridge: &Bridge) -> String {
        format!(
            "{:.5},{:.5},{:.2},{},{},{},{:.5},{:.5}",
            bridge.uw_probability,
            bridge.hazus_probability,
            bridge.psa03,
            bridge.dot_id,
            bridge.name,
            bridge.number,
            bridge.latitude,
            bridge.longitude
        )
    }

    /// Write the header and every row
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{REPORT_HEADER}")?;
        for bridge in &self.rows {
            writeln!(out, "{}", Self::row(bridge))?;
        }
        Ok(())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_HEADER}")?;
        for bridge in &self.rows {
            writeln!(f, "{}", Self::row(bridge))?;
        }
        Ok(())
    }
}
