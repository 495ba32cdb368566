//! Ground-motion grid file reader
//!
//! # Format
//!
//! ```text
//! 51202290 6.8 47.15 -122.72 FEB 28 2001 18:54:32 GMT -123.72 46.65 -121.72 47.65
//! -123.7200 46.6500 12.41 10.02 6.1 30.55 12.87 3.93
//! -123.7033 46.6500 12.53 10.11 6.1 30.78 12.94 3.95
//! ```
//!
//! The header is whitespace-delimited; fields 9..=12 hold the west, south,
//! east and north extents. Each data line holds
//! `lon lat pga pgv mmi psa03 psa10 psa30`.

use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{FragilityError, FragilityResult};
use crate::grid::{GridPoint, MapBounds};

/// Number of whitespace-delimited fields on a data line
pub const GRID_FIELDS: usize = 8;

const WEST_FIELD: usize = 9;
const SOUTH_FIELD: usize = 10;
const EAST_FIELD: usize = 11;
const NORTH_FIELD: usize = 12;

/// Parsed contents of a grid file
#[derive(Debug, Clone)]
pub struct GridFile {
    /// Buffered map extents from the header
    pub bounds: MapBounds,
    /// Accepted grid points, in file order
    pub points: Vec<GridPoint>,
    /// Data lines seen, accepted or not
    pub points_read: usize,
}

/// Read a grid file from disk
pub fn read_grid_file(path: impl AsRef<Path>, buffer: f64) -> FragilityResult<GridFile> {
    let file = File::open(path.as_ref())?;
    debug!("Reading grid file {}", path.as_ref().display());
    parse_grid(BufReader::new(file), buffer)
}

/// Parse a grid file, applying `buffer` degrees to the header extents
pub fn parse_grid<R: BufRead>(reader: R, buffer: f64) -> FragilityResult<GridFile> {
    let mut lines = reader.lines();
    let header = lines
        .next()
        .ok_or_else(|| FragilityError::InvalidHeader("empty grid file".to_string()))??;
    let bounds = parse_header(&header, buffer)?;

    let mut points = Vec::new();
    let mut points_read = 0;
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        points_read += 1;
        if let Some(point) = parse_point(&line) {
            points.push(point);
        }
    }

    debug!(
        "Grid file: {} points read, {} accepted, bounds {}",
        points_read,
        points.len(),
        bounds
    );

    Ok(GridFile {
        bounds,
        points,
        points_read,
    })
}

fn parse_header(header: &str, buffer: f64) -> FragilityResult<MapBounds> {
    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() <= NORTH_FIELD {
        return Err(FragilityError::InvalidHeader(format!(
            "expected at least {} fields, found {}",
            NORTH_FIELD + 1,
            fields.len()
        )));
    }

    let extent = |i: usize| -> FragilityResult<f64> {
        fields[i]
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                FragilityError::InvalidHeader(format!("field {} '{}' is not a number", i, fields[i]))
            })
    };

    MapBounds::from_extents(
        extent(WEST_FIELD)?,
        extent(SOUTH_FIELD)?,
        extent(EAST_FIELD)?,
        extent(NORTH_FIELD)?,
        buffer,
    )
}

/// Parse a data line; `None` if it is not a usable point
fn parse_point(line: &str) -> Option<GridPoint> {
    let values: Vec<f64> = line
        .split_whitespace()
        .map(|f| f.parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect::<Option<_>>()?;
    if values.len() != GRID_FIELDS {
        return None;
    }

    let (psa03, psa10) = (values[5], values[6]);
    if !(psa03 > 0.0 && psa10 > 0.0) {
        return None;
    }

    Some(GridPoint::new(values[1], values[0], values[2], psa03, psa10).with_legacy(values[3], values[4]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    const HEADER: &str = "51202290 6.8 47.15 -122.72 FEB 28 2001 18:54:32 GMT -123.72 46.65 -121.72 47.65 (Process time: x)";

    #[test]
    fn test_header_bounds_are_buffered() {
        let text = format!("{HEADER}\n");
        let grid = parse_grid(Cursor::new(text), 0.03).unwrap();
        assert_relative_eq!(grid.bounds.west, -123.69, epsilon = 1e-9);
        assert_relative_eq!(grid.bounds.south, 46.68, epsilon = 1e-9);
        assert_relative_eq!(grid.bounds.east, -121.75, epsilon = 1e-9);
        assert_relative_eq!(grid.bounds.north, 47.62, epsilon = 1e-9);
        assert_eq!(grid.points_read, 0);
    }

    #[test]
    fn test_point_fields() {
        let text = format!("{HEADER}\n-123.0 47.0 12.4 10.0 6.1 30.5 12.8 3.9\n");
        let grid = parse_grid(Cursor::new(text), 0.03).unwrap();
        let p = grid.points[0];
        assert_eq!(p.longitude, -123.0);
        assert_eq!(p.latitude, 47.0);
        assert_eq!(p.pga, 12.4);
        assert_eq!(p.pgv, 10.0);
        assert_eq!(p.mmi, 6.1);
        assert_eq!(p.psa03, 30.5);
        assert_eq!(p.psa10, 12.8);
    }

    #[test]
    fn test_rejected_lines_still_counted() {
        let text = format!(
            "{HEADER}\n\
             -123.0 47.0 12.4 10.0 6.1 30.5 12.8 3.9\n\
             -123.0 47.0 12.4 10.0 6.1 30.5 12.8\n\
             -123.0 47.0 12.4 10.0 6.1 0.0 12.8 3.9\n\
             -123.0 47.0 12.4 10.0 6.1 30.5 -1.0 3.9\n\
             -123.0 47.0 abc 10.0 6.1 30.5 12.8 3.9\n\
             \n"
        );
        let grid = parse_grid(Cursor::new(text), 0.03).unwrap();
        assert_eq!(grid.points_read, 5);
        assert_eq!(grid.points.len(), 1);
    }

    #[test]
    fn test_short_header_rejected() {
        let err = parse_grid(Cursor::new("1 2 3\n"), 0.03).unwrap_err();
        assert!(matches!(err, FragilityError::InvalidHeader(_)));
        let err = parse_grid(Cursor::new(""), 0.03).unwrap_err();
        assert!(matches!(err, FragilityError::InvalidHeader(_)));
    }
}
