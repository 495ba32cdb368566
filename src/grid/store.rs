//! Sorted, read-only store of grid points

use log::debug;

use super::point::GridPoint;
use crate::error::{FragilityError, FragilityResult};

/// Minimum number of points needed to surround any bridge
pub const MIN_GRID_POINTS: usize = 4;

/// Grid points in row-major order: latitude ascending, then longitude
/// ascending within each latitude row. Every row holds the same number of
/// points.
#[derive(Debug, Clone)]
pub struct GridStore {
    points: Vec<GridPoint>,
    row_len: usize,
}

impl GridStore {
    /// Build a store from accepted grid points.
    ///
    /// `points_read` is the number of data lines seen by the loader and is
    /// only used to report an insufficient grid.
    pub fn new(mut points: Vec<GridPoint>, points_read: usize) -> FragilityResult<Self> {
        if points.len() < MIN_GRID_POINTS {
            return Err(FragilityError::InsufficientGrid {
                used: points.len(),
                read: points_read,
            });
        }

        if !points.windows(2).all(|w| w[0].cmp_position(&w[1]).is_le()) {
            debug!("Grid points not in (latitude, longitude) order, sorting");
            points.sort_by(|a, b| a.cmp_position(b));
        }

        let row_len = Self::uniform_row_len(&points)?;
        debug!(
            "Grid store: {} points in {} rows of {}",
            points.len(),
            points.len() / row_len,
            row_len
        );

        Ok(Self { points, row_len })
    }

    /// Verify every latitude row holds the same number of points
    fn uniform_row_len(points: &[GridPoint]) -> FragilityResult<usize> {
        let mut expected = None;
        for row in points.chunk_by(|a, b| a.latitude == b.latitude) {
            match expected {
                None => expected = Some(row.len()),
                Some(n) if n != row.len() => {
                    return Err(FragilityError::NonUniformRows {
                        latitude: row[0].latitude,
                        expected: n,
                        found: row.len(),
                    })
                }
                Some(_) => {}
            }
        }
        Ok(expected.unwrap_or(0))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points in every latitude row
    pub fn row_len(&self) -> usize {
        self.row_len
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&GridPoint> {
        self.points.get(index)
    }

    pub(crate) fn latitude(&self, index: usize) -> f64 {
        self.points[index].latitude
    }

    pub(crate) fn longitude(&self, index: usize) -> f64 {
        self.points[index].longitude
    }
}

impl std::ops::Index<usize> for GridStore {
    type Output = GridPoint;

    fn index(&self, index: usize) -> &GridPoint {
        &self.points[index]
    }
}
