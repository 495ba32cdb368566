//! Grid locator - finds the grid points surrounding a coordinate
//!
//! The search runs in two phases over the row-major [`GridStore`]:
//!
//! 1. **Latitude**: bisect the whole store until the window either lands on
//!    a row whose latitude equals the target, or shrinks to two adjacent
//!    indices straddling it. The window is then widened to cover the full
//!    row(s): the single matching row, or the rows directly south and
//!    north of the target.
//! 2. **Longitude**: a two-row span is split at its index midpoint (rows
//!    are uniform, so the midpoint separates south from north) and each
//!    row is bisected by longitude to find its west/east pair.
//!
//! ```text
//!   nw ---------- ne      north row
//!    |            |
//!    |     x      |       x = target
//!    |            |
//!   sw ---------- se      south row
//! ```

use log::warn;
use serde::{Deserialize, Serialize};

use super::store::GridStore;

/// One corner of the cell surrounding a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridSlot {
    /// Index into the grid store
    Found(usize),
    /// Corner not needed (the target lies exactly on a grid row)
    NotApplicable,
    /// No consistent cell could be found; the bridge must be dropped
    DropBridge,
}

impl GridSlot {
    pub fn index(&self) -> Option<usize> {
        match self {
            GridSlot::Found(i) => Some(*i),
            _ => None,
        }
    }
}

/// The up to four corners surrounding a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    pub sw: GridSlot,
    pub nw: GridSlot,
    pub se: GridSlot,
    pub ne: GridSlot,
}

impl Neighbors {
    /// All four corners signal drop
    pub fn dropped() -> Self {
        Self {
            sw: GridSlot::DropBridge,
            nw: GridSlot::DropBridge,
            se: GridSlot::DropBridge,
            ne: GridSlot::DropBridge,
        }
    }

    pub fn is_dropped(&self) -> bool {
        self.slots().iter().any(|s| *s == GridSlot::DropBridge)
    }

    /// Corners in (sw, nw, se, ne) order
    pub fn slots(&self) -> [GridSlot; 4] {
        [self.sw, self.nw, self.se, self.ne]
    }

    /// Store indices of the supplied corners, duplicates included
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        self.slots().into_iter().filter_map(|s| s.index())
    }
}

/// West/east pair found on one latitude row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnPair {
    west: usize,
    east: usize,
}

impl ColumnPair {
    fn doubled(index: usize) -> Self {
        Self {
            west: index,
            east: index,
        }
    }
}

/// Index span covering one or two full latitude rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowSpan {
    start: usize,
    end: usize,
    single_row: bool,
}

/// Find the grid points surrounding `(latitude, longitude)`.
///
/// Returns [`Neighbors::dropped`] when the store cannot place the
/// coordinate inside a consistent cell; a warning naming the coordinate is
/// logged in that case.
pub fn locate(store: &GridStore, latitude: f64, longitude: f64) -> Neighbors {
    let Some(span) = latitude_span(store, latitude) else {
        warn!("No grid rows bracket latitude {latitude} (bridge at {latitude}, {longitude})");
        return Neighbors::dropped();
    };

    if span.single_row {
        let Some(row) = longitude_pair(store, span.start, span.end, longitude) else {
            warn!("No consistent grid columns around ({latitude}, {longitude})");
            return Neighbors::dropped();
        };
        return Neighbors {
            sw: GridSlot::Found(row.west),
            nw: GridSlot::NotApplicable,
            se: GridSlot::Found(row.east),
            ne: GridSlot::NotApplicable,
        };
    }

    let mid = span.start + (span.end - span.start) / 2;
    let south_lat = store.latitude(span.start);
    let north_lat = store.latitude(span.end);
    if store.latitude(mid) != south_lat || store.latitude(mid + 1) != north_lat {
        warn!(
            "Grid rows at latitudes {south_lat} and {north_lat} differ in length near ({latitude}, {longitude})"
        );
        return Neighbors::dropped();
    }

    let south = longitude_pair(store, span.start, mid, longitude);
    let north = longitude_pair(store, mid + 1, span.end, longitude);
    match (south, north) {
        (Some(south), Some(north)) => Neighbors {
            sw: GridSlot::Found(south.west),
            nw: GridSlot::Found(north.west),
            se: GridSlot::Found(south.east),
            ne: GridSlot::Found(north.east),
        },
        _ => {
            warn!("No consistent grid columns around ({latitude}, {longitude})");
            Neighbors::dropped()
        }
    }
}

/// Latitude phase: bisect to the row(s) at or around `latitude`
fn latitude_span(store: &GridStore, latitude: f64) -> Option<RowSpan> {
    if store.is_empty() {
        return None;
    }
    let last = store.len() - 1;
    if !(latitude >= store.latitude(0) && latitude <= store.latitude(last)) {
        return None;
    }

    let (mut lo, mut hi) = (0, last);
    let exact = loop {
        if store.latitude(lo) == latitude {
            break Some(lo);
        }
        if store.latitude(hi) == latitude {
            break Some(hi);
        }
        if hi - lo <= 1 {
            break None;
        }
        let mid = lo + (hi - lo) / 2;
        let mid_lat = store.latitude(mid);
        if mid_lat == latitude {
            break Some(mid);
        }
        if mid_lat < latitude {
            lo = mid;
        } else {
            hi = mid;
        }
    };

    let span = match exact {
        Some(i) => RowSpan {
            start: row_start(store, i),
            end: row_end(store, i),
            single_row: true,
        },
        // lo is the last point of the south row, hi the first of the north row
        None => RowSpan {
            start: row_start(store, lo),
            end: row_end(store, hi),
            single_row: false,
        },
    };
    Some(span)
}

fn row_start(store: &GridStore, mut i: usize) -> usize {
    let lat = store.latitude(i);
    while i > 0 && store.latitude(i - 1) == lat {
        i -= 1;
    }
    i
}

fn row_end(store: &GridStore, mut i: usize) -> usize {
    let lat = store.latitude(i);
    while i + 1 < store.len() && store.latitude(i + 1) == lat {
        i += 1;
    }
    i
}

/// Longitude phase: bisect one row `[start, end]` by longitude.
///
/// An exact match, or a target beyond either end of the row, yields a
/// doubled index.
fn longitude_pair(store: &GridStore, start: usize, end: usize, longitude: f64) -> Option<ColumnPair> {
    if longitude <= store.longitude(start) {
        return Some(ColumnPair::doubled(start));
    }
    if longitude >= store.longitude(end) {
        return Some(ColumnPair::doubled(end));
    }

    let (mut lo, mut hi) = (start, end);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        let mid_lon = store.longitude(mid);
        if mid_lon == longitude {
            return Some(ColumnPair::doubled(mid));
        }
        if mid_lon < longitude {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    (store.longitude(lo) < longitude && longitude < store.longitude(hi))
        .then_some(ColumnPair { west: lo, east: hi })
}
