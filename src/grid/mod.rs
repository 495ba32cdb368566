//! Ground-motion grid: storage, location and interpolation

mod bounds;
mod interpolate;
mod locator;
mod point;
mod store;

pub use bounds::{MapBounds, DEFAULT_BOUNDS_BUFFER};
pub use interpolate::{interpolate, GroundMotion};
pub use locator::{locate, GridSlot, Neighbors};
pub use point::GridPoint;
pub use store::{GridStore, MIN_GRID_POINTS};
