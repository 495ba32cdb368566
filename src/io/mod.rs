//! Readers for the motion grid and bridge inventory files

mod grid;
mod inventory;

pub use grid::{parse_grid, read_grid_file, GridFile, GRID_FIELDS};
pub use inventory::{parse_bridge_line, parse_inventory, read_inventory_file, INVENTORY_FIELDS};
