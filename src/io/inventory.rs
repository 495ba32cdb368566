//! Bridge inventory reader
//!
//! One bridge per line, colon-delimited:
//!
//! ```text
//! dot_id:name:number:latitude:longitude:year_built:span_design_code:material_code:length:nbi_length:max_span
//! 0001:I-5 OVER SKOOKUMCHUCK:5/101:46.7712:-122.9004:1954:2:3:180.4:181.0:60.0
//! ```
//!
//! A synthetic index is prepended to every record, so a well-formed record
//! has [`INVENTORY_FIELDS`] fields including the index.

use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::bridge::{Bridge, BridgeStatus};
use crate::error::FragilityResult;

/// Fields per record, counting the prepended index
pub const INVENTORY_FIELDS: usize = 12;

/// Read an inventory file from disk
pub fn read_inventory_file(path: impl AsRef<Path>) -> FragilityResult<Vec<Bridge>> {
    let file = File::open(path.as_ref())?;
    debug!("Reading bridge inventory {}", path.as_ref().display());
    parse_inventory(BufReader::new(file))
}

/// Parse an inventory; blank lines are skipped, malformed lines become
/// zeroed placeholders
pub fn parse_inventory<R: BufRead>(reader: R) -> FragilityResult<Vec<Bridge>> {
    let mut bridges = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        bridges.push(parse_bridge_line(bridges.len(), &line));
    }

    let malformed = bridges
        .iter()
        .filter(|b| b.status == BridgeStatus::Malformed)
        .count();
    debug!("Inventory: {} bridges, {} malformed", bridges.len(), malformed);
    Ok(bridges)
}

/// Parse one inventory line into the bridge at position `index`
pub fn parse_bridge_line(index: usize, line: &str) -> Bridge {
    let raw: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(':').collect();
    if raw.len() + 1 != INVENTORY_FIELDS {
        debug!(
            "Inventory line {} has {} fields, expected {}",
            index,
            raw.len() + 1,
            INVENTORY_FIELDS
        );
        return Bridge::placeholder(index);
    }

    match parse_fields(index, &raw) {
        Some(bridge) => bridge,
        None => {
            debug!("Inventory line {} has an unreadable numeric field", index);
            Bridge::placeholder(index)
        }
    }
}

fn parse_fields(index: usize, raw: &[&str]) -> Option<Bridge> {
    let float = |i: usize| raw[i].trim().parse::<f64>().ok().filter(|v| v.is_finite());
    let int = |i: usize| raw[i].trim().parse::<i64>().ok();

    Some(Bridge {
        index,
        dot_id: raw[0].trim().to_string(),
        name: raw[1].trim().to_string(),
        number: raw[2].trim().to_string(),
        latitude: float(3)?,
        longitude: float(4)?,
        year_built: i32::try_from(int(5)?).ok()?,
        span_design_code: u32::try_from(int(6)?).ok()?,
        material_code: u32::try_from(int(7)?).ok()?,
        length: float(8)?,
        nbi_length: float(9)?,
        max_span: float(10)?,
        ..Default::default()
    })
}
