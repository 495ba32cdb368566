//! Inverse-distance interpolation of ground motion

use serde::{Deserialize, Serialize};

use super::locator::Neighbors;
use super::store::GridStore;
use crate::math::planar_distance;

/// Ground motion at a bridge site
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GroundMotion {
    pub psa03: f64,
    pub psa10: f64,
    pub pga: f64,
}

/// Inverse-square-distance average of the corners in `neighbors`.
///
/// A coordinate that coincides with a supplied corner takes that corner's
/// values unchanged. Duplicated corners are weighted once per slot.
/// Returns `None` for a dropped or empty neighbor set.
pub fn interpolate(
    store: &GridStore,
    latitude: f64,
    longitude: f64,
    neighbors: &Neighbors,
) -> Option<GroundMotion> {
    if neighbors.is_dropped() {
        return None;
    }

    let mut weight_sum = 0.0;
    let mut acc = GroundMotion::default();
    let mut count = 0;

    for index in neighbors.indices() {
        let point = &store[index];
        let d = planar_distance(latitude, longitude, point.latitude, point.longitude);
        if d == 0.0 {
            return Some(GroundMotion {
                psa03: point.psa03,
                psa10: point.psa10,
                pga: point.pga,
            });
        }
        let w = d.powi(-2);
        weight_sum += w;
        acc.psa03 += w * point.psa03;
        acc.psa10 += w * point.psa10;
        acc.pga += w * point.pga;
        count += 1;
    }

    if count == 0 {
        return None;
    }

    Some(GroundMotion {
        psa03: acc.psa03 / weight_sum,
        psa10: acc.psa10 / weight_sum,
        pga: acc.pga / weight_sum,
    })
}
