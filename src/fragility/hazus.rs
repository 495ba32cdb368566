//! HAZUS slight-damage fragility model

use super::classify::HazusClass;
use crate::math::lognormal_probability;

/// Log-standard deviation shared by every HAZUS class
pub const HAZUS_DISPERSION: f64 = 0.6;

/// Median capacity (g) of the classes with a constant median
fn fixed_median(class: HazusClass) -> Option<f64> {
    let median = match class.code() {
        1 => 0.4,
        2 => 0.6,
        5 | 12 | 17 | 24 => 0.25,
        7 | 14 | 19 => 0.5,
        26 => 0.75,
        28 => 0.8,
        _ => return None,
    };
    Some(median)
}

/// Scale applied to the spectral-shape term of the continuous classes
fn shape_scale(class: HazusClass) -> Option<f64> {
    let scale = match class.code() {
        10 | 22 => 0.6,
        11 | 16 | 23 => 0.9,
        15 => 0.75,
        _ => return None,
    };
    Some(scale)
}

/// Median capacity for a class, or `None` if no curve is defined.
///
/// Continuous classes scale `min(1, 2.5 * psa10 / psa03)`, capturing the
/// spectral shape of the motion.
pub fn hazus_median(class: HazusClass, psa03: f64, psa10: f64) -> Option<f64> {
    if let Some(median) = fixed_median(class) {
        return Some(median);
    }
    let scale = shape_scale(class)?;
    let shape = (2.5 * psa10 / psa03).min(1.0);
    Some(shape * scale)
}

/// Probability of at least slight damage.
///
/// Spectral values are in %g; psa10 is converted to g before it is
/// compared with the median. Classes without a curve yield 0.
pub fn hazus_probability(class: HazusClass, psa03: f64, psa10: f64) -> f64 {
    let Some(median) = hazus_median(class, psa03, psa10) else {
        return 0.0;
    };
    if median <= 0.0 {
        return 0.0;
    }
    lognormal_probability(psa10 / 100.0, median, HAZUS_DISPERSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixed_medians() {
        assert_eq!(hazus_median(HazusClass(1), 10.0, 5.0), Some(0.4));
        assert_eq!(hazus_median(HazusClass(24), 10.0, 5.0), Some(0.25));
        assert_eq!(hazus_median(HazusClass(19), 10.0, 5.0), Some(0.5));
        assert_eq!(hazus_median(HazusClass(28), 10.0, 5.0), Some(0.8));
    }

    #[test]
    fn test_shape_cap_at_ratio_point_four() {
        // psa10 / psa03 = 0.4 puts 2.5 * ratio exactly on the cap
        let m = hazus_median(HazusClass(15), 10.0, 4.0).unwrap();
        assert_relative_eq!(m, 0.75, epsilon = 1e-12);
        let m = hazus_median(HazusClass(15), 10.0, 9.0).unwrap();
        assert_relative_eq!(m, 0.75, epsilon = 1e-12);
        let m = hazus_median(HazusClass(15), 10.0, 2.0).unwrap();
        assert_relative_eq!(m, 0.5 * 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_undefined_class_has_zero_probability() {
        assert_eq!(hazus_median(HazusClass(3), 10.0, 5.0), None);
        assert_eq!(hazus_probability(HazusClass(3), 50.0, 50.0), 0.0);
    }

    #[test]
    fn test_probability_at_median_is_half() {
        // psa10 = 40 %g = 0.4 g for a median of 0.4 g
        assert_relative_eq!(hazus_probability(HazusClass(1), 80.0, 40.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_motion() {
        assert_eq!(hazus_probability(HazusClass(5), 0.0, 0.0), 0.0);
    }
}
