//! Numerical helpers shared by the locator and the fragility models

use statrs::function::erf::erfc;

/// Standard normal cumulative distribution function Φ(x)
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Log-normal fragility: Φ(ln(x / median) / beta)
///
/// Non-positive intensities have no chance of damage and return 0.
pub fn lognormal_probability(x: f64, median: f64, beta: f64) -> f64 {
    if x <= 0.0 || !x.is_finite() {
        return 0.0;
    }
    normal_cdf((x / median).ln() / beta).clamp(0.0, 1.0)
}

/// Planar distance between two (latitude, longitude) pairs in degrees.
///
/// No great-circle correction: grid cells are small enough for the
/// flat approximation.
pub fn planar_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    (dlat * dlat + dlon * dlon).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normal_cdf_known_values() {
        assert_relative_eq!(normal_cdf(0.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(normal_cdf(1.0), 0.841_344_746, epsilon = 1e-8);
        assert_relative_eq!(normal_cdf(-1.96), 0.024_997_895, epsilon = 1e-8);
    }

    #[test]
    fn test_lognormal_median_is_half() {
        assert_relative_eq!(lognormal_probability(0.4, 0.4, 0.6), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_lognormal_non_positive_input() {
        assert_eq!(lognormal_probability(0.0, 0.4, 0.6), 0.0);
        assert_eq!(lognormal_probability(-3.0, 0.4, 0.6), 0.0);
    }

    #[test]
    fn test_planar_distance() {
        assert_relative_eq!(planar_distance(0.0, 0.0, 3.0, 4.0), 5.0, epsilon = 1e-12);
    }
}
