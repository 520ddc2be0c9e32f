/// Standard normal cumulative distribution function.
///
/// Every pricing entry point in this crate goes through this single
/// definition, so N(x) cannot drift between operations.
pub fn norm_cdf(x: f64) -> f64 {
    // 0.5 * [1 + erf(x / sqrt(2))]
    0.5 * (1.0 + libm::erf(x / (2.0_f64).sqrt()))
}

#[cfg(test)]
mod tests {
    use super::norm_cdf;
    use statrs::distribution::{ContinuousCDF, Normal};

    #[test]
    fn test_norm_cdf_matches_statrs() {
        let normal = Normal::new(0.0, 1.0).unwrap();
        let mut x = -10.0;
        while x <= 10.0 {
            let diff = (norm_cdf(x) - normal.cdf(x)).abs();
            assert!(diff < 1e-12, "norm_cdf({}) off by {}", x, diff);
            x += 0.125;
        }
    }

    #[test]
    fn test_norm_cdf_reference_points() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
        // N(1.96) from standard tables
        assert!((norm_cdf(1.96) - 0.975_002_104_851_78).abs() < 1e-9);
        assert!((norm_cdf(-1.96) - 0.024_997_895_148_22).abs() < 1e-9);
    }

    #[test]
    fn test_norm_cdf_tail_saturation() {
        assert_eq!(norm_cdf(f64::INFINITY), 1.0);
        assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
        assert!(norm_cdf(f64::NAN).is_nan());
    }
}
