// Closed-form Black-Scholes-Merton pricing for European vanilla options
// (no dividend-yield term).  Every entry point reproduces the same d1/d2
// intermediates; the joint variants evaluate them once and derive the put
// leg via put-call parity.
//
// The kernel performs no input validation: degenerate inputs (sigma = 0,
// t = 0, s <= 0, k <= 0) flow through IEEE-754 arithmetic and surface as
// NaN/Inf (or a zero-volatility limit value) in the output.  Callers who
// want guards should use the [`checked`] layer instead.

pub mod batch;
pub mod checked;
pub mod types;

use crate::math::norm_cdf;

/// Shared Black-Scholes intermediates:
///
/// ```text
/// d1 = (ln(S/K) + (r + sigma^2/2) * T) / (sigma * sqrt(T))
/// d2 = d1 - sigma * sqrt(T)
/// ```
pub(crate) fn d1_d2(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> (f64, f64) {
    let sigma_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / sigma_sqrt_t;
    let d2 = d1 - sigma_sqrt_t;
    (d1, d2)
}

/// Price of a European call option: `S*N(d1) - K*e^(-rT)*N(d2)`.
pub fn call_price(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(s, k, t, r, sigma);
    s * norm_cdf(d1) - k * (-r * t).exp() * norm_cdf(d2)
}

/// Price of a European put option: `-S*N(-d1) + K*e^(-rT)*N(-d2)`.
pub fn put_price(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(s, k, t, r, sigma);
    -s * norm_cdf(-d1) + k * (-r * t).exp() * norm_cdf(-d2)
}

/// Call and put price from a single d1/d2 evaluation.
///
/// The put leg is derived via put-call parity, so
/// `call - put == s - k*e^(-rt)` holds to within rounding for the returned
/// pair, with no second CDF evaluation to drift against the call leg.
pub fn price(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> (f64, f64) {
    let (d1, d2) = d1_d2(s, k, t, r, sigma);
    let discounted_strike = k * (-r * t).exp();
    let call = s * norm_cdf(d1) - discounted_strike * norm_cdf(d2);
    let put = call - s + discounted_strike;
    (call, put)
}

/// Call delta: `N(d1)`, in `[0, 1]` for valid inputs.
pub fn call_delta(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    let (d1, _) = d1_d2(s, k, t, r, sigma);
    norm_cdf(d1)
}

/// Put delta: `N(d1) - 1`, in `[-1, 0]` for valid inputs.
pub fn put_delta(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    let (d1, _) = d1_d2(s, k, t, r, sigma);
    norm_cdf(d1) - 1.0
}

/// Call and put delta from a single d1 evaluation.
pub fn delta(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> (f64, f64) {
    let (d1, _) = d1_d2(s, k, t, r, sigma);
    let call = norm_cdf(d1);
    (call, call - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d1_d2_reference() {
        // S=K=100, T=1, r=0.05, sigma=0.2 => d1=0.35, d2=0.15
        let (d1, d2) = d1_d2(100.0, 100.0, 1.0, 0.05, 0.2);
        assert!((d1 - 0.35).abs() < 1e-12);
        assert!((d2 - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_joint_price_parity_by_construction() {
        let (call, put) = price(95.0, 110.0, 0.5, 0.03, 0.35);
        let discounted_strike = 110.0 * (-0.03_f64 * 0.5).exp();
        assert!((call - put - (95.0 - discounted_strike)).abs() < 1e-12);
    }

    #[test]
    fn test_delta_shares_d1() {
        let (cd, pd) = delta(120.0, 100.0, 0.25, 0.01, 0.4);
        assert_eq!(cd - 1.0, pd);
    }
}
