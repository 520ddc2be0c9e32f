//! Opt-in validated wrappers around the pricing kernel.
//!
//! The kernel deliberately propagates NaN/Inf for degenerate inputs.  These
//! wrappers reject such inputs up front and return an error instead, for
//! callers who would rather fail loudly than carry non-finite values
//! downstream.  The kernel's own behaviour is unchanged.

use anyhow::{anyhow, Result};

fn validate(s: f64, k: f64, t: f64, sigma: f64) -> Result<()> {
    if !(s > 0.0) || !(k > 0.0) {
        return Err(anyhow!("Non-positive spot or strike: S={}, K={}", s, k));
    }
    if !(sigma > 0.0) || !(t > 0.0) {
        return Err(anyhow!("Invalid parameters: sigma={}, t={}", sigma, t));
    }
    Ok(())
}

/// European call price, rejecting degenerate inputs.
pub fn call_price(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> Result<f64> {
    validate(s, k, t, sigma)?;
    Ok(super::call_price(s, k, t, r, sigma))
}

/// European put price, rejecting degenerate inputs.
pub fn put_price(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> Result<f64> {
    validate(s, k, t, sigma)?;
    Ok(super::put_price(s, k, t, r, sigma))
}

/// Call delta, rejecting degenerate inputs.
pub fn call_delta(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> Result<f64> {
    validate(s, k, t, sigma)?;
    Ok(super::call_delta(s, k, t, r, sigma))
}

/// Put delta, rejecting degenerate inputs.
pub fn put_delta(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> Result<f64> {
    validate(s, k, t, sigma)?;
    Ok(super::put_delta(s, k, t, r, sigma))
}

/// Price a single option selected by type string (`"call"` or `"put"`).
pub fn price_quote(option_type: &str, s: f64, k: f64, t: f64, r: f64, sigma: f64) -> Result<f64> {
    validate(s, k, t, sigma)?;

    match option_type.to_lowercase().as_str() {
        "call" => Ok(super::call_price(s, k, t, r, sigma)),
        "put" => Ok(super::put_price(s, k, t, r, sigma)),
        _ => Err(anyhow!("Invalid option type: {}", option_type)),
    }
}
