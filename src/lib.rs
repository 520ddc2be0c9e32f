//! # Pricer-Lib: Closed-Form European Option Pricing
//!
//! `pricer-lib` is a lightweight Rust library for quantitative finance
//! applications that need Black-Scholes-Merton prices and delta sensitivities
//! for European vanilla options.  The entire crate is a stateless kernel of
//! pure functions: no configuration, no I/O, no shared state.
//!
//! ## Core Features
//!
//! - **Prices**: closed-form call and put prices (no dividend-yield term)
//! - **Deltas**: first-order price sensitivity to the underlying
//! - **Joint variants**: call and put from one d1/d2 evaluation, with the put
//!   price derived via put-call parity so the pair is exactly consistent
//! - **Batch layer**: elementwise pricing over slices of quotes
//!
//! ## Quick Start
//!
//! ```rust
//! use pricer_lib::{delta, price};
//!
//! // S=100, K=100, T=1y, r=5%, sigma=20%
//! let (call, put) = price(100.0, 100.0, 1.0, 0.05, 0.2);
//! let (call_delta, put_delta) = delta(100.0, 100.0, 1.0, 0.05, 0.2);
//!
//! assert!((call - 10.4506).abs() < 1e-3);
//! assert!((put - 5.5735).abs() < 1e-3);
//! assert!(call_delta > 0.0 && call_delta < 1.0);
//! assert!(put_delta > -1.0 && put_delta < 0.0);
//! ```
//!
//! ## Degenerate Inputs
//!
//! The kernel validates nothing: `sigma = 0`, `T = 0`, or a non-positive
//! spot/strike follow IEEE-754 semantics through the formula and come back as
//! NaN, Inf, or a zero-volatility limit value.  Callers who want errors
//! instead should use [`pricing::checked`], which rejects degenerate inputs
//! with `anyhow` errors before touching the kernel.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod math;
pub mod pricing;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Scalar kernel
pub use pricing::{call_delta, call_price, delta, price, put_delta, put_price};

// Batch layer
pub use pricing::batch::{delta_slice, price_sheet, price_slice};

// Quote types
pub use pricing::types::{PriceSheetRow, PricingInput};
