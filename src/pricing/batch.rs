//! Elementwise pricing over slices of quotes.
//!
//! Each element is priced independently by the scalar kernel and output
//! order equals input order, so a batched call is interchangeable with the
//! same sequence of scalar calls.  There is no cross-element state; callers
//! may split a slice across threads freely.

use super::types::{PriceSheetRow, PricingInput};
use super::{delta, price};

/// Joint `(call, put)` price for each input, in input order.
pub fn price_slice(inputs: &[PricingInput]) -> Vec<(f64, f64)> {
    inputs
        .iter()
        .map(|q| price(q.spot, q.strike, q.years_to_exp, q.rate, q.sigma))
        .collect()
}

/// Joint `(call_delta, put_delta)` for each input, in input order.
pub fn delta_slice(inputs: &[PricingInput]) -> Vec<(f64, f64)> {
    inputs
        .iter()
        .map(|q| delta(q.spot, q.strike, q.years_to_exp, q.rate, q.sigma))
        .collect()
}

/// Full sheet: joint prices and joint deltas per input, in input order.
pub fn price_sheet(inputs: &[PricingInput]) -> Vec<PriceSheetRow> {
    let mut results = Vec::with_capacity(inputs.len());

    for q in inputs {
        let (call_price, put_price) = price(q.spot, q.strike, q.years_to_exp, q.rate, q.sigma);
        let (call_delta, put_delta) = delta(q.spot, q.strike, q.years_to_exp, q.rate, q.sigma);

        results.push(PriceSheetRow {
            spot: q.spot,
            strike: q.strike,
            years_to_exp: q.years_to_exp,
            call_price,
            put_price,
            call_delta,
            put_delta,
        });
    }

    results
}
