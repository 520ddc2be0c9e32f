/// Five-parameter input for a single European option quote.
///
/// The kernel itself takes plain scalars; this struct exists for the batch
/// layer and for callers who move quotes around as records (CSV rows,
/// JSON payloads with the `serde` feature, ...).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingInput {
    /// Spot price of the underlying asset
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to expiry in years
    pub years_to_exp: f64,
    /// Continuously-compounded risk-free rate
    pub rate: f64,
    /// Annualised volatility (as decimal, e.g. 0.25 for 25%)
    pub sigma: f64,
}

impl PricingInput {
    pub fn new(spot: f64, strike: f64, years_to_exp: f64, rate: f64, sigma: f64) -> Self {
        Self {
            spot,
            strike,
            years_to_exp,
            rate,
            sigma,
        }
    }
}

/// One row of [`price_sheet`](crate::pricing::batch::price_sheet) output:
/// joint prices and deltas for the corresponding input.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceSheetRow {
    pub spot: f64,
    pub strike: f64,
    pub years_to_exp: f64,
    pub call_price: f64,
    pub put_price: f64,
    pub call_delta: f64,
    pub put_delta: f64,
}
