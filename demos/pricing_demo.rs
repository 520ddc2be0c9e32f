// demos/pricing_demo.rs

//! Demonstration of closed-form European option pricing
//!
//! This example shows how to:
//! 1. Build a small quote chain around a spot price
//! 2. Price calls and puts (and their deltas) in one batched call
//! 3. Verify put-call parity on the output
//! 4. Use the checked layer to reject degenerate inputs

use anyhow::Result;
use pricer_lib::{price_sheet, pricing::checked, PricingInput};

fn main() -> Result<()> {
    println!("Black-Scholes European Pricing Demo");
    println!("===================================");

    let spot = 100.0;
    let years_to_exp = 0.5;
    let rate = 0.03;

    // Strikes from deep ITM to deep OTM with a mild vol skew
    let chain: Vec<PricingInput> = [
        (70.0, 0.28),
        (85.0, 0.24),
        (95.0, 0.21),
        (100.0, 0.20),
        (105.0, 0.19),
        (115.0, 0.18),
        (130.0, 0.18),
    ]
    .iter()
    .map(|&(strike, sigma)| PricingInput::new(spot, strike, years_to_exp, rate, sigma))
    .collect();

    println!("\nSpot: ${:.2}  Expiry: {:.2}y  Rate: {:.1}%", spot, years_to_exp, rate * 100.0);
    println!("\n{:>8} {:>10} {:>10} {:>9} {:>9}", "Strike", "Call", "Put", "CallDlt", "PutDlt");

    let sheet = price_sheet(&chain);
    for row in &sheet {
        println!(
            "{:>8.1} {:>10.4} {:>10.4} {:>9.4} {:>9.4}",
            row.strike, row.call_price, row.put_price, row.call_delta, row.put_delta
        );
    }

    // Parity check: call - put = S - K*exp(-rT), row by row
    println!("\nPut-call parity check:");
    let discount = (-rate * years_to_exp).exp();
    for row in &sheet {
        let gap = row.call_price - row.put_price - (spot - row.strike * discount);
        println!("  K={:>6.1}  |gap| = {:.2e}", row.strike, gap.abs());
    }

    // The checked layer errors out instead of returning NaN
    println!("\nChecked layer on a degenerate quote (T = 0):");
    match checked::call_price(spot, 100.0, 0.0, rate, 0.2) {
        Ok(p) => println!("  unexpected price: {}", p),
        Err(e) => println!("  rejected: {}", e),
    }

    let atm = checked::price_quote("call", spot, 100.0, years_to_exp, rate, 0.2)?;
    println!("\nATM call via price_quote: ${:.4}", atm);

    Ok(())
}
