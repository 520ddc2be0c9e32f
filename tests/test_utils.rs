use pricer_lib::PricingInput;
use serde::Deserialize;

/// CSV row structure matching tests/data/option_chain.csv
#[derive(Debug, Deserialize)]
struct CsvRow {
    spot: f64,
    strike: f64,
    years_to_exp: f64,
    rate: f64,
    sigma: f64,
}

/// Load a quote chain from CSV and convert to pricer-lib inputs
#[allow(dead_code)] // Each test binary uses its own subset of helpers
pub fn load_chain(file_path: &str) -> Result<Vec<PricingInput>, Box<dyn std::error::Error>> {
    let mut reader = csv::Reader::from_path(file_path)?;
    let mut data = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        data.push(PricingInput::new(
            row.spot,
            row.strike,
            row.years_to_exp,
            row.rate,
            row.sigma,
        ));
    }

    Ok(data)
}

/// Dense parameter grid spanning ITM/ATM/OTM strikes, short and long
/// expiries, negative through positive rates, and low to high vols.
#[allow(dead_code)]
pub fn sample_grid() -> Vec<PricingInput> {
    let spots = [80.0, 100.0, 123.45];
    let strikes = [50.0, 95.0, 100.0, 150.0];
    let expiries = [0.02, 0.25, 1.0, 5.0];
    let rates = [-0.01, 0.0, 0.05];
    let sigmas = [0.05, 0.2, 0.8];

    let mut grid = Vec::new();
    for &s in &spots {
        for &k in &strikes {
            for &t in &expiries {
                for &r in &rates {
                    for &sigma in &sigmas {
                        grid.push(PricingInput::new(s, k, t, r, sigma));
                    }
                }
            }
        }
    }
    grid
}
