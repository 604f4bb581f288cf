//! Compare the same call across every terminal.
//!
//! Shows how each terminal's tariff structure changes the total for one
//! vessel, and how the exchange rate moves the only rate-sensitive terminal.

use chrono::Utc;
use pda_engine::prelude::*;
use rust_decimal_macros::dec;

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  pda-engine: Terminal Comparison         ║");
    println!("╚══════════════════════════════════════════╝\n");

    let ship = ShipParticulars::new(dec!(229), dec!(32.26), dec!(20.05), dec!(24500), dec!(43000), dec!(3))
        .with_name("MV PARANA TRADER")
        .with_drafts(DraftCategory::Over914, DraftCategory::Over975)
        .with_route(false, true)
        .with_vessel_type(VesselType::Tanker);

    let quote = match ExchangeQuote::new(dec!(1420), dec!(1475), Utc::now()) {
        Ok(quote) => quote,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };
    println!("  {}\n", quote);

    // --- Totals per terminal ---
    println!("━━━ Totals per Terminal ━━━\n");

    let engine = PdaEngine::default();
    for terminal in Terminal::ALL {
        let bill = engine.calculate_with_quote(terminal.id(), &ship, Some(&quote), None);
        println!(
            "  {:<28} {:>3} items   USD {:>10}",
            terminal.name(),
            bill.len(),
            bill.total_usd()
        );
    }

    // --- Exchange rate sensitivity ---
    println!("\n━━━ Exchange Rate Sensitivity (San Pedro) ━━━\n");

    for rate in [dec!(1000), dec!(1450), dec!(2000)] {
        let bill = engine.calculate("san-pedro", &ship, Some(rate), None);
        println!(
            "  rate {:>5}: ISPS USD {:>6}   total USD {:>10}",
            rate,
            bill.amount_of("ISPS Charge"),
            bill.total_usd()
        );
    }
}
