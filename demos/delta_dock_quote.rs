//! Quote a single port call at Delta Dock.
//!
//! Prices the call with the terminal's stored defaults, then again after a
//! user edit to the pilotage base, and finally after resetting the edit.

use pda_engine::prelude::*;
use rust_decimal_macros::dec;

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  pda-engine: Delta Dock Quote Example    ║");
    println!("╚══════════════════════════════════════════╝\n");

    let ship = ShipParticulars::new(dec!(200), dec!(32), dec!(15), dec!(10000), dec!(18000), dec!(1))
        .with_name("MV RIVER PLATE")
        .with_drafts(DraftCategory::UpTo853, DraftCategory::Over1036)
        .with_vessel_type(VesselType::Bulker);

    // --- Scenario 1: Stored defaults ---
    println!("━━━ Scenario 1: Stored Defaults ━━━\n");

    let engine = PdaEngine::default();
    let bill = engine.calculate("delta-dock", &ship, None, None);
    println!("{}", bill);

    // --- Scenario 2: Edited pilotage base ---
    println!("━━━ Scenario 2: Edited Pilot Base ━━━\n");

    let mut store = ParameterStore::new();
    let mut params = store.resolve("delta-dock");
    params.pilot_base = Some(dec!(3800));
    if let Err(e) = store.set_override("delta-dock", params) {
        eprintln!("Error: {}", e);
        return;
    }

    let edited = engine.calculate_with_store(&store, "delta-dock", &ship, None);
    println!("{}", edited);
    println!(
        "  Difference: USD {}\n",
        edited.total_usd() - bill.total_usd()
    );

    // --- Scenario 3: Reset ---
    println!("━━━ Scenario 3: Reset to Defaults ━━━\n");

    store.reset("delta-dock");
    let reset = engine.calculate_with_store(&store, "delta-dock", &ship, None);
    println!("  Matches stored defaults: {}", reset == bill);
}
