//! Carboclor: flat daily berth fee with mooring and spill prevention included.

use crate::core::bill::{CostItem, ItemizedBill};
use crate::core::vessel::ShipParticulars;
use crate::tariff::formulas::{
    light_dues, per_day, push_free_pratique_and_garbage, push_migrations, round_up, ship_pilot_fee,
};
use crate::tariff::parameters::{ParameterOverride, TariffParameters};
use rust_decimal_macros::dec;

pub(crate) const FIELDS: &[&str] = &[
    "port_dues_fixed",
    "light_dues_rate",
    "pilot_base",
    "custom_house",
    "tally_clerk",
    "watchmen",
    "custom_house_ot",
    "migrations_in_out",
    "migrations_single",
    "garbage_insp",
];

pub(crate) fn fallback() -> TariffParameters {
    TariffParameters {
        port_dues_fixed: dec!(14100),
        light_dues_rate: dec!(0.058),
        pilot_base: dec!(2720),
        watchmen: dec!(1850),
        custom_house_ot: dec!(800),
        ..TariffParameters::baseline()
    }
}

pub(crate) fn defaults() -> ParameterOverride {
    ParameterOverride {
        port_dues_fixed: Some(dec!(14100)),
        light_dues_rate: Some(dec!(0.058)),
        pilot_base: Some(dec!(2720)),
        custom_house: Some(dec!(600)),
        tally_clerk: Some(dec!(800)),
        watchmen: Some(dec!(1850)),
        custom_house_ot: Some(dec!(800)),
        migrations_in_out: Some(dec!(2500)),
        migrations_single: Some(dec!(1250)),
        garbage_insp: Some(dec!(40)),
        ..Default::default()
    }
}

pub fn price(ship: &ShipParticulars, params: &TariffParameters) -> ItemizedBill {
    let days = ship.days_alongside;
    let mut bill = ItemizedBill::new();

    bill.push(
        CostItem::new("Port dues", per_day(params.port_dues_fixed, days)).with_description(
            "usd 14,100 first 24 hrs + usd 530 per additional hour \
             (Sat/Sun/Holiday usd 16,900 24 hrs + usd 860 additional hour)",
        ),
    );
    bill.push(CostItem::included("Mooring/Unmooring", "included in port dues"));
    bill.push(CostItem::included("Oil Spill Prevention", "included in port dues"));
    bill.push(CostItem::new("Light dues", light_dues(ship.nrt, params.light_dues_rate)));
    bill.push(CostItem::new("Port Pilot", ship_pilot_fee(ship, params.pilot_base)));
    bill.push(
        CostItem::new("Custom House (inward)", round_up(params.custom_house)).with_description("Inward"),
    );

    push_migrations(&mut bill, ship, params);
    push_free_pratique_and_garbage(&mut bill, ship, params);

    bill.push(CostItem::new("Tallyclerk", per_day(params.tally_clerk, days)));
    bill.push(
        CostItem::new("Watchmen (optional)", per_day(params.watchmen, days)).with_description("Optional"),
    );
    bill.push(CostItem::new("Custom house overtime", round_up(params.custom_house_ot)));

    bill
}
