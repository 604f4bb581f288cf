//! Pan American Energy: no port dues, custom surveyor required.

use crate::core::bill::{CostItem, ItemizedBill};
use crate::core::vessel::ShipParticulars;
use crate::tariff::formulas::{
    light_dues, per_day, push_free_pratique_and_garbage, push_migrations, round_up, ship_pilot_fee,
};
use crate::tariff::parameters::{ParameterOverride, TariffParameters};
use rust_decimal_macros::dec;

pub(crate) const FIELDS: &[&str] = &[
    "light_dues_rate",
    "pilot_base",
    "mooring_unmooring",
    "custom_house",
    "custom_surveyor",
    "head_clerk",
    "watchmen",
    "migrations_in_out",
    "migrations_single",
    "garbage_insp",
];

pub(crate) fn fallback() -> TariffParameters {
    TariffParameters {
        light_dues_rate: dec!(0.058),
        pilot_base: dec!(2720),
        mooring_unmooring: dec!(4200),
        custom_surveyor: dec!(1200),
        watchmen: dec!(1850),
        ..TariffParameters::baseline()
    }
}

pub(crate) fn defaults() -> ParameterOverride {
    ParameterOverride {
        light_dues_rate: Some(dec!(0.058)),
        pilot_base: Some(dec!(2720)),
        mooring_unmooring: Some(dec!(4200)),
        custom_house: Some(dec!(600)),
        custom_surveyor: Some(dec!(1200)),
        head_clerk: Some(dec!(1100)),
        watchmen: Some(dec!(1850)),
        migrations_in_out: Some(dec!(2500)),
        migrations_single: Some(dec!(1250)),
        garbage_insp: Some(dec!(40)),
        ..Default::default()
    }
}

pub fn price(ship: &ShipParticulars, params: &TariffParameters) -> ItemizedBill {
    let days = ship.days_alongside;
    let mut bill = ItemizedBill::new();

    bill.push(CostItem::not_applicable("Port dues"));
    bill.push(CostItem::new("Light dues", light_dues(ship.nrt, params.light_dues_rate)));
    bill.push(CostItem::new("Port Pilot", ship_pilot_fee(ship, params.pilot_base)));
    bill.push(
        CostItem::new("Mooring/Unm", round_up(params.mooring_unmooring)).with_description("in NWH"),
    );
    bill.push(
        CostItem::new("Custom House (inward)", round_up(params.custom_house)).with_description("Inward"),
    );

    push_migrations(&mut bill, ship, params);
    push_free_pratique_and_garbage(&mut bill, ship, params);

    bill.push(CostItem::new("Custom surveyor", round_up(params.custom_surveyor)));
    bill.push(CostItem::new("Headclerk", per_day(params.head_clerk, days)));
    bill.push(
        CostItem::new("Watchmen (optional)", per_day(params.watchmen, days)).with_description("Optional"),
    );

    bill
}
