//! Las Palmas: per-ton daily dues with a daily minimum.

use crate::core::bill::{CostItem, ItemizedBill};
use crate::core::vessel::ShipParticulars;
use crate::tariff::formulas::{
    isps_charge, light_dues, nrt_dues_with_minimum, per_day, push_free_pratique_and_garbage,
    push_migrations, round_up, ship_pilot_fee,
};
use crate::tariff::parameters::{ParameterOverride, TariffParameters};
use rust_decimal_macros::dec;

pub(crate) const FIELDS: &[&str] = &[
    "port_dues_rate",
    "port_dues_min",
    "light_dues_rate",
    "isps_charge",
    "isps_per_day",
    "pilot_base",
    "mooring_unmooring",
    "custom_house",
    "head_clerk",
    "watchmen",
    "migrations_in_out",
    "migrations_single",
    "garbage_insp",
];

pub(crate) fn fallback() -> TariffParameters {
    TariffParameters {
        port_dues_rate: dec!(0.37),
        port_dues_min: dec!(2000),
        light_dues_rate: dec!(0.029),
        isps_charge: dec!(500),
        pilot_base: dec!(3222.5),
        mooring_unmooring: dec!(2900),
        ..TariffParameters::baseline()
    }
}

pub(crate) fn defaults() -> ParameterOverride {
    ParameterOverride {
        port_dues_rate: Some(dec!(0.37)),
        port_dues_min: Some(dec!(2000)),
        light_dues_rate: Some(dec!(0.029)),
        isps_charge: Some(dec!(500)),
        isps_per_day: Some(false),
        pilot_base: Some(dec!(3222.5)),
        mooring_unmooring: Some(dec!(2900)),
        custom_house: Some(dec!(600)),
        head_clerk: Some(dec!(1100)),
        watchmen: Some(dec!(1555)),
        migrations_in_out: Some(dec!(2500)),
        migrations_single: Some(dec!(1250)),
        garbage_insp: Some(dec!(40)),
        ..Default::default()
    }
}

pub fn price(ship: &ShipParticulars, params: &TariffParameters) -> ItemizedBill {
    let days = ship.days_alongside;
    let mut bill = ItemizedBill::new();

    bill.push(CostItem::new(
        "Port dues",
        nrt_dues_with_minimum(params.port_dues_rate, params.port_dues_min, ship.nrt, days),
    ));
    bill.push(CostItem::new("ISPS Charge", isps_charge(params, days)));
    bill.push(CostItem::new("Light dues", light_dues(ship.nrt, params.light_dues_rate)));
    bill.push(CostItem::new("Port Pilot", ship_pilot_fee(ship, params.pilot_base)));
    bill.push(CostItem::new("Mooring/Unm", round_up(params.mooring_unmooring)).with_description("NWH"));
    bill.push(
        CostItem::new("Custom House (inward)", round_up(params.custom_house)).with_description("Inward"),
    );

    push_migrations(&mut bill, ship, params);
    push_free_pratique_and_garbage(&mut bill, ship, params);

    bill.push(CostItem::new("Headclerk", per_day(params.head_clerk, days)));
    bill.push(CostItem::new("Watchmen (optional)", per_day(params.watchmen, days)));

    bill
}
