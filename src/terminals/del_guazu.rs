//! Del Guazu: port dues depend on hull class; departure tug for long hulls.

use crate::core::bill::{CostItem, ItemizedBill};
use crate::core::vessel::{ShipParticulars, VesselType};
use crate::tariff::formulas::{
    isps_charge, loa_threshold_dues, per_day, push_free_pratique_and_garbage, push_migrations,
    round_up, ship_pilot_fee,
};
use crate::tariff::parameters::{ParameterOverride, TariffParameters};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const TANKER_BAND_150: Decimal = dec!(150);
const TANKER_BAND_175: Decimal = dec!(175);

pub(crate) const FIELDS: &[&str] = &[
    "isps_charge",
    "isps_per_day",
    "pilot_base",
    "mooring_unmooring",
    "custom_house",
    "head_clerk",
    "watchmen",
    "tugboat",
    "migrations_in_out",
    "migrations_single",
    "garbage_insp",
    "port_dues_loa_threshold",
    "port_dues_rate_above_threshold",
    "port_dues_rate_below_threshold",
    "port_dues_min_above_threshold",
    "port_dues_min_below_threshold",
    "tanker_dues_loa_150",
    "tanker_dues_loa_175",
    "tanker_dues_loa_175_plus",
];

pub(crate) fn fallback() -> TariffParameters {
    TariffParameters {
        isps_charge: dec!(900),
        pilot_base: dec!(3020),
        mooring_unmooring: dec!(4200),
        tugboat: dec!(21000),
        tanker_dues_loa_150: dec!(4200),
        tanker_dues_loa_175: dec!(4800),
        tanker_dues_loa_175_plus: dec!(5800),
        ..TariffParameters::baseline().with_loa_threshold_dues()
    }
}

pub(crate) fn defaults() -> ParameterOverride {
    ParameterOverride {
        isps_charge: Some(dec!(900)),
        isps_per_day: Some(true),
        pilot_base: Some(dec!(3020)),
        mooring_unmooring: Some(dec!(4200)),
        custom_house: Some(dec!(600)),
        head_clerk: Some(dec!(1100)),
        watchmen: Some(dec!(1555)),
        tugboat: Some(dec!(21000)),
        migrations_in_out: Some(dec!(2500)),
        migrations_single: Some(dec!(1250)),
        garbage_insp: Some(dec!(40)),
        port_dues_loa_threshold: Some(dec!(225)),
        port_dues_rate_above_threshold: Some(dec!(0.45)),
        port_dues_rate_below_threshold: Some(dec!(0.43)),
        port_dues_min_above_threshold: Some(dec!(5200)),
        port_dues_min_below_threshold: Some(dec!(4800)),
        tanker_dues_loa_150: Some(dec!(4200)),
        tanker_dues_loa_175: Some(dec!(4800)),
        tanker_dues_loa_175_plus: Some(dec!(5800)),
        ..Default::default()
    }
}

/// Bulkers pay the LOA-threshold per-ton tariff; tankers a flat daily rate
/// by LOA band. Without a declared hull class no port dues are computed.
pub fn port_dues(ship: &ShipParticulars, params: &TariffParameters) -> Decimal {
    match ship.vessel_type {
        Some(VesselType::Bulker) => loa_threshold_dues(ship, params),
        Some(VesselType::Tanker) => {
            let daily = if ship.loa < TANKER_BAND_150 {
                params.tanker_dues_loa_150
            } else if ship.loa < TANKER_BAND_175 {
                params.tanker_dues_loa_175
            } else {
                params.tanker_dues_loa_175_plus
            };
            per_day(daily, ship.days_alongside)
        }
        None => Decimal::ZERO,
    }
}

pub fn price(ship: &ShipParticulars, params: &TariffParameters) -> ItemizedBill {
    let days = ship.days_alongside;
    let mut bill = ItemizedBill::new();

    bill.push(CostItem::new("Port dues", port_dues(ship, params)));
    bill.push(CostItem::new("ISPS Charge", isps_charge(params, days)));
    bill.push(CostItem::new("Port Pilot", ship_pilot_fee(ship, params.pilot_base)));
    bill.push(CostItem::new("Mooring/Unm", round_up(params.mooring_unmooring)).with_description("NWH"));
    bill.push(
        CostItem::new("Custom House (inward)", round_up(params.custom_house)).with_description("Inward"),
    );

    push_migrations(&mut bill, ship, params);
    push_free_pratique_and_garbage(&mut bill, ship, params);

    bill.push(CostItem::new("Headclerk", per_day(params.head_clerk, days)));
    bill.push(
        CostItem::new("Watchmen (optional)", per_day(params.watchmen, days)).with_description("Optional"),
    );
    bill.push(
        CostItem::new("Tugboat", round_up(params.tugboat))
            .with_description("Compulsory only for departure of vessels exceeding 120 m LOA"),
    );

    bill
}
