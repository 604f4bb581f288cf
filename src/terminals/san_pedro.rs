//! San Pedro: GRT-based light dues with a tonnage surcharge and a security
//! charge billed in local currency.

use crate::core::bill::{CostItem, ItemizedBill};
use crate::core::vessel::ShipParticulars;
use crate::tariff::formulas::{
    per_day, push_free_pratique_and_garbage, push_migrations, round_up, saturating_div,
    ship_pilot_fee,
};
use crate::tariff::parameters::{ParameterOverride, TariffParameters};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub(crate) const FIELDS: &[&str] = &[
    "port_dues_rate",
    "light_dues_grt_rate",
    "light_dues_multiplier",
    "light_dues_surcharge_threshold",
    "light_dues_surcharge_factor",
    "isps_base_factor",
    "isps_nrt_rate",
    "pilot_base",
    "mooring_unmooring",
    "boat_for_mooring",
    "custom_house",
    "head_clerk",
    "watchmen",
    "migrations_in_out",
    "migrations_single",
    "garbage_insp",
];

pub(crate) fn fallback() -> TariffParameters {
    TariffParameters {
        port_dues_rate: dec!(0.4),
        light_dues_grt_rate: dec!(0.25),
        light_dues_multiplier: dec!(1.10),
        light_dues_surcharge_threshold: dec!(20000),
        light_dues_surcharge_factor: dec!(1.15),
        isps_base_factor: dec!(43015.50),
        isps_nrt_rate: dec!(1.8),
        pilot_base: dec!(2900),
        mooring_unmooring: dec!(4800),
        boat_for_mooring: dec!(2900),
        ..TariffParameters::baseline()
    }
}

pub(crate) fn defaults() -> ParameterOverride {
    ParameterOverride {
        port_dues_rate: Some(dec!(0.4)),
        light_dues_grt_rate: Some(dec!(0.25)),
        light_dues_multiplier: Some(dec!(1.10)),
        light_dues_surcharge_threshold: Some(dec!(20000)),
        light_dues_surcharge_factor: Some(dec!(1.15)),
        isps_base_factor: Some(dec!(43015.50)),
        isps_nrt_rate: Some(dec!(1.8)),
        pilot_base: Some(dec!(2900)),
        mooring_unmooring: Some(dec!(4800)),
        boat_for_mooring: Some(dec!(2900)),
        custom_house: Some(dec!(600)),
        head_clerk: Some(dec!(1100)),
        watchmen: Some(dec!(1555)),
        migrations_in_out: Some(dec!(2500)),
        migrations_single: Some(dec!(1250)),
        garbage_insp: Some(dec!(40)),
        ..Default::default()
    }
}

/// `ceil(grt * rate * multiplier * factor)`; the surcharge factor applies
/// only when GRT is strictly above the threshold.
pub fn light_dues(grt: Decimal, params: &TariffParameters) -> Decimal {
    let factor = if grt > params.light_dues_surcharge_threshold {
        params.light_dues_surcharge_factor
    } else {
        Decimal::ONE
    };
    round_up(
        grt.saturating_mul(params.light_dues_grt_rate)
            .saturating_mul(params.light_dues_multiplier)
            .saturating_mul(factor),
    )
}

/// Security charge accrued in local currency and converted to USD:
/// `ceil((6 * days * 3 * base_factor + nrt * nrt_rate) / exchange_rate)`.
///
/// `exchange_rate` must be positive; the engine never passes anything else.
/// A rate small enough to overflow the quotient saturates at `Decimal::MAX`.
pub fn isps_charge(ship: &ShipParticulars, params: &TariffParameters, exchange_rate: Decimal) -> Decimal {
    let local = dec!(6)
        .saturating_mul(ship.days_alongside)
        .saturating_mul(dec!(3))
        .saturating_mul(params.isps_base_factor)
        .saturating_add(ship.nrt.saturating_mul(params.isps_nrt_rate));
    round_up(saturating_div(local, exchange_rate))
}

pub fn price(ship: &ShipParticulars, params: &TariffParameters, exchange_rate: Decimal) -> ItemizedBill {
    let days = ship.days_alongside;
    let mut bill = ItemizedBill::new();

    bill.push(CostItem::new(
        "Port dues",
        round_up(params.port_dues_rate.saturating_mul(ship.nrt).saturating_mul(days)),
    ));
    bill.push(CostItem::new("Light dues", light_dues(ship.grt, params)));
    bill.push(
        CostItem::new("ISPS Charge", isps_charge(ship, params, exchange_rate))
            .with_description("Port safety dues will be increased depending on total vessel´s stay"),
    );
    bill.push(CostItem::new("Port Pilot", ship_pilot_fee(ship, params.pilot_base)));
    bill.push(CostItem::new("Mooring/Unm", round_up(params.mooring_unmooring)));
    bill.push(CostItem::new("Boat for mooring/unm", round_up(params.boat_for_mooring)));
    bill.push(
        CostItem::new("Custom House (inward)", round_up(params.custom_house)).with_description("Inward"),
    );

    push_migrations(&mut bill, ship, params);
    push_free_pratique_and_garbage(&mut bill, ship, params);

    bill.push(CostItem::new("Headclerk", per_day(params.head_clerk, days)));
    bill.push(
        CostItem::new("Watchmen (optional)", per_day(params.watchmen, days)).with_description("Optional"),
    );

    bill
}
