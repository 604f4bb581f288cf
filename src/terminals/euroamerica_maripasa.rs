//! Euroamerica / Maripasa: weekday per-ton dues with a weekend rate for
//! longer stays.

use crate::core::bill::{CostItem, ItemizedBill};
use crate::core::vessel::ShipParticulars;
use crate::tariff::formulas::{
    isps_charge, light_dues, nrt_dues_with_minimum, per_day, push_free_pratique_and_garbage,
    push_migrations, round_up, ship_pilot_fee,
};
use crate::tariff::parameters::{ParameterOverride, TariffParameters};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Longest stay billed entirely at the weekday rate.
const WEEKDAY_ONLY_MAX_DAYS: Decimal = dec!(5);

pub(crate) const FIELDS: &[&str] = &[
    "port_dues_rate",
    "port_dues_rate_weekend",
    "port_dues_min",
    "port_dues_min_weekend",
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
        port_dues_rate: dec!(0.26),
        port_dues_rate_weekend: dec!(0.32),
        port_dues_min: dec!(1625),
        port_dues_min_weekend: dec!(2000),
        light_dues_rate: dec!(0.058),
        isps_charge: dec!(950),
        pilot_base: dec!(2720),
        mooring_unmooring: dec!(3281),
        ..TariffParameters::baseline()
    }
}

pub(crate) fn defaults() -> ParameterOverride {
    ParameterOverride {
        port_dues_rate: Some(dec!(0.26)),
        port_dues_rate_weekend: Some(dec!(0.32)),
        port_dues_min: Some(dec!(1625)),
        light_dues_rate: Some(dec!(0.058)),
        isps_charge: Some(dec!(950)),
        isps_per_day: Some(false),
        pilot_base: Some(dec!(2720)),
        mooring_unmooring: Some(dec!(3281)),
        custom_house: Some(dec!(600)),
        head_clerk: Some(dec!(1100)),
        watchmen: Some(dec!(1555)),
        migrations_in_out: Some(dec!(2500)),
        migrations_single: Some(dec!(1250)),
        garbage_insp: Some(dec!(40)),
        ..Default::default()
    }
}

/// Port dues with the weekend split.
///
/// Stays of up to five days are billed at the weekday rate. Longer stays
/// count two weekend days per full week alongside; this is an estimate and
/// does not look at the actual calendar. When the weekday rate falls below
/// the daily minimum, the minimum applies to regular days and the weekend
/// minimum to each full week.
pub fn port_dues(ship: &ShipParticulars, params: &TariffParameters) -> Decimal {
    let days = ship.days_alongside;
    if days <= WEEKDAY_ONLY_MAX_DAYS {
        return nrt_dues_with_minimum(params.port_dues_rate, params.port_dues_min, ship.nrt, days);
    }

    let full_weeks = (days / dec!(7)).floor();
    let weekend_days = dec!(2) * full_weeks;
    let regular_days = days - weekend_days;

    if ship.nrt.saturating_mul(params.port_dues_rate) >= params.port_dues_min {
        let weekday = params.port_dues_rate.saturating_mul(ship.nrt).saturating_mul(regular_days);
        let weekend = params
            .port_dues_rate_weekend
            .saturating_mul(ship.nrt)
            .saturating_mul(weekend_days);
        round_up(weekday.saturating_add(weekend))
    } else {
        let weekday = params.port_dues_min.saturating_mul(regular_days);
        let weekend = params.port_dues_min_weekend.saturating_mul(full_weeks);
        round_up(weekday.saturating_add(weekend))
    }
}

pub fn price(ship: &ShipParticulars, params: &TariffParameters) -> ItemizedBill {
    let days = ship.days_alongside;
    let mut bill = ItemizedBill::new();

    bill.push(CostItem::new("Port dues", port_dues(ship, params)).with_description(
        "bss fm Mon-Fri at usd 0.26xNRTxday \
         (if she is along during Sat/Sun/Hol: usd 0.32xNRTxday)",
    ));
    bill.push(CostItem::new("Light dues", light_dues(ship.nrt, params.light_dues_rate)));
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

    bill
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship(nrt: Decimal, days: Decimal) -> ShipParticulars {
        ShipParticulars::new(dec!(190), dec!(32), dec!(18), nrt, dec!(30000), days)
    }

    #[test]
    fn test_five_days_has_no_weekend_split() {
        // max(0.26 * 12000, 1625) * 5 = 3120 * 5
        assert_eq!(port_dues(&ship(dec!(12000), dec!(5)), &fallback()), dec!(15600));
        // below minimum: 1625 * 5
        assert_eq!(port_dues(&ship(dec!(5000), dec!(5)), &fallback()), dec!(8125));
    }

    #[test]
    fn test_six_days_has_no_full_week() {
        // floor(6 / 7) = 0 weekend days
        assert_eq!(port_dues(&ship(dec!(12000), dec!(6)), &fallback()), dec!(18720));
    }

    #[test]
    fn test_weekend_rate_after_full_week() {
        // 8 days: 2 weekend, 6 regular
        // 0.26 * 12000 * 6 + 0.32 * 12000 * 2 = 18720 + 7680
        assert_eq!(port_dues(&ship(dec!(12000), dec!(8)), &fallback()), dec!(26400));
    }

    #[test]
    fn test_weekend_minimum_branch() {
        // 0.26 * 5000 = 1300 < 1625; 15 days: 2 weeks, 4 weekend, 11 regular
        // 1625 * 11 + 2000 * 2
        assert_eq!(port_dues(&ship(dec!(5000), dec!(15)), &fallback()), dec!(21875));
    }

    #[test]
    fn test_long_stay_saturates() {
        assert_eq!(port_dues(&ship(Decimal::MAX, dec!(14)), &fallback()), Decimal::MAX);
        assert_eq!(port_dues(&ship(dec!(12000), Decimal::MAX), &fallback()), Decimal::MAX);
    }

    #[test]
    fn test_isps_billed_once_by_default() {
        let bill = price(&ship(dec!(12000), dec!(4)), &fallback());
        assert_eq!(bill.amount_of("ISPS Charge"), dec!(950));
        assert_eq!(bill.amount_of("Mooring/Unm"), dec!(3281));
    }
}
