//! Numeric helpers shared by the terminal pricing rules.
//!
//! Every helper rounds up at each step it documents; rounding is never
//! deferred to the end of a computation.
//!
//! Arithmetic on caller-supplied figures saturates at `Decimal::MAX` and
//! `Decimal::MIN` instead of overflowing, so no input can make pricing panic.

use crate::core::bill::{CostItem, ItemizedBill};
use crate::core::vessel::ShipParticulars;
use crate::tariff::parameters::TariffParameters;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Smallest billing unit any hull is charged for.
pub const MIN_BILLING_UNITS: Decimal = dec!(65);

/// Round an amount up to the next whole dollar.
pub fn round_up(amount: Decimal) -> Decimal {
    amount.ceil()
}

/// `numerator / denominator`, clamped to the representable range.
///
/// A zero denominator saturates toward the numerator's sign; `0 / 0` is zero.
///
/// # Examples
///
/// ```
/// use pda_engine::tariff::formulas::saturating_div;
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(saturating_div(dec!(9), dec!(3)), dec!(3));
/// assert_eq!(saturating_div(dec!(1000), Decimal::new(1, 28)), Decimal::MAX);
/// assert_eq!(saturating_div(dec!(-1000), Decimal::new(1, 28)), Decimal::MIN);
/// ```
pub fn saturating_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator.checked_div(denominator).unwrap_or_else(|| {
        let negative = if denominator.is_zero() {
            numerator.is_sign_negative()
        } else {
            numerator.is_sign_negative() != denominator.is_sign_negative()
        };
        if numerator.is_zero() {
            Decimal::ZERO
        } else if negative {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

/// Billing units (UF) for pilotage: `ceil(loa * beam * depth / 800)`,
/// never below [`MIN_BILLING_UNITS`].
///
/// # Examples
///
/// ```
/// use pda_engine::tariff::formulas::billing_units;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(billing_units(dec!(200), dec!(32), dec!(15)), dec!(120));
/// assert_eq!(billing_units(dec!(0), dec!(0), dec!(0)), dec!(65));
/// ```
pub fn billing_units(loa: Decimal, beam: Decimal, depth_moulded: Decimal) -> Decimal {
    let volume = loa.saturating_mul(beam).saturating_mul(depth_moulded);
    round_up(volume / dec!(800)).max(MIN_BILLING_UNITS)
}

/// Port pilot fee for one call, entry and exit included.
///
/// 1. `tarifa = ceil(uf * 14)`
/// 2. `base = ceil((tarifa + pilot_base) * 2)`
/// 3. `arrival = ceil(tarifa * entry_surcharge)`
/// 4. `departure = ceil(tarifa * exit_surcharge)`
/// 5. `ceil(base + arrival + departure)`
pub fn port_pilot_fee(
    uf: Decimal,
    pilot_base: Decimal,
    entry_surcharge: Decimal,
    exit_surcharge: Decimal,
) -> Decimal {
    let tarifa = round_up(uf.saturating_mul(dec!(14)));
    let base = round_up(tarifa.saturating_add(pilot_base).saturating_mul(dec!(2)));
    let arrival = round_up(tarifa.saturating_mul(entry_surcharge));
    let departure = round_up(tarifa.saturating_mul(exit_surcharge));
    round_up(base.saturating_add(arrival).saturating_add(departure))
}

/// Port pilot fee for a ship, using the terminal's `pilot_base`.
pub fn ship_pilot_fee(ship: &ShipParticulars, pilot_base: Decimal) -> Decimal {
    let uf = billing_units(ship.loa, ship.beam, ship.depth_moulded);
    port_pilot_fee(uf, pilot_base, ship.entry_surcharge(), ship.exit_surcharge())
}

/// Sanitary free pratique fee, scaled on NRT.
pub fn free_pratique_fee(nrt: Decimal) -> Decimal {
    let scaled = nrt
        .saturating_sub(dec!(1001))
        .saturating_mul(dec!(6.9429))
        .saturating_add(dec!(416574));
    round_up(scaled / dec!(840) + dec!(50))
}

/// `ceil(rate * days)` for day-rated labour and fees.
pub fn per_day(rate: Decimal, days: Decimal) -> Decimal {
    round_up(rate.saturating_mul(days))
}

/// `ceil(max(rate * nrt, min) * days)`: a per-ton daily rate with a daily floor.
pub fn nrt_dues_with_minimum(rate: Decimal, min: Decimal, nrt: Decimal, days: Decimal) -> Decimal {
    round_up(rate.saturating_mul(nrt).max(min).saturating_mul(days))
}

/// Port dues for terminals that split the per-ton rate at an LOA threshold.
pub fn loa_threshold_dues(ship: &ShipParticulars, params: &TariffParameters) -> Decimal {
    if ship.loa > params.port_dues_loa_threshold {
        nrt_dues_with_minimum(
            params.port_dues_rate_above_threshold,
            params.port_dues_min_above_threshold,
            ship.nrt,
            ship.days_alongside,
        )
    } else {
        nrt_dues_with_minimum(
            params.port_dues_rate_below_threshold,
            params.port_dues_min_below_threshold,
            ship.nrt,
            ship.days_alongside,
        )
    }
}

/// ISPS security charge, billed once or once per day alongside.
pub fn isps_charge(params: &TariffParameters, days: Decimal) -> Decimal {
    let multiplier = if params.isps_per_day { days } else { Decimal::ONE };
    round_up(params.isps_charge.saturating_mul(multiplier))
}

/// `ceil(nrt * rate)`.
pub fn light_dues(nrt: Decimal, rate: Decimal) -> Decimal {
    round_up(nrt.saturating_mul(rate))
}

/// Which migrations line, if any, a voyage incurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationsLeg {
    InOut,
    In,
    Out,
}

/// Select the migrations charge: none for a fully domestic voyage, the
/// in/out fee when both legs are foreign, the single fee otherwise.
pub fn migrations_leg(argentine_origin: bool, argentine_destination: bool) -> Option<MigrationsLeg> {
    match (argentine_origin, argentine_destination) {
        (true, true) => None,
        (false, false) => Some(MigrationsLeg::InOut),
        (false, true) => Some(MigrationsLeg::In),
        (true, false) => Some(MigrationsLeg::Out),
    }
}

/// Append the migrations line selected by [`migrations_leg`].
pub fn push_migrations(bill: &mut ItemizedBill, ship: &ShipParticulars, params: &TariffParameters) {
    let item = match migrations_leg(ship.is_argentine_origin, ship.is_argentine_destination) {
        None => return,
        Some(MigrationsLeg::InOut) => {
            CostItem::new("Migrations (in/out)", round_up(params.migrations_in_out))
                .with_description("In/out")
        }
        Some(MigrationsLeg::In) => {
            CostItem::new("Migrations (in)", round_up(params.migrations_single)).with_description("In")
        }
        Some(MigrationsLeg::Out) => {
            CostItem::new("Migrations (out)", round_up(params.migrations_single))
                .with_description("Out")
        }
    };
    bill.push(item);
}

/// Append free pratique and garbage inspection for arrivals from abroad.
pub fn push_free_pratique_and_garbage(
    bill: &mut ItemizedBill,
    ship: &ShipParticulars,
    params: &TariffParameters,
) {
    if ship.is_argentine_origin {
        return;
    }
    bill.push(CostItem::new("Free Pratique", free_pratique_fee(ship.nrt)));
    bill.push(CostItem::new("Garbage Insp", round_up(params.garbage_insp)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vessel::DraftCategory;

    #[test]
    fn test_billing_units_floor() {
        assert_eq!(billing_units(dec!(50), dec!(10), dec!(5)), dec!(65));
        assert_eq!(billing_units(dec!(-10), dec!(10), dec!(5)), dec!(65));
    }

    #[test]
    fn test_billing_units_rounds_up() {
        // 180 * 30 * 16 / 800 = 108 exactly
        assert_eq!(billing_units(dec!(180), dec!(30), dec!(16)), dec!(108));
        // 180.5 * 30 * 16 / 800 = 108.3
        assert_eq!(billing_units(dec!(180.5), dec!(30), dec!(16)), dec!(109));
    }

    #[test]
    fn test_billing_units_saturate_on_huge_hulls() {
        let huge = dec!(10000000000);
        assert_eq!(billing_units(huge, huge, huge), (Decimal::MAX / dec!(800)).ceil());
        let fee = port_pilot_fee(billing_units(huge, huge, huge), dec!(2720), dec!(0.3), dec!(0.3));
        assert!(fee > Decimal::ZERO);
    }

    #[test]
    fn test_saturating_div() {
        let tiny = Decimal::new(1, 28);
        assert_eq!(saturating_div(dec!(10), dec!(4)), dec!(2.5));
        assert_eq!(saturating_div(dec!(1000), tiny), Decimal::MAX);
        assert_eq!(saturating_div(dec!(1000), -tiny), Decimal::MIN);
        assert_eq!(saturating_div(dec!(-5), Decimal::ZERO), Decimal::MIN);
        assert_eq!(saturating_div(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_per_ton_dues_saturate() {
        assert_eq!(per_day(Decimal::MAX, dec!(2)), Decimal::MAX);
        assert_eq!(nrt_dues_with_minimum(dec!(0.5), dec!(1), Decimal::MAX, dec!(3)), Decimal::MAX);
        assert_eq!(light_dues(Decimal::MAX, dec!(1.5)), Decimal::MAX);
        assert_eq!(
            free_pratique_fee(Decimal::MIN),
            ((Decimal::MIN + dec!(416574)) / dec!(840) + dec!(50)).ceil()
        );
    }

    #[test]
    fn test_port_pilot_reference_case() {
        let uf = billing_units(dec!(200), dec!(32), dec!(15));
        assert_eq!(uf, dec!(120));
        let fee = port_pilot_fee(uf, dec!(3550.25), dec!(0), dec!(0.30));
        assert_eq!(fee, dec!(10965));
    }

    #[test]
    fn test_port_pilot_rounds_each_step() {
        // tarifa = 910, base = ceil(3630 * 2) = 7260,
        // arrival = ceil(910 * 0.075) = ceil(68.25) = 69,
        // departure = ceil(910 * 0.225) = ceil(204.75) = 205
        let fee = port_pilot_fee(dec!(65), dec!(2720), dec!(0.075), dec!(0.225));
        assert_eq!(fee, dec!(7534));
    }

    #[test]
    fn test_ship_pilot_fee_uses_draft_bands() {
        let ship = ShipParticulars::new(dec!(200), dec!(32), dec!(15), dec!(10000), dec!(18000), dec!(1))
            .with_drafts(DraftCategory::UpTo853, DraftCategory::Over1036);
        assert_eq!(ship_pilot_fee(&ship, dec!(3550.25)), dec!(10965));
    }

    #[test]
    fn test_free_pratique() {
        // ((1001 - 1001) * 6.9429 + 416574) / 840 + 50 = 545.92...
        assert_eq!(free_pratique_fee(dec!(1001)), dec!(546));
        // ((12001 - 1001) * 6.9429 + 416574) / 840 + 50 = 636.84...
        assert_eq!(free_pratique_fee(dec!(12001)), dec!(637));
    }

    #[test]
    fn test_nrt_dues_with_minimum() {
        assert_eq!(nrt_dues_with_minimum(dec!(0.26), dec!(1625), dec!(5000), dec!(2)), dec!(3250));
        assert_eq!(nrt_dues_with_minimum(dec!(0.26), dec!(1625), dec!(10000), dec!(2)), dec!(5200));
    }

    #[test]
    fn test_isps_charge_per_call_and_per_day() {
        let mut params = TariffParameters {
            isps_charge: dec!(900),
            ..TariffParameters::baseline()
        };
        assert_eq!(isps_charge(&params, dec!(3)), dec!(900));
        params.isps_per_day = true;
        assert_eq!(isps_charge(&params, dec!(3)), dec!(2700));
        assert_eq!(isps_charge(&params, dec!(1.5)), dec!(1350));
    }

    #[test]
    fn test_migrations_selection() {
        assert_eq!(migrations_leg(true, true), None);
        assert_eq!(migrations_leg(false, false), Some(MigrationsLeg::InOut));
        assert_eq!(migrations_leg(false, true), Some(MigrationsLeg::In));
        assert_eq!(migrations_leg(true, false), Some(MigrationsLeg::Out));
    }

    #[test]
    fn test_push_migrations_amounts() {
        let params = TariffParameters::baseline();
        let ship = ShipParticulars::new(dec!(200), dec!(32), dec!(15), dec!(10000), dec!(18000), dec!(1));

        let mut bill = ItemizedBill::new();
        push_migrations(&mut bill, &ship, &params);
        assert_eq!(bill.amount_of("Migrations (in/out)"), dec!(2500));

        let mut bill = ItemizedBill::new();
        push_migrations(&mut bill, &ship.clone().with_route(true, false), &params);
        assert_eq!(bill.amount_of("Migrations (out)"), dec!(1250));
        assert_eq!(bill.len(), 1);

        let mut bill = ItemizedBill::new();
        push_migrations(&mut bill, &ship.with_route(true, true), &params);
        assert!(bill.is_empty());
    }

    #[test]
    fn test_free_pratique_bundle_only_from_abroad() {
        let params = TariffParameters::baseline();
        let ship = ShipParticulars::new(dec!(200), dec!(32), dec!(15), dec!(1001), dec!(18000), dec!(1));

        let mut bill = ItemizedBill::new();
        push_free_pratique_and_garbage(&mut bill, &ship, &params);
        assert_eq!(bill.len(), 2);
        assert_eq!(bill.total_usd(), dec!(586));

        let mut bill = ItemizedBill::new();
        push_free_pratique_and_garbage(&mut bill, &ship.with_route(true, false), &params);
        assert!(bill.is_empty());
    }
}
