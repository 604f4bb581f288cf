use pda_engine::core::vessel::{DraftCategory, ShipParticulars, VesselType};
use pda_engine::pricing::engine::calculate_pda;
use pda_engine::tariff::formulas::{billing_units, port_pilot_fee, MIN_BILLING_UNITS};
use pda_engine::terminals::Terminal;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A dimension with one decimal place, from `lo` to `hi`.
fn arb_measure(lo: i64, hi: i64) -> impl Strategy<Value = Decimal> {
    (lo * 10..hi * 10).prop_map(|n| Decimal::new(n, 1))
}

fn arb_draft() -> impl Strategy<Value = DraftCategory> {
    prop::sample::select(DraftCategory::ALL.to_vec())
}

fn arb_vessel_type() -> impl Strategy<Value = Option<VesselType>> {
    prop::sample::select(vec![None, Some(VesselType::Bulker), Some(VesselType::Tanker)])
}

fn arb_terminal() -> impl Strategy<Value = Terminal> {
    prop::sample::select(Terminal::ALL.to_vec())
}

/// Half-day resolution, 0.5 to 30 days alongside.
fn arb_days() -> impl Strategy<Value = Decimal> {
    (1i64..=60).prop_map(|n| Decimal::new(n * 5, 1))
}

/// A plausible river-trade hull.
fn arb_ship() -> impl Strategy<Value = ShipParticulars> {
    (
        (arb_measure(60, 300), arb_measure(10, 50), arb_measure(5, 30)),
        (arb_measure(500, 60_000), arb_measure(1_000, 100_000)),
        arb_days(),
        (arb_draft(), arb_draft()),
        (any::<bool>(), any::<bool>()),
        arb_vessel_type(),
    )
        .prop_map(|((loa, beam, depth), (nrt, grt), days, (entry, exit), (origin, dest), kind)| {
            let mut ship = ShipParticulars::new(loa, beam, depth, nrt, grt, days)
                .with_drafts(entry, exit)
                .with_route(origin, dest);
            ship.vessel_type = kind;
            ship
        })
}

fn arb_rate() -> impl Strategy<Value = Decimal> {
    (500i64..5_000).prop_map(Decimal::from)
}

proptest! {
    #[test]
    fn total_is_exact_sum_of_items(ship in arb_ship(), terminal in arb_terminal(), rate in arb_rate()) {
        let bill = calculate_pda(terminal.id(), &ship, Some(rate), None);
        let sum: Decimal = bill.items().iter().map(|i| i.amount_usd).sum();
        prop_assert_eq!(bill.total_usd(), sum);
    }

    #[test]
    fn every_amount_is_whole_and_non_negative(
        ship in arb_ship(),
        terminal in arb_terminal(),
        rate in arb_rate(),
    ) {
        let bill = calculate_pda(terminal.id(), &ship, Some(rate), None);
        for item in bill.items() {
            prop_assert!(item.amount_usd >= Decimal::ZERO, "{} {}", terminal, item.name);
            prop_assert_eq!(item.amount_usd, item.amount_usd.ceil());
        }
    }

    #[test]
    fn pricing_is_deterministic(ship in arb_ship(), terminal in arb_terminal(), rate in arb_rate()) {
        let first = calculate_pda(terminal.id(), &ship, Some(rate), None);
        let second = calculate_pda(terminal.id(), &ship, Some(rate), None);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn billing_units_floor_and_monotonic(
        loa in arb_measure(0, 400),
        extra in arb_measure(0, 100),
        beam in arb_measure(0, 60),
        depth in arb_measure(0, 40),
    ) {
        let uf = billing_units(loa, beam, depth);
        prop_assert!(uf >= MIN_BILLING_UNITS);
        prop_assert_eq!(uf, uf.ceil());
        prop_assert!(billing_units(loa + extra, beam, depth) >= uf);
    }

    #[test]
    fn deeper_draft_never_lowers_pilotage(
        uf in (65i64..2_000).prop_map(Decimal::from),
        base in arb_measure(0, 5_000),
        entry in arb_draft(),
        exit in arb_draft(),
    ) {
        let shallow = port_pilot_fee(uf, base, entry.surcharge(), DraftCategory::UpTo853.surcharge());
        let deep = port_pilot_fee(uf, base, entry.surcharge(), exit.surcharge());
        prop_assert!(deep >= shallow);
    }

    #[test]
    fn at_most_one_migrations_line(ship in arb_ship(), terminal in arb_terminal()) {
        let bill = calculate_pda(terminal.id(), &ship, None, None);
        let lines: Vec<&str> = bill
            .items()
            .iter()
            .filter(|i| i.name.starts_with("Migrations"))
            .map(|i| i.name.as_str())
            .collect();

        let expected = match (ship.is_argentine_origin, ship.is_argentine_destination) {
            (true, true) => vec![],
            (false, false) => vec!["Migrations (in/out)"],
            (false, true) => vec!["Migrations (in)"],
            (true, false) => vec!["Migrations (out)"],
        };
        prop_assert_eq!(lines, expected);
        prop_assert_eq!(bill.item("Free Pratique").is_some(), !ship.is_argentine_origin);
    }

    #[test]
    fn short_weekday_calls_use_weekday_rate(
        nrt in arb_measure(500, 60_000),
        days in (1i64..=10).prop_map(|n| Decimal::new(n * 5, 1)),
    ) {
        let ship = ShipParticulars::new(dec!(190), dec!(32), dec!(18), nrt, dec!(30000), days);
        let bill = calculate_pda("euroamerica-maripasa", &ship, None, None);
        let expected = ((dec!(0.26) * nrt).max(dec!(1625)) * days).ceil();
        prop_assert_eq!(bill.amount_of("Port dues"), expected);
    }

    #[test]
    fn only_san_pedro_depends_on_exchange_rate(
        ship in arb_ship(),
        terminal in arb_terminal(),
        low in arb_rate(),
        high in arb_rate(),
    ) {
        prop_assume!(!terminal.is_rate_sensitive());
        prop_assert_eq!(
            calculate_pda(terminal.id(), &ship, Some(low), None),
            calculate_pda(terminal.id(), &ship, Some(high), None)
        );
    }

    #[test]
    fn unknown_ports_price_nothing(port in "[a-z]{3,12}", ship in arb_ship()) {
        prop_assume!(Terminal::from_id(&port).is_none());
        let bill = calculate_pda(&port, &ship, None, None);
        prop_assert!(bill.is_empty());
        prop_assert_eq!(bill.total_usd(), Decimal::ZERO);
    }
}
