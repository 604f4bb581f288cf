use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pda_engine::core::vessel::{DraftCategory, ShipParticulars, VesselType};
use pda_engine::pricing::engine::PdaEngine;
use pda_engine::tariff::resolver::ParameterStore;
use pda_engine::terminals::Terminal;
use rust_decimal_macros::dec;

fn sample_ship() -> ShipParticulars {
    ShipParticulars::new(dec!(229), dec!(32.26), dec!(20.05), dec!(24500), dec!(43000), dec!(4.5))
        .with_drafts(DraftCategory::Over914, DraftCategory::Over1036)
        .with_vessel_type(VesselType::Bulker)
}

fn bench_single_terminal(c: &mut Criterion) {
    let engine = PdaEngine::default();
    let ship = sample_ship();

    c.bench_function("price_delta_dock", |b| {
        b.iter(|| engine.calculate(black_box("delta-dock"), black_box(&ship), None, None))
    });
}

fn bench_all_terminals(c: &mut Criterion) {
    let engine = PdaEngine::default();
    let ship = sample_ship();

    c.bench_function("price_all_terminals", |b| {
        b.iter(|| {
            for terminal in Terminal::ALL {
                black_box(engine.calculate(terminal.id(), &ship, Some(dec!(1450)), None));
            }
        })
    });
}

fn bench_with_store(c: &mut Criterion) {
    let engine = PdaEngine::default();
    let ship = sample_ship();
    let mut store = ParameterStore::new();
    for terminal in Terminal::ALL {
        let mut params = store.resolve(terminal.id());
        params.watchmen = Some(dec!(1700));
        store
            .set_override(terminal.id(), params)
            .expect("every terminal reads watchmen");
    }

    c.bench_function("price_all_terminals_with_store", |b| {
        b.iter(|| {
            for terminal in Terminal::ALL {
                black_box(engine.calculate_with_store(&store, terminal.id(), &ship, None));
            }
        })
    });
}

criterion_group!(benches, bench_single_terminal, bench_all_terminals, bench_with_store);
criterion_main!(benches);
