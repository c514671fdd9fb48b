//! Search benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use modplan_logic::config::SearchConfig;
use modplan_logic::presets::Preset;
use modplan_logic::search::{exact_fit_search, free_space_search};

fn exact_fit_v1(c: &mut Criterion) {
    let preset = Preset::V1;
    let catalog = preset.catalog();
    let config = SearchConfig::default();
    c.bench_function("exact_fit_v1", |b| {
        b.iter(|| {
            exact_fit_search(
                black_box(preset.footprint()),
                &catalog.rooms,
                &catalog.finals,
                &config,
            )
        })
    });
}

fn free_space_v3(c: &mut Criterion) {
    let preset = Preset::V3;
    let catalog = preset.catalog();
    let config = SearchConfig::default();
    c.bench_function("free_space_v3", |b| {
        b.iter(|| free_space_search(black_box(preset.footprint()), &catalog.rooms, &config))
    });
}

criterion_group!(benches, exact_fit_v1, free_space_v3);
criterion_main!(benches);
