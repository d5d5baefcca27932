use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use minesweep_core::*;
use std::hint::black_box;

fn placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    for preset in Preset::ALL {
        let config = preset.config();
        group.bench_function(preset.label(), |b| {
            let mut generator = RandomMineGenerator::from_seed(0xdead_beef);
            b.iter(|| generator.generate(black_box(config), (0, 0)))
        });
    }
    group.bench_function("255x255 nearly full", |b| {
        let config = GameConfig::new(255, 255, 65_000).unwrap();
        let mut generator = RandomMineGenerator::from_seed(1);
        b.iter(|| generator.generate(black_box(config), (127, 127)))
    });
    group.finish();
}

fn flood_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_reveal");
    for (name, config) in [
        ("15x15 sparse", GameConfig::new(15, 15, 20).unwrap()),
        ("255x255 empty", GameConfig::new(255, 255, 0).unwrap()),
        ("255x255 sparse", GameConfig::new(255, 255, 200).unwrap()),
    ] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || BoardEngine::from_seed(config, 42),
                |mut engine| engine.reveal(black_box((0, 0))),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, placement, flood_reveal);
criterion_main!(benches);
