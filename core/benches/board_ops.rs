use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use minefield_core::{BoardGenerator, Coordinate, PlacementStrategy};
use std::hint::black_box;

const TIERS: [(&str, u8, u8, u16); 3] = [
    ("beginner", 9, 9, 10),
    ("intermediate", 16, 16, 40),
    ("expert", 16, 30, 99),
];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for strategy in PlacementStrategy::ALL {
        let generator = BoardGenerator::new(strategy).with_seed(0xdead_beef);
        for (name, rows, cols, mines) in TIERS {
            group.bench_function(format!("{strategy}/{name}"), |b| {
                b.iter(|| generator.generate(black_box(rows), black_box(cols), black_box(mines)))
            });
        }
    }
    group.finish();
}

fn bench_flood_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_reveal");
    for size in [16u8, 64, 255] {
        let board = BoardGenerator::default()
            .with_seed(1)
            .generate(size, size, 0)
            .expect("mine-free board is always valid");
        group.bench_function(format!("{size}x{size}"), |b| {
            b.iter_batched(
                || board.clone(),
                |mut board| board.reveal(Coordinate::new(0, 0)),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_flood_reveal);
criterion_main!(benches);
