use area_split_core::*;
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for (name, config) in [
        ("default_8x5", GenerationConfig::default()),
        (
            "wide_bounds_8x5",
            GenerationConfig::new(GridSize::default(), 4, 20),
        ),
        (
            "square_10x10",
            GenerationConfig::new(GridSize::new(10, 10), 18, 35),
        ),
    ] {
        group.bench_function(name, |b| {
            let mut seed = 0;
            b.iter_batched(
                || {
                    seed += 1;
                    RandomGrowthGenerator::new(seed)
                },
                |mut generator| black_box(generator.generate(&config)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_clumps(c: &mut Criterion) {
    let grid = generate_valid_grid(1).map(|generated| generated.grid);

    c.bench_function("count_clumps", |b| {
        b.iter(|| {
            grid.as_ref()
                .map(|grid| count_clumps(black_box(grid.cells())))
        })
    });
}

criterion_group!(benches, bench_generate, bench_clumps);
criterion_main!(benches);
