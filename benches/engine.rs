use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lifeset::{Cell, Engine, WorldState, next_generation, next_generation_parallel};

fn make_alive(width: i32, height: i32) -> WorldState {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| Cell::new(x, y)))
        .filter(|c| (c.x + c.y) % 3 == 0)
        .collect()
}

fn bench_next_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_generation");
    for size in [64, 128, 256] {
        let alive = make_alive(size, size);

        group.bench_with_input(BenchmarkId::new("serial", size), &alive, |b, alive| {
            b.iter(|| next_generation(alive));
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &alive, |b, alive| {
            b.iter(|| next_generation_parallel(alive));
        });
    }
    group.finish();
}

fn bench_evolve(c: &mut Criterion) {
    let alive = make_alive(64, 64);
    c.bench_function("evolve_32", |b| {
        b.iter(|| Engine::Serial.evolve(&alive, 32).expect("non-negative"));
    });
}

criterion_group!(benches, bench_next_generation, bench_evolve);
criterion_main!(benches);
