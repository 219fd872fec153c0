use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use simple_ga::functions::sphere;
use simple_ga::objective::infallible;
use simple_ga::GeneticAlgorithm;

fn run_ga(dimensions: usize, generations: usize, population: usize) {
    let mut engine = GeneticAlgorithm::builder(infallible(sphere))
        .dimensions(dimensions)
        .bounds(-5.12, 5.12)
        .population_size(population)
        .mutation_rate(0.15)
        .seed(42)
        .build()
        .expect("valid GA configuration");
    engine
        .evolve(generations, false)
        .expect("optimization to succeed");
}

fn sphere_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere-simple-ga");
    for &dimensions in &[5_usize, 30_usize] {
        group.bench_function(BenchmarkId::from_parameter(dimensions), |b| {
            b.iter_batched(
                || dimensions,
                |dimensions| run_ga(dimensions, 40, 50),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, sphere_benchmark);
criterion_main!(benches);
