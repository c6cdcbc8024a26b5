use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use secbudget::benchmarks::BenchmarkCatalog;
use secbudget::population::naics::{NAICS_SECTORS, NATIONAL_TIER_COUNTS, UNCODED_RECORDS};
use secbudget::population::synthesis::{synthesize_even_split, synthesize_from_sector_totals};
use secbudget::population::{PopulationRow, PopulationTable, TierPartition};
use secbudget::tam::TamAggregator;
use std::hint::black_box;

/// Synthesized sector table repeated `copies` times, so cells must be merged.
fn create_population(copies: usize) -> PopulationTable {
    let partition = TierPartition::naics();
    let base = synthesize_from_sector_totals(&partition, &NATIONAL_TIER_COUNTS, NAICS_SECTORS)
        .unwrap();
    let rows: Vec<PopulationRow> = (0..copies)
        .flat_map(|_| base.rows().iter().cloned())
        .collect();
    PopulationTable::from_rows(rows)
}

fn benchmark_sector_aggregation(c: &mut Criterion) {
    let catalog = BenchmarkCatalog::standard();
    let aggregator = TamAggregator::default();
    let mut group = c.benchmark_group("tam_aggregation");

    for copies in [1, 10, 100] {
        let population = create_population(copies);
        group.bench_with_input(
            BenchmarkId::new("sector_totals", population.len()),
            &population,
            |b, population| {
                b.iter(|| {
                    aggregator
                        .aggregate(black_box(&catalog), black_box(population), None)
                        .unwrap()
                });
            },
        );
    }
    group.finish();
}

fn benchmark_scaled_even_split(c: &mut Criterion) {
    let catalog = BenchmarkCatalog::standard();
    let aggregator = TamAggregator::default();
    let population = synthesize_even_split(
        aggregator.partition(),
        &NATIONAL_TIER_COUNTS,
        UNCODED_RECORDS,
        NAICS_SECTORS,
    )
    .unwrap();

    c.bench_function("even_split_scaled", |b| {
        b.iter(|| {
            aggregator
                .aggregate(&catalog, black_box(&population), Some(180_000.0))
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    benchmark_sector_aggregation,
    benchmark_scaled_even_split
);
criterion_main!(benches);
