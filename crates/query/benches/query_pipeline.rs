use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chronolux_catalog::{Brand, Catalog, Category, Movement};
use chronolux_query::{CategoryFilter, QueryState, SortKey, run_query, suggest};

fn busy_state() -> QueryState {
    let mut state = QueryState {
        category: CategoryFilter::Only(Category::Luxury),
        search: "ro".to_string(),
        sort: SortKey::PriceHigh,
        ..QueryState::default()
    };
    state.filters.set_brand(Brand::Rolex, true);
    state.filters.set_brand(Brand::Omega, true);
    state.filters.set_movement(Movement::Automatic, true);
    state
}

fn bench_run_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_query");

    for size in [100usize, 1_000, 10_000] {
        let catalog = match Catalog::generate(size, Some(42)) {
            Ok(catalog) => catalog,
            Err(err) => panic!("catalog generation failed: {err}"),
        };
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("defaults", size), &catalog, |b, catalog| {
            let state = QueryState::default();
            b.iter(|| black_box(run_query(catalog.iter(), &state).len()));
        });

        group.bench_with_input(BenchmarkId::new("all_stages", size), &catalog, |b, catalog| {
            let state = busy_state();
            b.iter(|| black_box(run_query(catalog.iter(), &state).len()));
        });

        for sort in [SortKey::NameAsc, SortKey::Newest] {
            group.bench_with_input(
                BenchmarkId::new(format!("sort_{sort}"), size),
                &catalog,
                |b, catalog| {
                    let state = QueryState {
                        sort,
                        ..QueryState::default()
                    };
                    b.iter(|| black_box(run_query(catalog.iter(), &state).len()));
                },
            );
        }
    }

    group.finish();
}

fn bench_suggest(c: &mut Criterion) {
    let catalog = match Catalog::generate(1_000, Some(42)) {
        Ok(catalog) => catalog,
        Err(err) => panic!("catalog generation failed: {err}"),
    };
    c.bench_function("suggest_top5", |b| {
        b.iter(|| black_box(suggest(catalog.iter(), black_box("heritage"), 5).len()))
    });
}

criterion_group!(benches, bench_run_query, bench_suggest);
criterion_main!(benches);
