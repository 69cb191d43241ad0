use cinedex::core::catalog::CatalogIndex;
use cinedex::core::config::CatalogConfig;
use cinedex::core::types::{Movie, Person};
use cinedex::map::MapKind;
use cinedex::sort::SortKind;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

/// Helper to create a synthetic movie with a small shared actor pool, so the
/// collaboration graph gets realistic fan-out.
fn create_test_movie(id: u64) -> Movie {
    let mut rng = rand::thread_rng();
    let cast: Vec<Person> = (0..3)
        .map(|_| Person::new(&format!("Actor {}", rng.gen_range(0..100u32))))
        .collect();

    Movie::new(
        &format!("Movie {}", id),
        1950 + (id % 75) as i32,
        rng.gen_range(0..2_000_000),
        cast,
        Person::new(&format!("Director {}", id % 20)),
    )
}

fn loaded_catalog(config: CatalogConfig, movies: usize) -> CatalogIndex {
    let mut catalog = CatalogIndex::with_config(config);
    for id in 0..movies as u64 {
        catalog.load(create_test_movie(id));
    }
    catalog.finalize_load();
    catalog
}

fn bench_load_and_finalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_and_finalize");

    for size in [100, 500, 1000, 5000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let catalog = loaded_catalog(CatalogConfig::default(), size);
                black_box(catalog.count_movies())
            });
        });
    }
    group.finish();
}

fn bench_title_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("title_lookup");

    for kind in [MapKind::OpenAddressing, MapKind::SortedArray] {
        let config = CatalogConfig {
            map: kind,
            ..CatalogConfig::default()
        };
        let catalog = loaded_catalog(config, 5000);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", kind)),
            &catalog,
            |b, catalog| {
                let mut id = 0u64;
                b.iter(|| {
                    let title = format!("Movie {}", id % 5000);
                    id += 1;
                    black_box(catalog.get_movie_by_title(&title))
                });
            },
        );
    }
    group.finish();
}

fn bench_ranked_queries(c: &mut Criterion) {
    let catalog = loaded_catalog(CatalogConfig::default(), 5000);

    c.bench_function("top_100_by_votes", |b| {
        b.iter(|| black_box(catalog.top_n_by_votes(100)))
    });
    c.bench_function("title_contains_scan", |b| {
        b.iter(|| black_box(catalog.by_title_contains("999")))
    });
}

fn bench_delete_reload(c: &mut Criterion) {
    c.bench_function("delete_and_reload", |b| {
        let mut catalog = loaded_catalog(CatalogConfig::default(), 1000);
        let mut id = 0u64;
        b.iter(|| {
            let title = format!("Movie {}", id % 1000);
            catalog.delete_movie_by_title(&title);
            catalog.load(create_test_movie(id % 1000));
            catalog.finalize_load();
            id += 1;
        });
    });
}

fn bench_team_queries(c: &mut Criterion) {
    let catalog = loaded_catalog(CatalogConfig::default(), 2000);
    let start = Person::new("Actor 0");

    c.bench_function("team_of", |b| {
        b.iter(|| black_box(catalog.team_of(&start)))
    });
    c.bench_function("maximize_collaborations", |b| {
        b.iter(|| black_box(catalog.maximize_collaborations_in_the_team_of(&start)))
    });
}

fn bench_sort_strategies_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("finalize_by_strategy");

    for kind in [SortKind::Quick, SortKind::Selection] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", kind)),
            &kind,
            |b, &kind| {
                b.iter(|| {
                    let config = CatalogConfig {
                        sort: kind,
                        ..CatalogConfig::default()
                    };
                    black_box(loaded_catalog(config, 500))
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_load_and_finalize,
    bench_title_lookup,
    bench_ranked_queries,
    bench_delete_reload,
    bench_team_queries,
    bench_sort_strategies_end_to_end
);
criterion_main!(benches);
