use cinedex::array::DynamicArray;
use cinedex::map::{OpenAddressingMap, SortedArrayMap, Store};
use cinedex::sort::{SortKind, Sorter};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

fn random_values(n: usize) -> Vec<u64> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(0..1_000_000)).collect()
}

fn bench_sort_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in [100, 1000, 5000].iter() {
        let values = random_values(*size);

        for kind in [SortKind::Quick, SortKind::Selection] {
            // selection sort past a few thousand items dominates the run
            if kind == SortKind::Selection && *size > 1000 {
                continue;
            }
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", kind), size),
                &values,
                |b, values| {
                    let mut sorter = Sorter::new(kind);
                    b.iter(|| {
                        let mut items = values.clone();
                        sorter.sort(&mut items, &|a, b| a.cmp(b));
                        black_box(items)
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_quick_sort_sorted_input(c: &mut Criterion) {
    // Random pivots keep already-sorted input off the quadratic path.
    let values: Vec<u64> = (0..5000).collect();
    let mut sorter = Sorter::new(SortKind::Quick);

    c.bench_function("quick_sort_sorted_input", |b| {
        b.iter(|| {
            let mut items = values.clone();
            sorter.sort(&mut items, &|a, b| a.cmp(b));
            black_box(items)
        });
    });
}

fn bench_binary_insert(c: &mut Criterion) {
    let values = random_values(2000);

    c.bench_function("binary_insert_2000", |b| {
        b.iter(|| {
            let mut array = DynamicArray::new();
            for value in &values {
                array.binary_insert(*value, &|a, b| a.cmp(b));
            }
            black_box(array.len())
        });
    });
}

fn bench_map_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_put_get");
    let values = random_values(5000);

    group.bench_function("open_addressing", |b| {
        b.iter(|| {
            let mut map = OpenAddressingMap::new();
            for value in &values {
                map.put(*value, *value);
            }
            for value in &values {
                black_box(map.get(value));
            }
        });
    });

    group.bench_function("sorted_array", |b| {
        b.iter(|| {
            let mut map = SortedArrayMap::new();
            for value in &values {
                map.put(*value, *value);
            }
            for value in &values {
                black_box(map.get(value));
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_sort_strategies,
    bench_quick_sort_sorted_input,
    bench_binary_insert,
    bench_map_backends
);
criterion_main!(benches);
