use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use dispsort::patterns;
use dispsort::value::numeric_order;
use dispsort::{SliceAccess, Variant, VariantArray};

fn saw_mixed_log(size: usize) -> Vec<Variant> {
    patterns::saw_mixed(size, ((size as f64).log2().round()) as usize)
}

// Same inputs through both access paths; the gap between them is the price
// of the dispatch protocol.
fn bench_patterns(c: &mut Criterion) {
    let pattern_fns: [(&str, fn(usize) -> Vec<Variant>); 3] = [
        ("random", patterns::random),
        ("saw_mixed", saw_mixed_log),
        ("pipe_organ", patterns::pipe_organ),
    ];

    for (pattern_name, pattern_fn) in pattern_fns {
        for size in [100usize, 1_000] {
            c.bench_function(&format!("dispatch-{pattern_name}-{size}"), |b| {
                b.iter_batched(
                    || VariantArray::from_values(pattern_fn(size)),
                    |mut collection| {
                        dispsort::sort(&mut collection, size, numeric_order).unwrap();
                        collection
                    },
                    BatchSize::SmallInput,
                );
            });

            c.bench_function(&format!("slice-{pattern_name}-{size}"), |b| {
                b.iter_batched(
                    || pattern_fn(size),
                    |mut values| {
                        let mut access = SliceAccess::new(&mut values);
                        dispsort::sort_by(&mut access, size, numeric_order).unwrap();
                        values
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
}

criterion_group!(benches, bench_patterns);
criterion_main!(benches);
