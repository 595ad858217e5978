use criterion::{black_box, criterion_group, criterion_main, Criterion};
use iterable::prelude::*;

fn make_sorted(n: usize, step: i64, offset: i64) -> Vec<i64> {
    (0..n as i64).map(|i| i * step + offset).collect()
}

fn bench_filter_apply_sum(c: &mut Criterion) {
    c.bench_function("filter_apply_sum_10k", |b| {
        b.iter(|| {
            let s = take(10_000, filter(|i: &u64| i % 3 != 0, iota(0u64)).apply(|i| i * i));
            let total: u64 = sum(s);
            black_box(total)
        })
    });

    c.bench_function("std_filter_map_sum_10k", |b| {
        b.iter(|| {
            let total: u64 = (0u64..).filter(|i| i % 3 != 0).map(|i| i * i).take(10_000).sum();
            black_box(total)
        })
    });
}

fn bench_merge(c: &mut Criterion) {
    let a = make_sorted(4096, 2, 0);
    let b = make_sorted(4096, 2, 1);
    c.bench_function("merge_2x4096", |bench| {
        bench.iter(|| black_box(count(merge(array(&a), array(&b)))))
    });
}

fn bench_exp_series(c: &mut Criterion) {
    let cfg = IterConfig::default();
    c.bench_function("exp_series", |b| b.iter(|| black_box(exp(black_box(1.5), &cfg))));
}

fn bench_erased(c: &mut Criterion) {
    c.bench_function("erased_take_sum_10k", |b| {
        b.iter(|| {
            let s: Erased<'_, u64> = Erased::new(iota(0u64));
            let total: u64 = sum(take(10_000, s));
            black_box(total)
        })
    });
}

criterion_group!(sequences, bench_filter_apply_sum, bench_merge, bench_exp_series, bench_erased);
criterion_main!(sequences);
