//! Mulberry32 ベンチマーク: 単発 next_u32 / バッファ一括 / 範囲整数

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mulberry_core::Mulberry32;

const BATCH: usize = 4096;

fn bench_next(c: &mut Criterion) {
    c.bench_function("next_u32", |b| {
        let mut rng = Mulberry32::new(99);
        b.iter(|| black_box(rng.next_u32()))
    });

    c.bench_function("fill_u32_4096", |b| {
        let mut rng = Mulberry32::new(99);
        let mut buf = vec![0u32; BATCH];
        b.iter(|| {
            rng.fill_u32(&mut buf);
            black_box(buf[BATCH - 1])
        })
    });

    c.bench_function("next_bounded_1000", |b| {
        let mut rng = Mulberry32::new(99);
        b.iter(|| black_box(rng.next_bounded(black_box(1000))))
    });

    c.bench_function("next_f64", |b| {
        let mut rng = Mulberry32::new(99);
        b.iter(|| black_box(rng.next_f64()))
    });
}

criterion_group!(benches, bench_next);
criterion_main!(benches);
