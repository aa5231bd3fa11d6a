use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ring_accountant::Ring;

fn push_shift_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_shift");

    // 4096 wraps with a bitmask, 4095 and 4097 with a remainder.
    for &capacity in &[4095usize, 4096, 4097] {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &capacity| {
            let mut ring = Ring::new(capacity);
            b.iter(|| {
                for _ in 0..capacity {
                    black_box(ring.push().unwrap());
                }
                for _ in 0..capacity {
                    black_box(ring.shift().unwrap());
                }
            });
        });
    }
    group.finish();
}

fn force_push_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_push");

    for &capacity in &[1000usize, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &capacity| {
            let mut ring = Ring::new(capacity);
            b.iter(|| black_box(ring.force_push().unwrap()));
        });
    }
    group.finish();
}

fn scan_benchmark(c: &mut Criterion) {
    let mut ring = Ring::new(1000);
    for _ in 0..1500 {
        ring.force_push().unwrap();
    }

    c.bench_function("scan_lifo", |b| {
        b.iter(|| black_box(&ring).scan_lifo().sum::<usize>());
    });
    c.bench_function("all", |b| {
        b.iter(|| ring_accountant::all(black_box(&ring)));
    });
}

criterion_group!(benches, push_shift_benchmark, force_push_benchmark, scan_benchmark);
criterion_main!(benches);
