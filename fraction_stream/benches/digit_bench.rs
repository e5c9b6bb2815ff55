use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use fraction_stream::FractionStream;
use num_bigint::BigUint;

fn small_denominator(c: &mut Criterion) {
    let mut group = c.benchmark_group("small_denominator");
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("1/101 base 2, 10k digits", |b| {
        b.iter(|| {
            let mut s = FractionStream::new(1u32, 101u32).unwrap();
            s.digits(10_000)
        })
    });
    group.finish();
}

fn wide_denominator(c: &mut Criterion) {
    let den: BigUint = "170141183460469231731687303715884105727".parse().unwrap(); // 2^127 - 1
    let num = BigUint::from(1u32);

    let mut group = c.benchmark_group("wide_denominator");
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("1/(2^127-1) base 10, 10k digits", |b| {
        b.iter(|| {
            let mut s = FractionStream::with_base(num.clone(), den.clone(), 10).unwrap();
            s.digits(10_000)
        })
    });
    group.finish();
}

criterion_group!(benches, small_denominator, wide_denominator);
criterion_main!(benches);
