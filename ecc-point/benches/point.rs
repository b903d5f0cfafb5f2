//! Point arithmetic benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use ecc_point::{EccPoint, EccXPoint};
use hex_literal::hex;
use num_bigint::{BigInt, BigUint};
use std::hint::black_box;

fn test_scalar() -> BigInt {
    BigInt::from(BigUint::from_bytes_be(&hex!(
        "1cf6bc6c7f642a84994119e206c9f0753ff100709f4fd12f2338c1be60bf4175"
    )))
}

fn bench_affine<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>, curve: &str) {
    let g = EccPoint::generator(curve).unwrap();
    let h = g.double().unwrap();
    let k = test_scalar();

    group.bench_function(format!("{curve}/add"), |b| b.iter(|| black_box(&g).add(&h)));
    group.bench_function(format!("{curve}/double"), |b| b.iter(|| black_box(&g).double()));
    group.bench_function(format!("{curve}/scalar_multiply"), |b| {
        b.iter(|| black_box(&g).scalar_multiply(&k))
    });
}

fn bench_x<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>, curve: &str) {
    let g = EccXPoint::generator(curve).unwrap();
    let k = test_scalar();

    group.bench_function(format!("{curve}/scalar_multiply"), |b| {
        b.iter(|| black_box(&g).scalar_multiply(&k))
    });
}

fn bench_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("points");
    for curve in ["p256", "p384", "ed25519"] {
        bench_affine(&mut group, curve);
    }
    bench_x(&mut group, "curve25519");
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    ecc_point::lookup("p256").unwrap();
    c.bench_function("lookup", |b| b.iter(|| ecc_point::lookup(black_box("secp256r1"))));
}

criterion_group!(benches, bench_points, bench_lookup);
criterion_main!(benches);
