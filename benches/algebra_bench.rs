use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use univar::{BinaryPow, LinearPow, Matrix, Polynomial, Power};

fn square_matrix(n: usize) -> Matrix<i64> {
    Matrix::from_rows(
        (0..n)
            .map(|i| (0..n).map(|j| ((i * 31 + j * 7) % 13) as i64 - 6).collect())
            .collect(),
    )
}

/// 1. MATRIX PRODUCT (scaling test with multiple sizes)
fn bench_matrix_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix/mul");

    for &size in &[8, 32, 64] {
        let a = square_matrix(size);
        let b = square_matrix(size);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("try_mul", size), &size, |bench, _| {
            bench.iter(|| black_box(black_box(&a).try_mul(black_box(&b)).unwrap()))
        });

        #[cfg(feature = "rayon")]
        group.bench_with_input(BenchmarkId::new("par_mul", size), &size, |bench, _| {
            bench.iter(|| black_box(black_box(&a).par_mul(black_box(&b)).unwrap()))
        });
    }
    group.finish();
}

/// 2. POLYNOMIAL CONVOLUTION
fn bench_polynomial_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial/mul");

    for &terms in &[16, 64, 256] {
        let a: Polynomial<i64> =
            Polynomial::from_terms((0..terms).map(|i| ((i % 7) as i64 - 3, i * 3)));
        let b: Polynomial<i64> =
            Polynomial::from_terms((0..terms).map(|i| ((i % 5) as i64 - 2, i * 2)));
        group.throughput(Throughput::Elements((terms * terms) as u64));

        group.bench_with_input(BenchmarkId::from_parameter(terms), &terms, |bench, _| {
            bench.iter(|| black_box(black_box(&a) * black_box(&b)))
        });
    }
    group.finish();
}

/// 3. EXPONENTIATION POLICIES (linear vs binary on a matrix base)
fn bench_pow_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("pow/matrix");
    let base = square_matrix(16);

    for &exp in &[4_usize, 16, 64] {
        group.bench_with_input(BenchmarkId::new("linear", exp), &exp, |bench, &exp| {
            bench.iter(|| black_box(LinearPow::pow(black_box(&base), exp)))
        });
        group.bench_with_input(BenchmarkId::new("binary", exp), &exp, |bench, &exp| {
            bench.iter(|| black_box(BinaryPow::pow(black_box(&base), exp)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_matrix_mul,
    bench_polynomial_mul,
    bench_pow_strategies
);
criterion_main!(benches);
