//! Criterion benchmarks: fast algorithms against the GEMM baseline.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fastmm::{fast_matmul, lookup, Matrix};

fn random_matrix(rows: usize, cols: usize, seed: u64) -> Matrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = Matrix::new(rows, cols);
    for j in 0..cols {
        for i in 0..rows {
            m.set(i, j, rng.gen_range(-1.0..1.0));
        }
    }
    m
}

fn bench_square(c: &mut Criterion) {
    let mut group = c.benchmark_group("square");
    for &n in &[256usize, 512, 1024] {
        let a = random_matrix(n, n, 1);
        let b = random_matrix(n, n, 2);
        group.bench_with_input(BenchmarkId::new("gemm", n), &n, |bench, _| {
            let algo = lookup("strassen").unwrap();
            bench.iter(|| {
                let mut out = Matrix::<f64>::new(n, n);
                fast_matmul(algo, &a, &b, &mut out, 0).unwrap();
                out
            });
        });
        for levels in 1..=2 {
            for name in ["strassen", "fast322", "fast333"] {
                let algo = lookup(name).unwrap();
                group.bench_with_input(
                    BenchmarkId::new(format!("{name}/L{levels}"), n),
                    &n,
                    |bench, _| {
                        bench.iter(|| {
                            let mut out = Matrix::<f64>::new(n, n);
                            fast_matmul(algo, &a, &b, &mut out, levels).unwrap();
                            out
                        });
                    },
                );
            }
        }
    }
    group.finish();
}

fn bench_rectangular(c: &mut Criterion) {
    let mut group = c.benchmark_group("tall");
    // The shape fast322 is built for: outer-product-heavy tall A.
    let (m, k, n) = (1800, 400, 400);
    let a = random_matrix(m, k, 3);
    let b = random_matrix(k, n, 4);
    for (name, levels) in [("classical222", 0), ("fast322", 1), ("fast322", 2)] {
        let algo = lookup(name).unwrap();
        group.bench_function(format!("{name}/L{levels}"), |bench| {
            bench.iter(|| {
                let mut out = Matrix::<f64>::new(m, n);
                fast_matmul(algo, &a, &b, &mut out, levels).unwrap();
                out
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_square, bench_rectangular);
criterion_main!(benches);
