use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fastmm::{fast_matmul, fast_matmul_x, lookup, relative_frobenius_diff, Error, Matrix};

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

fn integer_matrix(rows: usize, cols: usize, seed: u64) -> Matrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = Matrix::new(rows, cols);
    for j in 0..cols {
        for i in 0..rows {
            m.set(i, j, rng.gen_range(-4i32..=4) as f64);
        }
    }
    m
}

/// Column-major i-k-j reference product, the correctness baseline.
fn naive_matmul(a: &Matrix<f64>, b: &Matrix<f64>) -> Matrix<f64> {
    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    let mut c = Matrix::new(m, n);
    for p in 0..k {
        for j in 0..n {
            let bpj = b.multiplier() * b.at(p, j);
            for i in 0..m {
                let v = c.at(i, j) + a.multiplier() * a.at(i, p) * bpj;
                c.set(i, j, v);
            }
        }
    }
    c
}

fn assert_close(c_ref: &Matrix<f64>, c: &Matrix<f64>, tol: f64, what: &str) {
    let err = relative_frobenius_diff(c_ref, c);
    assert!(
        err < tol,
        "{what}: relative Frobenius error {err:.3e} exceeds {tol:.1e}"
    );
}

// ============================================================
// Every registered exact algorithm, every depth, assorted shapes
// ============================================================

#[test]
fn exact_algorithms_match_reference() {
    // (m, k, n): divisible, prime, tall, wide, deep shapes
    let shapes = [
        (16, 16, 16),
        (24, 24, 24),
        (13, 17, 11),
        (30, 7, 19),
        (5, 40, 5),
        (64, 8, 8),
    ];
    for algo_name in ["classical222", "strassen", "fast322", "fast333", "fast243"] {
        let algo = lookup(algo_name).unwrap();
        for &(m, k, n) in &shapes {
            let a = random_matrix(m, k, 7);
            let b = random_matrix(k, n, 8);
            let c_ref = naive_matmul(&a, &b);
            for levels in 0..=3 {
                let mut c = Matrix::new(m, n);
                fast_matmul(algo, &a, &b, &mut c, levels).unwrap();
                let tol = 1e-13 * (m.max(k).max(n) as f64);
                assert_close(&c_ref, &c, tol, &format!("{algo_name} {m}x{k}x{n} L{levels}"));
            }
        }
    }
}

#[test]
fn exact_algorithms_are_exact_on_small_integers() {
    // Integer entries keep every intermediate exactly representable, so
    // one recursion level must reproduce the reference bit for bit.
    for algo_name in ["classical222", "strassen", "fast322", "fast333", "fast243"] {
        let algo = lookup(algo_name).unwrap();
        let s = algo.shape();
        let (m, k, n) = (4 * s.m, 4 * s.k, 4 * s.n);
        let a = integer_matrix(m, k, 21);
        let b = integer_matrix(k, n, 22);
        let c_ref = naive_matmul(&a, &b);
        for levels in 1..=2 {
            let mut c = Matrix::new(m, n);
            fast_matmul(algo, &a, &b, &mut c, levels).unwrap();
            for j in 0..n {
                for i in 0..m {
                    assert_eq!(
                        c.at(i, j),
                        c_ref.at(i, j),
                        "{algo_name} L{levels} at ({i}, {j})"
                    );
                }
            }
        }
    }
}

// ============================================================
// Known-answer scenarios
// ============================================================

#[test]
fn scenario_strassen_8_cubed_three_levels() {
    let a = random_matrix(8, 8, 0);
    let b = random_matrix(8, 8, 0);
    let c_ref = naive_matmul(&a, &b);
    let mut c = Matrix::new(8, 8);
    fast_matmul(lookup("strassen").unwrap(), &a, &b, &mut c, 3).unwrap();
    assert_close(&c_ref, &c, 1e-12, "strassen 8^3 L3");
}

#[test]
fn scenario_fast333_9_cubed_two_levels() {
    let a = random_matrix(9, 9, 1);
    let b = random_matrix(9, 9, 2);
    let c_ref = naive_matmul(&a, &b);
    let mut c = Matrix::new(9, 9);
    fast_matmul(lookup("fast333").unwrap(), &a, &b, &mut c, 2).unwrap();
    assert_close(&c_ref, &c, 1e-11, "fast333 9^3 L2");
}

#[test]
fn scenario_fast322_tall() {
    let (m, k, n) = (900, 200, 200);
    let a = random_matrix(m, k, 3);
    let b = random_matrix(k, n, 4);
    let c_ref = naive_matmul(&a, &b);
    let mut c = Matrix::new(m, n);
    fast_matmul(lookup("fast322").unwrap(), &a, &b, &mut c, 1).unwrap();
    assert_close(&c_ref, &c, 1e-12, "fast322 900x200x200 L1");
}

#[test]
fn scenario_fast243_peeling_shape() {
    let (m, k, n) = (13, 17, 11);
    let a = random_matrix(m, k, 5);
    let b = random_matrix(k, n, 6);
    let c_ref = naive_matmul(&a, &b);
    let mut c = Matrix::new(m, n);
    fast_matmul(lookup("fast243").unwrap(), &a, &b, &mut c, 1).unwrap();
    assert_close(&c_ref, &c, 1e-12, "fast243 13x17x11 L1");
}

#[test]
fn scenario_degenerate_scalar_product() {
    let mut a = Matrix::<f64>::new(1, 1);
    let mut b = Matrix::<f64>::new(1, 1);
    a.set(0, 0, 3.5);
    b.set(0, 0, -2.0);
    let mut c = Matrix::new(1, 1);
    fast_matmul(lookup("strassen").unwrap(), &a, &b, &mut c, 5).unwrap();
    assert_eq!(c.at(0, 0), -7.0);
}

// ============================================================
// Approximate algorithm
// ============================================================

#[test]
fn bini322_error_tracks_x() {
    let algo = lookup("bini322").unwrap();
    assert!(algo.is_approximate());
    let (m, k, n) = (12, 12, 12);
    let a = random_matrix(m, k, 9);
    let b = random_matrix(k, n, 10);
    let c_ref = naive_matmul(&a, &b);

    let mut c = Matrix::new(m, n);
    fast_matmul_x(algo, &a, &b, &mut c, 2, 1e-4).unwrap();
    assert_close(&c_ref, &c, 1e-4, "bini322 12^3 L2 x=1e-4");

    // Larger x, larger truncation error; the two regimes must differ.
    let mut c_coarse = Matrix::new(m, n);
    fast_matmul_x(algo, &a, &b, &mut c_coarse, 2, 1e-2).unwrap();
    let coarse = relative_frobenius_diff(&c_ref, &c_coarse);
    let fine = relative_frobenius_diff(&c_ref, &c);
    assert!(
        fine < coarse,
        "error should shrink with x: fine {fine:.3e} vs coarse {coarse:.3e}"
    );
}

// ============================================================
// Algebraic invariants
// ============================================================

#[test]
fn multiplier_neutrality() {
    let (m, k, n) = (12, 10, 14);
    let mut a = random_matrix(m, k, 11);
    let mut b = random_matrix(k, n, 12);
    let c_ref = naive_matmul(&a, &b);

    a.set_multiplier(2.5);
    b.set_multiplier(-4.0);
    let mut c = Matrix::new(m, n);
    fast_matmul(lookup("strassen").unwrap(), &a, &b, &mut c, 2).unwrap();

    // C should come out scaled by exactly 2.5 * -4.0
    let mut scaled_ref = Matrix::new(m, n);
    for j in 0..n {
        for i in 0..m {
            scaled_ref.set(i, j, -10.0 * c_ref.at(i, j));
        }
    }
    assert_close(&scaled_ref, &c, 1e-13, "multiplier neutrality");
}

#[test]
fn identity_product_is_identity() {
    let n = 18;
    let a = random_matrix(n, n, 13);
    let mut eye = Matrix::<f64>::new(n, n);
    for i in 0..n {
        eye.set(i, i, 1.0);
    }
    let mut c = Matrix::new(n, n);
    fast_matmul(lookup("fast322").unwrap(), &a, &eye, &mut c, 2).unwrap();
    assert_close(&a, &c, 1e-13, "A * I");
}

#[test]
fn zero_times_anything_is_zero() {
    let zero = Matrix::<f64>::new(9, 9);
    let b = random_matrix(9, 9, 14);
    let mut c = random_matrix(9, 9, 15); // pre-filled garbage is overwritten
    fast_matmul(lookup("fast333").unwrap(), &zero, &b, &mut c, 2).unwrap();
    for j in 0..9 {
        for i in 0..9 {
            assert_eq!(c.at(i, j), 0.0);
        }
    }
}

#[test]
fn repeated_runs_are_bitwise_deterministic() {
    // The join barrier fixes the combination order, so scheduling cannot
    // perturb the floating-point result.
    let a = random_matrix(20, 20, 16);
    let b = random_matrix(20, 20, 17);
    let algo = lookup("strassen").unwrap();
    let mut c1 = Matrix::new(20, 20);
    let mut c2 = Matrix::new(20, 20);
    fast_matmul(algo, &a, &b, &mut c1, 2).unwrap();
    fast_matmul(algo, &a, &b, &mut c2, 2).unwrap();
    for j in 0..20 {
        for i in 0..20 {
            assert_eq!(c1.at(i, j), c2.at(i, j));
        }
    }
}

#[test]
fn extreme_depth_on_tiny_matrices_still_correct() {
    // Depth-too-deep is not an error; degenerate blocks fall back to GEMM.
    let a = random_matrix(3, 3, 18);
    let b = random_matrix(3, 3, 19);
    let c_ref = naive_matmul(&a, &b);
    let mut c = Matrix::new(3, 3);
    fast_matmul(lookup("strassen").unwrap(), &a, &b, &mut c, 8).unwrap();
    assert_close(&c_ref, &c, 1e-13, "3x3 L8");
}

// ============================================================
// Scheduler modes
// ============================================================

// CI runs the suite twice, `cargo test` and `cargo test
// --no-default-features`, so this test exercises both the rayon DFS
// scheduler and the sequential fallback against the same fixed-seed
// reference. Tile shapes must not depend on the scheduler either.
#[test]
fn scheduler_mode_agrees_with_reference() {
    let (m, k, n) = (19, 14, 23);
    let a = random_matrix(m, k, 30);
    let b = random_matrix(k, n, 31);
    let c_ref = naive_matmul(&a, &b);
    for algo_name in ["strassen", "fast243"] {
        let algo = lookup(algo_name).unwrap();
        for levels in 1..=2 {
            let mut c = Matrix::new(m, n);
            fast_matmul(algo, &a, &b, &mut c, levels).unwrap();
            assert_eq!((c.rows(), c.cols()), (m, n));
            assert_close(
                &c_ref,
                &c,
                1e-13 * n as f64,
                &format!("{algo_name} L{levels} scheduler run"),
            );
        }
    }
}

// Within the parallel build, pin the pool to one thread and compare
// against the work-stealing default. Siblings write disjoint scratch and
// the join barrier fixes the combination order, so the two schedules
// must agree bit for bit.
#[cfg(feature = "parallel")]
#[test]
fn single_and_multi_thread_schedules_agree_bitwise() {
    let (m, k, n) = (24, 24, 24);
    let a = random_matrix(m, k, 32);
    let b = random_matrix(k, n, 33);
    let algo = lookup("fast333").unwrap();

    let mut c_default = Matrix::new(m, n);
    fast_matmul(algo, &a, &b, &mut c_default, 2).unwrap();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .unwrap();
    let mut c_serial = Matrix::new(m, n);
    pool.install(|| fast_matmul(algo, &a, &b, &mut c_serial, 2))
        .unwrap();

    assert_eq!(
        (c_serial.rows(), c_serial.cols()),
        (c_default.rows(), c_default.cols())
    );
    for j in 0..n {
        for i in 0..m {
            assert_eq!(c_default.at(i, j), c_serial.at(i, j), "at ({i}, {j})");
        }
    }
}

// ============================================================
// Single precision
// ============================================================

#[test]
fn single_precision_strassen() {
    let mut rng = StdRng::seed_from_u64(20);
    let (m, k, n) = (16, 16, 16);
    let mut a = Matrix::<f32>::new(m, k);
    let mut b = Matrix::<f32>::new(k, n);
    for j in 0..k {
        for i in 0..m {
            a.set(i, j, rng.gen_range(-1.0f32..1.0));
        }
    }
    for j in 0..n {
        for i in 0..k {
            b.set(i, j, rng.gen_range(-1.0f32..1.0));
        }
    }
    let mut c = Matrix::<f32>::new(m, n);
    fast_matmul(lookup("strassen").unwrap(), &a, &b, &mut c, 2).unwrap();

    // f64 reference
    let mut a64 = Matrix::<f64>::new(m, k);
    let mut b64 = Matrix::<f64>::new(k, n);
    for j in 0..k {
        for i in 0..m {
            a64.set(i, j, a.at(i, j) as f64);
        }
    }
    for j in 0..n {
        for i in 0..k {
            b64.set(i, j, b.at(i, j) as f64);
        }
    }
    let c_ref = naive_matmul(&a64, &b64);
    for j in 0..n {
        for i in 0..m {
            let d = (c.at(i, j) as f64 - c_ref.at(i, j)).abs();
            assert!(d < 1e-4, "f32 drift {d:.3e} at ({i}, {j})");
        }
    }
}

// ============================================================
// Error paths
// ============================================================

#[test]
fn shape_mismatch_is_rejected_up_front() {
    let a = Matrix::<f64>::new(4, 5);
    let b = Matrix::<f64>::new(6, 4); // inner dims disagree
    let mut c = Matrix::new(4, 4);
    let err = fast_matmul(lookup("strassen").unwrap(), &a, &b, &mut c, 1).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
}

#[test]
fn wrong_output_shape_is_rejected() {
    let a = Matrix::<f64>::new(4, 5);
    let b = Matrix::<f64>::new(5, 6);
    let mut c = Matrix::new(4, 5);
    let err = fast_matmul(lookup("strassen").unwrap(), &a, &b, &mut c, 1).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
}

#[test]
fn unknown_algorithm_is_an_error() {
    assert_eq!(
        lookup("winograd9000").unwrap_err(),
        Error::UnknownAlgorithm("winograd9000".into())
    );
}
