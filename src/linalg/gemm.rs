//! Vendor GEMM base case, honoring the deferred multipliers.

use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// `C <- (A.mult * B.mult * C.mult) * A * B`, then `C.mult = 1`.
///
/// At the bottom of the recursion A and B have already been folded to
/// multiplier one, so the whole accumulated scale rides on C and is
/// materialized here as GEMM alpha. The common fast path is alpha = +/-1.
pub fn gemm_base<S: Scalar>(a: &Matrix<S>, b: &Matrix<S>, c: &mut Matrix<S>) {
    gemm(a, b, c, S::ZERO);
    c.set_multiplier(S::ONE);
}

/// Accumulating variant (`beta = 1`) used by the peeling slab updates.
/// C's multiplier is preserved so the caller can keep folding into it.
pub fn gemm_acc<S: Scalar>(a: &Matrix<S>, b: &Matrix<S>, c: &mut Matrix<S>) {
    gemm(a, b, c, S::ONE);
}

fn gemm<S: Scalar>(a: &Matrix<S>, b: &Matrix<S>, c: &mut Matrix<S>, beta: S) {
    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    debug_assert_eq!(b.rows(), k);
    debug_assert_eq!(c.rows(), m);
    debug_assert_eq!(c.cols(), n);
    if m == 0 || n == 0 {
        return;
    }
    if k == 0 {
        // Empty inner dimension: alpha * A * B is the zero matrix.
        if beta == S::ZERO {
            for j in 0..n {
                for i in 0..m {
                    c.set(i, j, S::ZERO);
                }
            }
        }
        return;
    }
    let alpha = a.multiplier() * b.multiplier() * c.multiplier();
    unsafe {
        S::gemm(
            m,
            k,
            n,
            alpha,
            a.as_ptr(),
            1,
            a.stride() as isize,
            b.as_ptr(),
            1,
            b.stride() as isize,
            beta,
            c.as_mut_ptr(),
            1,
            c.stride() as isize,
        );
    }
}
