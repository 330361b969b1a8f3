//! Dynamic peeling: classical GEMM updates for the rows, columns, and
//! inner-dimension residue a non-divisible shape leaves behind.
//!
//! After the fast recursion has produced
//! `C[0..M*(m/M), 0..N*(n/N)] = A[.., 0..K*(k/K)] * B[0..K*(k/K), ..]`,
//! three slabs remain. Their write regions are disjoint:
//! the extra C rows (full width), the extra C columns of the already
//! computed row range, and the k-residue accumulated into the computed
//! region.

use tracing::trace;

use crate::algo::BlockShape;
use crate::linalg::{gemm_acc, gemm_base};
use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// Peel `(a, b, c)` against the `<M, K, N>` grid of the enclosing node.
/// `a` and `b` carry multiplier one here (the driver folded them); `c`'s
/// folded multiplier is honored by the slab GEMMs.
pub(crate) fn dynamic_peeling<S: Scalar>(
    a: &Matrix<S>,
    b: &Matrix<S>,
    c: &mut Matrix<S>,
    shape: BlockShape,
) {
    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    let mt = (m / shape.m) * shape.m;
    let kt = (k / shape.k) * shape.k;
    let nt = (n / shape.n) * shape.n;
    if mt < m || kt < k || nt < n {
        trace!(m, k, n, mt, kt, nt, "dynamic peeling");
    }

    if mt < m {
        // Extra C rows, full width, full depth.
        let a_bottom = a.subview(mt, 0, m - mt, k);
        let mut c_bottom = c.subview(mt, 0, m - mt, n);
        gemm_base(&a_bottom, b, &mut c_bottom);
    }
    if nt < n && mt > 0 {
        // Extra C columns of the computed row range, full depth.
        let a_top = a.subview(0, 0, mt, k);
        let b_right = b.subview(0, nt, k, n - nt);
        let mut c_right = c.subview(0, nt, mt, n - nt);
        gemm_base(&a_top, &b_right, &mut c_right);
    }
    if kt < k && mt > 0 && nt > 0 {
        // Inner residue: accumulate into the region the recursion wrote.
        let a_tail = a.subview(0, kt, mt, k - kt);
        let b_tail = b.subview(kt, 0, k - kt, nt);
        let mut c_main = c.subview(0, 0, mt, nt);
        gemm_acc(&a_tail, &b_tail, &mut c_main);
    }
}
