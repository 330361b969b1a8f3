//! The bilinear recursion driver.
//!
//! One generic routine interprets an algorithm's coefficient tables
//! instead of unrolling per-algorithm code: partition the operands into
//! the algorithm's block grids, form the R left/right factor sums, recurse
//! on each product, then combine the intermediates into the C tiles.
//! Non-divisible dimensions are corrected by dynamic peeling at every
//! level.

pub mod peeling;

use tracing::trace;

use crate::algo::InstTables;
use crate::linalg::{add_into, gemm_base};
use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// Recursive fast multiply: `C <- logical(A) * logical(B)`.
///
/// `a` and `b` are views (the recursion rewrites their multipliers
/// locally); `c`'s multiplier is folded, used, and reset to one before
/// returning.
pub(crate) fn fast_matmul_recursive<S: Scalar>(
    mut a: Matrix<S>,
    mut b: Matrix<S>,
    c: &mut Matrix<S>,
    tables: &InstTables<S>,
    levels: usize,
) {
    // Fold the factor scales onto C so the subtree below is homogeneous:
    // every A/B view seen by the kernels carries multiplier one, and the
    // accumulated scale is materialized exactly once, at the base case.
    c.update_multiplier(a.multiplier() * b.multiplier());
    a.set_multiplier(S::ONE);
    b.set_multiplier(S::ONE);

    let shape = tables.shape;
    let degenerate =
        a.rows() < shape.m || a.cols() < shape.k || b.cols() < shape.n;
    if levels == 0 || degenerate {
        gemm_base(&a, &b, c);
        return;
    }

    trace!(
        m = a.rows(),
        k = a.cols(),
        n = b.cols(),
        levels,
        rank = tables.rank,
        "partition"
    );

    // Intermediate products, one per table row. Creating them at C's
    // multiplier is what lets the base case fold the scale in for free.
    let tile_rows = c.rows() / shape.m;
    let tile_cols = c.cols() / shape.n;
    let mut products: Vec<Matrix<S>> = (0..tables.rank)
        .map(|_| Matrix::with_multiplier(tile_rows, tile_cols, c.multiplier()))
        .collect();

    // The R sibling products are independent: DFS parallelism spawns them
    // into the pool and joins before output combination.
    #[cfg(feature = "parallel")]
    {
        let (a, b) = (&a, &b);
        rayon::scope(|s| {
            for (r, m_r) in products.iter_mut().enumerate() {
                s.spawn(move |_| bilinear_product(a, b, m_r, tables, r, levels));
            }
        });
    }
    #[cfg(not(feature = "parallel"))]
    for (r, m_r) in products.iter_mut().enumerate() {
        bilinear_product(&a, &b, m_r, tables, r, levels);
    }

    // Output combination: C_ij <- sum_r W[(i,j), r] * M_r. The M * N
    // destination tiles are disjoint by construction.
    for j in 0..shape.n {
        for i in 0..shape.m {
            let mut tile = c.block(shape.m, shape.n, i, j);
            let terms: Vec<(S, &Matrix<S>)> = tables
                .w_row(i, j)
                .iter()
                .zip(products.iter())
                .filter(|(w, _)| **w != S::ZERO)
                .map(|(w, m_r)| (*w, m_r))
                .collect();
            if terms.is_empty() {
                // A C block no product touches is the zero matrix.
                for jc in 0..tile.cols() {
                    for ic in 0..tile.rows() {
                        tile.set(ic, jc, S::ZERO);
                    }
                }
            } else {
                add_into(&mut tile, &terms);
            }
        }
    }

    peeling::dynamic_peeling(&a, &b, c, shape);

    c.set_multiplier(S::ONE);
}

/// Compute intermediate product `r`: build the two factor sums and recurse.
fn bilinear_product<S: Scalar>(
    a: &Matrix<S>,
    b: &Matrix<S>,
    m_r: &mut Matrix<S>,
    tables: &InstTables<S>,
    r: usize,
    levels: usize,
) {
    let shape = tables.shape;
    let left = factor_sum(a, tables.u_row(r), shape.m, shape.k, m_r);
    let right = factor_sum(b, tables.v_row(r), shape.k, shape.n, m_r);
    fast_matmul_recursive(left, right, m_r, tables, levels - 1);
}

/// Form `sum_i coeff_i * block_i` of `src` as a fresh scratch matrix, or,
/// when exactly one coefficient is nonzero, alias that block directly and
/// fold the coefficient into the intermediate's deferred multiplier. The
/// single-operand case is a material constant-factor win: most table rows
/// of real algorithms are sparse.
fn factor_sum<S: Scalar>(
    src: &Matrix<S>,
    coeffs: &[S],
    grid_rows: usize,
    grid_cols: usize,
    m_r: &mut Matrix<S>,
) -> Matrix<S> {
    let nonzero = coeffs.iter().filter(|c| **c != S::ZERO).count();
    debug_assert!(nonzero > 0, "empty factor row in coefficient table");

    if nonzero == 1 {
        let (idx, coeff) = coeffs
            .iter()
            .enumerate()
            .find(|(_, c)| **c != S::ZERO)
            .map(|(idx, c)| (idx, *c))
            .expect("nonzero coefficient");
        let (i, j) = (idx % grid_rows, idx / grid_rows);
        if coeff != S::ONE {
            m_r.update_multiplier(coeff);
        }
        return src.block(grid_rows, grid_cols, i, j);
    }

    let blocks: Vec<(S, Matrix<S>)> = coeffs
        .iter()
        .enumerate()
        .filter(|(_, c)| **c != S::ZERO)
        .map(|(idx, c)| {
            let (i, j) = (idx % grid_rows, idx / grid_rows);
            (*c, src.block(grid_rows, grid_cols, i, j))
        })
        .collect();
    let mut sum = Matrix::new(src.rows() / grid_rows, src.cols() / grid_cols);
    let terms: Vec<(S, &Matrix<S>)> = blocks.iter().map(|(c, m)| (*c, m)).collect();
    add_into(&mut sum, &terms);
    sum
}
