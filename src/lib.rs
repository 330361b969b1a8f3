//! Recursive fast matrix multiplication.
//!
//! Strassen-style bilinear algorithms decompose an `<M, K, N>` product
//! into `R < M*K*N` smaller products plus linear combinations, applied
//! recursively for a chosen number of levels before handing the base case
//! to a vendor GEMM. This crate keeps each algorithm as pure coefficient
//! data (`U`, `V`, `W` tables) and runs them all through one generic
//! driver; adding an algorithm is adding a table.
//!
//! ## Usage
//!
//! ```
//! use fastmm::{fast_matmul, lookup, Matrix};
//!
//! let algo = lookup("strassen").unwrap();
//! let n = 64;
//! let mut a = Matrix::<f64>::new(n, n);
//! let mut b = Matrix::<f64>::new(n, n);
//! for i in 0..n {
//!     a.set(i, i, 2.0);
//!     b.set(i, i, 3.0);
//! }
//! let mut c = Matrix::<f64>::new(n, n);
//! fast_matmul(algo, &a, &b, &mut c, 2).unwrap();
//! assert_eq!(c.at(0, 0), 6.0);
//! ```
//!
//! ## What's inside
//!
//! - Strided column-major matrix views with deferred sign/scale
//!   multipliers (no copies on the way down the recursion)
//! - A fused multi-operand add for the factor and output combinations
//! - One table-driven recursion driver with dynamic peeling for
//!   non-divisible shapes
//! - DFS task parallelism over the R sibling products (rayon, `parallel`
//!   feature, on by default)
//! - Exact algorithms `strassen`, `fast322`, `fast333`, `fast243`,
//!   `classical222`, and the approximate (border-rank) `bini322`

pub mod algo;
pub mod error;
pub mod linalg;
pub mod matrix;
mod recursion;
pub mod scalar;

pub use algo::registry::{all, lookup, names};
pub use algo::{Algorithm, BlockShape};
pub use error::{Error, Result};
pub use matrix::{max_relative_diff, relative_frobenius_diff, Matrix};
pub use scalar::Scalar;

use tracing::debug;

/// Default approximation parameter for border-rank algorithms. Truncation
/// error shrinks with `x` while the `1/x` table weights amplify roundoff,
/// so the best `x` depends on the algorithm's scaling order and the
/// scalar type; callers with accuracy requirements should pick `x` via
/// [`fast_matmul_x`]. Ignored by exact algorithms.
pub const DEFAULT_X: f64 = 1e-8;

/// Compute `C <- A * B` with `levels` recursive steps of `algo` before the
/// GEMM base case. `levels = 0` is a plain GEMM call.
///
/// Shapes must satisfy `A: m x k`, `B: k x n`, `C: m x n`; `m`, `k`, `n`
/// need not be divisible by the algorithm's block shape (dynamic peeling
/// corrects the residues). The previous contents of `C` are overwritten.
pub fn fast_matmul<S: Scalar>(
    algo: &Algorithm,
    a: &Matrix<S>,
    b: &Matrix<S>,
    c: &mut Matrix<S>,
    levels: usize,
) -> Result<()> {
    fast_matmul_x(algo, a, b, c, levels, DEFAULT_X)
}

/// [`fast_matmul`] with an explicit approximation parameter `x` for
/// approximate algorithms. The caller picks `x` to balance approximation
/// error (shrinks with `x`) against roundoff (grows as `1/x`).
pub fn fast_matmul_x<S: Scalar>(
    algo: &Algorithm,
    a: &Matrix<S>,
    b: &Matrix<S>,
    c: &mut Matrix<S>,
    levels: usize,
    x: f64,
) -> Result<()> {
    if a.cols() != b.rows() || c.rows() != a.rows() || c.cols() != b.cols() {
        return Err(Error::ShapeMismatch {
            a_rows: a.rows(),
            a_cols: a.cols(),
            b_rows: b.rows(),
            b_cols: b.cols(),
            c_rows: c.rows(),
            c_cols: c.cols(),
        });
    }
    debug!(
        algorithm = algo.name(),
        m = a.rows(),
        k = a.cols(),
        n = b.cols(),
        levels,
        "fast_matmul"
    );
    let tables = algo.instantiate::<S>(x);
    recursion::fast_matmul_recursive(a.view(), b.view(), c, &tables, levels);
    Ok(())
}
