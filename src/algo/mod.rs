//! Bilinear algorithm descriptors.
//!
//! An algorithm is pure data: the block-partition shape `<M, K, N>`, the
//! rank `R`, and three coefficient tables. `U` (`R x MK`) combines the A
//! blocks into the left factor of each product, `V` (`R x KN`) likewise
//! for B, and `W` (`MN x R`) combines the R intermediate products into the
//! C blocks. Block indices flatten column-major: A block `(i, p)` is
//! `i + p * M`, B block `(p, j)` is `p + j * K`, C block `(i, j)` is
//! `i + j * M`.
//!
//! Exact algorithms store plain `f64` tables. Approximate (border-rank)
//! algorithms store per-entry Laurent monomials in the approximation
//! parameter and are instantiated at a concrete `x` once per top-level
//! call; the `1/x` output weights live in `W` directly, so no extra
//! output-scaling pass exists.

pub mod registry;
pub mod tables;

use crate::scalar::Scalar;

/// Block-partition shape `<M, K, N>`: A splits `M x K`, B `K x N`, C `M x N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockShape {
    pub m: usize,
    pub k: usize,
    pub n: usize,
}

/// One coefficient of an approximate algorithm, a short Laurent
/// polynomial in the approximation parameter:
/// `neg2 / x^2 + neg / x + zero + pos * x + pos2 * x^2`.
#[derive(Debug, Clone, Copy)]
pub struct Monomial {
    pub neg2: f64,
    pub neg: f64,
    pub zero: f64,
    pub pos: f64,
    pub pos2: f64,
}

#[derive(Debug)]
pub(crate) enum Tables {
    Exact {
        u: Vec<f64>,
        v: Vec<f64>,
        w: Vec<f64>,
    },
    Approximate {
        u: Vec<Monomial>,
        v: Vec<Monomial>,
        w: Vec<Monomial>,
    },
}

/// A registered bilinear matmul algorithm.
#[derive(Debug)]
pub struct Algorithm {
    name: &'static str,
    shape: BlockShape,
    rank: usize,
    tables: Tables,
}

impl Algorithm {
    pub(crate) fn exact(
        name: &'static str,
        shape: BlockShape,
        u: Vec<f64>,
        v: Vec<f64>,
        w: Vec<f64>,
    ) -> Self {
        let rank = u.len() / (shape.m * shape.k);
        assert_eq!(u.len(), rank * shape.m * shape.k);
        assert_eq!(v.len(), rank * shape.k * shape.n);
        assert_eq!(w.len(), shape.m * shape.n * rank);
        Algorithm {
            name,
            shape,
            rank,
            tables: Tables::Exact { u, v, w },
        }
    }

    pub(crate) fn approximate(
        name: &'static str,
        shape: BlockShape,
        u: Vec<Monomial>,
        v: Vec<Monomial>,
        w: Vec<Monomial>,
    ) -> Self {
        let rank = u.len() / (shape.m * shape.k);
        assert_eq!(u.len(), rank * shape.m * shape.k);
        assert_eq!(v.len(), rank * shape.k * shape.n);
        assert_eq!(w.len(), shape.m * shape.n * rank);
        Algorithm {
            name,
            shape,
            rank,
            tables: Tables::Approximate { u, v, w },
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn shape(&self) -> BlockShape {
        self.shape
    }

    /// Number of bilinear products per recursion step.
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn is_approximate(&self) -> bool {
        matches!(self.tables, Tables::Approximate { .. })
    }

    /// Materialize the coefficient tables in the working scalar type,
    /// instantiating monomials at `x` for approximate algorithms.
    pub(crate) fn instantiate<S: Scalar>(&self, x: f64) -> InstTables<S> {
        let conv = |t: &[f64]| -> Vec<S> { t.iter().map(|&c| S::from_f64(c)).collect() };
        let inst = |t: &[Monomial]| -> Vec<S> {
            t.iter()
                .map(|mo| {
                    S::from_f64(
                        mo.neg2 / (x * x) + mo.neg / x + mo.zero + mo.pos * x + mo.pos2 * x * x,
                    )
                })
                .collect()
        };
        let (u, v, w) = match &self.tables {
            Tables::Exact { u, v, w } => (conv(u), conv(v), conv(w)),
            Tables::Approximate { u, v, w } => (inst(u), inst(v), inst(w)),
        };
        InstTables {
            shape: self.shape,
            rank: self.rank,
            u,
            v,
            w,
        }
    }
}

/// Tables instantiated for one top-level call; shared by every recursion
/// level below it.
pub(crate) struct InstTables<S> {
    pub shape: BlockShape,
    pub rank: usize,
    pub u: Vec<S>,
    pub v: Vec<S>,
    pub w: Vec<S>,
}

impl<S: Scalar> InstTables<S> {
    /// Row `r` of U: coefficients over the `M * K` A-blocks.
    pub fn u_row(&self, r: usize) -> &[S] {
        let w = self.shape.m * self.shape.k;
        &self.u[r * w..(r + 1) * w]
    }

    /// Row `r` of V: coefficients over the `K * N` B-blocks.
    pub fn v_row(&self, r: usize) -> &[S] {
        let w = self.shape.k * self.shape.n;
        &self.v[r * w..(r + 1) * w]
    }

    /// Row `(i, j)` of W: coefficients over the `R` intermediate products.
    pub fn w_row(&self, i: usize, j: usize) -> &[S] {
        let idx = i + j * self.shape.m;
        &self.w[idx * self.rank..(idx + 1) * self.rank]
    }
}
