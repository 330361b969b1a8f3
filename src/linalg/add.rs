//! Fused variadic matrix add: `D <- sum_i alpha_i * S_i`.
//!
//! The recursion builds left/right factors as sums of up to a handful of
//! blocks; doing the whole sum in one pass halves memory traffic compared
//! to a tree of pairwise adds. Each source's deferred multiplier is folded
//! into its coefficient, so the kernel reads raw storage. The destination
//! is assigned, not accumulated into, and its own multiplier is left
//! untouched.

use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// `dst <- sum_i coeff_i * logical(src_i)`; all operands share one shape.
///
/// # Panics
///
/// Panics if a source shape differs from the destination shape, or if no
/// sources are given.
pub fn add_into<S: Scalar>(dst: &mut Matrix<S>, terms: &[(S, &Matrix<S>)]) {
    assert!(!terms.is_empty(), "add_into needs at least one source");
    let rows = dst.rows();
    let cols = dst.cols();
    for (_, src) in terms {
        assert_eq!(src.rows(), rows, "source rows differ from destination");
        assert_eq!(src.cols(), cols, "source cols differ from destination");
    }

    // Fold each source's deferred multiplier into its coefficient once.
    let folded: Vec<S> = terms
        .iter()
        .map(|(c, src)| *c * src.multiplier())
        .collect();

    let ds = dst.stride();
    let dp = dst.as_mut_ptr();
    // Fixed-arity inner loops for the common small operand counts keep the
    // column pass branch-free and vectorizable.
    unsafe {
        match terms.len() {
            1 => {
                let (a0, s0) = (folded[0], terms[0].1);
                for j in 0..cols {
                    let d = dp.add(j * ds);
                    let p0 = s0.as_ptr().add(j * s0.stride());
                    for i in 0..rows {
                        *d.add(i) = a0 * *p0.add(i);
                    }
                }
            }
            2 => {
                let (a0, s0) = (folded[0], terms[0].1);
                let (a1, s1) = (folded[1], terms[1].1);
                for j in 0..cols {
                    let d = dp.add(j * ds);
                    let p0 = s0.as_ptr().add(j * s0.stride());
                    let p1 = s1.as_ptr().add(j * s1.stride());
                    for i in 0..rows {
                        *d.add(i) = a0 * *p0.add(i) + a1 * *p1.add(i);
                    }
                }
            }
            3 => {
                let (a0, s0) = (folded[0], terms[0].1);
                let (a1, s1) = (folded[1], terms[1].1);
                let (a2, s2) = (folded[2], terms[2].1);
                for j in 0..cols {
                    let d = dp.add(j * ds);
                    let p0 = s0.as_ptr().add(j * s0.stride());
                    let p1 = s1.as_ptr().add(j * s1.stride());
                    let p2 = s2.as_ptr().add(j * s2.stride());
                    for i in 0..rows {
                        *d.add(i) = a0 * *p0.add(i) + a1 * *p1.add(i) + a2 * *p2.add(i);
                    }
                }
            }
            4 => {
                let (a0, s0) = (folded[0], terms[0].1);
                let (a1, s1) = (folded[1], terms[1].1);
                let (a2, s2) = (folded[2], terms[2].1);
                let (a3, s3) = (folded[3], terms[3].1);
                for j in 0..cols {
                    let d = dp.add(j * ds);
                    let p0 = s0.as_ptr().add(j * s0.stride());
                    let p1 = s1.as_ptr().add(j * s1.stride());
                    let p2 = s2.as_ptr().add(j * s2.stride());
                    let p3 = s3.as_ptr().add(j * s3.stride());
                    for i in 0..rows {
                        *d.add(i) = a0 * *p0.add(i)
                            + a1 * *p1.add(i)
                            + a2 * *p2.add(i)
                            + a3 * *p3.add(i);
                    }
                }
            }
            _ => {
                for j in 0..cols {
                    let d = dp.add(j * ds);
                    for i in 0..rows {
                        let mut acc = S::ZERO;
                        for (t, (_, src)) in terms.iter().enumerate() {
                            acc += folded[t] * *src.as_ptr().add(i + j * src.stride());
                        }
                        *d.add(i) = acc;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m2(vals: [[f64; 2]; 2]) -> Matrix<f64> {
        let mut m = Matrix::new(2, 2);
        for (i, row) in vals.iter().enumerate() {
            for (j, v) in row.iter().enumerate() {
                m.set(i, j, *v);
            }
        }
        m
    }

    #[test]
    fn single_operand_is_a_scaled_copy() {
        let a = m2([[1.0, 2.0], [3.0, 4.0]]);
        let mut d = Matrix::new(2, 2);
        add_into(&mut d, &[(-2.0, &a)]);
        assert_eq!(d.at(0, 1), -4.0);
        assert_eq!(d.at(1, 0), -6.0);
    }

    #[test]
    fn applies_source_multipliers() {
        let mut a = m2([[1.0, 1.0], [1.0, 1.0]]);
        a.set_multiplier(3.0);
        let b = m2([[1.0, 2.0], [3.0, 4.0]]);
        let mut d = Matrix::new(2, 2);
        add_into(&mut d, &[(1.0, &a), (-1.0, &b)]);
        assert_eq!(d.at(0, 0), 2.0);
        assert_eq!(d.at(1, 1), -1.0);
    }

    #[test]
    fn assigns_rather_than_accumulates() {
        let a = m2([[1.0, 1.0], [1.0, 1.0]]);
        let mut d = m2([[9.0, 9.0], [9.0, 9.0]]);
        add_into(&mut d, &[(1.0, &a)]);
        assert_eq!(d.at(0, 0), 1.0);
    }

    #[test]
    fn five_operands_take_the_generic_path() {
        let a = m2([[1.0, 0.0], [0.0, 1.0]]);
        let mut d = Matrix::new(2, 2);
        add_into(&mut d, &[(1.0, &a), (1.0, &a), (1.0, &a), (1.0, &a), (1.0, &a)]);
        assert_eq!(d.at(0, 0), 5.0);
        assert_eq!(d.at(0, 1), 0.0);
    }
}
