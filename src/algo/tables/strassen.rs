//! Strassen's <2,2,2> rank-7 scheme, the canonical fast algorithm.
//!
//! One row per product; A/B block coefficients are column-major
//! (a11, a21, a12, a22). W rows follow the C blocks in the same order.

pub(crate) const U: [f64; 28] = [
    1., 0., 0., 1.,
    0., 1., 0., 1.,
    1., 0., 0., 0.,
    0., 0., 0., 1.,
    1., 0., 1., 0.,
    -1., 1., 0., 0.,
    0., 0., 1., -1.,
];

pub(crate) const V: [f64; 28] = [
    1., 0., 0., 1.,
    1., 0., 0., 0.,
    0., 0., 1., -1.,
    -1., 1., 0., 0.,
    0., 0., 0., 1.,
    1., 0., 1., 0.,
    0., 1., 0., 1.,
];

pub(crate) const W: [f64; 28] = [
    1., 0., 0., 1., -1., 0., 1.,
    0., 1., 0., 1., 0., 0., 0.,
    0., 0., 1., 0., 1., 0., 0.,
    1., -1., 1., 0., 0., 1., 0.,
];
