//! Approximate (border-rank) <3,2,2> scheme of rank 10, one below
//! the exact rank 11 and two below classical: two mirrored copies
//! of a rank-5 border scheme for the 2x2 product with one zero
//! entry, overlapping on the middle row of A. The scheme was
//! recovered numerically and the coefficients are exact to machine
//! precision; the product converges to A*B as x -> 0 with error
//! O(x), the 1/x output weights riding in W.

use super::super::Monomial;

const fn m(neg2: f64, neg: f64, zero: f64, pos: f64, pos2: f64) -> Monomial {
    Monomial { neg2, neg, zero, pos, pos2 }
}

#[rustfmt::skip]
pub(crate) const U: [Monomial; 60] = [
    m(0., 0., 0., -0.015625000000000003, 0.),
    m(0., 0., 1., 0.009374999999999975, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., -0.020833333333333332, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., -0.0625, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0.25, -0.016601562500000003, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0.03271484375, 0.),
    m(0., 0., 0.15625, 0.0625, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0.008280436197916675, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., -0.03125, 0.),
    m(0., 0., 0., -0.006101190476190477, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 1., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0.015625, 0.),
    m(0., 0., -0.14285714285714285, -0.0625, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., -0.5, 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., -0.020833333333333332, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 1., 0.009374999999999975, 0.),
    m(0., 0., 0., -0.015625000000000003, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0.25, -0.016601562500000003, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., -0.0625, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0.008280436197916675, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0.15625, 0.0625, 0.),
    m(0., 0., 0., 0.03271484375, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 1., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., -0.006101190476190477, 0.),
    m(0., 0., 0., -0.03125, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., -0.5, 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., -0.14285714285714285, -0.0625, 0.),
    m(0., 0., 0., 0.015625, 0.),
];

#[rustfmt::skip]
pub(crate) const V: [Monomial; 40] = [
    m(0., 0., 0., -0.020833333333333332, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0.0625, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., -0.33333333333333337, 0.046875, 0.),
    m(0., 0., 0., 0.0625, 0.),
    m(0., 0., 0.16666666666666669, -0.015625, 0.),
    m(0., 0., 0., -0.05505952380952382, 0.),
    m(0., 0., 0., -0.041666666666666664, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., -0.0625, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 1., -0.03125, 0.),
    m(0., 0., 0., 0.03125, 0.),
    m(0., 0., -0.5, -0.00781250000000001, 0.),
    m(0., 0., 0., 0.055803571428571425, 0.),
    m(0., 0., 0., 0.0625, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., -0.03125, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., -0.020833333333333332, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0.0625, 0.),
    m(0., 0., 0., 0.0625, 0.),
    m(0., 0., -0.33333333333333337, 0.046875, 0.),
    m(0., 0., 0., -0.05505952380952382, 0.),
    m(0., 0., 0.16666666666666669, -0.015625, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., -0.041666666666666664, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., -0.0625, 0.),
    m(0., 0., 0., 0.03125, 0.),
    m(0., 0., 1., -0.03125, 0.),
    m(0., 0., 0., 0.055803571428571425, 0.),
    m(0., 0., -0.5, -0.00781250000000001, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0.0625, 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., -0.03125, 0.),
];

#[rustfmt::skip]
pub(crate) const W: [Monomial; 60] = [
    m(-42.666666666666664, -24., 0., 0.015625, -0.0009765625),
    m(0., 42.857142857142854, -3.1857142857142753, 0.03125, 0.001953125),
    m(-170.66666666666666, -29.333333333333325, -1.25, -0.03125, 0.),
    m(0., 10.571428571428573, 0., -0.020833333333333332, 0.0013020833333333333),
    m(224.00000000000006, 22.87619047619045, 1.25, -0.0625, 0.0013020833333333333),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0.2666666666666653, 0., 0.015625, 0.0009765625),
    m(0., 0., 0.025000000000003297, 0., -0.0013020833333333333),
    m(0., -37.333333333333336, 0., 0., 0.0026041666666666665),
    m(0., 0., -2.6666666666666665, 0., 0.001953125),
    m(0., -85.4, 0.75, 0.020833333333333332, -0.0026041666666666665),
    m(0., 0.2666666666666653, 0., 0.015625, 0.0009765625),
    m(0., 0., 0.025000000000003297, 0., -0.0013020833333333333),
    m(0., -37.333333333333336, 0., 0., 0.0026041666666666665),
    m(0., 0., -2.6666666666666665, 0., 0.001953125),
    m(0., -85.4, 0.75, 0.020833333333333332, -0.0026041666666666665),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(-42.666666666666664, -24., 0., 0.015625, -0.0009765625),
    m(0., 42.857142857142854, -3.1857142857142753, 0.03125, 0.001953125),
    m(-170.66666666666666, -29.333333333333325, -1.25, -0.03125, 0.),
    m(0., 10.571428571428573, 0., -0.020833333333333332, 0.0013020833333333333),
    m(224.00000000000006, 22.87619047619045, 1.25, -0.0625, 0.0013020833333333333),
    m(-85.33333333333333, -32., -0.5, -0.015625, 0.),
    m(0., -24., -0.5, 0., -0.001953125),
    m(-341.3333333333333, 5.333333333333333, -1.6666666666666667, 0.03125, 0.0009765625),
    m(0., 12., -0.3333333333333333, 0., -0.0009765625),
    m(448., -32., 3., -0.046875, -0.0029296875),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 1.1851851851851867, 0.25, -0.020833333333333332, 0.0009765625),
    m(0., 0., -0.6666666666666666, 0.03125, 0.0013020833333333333),
    m(0., -72.05925925925925, -0.25, 0.03125, -0.001953125),
    m(0., 0., 1.5, 0., -0.0013020833333333333),
    m(0., 49.77777777777778, -2.6666666666666665, 0.03125, -0.00390625),
    m(0., 1.1851851851851867, 0.25, -0.020833333333333332, 0.0009765625),
    m(0., 0., -0.6666666666666666, 0.03125, 0.0013020833333333333),
    m(0., -72.05925925925925, -0.25, 0.03125, -0.001953125),
    m(0., 0., 1.5, 0., -0.0013020833333333333),
    m(0., 49.77777777777778, -2.6666666666666665, 0.03125, -0.00390625),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(0., 0., 0., 0., 0.),
    m(-85.33333333333333, -32., -0.5, -0.015625, 0.),
    m(0., -24., -0.5, 0., -0.001953125),
    m(-341.3333333333333, 5.333333333333333, -1.6666666666666667, 0.03125, 0.0009765625),
    m(0., 12., -0.3333333333333333, 0., -0.0009765625),
    m(448., -32., 3., -0.046875, -0.0029296875),
];
