//! <2,4,3> rank-20 scheme (vs. 24 classically).

pub(crate) const U: [f64; 160] = [
    -1., -1., -1., -1., 0., 0., 0., 0.,
    0., 0., 0., -1., 0., -1., 0., 0.,
    -1., 0., 0., 0., 0., 0., 0., 0.,
    0., -1., 0., 0., 0., 0., -1., -1.,
    0., 1., 0., 0., 0., 0., 0., 1.,
    0., 0., 0., 0., 0., 1., -1., 0.,
    0., 0., -1., -1., 0., 0., 0., 0.,
    0., 0., 1., 0., 1., 0., 0., 0.,
    0., 0., 0., 0., 0., -1., 0., 0.,
    0., 0., 0., 0., 0., 0., 1., 1.,
    0., 0., 0., 0., 0., 0., -1., 0.,
    0., 0., 1., 0., 0., -1., 0., 0.,
    0., 0., 0., 0., 0., 1., 0., 1.,
    0., 0., 0., 0., 1., 1., 0., 0.,
    0., 1., 0., 0., 0., 0., 0., 0.,
    0., 0., 0., 0., -1., 0., -1., 0.,
    0., 0., 1., 0., 0., 0., 0., 0.,
    0., 1., 1., 1., 0., 0., 0., 0.,
    -1., -1., 0., 0., 0., 0., -1., -1.,
    0., -1., 0., -1., 0., 0., 0., 0.,
];

pub(crate) const V: [f64; 240] = [
    1., 0., 0., 0., 0., 0., 0., 0., 0., 0., 0., 0.,
    0., 1., 0., 0., 0., 1., 0., 0., 0., 0., 0., 0.,
    1., 0., 0., 0., 1., 0., 0., 0., 1., 0., 0., 0.,
    -1., 0., 0., 0., -1., 0., 0., 0., 0., 0., 0., -1.,
    0., 0., 0., 0., 0., 0., 0., 0., 0., 0., 0., -1.,
    0., 0., 0., -1., 0., 0., 1., 0., 0., 0., 1., 0.,
    1., -1., 0., 0., 0., 0., 0., 0., 0., 0., 0., 0.,
    0., 0., 0., 0., 0., 0., 0., 0., 0., 0., 1., 0.,
    0., 1., -1., 1., 0., 1., 0., 0., 0., 0., 1., 0.,
    -1., 0., 0., -1., -1., 0., 0., 1., 0., 0., 0., 0.,
    0., 0., 0., 0., 0., 0., -1., 1., 0., 0., -1., 1.,
    0., -1., 0., 0., 0., -1., 0., 0., 0., 0., -1., 0.,
    0., 0., 0., 1., 0., 0., 0., 0., 0., 0., 0., 0.,
    0., 0., -1., 0., 0., 0., 1., 0., 0., 0., 1., 0.,
    -1., 0., 0., 0., 0., -1., 0., 0., 1., -1., 0., -1.,
    0., 0., 0., 0., 0., 0., 1., 0., 0., 0., 1., 0.,
    0., 0., 0., 0., 0., 0., 0., 0., 0., -1., 1., 0.,
    -1., 0., 0., 0., 0., -1., 0., 0., 0., -1., 0., 0.,
    1., 0., 0., 0., 1., 0., 0., 0., 0., 0., 0., 0.,
    0., 0., 0., 0., 0., 1., 0., 0., 0., 1., 0., 0.,
];

pub(crate) const W: [f64; 120] = [
    -1., 0., 0., 0., 0., 1., 0., 0., -1., 0., 0., -1., 0., -1., 0., -1., -1., 1., 0., -1.,
    0., 0., 0., 0., 0., 0., 1., 0., 1., 0., 0., 1., 1., 0., 0., 0., 1., -1., 0., 1.,
    1., 0., 0., -1., -1., 0., 0., -1., 0., 0., -1., 0., 0., 0., 0., -1., 1., -1., -1., 1.,
    0., -1., 0., 1., 1., 1., -1., 0., 0., 1., 1., -1., 1., 0., 0., 0., -1., 1., 0., -1.,
    0., 0., -1., 1., 1., 0., 0., 1., 0., 0., 0., 0., 0., 0., 0., 0., -1., 0., 1., 0.,
    0., 1., 0., 0., -1., 0., 1., 0., 0., 0., 0., 1., 0., 0., 1., 0., 1., -1., 0., 0.,
];
