//! <3,3,3> rank-23 scheme (Laderman-family).

pub(crate) const U: [f64; 207] = [
    1., -1., 0., 1., -1., -1., 1., 0., -1.,
    1., -1., 0., 0., 0., 0., 0., 0., 0.,
    0., 0., 0., 0., 0., -1., 0., 0., 0.,
    -1., 1., 0., 0., 1., 0., 0., 0., 0.,
    0., 1., 0., 0., 1., 0., 0., 0., 0.,
    1., 0., 0., 0., 0., 0., 0., 0., 0.,
    -1., 0., 1., 0., 0., 1., 0., 0., 0.,
    -1., 0., 1., 0., 0., 0., 0., 0., 0.,
    0., 0., 1., 0., 0., 1., 0., 0., 0.,
    1., 0., -1., 1., -1., -1., 1., -1., 0.,
    0., 0., 0., 0., 1., 0., 0., 0., 0.,
    0., 0., 0., 0., 0., 1., -1., 0., 1.,
    0., 0., 0., 0., 0., 0., 1., 0., 0.,
    0., 0., 0., 0., 0., 1., 0., 0., 1.,
    0., 0., 0., 0., 1., 0., -1., 1., 0.,
    0., 0., 0., 0., 1., 0., 0., 1., 0.,
    0., 0., 0., 1., 0., 0., 0., 0., 0.,
    0., 0., 0., 0., 0., 0., 0., 1., 0.,
    0., 1., 0., 0., 0., 0., 0., 0., 0.,
    0., 0., 1., 0., 0., 0., 0., 0., 0.,
    0., 0., 0., 0., 0., 0., 0., 0., 1.,
    0., 0., 0., 0., 0., 0., 1., 0., -1.,
    0., 0., 0., 0., 0., 0., 1., -1., 0.,
];

pub(crate) const V: [f64; 207] = [
    0., 0., 0., 0., 1., 0., 0., 0., 0.,
    0., 0., 0., -1., 1., 0., 0., 0., 0.,
    1., -1., 1., 0., 1., -1., -1., 1., 0.,
    1., 0., 0., -1., 1., 0., 0., 0., 0.,
    -1., 0., 0., 1., 0., 0., 0., 0., 0.,
    1., 0., 0., 0., 0., 0., 0., 0., 0.,
    1., 0., 0., 0., 0., 0., -1., 1., 0.,
    0., 0., 0., 0., 0., 0., 1., -1., 0.,
    -1., 0., 0., 0., 0., 0., 1., 0., 0.,
    0., 0., 0., 0., 0., 0., 0., 1., 0.,
    1., -1., 1., -1., 1., 0., 0., 1., -1.,
    0., 0., 1., 0., 1., -1., 0., 0., 0.,
    0., 0., 1., 0., 0., 0., 0., 0., 0.,
    0., 0., -1., 0., 0., 1., 0., 0., 0.,
    0., 0., 1., 0., 0., 0., 0., 1., -1.,
    0., 0., -1., 0., 0., 0., 0., 0., 1.,
    0., 1., 0., 0., 0., 0., 0., 0., 0.,
    0., 0., 0., 0., 0., 1., 0., 0., 0.,
    0., 0., 0., 0., 0., 0., 1., 0., 0.,
    0., 0., 0., 1., 0., 0., 0., 0., 0.,
    0., 0., 0., 0., 0., 0., 0., 0., 1.,
    0., 0., 0., 0., -1., 1., 0., 0., 0.,
    0., 0., 0., 0., 0., 0., 0., -1., 1.,
];

pub(crate) const W: [f64; 207] = [
    0., 0., 0., 0., 0., 1., 0., 0., 0., 0., 0., 0., 1., 0., 0., 0., 1., 0., 0., 0., 0., 0., 0.,
    0., 1., 0., 1., 0., 1., 0., 0., 0., 0., -1., 0., 1., 0., 1., 0., 0., 0., 0., 0., 0., 0., -1.,
    0., 0., 1., 0., 0., 1., 1., 1., 0., 0., 0., 1., 1., 0., 0., 0., 0., 0., 0., 0., 0., -1., 0.,
    1., 0., 0., 1., 1., 1., 0., 0., 0., 0., 0., 1., 1., 1., 0., 0., 0., 0., 0., 0., 0., 0., 0.,
    0., 1., 0., 1., 1., 1., 0., 0., 0., 0., 0., 0., 0., 0., 0., 0., 0., 1., 0., 0., 0., 0., 0.,
    0., 0., 0., 0., 0., 0., 0., 0., 0., 0., 0., 1., 1., 1., 0., 0., 0., 0., 0., 1., 0., -1., 0.,
    0., 0., 0., 0., 0., 1., 1., 0., 1., 1., 0., 0., 1., 0., 1., 1., 0., 0., 0., 0., 0., 0., 0.,
    0., 0., 0., 0., 0., 0., 0., 0., 0., 0., 0., 0., 1., 0., 1., 1., 0., 0., 1., 0., 0., 0., -1.,
    0., 0., 0., 0., 0., 1., 1., 1., 1., 0., 0., 0., 0., 0., 0., 0., 0., 0., 0., 0., 1., 0., 0.,
];
