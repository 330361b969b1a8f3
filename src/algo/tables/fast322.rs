//! <3,2,2> rank-11 scheme: Strassen on the top two row-blocks of A and
//! C composed with a classical expansion of the third row-block.

pub(crate) const U: [f64; 66] = [
    1., 0., 0., 0., 1., 0.,
    0., 1., 0., 0., 1., 0.,
    1., 0., 0., 0., 0., 0.,
    0., 0., 0., 0., 1., 0.,
    1., 0., 0., 1., 0., 0.,
    -1., 1., 0., 0., 0., 0.,
    0., 0., 0., 1., -1., 0.,
    0., 0., 1., 0., 0., 0.,
    0., 0., 0., 0., 0., 1.,
    0., 0., 1., 0., 0., 0.,
    0., 0., 0., 0., 0., 1.,
];

pub(crate) const V: [f64; 44] = [
    1., 0., 0., 1.,
    1., 0., 0., 0.,
    0., 0., 1., -1.,
    -1., 1., 0., 0.,
    0., 0., 0., 1.,
    1., 0., 1., 0.,
    0., 1., 0., 1.,
    1., 0., 0., 0.,
    0., 1., 0., 0.,
    0., 0., 1., 0.,
    0., 0., 0., 1.,
];

pub(crate) const W: [f64; 66] = [
    1., 0., 0., 1., -1., 0., 1., 0., 0., 0., 0.,
    0., 1., 0., 1., 0., 0., 0., 0., 0., 0., 0.,
    0., 0., 0., 0., 0., 0., 0., 1., 1., 0., 0.,
    0., 0., 1., 0., 1., 0., 0., 0., 0., 0., 0.,
    1., -1., 1., 0., 0., 1., 0., 0., 0., 0., 0.,
    0., 0., 0., 0., 0., 0., 0., 0., 0., 1., 1.,
];
