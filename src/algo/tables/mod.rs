//! Static coefficient tables, one module per algorithm, plus the
//! classical-table generator. Adding a fast algorithm is purely adding a
//! table here and registering it.

pub(super) mod bini322;
pub(super) mod fast243;
pub(super) mod fast322;
pub(super) mod fast333;
pub(super) mod strassen;

/// Tables of the classical block algorithm for any `<M, K, N>`: one
/// product per `(i, j, p)` triple, rank `M * K * N`.
pub(super) fn classical(m: usize, k: usize, n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let rank = m * k * n;
    let mut u = vec![0.0; rank * m * k];
    let mut v = vec![0.0; rank * k * n];
    let mut w = vec![0.0; m * n * rank];
    let mut r = 0;
    for i in 0..m {
        for j in 0..n {
            for p in 0..k {
                u[r * m * k + i + p * m] = 1.0;
                v[r * k * n + p + j * k] = 1.0;
                w[(i + j * m) * rank + r] = 1.0;
                r += 1;
            }
        }
    }
    (u, v, w)
}
