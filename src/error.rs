//! Error types for the public API.
//!
//! The failure model is fail-fast: every error is reported to the caller
//! before any work happens, nothing is retried or swallowed.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The three operand shapes do not describe a valid product
    /// (`A: m x k`, `B: k x n`, `C: m x n`).
    #[error(
        "shape mismatch: A is {a_rows}x{a_cols}, B is {b_rows}x{b_cols}, C is {c_rows}x{c_cols}"
    )]
    ShapeMismatch {
        a_rows: usize,
        a_cols: usize,
        b_rows: usize,
        b_cols: usize,
        c_rows: usize,
        c_cols: usize,
    },

    /// No algorithm with this id is registered.
    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, Error>;
