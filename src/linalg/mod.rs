//! Dense kernels under the recursion: the fused linear-combination add
//! and the vendor GEMM base case.

pub mod add;
pub mod gemm;

pub use add::add_into;
pub use gemm::{gemm_acc, gemm_base};
