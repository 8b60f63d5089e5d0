//! Matrix-free operators for symmetric eigenvalue solvers.
//!
//! Krylov-subspace eigensolvers (Lanczos, implicitly restarted Lanczos, and friends) touch
//! their matrix only through the product `y = A x`. This crate defines that contract as the
//! [`MatOp`] trait and provides [`DenseSymMatProd`], a dense symmetric implementation that
//! reads a single triangle of the matrix and still produces the full product.
//!
//! Built on [`faer`]: the operator borrows a [`faer::MatRef`] (no copy, no ownership), and it
//! also implements [`faer::matrix_free::LinOp`] and [`faer::matrix_free::BiLinOp`], so it can be
//! passed to faer's matrix-free algorithms as well as to solvers written against [`MatOp`].
//!
//! ## Example
//!
//! ```rust
//! use dense_symop::{DenseSymMatProd, MatOp, Side};
//! use faer::Mat;
//!
//! // The 1D discrete Laplacian, stored in the upper triangle only.
//! let n = 5;
//! let a = Mat::from_fn(n, n, |i, j| {
//!     if i == j { 2.0 } else if j == i + 1 { -1.0 } else { 0.0 }
//! });
//! let op = DenseSymMatProd::with_side(a.as_ref(), Side::Upper);
//!
//! // The solver allocates its buffers once and reuses them on every iteration.
//! let x = vec![1.0; n];
//! let mut y = vec![0.0; n];
//! op.perform_op(&x, &mut y);
//! assert_eq!(y, vec![1.0, 0.0, 0.0, 0.0, 1.0]);
//! ```
//!
//! ## Performance Characteristics
//!
//! One application costs `n^2` multiply-adds and reads `n (n + 1) / 2` matrix elements, half
//! of what a general dense product reads. It never allocates, never blocks and keeps no
//! mutable state, so one operator can be applied from several threads at once as long as each
//! call writes to its own output buffer.

pub mod error;
pub mod matrix;
pub mod ops;
pub mod utils;

pub use error::OperatorError;
pub use faer::Side;
pub use matrix::MatOp;
pub use ops::{DenseSymMatProd, SymScalar};
