//! Concrete operators implementing [`MatOp`](crate::MatOp).
//!
//! - **`dense_sym`**: a dense symmetric matrix read through one stored triangle
//!   ([`DenseSymMatProd`]).

pub mod dense_sym;

pub use dense_sym::{DenseSymMatProd, SymScalar};
