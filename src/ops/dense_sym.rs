//! Matrix-vector product for a dense symmetric matrix stored as one triangle.
//!
//! [`DenseSymMatProd`] borrows a square [`MatRef`] and treats it as a symmetric matrix of which
//! only one triangle (diagonal included) is meaningful. Applying the operator reads every stored
//! element of that triangle exactly once and uses it twice: once for its own position `(i, j)`
//! and once for the mirrored position `(j, i)`. The other triangle is never touched, so it may
//! hold anything, including garbage or a different matrix sharing the same buffer.
//!
//! ## Storage layout
//!
//! Any [`MatRef`] is accepted, whatever its strides. The kernel walks the stored triangle column
//! by column, which is contiguous for faer's default column-major [`Mat`](faer::Mat).
//!
//! ## Accumulation order
//!
//! `y` is first zeroed. Columns `j = 0, 1, ..., n - 1` are then visited in order. For every stored
//! off-diagonal element `a_ij` of column `j` (ascending `i`), `a_ij * x[j]` is added to `y[i]` and
//! `a_ij * x[i]` is added to a running sum, which is added to `y[j]` once the column is done.
//! The order is fixed, so repeated calls with identical inputs give bitwise identical outputs.

use crate::{
    error::{OperatorError, OperatorErrorKind},
    matrix::MatOp,
};
use core::fmt::Debug;
use core::ops::{Add, Mul};
use faer::{
    ColMut, ColRef, MatMut, MatRef, Par, Side,
    dyn_stack::{MemStack, StackReq},
    matrix_free::{BiLinOp, LinOp},
    prelude::*,
    traits::RealField,
};

/// Real scalar types the symmetric kernel can run on (`f32`, `f64`).
pub trait SymScalar:
    RealField + Copy + Debug + Send + Sync + Add<Output = Self> + Mul<Output = Self>
{
}

impl<T> SymScalar for T where
    T: RealField + Copy + Debug + Send + Sync + Add<Output = T> + Mul<Output = T>
{
}

/// Computes `y = A x` for a symmetric `A` given by one stored triangle.
///
/// The operator does not own the matrix: it holds a [`MatRef`] whose lifetime `'a` keeps the
/// caller's storage borrowed for as long as the operator exists. Construction copies nothing and
/// the operator never changes afterwards, so it is `Copy` and can be shared across threads.
///
/// # Example
///
/// ```
/// use dense_symop::{DenseSymMatProd, MatOp, Side};
/// use faer::mat;
///
/// // Only the lower triangle is read; the 99.0 is never looked at.
/// let a = mat![
///     [2.0, 99.0, 99.0],
///     [1.0, 3.0, 99.0],
///     [0.0, 1.0, 4.0],
/// ];
/// let op = DenseSymMatProd::with_side(a.as_ref(), Side::Lower);
///
/// let mut y = [0.0; 3];
/// op.perform_op(&[1.0, 1.0, 1.0], &mut y);
/// assert_eq!(y, [3.0, 5.0, 5.0]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DenseSymMatProd<'a, T> {
    mat: MatRef<'a, T>,
    side: Side,
}

impl<'a, T: SymScalar> DenseSymMatProd<'a, T> {
    /// Creates an operator that reads the lower triangle of `mat`.
    ///
    /// # Panics
    ///
    /// Panics if `mat` is not square.
    #[track_caller]
    pub fn new(mat: MatRef<'a, T>) -> Self {
        Self::with_side(mat, Side::Lower)
    }

    /// Creates an operator that reads the `side` triangle of `mat`.
    ///
    /// # Panics
    ///
    /// Panics if `mat` is not square.
    #[track_caller]
    pub fn with_side(mat: MatRef<'a, T>, side: Side) -> Self {
        assert_eq!(
            mat.nrows(),
            mat.ncols(),
            "DenseSymMatProd requires a square matrix, got {}x{}.",
            mat.nrows(),
            mat.ncols(),
        );
        Self::bind(mat, side)
    }

    /// Non-panicking counterpart of [`with_side`](Self::with_side).
    pub fn try_new(mat: MatRef<'a, T>, side: Side) -> Result<Self, OperatorError> {
        if mat.nrows() != mat.ncols() {
            return Err(OperatorErrorKind::NotSquare {
                nrows: mat.nrows(),
                ncols: mat.ncols(),
            }
            .into());
        }
        Ok(Self::bind(mat, side))
    }

    fn bind(mat: MatRef<'a, T>, side: Side) -> Self {
        log::debug!(
            "Binding symmetric operator: n = {}, triangle = {:?}",
            mat.nrows(),
            side
        );
        Self { mat, side }
    }

    /// Number of rows of the operator.
    #[inline]
    pub fn rows(&self) -> usize {
        self.mat.nrows()
    }

    /// Number of columns of the operator (always equal to [`rows`](Self::rows)).
    #[inline]
    pub fn cols(&self) -> usize {
        self.mat.ncols()
    }

    /// The triangle the operator reads.
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// The borrowed matrix view, both triangles included.
    #[inline]
    pub fn matrix(&self) -> MatRef<'a, T> {
        self.mat
    }

    /// Computes `y_out = A * x_in` after checking both buffer lengths.
    pub fn try_perform_op(&self, x_in: &[T], y_out: &mut [T]) -> Result<(), OperatorError> {
        let n = self.rows();
        if x_in.len() != n {
            return Err(OperatorErrorKind::DimensionMismatch {
                buffer: "input",
                expected: n,
                actual: x_in.len(),
            }
            .into());
        }
        if y_out.len() != n {
            return Err(OperatorErrorKind::DimensionMismatch {
                buffer: "output",
                expected: n,
                actual: y_out.len(),
            }
            .into());
        }
        self.symv(ColRef::from_slice(x_in), ColMut::from_slice_mut(y_out));
        Ok(())
    }

    /// The symmetric kernel. `x` and `y` must both have length `n`.
    #[inline]
    fn symv(&self, x: ColRef<'_, T>, mut y: ColMut<'_, T>) {
        let a = self.mat;
        let n = a.nrows();
        let zero = T::zero_impl();

        for i in 0..n {
            y[i] = zero;
        }

        match self.side {
            Side::Lower => {
                for j in 0..n {
                    let xj = x[j];
                    let mut acc = a[(j, j)] * xj;
                    for i in j + 1..n {
                        let aij = a[(i, j)];
                        y[i] = y[i] + aij * xj;
                        acc = acc + aij * x[i];
                    }
                    y[j] = y[j] + acc;
                }
            }
            Side::Upper => {
                for j in 0..n {
                    let xj = x[j];
                    let mut acc = zero;
                    for i in 0..j {
                        let aij = a[(i, j)];
                        y[i] = y[i] + aij * xj;
                        acc = acc + aij * x[i];
                    }
                    y[j] = y[j] + acc + a[(j, j)] * xj;
                }
            }
        }
    }
}

impl<T: SymScalar> MatOp<T> for DenseSymMatProd<'_, T> {
    #[inline]
    fn rows(&self) -> usize {
        DenseSymMatProd::rows(self)
    }

    #[inline]
    fn cols(&self) -> usize {
        DenseSymMatProd::cols(self)
    }

    #[inline]
    fn perform_op(&self, x_in: &[T], y_out: &mut [T]) {
        debug_assert_eq!(
            x_in.len(),
            self.cols(),
            "Dimension mismatch: input buffer has length {} but the operator expects {}.",
            x_in.len(),
            self.cols(),
        );
        debug_assert_eq!(
            y_out.len(),
            self.rows(),
            "Dimension mismatch: output buffer has length {} but the operator expects {}.",
            y_out.len(),
            self.rows(),
        );
        self.symv(ColRef::from_slice(x_in), ColMut::from_slice_mut(y_out));
    }
}

/// Lets faer's matrix-free solvers consume the operator directly.
///
/// Each right-hand side column goes through the same kernel as [`MatOp::perform_op`]. The kernel
/// is sequential, so `par` is ignored and no scratch space is requested.
impl<T: SymScalar> LinOp<T> for DenseSymMatProd<'_, T> {
    #[inline]
    fn apply_scratch(&self, rhs_ncols: usize, par: Par) -> StackReq {
        _ = (rhs_ncols, par);
        StackReq::EMPTY
    }

    #[inline]
    fn nrows(&self) -> usize {
        self.rows()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.cols()
    }

    #[track_caller]
    fn apply(&self, mut out: MatMut<'_, T>, rhs: MatRef<'_, T>, par: Par, stack: &mut MemStack) {
        _ = (par, stack);
        assert_eq!(
            self.cols(),
            rhs.nrows(),
            "Dimension mismatch: operator columns ({}) do not match vector rows ({}).",
            self.cols(),
            rhs.nrows(),
        );
        assert_eq!(out.nrows(), self.rows());
        assert_eq!(out.ncols(), rhs.ncols());

        for k in 0..rhs.ncols() {
            self.symv(rhs.col(k), out.rb_mut().col_mut(k));
        }
    }

    #[track_caller]
    fn conj_apply(&self, out: MatMut<'_, T>, rhs: MatRef<'_, T>, par: Par, stack: &mut MemStack) {
        // Real entries: conjugation is the identity.
        self.apply(out, rhs, par, stack);
    }
}

impl<T: SymScalar> BiLinOp<T> for DenseSymMatProd<'_, T> {
    #[inline]
    fn transpose_apply_scratch(&self, rhs_ncols: usize, par: Par) -> StackReq {
        self.apply_scratch(rhs_ncols, par)
    }

    #[track_caller]
    fn transpose_apply(
        &self,
        out: MatMut<'_, T>,
        rhs: MatRef<'_, T>,
        par: Par,
        stack: &mut MemStack,
    ) {
        self.apply(out, rhs, par, stack);
    }

    #[track_caller]
    fn adjoint_apply(
        &self,
        out: MatMut<'_, T>,
        rhs: MatRef<'_, T>,
        par: Par,
        stack: &mut MemStack,
    ) {
        self.apply(out, rhs, par, stack);
    }
}
