//! This module defines the capability set shared by all matrix operators.
//!
//! Iterative eigensolvers such as implicitly restarted Lanczos never look at the entries of the
//! matrix they work on. Everything they need is the dimension of the problem and the action
//! `y = A x`. The [`MatOp`] trait captures exactly that, so a solver written against it runs
//! unchanged on dense, sparse or implicitly defined operators.
//!
//! Solvers are expected to take the operator as a generic parameter (`O: MatOp<T>`), which
//! resolves every call at compile time. The trait is object safe as well, so `&dyn MatOp<T>` is
//! available when the storage kind is only known at runtime.
//!
//! Operators that are also faer [`LinOp`](faer::matrix_free::LinOp)s (such as
//! [`DenseSymMatProd`](crate::DenseSymMatProd)) can additionally be handed to faer's own
//! matrix-free algorithms.

/// A square linear operator that can be applied to a vector.
///
/// # Contract
///
/// * `x_in` has length [`cols`](MatOp::cols) and `y_out` has length [`rows`](MatOp::rows).
///   Implementations are not required to re-validate this on every call.
/// * On return `y_out` holds `A * x_in`. Its previous contents are overwritten, never accumulated.
/// * `x_in` and the operator's storage are left untouched.
///
/// # Example
///
/// ```
/// use dense_symop::{DenseSymMatProd, MatOp};
/// use faer::mat;
///
/// // One step of power iteration, written once for every operator kind.
/// fn power_step<O: MatOp<f64>>(op: &O, x: &[f64]) -> Vec<f64> {
///     assert_eq!(op.cols(), x.len());
///     let mut y = vec![0.0; op.rows()];
///     op.perform_op(x, &mut y);
///     y
/// }
///
/// let a = mat![[2.0, 0.0], [1.0, 3.0]];
/// let op = DenseSymMatProd::new(a.as_ref());
/// assert_eq!(power_step(&op, &[1.0, 1.0]), vec![3.0, 4.0]);
/// ```
pub trait MatOp<T> {
    /// Returns the number of rows of the operator.
    fn rows(&self) -> usize;

    /// Returns the number of columns of the operator.
    fn cols(&self) -> usize;

    /// Computes `y_out = A * x_in`.
    fn perform_op(&self, x_in: &[T], y_out: &mut [T]);
}

impl<T, O: MatOp<T> + ?Sized> MatOp<T> for &O {
    #[inline]
    fn rows(&self) -> usize {
        (**self).rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        (**self).cols()
    }

    #[inline]
    fn perform_op(&self, x_in: &[T], y_out: &mut [T]) {
        (**self).perform_op(x_in, y_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DenseSymMatProd;
    use faer::{Mat, Side, mat};

    /// Sums `A x` over a list of operators, resolving each one dynamically.
    fn apply_all(ops: &[&dyn MatOp<f64>], x: &[f64]) -> Vec<f64> {
        let mut total = vec![0.0; x.len()];
        let mut y = vec![0.0; x.len()];
        for op in ops {
            op.perform_op(x, &mut y);
            for (t, v) in total.iter_mut().zip(&y) {
                *t += v;
            }
        }
        total
    }

    #[test]
    fn test_dynamic_dispatch_over_operators() {
        let lower: Mat<f64> = mat![[1.0, 0.0], [2.0, 1.0]];
        let upper: Mat<f64> = mat![[3.0, -1.0], [0.0, 3.0]];
        let op_lower = DenseSymMatProd::new(lower.as_ref());
        let op_upper = DenseSymMatProd::with_side(upper.as_ref(), Side::Upper);

        let ops: [&dyn MatOp<f64>; 2] = [&op_lower, &op_upper];
        // [[1, 2], [2, 1]] + [[3, -1], [-1, 3]] = [[4, 1], [1, 4]]
        assert_eq!(apply_all(&ops, &[1.0, 2.0]), vec![6.0, 9.0]);
    }

    #[test]
    fn test_reference_forwards_to_operator() {
        let a: Mat<f64> = mat![[5.0, 0.0], [0.0, 7.0]];
        let op = DenseSymMatProd::new(a.as_ref());
        let by_ref: &DenseSymMatProd<'_, f64> = &op;

        assert_eq!(MatOp::<f64>::rows(&by_ref), 2);
        assert_eq!(MatOp::<f64>::cols(&by_ref), 2);

        let mut y = [0.0; 2];
        MatOp::perform_op(&by_ref, &[1.0, 1.0], &mut y);
        assert_eq!(y, [5.0, 7.0]);
    }
}
