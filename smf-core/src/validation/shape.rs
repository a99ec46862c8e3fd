//! Operand shape checks for matrix arithmetic

use crate::error::{Result, SmfError};
use crate::traits::MatrixShape;

/// Require both operands to have identical dimensions
pub fn check_same_shape<A, B>(operation: &'static str, left: &A, right: &B) -> Result<()>
where
    A: MatrixShape + ?Sized,
    B: MatrixShape + ?Sized,
{
    if left.dimensions() != right.dimensions() {
        return Err(mismatch(operation, left, right));
    }
    Ok(())
}

/// Require the left column count to equal the right row count
pub fn check_multipliable<A, B>(left: &A, right: &B) -> Result<()>
where
    A: MatrixShape + ?Sized,
    B: MatrixShape + ?Sized,
{
    if left.cols() != right.rows() {
        return Err(mismatch("multiply", left, right));
    }
    Ok(())
}

fn mismatch<A, B>(operation: &'static str, left: &A, right: &B) -> SmfError
where
    A: MatrixShape + ?Sized,
    B: MatrixShape + ?Sized,
{
    SmfError::Dimension {
        operation,
        left: left.dimensions(),
        right: right.dimensions(),
    }
}
