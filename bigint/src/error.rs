use strbuf::StrBufError;

/// Errors from BigInt arithmetic and conversion.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BigIntError {
    /// A block buffer could not grow.
    #[error("BigInt allocation failed")]
    AllocationFailed,
    /// The divisor of a division was zero.
    #[error("BigInt division by zero")]
    DivisionByZero,
    /// A magnitude subtraction would go below zero.
    #[error("BigInt underflow: subtrahend magnitude exceeds minuend")]
    Underflow,
    /// The operand was created with [`BigInt::empty`](crate::BigInt::empty) and never assigned.
    #[error("BigInt is uninitialized")]
    Uninitialized,
    /// A decimal literal had no digits.
    #[error("empty decimal literal")]
    EmptyLiteral,
    /// A decimal literal contained a non-digit character.
    #[error("invalid decimal digit {found:?} at byte {position}")]
    InvalidDigit { position: usize, found: char },
    /// The output buffer failed while rendering text.
    #[error(transparent)]
    Buffer(#[from] StrBufError),
}
