use thiserror::Error;

/// Everything that can go wrong while building or operating on a
/// [`DecimalBigInt`](crate::DecimalBigInt).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalError {
    #[error("invalid digit character {character:?} at position {position}")]
    InvalidDigitCharacter { position: usize, character: char },

    #[error("empty digit string")]
    EmptyDigitString,

    #[error("digit index {index} out of range for a value of {size} digits")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("result needs {required} digits but capacity is {capacity}")]
    CapacityExceeded { required: usize, capacity: usize },

    #[error("overflow: value too large for a native integer")]
    Overflow,

    #[error("scalar {0} out of range")]
    ScalarOutOfRange(u64),

    #[error("divisor {0} out of range")]
    DivisorOutOfRange(u64),

    #[error("subtraction would produce a negative result")]
    NegativeResult,

    #[error("unsupported radix {0}, only base 10 is implemented")]
    UnsupportedRadix(u32),

    #[error("invalid digit capacity {0}")]
    InvalidCapacity(usize),
}

pub type Result<T> = core::result::Result<T, DecimalError>;
