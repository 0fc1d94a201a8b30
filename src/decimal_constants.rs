pub const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub const RADIX: u32 = 10;

pub const DEFAULT_MAX_DIGITS: usize = 1_000_000;

/// Largest multiplier accepted by `multiply_by_scalar`.
/// `9 * x + carry` stays below `10 * x`, which must fit in a `u64`.
pub const MAX_SCALAR: u64 = u64::MAX / RADIX as u64;

/// Decimal digit count of `u64::MAX`.
pub const U64_DIGITS: usize = 20;

pub const MAX_CONSTANT: usize = 16;

pub const GROUP_LEN: usize = 3;

pub const DEFAULT_SEPARATOR: char = '.';
