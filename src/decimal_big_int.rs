//! # DecimalBigInt
//! Non-negative arbitrary-precision integers stored as decimal digits.
//! Every arithmetic method mutates its receiver in place and reports failures as [`DecimalError`].
//! # Example
//! ```
//! use decimal_big_int::DecimalBigInt;
//!
//! let mut a = DecimalBigInt::from_u64(999);
//! let b = DecimalBigInt::from_u64(999);
//! a.multiply(&b).unwrap();
//! assert_eq!(a.to_digit_string(), "998001");
//!
//! let mut f = DecimalBigInt::default();
//! f.factorial(25).unwrap();
//! assert_eq!(f.to_string(), "15511210043330985984000000");
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::f64::consts::{LN_10, PI};
use std::fmt::{self, Display};
use std::io::{self, Write};
use std::str::FromStr;

use crate::config::DigitConfig;
use crate::decimal_cache::SMALL_CACHE;
use crate::decimal_constants::*;
use crate::error::{DecimalError, Result};

macro_rules! trim_leading_zero {
    ($digits: expr) => {
        while $digits.len() > 1 && $digits.back() == Some(&0) {
            $digits.pop_back();
        }
    };
}

macro_rules! digit_len_u64 {
    ($n: expr) => {
        match ($n as u64).checked_ilog10() {
            Some(log) => log as usize + 1,
            None => 1,
        }
    };
}

/// A non-negative decimal integer.
///
/// Digits are kept least significant first, so the units digit never moves:
/// carries grow the buffer at the back and power-of-ten shifts push or drain
/// at the front.
#[derive(Debug, Clone)]
pub struct DecimalBigInt {
    digits: VecDeque<u8>,
    config: DigitConfig,
}

// 实现构造
impl DecimalBigInt {
    pub(crate) fn from_raw(digits: VecDeque<u8>, config: DigitConfig) -> Self {
        DecimalBigInt { digits, config }
    }

    pub fn from_u64(val: u64) -> Self {
        if val <= MAX_CONSTANT as u64 {
            return SMALL_CACHE[val as usize].clone();
        }
        let mut digits = VecDeque::with_capacity(U64_DIGITS);
        DecimalBigInt::fill_u64(&mut digits, val);
        DecimalBigInt::from_raw(digits, DigitConfig::default())
    }

    pub fn from_u64_with_config(val: u64, config: DigitConfig) -> Result<Self> {
        config.check(digit_len_u64!(val))?;
        let mut digits = VecDeque::with_capacity(U64_DIGITS);
        DecimalBigInt::fill_u64(&mut digits, val);
        Ok(DecimalBigInt::from_raw(digits, config))
    }

    pub fn from_digit_str(val: &str) -> Result<Self> {
        DecimalBigInt::from_digit_str_with_config(val, DigitConfig::default())
    }

    /// Parses a string of ASCII decimal digits. Leading zeros are kept, so
    /// `"007"` has three digits.
    pub fn from_digit_str_with_config(val: &str, config: DigitConfig) -> Result<Self> {
        if val.is_empty() {
            return Err(DecimalError::EmptyDigitString);
        }
        let mut digits = VecDeque::with_capacity(val.len());
        for (position, character) in val.chars().enumerate() {
            match character.to_digit(RADIX) {
                Some(d) => digits.push_front(d as u8),
                None => return Err(DecimalError::InvalidDigitCharacter { position, character }),
            }
        }
        config.check(digits.len())?;
        Ok(DecimalBigInt::from_raw(digits, config))
    }

    fn fill_u64(digits: &mut VecDeque<u8>, mut val: u64) {
        digits.clear();
        loop {
            digits.push_back((val % RADIX as u64) as u8);
            val /= RADIX as u64;
            if val == 0 {
                break;
            }
        }
    }

    /// Makes the receiver represent `val`, keeping its config and buffer.
    pub fn reset(&mut self, val: u64) -> Result<()> {
        self.config.check(digit_len_u64!(val))?;
        DecimalBigInt::fill_u64(&mut self.digits, val);
        Ok(())
    }

    /// Deep copy of `other`'s digits, leading zeros included.
    /// The receiver keeps its own config.
    pub fn copy_from(&mut self, other: &DecimalBigInt) -> Result<()> {
        self.config.check(other.size())?;
        self.digits.clone_from(&other.digits);
        Ok(())
    }
}

impl Default for DecimalBigInt {
    fn default() -> Self {
        DecimalBigInt::from_u64(0)
    }
}

impl From<u64> for DecimalBigInt {
    fn from(val: u64) -> Self {
        DecimalBigInt::from_u64(val)
    }
}

impl FromStr for DecimalBigInt {
    type Err = DecimalError;

    fn from_str(val: &str) -> Result<Self> {
        DecimalBigInt::from_digit_str(val)
    }
}

impl TryFrom<&str> for DecimalBigInt {
    type Error = DecimalError;

    fn try_from(val: &str) -> Result<Self> {
        DecimalBigInt::from_digit_str(val)
    }
}

// 实现访问
impl DecimalBigInt {
    /// Number of significant digits in use.
    pub fn size(&self) -> usize {
        self.digits.len()
    }

    /// Maximum number of digits this value may grow to.
    pub fn capacity(&self) -> usize {
        self.config.max_digits()
    }

    pub fn config(&self) -> &DigitConfig {
        &self.config
    }

    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|d| *d == 0)
    }

    /// The `n`-th digit, counted from the units digit when
    /// `from_least_significant_end` is set, from the leading digit otherwise.
    pub fn digit(&self, n: usize, from_least_significant_end: bool) -> Result<u8> {
        let size = self.size();
        if n >= size {
            return Err(DecimalError::IndexOutOfRange { index: n, size });
        }
        let index = if from_least_significant_end { n } else { size - 1 - n };
        Ok(self.digits[index])
    }

    pub fn to_digit_string(&self) -> String {
        self.digits.iter().rev().map(|d| DIGITS[*d as usize]).collect()
    }

    /// Digits in groups of three counted from the units end, e.g. `1.234.567`.
    pub fn to_grouped_string(&self, separator: char) -> String {
        let size = self.size();
        let mut s = String::with_capacity(size + size / GROUP_LEN);
        for (i, d) in self.digits.iter().rev().enumerate() {
            if i > 0 && (size - i) % GROUP_LEN == 0 {
                s.push(separator);
            }
            s.push(DIGITS[*d as usize]);
        }
        s
    }

    pub fn to_u64(&self) -> Result<u64> {
        self.to_digit_string().parse::<u64>().map_err(|_| DecimalError::Overflow)
    }

    pub fn print(&self, use_separator: bool) -> io::Result<()> {
        self.write_value(&mut io::stdout().lock(), use_separator)
    }

    pub fn debug(&self) -> io::Result<()> {
        self.write_debug(&mut io::stdout().lock())
    }

    pub fn write_value<W: Write>(&self, out: &mut W, use_separator: bool) -> io::Result<()> {
        if use_separator && self.size() > GROUP_LEN {
            writeln!(out, "{}", self.to_grouped_string(DEFAULT_SEPARATOR))
        } else {
            writeln!(out, "{}", self.to_digit_string())
        }
    }

    pub fn write_debug<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "----------------------")?;
        writeln!(out, "Size: {}", self.size())?;
        writeln!(out, "Maximum size: {}", self.capacity())?;
        write!(out, "Value: ")?;
        self.write_value(out, false)?;
        writeln!(out, "----------------------")
    }
}

// 实现打印
impl Display for DecimalBigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.pad(&self.to_grouped_string(DEFAULT_SEPARATOR))
        } else {
            f.pad(&self.to_digit_string())
        }
    }
}

// 实现大小比较
impl DecimalBigInt {
    fn significant_len(&self) -> usize {
        self.digits.iter().rposition(|d| *d != 0).map_or(1, |pos| pos + 1)
    }

    fn compare_mag(&self, other: &DecimalBigInt) -> Ordering {
        let self_len = self.significant_len();
        let other_len = other.significant_len();
        match self_len.cmp(&other_len) {
            Ordering::Equal => {}
            ord => return ord,
        }
        for pos in (0..self_len).rev() {
            let a = self.digits[pos];
            let b = other.digits[pos];
            if a != b {
                return a.cmp(&b);
            }
        }
        Ordering::Equal
    }
}

impl PartialEq for DecimalBigInt {
    fn eq(&self, other: &Self) -> bool {
        self.compare_mag(other).is_eq()
    }
}
impl Eq for DecimalBigInt {}

impl PartialOrd for DecimalBigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecimalBigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_mag(other)
    }
}

impl DecimalBigInt {
    /// Applies `op` to the digits in place when the result is known to stay
    /// within `bound <= capacity` digits. Otherwise `op` runs on a copy that
    /// is only kept if it fits.
    fn grow_with<F: FnOnce(&mut VecDeque<u8>)>(&mut self, bound: usize, op: F) -> Result<()> {
        if bound <= self.capacity() {
            op(&mut self.digits);
            return Ok(());
        }
        let mut scratch = self.digits.clone();
        op(&mut scratch);
        self.config.check(scratch.len())?;
        self.digits = scratch;
        Ok(())
    }
}

// 实现十进制移位
impl DecimalBigInt {
    /// Appends `k` zeros at the units end, growing the size by `k`.
    pub fn multiply_by_power_of_ten(&mut self, k: usize) -> Result<()> {
        if k == 0 {
            return Ok(());
        }
        self.config.check(self.size().saturating_add(k))?;
        self.digits.reserve(k);
        for _ in 0..k {
            self.digits.push_front(0);
        }
        Ok(())
    }

    /// Drops the `k` lowest digits. Dropping every digit leaves zero.
    pub fn divide_by_power_of_ten(&mut self, k: usize) {
        if k == 0 {
            return;
        }
        if k >= self.size() {
            self.digits.clear();
            self.digits.push_back(0);
            return;
        }
        self.digits.drain(..k);
    }
}

// 实现加法
impl DecimalBigInt {
    /// Adds `other`, widening the receiver to the longer operand first.
    pub fn add(&mut self, other: &DecimalBigInt) -> Result<()> {
        log::trace!("add: {} digits + {} digits", self.size(), other.size());
        let width = self.size().max(other.size());
        self.grow_with(width + 1, |digits| DecimalBigInt::add_digits(digits, &other.digits))
    }

    fn add_digits(x: &mut VecDeque<u8>, y: &VecDeque<u8>) {
        if y.len() > x.len() {
            x.resize(y.len(), 0);
        }
        let mut carry = 0u8;
        for (i, d) in x.iter_mut().enumerate() {
            if i >= y.len() && carry == 0 {
                break;
            }
            let sum = *d + y.get(i).copied().unwrap_or(0) + carry;
            if sum < RADIX as u8 {
                *d = sum;
                carry = 0;
            } else {
                *d = sum - RADIX as u8;
                carry = 1;
            }
        }
        if carry != 0 {
            x.push_back(1);
        }
    }
}

// 实现减法
impl DecimalBigInt {
    /// Subtracts `other`, aligned the same way as [`add`](Self::add).
    /// Fails with `NegativeResult` when `other` is larger, leaving the
    /// receiver untouched.
    pub fn subtract(&mut self, other: &DecimalBigInt) -> Result<()> {
        log::trace!("subtract: {} digits - {} digits", self.size(), other.size());
        if self.compare_mag(other).is_lt() {
            log::debug!("subtract: negative result ({} digits - {} digits)", self.size(), other.size());
            return Err(DecimalError::NegativeResult);
        }
        let width = self.size().max(other.size());
        self.digits.resize(width, 0);
        let mut borrow = 0i8;
        for (i, d) in self.digits.iter_mut().enumerate() {
            let mut difference = *d as i8 - other.digits.get(i).copied().unwrap_or(0) as i8 - borrow;
            if difference < 0 {
                difference += RADIX as i8;
                borrow = 1;
            } else {
                borrow = 0;
            }
            *d = difference as u8;
        }
        trim_leading_zero!(self.digits);
        Ok(())
    }
}

// 实现乘法
impl DecimalBigInt {
    /// Multiplies by `x`, which must not exceed [`MAX_SCALAR`] so that
    /// `digit * x + carry` fits in a `u64`.
    pub fn multiply_by_scalar(&mut self, x: u64) -> Result<()> {
        if x > MAX_SCALAR {
            log::debug!("multiply_by_scalar: {} > {}", x, MAX_SCALAR);
            return Err(DecimalError::ScalarOutOfRange(x));
        }
        let bound = self.size() + digit_len_u64!(x);
        self.grow_with(bound, |digits| DecimalBigInt::mul_digits(digits, x))
    }

    fn mul_digits(digits: &mut VecDeque<u8>, x: u64) {
        let mut carry = 0u64;
        for d in digits.iter_mut() {
            let product = *d as u64 * x + carry;
            *d = (product % RADIX as u64) as u8;
            carry = product / RADIX as u64;
        }
        while carry != 0 {
            digits.push_back((carry % RADIX as u64) as u8);
            carry /= RADIX as u64;
        }
        trim_leading_zero!(digits);
    }

    /// Schoolbook multiplication: one scaled, shifted partial product per
    /// digit of `other`, summed.
    pub fn multiply(&mut self, other: &DecimalBigInt) -> Result<()> {
        log::trace!("multiply: {} digits * {} digits", self.size(), other.size());
        if self.is_zero() || other.is_zero() {
            DecimalBigInt::fill_u64(&mut self.digits, 0);
            return Ok(());
        }
        let mut sum = DecimalBigInt::from_raw(VecDeque::from(vec![0]), self.config);
        let mut partial = DecimalBigInt::from_raw(VecDeque::with_capacity(self.size() + 1), self.config);
        for w in 0..other.size() {
            let d = other.digit(w, true)?;
            if d == 0 {
                continue;
            }
            partial.copy_from(self)?;
            partial.multiply_by_scalar(d as u64)?;
            partial.multiply_by_power_of_ten(w)?;
            sum.add(&partial)?;
        }
        trim_leading_zero!(sum.digits);
        self.digits = sum.digits;
        Ok(())
    }

    /// Raises the value to the `n`-th power.
    ///
    /// The base has to fit in a `u64` (`Overflow` otherwise) and must not
    /// exceed [`MAX_SCALAR`] (`ScalarOutOfRange`) since the result is built
    /// by repeated scalar multiplication.
    pub fn pow(&mut self, n: u32) -> Result<()> {
        let base = self.to_u64()?;
        log::trace!("pow: {}^{}", base, n);
        if n > 0 {
            if base <= 1 {
                DecimalBigInt::fill_u64(&mut self.digits, base);
                return Ok(());
            }
            let required = (n as f64 * (base as f64).log10()).floor() as usize + 1;
            if required > self.capacity().saturating_add(1) {
                log::debug!("pow: ~{} digits exceed capacity {}", required, self.capacity());
                return Err(DecimalError::CapacityExceeded { required, capacity: self.capacity() });
            }
        }
        let mut result = DecimalBigInt::from_raw(VecDeque::from(vec![1]), self.config);
        for _ in 0..n {
            result.multiply_by_scalar(base)?;
        }
        self.digits = result.digits;
        Ok(())
    }
}

// 实现除法
impl DecimalBigInt {
    /// Floor division by `divisor`; the remainder is dropped.
    pub fn divide(&mut self, divisor: u64) -> Result<()> {
        self.divide_with_remainder(divisor).map(|_| ())
    }

    /// Long division from the leading digit. Returns the remainder.
    pub fn divide_with_remainder(&mut self, divisor: u64) -> Result<u64> {
        if divisor == 0 {
            log::debug!("divide: zero divisor");
            return Err(DecimalError::DivisorOutOfRange(divisor));
        }
        log::trace!("divide: {} digits / {}", self.size(), divisor);
        // carry < divisor, so carry * 10 + 9 needs the wider type
        let divisor = divisor as u128;
        let mut carry = 0u128;
        for d in self.digits.iter_mut().rev() {
            let xi = *d as u128 + carry * RADIX as u128;
            let q = xi / divisor;
            carry = xi - q * divisor;
            *d = q as u8;
        }
        trim_leading_zero!(self.digits);
        Ok(carry as u64)
    }
}

// 实现阶乘
impl DecimalBigInt {
    /// Estimated number of decimal digits of `n!` from the Stirling series
    /// for `ln(n!)`. Close but not guaranteed exact.
    pub fn factorial_digit_estimate(n: u64) -> u64 {
        if n < 2 {
            return 1;
        }
        let n = n as f64;
        let ln_fact = n * n.ln() - n + 0.5 * (2.0 * PI * n).ln() + 1.0 / (12.0 * n)
            - 1.0 / (360.0 * n * n * n);
        (ln_fact / LN_10).floor() as u64 + 1
    }

    /// Replaces the value with `n!`.
    pub fn factorial(&mut self, n: u32) -> Result<()> {
        let estimate = DecimalBigInt::factorial_digit_estimate(n as u64) as usize;
        log::trace!("factorial: {}! ~ {} digits", n, estimate);
        // the estimate may be one digit off
        if estimate > self.capacity().saturating_add(1) {
            log::debug!("factorial: ~{} digits exceed capacity {}", estimate, self.capacity());
            return Err(DecimalError::CapacityExceeded { required: estimate, capacity: self.capacity() });
        }
        let mut digits = VecDeque::with_capacity(estimate.min(self.capacity()) + 1);
        digits.push_back(1);
        let mut result = DecimalBigInt::from_raw(digits, self.config);
        for w in 2..=n as u64 {
            result.multiply_by_scalar(w)?;
        }
        self.digits = result.digits;
        Ok(())
    }
}


#[cfg(test)]
mod prop_tests {
    use proptest::prelude::*;

    use super::DecimalBigInt;
    use crate::error::DecimalError;

    proptest! {
        #[test]
        fn add_matches_u64(a in 0..u64::MAX / 2, b in 0..u64::MAX / 2) {
            let mut x = DecimalBigInt::from_u64(a);
            x.add(&DecimalBigInt::from_u64(b)).unwrap();
            prop_assert_eq!(x.to_u64(), Ok(a + b));
        }

        #[test]
        fn multiply_matches_u128(a in any::<u64>(), b in any::<u64>()) {
            let mut x = DecimalBigInt::from_u64(a);
            x.multiply(&DecimalBigInt::from_u64(b)).unwrap();
            prop_assert_eq!(x.to_digit_string(), (a as u128 * b as u128).to_string());
        }

        #[test]
        fn subtract_matches_u64(a in any::<u64>(), b in any::<u64>()) {
            let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
            let mut x = DecimalBigInt::from_u64(hi);
            x.subtract(&DecimalBigInt::from_u64(lo)).unwrap();
            prop_assert_eq!(x.to_u64(), Ok(hi - lo));

            if hi != lo {
                let mut y = DecimalBigInt::from_u64(lo);
                prop_assert_eq!(y.subtract(&DecimalBigInt::from_u64(hi)), Err(DecimalError::NegativeResult));
            }
        }

        #[test]
        fn shift_round_trip(s in "[1-9][0-9]{0,60}", k in 0usize..60) {
            let v = DecimalBigInt::from_digit_str(&s).unwrap();
            let k = k % v.size();
            let mut x = v.clone();
            x.multiply_by_power_of_ten(k).unwrap();
            x.divide_by_power_of_ten(k);
            prop_assert_eq!(x.to_digit_string(), v.to_digit_string());
        }

        #[test]
        fn units_digit(a in any::<u64>()) {
            let x = DecimalBigInt::from_u64(a);
            prop_assert_eq!(x.digit(0, true), Ok((a % 10) as u8));
        }

        #[test]
        fn divide_matches_u64(a in any::<u64>(), d in 1..u64::MAX) {
            let mut x = DecimalBigInt::from_u64(a);
            let r = x.divide_with_remainder(d).unwrap();
            prop_assert_eq!(x.to_u64(), Ok(a / d));
            prop_assert_eq!(r, a % d);
        }
    }
}
