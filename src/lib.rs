//! Decimal Big Int \
//! This crate provides:
//! - [`DecimalBigInt`]: Mutable, non-negative arbitrary-precision integers kept as decimal digits,
//!   with addition, subtraction, scalar and big multiplication, power-of-ten shifts, scalar division,
//!   exponentiation and factorial.
//! - [`DigitConfig`]: the per-value digit capacity and radix.
//! - [`DecimalError`]: every recoverable failure of the above.
//!
//! ```
//! use decimal_big_int::{DecimalBigInt, DecimalError};
//!
//! let mut a: DecimalBigInt = "123".parse().unwrap();
//! a.add(&DecimalBigInt::from_u64(877)).unwrap();
//! assert_eq!(a.to_string(), "1000");
//!
//! assert_eq!(a.subtract(&DecimalBigInt::from_u64(1001)), Err(DecimalError::NegativeResult));
//! ```

mod config;
mod decimal_big_int;
mod decimal_cache;
mod decimal_constants;
mod error;

pub use config::DigitConfig;
pub use decimal_big_int::DecimalBigInt;
pub use decimal_constants::{DEFAULT_MAX_DIGITS, MAX_SCALAR};
pub use error::{DecimalError, Result};

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Write;

    use env_logger::Builder;
    use log::LevelFilter;

    use crate::{DecimalBigInt, DecimalError};

    pub fn init_logger(is_test: bool) {
        let _ = Builder::new()
            .format(|buf, record| {
                writeln!(buf, "[{}] {} - {}", record.level(), record.target(), record.args())
            })
            .filter(None, LevelFilter::Trace)
            .is_test(is_test)
            .try_init();
    }

    #[test]
    fn it_works() {
        init_logger(true);
        let a: DecimalBigInt = "10000000000000".parse().unwrap();
        let b: DecimalBigInt = "900000000000".parse().unwrap();
        println!("a = {}", a);
        let mut c = a.clone();
        c.add(&b).unwrap();
        println!("a + b = {}", c);
        let mut c = a.clone();
        c.subtract(&b).unwrap();
        println!("a - b = {}", c);
        let mut c = a.clone();
        c.multiply(&b).unwrap();
        println!("a * b = {:#}", c);
        let mut c = a.clone();
        c.divide(7).unwrap();
        println!("a / 7 = {}", c);
        c.debug().unwrap();
    }

    #[test]
    fn scenarios() {
        init_logger(true);
        let mut a = DecimalBigInt::from_u64(123);
        a.add(&DecimalBigInt::from_u64(877)).unwrap();
        assert_eq!(a.to_digit_string(), "1000");

        let mut a = DecimalBigInt::from_u64(999);
        a.multiply(&DecimalBigInt::from_u64(999)).unwrap();
        assert_eq!(a.to_digit_string(), "998001");

        let mut a = DecimalBigInt::from_digit_str("1000").unwrap();
        a.divide_by_power_of_ten(2);
        assert_eq!(a.to_digit_string(), "10");

        let mut a = DecimalBigInt::default();
        a.factorial(5).unwrap();
        assert_eq!(a.to_digit_string(), "120");

        let mut a = DecimalBigInt::from_u64(7);
        a.divide(2).unwrap();
        assert_eq!(a.to_digit_string(), "3");

        assert!(matches!(
            DecimalBigInt::from_digit_str("12a3"),
            Err(DecimalError::InvalidDigitCharacter { .. })
        ));
    }

    #[test]
    fn values_are_independent_across_threads() {
        let handles: Vec<_> = (1..=4u32)
            .map(|n| {
                std::thread::spawn(move || {
                    let mut a = DecimalBigInt::default();
                    a.factorial(n * 10).unwrap();
                    a.size()
                })
            })
            .collect();
        let sizes: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(sizes, vec![7, 19, 33, 48]);
    }
}
