use crate::decimal_constants::{DEFAULT_MAX_DIGITS, RADIX};
use crate::error::{DecimalError, Result};

/// Per-value settings: how many digits a value may grow to, and its radix.
///
/// Only radix 10 is supported, the arithmetic is written for decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitConfig {
    max_digits: usize,
    radix: u32,
}

impl Default for DigitConfig {
    fn default() -> Self {
        DigitConfig { max_digits: DEFAULT_MAX_DIGITS, radix: RADIX }
    }
}

impl DigitConfig {
    pub fn new(max_digits: usize) -> Result<Self> {
        if max_digits == 0 {
            return Err(DecimalError::InvalidCapacity(max_digits));
        }
        Ok(DigitConfig { max_digits, radix: RADIX })
    }

    pub fn with_radix(self, radix: u32) -> Result<Self> {
        if radix != RADIX {
            return Err(DecimalError::UnsupportedRadix(radix));
        }
        Ok(DigitConfig { radix, ..self })
    }

    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Fails with `CapacityExceeded` when `required` digits do not fit.
    pub(crate) fn check(&self, required: usize) -> Result<()> {
        if required > self.max_digits {
            log::debug!("capacity exceeded: {} > {}", required, self.max_digits);
            return Err(DecimalError::CapacityExceeded { required, capacity: self.max_digits });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = DigitConfig::default();
        assert_eq!(config.max_digits(), 1_000_000);
        assert_eq!(config.radix(), 10);
    }

    #[test]
    fn rejects_zero_capacity() {
        assert_eq!(DigitConfig::new(0), Err(DecimalError::InvalidCapacity(0)));
        assert_eq!(DigitConfig::new(5).map(|c| c.max_digits()), Ok(5));
    }

    #[test]
    fn only_decimal_radix() {
        let config = DigitConfig::default();
        assert_eq!(config.with_radix(10), Ok(config));
        assert_eq!(config.with_radix(16), Err(DecimalError::UnsupportedRadix(16)));
    }

    #[test]
    fn check_capacity() {
        let config = DigitConfig::new(3).unwrap();
        assert!(config.check(3).is_ok());
        assert_eq!(
            config.check(4),
            Err(DecimalError::CapacityExceeded { required: 4, capacity: 3 })
        );
    }
}
