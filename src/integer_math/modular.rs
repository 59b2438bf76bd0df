// src/integer_math/modular.rs

use crate::error::{QrError, Result};

pub struct ModularArithmetic;

impl ModularArithmetic {
    /// base^exponent mod modulus by right-to-left square-and-multiply.
    ///
    /// Products are widened to u128 and reduced after every multiply, so the
    /// full u64 range is safe.
    pub fn power_mod(base: u64, exponent: u64, modulus: u64) -> Result<u64> {
        if modulus < 2 {
            return Err(QrError::InvalidModulus { modulus, reason: "modulus must be at least 2" });
        }

        let mut result = 1u64;
        let mut base = base % modulus;
        let mut exponent = exponent;

        while exponent > 0 {
            if exponent & 1 == 1 {
                result = Self::mul_mod(result, base, modulus);
            }
            base = Self::mul_mod(base, base, modulus);
            exponent >>= 1;
        }

        Ok(result)
    }

    /// (a * b) mod modulus. `modulus` must be non-zero.
    #[inline]
    pub fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
        (a as u128 * b as u128 % modulus as u128) as u64
    }

    /// Maps any signed value into [0, modulus).
    #[inline]
    pub fn normalize(value: i128, modulus: u64) -> u64 {
        value.rem_euclid(modulus as i128) as u64
    }
}
