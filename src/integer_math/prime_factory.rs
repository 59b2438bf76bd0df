// src/integer_math/prime_factory.rs

use log::debug;
use crate::core::static_random::StaticRandom;
use crate::error::{QrError, Result};
use crate::integer_math::factorization_factory::{FactorizationFactory, DEFAULT_ROUNDS};
use crate::integer_math::prime_sieve::PrimeSieve;

/// Largest digit count whose range [10^(d-1), 10^d) fits in a u64 (10^19 < 2^64).
pub const MAX_PRIME_DIGITS: u32 = 19;

pub struct PrimeFactory;

impl PrimeFactory {
    /// A random probable prime with exactly `digit_count` decimal digits.
    pub fn generate_prime_with_digit_count(digit_count: u32) -> Result<u64> {
        Self::generate_prime_with(digit_count, DEFAULT_ROUNDS, None, &mut StaticRandom::new())
    }

    /// Samples uniformly from the digit range until a candidate survives the
    /// small-factor sieve and `rounds` Miller-Rabin witnesses. The expected
    /// number of samples grows linearly with `digit_count`; `max_attempts`
    /// bounds it when set.
    pub fn generate_prime_with(
        digit_count: u32,
        rounds: usize,
        max_attempts: Option<usize>,
        random: &mut StaticRandom,
    ) -> Result<u64> {
        let mut attempts = 0usize;
        loop {
            if let Some(limit) = max_attempts {
                if attempts >= limit {
                    return Err(QrError::ExhaustedRetries { operation: "prime generation", attempts });
                }
            }
            attempts += 1;

            let candidate = Self::random_integer_of_length(digit_count, random)?;
            if !PrimeSieve::has_small_factor(candidate)
                && FactorizationFactory::is_probable_prime_with(candidate, rounds, random)
            {
                debug!("Found {}-digit prime {} after {} candidates", digit_count, candidate, attempts);
                return Ok(candidate);
            }
        }
    }

    /// Uniform in [10^(digit_count-1), 10^digit_count).
    pub fn random_integer_of_length(digit_count: u32, random: &mut StaticRandom) -> Result<u64> {
        let (low, high) = Self::digit_range(digit_count)?;
        Ok(Self::random_integer_between(low, high, random))
    }

    /// Uniform in [min, max).
    pub fn random_integer_between(min: u64, max: u64, random: &mut StaticRandom) -> u64 {
        random.next_range(min, max)
    }

    pub fn digit_range(digit_count: u32) -> Result<(u64, u64)> {
        if digit_count == 0 {
            return Err(QrError::InvalidDigitCount(digit_count));
        }
        if digit_count > MAX_PRIME_DIGITS {
            return Err(QrError::PrecisionOverflow(format!(
                "{} digit primes exceed the {} digit limit of u64 arithmetic",
                digit_count, MAX_PRIME_DIGITS
            )));
        }
        Ok((10u64.pow(digit_count - 1), 10u64.pow(digit_count)))
    }
}
