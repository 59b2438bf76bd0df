// src/square_root/square_finder.rs

use log::{debug, info};
use crate::config::EngineConfig;
use crate::core::static_random::StaticRandom;
use crate::error::{QrError, Result};
use crate::integer_math::factorization_factory::FactorizationFactory;
use crate::integer_math::prime_factory::PrimeFactory;
use crate::square_root::composite::{square_roots_mod_composite_with, SquareRootSet};
use crate::square_root::finite_field_arithmetic::sqrt_mod_prime_with;

/// Configured entry point: owns the random stream, the Miller-Rabin round
/// count and the retry cap shared by every randomized step.
pub struct SquareFinder {
    random: StaticRandom,
    rounds: usize,
    max_attempts: Option<usize>,
}

impl SquareFinder {
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_random(config, StaticRandom::new())
    }

    pub fn with_random(config: &EngineConfig, random: StaticRandom) -> Self {
        SquareFinder {
            random,
            rounds: config.miller_rabin_rounds,
            max_attempts: config.max_attempts,
        }
    }

    pub fn is_probable_prime(&mut self, candidate: u64) -> bool {
        FactorizationFactory::is_probable_prime_with(candidate, self.rounds, &mut self.random)
    }

    pub fn generate_prime(&mut self, digit_count: u32) -> Result<u64> {
        PrimeFactory::generate_prime_with(digit_count, self.rounds, self.max_attempts, &mut self.random)
    }

    /// Two different odd primes of `digit_count` digits, suitable as the factors of n.
    pub fn generate_distinct_primes(&mut self, digit_count: u32) -> Result<(u64, u64)> {
        let p = self.generate_odd_prime(digit_count)?;
        let mut attempts = 0usize;
        loop {
            self.check_attempts("distinct prime generation", attempts)?;
            attempts += 1;

            let q = self.generate_odd_prime(digit_count)?;
            if q != p {
                info!("Generated factors p={} q={}", p, q);
                return Ok((p, q));
            }
            debug!("Drew {} twice, resampling", p);
        }
    }

    /// Square roots mod 2 fall outside Cipolla, so 2 is resampled.
    fn generate_odd_prime(&mut self, digit_count: u32) -> Result<u64> {
        let mut attempts = 0usize;
        loop {
            self.check_attempts("odd prime generation", attempts)?;
            attempts += 1;

            let p = self.generate_prime(digit_count)?;
            if p != 2 {
                return Ok(p);
            }
        }
    }

    fn check_attempts(&self, operation: &'static str, attempts: usize) -> Result<()> {
        match self.max_attempts {
            Some(limit) if attempts >= limit => Err(QrError::ExhaustedRetries { operation, attempts }),
            _ => Ok(()),
        }
    }

    pub fn sqrt_mod_prime(&mut self, a: i128, p: u64) -> Result<u64> {
        sqrt_mod_prime_with(a, p, self.max_attempts, &mut self.random)
    }

    pub fn square_roots_mod_composite(&mut self, x: i128, p: u64, q: u64) -> Result<SquareRootSet> {
        square_roots_mod_composite_with(x, p, q, self.max_attempts, &mut self.random)
    }

    /// A random unit mod n = p*q, for building a residue with four roots.
    /// `p` and `q` must be distinct odd primes.
    pub fn random_unit(&mut self, p: u64, q: u64) -> Result<u64> {
        for modulus in [p, q] {
            if modulus < 3 || modulus % 2 == 0 {
                return Err(QrError::InvalidModulus { modulus, reason: "factors must be odd primes" });
            }
        }
        if p == q {
            return Err(QrError::InvalidModulus { modulus: p, reason: "composite modulus needs two distinct primes" });
        }
        let n = p.checked_mul(q).ok_or_else(|| {
            QrError::PrecisionOverflow(format!("{} * {} does not fit in 64 bits", p, q))
        })?;
        let mut attempts = 0usize;
        loop {
            self.check_attempts("random unit", attempts)?;
            attempts += 1;

            let r = self.random.next_range(1, n);
            if r % p != 0 && r % q != 0 {
                return Ok(r);
            }
        }
    }
}
