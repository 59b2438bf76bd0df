// src/integer_math/prime_sieve.rs

use lazy_static::lazy_static;
use log::debug;

/// Upper bound (exclusive) of the process-wide small prime table.
pub const SMALL_PRIME_LIMIT: u64 = 10_000;

lazy_static! {
    static ref SMALL_PRIMES: Vec<u64> = {
        let primes = PrimeSieve::primes_below(SMALL_PRIME_LIMIT);
        debug!("Built small prime table: {} primes below {}", primes.len(), SMALL_PRIME_LIMIT);
        primes
    };
}

pub struct PrimeSieve;

impl PrimeSieve {
    /// Sieve of Eratosthenes over [2, limit).
    pub fn primes_below(limit: u64) -> Vec<u64> {
        if limit <= 2 {
            return vec![];
        }

        let size = limit as usize;
        let mut composite = vec![false; size];
        let mut p = 2usize;
        while p * p < size {
            if !composite[p] {
                let mut multiple = p * p;
                while multiple < size {
                    composite[multiple] = true;
                    multiple += p;
                }
            }
            p += 1;
        }

        (2..size).filter(|&i| !composite[i]).map(|i| i as u64).collect()
    }

    /// The cached table of primes below SMALL_PRIME_LIMIT. Built on first use.
    pub fn small_primes() -> &'static [u64] {
        &SMALL_PRIMES
    }

    /// True if some table prime divides `candidate` and is not `candidate` itself.
    pub fn has_small_factor(candidate: u64) -> bool {
        if candidate == 0 {
            return true;
        }
        Self::small_primes()
            .iter()
            .take_while(|&&p| p < candidate)
            .any(|&p| candidate % p == 0)
    }

    pub fn is_small_prime(value: u64) -> bool {
        value < SMALL_PRIME_LIMIT && Self::small_primes().binary_search(&value).is_ok()
    }
}
