// src/integer_math/factorization_factory.rs

use log::trace;
use crate::core::static_random::StaticRandom;
use crate::integer_math::modular::ModularArithmetic;
use crate::integer_math::prime_sieve::{PrimeSieve, SMALL_PRIME_LIMIT};

/// Witness rounds used for prime generation. False positive rate <= 4^-100.
pub const DEFAULT_ROUNDS: usize = 100;

pub struct FactorizationFactory;

impl FactorizationFactory {
    /// Miller-Rabin with `rounds` random witnesses, drawing its own randomness.
    /// A `rounds` of 0 runs one witness.
    pub fn is_probable_prime(input: u64, rounds: usize) -> bool {
        Self::is_probable_prime_with(input, rounds, &mut StaticRandom::new())
    }

    pub fn is_probable_prime_with(input: u64, rounds: usize, random: &mut StaticRandom) -> bool {
        if input < SMALL_PRIME_LIMIT {
            return PrimeSieve::is_small_prime(input);
        }
        if PrimeSieve::has_small_factor(input) {
            return false;
        }

        let rounds = rounds.max(1);
        let (d, s) = Self::separate_two_factor(input - 1);
        let minus_one = input - 1;

        'witness: for round in 0..rounds {
            let a = random.next_range(2, input - 1);
            let mut x = match ModularArithmetic::power_mod(a, d, input) {
                Ok(x) => x,
                Err(_) => return false,
            };
            if x == 1 || x == minus_one {
                continue 'witness;
            }
            for _ in 1..s {
                x = ModularArithmetic::mul_mod(x, x, input);
                if x == minus_one {
                    continue 'witness;
                }
                if x == 1 {
                    trace!("{} composite: nontrivial root of unity on round {}", input, round);
                    return false;
                }
            }
            trace!("{} composite: witness {} on round {}", input, a, round);
            return false;
        }
        true
    }

    /// Splits n into (d, s) with n = d * 2^s and d odd. n must be non-zero.
    pub fn separate_two_factor(n: u64) -> (u64, u32) {
        let s = n.trailing_zeros();
        (n >> s, s)
    }
}
