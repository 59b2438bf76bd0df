// src/lib.rs

//! Quadratic-residue arithmetic for a fair coin flip over n = p*q.
//!
//! Probable primes, the Jacobi symbol, square roots modulo a prime
//! (Cipolla), Bezout coefficients and the CRT lift to the four square
//! roots modulo n.

pub mod config;
pub mod core;
pub mod error;
pub mod integer_math;
pub mod square_root;

pub use error::{QrError, Result};
pub use square_root::composite::{square_roots_mod_composite, SquareRootSet};
pub use square_root::finite_field_arithmetic::sqrt_mod_prime;
pub use square_root::square_finder::SquareFinder;

use integer_math::factorization_factory::FactorizationFactory;
use integer_math::gcd::{BezoutCoefficients, GCD};
use integer_math::legendre::Legendre;
use integer_math::modular::ModularArithmetic;
use integer_math::prime_factory::PrimeFactory;

pub fn power_mod(base: u64, exponent: u64, modulus: u64) -> Result<u64> {
    ModularArithmetic::power_mod(base, exponent, modulus)
}

pub fn is_probable_prime(candidate: u64, rounds: usize) -> bool {
    FactorizationFactory::is_probable_prime(candidate, rounds)
}

pub fn generate_prime_with_digit_count(digit_count: u32) -> Result<u64> {
    PrimeFactory::generate_prime_with_digit_count(digit_count)
}

pub fn jacobi(a: i128, b: u64) -> Result<i32> {
    Legendre::jacobi(a, b)
}

pub fn bezout_coefficients(p: u64, q: u64) -> BezoutCoefficients {
    GCD::bezout_coefficients(p, q)
}
