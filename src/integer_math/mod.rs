// src/integer_math/mod.rs

pub mod factorization_factory;
pub mod gcd;
pub mod legendre;
pub mod modular;
pub mod prime_factory;
pub mod prime_sieve;
pub mod quadratic_residue;
