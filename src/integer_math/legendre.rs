// src/integer_math/legendre.rs

use crate::error::{QrError, Result};
use crate::integer_math::modular::ModularArithmetic;

pub struct Legendre;

impl Legendre {
    /// Jacobi symbol (a | b) for odd b > 0, in {-1, 0, 1}.
    ///
    /// For prime b this is the Legendre symbol: 1 for a nonzero quadratic
    /// residue, -1 for a non-residue, 0 when b divides a. Uses reciprocity and
    /// the second supplement instead of exponentiation.
    pub fn jacobi(a: i128, b: u64) -> Result<i32> {
        if b == 0 || b % 2 == 0 {
            return Err(QrError::InvalidModulus { modulus: b, reason: "Jacobi symbol needs an odd positive modulus" });
        }

        let mut a = ModularArithmetic::normalize(a, b);
        let mut b = b;
        let mut result = 1;

        while b > 1 {
            a %= b;
            if a == 0 {
                return Ok(0);
            }

            let s = a.trailing_zeros();
            a >>= s;
            // (2 | b) = -1 when b = 3 or 5 mod 8
            if s & 1 == 1 && matches!(b & 7, 3 | 5) {
                result = -result;
            }

            if a & 3 == 3 && b & 3 == 3 {
                result = -result;
            }
            std::mem::swap(&mut a, &mut b);
        }

        Ok(result)
    }

    /// Euler's criterion a^((p-1)/2) mod p, in its raw form {0, 1, p-1}.
    pub fn euler_criterion(a: i128, p: u64) -> Result<u64> {
        if p < 3 || p % 2 == 0 {
            return Err(QrError::InvalidModulus { modulus: p, reason: "Legendre symbol needs an odd prime" });
        }
        let a = ModularArithmetic::normalize(a, p);
        ModularArithmetic::power_mod(a, (p - 1) / 2, p)
    }

    /// Legendre symbol via Euler's criterion, with p-1 mapped to -1.
    pub fn symbol(a: i128, p: u64) -> Result<i32> {
        let raw = Self::euler_criterion(a, p)?;
        Ok(match raw {
            0 => 0,
            1 => 1,
            _ => -1,
        })
    }
}
