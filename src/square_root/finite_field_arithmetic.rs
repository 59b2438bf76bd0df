// src/square_root/finite_field_arithmetic.rs

use log::trace;
use crate::core::static_random::StaticRandom;
use crate::error::{QrError, Result};
use crate::integer_math::legendre::Legendre;
use crate::integer_math::modular::ModularArithmetic;

/// x + y·√w in F_p[√w], where w is a non-residue mod p.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionElement {
    pub x: u64,
    pub y: u64,
}

/// The field F_p[√w]. All components stay reduced into [0, p).
#[derive(Debug, Clone, Copy)]
pub struct QuadraticExtension {
    p: u64,
    w: u64,
}

impl QuadraticExtension {
    pub fn new(p: u64, w: u64) -> Self {
        QuadraticExtension { p, w: w % p }
    }

    /// (a + b√w)(c + d√w) = (ac + bdw) + (ad + bc)√w
    pub fn multiply(&self, left: ExtensionElement, right: ExtensionElement) -> ExtensionElement {
        let p = self.p;
        let bd = ModularArithmetic::mul_mod(left.y, right.y, p);
        let x = (ModularArithmetic::mul_mod(left.x, right.x, p) as u128
            + ModularArithmetic::mul_mod(bd, self.w, p) as u128)
            % p as u128;
        let y = (ModularArithmetic::mul_mod(left.x, right.y, p) as u128
            + ModularArithmetic::mul_mod(left.y, right.x, p) as u128)
            % p as u128;
        ExtensionElement { x: x as u64, y: y as u64 }
    }

    pub fn power(&self, base: ExtensionElement, exponent: u64) -> ExtensionElement {
        let mut result = ExtensionElement { x: 1, y: 0 };
        let mut base = base;
        let mut exponent = exponent;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = self.multiply(result, base);
            }
            base = self.multiply(base, base);
            exponent >>= 1;
        }
        result
    }
}

/// A square root of `a` modulo the odd prime `p`, in [0, p).
pub fn sqrt_mod_prime(a: i128, p: u64) -> Result<u64> {
    sqrt_mod_prime_with(a, p, None, &mut StaticRandom::new())
}

/// Cipolla's algorithm, with a direct exponentiation when p = 3 mod 4.
///
/// Non-residues are rejected up front with `NonResidue`. Each random witness
/// `t` is a success with probability about 1/2, so `max_attempts` only caps
/// a loop that is already short in expectation.
pub fn sqrt_mod_prime_with(a: i128, p: u64, max_attempts: Option<usize>, random: &mut StaticRandom) -> Result<u64> {
    if p < 3 || p % 2 == 0 {
        return Err(QrError::InvalidModulus { modulus: p, reason: "square roots need an odd prime modulus" });
    }

    let a = ModularArithmetic::normalize(a, p);
    match Legendre::jacobi(a as i128, p)? {
        0 => return Ok(0),
        -1 => return Err(QrError::NonResidue { value: a, modulus: p }),
        _ => {}
    }

    if p % 4 == 3 {
        return ModularArithmetic::power_mod(a, (p + 1) / 4, p);
    }

    let mut attempts = 0usize;
    let (t, w) = loop {
        if let Some(limit) = max_attempts {
            if attempts >= limit {
                return Err(QrError::ExhaustedRetries { operation: "Cipolla witness search", attempts });
            }
        }
        attempts += 1;

        let t = random.next_range(1, p);
        let w = ModularArithmetic::normalize(
            ModularArithmetic::mul_mod(t, t, p) as i128 - a as i128,
            p,
        );
        if Legendre::jacobi(w as i128, p)? == -1 {
            break (t, w);
        }
    };
    trace!("Cipolla mod {}: t={} w={} after {} witnesses", p, t, w, attempts);

    // (t + √w)^((p+1)/2) lies in F_p, so only x is needed
    let field = QuadraticExtension::new(p, w);
    let root = field.power(ExtensionElement { x: t, y: 1 }, (p + 1) / 2);
    Ok(root.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer_math::prime_sieve::PrimeSieve;

    #[test]
    fn test_sqrt_nine_mod_seventeen() {
        let mut random = StaticRandom::from_seed(17);
        for _ in 0..20 {
            let root = sqrt_mod_prime_with(9, 17, None, &mut random).unwrap();
            assert!(root == 3 || root == 14, "got {}", root);
        }
    }

    #[test]
    fn test_fast_path_three_mod_four() {
        assert_eq!(sqrt_mod_prime(4, 7).unwrap(), 2);
        assert_eq!(sqrt_mod_prime(4, 11).unwrap(), 9);
    }

    #[test]
    fn test_every_residue_of_small_primes() {
        let mut random = StaticRandom::from_seed(5);
        for &p in PrimeSieve::small_primes().iter().skip(1).take(80) {
            for a in 1..p {
                if Legendre::jacobi(a as i128, p).unwrap() != 1 {
                    continue;
                }
                let root = sqrt_mod_prime_with(a as i128, p, None, &mut random).unwrap();
                assert!(root < p);
                assert_eq!(ModularArithmetic::mul_mod(root, root, p), a, "a={} p={}", a, p);
            }
        }
    }

    #[test]
    fn test_large_one_mod_four_prime() {
        // 10^18 + 9 = 1 mod 4
        let p = 1_000_000_000_000_000_009u64;
        let mut random = StaticRandom::from_seed(9);
        let r = 123_456_789_012_345u64;
        let a = ModularArithmetic::mul_mod(r, r, p);
        let root = sqrt_mod_prime_with(a as i128, p, None, &mut random).unwrap();
        assert!(root == r || root == p - r);
    }

    #[test]
    fn test_zero_and_negative_inputs() {
        assert_eq!(sqrt_mod_prime(0, 13).unwrap(), 0);
        assert_eq!(sqrt_mod_prime(26, 13).unwrap(), 0);
        // -4 = 9 mod 13
        let root = sqrt_mod_prime(-4, 13).unwrap();
        assert_eq!(root * root % 13, 9);
    }

    #[test]
    fn test_non_residue_rejected() {
        assert_eq!(sqrt_mod_prime(3, 7), Err(QrError::NonResidue { value: 3, modulus: 7 }));
        assert_eq!(sqrt_mod_prime(5, 13), Err(QrError::NonResidue { value: 5, modulus: 13 }));
    }

    #[test]
    fn test_invalid_modulus() {
        assert!(matches!(sqrt_mod_prime(4, 2), Err(QrError::InvalidModulus { .. })));
        assert!(matches!(sqrt_mod_prime(4, 10), Err(QrError::InvalidModulus { .. })));
    }

    #[test]
    fn test_witness_cap() {
        let mut random = StaticRandom::from_seed(4);
        let result = sqrt_mod_prime_with(9, 17, Some(0), &mut random);
        assert_eq!(result, Err(QrError::ExhaustedRetries { operation: "Cipolla witness search", attempts: 0 }));
    }

    #[test]
    fn test_extension_power_matches_repeated_multiplication() {
        let (p, w) = (13u64, 5u64);
        let field = QuadraticExtension::new(p, w);
        let base = ExtensionElement { x: 4, y: 1 };
        let mut expected = base;
        for k in 1..30u64 {
            assert_eq!(field.power(base, k), expected);
            expected = field.multiply(expected, base);
        }
    }
}
