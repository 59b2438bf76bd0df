// src/square_root/composite.rs

use std::fmt;
use log::debug;
use crate::core::static_random::StaticRandom;
use crate::error::{QrError, Result};
use crate::integer_math::gcd::GCD;
use crate::integer_math::modular::ModularArithmetic;
use crate::square_root::finite_field_arithmetic::sqrt_mod_prime_with;

/// Square roots of one residue modulo n = p*q, sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareRootSet {
    modulus: u64,
    roots: Vec<u64>,
}

impl SquareRootSet {
    fn new(modulus: u64, mut roots: Vec<u64>) -> Self {
        roots.sort_unstable();
        roots.dedup();
        SquareRootSet { modulus, roots }
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn roots(&self) -> &[u64] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn contains(&self, root: u64) -> bool {
        self.roots.binary_search(&root).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &u64> {
        self.roots.iter()
    }

    /// Pairs (r, n - r) with r <= n - r.
    pub fn negation_pairs(&self) -> Vec<(u64, u64)> {
        self.roots
            .iter()
            .filter(|&&r| r <= self.modulus - r)
            .map(|&r| (r, (self.modulus - r) % self.modulus))
            .collect()
    }
}

impl fmt::Display for SquareRootSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let roots: Vec<String> = self.roots.iter().map(|r| r.to_string()).collect();
        write!(f, "{{{}}} mod {}", roots.join(", "), self.modulus)
    }
}

/// All square roots of `x` modulo n = p*q for distinct odd primes p, q.
pub fn square_roots_mod_composite(x: i128, p: u64, q: u64) -> Result<SquareRootSet> {
    square_roots_mod_composite_with(x, p, q, None, &mut StaticRandom::new())
}

/// Lifts one root mod p and one root mod q to the roots mod n through
/// A = u·p·r_q and B = v·q·r_p, where u·p + v·q = 1. Then A ≡ 0 (mod p),
/// A ≡ r_q (mod q) and symmetrically for B, so ±A ± B covers every sign
/// combination. Four distinct roots when x is coprime to n; two when x
/// shares a factor with n; one when x ≡ 0.
pub fn square_roots_mod_composite_with(
    x: i128,
    p: u64,
    q: u64,
    max_attempts: Option<usize>,
    random: &mut StaticRandom,
) -> Result<SquareRootSet> {
    if p == q {
        return Err(QrError::InvalidModulus { modulus: p, reason: "composite modulus needs two distinct primes" });
    }
    let n = p.checked_mul(q).ok_or_else(|| {
        QrError::PrecisionOverflow(format!("{} * {} does not fit in 64 bits", p, q))
    })?;

    let root_p = sqrt_mod_prime_with(x, p, max_attempts, random)?;
    let root_q = sqrt_mod_prime_with(x, q, max_attempts, random)?;

    let bezout = GCD::bezout_coefficients(p, q);
    if bezout.gcd != 1 {
        return Err(QrError::InvalidModulus { modulus: n, reason: "factors are not coprime" });
    }

    let u = ModularArithmetic::normalize(bezout.u, n);
    let v = ModularArithmetic::normalize(bezout.v, n);
    let a = ModularArithmetic::mul_mod(ModularArithmetic::mul_mod(u, p, n), root_q, n);
    let b = ModularArithmetic::mul_mod(ModularArithmetic::mul_mod(v, q, n), root_p, n);

    let (a, b) = (a as i128, b as i128);
    let candidates = [a + b, -(a + b), a - b, b - a]
        .iter()
        .map(|&c| ModularArithmetic::normalize(c, n))
        .collect();
    let roots = SquareRootSet::new(n, candidates);

    debug!("Roots of {} mod {} ({} x {}): {}", x, n, p, q, roots);
    Ok(roots)
}
