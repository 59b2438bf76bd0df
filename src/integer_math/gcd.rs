// src/integer_math/gcd.rs

use num::Integer;

/// Coefficients with `u * p + v * q == gcd` for the (p, q) they were computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BezoutCoefficients {
    pub u: i128,
    pub v: i128,
    pub gcd: u64,
}

pub struct GCD;

impl GCD {
    pub fn find_gcd_pair(left: u64, right: u64) -> u64 {
        left.gcd(&right)
    }

    pub fn are_coprime(left: u64, right: u64) -> bool {
        Self::find_gcd_pair(left, right) == 1
    }

    /// Extended Euclid on (max(p, q), min(p, q)), tracking the coefficient of
    /// each input alongside the remainders.
    pub fn bezout_coefficients(p: u64, q: u64) -> BezoutCoefficients {
        let (larger, smaller) = if p >= q { (p, q) } else { (q, p) };

        let (mut old_r, mut r) = (larger as i128, smaller as i128);
        let (mut old_s, mut s) = (1i128, 0i128);
        let (mut old_t, mut t) = (0i128, 1i128);

        while r != 0 {
            let quotient = old_r / r;
            (old_r, r) = (r, old_r - quotient * r);
            (old_s, s) = (s, old_s - quotient * s);
            (old_t, t) = (t, old_t - quotient * t);
        }

        // old_s belongs to the larger input, old_t to the smaller
        let (u, v) = if p >= q { (old_s, old_t) } else { (old_t, old_s) };
        BezoutCoefficients { u, v, gcd: old_r as u64 }
    }
}
