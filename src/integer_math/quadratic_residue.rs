// src/integer_math/quadratic_residue.rs

use crate::error::Result;
use crate::integer_math::legendre::Legendre;

pub struct QuadraticResidue;

impl QuadraticResidue {
    /// True if `a` is a nonzero square mod the odd prime `p`.
    pub fn is_quadratic_residue(a: i128, p: u64) -> Result<bool> {
        Ok(Legendre::jacobi(a, p)? == 1)
    }

    /// True if `x` has a square root mod p*q, i.e. mod each prime factor.
    /// Multiples of a factor count as residues since 0 is a square.
    pub fn is_residue_mod_composite(x: i128, p: u64, q: u64) -> Result<bool> {
        Ok(Legendre::jacobi(x, p)? >= 0 && Legendre::jacobi(x, q)? >= 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residues_mod_seventeen() {
        let squares: Vec<i128> = (1..17).map(|r: i128| r * r % 17).collect();
        for a in 1..17 {
            assert_eq!(QuadraticResidue::is_quadratic_residue(a, 17).unwrap(), squares.contains(&a));
        }
        assert!(!QuadraticResidue::is_quadratic_residue(0, 17).unwrap());
    }

    #[test]
    fn test_residue_mod_composite() {
        assert!(QuadraticResidue::is_residue_mod_composite(4, 7, 11).unwrap());
        // 3 is a non-residue mod 7
        assert!(!QuadraticResidue::is_residue_mod_composite(3, 7, 11).unwrap());
        // 14 = 0 mod 7 and 3 mod 11, a residue mod 11
        assert!(QuadraticResidue::is_residue_mod_composite(14, 7, 11).unwrap());
    }
}
