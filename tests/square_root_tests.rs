// tests/square_root_tests.rs
//
// Integration tests for the square-root pipeline: Jacobi symbol, Cipolla
// mod a prime, Bezout coefficients and the CRT lift to n = p*q.

use qrflip::core::static_random::StaticRandom;
use qrflip::integer_math::modular::ModularArithmetic;
use qrflip::integer_math::prime_sieve::PrimeSieve;
use qrflip::square_root::composite::square_roots_mod_composite_with;
use qrflip::square_root::finite_field_arithmetic::sqrt_mod_prime_with;
use qrflip::{bezout_coefficients, jacobi, power_mod, square_roots_mod_composite, sqrt_mod_prime, QrError};

#[cfg(test)]
mod square_root_tests {
    use super::*;

    #[test]
    fn test_sqrt_nine_mod_seventeen() {
        let root = sqrt_mod_prime(9, 17).unwrap();
        assert!(root == 3 || root == 14, "got {}", root);
    }

    #[test]
    fn test_four_roots_of_four_mod_77() {
        let roots = square_roots_mod_composite(4, 7, 11).unwrap();
        assert_eq!(roots.modulus(), 77);
        assert_eq!(roots.roots(), &[2, 9, 68, 75]);
    }

    #[test]
    fn test_jacobi_agrees_with_euler_criterion() {
        for &p in PrimeSieve::small_primes().iter().skip(1).take(40) {
            for a in 1..p {
                let euler = power_mod(a, (p - 1) / 2, p).unwrap();
                let expected = if euler == 1 { 1 } else { -1 };
                assert_eq!(jacobi(a as i128, p).unwrap(), expected, "a={} p={}", a, p);
            }
        }
    }

    #[test]
    fn test_sqrt_of_every_residue() {
        let mut random = StaticRandom::from_seed(100);
        for p in [17u64, 41, 97, 113, 257, 65_537, 1_000_033] {
            for a in (1..p).step_by(((p / 300) + 1) as usize) {
                if jacobi(a as i128, p).unwrap() != 1 {
                    continue;
                }
                let root = sqrt_mod_prime_with(a as i128, p, None, &mut random).unwrap();
                assert_eq!(ModularArithmetic::mul_mod(root, root, p), a, "a={} p={}", a, p);
            }
        }
    }

    #[test]
    fn test_bezout_identity() {
        for (p, q) in [(7u64, 11u64), (11, 7), (101, 103), (999_983, 1_000_003), (65_537, 17)] {
            let c = bezout_coefficients(p, q);
            assert_eq!(c.u * p as i128 + c.v * q as i128, 1, "p={} q={}", p, q);
        }
    }

    #[test]
    fn test_composite_roots_pair_up() {
        let mut random = StaticRandom::from_seed(101);
        let pairs = [(7u64, 11u64), (13, 17), (101, 113), (65_537, 1_000_033), (999_983, 999_979)];
        for (p, q) in pairs {
            let n = p * q;
            for _ in 0..25 {
                let r = random.next_range(1, n);
                if r % p == 0 || r % q == 0 {
                    continue;
                }
                let x = ModularArithmetic::mul_mod(r, r, n);
                let roots = square_roots_mod_composite_with(x as i128, p, q, None, &mut random).unwrap();

                assert_eq!(roots.len(), 4, "x={} n={}", x, n);
                assert!(roots.contains(r));
                assert!(roots.contains(n - r));
                for &root in roots.iter() {
                    assert!(root < n);
                    assert_eq!(ModularArithmetic::mul_mod(root, root, n), x);
                }
                let pairs = roots.negation_pairs();
                assert_eq!(pairs.len(), 2);
                for (low, high) in pairs {
                    assert_eq!(low + high, n);
                }
            }
        }
    }

    #[test]
    fn test_non_residue_is_reported() {
        // 3 is a non-residue mod 7
        match square_roots_mod_composite(3, 7, 11) {
            Err(QrError::NonResidue { value, modulus }) => {
                assert_eq!((value, modulus), (3, 7));
            }
            other => panic!("expected NonResidue, got {:?}", other),
        }
    }
}
