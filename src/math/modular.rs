//! Modular arithmetic on native `u64` values.
//!
//! Products are formed in 128 bits and reduced, so any modulus that fits in a `u64`
//! is safe.

/// `(a * b) mod m` through a 128-bit intermediate.
#[inline]
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// `base^exponent mod modulus` by binary exponentiation.
///
/// Odd exponents peel off one factor of `base`; even exponents square the result for
/// `exponent / 2`. Recursion depth is `O(log exponent)`.
///
/// # Panics
/// - if `modulus == 0`.
///
/// ```rust
/// use radix_elgamal::math::modular::mod_pow;
///
/// assert_eq!(mod_pow(5, 3, 23), 10);
/// assert_eq!(mod_pow(7, 0, 23), 1);
/// ```
pub fn mod_pow(base: u64, exponent: u64, modulus: u64) -> u64 {
    assert!(modulus != 0, "modulus must be non-zero");
    if exponent == 0 {
        return 1 % modulus;
    }
    if exponent % 2 == 1 {
        return mul_mod(base % modulus, mod_pow(base, exponent - 1, modulus), modulus);
    }
    let half = mod_pow(base, exponent / 2, modulus);
    mul_mod(half, half, modulus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn naive_pow(base: u64, exponent: u64, modulus: u64) -> u64 {
        let mut acc = 1 % modulus;
        for _ in 0..exponent {
            acc = mul_mod(acc, base, modulus);
        }
        acc
    }

    #[test]
    fn test_small_powers() {
        assert_eq!(mod_pow(5, 1, 23), 5);
        assert_eq!(mod_pow(5, 2, 23), 2);
        assert_eq!(mod_pow(8, 3, 23), 6);
        assert_eq!(mod_pow(0, 0, 23), 1);
        assert_eq!(mod_pow(0, 5, 23), 0);
    }

    #[test]
    fn test_fermat_little_theorem() {
        let p = 1_000_000_007;
        for base in [2u64, 3, 10, 999_999_999] {
            assert_eq!(mod_pow(base, p - 1, p), 1);
        }
    }

    #[test]
    fn test_large_modulus_does_not_overflow() {
        // largest prime below 2^64
        let p = 18_446_744_073_709_551_557u64;
        assert_eq!(mod_pow(p - 1, 2, p), 1);
        assert_eq!(mod_pow(2, p - 1, p), 1);
    }

    #[test]
    fn test_modulus_two() {
        for e in 0..10 {
            assert_eq!(mod_pow(1, e, 2), 1);
        }
    }

    proptest! {
        #[test]
        fn prop_matches_repeated_multiplication(
            base in any::<u64>(),
            exponent in 0u64..64,
            modulus in 2u64..=u64::MAX,
        ) {
            prop_assert_eq!(mod_pow(base, exponent, modulus), naive_pow(base, exponent, modulus));
        }
    }
}
