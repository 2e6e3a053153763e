//! # Arbitrary-radix big integers
//!
//! [`ArbInt`] stores a non-negative integer as a little-endian sequence of limbs in
//! an arbitrary radix `r >= 2`. Unlike the usual power-of-two limb layout, the radix
//! here is a runtime value, which lets a message be reinterpreted digit-for-digit in
//! the radix of a modulus.
//!
//! Every limb satisfies `0 <= limb < radix` once an arithmetic operation has touched
//! it, and no most-significant zero limbs survive a [`ArbInt::trim`]. Zero is the
//! empty limb sequence.
//!
//! All intermediate products and sums are formed in `u128`, so any radix that fits
//! in a `u64` is safe to use.
//!
//! ```rust
//! use radix_elgamal::math::arbint::ArbInt;
//!
//! let mut n = ArbInt::from_u64(1234, 10);
//! assert_eq!(n.limbs(), &[4, 3, 2, 1]);
//!
//! n *= 3;
//! n += 8;
//! assert_eq!(n.to_u64().unwrap(), 3710);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Mul, MulAssign};

use log::trace;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::error::{Error, Result};

/// Radix used when none is given.
pub const DEFAULT_RADIX: u64 = 10;

/// A non-negative integer in an arbitrary radix, least-significant limb first.
///
/// Equality and hashing ignore most-significant zero limbs, so an untrimmed value
/// equals its trimmed form. The radix is part of identity.
#[derive(Debug, Clone)]
pub struct ArbInt {
    limbs: Vec<u64>,
    radix: u64,
}

impl PartialEq for ArbInt {
    fn eq(&self, other: &Self) -> bool {
        self.radix == other.radix && self.significant_limbs() == other.significant_limbs()
    }
}

impl Eq for ArbInt {}

impl Hash for ArbInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.radix.hash(state);
        self.significant_limbs().hash(state);
    }
}

impl Default for ArbInt {
    fn default() -> Self {
        Self::zero(DEFAULT_RADIX)
    }
}

impl ArbInt {
    /// The value zero in `radix`.
    ///
    /// # Panics
    /// - if `radix < 2`.
    pub fn zero(radix: u64) -> Self {
        assert!(radix >= 2, "radix must be at least 2, got {radix}");
        ArbInt {
            limbs: Vec::new(),
            radix,
        }
    }

    /// Converts `n` by repeated division by `radix`. Zero yields no limbs.
    ///
    /// # Panics
    /// - if `radix < 2`.
    pub fn from_u64(mut n: u64, radix: u64) -> Self {
        let mut result = Self::zero(radix);
        while n != 0 {
            let (q, r) = n.div_rem(&radix);
            result.limbs.push(r);
            n = q;
        }
        result
    }

    /// Wraps a precomputed limb sequence (least-significant first).
    ///
    /// Limbs are taken as-is: the caller is responsible for keeping them below
    /// `radix`, and for calling [`ArbInt::trim`] if the sequence may end in zeros.
    /// Out-of-range limbs are carried into place by the next addition.
    ///
    /// # Panics
    /// - if `radix < 2`.
    pub fn from_limbs(limbs: Vec<u64>, radix: u64) -> Self {
        assert!(radix >= 2, "radix must be at least 2, got {radix}");
        ArbInt { limbs, radix }
    }

    /// The base every limb is expressed in.
    #[inline]
    pub fn radix(&self) -> u64 {
        self.radix
    }

    /// Number of limbs currently stored.
    #[inline]
    pub fn size(&self) -> usize {
        self.limbs.len()
    }

    /// True when every limb is zero (including the empty sequence).
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&l| l == 0)
    }

    /// All stored limbs, least-significant first, including any untrimmed zeros.
    #[inline]
    pub fn limbs(&self) -> &[u64] {
        &self.limbs
    }

    /// Limb at position `i` (0 is least significant), or `None` past the end.
    #[inline]
    pub fn limb(&self, i: usize) -> Option<u64> {
        self.limbs.get(i).copied()
    }

    /// Mutable limb at position `i`, or `None` past the end.
    ///
    /// Writes are not checked against the radix; the next addition carries an
    /// oversized limb into place.
    #[inline]
    pub fn limb_mut(&mut self, i: usize) -> Option<&mut u64> {
        self.limbs.get_mut(i)
    }

    /// Iterates limbs from least to most significant.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u64> + ExactSizeIterator + '_ {
        self.limbs.iter().copied()
    }

    /// Appends a new most-significant limb.
    pub fn push(&mut self, limb: u64) {
        self.limbs.push(limb);
    }

    /// Drops most-significant zero limbs. Idempotent.
    pub fn trim(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }

    /// Adds `other` into `self`, or reports a radix mismatch.
    pub fn checked_add(&self, other: &ArbInt) -> Result<ArbInt> {
        if self.radix != other.radix {
            return Err(Error::RadixMismatch {
                left: self.radix,
                right: other.radix,
            });
        }
        let mut sum = self.clone();
        sum.add_limbs(&other.limbs);
        Ok(sum)
    }

    /// Multiplies every limb by `factor`, carrying in the same radix.
    pub fn scalar_mul(&self, factor: u64) -> ArbInt {
        let radix = self.radix as u128;
        let factor = factor as u128;
        let mut res = Vec::with_capacity(self.limbs.len() + 2);
        let mut carry: u128 = 0;
        let mut i = 0;
        while i < self.limbs.len() || carry != 0 {
            let now = self.limbs.get(i).copied().unwrap_or(0) as u128 * factor + carry;
            res.push((now % radix) as u64);
            carry = now / radix;
            i += 1;
        }
        let mut product = ArbInt {
            limbs: res,
            radix: self.radix,
        };
        product.trim();
        product
    }

    /// Reconstructs the value as a `u64`.
    ///
    /// Fails with [`Error::ArithmeticOverflow`] when the value exceeds `u64::MAX`.
    pub fn to_u64(&self) -> Result<u64> {
        self.limbs.iter().rev().try_fold(0u64, |acc, &limb| {
            acc.checked_mul(self.radix)
                .and_then(|v| v.checked_add(limb))
                .ok_or(Error::ArithmeticOverflow)
        })
    }

    /// Reconstructs the value as an unbounded `BigUint`.
    pub fn to_biguint(&self) -> BigUint {
        let radix = BigUint::from(self.radix);
        self.limbs
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, &limb| acc * &radix + BigUint::from(limb))
    }

    // Limbs without most-significant zeros.
    fn significant_limbs(&self) -> &[u64] {
        let len = self
            .limbs
            .iter()
            .rposition(|&l| l != 0)
            .map_or(0, |i| i + 1);
        &self.limbs[..len]
    }

    // Schoolbook addition over max(len) + 1 limbs, then trim.
    fn add_limbs(&mut self, rhs: &[u64]) {
        let radix = self.radix as u128;
        let len = self.limbs.len().max(rhs.len()) + 1;
        self.limbs.resize(len, 0);
        let mut carry: u128 = 0;
        for (i, limb) in self.limbs.iter_mut().enumerate() {
            let sum = *limb as u128 + rhs.get(i).copied().unwrap_or(0) as u128 + carry;
            *limb = (sum % radix) as u64;
            carry = sum / radix;
        }
        // Only unvalidated `from_limbs` input can leave a carry past the guard limb.
        while carry != 0 {
            self.limbs.push((carry % radix) as u64);
            carry /= radix;
        }
        self.trim();
        trace!("add: {} limbs in radix {}", self.limbs.len(), self.radix);
    }

    fn assert_same_radix(&self, other: &ArbInt) {
        assert_eq!(
            self.radix, other.radix,
            "mixed-radix arithmetic is not supported"
        );
    }
}

/// # Panics
/// - if the radices differ; use [`ArbInt::checked_add`] to handle that case.
impl AddAssign<&ArbInt> for ArbInt {
    fn add_assign(&mut self, rhs: &ArbInt) {
        self.assert_same_radix(rhs);
        self.add_limbs(&rhs.limbs);
    }
}

impl AddAssign<ArbInt> for ArbInt {
    fn add_assign(&mut self, rhs: ArbInt) {
        *self += &rhs;
    }
}

impl AddAssign<u64> for ArbInt {
    fn add_assign(&mut self, rhs: u64) {
        let rhs = ArbInt::from_u64(rhs, self.radix);
        *self += &rhs;
    }
}

impl Add<&ArbInt> for &ArbInt {
    type Output = ArbInt;

    fn add(self, rhs: &ArbInt) -> ArbInt {
        let mut result = self.clone();
        result += rhs;
        result
    }
}

impl Add for ArbInt {
    type Output = ArbInt;

    fn add(mut self, rhs: ArbInt) -> ArbInt {
        self += &rhs;
        self
    }
}

impl Mul<u64> for &ArbInt {
    type Output = ArbInt;

    fn mul(self, rhs: u64) -> ArbInt {
        self.scalar_mul(rhs)
    }
}

impl Mul<u64> for ArbInt {
    type Output = ArbInt;

    fn mul(self, rhs: u64) -> ArbInt {
        self.scalar_mul(rhs)
    }
}

impl MulAssign<u64> for ArbInt {
    fn mul_assign(&mut self, rhs: u64) {
        *self = self.scalar_mul(rhs);
    }
}

impl fmt::Display for ArbInt {
    /// Most-significant limb first, separated by spaces; zero prints as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.limbs.is_empty() {
            return write!(f, "0");
        }
        for (i, limb) in self.limbs.iter().rev().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{limb}")?;
        }
        Ok(())
    }
}
