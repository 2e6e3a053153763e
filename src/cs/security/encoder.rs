//! DISCLAIMER: This is a toy ElGamal-style message encoder in pure Rust.
//! It is *EXCLUSIVELY* for demonstration and educational purposes.
//! Absolutely DO NOT use it for real cryptographic or security-sensitive operations.
//!
//! A message is read as a base-65 number (first character most significant),
//! rewritten in radix `p`, and every radix-`p` digit `m` becomes one pair
//!
//! ```text
//! c1 = g^b mod p
//! c2 = m * k^b mod p
//! ```
//!
//! with a fresh exponent `b` drawn uniformly from `[1, p-1]` per digit.

use std::fmt;

use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::alphabet::{symbols, ALPHABET_SIZE};
use crate::error::{Error, Result};
use crate::math::arbint::ArbInt;
use crate::math::modular::{mod_pow, mul_mod};

/// Character the caller prepends to a message so that leading zero-valued symbols
/// survive the base conversion. It maps to the catch-all symbol 64.
pub const SENTINEL: char = '\r';

/// Source of per-digit exponents.
pub trait RandomSource {
    /// A value drawn uniformly from `lo..=hi`.
    fn next_in_range(&mut self, lo: u64, hi: u64) -> u64;
}

impl<R: Rng> RandomSource for R {
    fn next_in_range(&mut self, lo: u64, hi: u64) -> u64 {
        self.gen_range(lo..=hi)
    }
}

/// Modulus `p`, generator `g` and public key `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderParams {
    p: u64,
    g: u64,
    k: u64,
}

impl EncoderParams {
    /// Validates `p >= 2` and `g, k < p`.
    pub fn new(p: u64, g: u64, k: u64) -> Result<Self> {
        if p < 2 {
            return Err(Error::InvalidParameters(format!(
                "modulus p must be at least 2, got {p}"
            )));
        }
        if g >= p {
            return Err(Error::InvalidParameters(format!(
                "generator g = {g} is not below p = {p}"
            )));
        }
        if k >= p {
            return Err(Error::InvalidParameters(format!(
                "public key k = {k} is not below p = {p}"
            )));
        }
        Ok(EncoderParams { p, g, k })
    }

    #[inline]
    pub fn p(&self) -> u64 {
        self.p
    }

    #[inline]
    pub fn g(&self) -> u64 {
        self.g
    }

    #[inline]
    pub fn k(&self) -> u64 {
        self.k
    }
}

/// One encoded digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CiphertextPair {
    pub c1: u64,
    pub c2: u64,
}

impl fmt::Display for CiphertextPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.c1, self.c2)
    }
}

/// Configuration for [`Encoder::encode_with_config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EncoderConfig {
    /// Optional RNG seed for reproducible output.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Encoder {
    params: EncoderParams,
}

impl Encoder {
    pub fn new(params: EncoderParams) -> Self {
        Encoder { params }
    }

    pub fn params(&self) -> &EncoderParams {
        &self.params
    }

    /// The message as a number in radix `p`, least-significant digit first.
    ///
    /// Every byte of `message` becomes one base-65 digit with the first byte most
    /// significant; the value is accumulated Horner-style into radix `p`.
    pub fn message_digits(&self, message: &str) -> ArbInt {
        self.message_digits_bytes(message.as_bytes())
    }

    /// Byte-level form of [`Encoder::message_digits`]; `message` need not be UTF-8.
    pub fn message_digits_bytes(&self, message: &[u8]) -> ArbInt {
        let digits = symbols(message);
        let mut changed = ArbInt::zero(self.params.p);
        for &digit in &digits {
            changed *= ALPHABET_SIZE;
            changed += digit;
        }
        changed.trim();
        debug!(
            "converted {} symbols into {} base-{} digits",
            digits.len(),
            changed.size(),
            self.params.p
        );
        changed
    }

    /// Encodes one radix-`p` digit with a freshly drawn exponent.
    pub fn encode_digit<R: RandomSource + ?Sized>(
        &self,
        digit: u64,
        rng: &mut R,
    ) -> CiphertextPair {
        let EncoderParams { p, g, k } = self.params;
        let b = rng.next_in_range(1, p - 1);
        let c1 = mod_pow(g, b, p);
        let c2 = mul_mod(digit % p, mod_pow(k, b, p), p);
        trace!("digit {digit}: b = {b}, pair = ({c1}, {c2})");
        CiphertextPair { c1, c2 }
    }

    /// Encodes `message` into one pair per radix-`p` digit, least-significant first.
    ///
    /// The message is taken as given; see [`SENTINEL`].
    pub fn encode<R: RandomSource + ?Sized>(
        &self,
        message: &str,
        rng: &mut R,
    ) -> Vec<CiphertextPair> {
        self.encode_bytes(message.as_bytes(), rng)
    }

    /// Byte-level form of [`Encoder::encode`].
    pub fn encode_bytes<R: RandomSource + ?Sized>(
        &self,
        message: &[u8],
        rng: &mut R,
    ) -> Vec<CiphertextPair> {
        self.message_digits_bytes(message)
            .iter()
            .map(|digit| self.encode_digit(digit, &mut *rng))
            .collect()
    }

    /// Like [`Encoder::encode`], drawing exponents from a generator chosen by `config`.
    ///
    /// A seed selects `ChaCha20Rng`, whose stream is stable across platforms and
    /// releases; without one, `StdRng` is seeded from entropy.
    pub fn encode_with_config(
        &self,
        message: &str,
        config: &EncoderConfig,
    ) -> Vec<CiphertextPair> {
        match config.seed {
            Some(s) => self.encode(message, &mut ChaCha20Rng::seed_from_u64(s)),
            None => self.encode(message, &mut StdRng::from_entropy()),
        }
    }

    /// Decoding is not provided by this encoder.
    pub fn decode(&self, _pairs: &[CiphertextPair]) -> Result<String> {
        Err(Error::Unsupported("decode"))
    }
}
