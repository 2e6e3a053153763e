//! Toy ElGamal-style message encoding over arbitrary-radix big integers.
//!
//! DISCLAIMER: for demonstration and educational purposes only. DO NOT use it for
//! real cryptographic or security-sensitive operations.

pub mod cs;
pub mod error;
pub mod math;
pub mod protocol;

pub use cs::security::{
    symbol_value, CiphertextPair, Encoder, EncoderConfig, EncoderParams, RandomSource, SENTINEL,
};
pub use error::{Error, Result};
pub use math::{mod_pow, ArbInt};
