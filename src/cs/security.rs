pub mod alphabet;
pub mod encoder;

// Re-export alphabet functionality
pub use alphabet::{symbol_value, symbols, ALPHABET_SIZE, CATCH_ALL};

// Re-export encoder functionality
pub use encoder::{CiphertextPair, Encoder, EncoderConfig, EncoderParams, RandomSource, SENTINEL};
