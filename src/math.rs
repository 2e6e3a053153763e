pub mod arbint;
pub mod modular;

pub use arbint::{ArbInt, DEFAULT_RADIX};
pub use modular::{mod_pow, mul_mod};
