//! The 65-symbol message alphabet.
//!
//! | input        | symbol  |
//! |--------------|---------|
//! | `'0'..='9'`  | 0..=9   |
//! | `'A'..='Z'`  | 10..=35 |
//! | `'a'..='z'`  | 36..=61 |
//! | space        | 62      |
//! | `.`          | 63      |
//! | anything else| 64      |

/// Number of distinct symbol values, and the radix messages are read in.
pub const ALPHABET_SIZE: u64 = 65;

/// Symbol value every unmapped byte collapses to.
pub const CATCH_ALL: u8 = 64;

/// Maps one byte to its symbol value. Total over all bytes.
#[inline]
pub const fn symbol_value(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'A'..=b'Z' => byte - b'A' + 10,
        b'a'..=b'z' => byte - b'a' + 36,
        b' ' => 62,
        b'.' => 63,
        _ => CATCH_ALL,
    }
}

/// Symbol values of `message`, one per byte, in message order.
///
/// Accepts raw bytes as well as text; bytes that are not valid UTF-8 map like any
/// other unmapped byte.
pub fn symbols<M: AsRef<[u8]>>(message: M) -> Vec<u64> {
    message
        .as_ref()
        .iter()
        .map(|&b| symbol_value(b) as u64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_symbols() {
        assert_eq!(symbol_value(b'0'), 0);
        assert_eq!(symbol_value(b'9'), 9);
        assert_eq!(symbol_value(b'A'), 10);
        assert_eq!(symbol_value(b'H'), 17);
        assert_eq!(symbol_value(b'Z'), 35);
        assert_eq!(symbol_value(b'a'), 36);
        assert_eq!(symbol_value(b'z'), 61);
        assert_eq!(symbol_value(b' '), 62);
        assert_eq!(symbol_value(b'.'), 63);
        assert_eq!(symbol_value(b'\r'), 64);
        assert_eq!(symbol_value(b','), 64);
    }

    #[test]
    fn test_total_and_injective_on_defined_ranges() {
        let mut defined = HashSet::new();
        let mut catch_all = 0;
        for b in 0..=255u8 {
            let s = symbol_value(b);
            assert!((s as u64) < ALPHABET_SIZE);
            if s == CATCH_ALL {
                catch_all += 1;
            } else {
                assert!(defined.insert(s), "symbol {} assigned twice", s);
            }
        }
        assert_eq!(defined.len(), 64);
        assert_eq!(catch_all, 256 - 64);
    }

    #[test]
    fn test_symbols_per_byte() {
        assert_eq!(symbols("Hi 9."), vec![17, 44, 62, 9, 63]);
        // two-byte UTF-8 character
        assert_eq!(symbols("é"), vec![64, 64]);
        assert!(symbols("").is_empty());
        // Latin-1 byte outside UTF-8
        assert_eq!(symbols(b"caf\xe9"), vec![38, 36, 41, 64]);
    }
}
