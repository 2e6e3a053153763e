//! Line-oriented stdin/stdout protocol.
//!
//! Input:
//! ```text
//! p g k
//! message text
//! ```
//! The three integers may be spread over several lines; whatever follows the third
//! one on its line is discarded. The message is the next line.
//!
//! Output: the message echoed on its own line, then one `c1 c2` line per encoded
//! digit, least-significant digit first.

use std::io::{BufRead, Write};

use log::debug;

use crate::cs::security::encoder::{
    CiphertextPair, Encoder, EncoderParams, RandomSource, SENTINEL,
};
use crate::error::{Error, Result};

/// Reads and validates `p`, `g` and `k`.
pub fn read_parameters<R: BufRead>(reader: &mut R) -> Result<EncoderParams> {
    let mut values = Vec::with_capacity(3);
    let mut line = String::new();
    while values.len() < 3 {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(Error::MalformedInput(format!(
                "expected 3 parameters, found {}",
                values.len()
            )));
        }
        for token in line.split_whitespace() {
            if values.len() == 3 {
                break;
            }
            let value = token.parse::<u64>().map_err(|e| {
                Error::MalformedInput(format!(
                    "parameter {token:?} is not an unsigned integer: {e}"
                ))
            })?;
            values.push(value);
        }
    }
    debug!("read parameters p={} g={} k={}", values[0], values[1], values[2]);
    EncoderParams::new(values[0], values[1], values[2])
}

/// Reads the message line as raw bytes, without its line terminator. End of input
/// is the empty message. The line need not be valid UTF-8.
pub fn read_message<R: BufRead>(reader: &mut R) -> Result<Vec<u8>> {
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Echoes `message` byte for byte and writes one line per pair.
pub fn write_pairs<W: Write>(
    writer: &mut W,
    message: &[u8],
    pairs: &[CiphertextPair],
) -> Result<()> {
    writer.write_all(message)?;
    writer.write_all(b"\n")?;
    for pair in pairs {
        writeln!(writer, "{pair}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads parameters and a message from `input`, encodes the message behind a
/// [`SENTINEL`], and writes the result to `output`.
///
/// Nothing is written unless parameters and message were read successfully.
pub fn run<R, W, S>(input: &mut R, output: &mut W, rng: &mut S) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: RandomSource + ?Sized,
{
    let params = read_parameters(input)?;
    let message = read_message(input)?;
    let encoder = Encoder::new(params);
    let mut framed = Vec::with_capacity(message.len() + 1);
    framed.push(SENTINEL as u8);
    framed.extend_from_slice(&message);
    let pairs = encoder.encode_bytes(&framed, rng);
    debug!("encoded {} bytes into {} pairs", message.len(), pairs.len());
    write_pairs(output, &message, &pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_parameters_single_line() {
        let mut input = Cursor::new("23 5 8 trailing junk\nHI\n");
        let params = read_parameters(&mut input).unwrap();
        assert_eq!((params.p(), params.g(), params.k()), (23, 5, 8));
        assert_eq!(read_message(&mut input).unwrap(), b"HI");
    }

    #[test]
    fn test_read_parameters_across_lines() {
        let mut input = Cursor::new("23\n5\n  8\nhello world\n");
        let params = read_parameters(&mut input).unwrap();
        assert_eq!(params.k(), 8);
        assert_eq!(read_message(&mut input).unwrap(), b"hello world");
    }

    #[test]
    fn test_read_parameters_malformed() {
        for text in ["23 five 8\n", "23 5\n", "", "-3 1 1\n"] {
            let mut input = Cursor::new(text);
            assert!(
                matches!(read_parameters(&mut input), Err(Error::MalformedInput(_))),
                "accepted {text:?}"
            );
        }
    }

    #[test]
    fn test_read_parameters_invalid() {
        let mut input = Cursor::new("1 0 0\nmsg\n");
        assert!(matches!(
            read_parameters(&mut input),
            Err(Error::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_read_message_variants() {
        assert_eq!(read_message(&mut Cursor::new("a b.\r\n")).unwrap(), b"a b.");
        assert_eq!(read_message(&mut Cursor::new("no newline")).unwrap(), b"no newline");
        assert!(read_message(&mut Cursor::new("")).unwrap().is_empty());
        assert!(read_message(&mut Cursor::new("\nnext")).unwrap().is_empty());
        assert_eq!(
            read_message(&mut Cursor::new(&b"caf\xe9\n"[..])).unwrap(),
            b"caf\xe9"
        );
    }

    #[test]
    fn test_write_pairs_format() {
        let mut out = Vec::new();
        let pairs = [CiphertextPair { c1: 5, c2: 18 }, CiphertextPair { c1: 2, c2: 0 }];
        write_pairs(&mut out, b"HI", &pairs).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "HI\n5 18\n2 0\n");
    }

    #[test]
    fn test_run_accepts_latin1_message() {
        let mut input = Cursor::new(&b"23 5 8\ncaf\xe9\n"[..]);
        let mut out = Vec::new();
        let mut rng = rand::thread_rng();
        run(&mut input, &mut out, &mut rng).unwrap();

        assert!(out.starts_with(b"caf\xe9\n"));
        let encoder = Encoder::new(EncoderParams::new(23, 5, 8).unwrap());
        let digits = encoder.message_digits_bytes(b"\rcaf\xe9");
        let pair_lines = out[5..].split(|&b| b == b'\n').filter(|l| !l.is_empty());
        assert_eq!(pair_lines.count(), digits.size());
    }

    #[test]
    fn test_run_writes_nothing_on_error() {
        let mut input = Cursor::new("23 x 8\nHI\n");
        let mut out = Vec::new();
        let mut rng = rand::thread_rng();
        assert!(run(&mut input, &mut out, &mut rng).is_err());
        assert!(out.is_empty());
    }
}
