//! Boundary adapter: decoding operator input into byte sequences.
//!
//! The engine only ever sees well-formed byte slices; everything textual
//! is rejected here first. Two input forms are supported, matching the
//! front end:
//!
//! - hexadecimal: each pair of digits is one byte, case-insensitive, even
//!   length required
//! - ASCII text: each character is its byte value, non-ASCII rejected
//!
//! plus parsing of a received FCS from hexadecimal text (optional `0x`
//! prefix, at most eight digits).

// Indexing here is into chunks_exact(2) pairs and a 16-entry digit table
// with a masked index; bounds hold statically.
#![allow(clippy::indexing_slicing)]

use alloc::{string::String, vec::Vec};
use core::fmt;

/// Rejection reasons for malformed textual input.
///
/// These never originate inside the engine; they exist so the boundary
/// can refuse input before it reaches any computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
  /// Hex input had an odd number of digits.
  OddLength {
    /// Number of digits seen.
    len: usize,
  },
  /// A character was not a hexadecimal digit.
  InvalidDigit {
    /// The offending byte.
    byte: u8,
    /// Byte offset within the input.
    index: usize,
  },
  /// Text input contained a non-ASCII character.
  NonAscii {
    /// Byte offset within the input.
    index: usize,
  },
  /// An FCS value was empty.
  Empty,
  /// An FCS value had more than eight hex digits.
  TooLong {
    /// Number of digits seen.
    len: usize,
  },
}

impl fmt::Display for ParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::OddLength { len } => {
        write!(f, "hex input must have an even number of digits, got {len}")
      }
      Self::InvalidDigit { byte, index } => {
        write!(f, "invalid hex digit {:?} at offset {index}", *byte as char)
      }
      Self::NonAscii { index } => write!(f, "non-ASCII character at offset {index}"),
      Self::Empty => f.write_str("empty value"),
      Self::TooLong { len } => {
        write!(f, "a 32-bit FCS has at most 8 hex digits, got {len}")
      }
    }
  }
}

impl core::error::Error for ParseError {}

const fn hex_value(byte: u8) -> Option<u8> {
  match byte {
    b'0'..=b'9' => Some(byte - b'0'),
    b'a'..=b'f' => Some(byte - b'a' + 10),
    b'A'..=b'F' => Some(byte - b'A' + 10),
    _ => None,
  }
}

/// Decode hexadecimal text into bytes.
///
/// Case-insensitive; requires an even number of digits. An empty string
/// decodes to an empty byte sequence (the engine is defined for it).
///
/// # Errors
///
/// [`ParseError::OddLength`] or [`ParseError::InvalidDigit`].
pub fn decode_hex(input: &str) -> Result<Vec<u8>, ParseError> {
  let digits = input.as_bytes();
  if digits.len() % 2 != 0 {
    return Err(ParseError::OddLength { len: digits.len() });
  }

  let mut bytes = Vec::with_capacity(digits.len() / 2);
  for (pair_index, pair) in digits.chunks_exact(2).enumerate() {
    let hi = hex_value(pair[0]).ok_or(ParseError::InvalidDigit {
      byte: pair[0],
      index: pair_index * 2,
    })?;
    let lo = hex_value(pair[1]).ok_or(ParseError::InvalidDigit {
      byte: pair[1],
      index: pair_index * 2 + 1,
    })?;
    bytes.push((hi << 4) | lo);
  }
  Ok(bytes)
}

/// Encode bytes as uppercase hexadecimal text, for display.
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
  const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
  let mut out = String::with_capacity(bytes.len() * 2);
  for &byte in bytes {
    out.push(DIGITS[(byte >> 4) as usize] as char);
    out.push(DIGITS[(byte & 0x0F) as usize] as char);
  }
  out
}

/// Convert ASCII text into its byte values.
///
/// # Errors
///
/// [`ParseError::NonAscii`] on the first character outside ASCII.
pub fn decode_ascii(input: &str) -> Result<Vec<u8>, ParseError> {
  if let Some(index) = input.bytes().position(|b| !b.is_ascii()) {
    return Err(ParseError::NonAscii { index });
  }
  Ok(input.as_bytes().to_vec())
}

/// Parse a received 32-bit FCS from hexadecimal text.
///
/// Accepts an optional `0x`/`0X` prefix and one to eight digits.
///
/// # Errors
///
/// [`ParseError::Empty`], [`ParseError::TooLong`], or
/// [`ParseError::InvalidDigit`].
pub fn parse_fcs(input: &str) -> Result<u32, ParseError> {
  let digits = input
    .strip_prefix("0x")
    .or_else(|| input.strip_prefix("0X"))
    .unwrap_or(input);
  if digits.is_empty() {
    return Err(ParseError::Empty);
  }
  if digits.len() > 8 {
    return Err(ParseError::TooLong { len: digits.len() });
  }

  let mut value = 0u32;
  for (index, &byte) in digits.as_bytes().iter().enumerate() {
    let digit = hex_value(byte).ok_or(ParseError::InvalidDigit { byte, index })?;
    value = (value << 4) | digit as u32;
  }
  Ok(value)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decode_valid_hex() {
    assert_eq!(decode_hex("48454C4C4F").as_deref(), Ok(&b"HELLO"[..]));
    assert_eq!(decode_hex("48454c4c4f").as_deref(), Ok(&b"HELLO"[..]));
    assert_eq!(decode_hex("").as_deref(), Ok(&[][..]));
  }

  #[test]
  fn decode_rejects_odd_length() {
    assert_eq!(decode_hex("ABC"), Err(ParseError::OddLength { len: 3 }));
  }

  #[test]
  fn decode_rejects_non_hex() {
    assert_eq!(decode_hex("4G"), Err(ParseError::InvalidDigit { byte: b'G', index: 1 }));
    // Whitespace is not silently stripped; the caller trims.
    assert_eq!(decode_hex("48 4"), Err(ParseError::InvalidDigit { byte: b' ', index: 2 }));
  }

  #[test]
  fn encode_round_trips() {
    assert_eq!(encode_hex(b"HELLO"), "48454C4C4F");
    assert_eq!(decode_hex(&encode_hex(&[0x00, 0xFF, 0x7A])).as_deref(), Ok(&[0x00, 0xFF, 0x7A][..]));
  }

  #[test]
  fn ascii_conversion() {
    assert_eq!(decode_ascii("HELLO").as_deref(), Ok(&b"HELLO"[..]));
    assert_eq!(decode_ascii("naïve"), Err(ParseError::NonAscii { index: 2 }));
  }

  #[test]
  fn parse_fcs_values() {
    assert_eq!(parse_fcs("8CD7CDBA"), Ok(0x8CD7_CDBA));
    assert_eq!(parse_fcs("0x8cd7cdba"), Ok(0x8CD7_CDBA));
    assert_eq!(parse_fcs("0"), Ok(0));
    assert_eq!(parse_fcs("FFFFFFFF"), Ok(0xFFFF_FFFF));
  }

  #[test]
  fn parse_fcs_rejects_malformed() {
    assert_eq!(parse_fcs(""), Err(ParseError::Empty));
    assert_eq!(parse_fcs("0x"), Err(ParseError::Empty));
    assert_eq!(parse_fcs("123456789"), Err(ParseError::TooLong { len: 9 }));
    assert_eq!(parse_fcs("12Z4"), Err(ParseError::InvalidDigit { byte: b'Z', index: 2 }));
  }

  #[test]
  fn errors_render() {
    use alloc::string::ToString;
    assert!(ParseError::OddLength { len: 3 }.to_string().contains("even"));
    assert!(ParseError::InvalidDigit { byte: b'G', index: 1 }.to_string().contains('G'));
  }
}
