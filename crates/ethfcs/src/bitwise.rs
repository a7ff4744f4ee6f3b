//! Bit-at-a-time CRC-32 computation (MSB-first).
//!
//! This is the direct form of the algorithm: each input byte is XORed into
//! the top of the register, then reduced one bit at a time against the
//! generator polynomial. It needs no lookup table and directly mirrors the
//! mathematical definition, which makes it:
//!
//! - **Obviously correct**: the canonical reference the table kernel is
//!   verified against
//! - **Audit-friendly**: a dozen lines, no precomputed state
//! - **Const-evaluable**: check values are pinned at compile time
//!
//! It is also roughly 8x slower than the table kernel; use
//! [`Crc32::checksum`](crate::Crc32::checksum) for throughput.

// All array indexing uses bounded loop indices (0..data.len()). Clippy
// cannot prove this in const fn contexts, but bounds are statically
// guaranteed.
#![allow(clippy::indexing_slicing)]

/// Clock a single byte through the register, MSB-first.
///
/// The byte enters at the most-significant end; eight reduction steps
/// follow, each shifting left once and XORing `polynomial` when the bit
/// shifted out was set. Shifted-out bits are discarded.
///
/// This is a `const fn` to allow compile-time CRC computation.
#[inline]
#[must_use]
pub const fn compute_byte(polynomial: u32, mut crc: u32, byte: u8) -> u32 {
  crc ^= (byte as u32) << 24;
  let mut bit = 0;
  while bit < 8 {
    crc = if crc & 0x8000_0000 != 0 {
      (crc << 1) ^ polynomial
    } else {
      crc << 1
    };
    bit += 1;
  }
  crc
}

/// Compute the raw CRC register over `data`, starting from `init`.
///
/// Returns the register state *without* the final XOR; public entry
/// points on [`Crc32`](crate::Crc32) apply `xor_out`. An empty slice
/// returns `init` unchanged.
#[must_use]
pub const fn compute(polynomial: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i = 0usize;
  while i < data.len() {
    crc = compute_byte(polynomial, crc, data[i]);
    i += 1;
  }
  crc
}

// Compile-time pin of the catalog check value for the Ethernet
// parameters (CRC-32/BZIP2): "123456789" -> 0xFC891918. Build fails if
// the reduction ever drifts.
const _: () = {
  let raw = compute(0x04C1_1DB7, !0u32, b"123456789");
  assert!(raw ^ !0u32 == 0xFC89_1918);
};

#[cfg(test)]
mod tests {
  use super::*;
  use crate::params::CrcParams;

  const POLY: u32 = CrcParams::ETHERNET.polynomial;

  #[test]
  fn check_value() {
    let crc = compute(POLY, !0u32, b"123456789") ^ !0u32;
    assert_eq!(crc, 0xFC89_1918);
  }

  #[test]
  fn empty_input_leaves_register_untouched() {
    assert_eq!(compute(POLY, !0u32, &[]), !0u32);
    assert_eq!(compute(POLY, 0x1234_5678, &[]), 0x1234_5678);
  }

  #[test]
  fn single_zero_byte() {
    let crc = compute(POLY, !0u32, &[0x00]) ^ !0u32;
    assert_eq!(crc, 0xB1F7_404B);
  }

  #[test]
  fn const_computation() {
    const CRC_OF_ZERO: u32 = compute_byte(0x04C1_1DB7, !0u32, 0x00);
    assert_eq!(CRC_OF_ZERO ^ !0u32, 0xB1F7_404B);
  }

  #[test]
  fn byte_loop_matches_whole_slice() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let mut crc = !0u32;
    for &byte in data.iter() {
      crc = compute_byte(POLY, crc, byte);
    }
    assert_eq!(crc, compute(POLY, !0u32, data));
  }
}
