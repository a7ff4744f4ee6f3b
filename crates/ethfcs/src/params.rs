//! CRC algorithm parameters.
//!
//! This module defines the parameter set for the MSB-first CRC-32 used by
//! the Ethernet frame check sequence, following the conventions from the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).

/// CRC-32 algorithm parameters.
///
/// Captures everything needed to define an MSB-first (non-reflected)
/// 32-bit CRC. Alternate polynomials and initial values stay pluggable
/// through [`Crc32::with_params`](crate::Crc32::with_params); the engine
/// itself never hard-codes them.
///
/// # Parameters
///
/// - `width`: CRC width in bits (always 32 here)
/// - `polynomial`: generator polynomial, normal form, without the
///   implicit x^32 term
/// - `initial`: initial value for the CRC register
/// - `xor_out`: value XORed into the final register state
///
/// Input and output are not reflected: bytes enter the register at the
/// most-significant end and the register shifts left. In CRC RevEng terms
/// this is the CRC-32/BZIP2 model, the form in which the Ethernet FCS is
/// usually described.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcParams {
  /// Width in bits.
  pub width: u8,
  /// Generator polynomial (normal form, without implicit high bit).
  pub polynomial: u32,
  /// Initial value for the CRC register.
  pub initial: u32,
  /// XOR value applied to the final register state.
  pub xor_out: u32,
}

impl CrcParams {
  /// CRC-32 as used for the Ethernet frame check sequence (IEEE 802.3).
  ///
  /// Polynomial 0x04C11DB7, register preset to all ones, final state
  /// complemented. The FCS transmitted on the wire is the one's
  /// complement of the resulting CRC.
  pub const ETHERNET: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    xor_out: 0xFFFF_FFFF,
  };
}

impl Default for CrcParams {
  #[inline]
  fn default() -> Self {
    Self::ETHERNET
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ethernet_constants() {
    let p = CrcParams::ETHERNET;
    assert_eq!(p.width, 32);
    assert_eq!(p.polynomial, 0x04C1_1DB7);
    assert_eq!(p.initial, 0xFFFF_FFFF);
    assert_eq!(p.xor_out, 0xFFFF_FFFF);
  }

  #[test]
  fn default_is_ethernet() {
    assert_eq!(CrcParams::default(), CrcParams::ETHERNET);
  }
}
