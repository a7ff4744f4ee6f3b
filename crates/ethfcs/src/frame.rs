//! Frame check sequence derivation and frame validation.
//!
//! The Ethernet FCS is the one's complement of the CRC-32 over the frame
//! payload. A receiver recomputes the FCS over the bytes it saw and
//! compares against the FCS that arrived with the frame; the outcome is a
//! total binary decision, there is no partial or uncertain result.

use core::fmt;

use crate::engine::Crc32;

/// Result of computing a frame check sequence: the CRC and its one's
/// complement, which is what goes on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameCheck {
  /// The CRC-32 over the payload.
  pub crc: u32,
  /// The frame check sequence: `crc ^ 0xFFFF_FFFF`.
  pub fcs: u32,
}

/// Outcome of validating a received frame against its claimed FCS.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
  /// Recomputed FCS matches the received FCS.
  Intact,
  /// Recomputed FCS differs; the frame was corrupted in transit.
  Corrupted,
}

impl FrameStatus {
  /// True for [`FrameStatus::Intact`].
  #[inline]
  #[must_use]
  pub const fn is_intact(self) -> bool {
    matches!(self, Self::Intact)
  }
}

impl fmt::Display for FrameStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Intact => "intact",
      Self::Corrupted => "corrupted",
    })
  }
}

impl Crc32 {
  /// Compute the CRC-32 and FCS for `data`.
  ///
  /// Uses the table kernel (the default path). The FCS is the one's
  /// complement of the CRC regardless of the engine's `xor_out`.
  ///
  /// # Example
  ///
  /// ```
  /// use ethfcs::Crc32;
  ///
  /// let check = Crc32::new().frame_check(b"HELLO");
  /// assert_eq!(check.crc, 0x7328_3245);
  /// assert_eq!(check.fcs, 0x8CD7_CDBA);
  /// ```
  #[must_use]
  pub fn frame_check(&self, data: &[u8]) -> FrameCheck {
    let crc = self.checksum(data);
    FrameCheck { crc, fcs: !crc }
  }

  /// Validate a received frame: recompute the FCS over `data` and compare
  /// against `received_fcs`.
  #[must_use]
  pub fn validate(&self, data: &[u8], received_fcs: u32) -> FrameStatus {
    if self.frame_check(data).fcs == received_fcs {
      FrameStatus::Intact
    } else {
      FrameStatus::Corrupted
    }
  }
}

#[cfg(test)]
mod tests {
  use alloc::string::ToString;

  use super::*;

  #[test]
  fn fcs_is_complement_of_crc() {
    let check = Crc32::new().frame_check(b"123456789");
    assert_eq!(check.crc, 0xFC89_1918);
    assert_eq!(check.fcs, check.crc ^ 0xFFFF_FFFF);
  }

  #[test]
  fn hello_frame_check() {
    let check = Crc32::new().frame_check(b"HELLO");
    assert_eq!(check.crc, 0x7328_3245);
    assert_eq!(check.fcs, 0x8CD7_CDBA);
  }

  #[test]
  fn empty_payload_fcs() {
    let check = Crc32::new().frame_check(&[]);
    assert_eq!(check.crc, 0x0000_0000);
    assert_eq!(check.fcs, 0xFFFF_FFFF);
  }

  #[test]
  fn round_trip_is_intact() {
    let engine = Crc32::new();
    let data = b"The quick brown fox jumps over the lazy dog";
    let fcs = engine.frame_check(data).fcs;
    assert_eq!(engine.validate(data, fcs), FrameStatus::Intact);
    assert!(engine.validate(data, fcs).is_intact());
  }

  #[test]
  fn wrong_fcs_is_corrupted() {
    let engine = Crc32::new();
    let fcs = engine.frame_check(b"HELLO").fcs;
    assert_eq!(engine.validate(b"HELLO", fcs ^ 1), FrameStatus::Corrupted);
  }

  #[test]
  fn every_single_bit_flip_in_data_is_detected() {
    // CRC-32 detects all single-bit errors; exact, not probabilistic.
    let engine = Crc32::new();
    let data = *b"HELLO";
    let fcs = engine.frame_check(&data).fcs;

    for byte in 0..data.len() {
      for bit in 0..8 {
        let mut corrupted = data;
        corrupted[byte] ^= 1 << bit;
        assert_eq!(
          engine.validate(&corrupted, fcs),
          FrameStatus::Corrupted,
          "missed flip of bit {bit} in byte {byte}"
        );
      }
    }
  }

  #[test]
  fn every_single_bit_flip_in_fcs_is_detected() {
    let engine = Crc32::new();
    let fcs = engine.frame_check(b"HELLO").fcs;
    for bit in 0..32 {
      assert_eq!(engine.validate(b"HELLO", fcs ^ (1u32 << bit)), FrameStatus::Corrupted);
    }
  }

  #[test]
  fn status_display() {
    assert_eq!(FrameStatus::Intact.to_string(), "intact");
    assert_eq!(FrameStatus::Corrupted.to_string(), "corrupted");
  }
}
