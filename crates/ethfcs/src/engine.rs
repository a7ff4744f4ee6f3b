//! CRC-32 engine with selectable computation kernel.
//!
//! [`Crc32`] is a plain stateless struct: parameters plus a lookup table
//! computed once at construction. Every computation is a pure function of
//! its input; the table is written during construction and read-only
//! afterwards, so one engine can be shared across threads freely.
//!
//! Two kernels are exposed and must agree bit-for-bit on every input:
//!
//! | Kernel | Strategy | Memory |
//! |--------|----------|--------|
//! | [`Kernel::Table`] | byte-at-a-time lookup | 1 KiB |
//! | [`Kernel::Bitwise`] | bit-at-a-time reduction | 0 bytes |
//!
//! The table kernel is the default path; the bitwise kernel is the
//! reference the table optimization is verified against.

// Table lookups use an index masked to 0xFF against a [u32; 256]; the
// bound holds statically even though clippy cannot see it.
#![allow(clippy::indexing_slicing)]

use crate::{bitwise, params::CrcParams, table::generate_table};

/// Computation kernel selection.
///
/// Both kernels implement the same CRC; [`Kernel::Table`] trades 1 KiB of
/// precomputed state for byte-at-a-time throughput.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Kernel {
  /// Byte-at-a-time lookup table kernel (default).
  #[default]
  Table,
  /// Bit-at-a-time direct kernel, no lookup table.
  Bitwise,
}

impl Kernel {
  /// Kernel name for display and bench labels.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Table => "table",
      Self::Bitwise => "bitwise",
    }
  }
}

/// MSB-first CRC-32 engine.
///
/// # Example
///
/// ```
/// use ethfcs::Crc32;
///
/// let engine = Crc32::new();
/// assert_eq!(engine.checksum(b"123456789"), 0xFC89_1918);
/// assert_eq!(engine.checksum(b""), 0x0000_0000);
/// ```
#[derive(Clone)]
pub struct Crc32 {
  params: CrcParams,
  table: [u32; 256],
}

impl Default for Crc32 {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Crc32 {
  /// Create an engine with the Ethernet FCS parameters.
  ///
  /// `const`-evaluable: the Ethernet lookup table is computed at compile
  /// time when constructed in const context.
  #[must_use]
  pub const fn new() -> Self {
    Self::with_params(CrcParams::ETHERNET)
  }

  /// Create an engine for a custom parameter set.
  ///
  /// The lookup table for `params.polynomial` is generated here, once,
  /// and cached for the lifetime of the engine.
  #[must_use]
  pub const fn with_params(params: CrcParams) -> Self {
    Self {
      params,
      table: generate_table(params.polynomial),
    }
  }

  /// The parameter set this engine was built with.
  #[must_use]
  pub const fn params(&self) -> CrcParams {
    self.params
  }

  /// Borrow the cached lookup table.
  #[must_use]
  pub const fn table(&self) -> &[u32; 256] {
    &self.table
  }

  /// Compute the CRC-32 of `data` with the table kernel.
  ///
  /// The final XOR is applied here; callers receive the finished CRC.
  /// An empty slice yields `initial ^ xor_out` (0 for Ethernet).
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u32 {
    let mut crc = self.params.initial;
    for &byte in data {
      let idx = ((crc >> 24) ^ byte as u32) & 0xFF;
      crc = (crc << 8) ^ self.table[idx as usize];
    }
    crc ^ self.params.xor_out
  }

  /// Compute the CRC-32 of `data` with the bitwise kernel.
  ///
  /// Produces results identical to [`checksum`](Self::checksum) for every
  /// input; kept as the table-free reference path.
  #[must_use]
  pub const fn checksum_bitwise(&self, data: &[u8]) -> u32 {
    bitwise::compute(self.params.polynomial, self.params.initial, data) ^ self.params.xor_out
  }

  /// Compute the CRC-32 of `data` with an explicitly chosen kernel.
  #[must_use]
  pub fn compute(&self, data: &[u8], kernel: Kernel) -> u32 {
    match kernel {
      Kernel::Table => self.checksum(data),
      Kernel::Bitwise => self.checksum_bitwise(data),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn check_value_both_kernels() {
    let engine = Crc32::new();
    assert_eq!(engine.checksum(b"123456789"), 0xFC89_1918);
    assert_eq!(engine.checksum_bitwise(b"123456789"), 0xFC89_1918);
  }

  #[test]
  fn hello_vector() {
    let engine = Crc32::new();
    assert_eq!(engine.checksum(b"HELLO"), 0x7328_3245);
  }

  #[test]
  fn empty_input() {
    let engine = Crc32::new();
    // Register never moves: init ^ xor_out, which is 0 for Ethernet.
    assert_eq!(engine.checksum(&[]), 0x0000_0000);
    assert_eq!(engine.checksum_bitwise(&[]), 0x0000_0000);
  }

  #[test]
  fn kernels_agree_on_single_bytes() {
    let engine = Crc32::new();
    for byte in 0u8..=255 {
      let data = [byte];
      assert_eq!(
        engine.checksum(&data),
        engine.checksum_bitwise(&data),
        "kernel divergence on byte {byte:#04x}"
      );
    }
  }

  #[test]
  fn dispatch_selects_kernel() {
    let engine = Crc32::new();
    let data = b"The quick brown fox jumps over the lazy dog";
    assert_eq!(engine.compute(data, Kernel::Table), engine.checksum(data));
    assert_eq!(engine.compute(data, Kernel::Bitwise), engine.checksum_bitwise(data));
    assert_eq!(engine.compute(data, Kernel::Table), engine.compute(data, Kernel::Bitwise));
  }

  #[test]
  fn const_engine() {
    // Table generation must be const-evaluable for the Ethernet params.
    const ENGINE: Crc32 = Crc32::new();
    assert_eq!(ENGINE.checksum(b"123456789"), 0xFC89_1918);
  }

  #[test]
  fn custom_initial_value() {
    let params = CrcParams {
      initial: 0x0000_0000,
      ..CrcParams::ETHERNET
    };
    let engine = Crc32::with_params(params);
    // Both kernels must honor the custom preset identically.
    assert_eq!(engine.checksum(b"123456789"), engine.checksum_bitwise(b"123456789"));
    assert_ne!(engine.checksum(b"123456789"), Crc32::new().checksum(b"123456789"));
  }

  #[test]
  fn kernel_names() {
    assert_eq!(Kernel::Table.name(), "table");
    assert_eq!(Kernel::Bitwise.name(), "bitwise");
    assert_eq!(Kernel::default(), Kernel::Table);
  }
}
