//! Const-fn CRC-32 lookup table generation.
//!
//! A single 256-entry table (one entry per possible leading byte) turns
//! the bit-at-a-time reduction into a byte-at-a-time lookup. The table is
//! a pure function of the polynomial: for 0x04C11DB7 it is fixed and
//! deterministic, and because generation is `const fn` the Ethernet table
//! is embedded in the binary at compile time.
//!
//! Total size: 256 * 4 = 1 KiB.

// All array indexing in this module uses bounded loop indices (0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically
// guaranteed.
#![allow(clippy::indexing_slicing)]

/// Generate a single lookup table entry.
///
/// The entry for index `i` is the CRC register state after clocking the
/// byte `i` through eight MSB-first reduction steps: the byte is placed in
/// the top of the register, and each step shifts left once, XORing the
/// polynomial when the bit shifted out was set. Shifted-out bits are
/// discarded (all arithmetic is modulo 2^32).
#[must_use]
pub const fn table_entry(polynomial: u32, index: u8) -> u32 {
  let mut crc = (index as u32) << 24;
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

/// Generate the full 256-entry lookup table for `polynomial`.
///
/// Pure and deterministic; two calls with the same polynomial produce
/// identical tables. The engine calls this once at construction and the
/// table is read-only afterwards, so it is safe to share across threads.
#[must_use]
pub const fn generate_table(polynomial: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0usize;
  while i < 256 {
    table[i] = table_entry(polynomial, i as u8);
    i += 1;
  }
  table
}
