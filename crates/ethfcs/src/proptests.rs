//! Property tests for the CRC engine and validator.
//!
//! Two invariants carry the whole design and are exercised here over
//! arbitrary input:
//!
//! 1. **Kernel equivalence**: the table kernel equals the bitwise kernel
//!    for every byte sequence and every parameter set. The bitwise kernel
//!    is the mathematical definition; this proves the table optimization.
//! 2. **Validation round-trip**: a frame validated against its own FCS is
//!    intact, and any single-bit corruption of data or FCS is detected.

#![cfg(all(test, not(miri)))]

extern crate std;

use proptest::prelude::*;

use crate::{Crc32, CrcParams, FrameStatus, Kernel, table::generate_table};

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn kernels_agree(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let engine = Crc32::new();
    prop_assert_eq!(engine.checksum(&data), engine.checksum_bitwise(&data));
  }

  #[test]
  fn kernels_agree_for_any_params(
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    polynomial in any::<u32>(),
    initial in any::<u32>(),
    xor_out in any::<u32>(),
  ) {
    let engine = Crc32::with_params(CrcParams { width: 32, polynomial, initial, xor_out });
    prop_assert_eq!(
      engine.compute(&data, Kernel::Table),
      engine.compute(&data, Kernel::Bitwise)
    );
  }

  #[test]
  fn round_trip_is_intact(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let engine = Crc32::new();
    let check = engine.frame_check(&data);
    prop_assert_eq!(check.fcs, !check.crc);
    prop_assert_eq!(engine.validate(&data, check.fcs), FrameStatus::Intact);
  }

  #[test]
  fn single_bit_flip_in_data_is_detected(
    data in proptest::collection::vec(any::<u8>(), 1..=512),
    flip in any::<usize>(),
  ) {
    // Exact for CRC: every single-bit error changes the checksum.
    let engine = Crc32::new();
    let fcs = engine.frame_check(&data).fcs;

    let bit = flip % (data.len() * 8);
    let mut corrupted = data;
    corrupted[bit / 8] ^= 1 << (bit % 8);

    prop_assert_eq!(engine.validate(&corrupted, fcs), FrameStatus::Corrupted);
  }

  #[test]
  fn single_bit_flip_in_fcs_is_detected(
    data in proptest::collection::vec(any::<u8>(), 0..=512),
    bit in 0u32..32,
  ) {
    let engine = Crc32::new();
    let fcs = engine.frame_check(&data).fcs;
    prop_assert_eq!(engine.validate(&data, fcs ^ (1 << bit)), FrameStatus::Corrupted);
  }

  #[test]
  fn table_generation_is_deterministic(polynomial in any::<u32>()) {
    prop_assert_eq!(generate_table(polynomial), generate_table(polynomial));
  }
}
