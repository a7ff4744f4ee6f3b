//! Fuzz target for frame validation.
//!
//! Tests that:
//! - A frame always validates against its own FCS
//! - A frame never validates against a different FCS
//! - The FCS is the one's complement of the CRC

#![no_main]

use arbitrary::Arbitrary;
use ethfcs::{Crc32, FrameStatus};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  claimed_fcs: u32,
}

fuzz_target!(|input: Input| {
  let engine = Crc32::new();
  let check = engine.frame_check(&input.data);

  assert_eq!(check.fcs, !check.crc, "fcs is not the complement of crc");
  assert_eq!(engine.validate(&input.data, check.fcs), FrameStatus::Intact);

  let expected = if input.claimed_fcs == check.fcs {
    FrameStatus::Intact
  } else {
    FrameStatus::Corrupted
  };
  assert_eq!(engine.validate(&input.data, input.claimed_fcs), expected);
});
