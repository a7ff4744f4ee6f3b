//! Fuzz target for kernel equivalence.
//!
//! Tests that:
//! - No panics on arbitrary input or parameters
//! - The table kernel always equals the bitwise kernel

#![no_main]

use arbitrary::Arbitrary;
use ethfcs::{Crc32, CrcParams, Kernel};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  polynomial: u32,
  initial: u32,
  xor_out: u32,
}

fuzz_target!(|input: Input| {
  let engine = Crc32::with_params(CrcParams {
    width: 32,
    polynomial: input.polynomial,
    initial: input.initial,
    xor_out: input.xor_out,
  });

  let table = engine.compute(&input.data, Kernel::Table);
  let bitwise = engine.compute(&input.data, Kernel::Bitwise);

  assert_eq!(table, bitwise, "kernel divergence");
});
