//! Ethernet CRC-32 frame check sequence computation and validation.
//!
//! This crate implements the MSB-first CRC-32 used by the Ethernet frame
//! check sequence (polynomial 0x04C11DB7, register preset and final state
//! complemented — the CRC-32/BZIP2 model), derives the FCS as the one's
//! complement of the CRC, and validates received frames against a claimed
//! FCS.
//!
//! # Kernels
//!
//! Two computation kernels are provided and agree bit-for-bit on every
//! input:
//!
//! | Kernel | Strategy | Memory | Use |
//! |--------|----------|--------|-----|
//! | table | byte-at-a-time lookup | 1 KiB | default path |
//! | bitwise | bit-at-a-time reduction | 0 bytes | reference, audit |
//!
//! # Example
//!
//! ```
//! use ethfcs::{Crc32, FrameStatus};
//!
//! let engine = Crc32::new();
//!
//! let check = engine.frame_check(b"HELLO");
//! assert_eq!(check.crc, 0x7328_3245);
//! assert_eq!(check.fcs, 0x8CD7_CDBA);
//!
//! assert_eq!(engine.validate(b"HELLO", check.fcs), FrameStatus::Intact);
//! assert_eq!(engine.validate(b"HELLO", check.fcs ^ 1), FrameStatus::Corrupted);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | CLI front end; implies `alloc` |
//! | `alloc` | Yes | Boundary adapter ([`hex`]) returning `Vec`/`String` |
//!
//! # no_std Support
//!
//! The engine itself is `no_std` with no dependencies:
//!
//! ```toml
//! [dependencies]
//! ethfcs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod bitwise;
mod engine;
mod frame;
mod params;
pub mod table;

#[cfg(feature = "alloc")]
pub mod hex;

mod proptests;

pub use engine::{Crc32, Kernel};
pub use frame::{FrameCheck, FrameStatus};
pub use params::CrcParams;
