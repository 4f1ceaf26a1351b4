#![warn(missing_docs)]
//! A Rust implementation of the Fletcher-4 checksum.
//!
//! The checksum keeps four 64-bit running sums `a, b, c, d`. Input is consumed as
//! little-endian 32-bit words, each folding through the cascade
//! `a += w; b += a; c += b; d += c` with wrapping arithmetic. The 32 byte digest is
//! `a, b, c, d` serialized as little-endian 64-bit integers.
//!
//! Fletcher-4 is an error-detection checksum, not a cryptographic hash.
//!
//! The crate has two entry points:
//!
//! - [`checksum::Digest`] is the strict accumulator. Every write must be a multiple of
//!   4 bytes, anything else panics. Callers that cannot guarantee aligned writes must
//!   buffer partial words themselves.
//! - [`fletcher4core::Fletcher4`] is a buffered convenience type built on the `digest`
//!   traits. It keeps partial words between writes and implements `io::Write`, but
//!   still panics if it is finalized with a partial word pending.
//!
//! # Example
//! ```
//! use fletcher4::checksum;
//! use fletcher4::hash::{Fletcher64x4, Hasher};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!   let mut h = checksum::new();
//!   let bytes_written = h.write(&[1, 2, 3, 4, 5, 6, 7, 8])?;
//!   assert_eq!(bytes_written, 8);
//!   assert_eq!(h.sum64x4(), [0x0c0a0806, 0x100d0a07, 0x14100c08, 0x18130e09]);
//!
//!   let output = h.sum(vec![]);
//!   assert_eq!(output.len(), checksum::SIZE);
//!   println!("Result: {}", hex::encode(&output));
//!
//!   Ok(())
//! }
//! ```
/// `checksum` holds the fletcher4 accumulator which requires word aligned writes.
pub mod checksum;
/// `fletcher4core` adapts the checksum to the `digest` core API.
pub mod fletcher4core;
/// `hash` defines the generic hashing contract and its fletcher4 extension.
pub mod hash;
