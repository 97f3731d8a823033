//! Core data structures for the packet protocol.
//!
//! This module contains the fundamental building blocks:
//! - Frame: the fixed 10-byte wire-level protocol unit
//! - ControlCode: the ACK/RCK control vocabulary
//! - Checksum: CRC-8 for data integrity verification

mod checksum;
mod frame;

pub use checksum::Crc8;
pub use frame::{ControlCode, Frame};
