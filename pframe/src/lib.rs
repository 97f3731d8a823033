//! # pframe - A Fixed-Frame Packet Protocol
//!
//! pframe is a `no_std` compatible implementation of a minimal framed
//! packet protocol for byte-oriented serial links. It provides:
//!
//! - **Fixed-size framing**: every frame is exactly 10 bytes on the wire
//! - **CRC-8 integrity checking**: corruption of any single bit is detected
//! - **Control vocabulary**: ACK and RCK (retransmit request) frames
//! - **Custom transport support**: works over anything that can move one
//!   byte at a time
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Application Layer                     │
//! ├─────────────────────────────────────────────────────────┤
//! │                    Engine Layer                          │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────────┐   │
//! │  │  Send Path  │ │ Receive &   │ │   Statistics    │   │
//! │  │             │ │ React       │ │                 │   │
//! │  └─────────────┘ └─────────────┘ └─────────────────┘   │
//! ├─────────────────────────────────────────────────────────┤
//! │                    Frame Layer                           │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────────┐   │
//! │  │   Framing   │ │   CRC-8     │ │ Control Codes   │   │
//! │  └─────────────┘ └─────────────┘ └─────────────────┘   │
//! ├─────────────────────────────────────────────────────────┤
//! │                    Transport Layer                       │
//! │  ┌─────────────────────────────────────────────────┐   │
//! │  │     Blocking byte transport (UART, TCP, ...)     │   │
//! │  └─────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire format
//!
//! ```text
//!  0        1                                8        9
//! +--------+--------------------------------+--------+
//! | length | data (padded with 0xFF)        |  crc   |
//! +--------+--------------------------------+--------+
//! ```
//!
//! The `length` byte gives the number of meaningful payload bytes
//! (0..=8); the data region is always 8 bytes, padded with `0xFF`
//! beyond `length`; the trailing byte is a CRC-8 (polynomial `0x07`)
//! over the logical payload only.
//!
//! ## Example
//!
//! ```rust,ignore
//! use pframe::{Engine, Frame};
//!
//! let mut engine = Engine::new(transport);
//!
//! // Send data
//! engine.send_data(b"hi")?;
//!
//! // Receive one frame and react to it (echo by default)
//! let inbound = engine.receive_and_react()?;
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod core;
pub mod engine;
pub mod error;
pub mod transport;

// Re-export commonly used types
pub use crate::core::{ControlCode, Crc8, Frame};
pub use engine::{Disposition, Engine, EngineBuilder, EngineStats, Inbound};
pub use error::{Error, Result};
pub use transport::Transport;

/// Number of payload bytes every frame carries on the wire.
pub const DATA_CAPACITY: usize = 8;

/// Total size of a serialized frame: length byte + data region + CRC.
pub const FRAME_WIRE_SIZE: usize = DATA_CAPACITY + 2;

/// Filler written into the data region beyond the logical payload.
pub const PAD_BYTE: u8 = 0xFF;
