//! Frame definition and serialization for the packet protocol.
//!
//! A frame is the only unit of transmission in the protocol. Every
//! frame occupies exactly [`FRAME_WIRE_SIZE`] bytes on the wire; there
//! are no delimiters and no escaping, so peers must stay byte-aligned.
//!
//! # Frame Format
//!
//! ```text
//!  0        1        2        3        4        5        6        7        8        9
//! +--------+--------+--------+--------+--------+--------+--------+--------+--------+--------+
//! | length |                    data (padded with 0xFF)                           |  crc   |
//! +--------+--------+--------+--------+--------+--------+--------+--------+--------+--------+
//! ```

use super::checksum::Crc8;
use crate::error::{Error, Result};

pub use crate::{DATA_CAPACITY, FRAME_WIRE_SIZE, PAD_BYTE};

/// Control codes carried as single-byte payloads.
///
/// A control frame is an ordinary frame with `length == 1` and the
/// code in `data[0]`; nothing else distinguishes it from a data frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ControlCode {
    /// Positive acknowledgment.
    Ack = 0x12,

    /// Request to retransmit the previous frame.
    Rck = 0x13,
}

impl ControlCode {
    /// Converts a byte to a ControlCode.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x12 => Some(Self::Ack),
            0x13 => Some(Self::Rck),
            _ => None,
        }
    }

    /// Returns the wire byte for this code.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// A frame in the packet protocol.
///
/// Frames are immutable value objects: the CRC is computed from the
/// payload at construction and can never be set by hand. A fresh frame
/// is built for each transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Number of meaningful payload bytes (0..=DATA_CAPACITY).
    length: u8,

    /// Payload region, padded with [`PAD_BYTE`] beyond `length`.
    data: [u8; DATA_CAPACITY],

    /// CRC-8 over the logical payload (`data[..length]`).
    crc: u8,
}

impl Frame {
    /// Creates a new frame carrying the given payload.
    ///
    /// Fails with [`Error::LengthExceeded`] when the payload is longer
    /// than [`DATA_CAPACITY`]; no partial frame is produced.
    pub fn new(payload: &[u8]) -> Result<Self> {
        if payload.len() > DATA_CAPACITY {
            return Err(Error::LengthExceeded);
        }

        let mut data = [PAD_BYTE; DATA_CAPACITY];
        data[..payload.len()].copy_from_slice(payload);

        Ok(Self {
            length: payload.len() as u8,
            data,
            crc: Crc8::compute(payload),
        })
    }

    /// Creates a control frame carrying the given code.
    pub fn control(code: ControlCode) -> Self {
        let mut data = [PAD_BYTE; DATA_CAPACITY];
        data[0] = code.as_u8();

        Self {
            length: 1,
            data,
            crc: Crc8::compute(&data[..1]),
        }
    }

    /// Creates an ACK frame.
    pub fn ack() -> Self {
        Self::control(ControlCode::Ack)
    }

    /// Creates an RCK (retransmit request) frame.
    pub fn rck() -> Self {
        Self::control(ControlCode::Rck)
    }

    /// Returns the number of meaningful payload bytes.
    pub const fn len(&self) -> u8 {
        self.length
    }

    /// Returns true if the frame carries no payload.
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the logical payload (`length` bytes, without padding).
    pub fn payload(&self) -> &[u8] {
        &self.data[..self.length as usize]
    }

    /// Returns the full padded data region.
    pub const fn data(&self) -> &[u8; DATA_CAPACITY] {
        &self.data
    }

    /// Returns the frame's CRC-8 trailer byte.
    pub const fn crc(&self) -> u8 {
        self.crc
    }

    /// Returns the control code if this frame carries one.
    ///
    /// Control frames are recognized by convention only: a payload of
    /// exactly one byte matching a known code.
    pub fn control_code(&self) -> Option<ControlCode> {
        if self.length == 1 {
            ControlCode::from_u8(self.data[0])
        } else {
            None
        }
    }

    /// Serializes the frame into its wire representation.
    ///
    /// The layout is `[length][data[0..8]][crc]`, in that byte order.
    pub fn serialize(&self) -> [u8; FRAME_WIRE_SIZE] {
        let mut buf = [0u8; FRAME_WIRE_SIZE];
        buf[0] = self.length;
        buf[1..1 + DATA_CAPACITY].copy_from_slice(&self.data);
        buf[FRAME_WIRE_SIZE - 1] = self.crc;
        buf
    }

    /// Deserializes a frame from the provided bytes.
    ///
    /// Fails with [`Error::Truncated`] if fewer than [`FRAME_WIRE_SIZE`]
    /// bytes are available, [`Error::LengthExceeded`] if the length byte
    /// is out of range, and [`Error::CrcMismatch`] if the recomputed CRC
    /// does not match the trailing byte or the padding has been
    /// disturbed.
    pub fn deserialize(buf: &[u8]) -> Result<Self> {
        if buf.len() < FRAME_WIRE_SIZE {
            return Err(Error::Truncated);
        }

        let length = buf[0];
        if length as usize > DATA_CAPACITY {
            return Err(Error::LengthExceeded);
        }

        let mut data = [0u8; DATA_CAPACITY];
        data.copy_from_slice(&buf[1..1 + DATA_CAPACITY]);

        let stored_crc = buf[FRAME_WIRE_SIZE - 1];
        if Crc8::compute(&data[..length as usize]) != stored_crc {
            return Err(Error::CrcMismatch);
        }

        // The CRC covers only the logical payload; the padding is part
        // of the canonical encoding and must still be intact.
        if !data[length as usize..].iter().all(|&b| b == PAD_BYTE) {
            return Err(Error::CrcMismatch);
        }

        Ok(Self {
            length,
            data,
            crc: stored_crc,
        })
    }
}

impl core::fmt::Display for Frame {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "length: {} | data:", self.length)?;
        for byte in &self.data {
            write!(f, " {byte:02X}")?;
        }
        write!(f, " | crc: {:02X}", self.crc)
    }
}
