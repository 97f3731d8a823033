//! Error types for the protocol crate.

use core::fmt;

/// Errors produced by the codec, engine and transport layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Requested payload is longer than the frame's data capacity.
    LengthExceeded,

    /// Fewer bytes were available than a complete frame requires.
    Truncated,

    /// Recomputed CRC disagrees with the frame's trailing byte.
    CrcMismatch,

    /// The transport cannot currently accept or produce a byte.
    WouldBlock,

    /// The underlying transport failed.
    Io,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LengthExceeded => write!(f, "payload exceeds frame data capacity"),
            Error::Truncated => write!(f, "incomplete frame"),
            Error::CrcMismatch => write!(f, "CRC checksum mismatch"),
            Error::WouldBlock => write!(f, "transport would block"),
            Error::Io => write!(f, "transport I/O error"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
