//! Transport layer abstraction.
//!
//! This module provides the `Transport` trait that allows the protocol
//! to work with any underlying byte-oriented link (UART, TCP, in-memory
//! buffers, etc.). The contract is deliberately minimal: move one byte,
//! blocking until the link is ready. Framing, buffering and integrity
//! are the codec's and engine's job, never the transport's.
//!
//! # Implementations
//!
//! - `LoopbackTransport`: in-memory loopback for testing
//! - `NullTransport`: discards all data (testing)
//! - `StdTransport`: wraps std::io Read/Write types (requires `std` feature)
//!
//! # Example
//!
//! ```rust,ignore
//! use pframe::transport::{LoopbackTransport, Transport};
//!
//! let mut transport = LoopbackTransport::<64>::new();
//! transport.write_byte(0x42)?;
//! assert_eq!(transport.read_byte()?, 0x42);
//! ```

use crate::error::{Error, Result};

/// Transport trait for moving single bytes over a link.
///
/// Both operations block until the link is ready; there is no timeout
/// and no cancellation, so a peer that never becomes ready stalls the
/// caller indefinitely. Accepted bytes are delivered losslessly and in
/// order; corruption in transit is what the frame CRC exists to catch.
pub trait Transport {
    /// Writes one byte, blocking until the link can accept it.
    fn write_byte(&mut self, byte: u8) -> Result<()>;

    /// Reads one byte, blocking until one has arrived.
    fn read_byte(&mut self) -> Result<u8>;

    /// Writes every byte of `buf` in order.
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        for &byte in buf {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Fills `buf` completely, one byte at a time.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        for slot in buf {
            *slot = self.read_byte()?;
        }
        Ok(())
    }
}

/// A loopback transport for testing.
///
/// Bytes written are immediately available to be read back, in order.
/// Since a single-threaded in-memory queue cannot truly block, an empty
/// queue reads and a full queue writes fail with [`Error::WouldBlock`].
#[derive(Debug)]
pub struct LoopbackTransport<const N: usize> {
    queue: heapless::Deque<u8, N>,
}

impl<const N: usize> LoopbackTransport<N> {
    /// Creates a new empty loopback transport.
    pub fn new() -> Self {
        Self {
            queue: heapless::Deque::new(),
        }
    }

    /// Returns the number of bytes available to read.
    pub fn available(&self) -> usize {
        self.queue.len()
    }

    /// Clears all buffered data.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl<const N: usize> Default for LoopbackTransport<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Transport for LoopbackTransport<N> {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.queue.push_back(byte).map_err(|_| Error::WouldBlock)
    }

    fn read_byte(&mut self) -> Result<u8> {
        self.queue.pop_front().ok_or(Error::WouldBlock)
    }
}

/// A null transport that discards all writes and produces no input.
///
/// Useful for testing or measuring overhead.
#[derive(Debug, Default)]
pub struct NullTransport {
    bytes_written: usize,
}

impl NullTransport {
    /// Creates a new null transport.
    pub fn new() -> Self {
        Self { bytes_written: 0 }
    }

    /// Returns the total number of bytes written.
    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Resets the byte counter.
    pub fn reset(&mut self) {
        self.bytes_written = 0;
    }
}

impl Transport for NullTransport {
    fn write_byte(&mut self, _byte: u8) -> Result<()> {
        self.bytes_written += 1;
        Ok(())
    }

    fn read_byte(&mut self) -> Result<u8> {
        Err(Error::WouldBlock)
    }
}

/// Wrapper for std::io types.
///
/// Any blocking `std::io` stream (a TCP connection, a serial port
/// device file) becomes a byte transport with the blocking semantics
/// the engine expects.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct StdTransport<T> {
    inner: T,
}

#[cfg(feature = "std")]
impl<T> StdTransport<T> {
    /// Creates a new StdTransport wrapping the given type.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner type.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Returns a mutable reference to the inner type.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consumes the wrapper and returns the inner type.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<T: std::io::Read + std::io::Write> Transport for StdTransport<T> {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        std::io::Write::write_all(&mut self.inner, &[byte]).map_err(|_| Error::Io)
    }

    fn read_byte(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        std::io::Read::read_exact(&mut self.inner, &mut buf).map_err(|_| Error::Io)?;
        Ok(buf[0])
    }
}
