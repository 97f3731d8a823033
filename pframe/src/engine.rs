//! Protocol engine driving frame exchange over a transport.
//!
//! The engine owns a [`Transport`] injected at construction and moves
//! whole frames across it, one byte at a time, in wire-layout order.
//! It is stateless between calls: no sessions, no sequence numbers,
//! no outstanding-frame bookkeeping. "Protocol" here means the frame
//! format plus the ACK/RCK control vocabulary, not a negotiated
//! session.

use crate::core::{ControlCode, Frame};
use crate::error::{Error, Result};
use crate::transport::Transport;
use crate::FRAME_WIRE_SIZE;

/// What the engine does with a frame it has received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disposition {
    /// Re-emit the received bytes verbatim over the transport.
    ///
    /// Used for loopback verification against a peer device. This is
    /// the default.
    #[default]
    Echo,

    /// Render the frame through the logging facade instead of echoing.
    Render,
}

/// Statistics about engine operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct EngineStats {
    /// Frames sent (including echoes and RCK responses).
    pub frames_sent: u64,

    /// Frames received.
    pub frames_received: u64,

    /// Bytes sent.
    pub bytes_sent: u64,

    /// Bytes received.
    pub bytes_received: u64,

    /// Inbound frames whose integrity check failed.
    pub crc_errors: u64,
}

/// One frame's worth of bytes read off the transport.
///
/// The raw bytes are kept even when validation fails, since the echo
/// disposition passes corrupted frames through unchanged; the verdict
/// travels alongside so callers can still see the failure.
#[derive(Debug, Clone, Copy)]
pub struct Inbound {
    raw: [u8; FRAME_WIRE_SIZE],
    frame: Option<Frame>,
}

impl Inbound {
    /// Returns the raw wire bytes as received.
    pub const fn raw(&self) -> &[u8; FRAME_WIRE_SIZE] {
        &self.raw
    }

    /// Returns the validated frame, or None if validation failed.
    pub const fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Returns true if the integrity check failed.
    pub const fn is_corrupt(&self) -> bool {
        self.frame.is_none()
    }

    /// Returns the control code if the frame is valid and carries one.
    pub fn control_code(&self) -> Option<ControlCode> {
        self.frame.as_ref().and_then(Frame::control_code)
    }
}

/// Protocol engine over an injected transport.
///
/// # Example
///
/// ```rust,ignore
/// use pframe::{Engine, transport::StdTransport};
///
/// let mut engine = Engine::new(StdTransport::new(stream));
/// engine.send_data(b"hi")?;
/// let inbound = engine.receive_and_react()?;
/// ```
pub struct Engine<T> {
    /// The injected byte transport.
    transport: T,

    /// Reaction to inbound frames.
    disposition: Disposition,

    /// Answer corrupt frames with an RCK instead of passing them through.
    rck_on_corrupt: bool,

    /// Operation counters.
    stats: EngineStats,
}

impl<T: Transport> Engine<T> {
    /// Creates an engine with the default configuration: echo
    /// disposition, corrupt frames passed through unchanged.
    pub fn new(transport: T) -> Self {
        EngineBuilder::new().build(transport)
    }

    /// Returns engine statistics.
    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }

    /// Returns a reference to the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns a mutable reference to the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consumes the engine and returns the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Builds a data frame from `payload` and transmits it.
    ///
    /// Fails with [`Error::LengthExceeded`] for oversized payloads
    /// without writing anything. Acknowledgment handling is the
    /// caller's responsibility; this call does not wait for a
    /// response.
    pub fn send_data(&mut self, payload: &[u8]) -> Result<()> {
        let frame = Frame::new(payload)?;
        self.send_frame(&frame)
    }

    /// Transmits an ACK control frame.
    pub fn send_ack(&mut self) -> Result<()> {
        self.send_frame(&Frame::ack())
    }

    /// Transmits an RCK (retransmit request) control frame.
    pub fn send_rck(&mut self) -> Result<()> {
        self.send_frame(&Frame::rck())
    }

    /// Transmits an already-built frame.
    pub fn send_frame(&mut self, frame: &Frame) -> Result<()> {
        let wire = frame.serialize();
        self.write_wire(&wire)?;

        log::trace!("sent frame: {frame}");

        Ok(())
    }

    /// Reads exactly one frame off the transport and validates it.
    ///
    /// Blocks on each byte as the transport dictates. An integrity
    /// failure is not an error at this level: the raw bytes come back
    /// in the [`Inbound`] report with the frame slot empty, and the
    /// CRC error counter is bumped.
    pub fn receive(&mut self) -> Result<Inbound> {
        let mut raw = [0u8; FRAME_WIRE_SIZE];
        self.transport.read_exact(&mut raw)?;

        self.stats.frames_received += 1;
        self.stats.bytes_received += FRAME_WIRE_SIZE as u64;

        let frame = match Frame::deserialize(&raw) {
            Ok(frame) => {
                log::trace!("received frame: {frame}");
                Some(frame)
            }
            Err(Error::CrcMismatch) | Err(Error::LengthExceeded) => {
                self.stats.crc_errors += 1;
                log::debug!("received corrupt frame: {raw:02X?}");
                None
            }
            Err(e) => return Err(e),
        };

        Ok(Inbound { raw, frame })
    }

    /// Reads one frame and reacts to it according to the disposition.
    ///
    /// In echo disposition the received bytes are re-emitted verbatim,
    /// corrupt frames included, unless the engine was configured to
    /// answer corruption with an RCK. In render disposition the frame
    /// is logged instead.
    ///
    /// Inbound ACK/RCK codes are classified in the report but not
    /// consumed; interpreting them is left to the caller.
    pub fn receive_and_react(&mut self) -> Result<Inbound> {
        let inbound = self.receive()?;
        self.react(&inbound)?;
        Ok(inbound)
    }

    fn react(&mut self, inbound: &Inbound) -> Result<()> {
        if inbound.is_corrupt() && self.rck_on_corrupt {
            return self.send_rck();
        }

        match self.disposition {
            Disposition::Echo => {
                let raw = *inbound.raw();
                self.write_wire(&raw)?;
            }
            Disposition::Render => match inbound.frame() {
                Some(frame) => log::info!("{frame}"),
                None => log::warn!("corrupt frame: {:02X?}", inbound.raw()),
            },
        }

        Ok(())
    }

    fn write_wire(&mut self, wire: &[u8; FRAME_WIRE_SIZE]) -> Result<()> {
        self.transport.write_all(wire)?;

        self.stats.frames_sent += 1;
        self.stats.bytes_sent += FRAME_WIRE_SIZE as u64;

        Ok(())
    }
}

/// Builder for creating Engine instances with custom configuration.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    disposition: Disposition,
    rck_on_corrupt: bool,
}

impl EngineBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reaction to inbound frames.
    pub fn disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = disposition;
        self
    }

    /// Answers corrupt inbound frames with an RCK instead of passing
    /// them through unchanged.
    pub fn rck_on_corrupt(mut self, enable: bool) -> Self {
        self.rck_on_corrupt = enable;
        self
    }

    /// Builds the Engine over the given transport.
    pub fn build<T: Transport>(self, transport: T) -> Engine<T> {
        Engine {
            transport,
            disposition: self.disposition,
            rck_on_corrupt: self.rck_on_corrupt,
            stats: EngineStats::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::LoopbackTransport;

    fn drain(engine: &mut Engine<LoopbackTransport<64>>) -> ([u8; FRAME_WIRE_SIZE], usize) {
        let available = engine.transport().available();
        let mut buf = [0u8; FRAME_WIRE_SIZE];
        engine.transport_mut().read_exact(&mut buf).unwrap();
        (buf, available)
    }

    #[test]
    fn test_send_data_wire_bytes() {
        let mut engine = Engine::new(LoopbackTransport::<64>::new());

        engine.send_data(&[0x01, 0x02, 0x03]).unwrap();

        let (wire, available) = drain(&mut engine);
        assert_eq!(available, FRAME_WIRE_SIZE);
        assert_eq!(
            wire,
            [0x03, 0x01, 0x02, 0x03, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x48]
        );
    }

    #[test]
    fn test_send_data_oversized_writes_nothing() {
        let mut engine = Engine::new(LoopbackTransport::<64>::new());

        let payload = [0u8; 9];
        assert_eq!(engine.send_data(&payload), Err(Error::LengthExceeded));
        assert_eq!(engine.transport().available(), 0);
        assert_eq!(engine.stats().frames_sent, 0);
    }

    #[test]
    fn test_send_ack_wire_bytes() {
        let mut engine = Engine::new(LoopbackTransport::<64>::new());

        engine.send_ack().unwrap();

        let (wire, _) = drain(&mut engine);
        assert_eq!(
            wire,
            [0x01, 0x12, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7E]
        );
    }

    #[test]
    fn test_send_rck_wire_bytes() {
        let mut engine = Engine::new(LoopbackTransport::<64>::new());

        engine.send_rck().unwrap();

        let (wire, _) = drain(&mut engine);
        assert_eq!(
            wire,
            [0x01, 0x13, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x79]
        );
    }

    #[test]
    fn test_echo_reemits_valid_frame() {
        let mut engine = Engine::new(LoopbackTransport::<64>::new());

        let wire = Frame::new(&[0xAA, 0xBB]).unwrap().serialize();
        engine.transport_mut().write_all(&wire).unwrap();

        let inbound = engine.receive_and_react().unwrap();
        assert!(!inbound.is_corrupt());
        assert_eq!(inbound.frame().unwrap().payload(), &[0xAA, 0xBB]);

        let (echoed, _) = drain(&mut engine);
        assert_eq!(echoed, wire);
    }

    #[test]
    fn test_corrupt_frame_passed_through_but_flagged() {
        let mut engine = Engine::new(LoopbackTransport::<64>::new());

        let mut wire = Frame::new(&[0xAA, 0xBB]).unwrap().serialize();
        wire[FRAME_WIRE_SIZE - 1] ^= 0xFF;
        engine.transport_mut().write_all(&wire).unwrap();

        let inbound = engine.receive_and_react().unwrap();
        assert!(inbound.is_corrupt());
        assert_eq!(inbound.frame(), None);
        assert_eq!(engine.stats().crc_errors, 1);

        // The corrupted bytes still go out unchanged.
        let (echoed, _) = drain(&mut engine);
        assert_eq!(echoed, wire);
    }

    #[test]
    fn test_rck_on_corrupt_replaces_echo() {
        let mut engine = EngineBuilder::new()
            .rck_on_corrupt(true)
            .build(LoopbackTransport::<64>::new());

        let mut wire = Frame::new(&[0xAA, 0xBB]).unwrap().serialize();
        wire[5] ^= 0x10;
        engine.transport_mut().write_all(&wire).unwrap();

        let inbound = engine.receive_and_react().unwrap();
        assert!(inbound.is_corrupt());

        let (sent, available) = drain(&mut engine);
        assert_eq!(available, FRAME_WIRE_SIZE);
        assert_eq!(sent, Frame::rck().serialize());
    }

    #[test]
    fn test_render_disposition_does_not_echo() {
        let mut engine = EngineBuilder::new()
            .disposition(Disposition::Render)
            .build(LoopbackTransport::<64>::new());

        let wire = Frame::new(&[0x01]).unwrap().serialize();
        engine.transport_mut().write_all(&wire).unwrap();

        let inbound = engine.receive_and_react().unwrap();
        assert!(!inbound.is_corrupt());
        assert_eq!(engine.transport().available(), 0);
    }

    #[test]
    fn test_inbound_control_classification() {
        let mut engine = EngineBuilder::new()
            .disposition(Disposition::Render)
            .build(LoopbackTransport::<64>::new());

        engine
            .transport_mut()
            .write_all(&Frame::ack().serialize())
            .unwrap();
        let inbound = engine.receive_and_react().unwrap();
        assert_eq!(inbound.control_code(), Some(ControlCode::Ack));

        engine
            .transport_mut()
            .write_all(&Frame::rck().serialize())
            .unwrap();
        let inbound = engine.receive_and_react().unwrap();
        assert_eq!(inbound.control_code(), Some(ControlCode::Rck));

        engine
            .transport_mut()
            .write_all(&Frame::new(&[0x42]).unwrap().serialize())
            .unwrap();
        let inbound = engine.receive_and_react().unwrap();
        assert_eq!(inbound.control_code(), None);
    }

    #[test]
    fn test_stats_accounting() {
        let mut engine = Engine::new(LoopbackTransport::<64>::new());

        engine.send_data(&[0x01]).unwrap();
        assert_eq!(engine.stats().frames_sent, 1);
        assert_eq!(engine.stats().bytes_sent, FRAME_WIRE_SIZE as u64);

        // The frame just sent is sitting in the loopback; receive it.
        let inbound = engine.receive_and_react().unwrap();
        assert!(!inbound.is_corrupt());
        assert_eq!(engine.stats().frames_received, 1);
        assert_eq!(engine.stats().bytes_received, FRAME_WIRE_SIZE as u64);
        // Echo counts as a send.
        assert_eq!(engine.stats().frames_sent, 2);
    }
}
