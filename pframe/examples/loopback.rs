//! Loopback walk-through of the frame protocol.
//!
//! Demonstrates frame construction, the wire format, corruption
//! detection, and the engine's echo disposition without any real link.
//!
//! Run with: cargo run --example loopback --features std

use pframe::transport::{LoopbackTransport, Transport};
use pframe::{Crc8, Engine, Frame, FRAME_WIRE_SIZE};

fn main() {
    println!("=== pframe Loopback Example ===\n");

    // Example 1: frame construction and rendering
    println!("1. Frame construction:");
    let frame = Frame::new(&[0x01, 0x02, 0x03]).expect("payload fits");
    println!("   {frame}");
    println!("   wire bytes: {:02X?}\n", frame.serialize());

    // Example 2: control frames
    println!("2. Control frames:");
    println!("   ACK: {}", Frame::ack());
    println!("   RCK: {}\n", Frame::rck());

    // Example 3: corruption detection
    println!("3. Corruption detection:");
    let mut wire = frame.serialize();
    println!("   valid frame decodes: {:?}", Frame::deserialize(&wire).is_ok());
    wire[4] ^= 0x01;
    match Frame::deserialize(&wire) {
        Ok(_) => println!("   corrupted frame unexpectedly decoded"),
        Err(e) => println!("   corrupted frame rejected: {e}"),
    }
    println!();

    // Example 4: CRC-8 by hand
    println!("4. CRC-8:");
    let crc = Crc8::compute(b"123456789");
    println!("   crc8(\"123456789\") = {crc:02X}\n");

    // Example 5: engine echo over a loopback transport
    println!("5. Engine echo:");
    let mut engine = Engine::new(LoopbackTransport::<64>::new());

    engine.send_data(&[0xAA, 0xBB]).expect("send");
    let inbound = engine.receive_and_react().expect("receive");
    println!("   received: {}", inbound.frame().expect("valid"));

    let mut echoed = [0u8; FRAME_WIRE_SIZE];
    engine.transport_mut().read_exact(&mut echoed).expect("echo");
    println!("   echoed back: {echoed:02X?}");
    println!(
        "   stats: {} sent / {} received",
        engine.stats().frames_sent,
        engine.stats().frames_received
    );

    println!("\n=== Loopback Example Complete ===");
}
