use log::{info, warn};
use pframe::transport::StdTransport;
use pframe::{Engine, Frame};
use std::net::TcpStream;
use std::thread;
use std::time::Duration;

const DEFAULT_ADDR: &str = "127.0.0.1:7878";

/// Pacing between transmission bursts, standing in for the timer tick
/// the original deployment derived from hardware.
const TICK: Duration = Duration::from_secs(1);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ADDR.to_string());

    info!("Connecting to echo peer at {addr}...");
    let stream = TcpStream::connect(&addr).expect("Failed to connect to echo peer");
    info!("Connected!");

    let mut engine = Engine::new(StdTransport::new(stream));

    let test_frame =
        Frame::new(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]).expect("payload fits");
    let ack_frame = Frame::ack();
    let rck_frame = Frame::rck();

    loop {
        info!("Sending test frame:");
        info!("{test_frame}");
        info!("{ack_frame}");
        info!("{rck_frame}");

        engine.send_frame(&test_frame).expect("Failed to send test frame");
        engine.send_rck().expect("Failed to send RCK");
        engine.send_ack().expect("Failed to send ACK");

        // The peer echoes every frame back; read and verify all three.
        for expected in [&test_frame, &rck_frame, &ack_frame] {
            let inbound = engine.receive().expect("Failed to read echo");
            match inbound.frame() {
                Some(frame) if frame == expected => info!("echo ok: {frame}"),
                Some(frame) => warn!("unexpected echo: {frame}"),
                None => warn!("corrupt echo: {:02X?}", inbound.raw()),
            }
        }

        let stats = engine.stats();
        info!(
            "totals: {} frames sent, {} frames received, {} CRC errors",
            stats.frames_sent, stats.frames_received, stats.crc_errors
        );

        thread::sleep(TICK);
    }
}
