use log::{info, warn};
use pframe::transport::StdTransport;
use pframe::{Engine, Error};
use std::net::{TcpListener, TcpStream};

const DEFAULT_ADDR: &str = "127.0.0.1:7878";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ADDR.to_string());

    let listener = TcpListener::bind(&addr).expect("Failed to bind");
    info!("Echo peer listening on {addr}");

    loop {
        let (stream, peer) = listener.accept().expect("Failed to accept connection");
        info!("Peer connected from {peer}");
        handle_connection(stream);
    }
}

/// Runs the engine in its default echo disposition until the peer
/// disconnects: every inbound frame is re-emitted verbatim, corrupt
/// ones included.
fn handle_connection(stream: TcpStream) {
    let mut engine = Engine::new(StdTransport::new(stream));

    loop {
        match engine.receive_and_react() {
            Ok(inbound) => {
                if inbound.is_corrupt() {
                    warn!("passed through corrupt frame: {:02X?}", inbound.raw());
                }
            }
            Err(Error::Io) => break,
            Err(e) => {
                warn!("engine error: {e}");
                break;
            }
        }
    }

    let stats = engine.stats();
    info!(
        "Peer disconnected: {} frames echoed, {} CRC errors observed",
        stats.frames_received, stats.crc_errors
    );
}
