/// WebSocket delivery to the hosted renderer relay
use std::time::Duration;

use tungstenite::Message;
use voxelamming_core::{Transport, TransportError};

/// Public relay the renderer apps listen on
pub const DEFAULT_SERVER: &str = "wss://websocket.voxelamming.com";

/// Opens one connection per send: joins the room, sends the payload, waits
/// for the relay to forward it, then closes.
pub struct WebSocketTransport {
    url: String,
    linger: Duration,
}

impl WebSocketTransport {
    pub fn new(url: impl Into<String>, linger: Duration) -> Self {
        Self {
            url: url.into(),
            linger,
        }
    }
}

impl Transport for WebSocketTransport {
    fn send(&mut self, room: &str, payload: &str) -> Result<(), TransportError> {
        let (mut socket, _response) = tungstenite::connect(self.url.as_str())
            .map_err(|e| TransportError::Connect(format!("{}: {e}", self.url)))?;

        socket
            .send(Message::Text(room.to_string()))
            .map_err(|e| TransportError::Send(e.to_string()))?;
        log::info!("joined room: {room}");

        socket
            .send(Message::Text(payload.to_string()))
            .map_err(|e| TransportError::Send(e.to_string()))?;
        log::info!("sent {} bytes", payload.len());

        std::thread::sleep(self.linger);

        if let Err(e) = socket.close(None) {
            log::debug!("close handshake failed: {e}");
        }
        Ok(())
    }
}
