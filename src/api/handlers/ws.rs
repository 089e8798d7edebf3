//! Default-profile WebSocket endpoint.

use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    response::Response,
};

/// Accepts a WebSocket upgrade with the default configuration and echoes
/// frames back until the peer closes.
///
/// # Endpoint
///
/// `GET /ws`
///
/// No custom transport settings: frame limits, buffering, and the close
/// handshake are whatever the default profile provides.
pub async fn ws_handler(ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(echo_socket)
}

async fn echo_socket(mut socket: WebSocket) {
    while let Some(Ok(message)) = socket.recv().await {
        match message {
            Message::Text(_) | Message::Binary(_) => {
                if socket.send(message).await.is_err() {
                    break;
                }
            }
            Message::Close(_) => break,
            // Ping/pong is handled by the transport.
            _ => {}
        }
    }
}
