//! Common test utilities
//!
//! Shared across the integration tests of this crate.

#![allow(dead_code)]

pub mod gateway;

#[allow(unused_imports)]
pub use gateway::{RecordedCall, RecordingGateway};

use std::path::Path;
use std::sync::Arc;

use tutorcore::{DialogueController, DocumentDelivery, NavigationStore, TopicCatalog};

/// Controller over `catalog` with documents resolved against `base_dir`
/// and staged in `<base_dir>/tmp`
pub fn controller(catalog: TopicCatalog, base_dir: &Path) -> DialogueController {
    let delivery = DocumentDelivery::new(base_dir, base_dir.join("tmp")).expect("delivery client");
    DialogueController::new(Arc::new(catalog), Arc::new(NavigationStore::new()), Arc::new(delivery))
}

/// Number of entries in `dir`, zero when it does not exist
pub fn count_entries(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}

/// One-shot HTTP server on a raw socket.
///
/// Reads the request head, writes `head`, then each of `body_chunks` with
/// `pause` before it, and closes the connection. Returns the server URL.
pub async fn serve_raw(head: String, body_chunks: Vec<Vec<u8>>, pause: std::time::Duration) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => return,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        if socket.write_all(head.as_bytes()).await.is_err() {
            return;
        }
        for chunk in body_chunks {
            tokio::time::sleep(pause).await;
            if socket.write_all(&chunk).await.is_err() || socket.flush().await.is_err() {
                return;
            }
        }
        let _ = socket.shutdown().await;
    });

    format!("http://{}", addr)
}
