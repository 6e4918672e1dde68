//! OS signal handling for graceful shutdown
//!
//! In raw mode Ctrl+C arrives as a key event; this covers `kill` and signals
//! sent from outside the terminal.

use tokio::sync::mpsc;

use linklens_core::prelude::*;

use crate::message::Message;

/// Spawn a task that sends [`Message::Quit`] on SIGINT or SIGTERM
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match shutdown_signal().await {
            Ok(name) => {
                info!("Received {}, quitting", name);
                let _ = tx.send(Message::Quit).await;
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    });
}

/// Resolve with the name of the first termination signal received
async fn shutdown_signal() -> Result<&'static str> {
    let interrupt = async { tokio::signal::ctrl_c().await.map(|_| "SIGINT") };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        signal(SignalKind::terminate())?.recv().await;
        Ok::<_, std::io::Error>("SIGTERM")
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<std::io::Result<&'static str>>();

    let received = tokio::select! {
        r = interrupt => r,
        r = terminate => r,
    };
    received.map_err(|e| Error::terminal(format!("Failed to listen for signals: {}", e)))
}
