//! Engine - orchestration state shared by the TUI runner
//!
//! Owns the TEA state, the message channel and the backend client.

use tokio::sync::mpsc;

use linklens_api::{BackendClient, ProfileBackend};
use linklens_core::prelude::*;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Message channel capacity
const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for linklens.
pub struct Engine<B = BackendClient> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Cloned into background requests and the signal handler.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    backend: B,
}

impl Engine<BackendClient> {
    /// Create an engine talking to the backend configured in `settings`.
    ///
    /// Must be called inside a tokio runtime (spawns the signal handler).
    pub fn new(settings: Settings) -> Result<Self> {
        let backend =
            BackendClient::new(&settings.backend.base_url, settings.backend.timeout())?;
        info!("Using backend {}", backend.base_url());
        Ok(Self::with_backend(settings, backend))
    }
}

impl<B> Engine<B>
where
    B: ProfileBackend + Clone + Send + Sync + 'static,
{
    pub fn with_backend(settings: Settings, backend: B) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            backend,
        }
    }

    /// Pre-fill the URL field and queue one submission
    pub fn submit_initial_url(&mut self, url: &str) {
        self.state.url_input.set(url);
        if self.msg_tx.try_send(Message::SubmitProfileUrl).is_err() {
            warn!("Could not queue initial profile submission");
        }
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.backend);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RequestStatus;

    #[tokio::test]
    async fn test_new_rejects_invalid_backend_url() {
        let mut settings = Settings::default();
        settings.backend.base_url = "::nope::".into();

        let err = Engine::new(settings).err().unwrap();
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn test_initial_url_is_submitted_once() {
        let mut engine = Engine::new(Settings::default()).unwrap();
        engine.submit_initial_url("https://example.com/not-a-profile");

        assert_eq!(engine.drain_pending_messages(), 1);
        assert_eq!(
            engine.state.url_input.value,
            "https://example.com/not-a-profile"
        );
        assert!(matches!(engine.state.analyze, RequestStatus::Failed(_)));
        assert_eq!(engine.drain_pending_messages(), 0);
    }

    #[tokio::test]
    async fn test_quit_message() {
        let mut engine = Engine::new(Settings::default()).unwrap();
        engine.msg_sender().send(Message::Quit).await.unwrap();

        engine.drain_pending_messages();
        assert!(engine.should_quit());
    }
}
