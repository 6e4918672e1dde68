//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Backend calls run as tokio tasks that own a clone of the backend and of
//! the message sender. They never touch `AppState`; results come back as
//! messages.

use std::path::Path;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use linklens_api::ProfileBackend;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action<B>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, backend: &B)
where
    B: ProfileBackend + Clone + Send + Sync + 'static,
{
    let backend = backend.clone();
    match action {
        UpdateAction::AnalyzeProfile { url } => {
            tokio::spawn(async move {
                let msg = analyze_profile(&backend, &url).await;
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::UploadResume { path, profile_id } => {
            tokio::spawn(async move {
                let msg = upload_resume(&backend, &path, profile_id).await;
                send(&msg_tx, msg).await;
            });
        }
    }
}

/// Run the analyze call and turn its outcome into a message
pub async fn analyze_profile<B: ProfileBackend>(backend: &B, url: &str) -> Message {
    match backend.fetch_profile(url).await {
        Ok(response) => Message::AnalyzeCompleted(Box::new(response)),
        Err(e) => Message::AnalyzeFailed {
            error: linklens_core::Error::from(e).display_message(),
        },
    }
}

/// Run the upload call and turn its outcome into a message
pub async fn upload_resume<B: ProfileBackend>(
    backend: &B,
    path: &Path,
    profile_id: String,
) -> Message {
    match backend.upload_resume(path, &profile_id).await {
        Ok(results) => Message::UploadCompleted {
            profile_id,
            results: Box::new(results),
        },
        Err(e) => Message::UploadFailed {
            profile_id,
            error: linklens_core::Error::from(e).display_message(),
        },
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        warn!("Message channel closed, dropping backend result");
    } else {
        debug!("Backend result delivered");
    }
}
