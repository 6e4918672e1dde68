//! Message processing through the TEA update loop

use tokio::sync::mpsc;

use linklens_api::ProfileBackend;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages are processed in the same call; actions are handed to
/// [`handle_action`] as they appear.
pub fn process_message<B>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &B,
) where
    B: ProfileBackend + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), backend);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
