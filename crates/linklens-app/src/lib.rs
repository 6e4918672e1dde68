//! # linklens-app - Application State and Orchestration
//!
//! The TEA core of linklens: [`AppState`] is the model, [`Message`] the set
//! of named transitions, and [`handler::update`] the only function that
//! mutates state. Backend calls are returned as [`UpdateAction`]s and run as
//! background tasks by [`actions::handle_action`].
//!
//! Nothing here depends on a terminal library; the TUI converts its key
//! events into [`InputKey`] first.

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

pub use config::{IconMode, Settings};
pub use engine::Engine;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{
    AppPhase, AppState, Focus, ProfileSession, RequestStatus, ResultTab, ScrollState, TextField,
};
