//! linklens-tui - Terminal UI for linklens
//!
//! Builds an `Engine` from linklens-app and adds terminal rendering, event
//! polling and the result widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
