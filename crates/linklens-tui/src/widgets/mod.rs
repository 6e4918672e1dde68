//! Widget components for the TUI

mod form;
mod header;
pub mod results;
mod status_bar;
mod tabs;

pub use form::InputForm;
pub use header::MainHeader;
pub use results::{panel_lines, ResultsBody};
pub use status_bar::StatusBar;
pub use tabs::ResultTabs;
