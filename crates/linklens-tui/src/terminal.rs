//! Terminal setup and restoration

use ratatui::DefaultTerminal;

/// Restore the terminal before the default panic output is printed
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        previous(info);
    }));
}

/// Enter raw mode and the alternate screen
pub fn enter() -> DefaultTerminal {
    install_panic_hook();
    ratatui::init()
}

/// Leave raw mode and the alternate screen
pub fn leave() {
    ratatui::restore();
}
