//! Icon set for the TUI.
//!
//! `IconSet` resolves glyphs at runtime from the configured `IconMode`.

use linklens_app::IconMode;

/// Braille spinner frames
const SPINNER_UNICODE: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_ASCII: [&str; 4] = ["|", "/", "-", "\\"];

/// Runtime icon resolver
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{25cf}", // ●
            IconMode::Ascii => "*",
        }
    }

    pub fn bullet(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2022}", // •
            IconMode::Ascii => "-",
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2713}", // ✓
            IconMode::Ascii => "+",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2192}", // →
            IconMode::Ascii => "->",
        }
    }

    pub fn warning(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{26a0}", // ⚠
            IconMode::Ascii => "!",
        }
    }

    pub fn separator(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2502}", // │
            IconMode::Ascii => "|",
        }
    }

    pub fn gauge_full(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2588}", // █
            IconMode::Ascii => "#",
        }
    }

    pub fn gauge_empty(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2591}", // ░
            IconMode::Ascii => ".",
        }
    }

    pub fn cursor(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2588}",
            IconMode::Ascii => "_",
        }
    }

    /// Spinner frame for an animation counter
    pub fn spinner(&self, frame: u64) -> &'static str {
        match self.mode {
            IconMode::Unicode => SPINNER_UNICODE[(frame % SPINNER_UNICODE.len() as u64) as usize],
            IconMode::Ascii => SPINNER_ASCII[(frame % SPINNER_ASCII.len() as u64) as usize],
        }
    }
}
