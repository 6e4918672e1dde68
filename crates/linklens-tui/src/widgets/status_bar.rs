//! Status bar: key hints for the focused region plus scroll position

use linklens_app::{AppState, Focus};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

const TEXT_HINTS: &[(&str, &str)] = &[
    ("Enter", "submit"),
    ("Tab", "next field"),
    ("Esc", "results"),
    ("^U", "clear"),
    ("^C", "quit"),
];

const RESULT_HINTS: &[(&str, &str)] = &[
    ("1-4", "tab"),
    ("j/k", "scroll"),
    ("a", "url"),
    ("u", "resume"),
    ("q", "quit"),
];

/// One-line footer
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Line<'static> {
        let hints = match self.state.focus {
            Focus::UrlInput | Focus::ResumeInput => TEXT_HINTS,
            Focus::Results => RESULT_HINTS,
        };
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in hints {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}  "), styles::text_muted()));
        }
        Line::from(spans)
    }

    fn details(&self) -> Option<Line<'static>> {
        let session = self.state.session.as_ref()?;
        let scroll = &self.state.scroll;
        let mut spans = Vec::new();

        if scroll.total_lines > scroll.visible_lines {
            let last = (scroll.offset + scroll.visible_lines).min(scroll.total_lines);
            spans.push(Span::styled(
                format!("{}/{}  ", last, scroll.total_lines),
                styles::text_secondary(),
            ));
        }
        spans.push(Span::styled(
            format!("analyzed {} ", session.analyzed_at.format("%H:%M:%S")),
            styles::text_muted(),
        ));
        Some(Line::from(spans))
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let hints = self.hints();
        let hints_width = hints.width() as u16;
        buf.set_line(area.x, area.y, &hints, area.width);

        if let Some(details) = self.details() {
            let width = details.width() as u16;
            if hints_width + width <= area.width {
                buf.set_line(area.x + area.width - width, area.y, &details, width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{analyzed_state, TestTerminal};

    fn render(state: &AppState, width: u16) -> TestTerminal {
        let mut term = TestTerminal::with_size(width, 1);
        term.render_widget(StatusBar::new(state), Rect::new(0, 0, width, 1));
        term
    }

    #[test]
    fn test_hints_follow_focus() {
        let mut state = AppState::new();
        assert!(render(&state, 80).buffer_contains("Enter submit"));

        state.focus = Focus::Results;
        let term = render(&state, 80);
        assert!(term.buffer_contains("1-4 tab"));
        assert!(term.buffer_contains("q quit"));
    }

    #[test]
    fn test_scroll_position_when_content_overflows() {
        let mut state = analyzed_state();
        state.focus = Focus::Results;
        state.scroll.update_content_size(40, 10);
        state.scroll.scroll_down(5);

        let term = render(&state, 100);
        assert!(term.buffer_contains("15/40"));
        assert!(term.buffer_contains("analyzed "));
    }

    #[test]
    fn test_no_details_before_analysis() {
        let state = AppState::new();
        assert!(!render(&state, 100).buffer_contains("analyzed"));
    }
}
