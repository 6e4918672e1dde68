//! Header bar: app title, current profile and backend URL

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, palette, styles};

/// Title row inside a rounded border
pub struct MainHeader<'a> {
    backend_url: &'a str,
    profile_name: Option<&'a str>,
    busy_frame: Option<u64>,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(backend_url: &'a str, icons: IconSet) -> Self {
        Self {
            backend_url,
            profile_name: None,
            busy_frame: None,
            icons,
        }
    }

    /// Name of the analyzed profile
    pub fn profile(mut self, name: Option<&'a str>) -> Self {
        self.profile_name = name.filter(|n| !n.is_empty());
        self
    }

    /// Show the spinner at `frame` instead of the status dot
    pub fn busy(mut self, frame: Option<u64>) -> Self {
        self.busy_frame = frame;
        self
    }

    fn status_span(&self) -> Span<'static> {
        match (self.busy_frame, self.profile_name) {
            (Some(frame), _) => Span::styled(self.icons.spinner(frame), styles::status_yellow()),
            (None, Some(_)) => Span::styled(self.icons.dot(), styles::status_green()),
            (None, None) => Span::styled(self.icons.dot(), styles::text_muted()),
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::raw(" "),
            self.status_span(),
            Span::raw(" "),
            Span::styled("LinkLens", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(
                self.profile_name.unwrap_or("no profile").to_string(),
                styles::text_secondary(),
            ),
        ]);
        let right = Line::from(vec![
            Span::styled("backend ", styles::text_muted()),
            Span::styled(self.backend_url.to_string(), styles::text_secondary()),
            Span::raw(" "),
        ]);

        let left_width = left.width() as u16;
        let right_width = right.width() as u16;
        buf.set_line(inner.x, inner.y, &left, inner.width);

        // Backend URL only when it fits beside the title
        if left_width + right_width + 1 <= inner.width {
            let x = inner.x + inner.width - right_width;
            buf.set_line(x, inner.y, &right, right_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use linklens_app::IconMode;

    #[test]
    fn test_header_shows_title_and_backend() {
        let mut term = TestTerminal::new();
        let header = MainHeader::new("http://localhost:8001/", IconSet::new(IconMode::Unicode));
        term.render_widget(header, Rect::new(0, 0, 80, 3));

        assert!(term.line_contains(1, "LinkLens"));
        assert!(term.line_contains(1, "no profile"));
        assert!(term.line_contains(1, "http://localhost:8001/"));
    }

    #[test]
    fn test_header_shows_profile_name() {
        let mut term = TestTerminal::new();
        let header = MainHeader::new("http://b/", IconSet::new(IconMode::Ascii))
            .profile(Some("Jane Doe"));
        term.render_widget(header, Rect::new(0, 0, 80, 3));

        assert!(term.line_contains(1, "Jane Doe"));
    }

    #[test]
    fn test_narrow_header_drops_backend_url() {
        let mut term = TestTerminal::with_size(30, 3);
        let header = MainHeader::new("http://a-very-long-backend-host:8001/", IconSet::new(IconMode::Ascii));
        term.render_widget(header, Rect::new(0, 0, 30, 3));

        assert!(term.line_contains(1, "LinkLens"));
        assert!(!term.buffer_contains("a-very-long"));
    }
}
