//! Single-line input form with a busy indicator and an error slot

use linklens_app::{RequestStatus, TextField};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{icons::IconSet, palette, styles};

/// Form for one workflow: input row on top, status row below
pub struct InputForm<'a> {
    title: &'a str,
    placeholder: &'a str,
    field: &'a TextField,
    status: &'a RequestStatus,
    /// Shown while the request is in flight, e.g. "Analyzing..."
    busy_label: &'a str,
    /// Shown on the status row when idle, e.g. "Enter: analyze"
    hint: &'a str,
    focused: bool,
    frame: u64,
    icons: IconSet,
}

impl<'a> InputForm<'a> {
    pub fn new(
        title: &'a str,
        field: &'a TextField,
        status: &'a RequestStatus,
        icons: IconSet,
    ) -> Self {
        Self {
            title,
            placeholder: "",
            field,
            status,
            busy_label: "Working...",
            hint: "",
            focused: false,
            frame: 0,
            icons,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn busy_label(mut self, label: &'a str) -> Self {
        self.busy_label = label;
        self
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = hint;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }

    fn input_line(&self, width: u16) -> Line<'static> {
        let prompt = Span::styled(
            format!(" {} ", self.icons.arrow()),
            if self.focused {
                styles::accent()
            } else {
                styles::text_muted()
            },
        );

        if self.field.value.is_empty() && !self.focused {
            return Line::from(vec![
                prompt,
                Span::styled(self.placeholder.to_string(), styles::text_muted()),
            ]);
        }

        // Keep the tail visible when the value is wider than the field
        let room = usize::from(width).saturating_sub(prompt.width() + 1);
        let value = tail(&self.field.value, room);
        let mut spans = vec![prompt, Span::styled(value, styles::text_primary())];
        if self.focused {
            spans.push(Span::styled(self.icons.cursor(), styles::accent()));
        }
        Line::from(spans)
    }

    fn status_line(&self) -> Line<'static> {
        match self.status {
            RequestStatus::InFlight => Line::from(vec![
                Span::raw(" "),
                Span::styled(self.icons.spinner(self.frame), styles::status_yellow()),
                Span::raw(" "),
                Span::styled(self.busy_label.to_string(), styles::status_yellow()),
            ]),
            RequestStatus::Failed(message) => Line::from(vec![
                Span::raw(" "),
                Span::styled(self.icons.warning(), styles::status_red()),
                Span::raw(" "),
                Span::styled(message.clone(), styles::status_red()),
            ]),
            RequestStatus::Idle => Line::from(vec![
                Span::raw(" "),
                Span::styled(self.hint.to_string(), styles::text_muted()),
            ]),
        }
    }
}

impl Widget for InputForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(Span::styled(
                format!(" {} ", self.title),
                if self.focused {
                    styles::accent_bold()
                } else {
                    styles::text_secondary()
                },
            ))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        buf.set_line(inner.x, inner.y, &self.input_line(inner.width), inner.width);
        if inner.height > 1 {
            buf.set_line(inner.x, inner.y + 1, &self.status_line(), inner.width);
        }
    }
}

/// Longest suffix of `text` that fits in `width` columns
fn tail(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut start = 0;
    for (i, _) in text.char_indices() {
        if text[i..].width() <= width {
            start = i;
            break;
        }
    }
    text[start..].to_string()
}
