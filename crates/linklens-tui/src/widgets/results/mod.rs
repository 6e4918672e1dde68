//! Scrollable result panel and the per-tab line builders
//!
//! Each tab renders to a `Vec<Line>` pre-wrapped to the panel width, so the
//! line count is exact and the scroll offset can be clamped before drawing.

mod analysis;
mod branding;
mod content;
mod optimization;

use linklens_app::{AppState, ResultTab};
use linklens_core::gauge_ratio;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{icons::IconSet, styles};

/// Left margin for body text
const INDENT: &str = "  ";
/// Upper bound on gauge bar width
const MAX_GAUGE_WIDTH: usize = 30;

/// Build the lines for the active tab.
///
/// Returns an empty list when the tab has no data.
pub fn panel_lines(state: &AppState, width: u16, icons: IconSet) -> Vec<Line<'static>> {
    let Some(session) = state.session.as_ref() else {
        return Vec::new();
    };
    let mut out = PanelLines::new(width, icons);

    match state.active_tab {
        ResultTab::Analysis => analysis::build(&mut out, &session.profile, &session.analysis),
        ResultTab::Content => content::build(&mut out, &session.suggestions),
        ResultTab::Optimization => {
            if let Some(results) = session.optimization.as_ref() {
                optimization::build(&mut out, &results.optimized_sections);
            }
        }
        ResultTab::Branding => {
            if let Some(results) = session.optimization.as_ref() {
                branding::build(&mut out, &results.branding_plan);
            }
        }
    }

    out.finish()
}

/// Renders pre-built lines starting at `offset`
pub struct ResultsBody {
    lines: Vec<Line<'static>>,
    offset: usize,
}

impl ResultsBody {
    pub fn new(lines: Vec<Line<'static>>, offset: usize) -> Self {
        Self { lines, offset }
    }
}

impl Widget for ResultsBody {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let offset = u16::try_from(self.offset).unwrap_or(u16::MAX);
        Paragraph::new(self.lines)
            .scroll((offset, 0))
            .render(area, buf);
    }
}

/// Accumulates wrapped, styled lines for one panel
pub(crate) struct PanelLines {
    lines: Vec<Line<'static>>,
    width: usize,
    icons: IconSet,
}

impl PanelLines {
    pub(crate) fn new(width: u16, icons: IconSet) -> Self {
        Self {
            lines: Vec::new(),
            width: usize::from(width).max(8),
            icons,
        }
    }

    pub(crate) fn icons(&self) -> IconSet {
        self.icons
    }

    pub(crate) fn finish(self) -> Vec<Line<'static>> {
        self.lines
    }

    pub(crate) fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Section heading, separated from previous content by a blank line
    pub(crate) fn heading(&mut self, text: &str) {
        if !self.lines.is_empty() {
            self.blank();
        }
        self.lines
            .push(Line::from(Span::styled(text.to_string(), styles::accent_bold())));
    }

    /// Bold line inside a section
    pub(crate) fn title(&mut self, text: &str) {
        self.prefixed(INDENT, text, styles::heading());
    }

    pub(crate) fn paragraph(&mut self, text: &str, style: Style) {
        self.prefixed(INDENT, text, style);
    }

    pub(crate) fn muted(&mut self, text: &str) {
        self.paragraph(text, styles::text_muted());
    }

    /// `Label: value`, wrapping the value under the label
    pub(crate) fn labeled(&mut self, label: &str, value: &str, label_style: Style) {
        let lead = format!("{INDENT}{label}: ");
        let rows = wrap(value, self.width.saturating_sub(lead.width()));
        let pad = " ".repeat(lead.width());
        for (i, row) in rows.into_iter().enumerate() {
            let head = if i == 0 {
                Span::styled(lead.clone(), label_style)
            } else {
                Span::raw(pad.clone())
            };
            self.lines
                .push(Line::from(vec![head, Span::styled(row, styles::text_primary())]));
        }
    }

    pub(crate) fn bullet(&mut self, text: &str) {
        let marker = self.icons.bullet();
        self.marked(marker, text, styles::text_secondary(), styles::text_primary());
    }

    /// Bullet with a custom marker and marker style
    pub(crate) fn marked(&mut self, marker: &str, text: &str, marker_style: Style, style: Style) {
        let lead = format!("{INDENT}{INDENT}{marker} ");
        let pad = " ".repeat(lead.width());
        let rows = wrap(text, self.width.saturating_sub(lead.width()));
        for (i, row) in rows.into_iter().enumerate() {
            let head = if i == 0 {
                Span::styled(lead.clone(), marker_style)
            } else {
                Span::raw(pad.clone())
            };
            self.lines.push(Line::from(vec![head, Span::styled(row, style)]));
        }
    }

    /// Horizontal bar followed by its label; `score` is clamped for the bar only
    pub(crate) fn gauge(&mut self, score: f64, max: f64, label: String) {
        let room = self
            .width
            .saturating_sub(INDENT.width() + label.width() + 1);
        let bar_width = room.min(MAX_GAUGE_WIDTH).max(1);
        let filled = (gauge_ratio(score, max) * bar_width as f64).round() as usize;
        let style = styles::score(score / max * 100.0);

        self.lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(self.icons.gauge_full().repeat(filled), style),
            Span::styled(
                self.icons.gauge_empty().repeat(bar_width - filled),
                styles::text_muted(),
            ),
            Span::raw(" "),
            Span::styled(label, style),
        ]));
    }

    fn prefixed(&mut self, prefix: &str, text: &str, style: Style) {
        for row in wrap(text, self.width.saturating_sub(prefix.width())) {
            self.lines.push(Line::from(vec![
                Span::raw(prefix.to_string()),
                Span::styled(row, style),
            ]));
        }
    }
}

/// Greedy word wrap by display width.
///
/// Explicit newlines are kept; words wider than `width` are split.
/// Always yields at least one row.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for source_line in text.lines() {
        let mut current = String::new();
        for word in source_line.split_whitespace() {
            let needed = if current.is_empty() {
                word.width()
            } else {
                current.width() + 1 + word.width()
            };
            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                continue;
            }
            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
            }
            for c in word.chars() {
                let cw = c.width().unwrap_or(0);
                if current.width() + cw > width && !current.is_empty() {
                    rows.push(std::mem::take(&mut current));
                }
                current.push(c);
            }
        }
        rows.push(current);
    }

    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}
