//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use linklens_app::{AppState, Focus};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette, styles};

const URL_PLACEHOLDER: &str = "https://www.linkedin.com/in/username";
const RESUME_PLACEHOLDER: &str = "path/to/resume.pdf (.pdf, .docx, .doc, .txt)";
const EMPTY_RESULTS: &str = "Enter a LinkedIn profile URL above and press Enter to analyze it.";

/// Render the complete UI.
///
/// Only writes back the result panel's content size so the scroll offset
/// stays clamped to what was drawn.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    let header = widgets::MainHeader::new(&state.settings.backend.base_url, icons)
        .profile(state.session.as_ref().map(|s| s.profile.display_name()))
        .busy(state.is_busy().then_some(state.animation_frame));
    frame.render_widget(header, areas.header);

    let url_form = widgets::InputForm::new("LinkedIn Profile", &state.url_input, &state.analyze, icons)
        .placeholder(URL_PLACEHOLDER)
        .busy_label("Analyzing...")
        .hint("Enter: analyze profile")
        .focused(state.focus == Focus::UrlInput)
        .frame(state.animation_frame);
    frame.render_widget(url_form, areas.url_form);

    let upload_hint = if state.session.is_some() {
        "Enter: upload resume and optimize"
    } else {
        "Analyze a profile before uploading a resume"
    };
    let upload_form = widgets::InputForm::new("Resume", &state.resume_input, &state.upload, icons)
        .placeholder(RESUME_PLACEHOLDER)
        .busy_label("Uploading resume...")
        .hint(upload_hint)
        .focused(state.focus == Focus::ResumeInput)
        .frame(state.animation_frame);
    frame.render_widget(upload_form, areas.upload_form);

    render_results(frame, areas.results, state, icons);

    frame.render_widget(widgets::StatusBar::new(state), areas.status_bar);
}

/// Tab bar and the scrollable body for the active tab
fn render_results(frame: &mut Frame, area: Rect, state: &mut AppState, icons: IconSet) {
    let block = styles::glass_block(state.focus == Focus::Results)
        .style(Style::default().bg(palette::CARD_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 3 || inner.height < 3 {
        state.scroll.update_content_size(0, 0);
        return;
    }

    let [tabs_area, _, body_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);
    frame.render_widget(widgets::ResultTabs::new(state, icons), tabs_area);

    let body = Rect {
        x: body_area.x + 1,
        width: body_area.width.saturating_sub(2),
        ..body_area
    };
    let visible = usize::from(body.height);

    if state.session.is_none() {
        state.scroll.update_content_size(0, visible);
        let empty = Line::from(Span::styled(EMPTY_RESULTS, styles::text_muted()));
        frame.render_widget(Paragraph::new(empty), body);
        return;
    }

    let lines = widgets::panel_lines(state, body.width, icons);
    state.scroll.update_content_size(lines.len(), visible);
    frame.render_widget(widgets::ResultsBody::new(lines, state.scroll.offset), body);
}
