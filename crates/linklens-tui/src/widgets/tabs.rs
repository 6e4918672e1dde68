//! Result tab bar

use linklens_app::{AppState, ResultTab};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use crate::theme::{icons::IconSet, styles};

/// Numbered tab titles; tabs without data are dimmed
pub struct ResultTabs {
    active: ResultTab,
    available: [bool; 4],
    icons: IconSet,
}

impl ResultTabs {
    pub fn new(state: &AppState, icons: IconSet) -> Self {
        Self {
            active: state.active_tab,
            available: ResultTab::ALL.map(|tab| state.is_tab_available(tab)),
            icons,
        }
    }

    fn titles(&self) -> Vec<Line<'static>> {
        ResultTab::ALL
            .iter()
            .map(|tab| {
                let style = if self.available[tab.index()] {
                    styles::text_secondary()
                } else {
                    styles::text_muted()
                };
                Line::from(Span::styled(
                    format!("{} {}", tab.index() + 1, tab.label()),
                    style,
                ))
            })
            .collect()
    }
}

impl Widget for ResultTabs {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let divider = Span::styled(self.icons.separator(), styles::text_muted());
        Tabs::new(self.titles())
            .select(self.active.index())
            .highlight_style(styles::focused_selected())
            .divider(divider)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{analyzed_state, TestTerminal};
    use linklens_app::IconMode;
    use ratatui::style::Color;

    #[test]
    fn test_all_tab_labels_render() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(
            ResultTabs::new(&analyzed_state(), IconSet::new(IconMode::Unicode)),
            Rect::new(0, 0, 80, 1),
        );

        for label in ["1 Analysis", "2 Content Ideas", "3 Optimization", "4 Branding Plan"] {
            assert!(term.buffer_contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_unavailable_tabs_are_dimmed() {
        let tabs = ResultTabs::new(&analyzed_state(), IconSet::new(IconMode::Unicode));
        let titles = tabs.titles();

        assert_eq!(titles[1].spans[0].style.fg, Some(Color::Gray));
        assert_eq!(titles[2].spans[0].style.fg, Some(Color::DarkGray));
        assert_eq!(titles[3].spans[0].style.fg, Some(Color::DarkGray));
    }
}
