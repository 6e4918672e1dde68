//! Screen layout for the main UI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: border + title row + border
const HEADER_HEIGHT: u16 = 3;
/// Form: border + input row + status row + border
const FORM_HEIGHT: u16 = 4;
const STATUS_BAR_HEIGHT: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and backend URL
    pub header: Rect,

    /// LinkedIn URL form
    pub url_form: Rect,

    /// Resume upload form
    pub upload_form: Rect,

    /// Tab bar plus the scrollable result panel
    pub results: Rect,

    /// Key hints
    pub status_bar: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let [header, url_form, upload_form, results, status_bar] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(FORM_HEIGHT),
        Constraint::Length(FORM_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(area);

    ScreenAreas {
        header,
        url_form,
        upload_form,
        results,
        status_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_terminal() {
        let areas = create(Rect::new(0, 0, 80, 24));

        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.url_form.y, 3);
        assert_eq!(areas.upload_form.y, 7);
        assert_eq!(areas.results.y, 11);
        assert_eq!(areas.results.height, 12); // 24 - 3 - 4 - 4 - 1
        assert_eq!(areas.status_bar.y, 23);
    }

    #[test]
    fn test_results_keep_minimum_height() {
        let areas = create(Rect::new(0, 0, 80, 14));
        assert!(areas.results.height >= 1);
        assert_eq!(areas.status_bar.height, 1);
    }
}
