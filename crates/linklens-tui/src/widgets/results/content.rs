//! Content tab: generated post ideas

use linklens_core::ContentSuggestion;

use super::PanelLines;
use crate::theme::styles;

pub(super) fn build(out: &mut PanelLines, suggestions: &[ContentSuggestion]) {
    if suggestions.is_empty() {
        out.muted("No content ideas were returned for this profile.");
        return;
    }

    for (i, suggestion) in suggestions.iter().enumerate() {
        out.heading(&format!("Content Idea {}", i + 1));
        if let Some(title) = suggestion.title.as_deref() {
            out.title(title);
        }
        out.paragraph(&suggestion.content, styles::text_primary());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::icons::IconSet;
    use linklens_app::IconMode;

    fn render(suggestions: &[ContentSuggestion]) -> Vec<String> {
        let mut out = PanelLines::new(60, IconSet::new(IconMode::Unicode));
        build(&mut out, suggestions);
        out.finish().iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_cards_are_numbered_from_one() {
        let lines = render(&[
            ContentSuggestion::plain("First idea"),
            ContentSuggestion::titled("Launch recap", "Second idea"),
        ]);

        let first = lines.iter().position(|l| l == "Content Idea 1").unwrap();
        let second = lines.iter().position(|l| l == "Content Idea 2").unwrap();
        assert!(first < second);
        assert_eq!(lines[second + 1].trim(), "Launch recap");
        assert_eq!(lines[second + 2].trim(), "Second idea");
    }

    #[test]
    fn test_untitled_card_goes_straight_to_content() {
        let lines = render(&[ContentSuggestion::plain("Only content")]);
        assert_eq!(lines, vec!["Content Idea 1", "  Only content"]);
    }

    #[test]
    fn test_empty_suggestions_message() {
        let lines = render(&[]);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("No content ideas"));
    }
}
