//! Analysis tab: scores, per-section feedback and recommendations

use linklens_core::{capitalize, format_category, format_percent, AnalysisResults, ProfileData};

use super::PanelLines;
use crate::theme::styles;

/// Score categories are out of 25
const CATEGORY_MAX: f64 = 25.0;

pub(super) fn build(out: &mut PanelLines, profile: &ProfileData, analysis: &AnalysisResults) {
    let name = profile.display_name();
    out.heading(if name.is_empty() { "Profile" } else { name });
    if !profile.headline.is_empty() {
        out.paragraph(&profile.headline, styles::text_secondary());
    }
    if let Some(location) = profile.location() {
        out.muted(&location);
    }

    out.heading("Overall Score");
    out.gauge(
        analysis.overall_score,
        100.0,
        format_percent(analysis.overall_score),
    );

    if !analysis.score_categories.is_empty() {
        out.heading("Score Categories");
        for (name, score) in &analysis.score_categories {
            out.labeled(
                &capitalize(name),
                &format_category(*score),
                styles::text_secondary(),
            );
        }
    }

    if !analysis.sections.is_empty() {
        out.heading("Section Analysis");
        for (i, section) in analysis.sections.iter().enumerate() {
            if i > 0 {
                out.blank();
            }
            out.title(&section.title());
            out.gauge(section.score, 100.0, format_percent(section.score));
            for item in &section.feedback {
                out.bullet(item);
            }
        }
    }

    if !analysis.overall_recommendations.is_empty() {
        out.heading("Recommendations");
        let check = out.icons().check();
        for item in &analysis.overall_recommendations {
            out.marked(check, item, styles::status_green(), styles::text_primary());
        }
    }
}
