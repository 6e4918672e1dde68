//! Branding tab: banner idea, weekly plan and posting schedule

use linklens_core::{BrandingPlan, Guidance};

use super::PanelLines;
use crate::theme::styles;

pub(super) fn build(out: &mut PanelLines, plan: &BrandingPlan) {
    guidance(out, "Banner Suggestion", &plan.banner_suggestion);

    if !plan.weekly_plan.is_empty() {
        out.heading("Weekly Plan");
        let arrow = out.icons().arrow();
        for (i, entry) in plan.weekly_plan.iter().enumerate() {
            if i > 0 {
                out.blank();
            }
            let title = if entry.theme.is_empty() {
                format!("Week {}", entry.week)
            } else {
                format!("Week {}: {}", entry.week, entry.theme)
            };
            out.title(&title);
            for task in &entry.tasks {
                out.bullet(task);
            }
            for post in &entry.posts {
                out.marked(arrow, post, styles::accent(), styles::text_primary());
            }
            if let Some(frequency) = entry.frequency.as_deref() {
                out.labeled("Frequency", frequency, styles::text_muted());
            }
        }
    }

    guidance(out, "Posting Schedule", &plan.posting_schedule);
}

fn guidance(out: &mut PanelLines, name: &str, guidance: &Guidance) {
    if guidance.is_empty() {
        return;
    }
    out.heading(name);
    if !guidance.summary.is_empty() {
        out.paragraph(&guidance.summary, styles::text_primary());
    }
    for (key, value) in &guidance.details {
        out.labeled(key, value, styles::text_secondary());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_optimization;
    use crate::theme::icons::IconSet;
    use linklens_app::IconMode;
    use linklens_core::WeeklyPlanEntry;

    fn render(plan: &BrandingPlan) -> Vec<String> {
        let mut out = PanelLines::new(80, IconSet::new(IconMode::Ascii));
        build(&mut out, plan);
        out.finish().iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_full_plan() {
        let lines = render(&sample_optimization().branding_plan);

        assert_eq!(lines[0], "Banner Suggestion");
        assert!(lines.contains(&"  Colors: Navy and teal".to_string()));
        assert!(lines.contains(&"  Week 1: Introduce yourself".to_string()));
        assert!(lines.contains(&"    - Update headline".to_string()));
        assert!(lines
            .iter()
            .any(|l| l.contains("-> Origin story: how I got into systems")));
        assert!(lines.contains(&"  Frequency: 3 posts".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("  Tuesday and Thursday mornings"));
    }

    #[test]
    fn test_week_without_theme() {
        let plan = BrandingPlan {
            weekly_plan: vec![WeeklyPlanEntry {
                week: 3,
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(render(&plan), vec!["Weekly Plan", "  Week 3"]);
    }

    #[test]
    fn test_empty_plan_renders_nothing() {
        assert!(render(&BrandingPlan::default()).is_empty());
    }
}
