//! Optimization tab: rewritten sections from the resume upload

use linklens_core::{OptimizedSections, SectionRewrite, SkillsOptimization};

use super::PanelLines;
use crate::theme::styles;

pub(super) fn build(out: &mut PanelLines, sections: &OptimizedSections) {
    if sections.is_empty() {
        out.muted("The backend returned no optimized sections.");
        return;
    }

    rewrite(out, "Headline", &sections.headline);
    rewrite(out, "Summary", &sections.summary);
    skills(out, &sections.skills);

    if !sections.featured.is_empty() {
        out.heading("Featured");
        for item in &sections.featured {
            out.title(&item.title);
            if !item.description.is_empty() {
                out.paragraph(&item.description, styles::text_secondary());
            }
        }
    }

    if !sections.experience.is_empty() {
        out.heading("Experience");
        for (i, entry) in sections.experience.iter().enumerate() {
            if i > 0 {
                out.blank();
            }
            if !entry.role.is_empty() {
                out.title(&entry.role);
            }
            if !entry.optimized.is_empty() {
                out.paragraph(&entry.optimized, styles::text_primary());
            }
            for bullet in &entry.bullets {
                out.bullet(bullet);
            }
        }
    }
}

fn rewrite(out: &mut PanelLines, name: &str, section: &SectionRewrite) {
    if section.is_empty() {
        return;
    }
    out.heading(name);
    if let Some(current) = section.current.as_deref() {
        out.labeled("Current", current, styles::text_muted());
    }
    if !section.optimized.is_empty() {
        out.labeled("Optimized", &section.optimized, styles::status_green());
    }
    if !section.alternatives.is_empty() {
        out.paragraph("Alternatives", styles::text_secondary());
        for alternative in &section.alternatives {
            out.bullet(alternative);
        }
    }
}

fn skills(out: &mut PanelLines, skills: &SkillsOptimization) {
    if skills.is_empty() {
        return;
    }
    out.heading("Skills");
    // Backend order is meaningful; never sort or dedup
    if !skills.current.is_empty() {
        out.labeled("Current Skills", &skills.current.join(", "), styles::text_muted());
    }
    if !skills.prioritized.is_empty() {
        out.labeled(
            "Prioritized Skills",
            &skills.prioritized.join(", "),
            styles::status_green(),
        );
    }
    if !skills.suggested.is_empty() {
        out.labeled(
            "Suggested Skills",
            &skills.suggested.join(", "),
            styles::accent(),
        );
    }
}
