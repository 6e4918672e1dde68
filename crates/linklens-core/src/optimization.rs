//! Resume-driven profile optimization and personal-branding plan
//!
//! These are the canonical shapes the view renders. Older backend versions
//! send flatter or differently nested JSON; `linklens-api` resolves those
//! variants into these types once at the boundary.

/// Rewritten profile sections produced after a resume upload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimizedSections {
    pub headline: SectionRewrite,
    pub summary: SectionRewrite,
    pub skills: SkillsOptimization,
    pub featured: Vec<FeaturedItem>,
    pub experience: Vec<ExperienceRewrite>,
}

impl OptimizedSections {
    pub fn is_empty(&self) -> bool {
        self.headline.is_empty()
            && self.summary.is_empty()
            && self.skills.is_empty()
            && self.featured.is_empty()
            && self.experience.is_empty()
    }
}

/// Current text, suggested replacement, and alternatives for one section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionRewrite {
    pub current: Option<String>,
    pub optimized: String,
    pub alternatives: Vec<String>,
}

impl SectionRewrite {
    pub fn optimized(text: impl Into<String>) -> Self {
        Self {
            current: None,
            optimized: text.into(),
            alternatives: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.optimized.is_empty() && self.alternatives.is_empty()
    }
}

/// Skill lists, kept exactly as the backend ordered them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillsOptimization {
    pub current: Vec<String>,
    pub prioritized: Vec<String>,
    pub suggested: Vec<String>,
}

impl SkillsOptimization {
    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.prioritized.is_empty() && self.suggested.is_empty()
    }
}

/// Suggested item for the "Featured" section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeaturedItem {
    pub title: String,
    pub description: String,
}

/// Rewritten description for one position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceRewrite {
    /// "Title at Company" or whatever label the backend provided
    pub role: String,
    pub optimized: String,
    pub bullets: Vec<String>,
}

/// Multi-week content and posting plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandingPlan {
    pub banner_suggestion: Guidance,
    pub weekly_plan: Vec<WeeklyPlanEntry>,
    pub posting_schedule: Guidance,
}

/// One week of the branding plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyPlanEntry {
    pub week: u32,
    pub theme: String,
    pub tasks: Vec<String>,
    pub posts: Vec<String>,
    pub frequency: Option<String>,
}

/// Free-text guidance with optional labelled details.
///
/// Banner suggestions and posting schedules arrive either as a sentence or as
/// an object of named fields; both land here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Guidance {
    pub summary: String,
    pub details: Vec<(String, String)>,
}

impl Guidance {
    pub fn text(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            details: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.details.is_empty()
    }
}

/// Both payloads of a successful resume upload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimizationResults {
    pub optimized_sections: OptimizedSections,
    pub branding_plan: BrandingPlan,
}
