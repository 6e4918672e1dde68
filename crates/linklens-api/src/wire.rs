//! Wire shapes of backend responses
//!
//! Backend versions disagree on the shape of several fields (flat strings
//! versus structured objects, suggestion strings versus `{title, content}`).
//! Every variant is accepted here through `#[serde(untagged)]` enums and
//! converted once into the canonical `linklens-core` types, so nothing past
//! this module ever inspects raw JSON.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use linklens_core::{
    AnalysisResults, BrandingPlan, ContentSuggestion, ExperienceRewrite, FeaturedItem, Guidance,
    OptimizationResults, OptimizedSections, ProfileData, SectionAnalysis, SectionRewrite,
    SkillsOptimization, WeeklyPlanEntry,
};

use crate::error::ApiError;

// ─────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────

/// Treat an explicit `null` like a missing field
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a JSON object into `(key, value)` pairs, keeping body order
fn ordered_sections<'de, D>(deserializer: D) -> Result<Vec<(String, SectionWire)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct SectionsVisitor;

    impl<'de> Visitor<'de> for SectionsVisitor {
        type Value = Vec<(String, SectionWire)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of section name to section analysis")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut sections = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, section)) = map.next_entry::<String, SectionWire>()? {
                sections.push((name, section));
            }
            Ok(sections)
        }
    }

    deserializer.deserialize_any(SectionsVisitor)
}

/// Render a loose JSON value as display text
fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{}: {}", k, value_text(v)))
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

/// Number or string identifiers both become strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdWire {
    Text(String),
    Number(u64),
}

impl IdWire {
    fn into_string(self) -> String {
        match self {
            IdWire::Text(s) => s,
            IdWire::Number(n) => n.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// POST /api/fetch-profile
// ─────────────────────────────────────────────────────────────────

/// Body of a successful analyze call
#[derive(Debug, Deserialize)]
pub struct AnalyzeResponseWire {
    #[serde(default)]
    profile_id: Option<IdWire>,

    #[serde(default, deserialize_with = "nullable")]
    profile_data: ProfileData,

    analysis_results: AnalysisWire,

    #[serde(default, deserialize_with = "nullable")]
    content_suggestions: Vec<SuggestionWire>,
}

/// Canonical result of the analyze call
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeResponse {
    pub profile: ProfileData,
    pub analysis: AnalysisResults,
    pub suggestions: Vec<ContentSuggestion>,
}

impl AnalyzeResponseWire {
    /// Resolve to the canonical shape.
    ///
    /// `profile_id` is read from the top level; `profile_data.profile_id` is
    /// accepted when the top-level value is absent.
    pub fn into_canonical(self) -> Result<AnalyzeResponse, ApiError> {
        let mut profile = self.profile_data;
        let top_level = self
            .profile_id
            .map(IdWire::into_string)
            .filter(|id| !id.is_empty());

        match top_level {
            Some(id) => profile.profile_id = id,
            None if !profile.profile_id.is_empty() => {}
            None => return Err(ApiError::MissingProfileId),
        }

        Ok(AnalyzeResponse {
            profile,
            analysis: self.analysis_results.into(),
            suggestions: self
                .content_suggestions
                .into_iter()
                .filter_map(SuggestionWire::into_canonical)
                .collect(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct AnalysisWire {
    #[serde(default, deserialize_with = "nullable")]
    overall_score: f64,

    #[serde(default, deserialize_with = "nullable")]
    score_categories: BTreeMap<String, f64>,

    #[serde(default, deserialize_with = "ordered_sections")]
    sections: Vec<(String, SectionWire)>,

    #[serde(default, deserialize_with = "nullable")]
    overall_recommendations: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SectionWire {
    #[serde(default, deserialize_with = "nullable")]
    score: f64,

    #[serde(default, deserialize_with = "nullable")]
    feedback: Vec<String>,

    #[serde(default, deserialize_with = "nullable")]
    category_scores: BTreeMap<String, f64>,
}

impl From<AnalysisWire> for AnalysisResults {
    fn from(wire: AnalysisWire) -> Self {
        AnalysisResults {
            overall_score: wire.overall_score,
            score_categories: wire.score_categories,
            sections: wire
                .sections
                .into_iter()
                .map(|(name, s)| SectionAnalysis {
                    name,
                    score: s.score,
                    feedback: s.feedback,
                    category_scores: s.category_scores,
                })
                .collect(),
            overall_recommendations: wire.overall_recommendations,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SuggestionWire {
    Text(String),
    Titled {
        #[serde(default)]
        title: Option<String>,
        #[serde(default, alias = "description", alias = "text")]
        content: Option<String>,
    },
}

impl SuggestionWire {
    fn into_canonical(self) -> Option<ContentSuggestion> {
        match self {
            SuggestionWire::Text(s) if s.trim().is_empty() => None,
            SuggestionWire::Text(s) => Some(ContentSuggestion::plain(s)),
            SuggestionWire::Titled { title, content } => {
                let title = non_empty(title);
                let content = content.unwrap_or_default();
                if title.is_none() && content.trim().is_empty() {
                    None
                } else {
                    Some(ContentSuggestion { title, content })
                }
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// POST /api/upload-resume
// ─────────────────────────────────────────────────────────────────

/// Body of a successful upload call
#[derive(Debug, Deserialize)]
pub struct UploadResponseWire {
    #[serde(default, deserialize_with = "nullable")]
    optimized_sections: Option<OptimizedSectionsWire>,

    #[serde(default, deserialize_with = "nullable")]
    branding_plan: Option<BrandingPlanWire>,
}

impl UploadResponseWire {
    pub fn into_canonical(self) -> OptimizationResults {
        OptimizationResults {
            optimized_sections: self.optimized_sections.map(Into::into).unwrap_or_default(),
            branding_plan: self.branding_plan.map(Into::into).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct OptimizedSectionsWire {
    #[serde(default, deserialize_with = "nullable")]
    headline: Option<RewriteWire>,

    #[serde(default, deserialize_with = "nullable", alias = "about")]
    summary: Option<RewriteWire>,

    #[serde(default, deserialize_with = "nullable")]
    skills: Option<SkillsWire>,

    #[serde(default, deserialize_with = "nullable")]
    featured: Vec<FeaturedWire>,

    #[serde(default, deserialize_with = "nullable")]
    experience: Option<ExperienceWire>,
}

impl From<OptimizedSectionsWire> for OptimizedSections {
    fn from(wire: OptimizedSectionsWire) -> Self {
        OptimizedSections {
            headline: wire.headline.map(Into::into).unwrap_or_default(),
            summary: wire.summary.map(Into::into).unwrap_or_default(),
            skills: wire.skills.map(Into::into).unwrap_or_default(),
            featured: wire.featured.into_iter().map(Into::into).collect(),
            experience: wire.experience.map(ExperienceWire::into_rewrites).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RewriteWire {
    Text(String),
    Structured {
        #[serde(default)]
        current: Option<String>,
        #[serde(default, alias = "suggested", alias = "recommended")]
        optimized: Option<String>,
        #[serde(default, deserialize_with = "nullable", alias = "variations")]
        alternatives: Vec<String>,
    },
}

impl From<RewriteWire> for SectionRewrite {
    fn from(wire: RewriteWire) -> Self {
        match wire {
            RewriteWire::Text(text) => SectionRewrite::optimized(text),
            RewriteWire::Structured {
                current,
                optimized,
                alternatives,
            } => SectionRewrite {
                current: non_empty(current),
                optimized: optimized.unwrap_or_default(),
                alternatives,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SkillsWire {
    List(Vec<String>),
    Text(String),
    Structured {
        #[serde(default, deserialize_with = "nullable")]
        current: Vec<String>,
        #[serde(default, deserialize_with = "nullable")]
        prioritized: Vec<String>,
        #[serde(
            default,
            deserialize_with = "nullable",
            alias = "recommended",
            alias = "to_add"
        )]
        suggested: Vec<String>,
    },
}

impl From<SkillsWire> for SkillsOptimization {
    fn from(wire: SkillsWire) -> Self {
        match wire {
            SkillsWire::List(prioritized) => SkillsOptimization {
                prioritized,
                ..Default::default()
            },
            SkillsWire::Text(text) => SkillsOptimization {
                prioritized: text
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect(),
                ..Default::default()
            },
            SkillsWire::Structured {
                current,
                prioritized,
                suggested,
            } => SkillsOptimization {
                current,
                prioritized,
                suggested,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeaturedWire {
    Text(String),
    Structured {
        #[serde(default)]
        title: Option<String>,
        #[serde(default, alias = "content", alias = "suggestion")]
        description: Option<String>,
    },
}

impl From<FeaturedWire> for FeaturedItem {
    fn from(wire: FeaturedWire) -> Self {
        match wire {
            FeaturedWire::Text(title) => FeaturedItem {
                title,
                description: String::new(),
            },
            FeaturedWire::Structured { title, description } => FeaturedItem {
                title: title.unwrap_or_default(),
                description: description.unwrap_or_default(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExperienceWire {
    Text(String),
    Entries(Vec<ExperienceItemWire>),
}

impl ExperienceWire {
    fn into_rewrites(self) -> Vec<ExperienceRewrite> {
        match self {
            ExperienceWire::Text(text) if text.trim().is_empty() => Vec::new(),
            ExperienceWire::Text(text) => vec![ExperienceRewrite {
                optimized: text,
                ..Default::default()
            }],
            ExperienceWire::Entries(entries) => entries.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExperienceItemWire {
    Text(String),
    Structured {
        #[serde(default)]
        role: Option<String>,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        company: Option<String>,
        #[serde(default, alias = "description")]
        optimized: Option<String>,
        #[serde(default, deserialize_with = "nullable", alias = "achievements")]
        bullets: Vec<String>,
    },
}

impl From<ExperienceItemWire> for ExperienceRewrite {
    fn from(wire: ExperienceItemWire) -> Self {
        match wire {
            ExperienceItemWire::Text(optimized) => ExperienceRewrite {
                optimized,
                ..Default::default()
            },
            ExperienceItemWire::Structured {
                role,
                title,
                company,
                optimized,
                bullets,
            } => {
                let role = non_empty(role).unwrap_or_else(|| {
                    match (non_empty(title), non_empty(company)) {
                        (Some(t), Some(c)) => format!("{} at {}", t, c),
                        (Some(t), None) => t,
                        (None, Some(c)) => c,
                        (None, None) => String::new(),
                    }
                });
                ExperienceRewrite {
                    role,
                    optimized: optimized.unwrap_or_default(),
                    bullets,
                }
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct BrandingPlanWire {
    #[serde(default, deserialize_with = "nullable")]
    banner_suggestion: Option<GuidanceWire>,

    #[serde(default, deserialize_with = "nullable")]
    weekly_plan: Vec<WeekWire>,

    #[serde(default, deserialize_with = "nullable")]
    posting_schedule: Option<GuidanceWire>,
}

impl From<BrandingPlanWire> for BrandingPlan {
    fn from(wire: BrandingPlanWire) -> Self {
        BrandingPlan {
            banner_suggestion: wire.banner_suggestion.map(Into::into).unwrap_or_default(),
            weekly_plan: wire
                .weekly_plan
                .into_iter()
                .enumerate()
                .map(|(i, week)| week.into_entry(i as u32 + 1))
                .collect(),
            posting_schedule: wire.posting_schedule.map(Into::into).unwrap_or_default(),
        }
    }
}

/// Keys whose value is used as the guidance headline, in priority order
const SUMMARY_KEYS: &[&str] = &["summary", "description", "text", "concept", "recommendation"];

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GuidanceWire {
    Text(String),
    Object(Map<String, Value>),
}

impl From<GuidanceWire> for Guidance {
    fn from(wire: GuidanceWire) -> Self {
        match wire {
            GuidanceWire::Text(text) => Guidance::text(text),
            GuidanceWire::Object(mut map) => {
                let summary = SUMMARY_KEYS
                    .iter()
                    .find_map(|key| match map.get(*key) {
                        Some(Value::String(s)) if !s.is_empty() => Some((*key, s.clone())),
                        _ => None,
                    })
                    .map(|(key, s)| {
                        map.remove(key);
                        s
                    })
                    .unwrap_or_default();
                let details = map
                    .iter()
                    .map(|(k, v)| (linklens_core::capitalize(k), value_text(v)))
                    .filter(|(_, v)| !v.is_empty())
                    .collect();
                Guidance { summary, details }
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct WeekWire {
    /// Number, or a label such as `"Week 1"`
    #[serde(default)]
    week: Option<Value>,

    #[serde(default, deserialize_with = "nullable", alias = "focus")]
    theme: String,

    #[serde(default, deserialize_with = "nullable")]
    tasks: Vec<String>,

    #[serde(default, deserialize_with = "nullable", alias = "content_ideas")]
    posts: Vec<PostWire>,

    #[serde(default)]
    frequency: Option<Value>,
}

impl WeekWire {
    fn into_entry(self, position: u32) -> WeeklyPlanEntry {
        WeeklyPlanEntry {
            week: self.week.as_ref().and_then(week_number).unwrap_or(position),
            theme: self.theme,
            tasks: self.tasks,
            posts: self.posts.into_iter().map(PostWire::into_text).collect(),
            frequency: self
                .frequency
                .map(|v| value_text(&v))
                .filter(|s| !s.is_empty()),
        }
    }
}

/// First run of digits in a week value; `None` when there is none
fn week_number(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => {
            let digits: String = s
                .chars()
                .skip_while(|c| !c.is_ascii_digit())
                .take_while(char::is_ascii_digit)
                .collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PostWire {
    Text(String),
    Structured {
        #[serde(default)]
        title: Option<String>,
        #[serde(default, alias = "description")]
        content: Option<String>,
    },
}

impl PostWire {
    fn into_text(self) -> String {
        match self {
            PostWire::Text(s) => s,
            PostWire::Structured { title, content } => match (non_empty(title), non_empty(content)) {
                (Some(t), Some(c)) => format!("{}: {}", t, c),
                (Some(t), None) => t,
                (None, Some(c)) => c,
                (None, None) => String::new(),
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error bodies
// ─────────────────────────────────────────────────────────────────

/// `{"detail": ...}` as sent by the backend on non-2xx responses
#[derive(Debug, Deserialize)]
pub struct ErrorBodyWire {
    #[serde(default)]
    detail: Option<DetailWire>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DetailWire {
    Text(String),
    Items(Vec<DetailItemWire>),
}

#[derive(Debug, Deserialize)]
struct DetailItemWire {
    #[serde(default)]
    msg: String,
}

impl ErrorBodyWire {
    /// Human-readable detail, if the body carried one
    pub fn detail(self) -> Option<String> {
        match self.detail? {
            DetailWire::Text(s) => non_empty(Some(s)),
            DetailWire::Items(items) => {
                let joined = items
                    .into_iter()
                    .map(|i| i.msg)
                    .filter(|m| !m.is_empty())
                    .collect::<Vec<_>>()
                    .join("; ");
                non_empty(Some(joined))
            }
        }
    }
}
