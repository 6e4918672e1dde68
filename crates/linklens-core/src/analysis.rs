//! Profile analysis results and content suggestions

use std::collections::BTreeMap;

/// Backend-computed scoring of a profile
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResults {
    /// Percentage, 0-100
    pub overall_score: f64,

    /// Optional sub-scores out of 25 (e.g. "completeness", "keywords")
    pub score_categories: BTreeMap<String, f64>,

    /// Sections in the order the backend listed them
    pub sections: Vec<SectionAnalysis>,

    pub overall_recommendations: Vec<String>,
}

/// Score and feedback for one profile section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionAnalysis {
    /// Section key as sent by the backend ("headline", "about", ...)
    pub name: String,
    pub score: f64,
    pub feedback: Vec<String>,
    pub category_scores: BTreeMap<String, f64>,
}

impl SectionAnalysis {
    /// Section name with the first letter capitalised
    pub fn title(&self) -> String {
        capitalize(&self.name)
    }
}

/// A generated post idea
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentSuggestion {
    pub title: Option<String>,
    pub content: String,
}

impl ContentSuggestion {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: content.into(),
        }
    }

    pub fn titled(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: content.into(),
        }
    }
}

/// Capitalise the first character, replacing underscores with spaces
pub fn capitalize(name: &str) -> String {
    let name = name.replace('_', " ");
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
