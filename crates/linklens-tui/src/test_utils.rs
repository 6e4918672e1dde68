//! Render-test helpers built on ratatui's `TestBackend`.
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.render_widget(MainHeader::new("http://localhost:8001", icons), term.area());
//! assert!(term.buffer_contains("LinkLens"));
//! ```

use std::collections::BTreeMap;

use linklens_api::AnalyzeResponse;
use linklens_app::{AppState, ProfileSession, RequestStatus};
use linklens_core::{
    AnalysisResults, BrandingPlan, ContentSuggestion, ExperienceRewrite, FeaturedItem, Guidance,
    OptimizationResults, OptimizedSections, ProfileData, SectionAnalysis, SectionRewrite,
    SkillsOptimization, WeeklyPlanEntry,
};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Wrapper around a `TestBackend` terminal with content assertions
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_content(self.buffer(), line).contains(text)
    }

    /// Whole buffer as text, one row per line
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .map(|y| line_content(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    if line >= buffer.area.height {
        return String::new();
    }
    (0..buffer.area.width)
        .map(|x| buffer[(x, line)].symbol())
        .collect()
}

// ─────────────────────────────────────────────────────────
// Fixtures
// ─────────────────────────────────────────────────────────

pub fn sample_response() -> AnalyzeResponse {
    AnalyzeResponse {
        profile: ProfileData {
            profile_id: "p-42".into(),
            public_identifier: "jane-doe".into(),
            full_name: "Jane Doe".into(),
            headline: "Staff Engineer".into(),
            ..Default::default()
        },
        analysis: AnalysisResults {
            overall_score: 87.0,
            score_categories: BTreeMap::from([
                ("completeness".to_string(), 18.0),
                ("engagement".to_string(), 21.5),
            ]),
            sections: vec![SectionAnalysis {
                name: "headline".into(),
                score: 72.0,
                feedback: vec!["Mention your specialty".into()],
                category_scores: BTreeMap::new(),
            }],
            overall_recommendations: vec!["Add a banner image".into()],
        },
        suggestions: vec![
            ContentSuggestion::plain("Share a lesson from your last launch"),
            ContentSuggestion::titled("Hiring post", "Explain what your team builds"),
        ],
    }
}

pub fn sample_optimization() -> OptimizationResults {
    OptimizationResults {
        optimized_sections: OptimizedSections {
            headline: SectionRewrite {
                current: Some("Engineer".into()),
                optimized: "Staff Engineer | Distributed Systems".into(),
                alternatives: vec!["Platform Engineer building reliable infra".into()],
            },
            summary: SectionRewrite::optimized("I build systems that stay up."),
            skills: SkillsOptimization {
                current: vec!["Rust".into(), "Go".into()],
                prioritized: vec!["Rust".into(), "Kubernetes".into(), "Go".into()],
                suggested: vec!["Observability".into()],
            },
            featured: vec![FeaturedItem {
                title: "Conference talk".into(),
                description: "Scaling queues at RustConf".into(),
            }],
            experience: vec![ExperienceRewrite {
                role: "Staff Engineer at Acme".into(),
                optimized: "Led the storage rewrite".into(),
                bullets: vec!["Cut p99 latency by 40%".into()],
            }],
        },
        branding_plan: BrandingPlan {
            banner_suggestion: Guidance {
                summary: "Dark background with a circuit motif".into(),
                details: vec![("Colors".into(), "Navy and teal".into())],
            },
            weekly_plan: vec![WeeklyPlanEntry {
                week: 1,
                theme: "Introduce yourself".into(),
                tasks: vec!["Update headline".into()],
                posts: vec!["Origin story: how I got into systems".into()],
                frequency: Some("3 posts".into()),
            }],
            posting_schedule: Guidance::text("Tuesday and Thursday mornings"),
        },
    }
}

/// State after a successful analysis
pub fn analyzed_state() -> AppState {
    let mut state = AppState::new();
    state.session = Some(ProfileSession::new(sample_response()));
    state.analyze = RequestStatus::Idle;
    state
}

/// State after a successful analysis and resume upload
pub fn optimized_state() -> AppState {
    let mut state = analyzed_state();
    if let Some(session) = state.session.as_mut() {
        session.optimization = Some(sample_optimization());
    }
    state
}
