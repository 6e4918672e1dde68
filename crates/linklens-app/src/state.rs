//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};

use linklens_api::AnalyzeResponse;
use linklens_core::{AnalysisResults, ContentSuggestion, OptimizationResults, ProfileData};

use crate::config::Settings;

/// Application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Region receiving key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    UrlInput,
    ResumeInput,
    Results,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::UrlInput => Focus::ResumeInput,
            Focus::ResumeInput => Focus::Results,
            Focus::Results => Focus::UrlInput,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::UrlInput => Focus::Results,
            Focus::ResumeInput => Focus::UrlInput,
            Focus::Results => Focus::ResumeInput,
        }
    }

    pub fn is_text_input(self) -> bool {
        matches!(self, Focus::UrlInput | Focus::ResumeInput)
    }
}

/// Which result payload is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultTab {
    #[default]
    Analysis,
    Content,
    Optimization,
    Branding,
}

impl ResultTab {
    pub const ALL: [ResultTab; 4] = [
        ResultTab::Analysis,
        ResultTab::Content,
        ResultTab::Optimization,
        ResultTab::Branding,
    ];

    pub fn index(self) -> usize {
        match self {
            ResultTab::Analysis => 0,
            ResultTab::Content => 1,
            ResultTab::Optimization => 2,
            ResultTab::Branding => 3,
        }
    }

    /// Tab bound to a number key (`1`-`4`)
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(ResultTab::Analysis),
            '2' => Some(ResultTab::Content),
            '3' => Some(ResultTab::Optimization),
            '4' => Some(ResultTab::Branding),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResultTab::Analysis => "Analysis",
            ResultTab::Content => "Content Ideas",
            ResultTab::Optimization => "Optimization",
            ResultTab::Branding => "Branding Plan",
        }
    }

    /// Tabs that need a resume upload before they have data
    pub fn requires_optimization(self) -> bool {
        matches!(self, ResultTab::Optimization | ResultTab::Branding)
    }
}

/// Lifecycle of one backend workflow
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    InFlight,
    /// Last attempt failed; holds the display message
    Failed(String),
}

impl RequestStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestStatus::InFlight)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// One successful analysis plus whatever was derived from it afterwards.
///
/// Optimization results can only be attached to a session, so they never
/// outlive the profile they were computed for.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSession {
    pub profile: ProfileData,
    pub analysis: AnalysisResults,
    pub suggestions: Vec<ContentSuggestion>,
    pub analyzed_at: DateTime<Local>,
    pub optimization: Option<OptimizationResults>,
}

impl ProfileSession {
    pub fn new(response: AnalyzeResponse) -> Self {
        Self {
            profile: response.profile,
            analysis: response.analysis,
            suggestions: response.suggestions,
            analyzed_at: Local::now(),
            optimization: None,
        }
    }

    pub fn profile_id(&self) -> &str {
        &self.profile.profile_id
    }
}

/// Single-line text field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub value: String,
}

impl TextField {
    pub fn input_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Vertical scroll position of the result panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Current vertical offset from top
    pub offset: usize,
    /// Total content lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
}

impl ScrollState {
    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.visible_lines.saturating_sub(2).max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.visible_lines.saturating_sub(2).max(1));
    }

    /// Update with new content size, clamping the offset if content shrank
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    pub settings: Settings,

    pub focus: Focus,

    pub url_input: TextField,

    pub resume_input: TextField,

    pub analyze: RequestStatus,

    pub upload: RequestStatus,

    /// Present after the first successful analysis
    pub session: Option<ProfileSession>,

    pub active_tab: ResultTab,

    pub scroll: ScrollState,

    /// Animation frame counter for the busy spinner
    pub animation_frame: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            settings,
            focus: Focus::UrlInput,
            url_input: TextField::default(),
            resume_input: TextField::default(),
            analyze: RequestStatus::Idle,
            upload: RequestStatus::Idle,
            session: None,
            active_tab: ResultTab::Analysis,
            scroll: ScrollState::default(),
            animation_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn is_busy(&self) -> bool {
        self.analyze.is_in_flight() || self.upload.is_in_flight()
    }

    pub fn optimization(&self) -> Option<&OptimizationResults> {
        self.session.as_ref()?.optimization.as_ref()
    }

    /// Whether `tab` has data to show
    pub fn is_tab_available(&self, tab: ResultTab) -> bool {
        if tab.requires_optimization() {
            self.optimization().is_some()
        } else {
            self.session.is_some()
        }
    }

    /// Next available tab after the active one, wrapping around
    pub fn next_available_tab(&self) -> Option<ResultTab> {
        self.cycle_tab(1)
    }

    /// Previous available tab before the active one, wrapping around
    pub fn prev_available_tab(&self) -> Option<ResultTab> {
        self.cycle_tab(ResultTab::ALL.len() - 1)
    }

    fn cycle_tab(&self, step: usize) -> Option<ResultTab> {
        let len = ResultTab::ALL.len();
        let start = self.active_tab.index();
        (1..len)
            .map(|i| ResultTab::ALL[(start + i * step) % len])
            .find(|tab| self.is_tab_available(*tab))
    }

    pub fn set_tab(&mut self, tab: ResultTab) {
        if self.active_tab != tab {
            self.active_tab = tab;
            self.scroll.reset();
        }
    }

    /// Text field that has focus, if any
    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            Focus::UrlInput => Some(&mut self.url_input),
            Focus::ResumeInput => Some(&mut self.resume_input),
            Focus::Results => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ProfileSession {
        ProfileSession::new(AnalyzeResponse {
            profile: ProfileData {
                profile_id: "p-1".into(),
                ..Default::default()
            },
            analysis: AnalysisResults::default(),
            suggestions: Vec::new(),
        })
    }

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::UrlInput.next(), Focus::ResumeInput);
        assert_eq!(Focus::Results.next(), Focus::UrlInput);
        assert_eq!(Focus::UrlInput.prev(), Focus::Results);
        assert!(!Focus::Results.is_text_input());
    }

    #[test]
    fn test_result_tab_from_digit() {
        assert_eq!(ResultTab::from_digit('1'), Some(ResultTab::Analysis));
        assert_eq!(ResultTab::from_digit('4'), Some(ResultTab::Branding));
        assert_eq!(ResultTab::from_digit('5'), None);
    }

    #[test]
    fn test_no_tab_available_before_analysis() {
        let state = AppState::new();
        for tab in ResultTab::ALL {
            assert!(!state.is_tab_available(tab));
        }
        assert_eq!(state.next_available_tab(), None);
    }

    #[test]
    fn test_cycling_skips_optimization_tabs_without_upload() {
        let mut state = AppState::new();
        state.session = Some(session());

        assert_eq!(state.next_available_tab(), Some(ResultTab::Content));
        state.active_tab = ResultTab::Content;
        assert_eq!(state.next_available_tab(), Some(ResultTab::Analysis));
        assert_eq!(state.prev_available_tab(), Some(ResultTab::Analysis));
    }

    #[test]
    fn test_cycling_includes_optimization_tabs_after_upload() {
        let mut state = AppState::new();
        let mut s = session();
        s.optimization = Some(OptimizationResults::default());
        state.session = Some(s);
        state.active_tab = ResultTab::Content;

        assert_eq!(state.next_available_tab(), Some(ResultTab::Optimization));
        state.active_tab = ResultTab::Analysis;
        assert_eq!(state.prev_available_tab(), Some(ResultTab::Branding));
    }

    #[test]
    fn test_scroll_state_clamps() {
        let mut scroll = ScrollState::default();
        scroll.update_content_size(50, 20);

        scroll.scroll_down(100);
        assert_eq!(scroll.offset, 30);
        scroll.page_up();
        assert_eq!(scroll.offset, 12);
        scroll.scroll_to_top();
        assert_eq!(scroll.offset, 0);
        scroll.scroll_to_bottom();
        assert_eq!(scroll.offset, 30);

        scroll.update_content_size(10, 20);
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_set_tab_resets_scroll() {
        let mut state = AppState::new();
        state.scroll.update_content_size(100, 10);
        state.scroll.scroll_down(5);

        state.set_tab(ResultTab::Content);
        assert_eq!(state.scroll.offset, 0);
    }

    #[test]
    fn test_text_field_editing() {
        let mut field = TextField::default();
        field.input_char('a');
        field.input_char('b');
        field.backspace();
        assert_eq!(field.value, "a");
        field.clear();
        assert!(field.is_blank());
    }
}
