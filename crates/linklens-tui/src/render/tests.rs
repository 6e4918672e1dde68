use super::view;
use crate::test_utils::{analyzed_state, optimized_state, TestTerminal};
use linklens_app::{AppState, Focus, IconMode, RequestStatus, ResultTab};

fn draw(term: &mut TestTerminal, state: &mut AppState) {
    term.draw_with(|frame| view(frame, state));
}

#[test]
fn test_initial_screen() {
    let mut term = TestTerminal::new();
    let mut state = AppState::new();
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("LinkLens"));
    assert!(term.buffer_contains("LinkedIn Profile"));
    assert!(term.buffer_contains("Resume"));
    assert!(term.buffer_contains("1 Analysis"));
    assert!(term.buffer_contains("Enter a LinkedIn profile URL above"));
    assert!(term.buffer_contains("http://localhost:8001"));
}

#[test]
fn test_overall_score_renders_without_decimal() {
    let mut term = TestTerminal::with_size(100, 40);
    let mut state = analyzed_state();
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("87%"));
    assert!(!term.buffer_contains("87.0"));
    assert!(term.buffer_contains("Jane Doe"));
}

#[test]
fn test_busy_labels() {
    let mut term = TestTerminal::new();
    let mut state = analyzed_state();
    state.analyze = RequestStatus::InFlight;
    draw(&mut term, &mut state);
    assert!(term.buffer_contains("Analyzing..."));

    state.analyze = RequestStatus::Idle;
    state.upload = RequestStatus::InFlight;
    draw(&mut term, &mut state);
    assert!(term.buffer_contains("Uploading resume..."));
}

#[test]
fn test_error_slots_are_independent() {
    let mut term = TestTerminal::new();
    let mut state = analyzed_state();
    state.upload = RequestStatus::Failed("Profile not found".into());
    draw(&mut term, &mut state);

    // Upload form occupies rows 7..11, its status row is 9
    assert!(term.line_contains(9, "Profile not found"));
    assert!(!term.line_contains(5, "Profile not found"));
}

#[test]
fn test_optimization_tab_shows_skills_in_order() {
    let mut term = TestTerminal::with_size(100, 60);
    let mut state = optimized_state();
    state.active_tab = ResultTab::Optimization;
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Current Skills: Rust, Go"));
    assert!(term.buffer_contains("Prioritized Skills: Rust, Kubernetes, Go"));
}

#[test]
fn test_branding_tab() {
    let mut term = TestTerminal::with_size(100, 60);
    let mut state = optimized_state();
    state.active_tab = ResultTab::Branding;
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Week 1: Introduce yourself"));
    assert!(term.buffer_contains("Posting Schedule"));
}

#[test]
fn test_missing_optimization_renders_empty_panel() {
    let mut term = TestTerminal::new();
    let mut state = analyzed_state();
    state.active_tab = ResultTab::Branding;
    draw(&mut term, &mut state);

    assert_eq!(state.scroll.total_lines, 0);
    assert!(term.buffer_contains("4 Branding Plan"));
    assert!(!term.buffer_contains("Overall Score"));
}

#[test]
fn test_render_records_content_size_and_scrolls() {
    let mut term = TestTerminal::new();
    let mut state = optimized_state();
    state.focus = Focus::Results;
    state.active_tab = ResultTab::Optimization;
    draw(&mut term, &mut state);

    assert!(state.scroll.total_lines > state.scroll.visible_lines);
    assert!(term.buffer_contains("Headline"));

    state.scroll.scroll_to_bottom();
    draw(&mut term, &mut state);
    assert!(!term.buffer_contains("Current: Engineer"));
    assert!(term.buffer_contains("Cut p99 latency"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut state = optimized_state();
    for (w, h) in [(10, 5), (20, 10), (1, 1)] {
        let mut term = TestTerminal::with_size(w, h);
        draw(&mut term, &mut state);
    }
}

#[test]
fn test_ascii_icons() {
    let mut term = TestTerminal::with_size(100, 40);
    let mut state = analyzed_state();
    state.settings.ui.icons = IconMode::Ascii;
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("+ Add a banner image"));
    assert!(!term.buffer_contains("\u{2713}"));
    assert!(!term.buffer_contains("\u{2588}"));
}
