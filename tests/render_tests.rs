//! Render snapshot tests using RenderHarness
//!
//! FRAMEWORK PATTERN: RenderHarness
//! - Create harness with terminal dimensions
//! - Render component to test buffer
//! - Convert to string for snapshot testing

use tui_dispatch::testing::*;

use skypanel::{
    components::{Component, SnapshotDisplay, SnapshotDisplayProps},
    state::AppState,
};

fn render_default(width: u16, height: u16, state: &AppState) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = SnapshotDisplay;
    render.render_to_string_plain(|frame| {
        let props = SnapshotDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

#[test]
fn test_render_current_conditions() {
    let state = AppState::default();
    let output = render_default(80, 40, &state);

    // City and temperature are FIGlet art; the condition and feels-like
    // lines are plain text
    assert!(output.contains("Có mây"), "Should show condition label");
    assert!(
        output.contains("Cảm giác như 30°"),
        "Should show feels-like line"
    );
}

#[test]
fn test_render_detail_tiles() {
    let state = AppState::default();
    let output = render_default(80, 40, &state);

    assert!(output.contains("Độ ẩm"), "Should show humidity tile");
    assert!(output.contains("65%"), "Should show humidity value");
    assert!(output.contains("12 km/h"), "Should show wind value");
    assert!(output.contains("Tầm nhìn"), "Should show visibility tile");
    assert!(output.contains("10 km"), "Should show visibility value");
    assert!(output.contains("1013 hPa"), "Should show pressure value");
}

#[test]
fn test_render_hourly_strip() {
    let state = AppState::default();
    let output = render_default(90, 40, &state);

    assert!(output.contains("Dự báo theo giờ"), "Should show hourly title");
    assert!(output.contains("Bây giờ"), "Should show the now cell");
    assert!(output.contains("14:00"), "Should show hour labels");
}

#[test]
fn test_render_hourly_scrolled() {
    let state = AppState {
        hourly_offset: 3,
        ..Default::default()
    };
    // Narrow enough that the first cells are scrolled out
    let output = render_default(46, 40, &state);

    assert!(!output.contains("Bây giờ"), "Scrolled-out cell is hidden");
    assert!(output.contains("16:00"), "Offset cell is visible");
}

#[test]
fn test_render_daily_list() {
    let state = AppState::default();
    let output = render_default(80, 40, &state);

    assert!(output.contains("Dự báo 7 ngày"), "Should show daily title");
    assert!(output.contains("Hôm nay"), "Should show today row");
    assert!(output.contains("Chủ Nhật"), "Should show sunday row");
    assert!(output.contains("30° / 24°"), "Should show high/low");
    assert!(output.contains("20%"), "Should show rain chance");
}

#[test]
fn test_render_help_bar() {
    let state = AppState::default();
    let output = render_default(80, 40, &state);

    // Should show keybinding hints ("r refresh" style)
    assert!(output.contains("refresh"), "Should show refresh hint");
    assert!(output.contains("hours"), "Should show hours hint");
    assert!(output.contains("quit"), "Should show quit hint");
}

#[test]
fn test_render_while_refreshing() {
    let state = AppState {
        is_refreshing: true,
        tick_count: 7,
        ..Default::default()
    };
    let output = render_default(80, 40, &state);

    assert!(output.contains("Đang làm mới"), "Should show refresh line");
    // Data stays on screen for the whole reload
    assert!(output.contains("Có mây"), "Should keep showing data");
    assert!(output.contains("Hôm nay"), "Should keep showing forecast");
}

#[test]
fn test_render_small_terminal_does_not_panic() {
    let state = AppState::default();
    for (w, h) in [(20, 8), (40, 15), (60, 24), (10, 3)] {
        let output = render_default(w, h, &state);
        assert!(!output.is_empty(), "{}x{} should render something", w, h);
    }
}
