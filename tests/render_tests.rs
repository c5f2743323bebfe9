//! Rendering assertions against the test backend.
//!
//! Each test drives a component with a hand-built state and checks the
//! plain-text frame for the strings a user would see.

use ozweather::{
    AppState,
    components::{Component, SearchBar, SearchBarProps, WeatherDisplay, WeatherDisplayProps},
    testing::RenderHarness,
};
use serde_json::json;

fn sydney_state() -> AppState {
    let payload = json!({
        "name": "Sydney",
        "weather": [{"main": "Clear"}],
        "main": {"temp": 300.0, "pressure": 1012.0},
        "wind": {"speed": 5.0}
    });
    AppState {
        conditions: payload.as_object().cloned().expect("object payload"),
        ..AppState::default()
    }
}

fn render_display(state: &AppState) -> String {
    let mut display = WeatherDisplay::new();
    let mut harness = RenderHarness::new(50, 14);
    harness.render_to_string_plain(|frame| {
        let area = frame.area();
        display.render(frame, area, WeatherDisplayProps { state });
    })
}

#[test]
fn test_empty_state_renders_prompt() {
    let output = render_display(&AppState::default());

    assert!(output.contains("Please enter city name"));
    assert!(!output.contains("Temperature"));
    assert!(!output.contains("°C"));
}

#[test]
fn test_report_renders_all_fields() {
    let output = render_display(&sydney_state());

    assert!(output.contains("Sydney"));
    assert!(output.contains("Clear"));
    assert!(output.contains("26.85°C"));
    assert!(output.contains("5 m/s"));
    assert!(output.contains("1012 hPa"));
    assert!(!output.contains("Please enter city name"));
}

#[test]
fn test_loading_without_data_renders_progress() {
    let state = AppState {
        is_loading: true,
        ..AppState::default()
    };

    let output = render_display(&state);
    assert!(output.contains("Fetching weather"));
    assert!(!output.contains("Please enter city name"));
}

#[test]
fn test_error_takes_precedence_over_report() {
    let state = AppState {
        error: Some("weather request failed: connection refused".to_string()),
        ..sydney_state()
    };

    let output = render_display(&state);
    assert!(output.contains("Fetch failed"));
    assert!(output.contains("connection refused"));
    assert!(output.contains("retry"));
    assert!(!output.contains("26.85"));
}

#[test]
fn test_report_stays_visible_while_reloading() {
    let state = AppState {
        is_loading: true,
        ..sydney_state()
    };

    let output = render_display(&state);
    assert!(output.contains("Sydney"));
    assert!(output.contains("26.85°C"));
    assert!(!output.contains("Fetching weather"));
}

#[test]
fn test_incomplete_payload_falls_back_to_prompt() {
    let payload = json!({"name": "Sydney"});
    let state = AppState {
        conditions: payload.as_object().cloned().expect("object payload"),
        ..AppState::default()
    };

    let output = render_display(&state);
    assert!(output.contains("Please enter city name"));
    assert!(!output.contains("Temperature"));
}

#[test]
fn test_help_hints_present() {
    let output = render_display(&AppState::default());

    assert!(output.contains("enter search"));
    assert!(output.contains("esc quit"));
}

#[test]
fn test_search_bar_renders_query() {
    let mut bar = SearchBar::new();
    let mut harness = RenderHarness::new(40, 3);

    let output = harness.render_to_string_plain(|frame| {
        let area = frame.area();
        bar.render(
            frame,
            area,
            SearchBarProps {
                query: "Melbourne",
                is_focused: true,
            },
        );
    });
    assert!(output.contains("City"));
    assert!(output.contains("Melbourne"));
}
