//! Render snapshot tests for the full dashboard
//!
//! Renders the root component into a test buffer and asserts on the plain
//! text that ends up on screen.

use nimbus_core::testing::RenderHarness;
use nimbus_core::Component;
use nimbus_tui::api::{WeatherSnapshot, FETCH_ERROR_MESSAGE};
use nimbus_tui::components::{Dashboard, DashboardProps};
use nimbus_tui::state::{AppState, QUOTES};

fn render(state: &AppState) -> String {
    let mut harness = RenderHarness::new(90, 30);
    let mut dashboard = Dashboard::new();
    harness.render_to_string_plain(|frame| {
        dashboard.render(frame, frame.area(), DashboardProps { state });
    })
}

fn rainy_paris() -> WeatherSnapshot {
    WeatherSnapshot {
        location_name: "Paris".into(),
        temperature_c: 17.3,
        condition_main: "Rain".into(),
        description: "light rain".into(),
    }
}

#[test]
fn initial_state_shows_title_input_and_prompt() {
    let state = AppState::default();
    let output = render(&state);

    assert!(output.contains("Weather Dashboard"));
    assert!(output.contains("City"));
    assert!(output.contains("London"), "input is pre-filled with the default city");
    assert!(output.contains("Press enter to fetch weather"));
}

#[test]
fn loading_state_shows_fetch_text() {
    let mut state = AppState::default();
    state.is_loading = true;

    let output = render(&state);
    assert!(output.contains("Fetching weather data..."));
}

#[test]
fn weather_state_shows_snapshot_tip_and_history_free_panel() {
    let mut state = AppState::default();
    state.weather = Some(rainy_paris());

    let output = render(&state);
    assert!(output.contains("Paris"));
    assert!(output.contains("17.3°C"));
    assert!(output.contains("light rain"));
    assert!(output.contains("umbrella"), "rain tip is shown");
    assert!(!output.contains("Search History"), "overlay is hidden by default");
}

#[test]
fn error_state_shows_the_exact_message() {
    let mut state = AppState::default();
    state.error = Some(FETCH_ERROR_MESSAGE.into());

    let output = render(&state);
    assert!(output.contains("Failed to fetch weather data. Please check the city name."));
}

#[test]
fn error_keeps_weather_out_of_the_panel() {
    let mut state = AppState::default();
    state.weather = Some(rainy_paris());
    state.error = Some(FETCH_ERROR_MESSAGE.into());

    let output = render(&state);
    // The error replaces the weather display region
    assert!(output.contains("Failed to fetch weather data."));
    assert!(!output.contains("17.3°C"));
}

#[test]
fn quote_bar_shows_the_current_quote() {
    let mut state = AppState::default();
    state.quote_index = 1;

    let output = render(&state);
    assert!(output.contains("bring your own sunshine"));
    assert!(!output.contains("metaphor"), "other quotes are not shown");

    state.quote_index = 2;
    let output = render(&state);
    assert!(output.contains("different kinds of good weather"));
}

#[test]
fn quote_index_wraps_within_bounds() {
    // Rendering never panics for any index the reducer can produce
    for index in 0..QUOTES.len() {
        let mut state = AppState::default();
        state.quote_index = index;
        render(&state);
    }
}

#[test]
fn history_overlay_lists_past_queries() {
    let mut state = AppState::default();
    state.history = vec!["Paris".into(), "Tokyo".into()];
    state.show_history = true;

    let output = render(&state);
    assert!(output.contains("Search History"));
    assert!(output.contains("Paris"));
    assert!(output.contains("Tokyo"));
}

#[test]
fn help_bar_shows_keybindings() {
    let state = AppState::default();
    let output = render(&state);

    assert!(output.contains("history"));
    assert!(output.contains("refresh"));
    assert!(output.contains("quit"));
}
