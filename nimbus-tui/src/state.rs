//! Application state - single source of truth
//!
//! Components receive `&AppState` as props and never mutate it; only the
//! reducer does. The backdrop is always derived from the last *successful*
//! fetch, so an error or an in-flight request never changes it.

use crate::api::WeatherSnapshot;
use crate::theme::Condition;

/// Motivational quotes, rotated on a fixed timer.
pub const QUOTES: [&str; 3] = [
    "Weather is a great metaphor for life - sometimes it's good, sometimes it's bad, and there's nothing much you can do about it but carry an umbrella.",
    "Wherever you go, no matter what the weather, always bring your own sunshine.",
    "There is no such thing as bad weather, only different kinds of good weather.",
];

/// Quote rotation interval.
pub const QUOTE_ROTATE_MS: u64 = 5000;

/// City looked up on startup when none is given.
pub const DEFAULT_CITY: &str = "London";

/// Everything the UI needs to render.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The committed city, the one the current/last fetch is for.
    pub city: String,

    /// Draft text in the input field. Committed to `city` on Enter.
    pub input: String,

    /// Last successful fetch (None = nothing fetched yet).
    pub weather: Option<WeatherSnapshot>,

    /// True for the span of exactly one outstanding request.
    pub is_loading: bool,

    /// Error message from the last fetch, if it failed.
    pub error: Option<String>,

    /// Distinct queried cities, in first-query order.
    pub history: Vec<String>,

    /// Whether the history overlay is visible.
    pub show_history: bool,

    /// Selected row in the history overlay.
    pub history_selected: usize,

    /// Index into [`QUOTES`], advanced by the quote timer.
    pub quote_index: usize,
}

impl AppState {
    /// Create state for the given starting city.
    pub fn new(city: impl Into<String>) -> Self {
        let city = city.into();
        Self {
            input: city.clone(),
            city,
            weather: None,
            is_loading: false,
            error: None,
            history: Vec::new(),
            show_history: false,
            history_selected: 0,
            quote_index: 0,
        }
    }

    /// Condition of the last successful fetch, `Other` before the first.
    pub fn condition(&self) -> Condition {
        self.weather
            .as_ref()
            .map(|w| Condition::parse(&w.condition_main))
            .unwrap_or(Condition::Other)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_CITY)
    }
}

/// Append `city` to the history unless it is already present.
///
/// Exact-string matching, as typed. No trimming or case folding.
pub fn record_visit(history: &mut Vec<String>, city: &str) {
    if !history.iter().any(|visited| visited == city) {
        history.push(city.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_visit_is_idempotent() {
        let mut history = Vec::new();

        record_visit(&mut history, "Paris");
        record_visit(&mut history, "Paris");

        assert_eq!(history, vec!["Paris"]);
    }

    #[test]
    fn record_visit_preserves_insertion_order() {
        let mut history = Vec::new();

        record_visit(&mut history, "Paris");
        record_visit(&mut history, "Tokyo");
        record_visit(&mut history, "Paris");
        record_visit(&mut history, "London");

        assert_eq!(history, vec!["Paris", "Tokyo", "London"]);
    }

    #[test]
    fn record_visit_matches_exactly_as_typed() {
        let mut history = Vec::new();

        record_visit(&mut history, "paris");
        record_visit(&mut history, "Paris");

        // Case-sensitive: these are distinct entries
        assert_eq!(history, vec!["paris", "Paris"]);
    }

    #[test]
    fn condition_defaults_to_other_before_first_fetch() {
        let state = AppState::default();
        assert_eq!(state.condition(), Condition::Other);
    }

    #[test]
    fn condition_reflects_snapshot() {
        let mut state = AppState::default();
        state.weather = Some(WeatherSnapshot {
            condition_main: "Rain".into(),
            ..Default::default()
        });
        assert_eq!(state.condition(), Condition::Rain);
    }
}
