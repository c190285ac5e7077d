//! Application actions
//!
//! Naming follows the two-phase convention: intent actions trigger work
//! (`WeatherFetch`, `CitySubmit`), `Did*` actions carry async results back.

use crate::api::WeatherSnapshot;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Weather =====
    /// Intent: re-fetch weather for the committed city.
    WeatherFetch,

    /// Result: weather loaded successfully.
    WeatherDidLoad(WeatherSnapshot),

    /// Result: fetch failed; carries the user-facing message.
    WeatherDidError(String),

    // ===== City input =====
    /// Draft input text changed.
    InputChange(String),

    /// Commit the draft as the new city (triggers a fetch).
    CitySubmit(String),

    // ===== History =====
    /// Show/hide the history overlay.
    HistoryToggle,

    /// Move the overlay selection.
    HistorySelect(usize),

    /// Re-query the selected history entry.
    HistoryConfirm,

    // ===== Global =====
    /// Quote timer tick.
    QuoteTick,

    /// Exit the application.
    Quit,
}

impl nimbus_core::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::WeatherFetch => "WeatherFetch",
            Action::WeatherDidLoad(_) => "WeatherDidLoad",
            Action::WeatherDidError(_) => "WeatherDidError",
            Action::InputChange(_) => "InputChange",
            Action::CitySubmit(_) => "CitySubmit",
            Action::HistoryToggle => "HistoryToggle",
            Action::HistorySelect(_) => "HistorySelect",
            Action::HistoryConfirm => "HistoryConfirm",
            Action::QuoteTick => "QuoteTick",
            Action::Quit => "Quit",
        }
    }
}
