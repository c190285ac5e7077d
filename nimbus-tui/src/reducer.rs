//! Reducer - pure function: (state, action) -> changed + effects
//!
//! All state transitions live here. Every fetch path sets `is_loading` on
//! the way in, and both result actions clear it, so the flag is released
//! on success and failure alike. A failed fetch leaves the previous
//! snapshot (and with it the backdrop) untouched.

use nimbus_core::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{record_visit, AppState, QUOTES};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Weather =====
        Action::WeatherFetch => {
            state.is_loading = true;
            state.error = None;
            DispatchResult::changed_with(Effect::FetchWeather {
                city: state.city.clone(),
            })
        }

        Action::WeatherDidLoad(snapshot) => {
            state.is_loading = false;
            state.error = None;
            record_visit(&mut state.history, &state.city);
            state.weather = Some(snapshot);
            DispatchResult::changed()
        }

        Action::WeatherDidError(message) => {
            state.is_loading = false;
            state.error = Some(message);
            DispatchResult::changed()
        }

        // ===== City input =====
        Action::InputChange(value) => {
            state.input = value;
            DispatchResult::changed()
        }

        Action::CitySubmit(city) => {
            if city.is_empty() {
                return DispatchResult::unchanged();
            }
            state.city = city.clone();
            state.input = city.clone();
            state.is_loading = true;
            state.error = None;
            DispatchResult::changed_with(Effect::FetchWeather { city })
        }

        // ===== History =====
        Action::HistoryToggle => {
            state.show_history = !state.show_history;
            state.history_selected = 0;
            DispatchResult::changed()
        }

        Action::HistorySelect(index) => {
            if index < state.history.len() && index != state.history_selected {
                state.history_selected = index;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::HistoryConfirm => match state.history.get(state.history_selected).cloned() {
            Some(city) => {
                state.city = city.clone();
                state.input = city.clone();
                state.is_loading = true;
                state.error = None;
                DispatchResult::changed_with(Effect::FetchWeather { city })
            }
            None => DispatchResult::unchanged(),
        },

        // ===== Global =====
        Action::QuoteTick => {
            state.quote_index = (state.quote_index + 1) % QUOTES.len();
            DispatchResult::changed()
        }

        Action::Quit => {
            // Quit is handled in the main loop, not here
            DispatchResult::unchanged()
        }
    }
}
