//! Terminal weather dashboard
//!
//! Type a city, get its current weather: temperature, condition, a
//! lifestyle tip, a rotating quote, and a backdrop keyed to the condition.
//! Built on the `nimbus-core` dispatch pattern:
//!
//! 1. Events (keyboard) -> `Dashboard::handle_event` -> actions
//! 2. Actions folded by the reducer into [`state::AppState`]
//! 3. Reducer declares effects (weather fetches)
//! 4. Effects spawn keyed tasks that resolve to `Did*` actions
//! 5. Changed state re-renders

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod reducer;
pub mod state;
pub mod theme;
