//! Side effects declared by the reducer
//!
//! Effects are handled by the main loop; the reducer stays pure.

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch current weather for the given city.
    FetchWeather { city: String },
}
