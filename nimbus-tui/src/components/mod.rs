pub mod city_input;
pub mod dashboard;
pub mod help_bar;
pub mod history_overlay;
pub mod quote_bar;
pub mod weather_panel;

// Re-export the core Component trait
pub use nimbus_core::Component;

pub use city_input::{CityInput, CityInputProps};
pub use dashboard::{Dashboard, DashboardProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use history_overlay::{HistoryOverlay, HistoryOverlayProps};
pub use quote_bar::{QuoteBar, QuoteBarProps};
pub use weather_panel::{WeatherPanel, WeatherPanelProps};
