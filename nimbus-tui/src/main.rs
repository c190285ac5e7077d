//! nimbus - terminal weather dashboard
//!
//! Wiring: an `EffectStore` (reducer + logging middleware) driven by an
//! `EffectRuntime`. The quote timer runs as an interval subscription;
//! weather lookups are keyed tasks, so a new lookup aborts the in-flight
//! one and only the most recently issued request can land.

use std::cell::RefCell;
use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use nimbus_core::{
    EffectContext, EffectRuntime, EffectStoreWithMiddleware, EventKind, EventOutcome,
    LoggingMiddleware,
};
use nimbus_tui::action::Action;
use nimbus_tui::api::{WeatherClient, FETCH_ERROR_MESSAGE};
use nimbus_tui::components::{Component, Dashboard, DashboardProps};
use nimbus_tui::config::{Args, Config};
use nimbus_tui::effect::Effect;
use nimbus_tui::reducer::reducer;
use nimbus_tui::state::{AppState, QUOTE_ROTATE_MS};

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = Config::resolve(Args::parse());

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: Config,
) -> io::Result<()> {
    let client = WeatherClient::new(config.api_key.clone());

    let store = EffectStoreWithMiddleware::new(
        AppState::new(config.city.clone()),
        reducer,
        LoggingMiddleware::new(),
    );
    let mut runtime = EffectRuntime::from_store(store);

    // Quote rotation, for the lifetime of the app
    runtime
        .subscriptions()
        .interval("quotes", Duration::from_millis(QUOTE_ROTATE_MS), || {
            Action::QuoteTick
        });

    // Fetch the default city on startup
    runtime.enqueue(Action::WeatherFetch);

    let ui = RefCell::new(Dashboard::new());

    runtime
        .run(
            terminal,
            |frame, area, state| {
                ui.borrow_mut().render(frame, area, DashboardProps { state });
            },
            |event, state| {
                if let EventKind::Resize(_, _) = event {
                    return EventOutcome::needs_render();
                }
                EventOutcome::from_actions(
                    ui.borrow_mut().handle_event(event, DashboardProps { state }),
                )
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &client),
        )
        .await
}

/// Handle effects by spawning keyed tasks.
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, client: &WeatherClient) {
    match effect {
        Effect::FetchWeather { city } => {
            let client = client.clone();
            // Re-spawning under "weather" aborts any in-flight lookup
            ctx.tasks().spawn("weather", async move {
                match client.current_weather(&city).await {
                    Ok(snapshot) => Action::WeatherDidLoad(snapshot),
                    Err(err) => {
                        tracing::warn!(city = %city, error = %err, "weather fetch failed");
                        Action::WeatherDidError(FETCH_ERROR_MESSAGE.to_string())
                    }
                }
            });
        }
    }
}
