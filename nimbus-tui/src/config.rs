//! CLI arguments and configuration

use std::env;

use clap::Parser;

use crate::state::DEFAULT_CITY;

/// Environment variable consulted when `--api-key` is not given.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Terminal weather dashboard
#[derive(Parser, Debug)]
#[command(name = "nimbus")]
#[command(about = "A terminal weather dashboard")]
pub struct Args {
    /// City to look up on startup
    #[arg(long, short, default_value = DEFAULT_CITY)]
    pub city: String,

    /// OpenWeatherMap API key; falls back to $OPENWEATHER_API_KEY
    #[arg(long)]
    pub api_key: Option<String>,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub city: String,
    pub api_key: String,
}

impl Config {
    pub fn resolve(args: Args) -> Self {
        let api_key = resolve_api_key(args.api_key, env::var(API_KEY_ENV).ok());
        Self {
            city: args.city,
            api_key,
        }
    }
}

/// Flag wins over environment. A missing key is not validated here; it
/// surfaces upstream as an authorization failure, collapsed into the
/// generic fetch error.
fn resolve_api_key(flag: Option<String>, env_value: Option<String>) -> String {
    flag.or(env_value).unwrap_or_default()
}
