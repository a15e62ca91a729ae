use std::{env, fmt::Display, str::FromStr};

use tracing::info;

/// Local database the stub connects to once at startup.
// TODO: move to an environment variable before any real deployment.
pub const DATABASE_URL: &str = "redis://127.0.0.1:6379/";

pub struct Config {
    pub port: u16,
    pub database_url: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "5000"),
            database_url: DATABASE_URL.to_string(),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| format!("Invalid {key} value: {e}"))
        .expect("Environment misconfigured!")
}
