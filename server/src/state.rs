use std::sync::Arc;

use redis::aio::ConnectionManager;

use super::{config::Config, database::connect};

pub struct AppState {
    pub config: Config,
    /// None when the startup connection attempt failed; the server keeps
    /// serving either way.
    pub db: Option<ConnectionManager>,
}

impl AppState {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();
        let db = connect(&config.database_url).await;

        Arc::new(Self { config, db })
    }
}
