use std::time::Duration;

use redis::{
    aio::{ConnectionManager, ConnectionManagerConfig},
    Client,
};
use tracing::{error, info};

/// Single connection attempt at startup. Success or failure is logged and the
/// server starts either way; nothing retries and no endpoint reflects the
/// outcome.
pub async fn connect(database_url: &str) -> Option<ConnectionManager> {
    let client = match Client::open(database_url) {
        Ok(client) => client,
        Err(e) => {
            error!("Invalid database URL: {e}");
            return None;
        }
    };

    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(500));

    match client.get_connection_manager_with_config(config).await {
        Ok(connection) => {
            info!("Connected to database");
            Some(connection)
        }
        Err(e) => {
            error!("Error connecting to database: {e}");
            None
        }
    }
}
