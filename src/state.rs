use crate::{
    db::DbPool,
    notification::{
        InMemoryNotificationStore, NotificationService, NotificationStore, PgNotificationRepository,
    },
    user::{InMemoryUserStore, PgUserRepository, UserStore},
};
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub notification_service: NotificationService,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>, notifications: Arc<dyn NotificationStore>) -> Self {
        Self {
            notification_service: NotificationService::new(users, notifications),
        }
    }

    pub fn postgres(db: DbPool) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(db.clone())),
            Arc::new(PgNotificationRepository::new(db)),
        )
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryUserStore::new()),
            Arc::new(InMemoryNotificationStore::new()),
        )
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// When unset the service runs on in-memory stores.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_url: None,
            database_max_connections: 5,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match std::env::var("PORT") {
            Ok(port) => port.parse().context("PORT must be a port number")?,
            Err(_) => defaults.port,
        };
        let database_max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(max) => max
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a number")?,
            Err(_) => defaults.database_max_connections,
        };

        Ok(Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port,
            database_url: std::env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            database_max_connections,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
