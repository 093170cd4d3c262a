use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::api::router::AppState;
use crate::application::ports::ClientRepository;
use crate::config::Config;
use crate::infrastructure::persistence::PostgresClientRepository;

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    pool: Option<PgPool>,
    client_repo: Option<Arc<dyn ClientRepository>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pool: None,
            client_repo: None,
        }
    }

    /// Initialize database connection pool with retry logic
    pub async fn with_database(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        info!("Connecting to database: {}", self.config.redacted_database_url());

        // Retry connection with exponential backoff
        let mut retries = 3;
        let mut delay = Duration::from_secs(1);
        let pool = loop {
            match self.pool_options().connect(&self.config.database_url).await {
                Ok(pool) => break pool,
                Err(e) if retries > 0 => {
                    retries -= 1;
                    tracing::warn!(
                        "Database connection failed, retrying in {:?} ({} retries left): {}",
                        delay,
                        retries,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => {
                    tracing::error!("Failed to connect to database after retries: {}", e);
                    return Err(Box::new(e));
                }
            }
        };

        info!(
            max = self.config.db_max_connections,
            min = self.config.db_min_connections,
            acquire_timeout_secs = self.config.db_acquire_timeout_secs,
            idle_timeout_secs = self.config.db_idle_timeout_secs,
            max_lifetime_secs = self.config.db_max_lifetime_secs,
            "Database pool configured"
        );

        self.pool = Some(pool);
        Ok(self)
    }

    /// Use an already created pool (tests, embedding)
    pub fn with_pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Set up the Postgres client repository on top of the pool
    pub fn with_repositories(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        let pool = self.pool.as_ref().ok_or("Database pool not initialized")?;
        let client_repo: Arc<dyn ClientRepository> =
            Arc::new(PostgresClientRepository::new(pool.clone()));

        self.client_repo = Some(client_repo);
        info!("Client repository initialized");
        Ok(self)
    }

    /// Build application state with all use cases
    pub fn build(self) -> Result<AppState, Box<dyn std::error::Error>> {
        let pool = self.pool.ok_or("Database pool not initialized")?;
        let client_repo = self
            .client_repo
            .ok_or("Client repository not initialized")?;

        let state = AppState::new(Arc::new(pool), client_repo);
        info!("Application layer initialized");
        Ok(state)
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.config.db_max_connections)
            .min_connections(self.config.db_min_connections)
            .acquire_timeout(Duration::from_secs(self.config.db_acquire_timeout_secs))
            .idle_timeout(Some(Duration::from_secs(self.config.db_idle_timeout_secs)))
            .max_lifetime(Some(Duration::from_secs(self.config.db_max_lifetime_secs)))
    }
}
