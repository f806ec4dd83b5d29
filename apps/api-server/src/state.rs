//! Application state - shared across all handlers.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use commentary_core::error::RepoError;
use commentary_core::ports::{UnitOfWork, UnitOfWorkFactory};
use commentary_infra::{DatabaseConfig, InMemoryStore};

use crate::config::AppConfig;

#[cfg(feature = "postgres")]
use commentary_infra::database::{PostgresUnitOfWorkFactory, connect};

/// Which store backs the running server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Storage {
    Postgres,
    Memory,
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database connection failed: {0}")]
    Database(String),

    #[error("migrations failed: {0}")]
    Migration(String),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    uow: Arc<dyn UnitOfWorkFactory>,
    pub storage: Storage,
}

impl AppState {
    /// Build the application state from configuration.
    ///
    /// A configured database that cannot be reached is a startup error, not
    /// a silent switch to memory.
    pub async fn new(config: &AppConfig) -> Result<Self, StartupError> {
        match &config.database {
            Some(db_config) => Self::with_database(db_config, config.run_migrations).await,
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Ok(Self::in_memory(InMemoryStore::new()))
            }
        }
    }

    #[cfg(feature = "postgres")]
    async fn with_database(
        db_config: &DatabaseConfig,
        run_migrations: bool,
    ) -> Result<Self, StartupError> {
        use migration::{Migrator, MigratorTrait};

        let db = connect(db_config)
            .await
            .map_err(|e| StartupError::Database(e.to_string()))?;

        if run_migrations {
            Migrator::up(&db, None)
                .await
                .map_err(|e| StartupError::Migration(e.to_string()))?;
            tracing::info!("Migrations applied");
        }

        tracing::info!("Application state initialized (postgres)");
        Ok(Self {
            uow: Arc::new(PostgresUnitOfWorkFactory::new(db)),
            storage: Storage::Postgres,
        })
    }

    #[cfg(not(feature = "postgres"))]
    async fn with_database(
        _db_config: &DatabaseConfig,
        _run_migrations: bool,
    ) -> Result<Self, StartupError> {
        tracing::warn!("DATABASE_URL ignored - built without the postgres feature");
        Ok(Self::in_memory(InMemoryStore::new()))
    }

    /// State over an in-memory store. Data is lost on restart.
    pub fn in_memory(store: InMemoryStore) -> Self {
        Self {
            uow: Arc::new(store),
            storage: Storage::Memory,
        }
    }

    /// Open the unit of work for one request.
    pub async fn begin(&self) -> Result<Box<dyn UnitOfWork>, RepoError> {
        self.uow.begin().await
    }
}
