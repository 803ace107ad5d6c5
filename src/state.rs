use crate::{
    config::{ConnectionManager, ConnectionPool, init_schema},
    di::DependenciesInject,
};
use anyhow::{Context, Result};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub pool: ConnectionPool,
    pub di_container: DependenciesInject,
}

impl AppState {
    pub async fn new(database_url: &str) -> Result<Self> {
        info!("Initializing connection pool");

        let pool = ConnectionManager::new_pool(database_url)
            .await
            .context("Failed to create database connection pool")?;

        init_schema(&pool)
            .await
            .context("Failed to initialize database schema")?;

        Ok(Self::from_pool(pool))
    }

    /// Builds the state over an existing pool; the schema must already be in
    /// place. Used by tests with in-memory databases.
    pub fn from_pool(pool: ConnectionPool) -> Self {
        let di_container = DependenciesInject::new(pool.clone());

        Self { pool, di_container }
    }

    pub async fn shutdown(&self) {
        info!("Closing connection pool");
        self.pool.close().await;
    }
}
