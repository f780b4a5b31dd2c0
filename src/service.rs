//! Process-lifetime owner of the website store connection.
//!
//! The service opens the connection on [`Lifecycle::start`], runs the table migration, and
//! hands a [`WebsiteRepository`] the borrowed handle for each forwarded call.

use crate::config::SqliteConfig;
use crate::error::{RepositoryError, Result};
use crate::repository::WebsiteRepository;
use crate::website::Website;
use anyhow::Context;
use async_trait::async_trait;
use futures::lock::Mutex;
use rusqlite::Connection;
use tracing::{debug, info};

/// Start/stop hooks for long-lived services
#[async_trait]
pub trait Lifecycle {
    async fn start(&self) -> anyhow::Result<()>;
    async fn stop(&self) -> anyhow::Result<()>;
}

pub struct WebsiteService {
    config: SqliteConfig,
    connection: Mutex<Option<Connection>>,
}

impl WebsiteService {
    /// Create a new website service with the given config
    pub fn new(config: SqliteConfig) -> Self {
        Self {
            config,
            connection: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &str {
        &self.config.db_path
    }

    pub async fn create(&self, website: Website) -> Result<Website> {
        self.with_repository("create", |repo| repo.create(website))
            .await
    }

    pub async fn all(&self) -> Result<Vec<Website>> {
        self.with_repository("all", |repo| repo.all()).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Website> {
        self.with_repository("get_by_name", |repo| repo.get_by_name(name))
            .await
    }

    pub async fn update(&self, id: i64, updated: Website) -> Result<Website> {
        self.with_repository("update", |repo| repo.update(id, updated))
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.with_repository("delete", |repo| repo.delete(id)).await
    }

    async fn with_repository<T>(
        &self,
        operation: &str,
        f: impl FnOnce(&WebsiteRepository<'_>) -> Result<T>,
    ) -> Result<T> {
        let guard = self.connection.lock().await;
        let conn = guard.as_ref().ok_or(RepositoryError::NotStarted)?;
        debug!(operation, path = %self.path(), "website operation");
        f(&WebsiteRepository::new(conn))
    }

    fn open(&self) -> anyhow::Result<Connection> {
        let conn = if self.config.is_in_memory() {
            Connection::open_in_memory()
        } else {
            Connection::open(&self.config.db_path)
        };
        conn.with_context(|| format!("failed to open sqlite database at {}", self.path()))
    }
}

#[async_trait]
impl Lifecycle for WebsiteService {
    async fn start(&self) -> anyhow::Result<()> {
        let mut guard = self.connection.lock().await;
        if guard.is_some() {
            return Ok(());
        }

        info!(path = %self.path(), "starting website service");
        let conn = self.open()?;
        WebsiteRepository::new(&conn)
            .migrate()
            .context("failed to create websites table")?;
        *guard = Some(conn);
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let mut guard = self.connection.lock().await;
        if let Some(conn) = guard.take() {
            conn.close()
                .map_err(|(_, err)| err)
                .context("failed to close sqlite database")?;
            info!(path = %self.path(), "website service stopped");
        }
        Ok(())
    }
}
