//! SQLite-backed storage for websites.
//!
//! # Intention
//!
//! - Provide a single repository over the `websites` table.
//! - Encapsulate SQLite-specific error inspection so callers only see domain errors.
//!
//! # Architectural Boundaries
//!
//! - The repository borrows a connection; it never opens or configures one.
//! - Opening, migrating and closing the connection belongs to [`service::WebsiteService`].
//! - No business logic beyond the six repository operations.

pub mod config;
pub mod error;
pub mod repository;
pub mod service;
pub mod website;

pub use config::SqliteConfig;
pub use error::{RepositoryError, Result, StoreFailure};
pub use repository::WebsiteRepository;
pub use service::{Lifecycle, WebsiteService};
pub use website::Website;
