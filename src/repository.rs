//! Repository over the `websites` table.
//!
//! Every operation issues exactly one statement. Statements and row cursors are dropped
//! before the operation returns, on success and error paths alike.

use crate::error::{RepositoryError, Result, StoreFailure};
use crate::website::Website;
use rusqlite::{params, Connection, OptionalExtension, Row};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS websites (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    url TEXT NOT NULL,
    rank INTEGER NOT NULL
)";

/// Website repository bound to a borrowed SQLite connection
pub struct WebsiteRepository<'c> {
    conn: &'c Connection,
}

impl<'c> WebsiteRepository<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Create the `websites` table if it does not exist yet
    pub fn migrate(&self) -> Result<()> {
        self.conn.execute(CREATE_TABLE, [])?;
        Ok(())
    }

    /// Insert a website and return it with the store-assigned id
    pub fn create(&self, website: Website) -> Result<Website> {
        let inserted = self.conn.execute(
            "INSERT INTO websites (name, url, rank) VALUES (?1, ?2, ?3)",
            params![website.name, website.url, website.rank],
        );
        match inserted {
            Ok(_) => {}
            Err(err) if err.is_unique_violation() => return Err(RepositoryError::Duplicate),
            Err(err) => return Err(err.into()),
        }

        let id = self.conn.last_insert_rowid();
        Ok(website.with_id(id))
    }

    /// Every stored website, in the order of a full table scan
    pub fn all(&self) -> Result<Vec<Website>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, url, rank FROM websites")?;
        let websites = stmt
            .query_map([], website_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(websites)
    }

    pub fn get_by_name(&self, name: &str) -> Result<Website> {
        self.conn
            .query_row(
                "SELECT id, name, url, rank FROM websites WHERE name = ?1",
                [name],
                website_from_row,
            )
            .optional()?
            .ok_or(RepositoryError::NotFound)
    }

    /// Overwrite name, url and rank of the row with `id`.
    ///
    /// Returns `updated` exactly as given; the row is not read back.
    pub fn update(&self, id: i64, updated: Website) -> Result<Website> {
        if id == 0 {
            return Err(RepositoryError::InvalidArgument);
        }

        let affected = self.conn.execute(
            "UPDATE websites SET name = ?1, url = ?2, rank = ?3 WHERE id = ?4",
            params![updated.name, updated.url, updated.rank, id],
        )?;
        if affected == 0 {
            return Err(RepositoryError::UpdateFailed);
        }

        Ok(updated)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let affected = self
            .conn
            .execute("DELETE FROM websites WHERE id = ?1", [id])?;
        if affected == 0 {
            return Err(RepositoryError::DeleteFailed);
        }
        Ok(())
    }
}

fn website_from_row(row: &Row<'_>) -> rusqlite::Result<Website> {
    Ok(Website {
        id: row.get(0)?,
        name: row.get(1)?,
        url: row.get(2)?,
        rank: row.get(3)?,
    })
}
