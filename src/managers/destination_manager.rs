//! Destination Manager for the travel wishlist.
//!
//! Implements `DestinationManagerTrait`, CRUD operations over the
//! `destinations` collection, backed by SQLite via `rusqlite`.

use rusqlite::{params, Connection, OptionalExtension};

use crate::types::destination::Destination;
use crate::types::errors::DestinationError;

const SELECT_COLUMNS: &str = "SELECT id, name, notes, image_url, date_added, visited FROM destinations";

/// Trait defining destination persistence operations.
pub trait DestinationManagerTrait {
    fn add(&mut self, name: &str, notes: Option<&str>, image_url: Option<&str>) -> Result<Destination, DestinationError>;
    fn list(&self) -> Result<Vec<Destination>, DestinationError>;
    fn update(&mut self, record: Destination) -> Result<Destination, DestinationError>;
    fn remove(&mut self, id: i64) -> Result<(), DestinationError>;
    fn set_visited(&mut self, id: i64, visited: bool) -> Result<(), DestinationError>;
    fn get(&self, id: i64) -> Result<Option<Destination>, DestinationError>;
    /// Records whose `visited` flag equals `visited`, oldest first.
    fn list_visited(&self, visited: bool) -> Result<Vec<Destination>, DestinationError>;
    fn find_by_name(&self, name: &str) -> Result<Vec<Destination>, DestinationError>;
}

/// Destination manager backed by a SQLite connection.
pub struct DestinationManager<'a> {
    conn: &'a Connection,
}

impl<'a> DestinationManager<'a> {
    /// Creates a new `DestinationManager` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn row_to_destination(row: &rusqlite::Row) -> rusqlite::Result<Destination> {
        Ok(Destination {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            notes: row.get(2)?,
            image_url: row.get(3)?,
            date_added: row.get(4)?,
            visited: row.get(5)?,
        })
    }

    fn query_all<P: rusqlite::Params>(&self, sql: &str, args: P) -> Result<Vec<Destination>, DestinationError> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(args, Self::row_to_destination)?;
        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }
}

impl<'a> DestinationManagerTrait for DestinationManager<'a> {
    /// Inserts a new destination and returns it with its assigned id.
    fn add(
        &mut self,
        name: &str,
        notes: Option<&str>,
        image_url: Option<&str>,
    ) -> Result<Destination, DestinationError> {
        let mut item = Destination::draft(name, notes, image_url);
        if item.name.is_empty() {
            return Err(DestinationError::EmptyName);
        }

        self.conn
            .execute(
                "INSERT INTO destinations (name, notes, image_url, date_added, visited) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![item.name, item.notes, item.image_url, item.date_added, item.visited],
            )
            .inspect_err(|e| tracing::warn!(error = %e, "failed to add destination"))?;

        let id = self.conn.last_insert_rowid();
        item.id = Some(id);
        tracing::debug!(id, name = %item.name, "added destination");
        Ok(item)
    }

    /// Lists every destination, oldest `date_added` first.
    fn list(&self) -> Result<Vec<Destination>, DestinationError> {
        self.query_all(
            &format!("{SELECT_COLUMNS} ORDER BY date_added ASC, id ASC"),
            params![],
        )
    }

    /// Replaces the stored record wholesale, writing it under its id.
    fn update(&mut self, record: Destination) -> Result<Destination, DestinationError> {
        let id = record.id.ok_or(DestinationError::MissingId)?;
        if record.name.trim().is_empty() {
            return Err(DestinationError::EmptyName);
        }

        self.conn
            .execute(
                "INSERT OR REPLACE INTO destinations (id, name, notes, image_url, date_added, visited) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    id,
                    record.name,
                    record.notes,
                    record.image_url,
                    record.date_added,
                    record.visited
                ],
            )
            .inspect_err(|e| tracing::warn!(id, error = %e, "failed to update destination"))?;

        tracing::debug!(id, "updated destination");
        Ok(record)
    }

    /// Deletes a destination. Removing an unknown id is not an error.
    fn remove(&mut self, id: i64) -> Result<(), DestinationError> {
        let affected = self
            .conn
            .execute("DELETE FROM destinations WHERE id = ?1", params![id])?;
        tracing::debug!(id, affected, "removed destination");
        Ok(())
    }

    /// Sets the visited flag with a single field-level update.
    fn set_visited(&mut self, id: i64, visited: bool) -> Result<(), DestinationError> {
        let affected = self.conn.execute(
            "UPDATE destinations SET visited = ?1 WHERE id = ?2",
            params![visited, id],
        )?;

        if affected == 0 {
            return Err(DestinationError::NotFound(id));
        }
        tracing::debug!(id, visited, "set visited flag");
        Ok(())
    }

    fn get(&self, id: i64) -> Result<Option<Destination>, DestinationError> {
        let found = self
            .conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                params![id],
                Self::row_to_destination,
            )
            .optional()?;
        Ok(found)
    }

    fn list_visited(&self, visited: bool) -> Result<Vec<Destination>, DestinationError> {
        self.query_all(
            &format!("{SELECT_COLUMNS} WHERE visited = ?1 ORDER BY date_added ASC, id ASC"),
            params![visited],
        )
    }

    /// Exact, case-sensitive name lookup.
    fn find_by_name(&self, name: &str) -> Result<Vec<Destination>, DestinationError> {
        self.query_all(
            &format!("{SELECT_COLUMNS} WHERE name = ?1 ORDER BY date_added ASC, id ASC"),
            params![name.trim()],
        )
    }
}
