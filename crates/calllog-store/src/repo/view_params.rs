use crate::error::{Result, StoreError};
use calllog_core::port::QueryStore;
use calllog_core::query::QueryParams;
use rusqlite::{params, Connection, OptionalExtension};

/// Persisted query-string state. Keys keep the order they were first set
/// in, so the rendered query string is stable across runs.
pub struct ViewParamsRepo<'a> {
    conn: &'a Connection,
}

impl<'a> ViewParamsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn to_query_params(&self) -> Result<QueryParams> {
        let mut stmt = self
            .conn
            .prepare("SELECT key, value FROM view_params ORDER BY seq ASC;")?;
        let mut rows = stmt.query([])?;
        let mut pairs = Vec::new();
        while let Some(row) = rows.next()? {
            pairs.push((row.get::<_, String>(0)?, row.get::<_, String>(1)?));
        }
        Ok(pairs.into_iter().collect())
    }

    pub fn clear(&self) -> Result<()> {
        self.conn.execute("DELETE FROM view_params;", [])?;
        Ok(())
    }
}

impl QueryStore for ViewParamsRepo<'_> {
    type Error = StoreError;

    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM view_params WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO view_params (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM view_params WHERE key = ?1;", [key])?;
        Ok(())
    }

    fn query_string(&self) -> Result<String> {
        Ok(self.to_query_params()?.to_query_string())
    }
}
