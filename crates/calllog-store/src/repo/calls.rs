use crate::error::{Result, StoreError};
use calllog_core::domain::{Call, CallId, CallType, Direction, Note, NoteId};
use calllog_core::port::{CallPage, CallPageSource};
use calllog_core::rules::PageRequest;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashSet;
use tracing::debug;

const CALL_COLUMNS: &str = "id, direction, call_type, from_endpoint, to_endpoint, via,
     created_at, duration_ms, is_archived, has_notes";

pub struct CallsRepo<'a> {
    conn: &'a Connection,
}

impl<'a> CallsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Upserts every call in one transaction. Existing calls keep their
    /// position in the listing; notes are replaced wholesale. Nothing is
    /// written when a call or note id repeats.
    pub fn import(&self, calls: &[Call]) -> Result<usize> {
        let mut seen = HashSet::new();
        for call in calls {
            if !seen.insert(call.id.as_str()) {
                return Err(StoreError::DuplicateCallId(call.id.to_string()));
            }
            ensure_unique_notes(call)?;
        }

        let tx = self.conn.unchecked_transaction()?;
        for call in calls {
            upsert_inner(&tx, call)?;
        }
        tx.commit()?;

        debug!(count = calls.len(), "imported calls");
        Ok(calls.len())
    }

    pub fn get(&self, id: &CallId) -> Result<Call> {
        let sql = format!("SELECT {CALL_COLUMNS} FROM calls WHERE id = ?1;");
        let row = self
            .conn
            .query_row(&sql, [id.as_str()], |row| CallRow::from_row(row))
            .optional()?;
        match row {
            Some(row) => row.into_call(self.conn),
            None => Err(StoreError::NotFound(format!("call {id}"))),
        }
    }

    pub fn count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM calls;", [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    /// Calls in import order, windowed by `request`.
    pub fn fetch(&self, request: PageRequest) -> Result<CallPage> {
        let offset = i64::try_from(request.offset).unwrap_or(i64::MAX);
        let limit = i64::from(request.limit);
        let sql = format!("SELECT {CALL_COLUMNS} FROM calls ORDER BY seq ASC LIMIT ?1 OFFSET ?2;");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params![limit, offset])?;
        let mut raw = Vec::new();
        while let Some(row) = rows.next()? {
            raw.push(CallRow::from_row(row)?);
        }

        let nodes = raw
            .into_iter()
            .map(|row| row.into_call(self.conn))
            .collect::<Result<Vec<_>>>()?;

        Ok(CallPage {
            total_count: self.count()?,
            nodes,
        })
    }
}

impl CallPageSource for CallsRepo<'_> {
    type Error = StoreError;

    fn fetch_page(&self, request: PageRequest) -> Result<Option<CallPage>> {
        self.fetch(request).map(Some)
    }
}

struct CallRow {
    id: String,
    direction: String,
    call_type: String,
    from: String,
    to: String,
    via: Option<String>,
    created_at: Option<String>,
    duration_ms: i64,
    is_archived: bool,
    has_notes: bool,
}

impl CallRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            direction: row.get(1)?,
            call_type: row.get(2)?,
            from: row.get(3)?,
            to: row.get(4)?,
            via: row.get(5)?,
            created_at: row.get(6)?,
            duration_ms: row.get(7)?,
            is_archived: row.get(8)?,
            has_notes: row.get(9)?,
        })
    }

    fn into_call(self, conn: &Connection) -> Result<Call> {
        let notes = if self.has_notes {
            Some(notes_for_call(conn, &self.id)?)
        } else {
            None
        };
        Ok(Call {
            id: CallId::new(self.id)?,
            direction: Direction::from(self.direction),
            call_type: CallType::from(self.call_type),
            from: self.from,
            to: self.to,
            via: self.via,
            created_at: self.created_at,
            duration: self.duration_ms,
            is_archived: self.is_archived,
            notes,
        })
    }
}

fn notes_for_call(conn: &Connection, call_id: &str) -> Result<Vec<Note>> {
    let mut stmt = conn.prepare(
        "SELECT id, content FROM call_notes
         WHERE call_id = ?1
         ORDER BY position ASC;",
    )?;
    let mut rows = stmt.query([call_id])?;
    let mut notes = Vec::new();
    while let Some(row) = rows.next()? {
        let id: String = row.get(0)?;
        notes.push(Note {
            id: NoteId::new(id)?,
            content: row.get(1)?,
        });
    }
    Ok(notes)
}

fn ensure_unique_notes(call: &Call) -> Result<()> {
    let mut seen = HashSet::new();
    for note in call.notes() {
        if !seen.insert(note.id.as_str()) {
            return Err(StoreError::DuplicateNoteId {
                call_id: call.id.to_string(),
                note_id: note.id.to_string(),
            });
        }
    }
    Ok(())
}

fn upsert_inner(conn: &Connection, call: &Call) -> Result<()> {
    conn.execute(
        "INSERT INTO calls (id, direction, call_type, from_endpoint, to_endpoint, via,
                            created_at, duration_ms, is_archived, has_notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
         ON CONFLICT(id) DO UPDATE SET
            direction = excluded.direction,
            call_type = excluded.call_type,
            from_endpoint = excluded.from_endpoint,
            to_endpoint = excluded.to_endpoint,
            via = excluded.via,
            created_at = excluded.created_at,
            duration_ms = excluded.duration_ms,
            is_archived = excluded.is_archived,
            has_notes = excluded.has_notes;",
        params![
            call.id.as_str(),
            call.direction.as_str(),
            call.call_type.as_str(),
            call.from,
            call.to,
            call.via,
            call.created_at,
            call.duration,
            call.is_archived,
            call.notes.is_some(),
        ],
    )?;

    conn.execute(
        "DELETE FROM call_notes WHERE call_id = ?1;",
        [call.id.as_str()],
    )?;
    for (position, note) in call.notes().iter().enumerate() {
        conn.execute(
            "INSERT INTO call_notes (call_id, id, position, content)
             VALUES (?1, ?2, ?3, ?4);",
            params![call.id.as_str(), note.id.as_str(), position as i64, note.content],
        )?;
    }
    Ok(())
}
