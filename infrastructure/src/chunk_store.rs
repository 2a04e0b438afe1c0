use anyhow::Context;
use domain::models::StoredChunk;
use rusqlite::{Connection, OpenFlags};
use shared::types::Result;
use std::path::Path;

/// Read-only handle to the SQLite store produced by the indexing tool.
pub struct ChunkStore {
    conn: Connection,
}

impl ChunkStore {
    /// Opens an existing store. This tool never creates or mutates the
    /// store, so a missing or unreadable file is fatal.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("failed to open chunk store at {}", path.display()))?;
        Ok(Self { conn })
    }

    pub fn load_chunks(&self) -> Result<Vec<StoredChunk>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, vector, text, source FROM chunks")?;
        let mut rows = stmt.query([])?;
        let mut chunks = Vec::new();
        while let Some(row) = rows.next()? {
            let id: String = row.get(0)?;
            let vector_bytes: Vec<u8> = row.get(1)?;
            let text: String = row.get(2)?;
            let source: Option<String> = row.get(3)?;
            let vector: Vec<f32> = serde_json::from_slice(&vector_bytes)?;
            chunks.push(StoredChunk {
                id,
                vector,
                text,
                source,
            });
        }
        Ok(chunks)
    }
}
