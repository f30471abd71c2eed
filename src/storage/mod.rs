//! A small key/value store kept in SQLite, holding the same keys a browser
//! build would keep in local storage.

use std::path::Path;

use crate::error::StorageError;

mod local;
pub use local::{Key, LocalStorage};

pub struct Connection {
    pub(in crate::storage) conn: rusqlite::Connection,
}

impl Connection {
    const SCHEMA: &str = "
        create table if not exists local_storage(
            key     text primary key not null,
            value   text not null
        );
    ";

    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = rusqlite::Connection::open(path)?;
        Self::create(conn)
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = rusqlite::Connection::open_in_memory()?;
        Self::create(conn)
    }

    fn create(conn: rusqlite::Connection) -> Result<Self, StorageError> {
        conn.execute_batch(Self::SCHEMA)?;
        Ok(Self { conn })
    }

    pub const fn local(&self) -> LocalStorage<'_> {
        LocalStorage::new(self)
    }
}
