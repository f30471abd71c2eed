use rusqlite::OptionalExtension;
use serde::{de::DeserializeOwned, Serialize};

use crate::{error::StorageError, secret::Secret};

use super::Connection;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    EmbedWebhook,
    EmbedContent,
    IncludeCurrent,
    IncludeUpcoming,
    IncludeFooter,
    IncludePrice,
    IncludeImage,
    EmbedColor,
}

impl Key {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmbedWebhook => "embedWebhook",
            Self::EmbedContent => "embedContent",
            Self::IncludeCurrent => "includeCurrent",
            Self::IncludeUpcoming => "includeUpcoming",
            Self::IncludeFooter => "includeFooter",
            Self::IncludePrice => "includePrice",
            Self::IncludeImage => "includeImage",
            Self::EmbedColor => "embedColor",
        }
    }
}

/// Values are stored JSON-stringified.
pub struct LocalStorage<'a> {
    conn: &'a Connection,
}

impl<'a> LocalStorage<'a> {
    pub(in crate::storage) const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn get<T: DeserializeOwned>(&self, key: Key) -> Result<Option<T>, StorageError> {
        let Connection { conn, .. } = self.conn;

        let raw: Option<String> = conn
            .query_row(
                "select value from local_storage where key = :key",
                rusqlite::named_params! {":key": key.as_str()},
                |row| row.get("value"),
            )
            .optional()?;

        raw.map(|raw| serde_json::from_str(&raw))
            .transpose()
            .map_err(Into::into)
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: Key, value: &T) -> Result<(), StorageError> {
        let Connection { conn, .. } = self.conn;

        let value = serde_json::to_string(value)?;
        conn.execute(
            "insert into local_storage(key, value) values (:key, :value)
                on conflict(key) do update set value = excluded.value",
            rusqlite::named_params! {":key": key.as_str(), ":value": value},
        )?;
        Ok(())
    }

    pub fn remove(&self, key: Key) -> Result<bool, StorageError> {
        let Connection { conn, .. } = self.conn;

        let removed = conn.execute(
            "delete from local_storage where key = :key",
            rusqlite::named_params! {":key": key.as_str()},
        )?;
        Ok(removed == 1)
    }

    pub fn save_webhook(&self, secret: &Secret, url: &str) -> Result<(), StorageError> {
        let sealed = secret.encrypt(url)?;
        self.set(Key::EmbedWebhook, &sealed)
    }

    pub fn load_webhook(&self, secret: &Secret) -> Result<Option<String>, StorageError> {
        let Some(sealed) = self.get::<String>(Key::EmbedWebhook)? else {
            return Ok(None);
        };
        Ok(Some(secret.decrypt(&sealed)?))
    }
}
