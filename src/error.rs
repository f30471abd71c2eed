use std::borrow::Cow;

use crate::model::limits;

/// A mutation that would leave a message outside of Discord's limits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LimitError {
    #[error("author name is {len} characters long")]
    AuthorName { len: usize },
    #[error("footer text is {len} characters long")]
    FooterText { len: usize },
    #[error("field name is {len} characters long")]
    FieldName { len: usize },
    #[error("field value is {len} characters long")]
    FieldValue { len: usize },
    #[error("embed has {len} characters in total")]
    EmbedTotal { len: usize },
    #[error("message has {len} embeds")]
    Embeds { len: usize },
    #[error("embed has {len} fields")]
    Fields { len: usize },
}

impl LimitError {
    pub const fn title(&self) -> &'static str {
        match self {
            Self::AuthorName { .. } => "Author name too long",
            Self::FooterText { .. } => "Footer text too long",
            Self::FieldName { .. } => "Field name too long",
            Self::FieldValue { .. } => "Field value too long",
            Self::EmbedTotal { .. } => "Embed too large",
            Self::Embeds { .. } => "Cannot add more embeds",
            Self::Fields { .. } => "Cannot add more fields",
        }
    }

    pub fn description(&self) -> Cow<'static, str> {
        match self {
            Self::AuthorName { .. } => format!(
                "Author names are limited to {} characters.",
                limits::AUTHOR_NAME
            )
            .into(),
            Self::FooterText { .. } => format!(
                "Footer text is limited to {} characters.",
                limits::FOOTER_TEXT
            )
            .into(),
            Self::FieldName { .. } => format!(
                "Field names are limited to {} characters.",
                limits::FIELD_NAME
            )
            .into(),
            Self::FieldValue { .. } => format!(
                "Field values are limited to {} characters.",
                limits::FIELD_VALUE
            )
            .into(),
            Self::EmbedTotal { .. } => format!(
                "Total embed characters cannot exceed {}.",
                limits::TOTAL_EMBED_CHARS
            )
            .into(),
            Self::Embeds { .. } => format!(
                "Discord webhooks are limited to {} embeds per message.",
                limits::MAX_EMBEDS
            )
            .into(),
            Self::Fields { .. } => format!(
                "Discord embeds are limited to {} fields.",
                limits::MAX_FIELDS
            )
            .into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("expected a color in the form #RRGGBB, got '{0}'")]
    Format(String),
    #[error("color {0:#x} is out of range")]
    Range(u32),
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("invalid embed data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why the builder refused an action.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Limit(#[from] LimitError),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error("there is no embed #{index}")]
    NoSuchEmbed { index: usize },
    #[error("embed #{embed} has no field #{field}")]
    NoSuchField { embed: usize, field: usize },
    #[error("{hours:02}:{minutes:02} is not a valid time of day")]
    InvalidTime { hours: u8, minutes: u8 },
}

impl ActionError {
    pub fn title(&self) -> Cow<'static, str> {
        match self {
            Self::Limit(err) => err.title().into(),
            Self::Import(..) => "Invalid embed data in clipboard".into(),
            Self::NoSuchEmbed { .. } | Self::NoSuchField { .. } => "Nothing to update".into(),
            Self::InvalidTime { .. } => "Invalid time".into(),
        }
    }

    pub fn description(&self) -> Cow<'static, str> {
        match self {
            Self::Limit(err) => err.description(),
            err => err.to_string().into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("no webhook url was provided")]
    MissingWebhook,
    #[error("no message id was provided")]
    MissingMessageId,
    #[error("invalid relay url: {0}")]
    RelayUrl(#[from] url::ParseError),
    #[error("cannot encode the request body: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("relay rejected the request ({status}): {}", .message.as_deref().unwrap_or("no reason given"))]
    Rejected { status: u16, message: Option<String> },
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("stored value is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Secret(#[from] SecretError),
}

#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("stored secret is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("stored secret is truncated")]
    Truncated,
    #[error("could not encrypt the secret")]
    Encrypt,
    #[error("could not decrypt the secret, was the key changed?")]
    Decrypt,
    #[error("decrypted secret is not utf-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("cannot read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot fetch catalog: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is unavailable: {0}")]
    Unavailable(#[from] arboard::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("'{key}' is not a valid url: {source}")]
    Url {
        key: &'static str,
        source: url::ParseError,
    },
}
