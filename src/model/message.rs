use serde::{Deserialize, Serialize};

use super::Embed;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub embeds: Vec<Embed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub attachments: Vec<serde_json::Value>,
}

impl Message {
    pub const ROLE_MENTION: &str = "<@&847939354978811924>";

    pub const fn new(content: String, embeds: Vec<Embed>) -> Self {
        Self {
            content,
            embeds,
            username: None,
            avatar_url: None,
            attachments: Vec::new(),
        }
    }
}

impl Default for Message {
    fn default() -> Self {
        Self {
            content: Self::ROLE_MENTION.into(),
            embeds: vec![Embed::default()],
            username: Some("Free Games".into()),
            avatar_url: Some("https://wolfey.s-ul.eu/5nV1WPyv".into()),
            attachments: Vec::new(),
        }
    }
}
