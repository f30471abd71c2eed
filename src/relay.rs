//! Client for the relay endpoints that forward messages to a webhook.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{error::DispatchError, model::Message};

pub const DEFAULT_RELAY_URL: &str = "https://free.wolfey.me";

/// A validated request, ready to be sent.
#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    Send {
        webhook_url: String,
        message: Message,
    },
    Edit {
        webhook_url: String,
        message_id: String,
        message: Message,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendBody<'a> {
    webhook_url: &'a str,
    json_data: &'a Message,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EditBody<'a> {
    webhook_url: &'a str,
    message_id: &'a str,
    json_data: &'a Message,
}

#[derive(Deserialize)]
struct Failure {
    message: Option<String>,
}

impl Request {
    /// Sends when `message_id` is blank, edits otherwise.
    pub fn prepare(
        webhook_url: &str,
        message_id: &str,
        message: &Message,
    ) -> Result<Self, DispatchError> {
        match message_id.trim() {
            "" => Self::send(webhook_url, message),
            id => Self::edit(webhook_url, id, message),
        }
    }

    pub fn send(webhook_url: &str, message: &Message) -> Result<Self, DispatchError> {
        Ok(Self::Send {
            webhook_url: Self::require_webhook(webhook_url)?,
            message: message.clone(),
        })
    }

    pub fn edit(
        webhook_url: &str,
        message_id: &str,
        message: &Message,
    ) -> Result<Self, DispatchError> {
        let webhook_url = Self::require_webhook(webhook_url)?;
        let message_id = match message_id.trim() {
            "" => return Err(DispatchError::MissingMessageId),
            id => id.to_string(),
        };
        Ok(Self::Edit {
            webhook_url,
            message_id,
            message: message.clone(),
        })
    }

    pub const fn is_edit(&self) -> bool {
        matches!(self, Self::Edit { .. })
    }

    fn require_webhook(webhook_url: &str) -> Result<String, DispatchError> {
        match webhook_url.trim() {
            "" => Err(DispatchError::MissingWebhook),
            url => Ok(url.to_string()),
        }
    }

    fn body(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            Self::Send {
                webhook_url,
                message,
            } => serde_json::to_value(SendBody {
                webhook_url,
                json_data: message,
            }),
            Self::Edit {
                webhook_url,
                message_id,
                message,
            } => serde_json::to_value(EditBody {
                webhook_url,
                message_id,
                json_data: message,
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base: Url,
}

impl Client {
    pub const fn new(http: reqwest::Client, base: Url) -> Self {
        Self { http, base }
    }

    pub async fn execute(&self, request: &Request) -> Result<(), DispatchError> {
        let http = match request {
            Request::Send { .. } => self.http.post(self.base.join("/api/webhook")?),
            Request::Edit { .. } => self.http.patch(self.base.join("/api/edit")?),
        };

        log::debug!(
            "{} via {}",
            if request.is_edit() { "editing" } else { "sending" },
            self.base
        );

        let body = request.body()?;
        let resp = http.json(&body).send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let message = resp
            .json::<Failure>()
            .await
            .ok()
            .and_then(|failure| failure.message);

        Err(DispatchError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_input_is_rejected_up_front() {
        let message = Message::default();

        assert!(matches!(
            Request::prepare("  ", "", &message),
            Err(DispatchError::MissingWebhook)
        ));
        assert!(matches!(
            Request::prepare("", "123", &message),
            Err(DispatchError::MissingWebhook)
        ));
        assert!(matches!(
            Request::edit("https://hook", " ", &message),
            Err(DispatchError::MissingMessageId)
        ));
    }

    #[test]
    fn message_id_selects_edit() {
        let message = Message::default();
        assert!(!Request::prepare("https://hook", "", &message).unwrap().is_edit());

        let edit = Request::prepare(" https://hook ", " 42 ", &message).unwrap();
        assert_eq!(
            edit,
            Request::Edit {
                webhook_url: "https://hook".into(),
                message_id: "42".into(),
                message: message.clone(),
            }
        );
    }

    #[test]
    fn bodies_use_camel_case() {
        let message = Message::new("hi".into(), vec![]);

        let send = Request::send("https://hook", &message).unwrap();
        assert_eq!(
            send.body().unwrap(),
            json!({
                "webhookUrl": "https://hook",
                "jsonData": { "content": "hi", "embeds": [], "attachments": [] },
            })
        );

        let edit = Request::edit("https://hook", "7", &message).unwrap();
        assert_eq!(
            edit.body().unwrap(),
            json!({
                "webhookUrl": "https://hook",
                "messageId": "7",
                "jsonData": { "content": "hi", "embeds": [], "attachments": [] },
            })
        );
    }
}
