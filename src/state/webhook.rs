use crate::{error::DispatchError, model::Message, relay::Request};

/// The webhook inputs shown above the send button.
#[derive(Clone, Debug, Default)]
pub struct WebhookForm {
    pub url: String,
    pub message_id: String,
    pub reveal: bool,
    pub confirm_save: bool,
}

impl WebhookForm {
    pub fn with_url(url: String) -> Self {
        Self {
            url,
            ..Self::default()
        }
    }

    pub fn is_edit(&self) -> bool {
        !self.message_id.trim().is_empty()
    }

    pub fn can_save(&self) -> bool {
        !self.url.trim().is_empty()
    }

    pub fn request(&self, message: &Message) -> Result<Request, DispatchError> {
        Request::prepare(&self.url, &self.message_id, message)
    }
}
