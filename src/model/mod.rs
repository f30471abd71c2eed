//! The message shape accepted by Discord's execute-webhook endpoint.

mod color;
pub use color::Color;

mod embed;
pub use embed::{Author, Embed, EmbedImage, Field, Footer};

mod message;
pub use message::Message;

pub mod limits;
pub mod timestamp;
