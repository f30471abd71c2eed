pub mod config;
pub mod error;
pub mod games;
pub mod import;
pub mod model;
pub mod preview;
pub mod relay;
pub mod secret;
pub mod state;
pub mod storage;

mod clipboard;
mod image;
mod repaint;
mod resolver;
mod runtime;
mod toast;
mod views;
mod widgets;

mod app;
pub use app::App;

pub fn default_http_client() -> reqwest::Client {
    use reqwest::header::{HeaderName, HeaderValue};
    reqwest::ClientBuilder::new()
        .default_headers(
            std::iter::once((
                HeaderName::from_static("user-agent"),
                HeaderValue::from_static(App::USER_AGENT),
            ))
            .collect(),
        )
        .build()
        .expect("valid client configuration")
}
