mod builder_view;
pub use builder_view::BuilderView;

mod generator_view;
pub use generator_view::GeneratorView;

mod preview_view;
pub use preview_view::PreviewView;

mod webhook_view;
pub use webhook_view::{WebhookIntent, WebhookView};
