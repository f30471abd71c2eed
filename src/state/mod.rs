mod builder;
pub use builder::{Action, Builder, EmbedUpdate, FieldPatch, MetadataKey};

mod preferences;
pub use preferences::Preferences;

mod generator;
pub use generator::Generator;

mod webhook;
pub use webhook::WebhookForm;

mod save_state;
pub use save_state::SavedState;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Builder,
    Generator,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewMode {
    #[default]
    Discord,
    Json,
}

/// Which screen is showing. Saved on exit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct View {
    pub tab: Tab,
    pub builder_preview: PreviewMode,
    pub generator_preview: PreviewMode,
}

impl View {
    pub fn preview_mut(&mut self) -> &mut PreviewMode {
        match self.tab {
            Tab::Builder => &mut self.builder_preview,
            Tab::Generator => &mut self.generator_preview,
        }
    }
}
