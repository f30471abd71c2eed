use std::path::Path;

use super::{PreviewMode, Tab, View};

#[derive(serde::Serialize, serde::Deserialize)]
struct Saved {
    #[serde(default)]
    tab: Tab,
    #[serde(default)]
    builder_preview: PreviewMode,
    #[serde(default)]
    generator_preview: PreviewMode,
}

pub struct SavedState<'a> {
    pub view: &'a View,
}

impl<'a> SavedState<'a> {
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let saved = Saved {
            tab: self.view.tab,
            builder_preview: self.view.builder_preview,
            generator_preview: self.view.generator_preview,
        };

        let data = match toml::to_string_pretty(&saved) {
            Ok(data) => data,
            Err(err) => {
                log::error!("cannot serialize view state: {err}");
                return;
            }
        };

        if let Err(err) = std::fs::write(path, data) {
            log::warn!("cannot write '{}': {err}", path.display());
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Option<View> {
        let data = std::fs::read_to_string(path).ok()?;
        let saved = toml::from_str::<Saved>(&data)
            .map_err(|err| log::warn!("ignoring saved view state: {err}"))
            .ok()?;

        Some(View {
            tab: saved.tab,
            builder_preview: saved.builder_preview,
            generator_preview: saved.generator_preview,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_and_loads() {
        let path = std::env::temp_dir().join(format!("hookcraft-view-{}.toml", std::process::id()));

        let view = View {
            tab: Tab::Generator,
            builder_preview: PreviewMode::Json,
            generator_preview: PreviewMode::Discord,
        };
        SavedState { view: &view }.save(&path);

        let loaded = SavedState::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, Some(view));
    }

    #[test]
    fn missing_keys_use_defaults() {
        let saved = toml::from_str::<Saved>("tab = \"generator\"").unwrap();
        assert_eq!(saved.tab, Tab::Generator);
        assert_eq!(saved.builder_preview, PreviewMode::Discord);
    }

    #[test]
    fn missing_file() {
        assert_eq!(SavedState::load("/nonexistent/hookcraft.toml"), None);
    }
}
