use std::path::PathBuf;

use url::Url;

use crate::{error::ConfigError, games::Source, relay::DEFAULT_RELAY_URL};

/// Runtime settings read from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub relay_url: Url,
    pub catalog: Option<Source>,
    pub storage_path: PathBuf,
    pub state_path: PathBuf,
    pub secret: String,
}

impl Config {
    pub const RELAY_URL: &'static str = "HOOKCRAFT_RELAY_URL";
    pub const CATALOG: &'static str = "HOOKCRAFT_CATALOG";
    pub const STORAGE: &'static str = "HOOKCRAFT_STORAGE";
    pub const SECRET: &'static str = "HOOKCRAFT_SECRET";

    const DEFAULT_STORAGE: &'static str = "hookcraft.db";
    const DEFAULT_STATE: &'static str = "hookcraft.toml";
    // used when no secret is configured, so a saved webhook is only obfuscated
    const FALLBACK_SECRET: &'static str = concat!(env!("CARGO_PKG_NAME"), "-local-webhook");

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());

        let relay_url = get(Self::RELAY_URL);
        let relay_url = Url::parse(relay_url.as_deref().unwrap_or(DEFAULT_RELAY_URL)).map_err(
            |source| ConfigError::Url {
                key: Self::RELAY_URL,
                source,
            },
        )?;

        let secret = get(Self::SECRET).unwrap_or_else(|| {
            log::warn!(
                "'{}' is not set, the saved webhook will use a built-in key",
                Self::SECRET
            );
            Self::FALLBACK_SECRET.to_string()
        });

        Ok(Self {
            relay_url,
            catalog: get(Self::CATALOG).as_deref().map(Source::parse),
            storage_path: get(Self::STORAGE)
                .unwrap_or_else(|| Self::DEFAULT_STORAGE.to_string())
                .into(),
            state_path: PathBuf::from(Self::DEFAULT_STATE),
            secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.relay_url.as_str(), "https://free.wolfey.me/");
        assert_eq!(config.catalog, None);
        assert_eq!(config.storage_path, PathBuf::from("hookcraft.db"));
        assert!(!config.secret.is_empty());
    }

    #[test]
    fn overrides() {
        let config = Config::from_lookup(lookup(&[
            (Config::RELAY_URL, "http://localhost:3000"),
            (Config::CATALOG, "https://example.com/games.json"),
            (Config::STORAGE, "other.db"),
            (Config::SECRET, "hunter2"),
        ]))
        .unwrap();

        assert_eq!(config.relay_url.as_str(), "http://localhost:3000/");
        assert!(matches!(config.catalog, Some(Source::Remote(..))));
        assert_eq!(config.storage_path, PathBuf::from("other.db"));
        assert_eq!(config.secret, "hunter2");
    }

    #[test]
    fn bad_relay_url() {
        let err = Config::from_lookup(lookup(&[(Config::RELAY_URL, "not a url")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Url {
                key: Config::RELAY_URL,
                ..
            }
        ));
    }
}
