use std::path::PathBuf;

use url::Url;

use crate::error::CatalogError;

use super::Catalog;

/// Where the list of promoted games comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Remote(Url),
}

impl Source {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        Url::parse(input)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .map_or_else(|| Self::File(PathBuf::from(input)), Self::Remote)
    }

    pub async fn load(&self, http: &reqwest::Client) -> Result<Catalog, CatalogError> {
        let data = match self {
            Self::File(path) => tokio::fs::read_to_string(path).await?,
            Self::Remote(url) => {
                http.get(url.clone())
                    .send()
                    .await?
                    .error_for_status()?
                    .text()
                    .await?
            }
        };
        Ok(serde_json::from_str(&data)?)
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => write!(f, "{url}"),
        }
    }
}
