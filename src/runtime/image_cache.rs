use crate::{image::Image, resolver::ResolverMap};

use super::ImageFetcher;

/// Preview images keyed by url.
pub struct ImageCache {
    images: ResolverMap<String, Image>,
    fetcher: ImageFetcher,
}

impl ImageCache {
    pub fn new(http: reqwest::Client, ctx: egui::Context) -> Self {
        Self {
            images: ResolverMap::default(),
            fetcher: ImageFetcher::new(http, ctx),
        }
    }

    /// Returns the image if it has loaded, starting a fetch the first time
    /// a url is seen. Blank and non-http urls are never fetched.
    pub fn get(&mut self, url: &str) -> Option<&Image> {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return None;
        }
        let fetcher = &self.fetcher;
        self.images.get_or_fetch(url, |url| fetcher.fetch(url))
    }

    pub fn is_broken(&self, url: &str) -> bool {
        self.images.is_failed(url.trim())
    }

    pub fn poll(&mut self) {
        let resolved = self.images.poll();
        if resolved > 0 {
            log::debug!("resolved {resolved} image(s)");
        }
    }
}
