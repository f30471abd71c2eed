mod image_cache;
pub use image_cache::ImageCache;

mod image_fetcher;
pub use image_fetcher::ImageFetcher;
