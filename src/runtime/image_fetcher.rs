use crate::{image::Image, resolver::Fut};

#[derive(Clone)]
pub struct ImageFetcher {
    http: reqwest::Client,
    ctx: egui::Context,
}

impl ImageFetcher {
    pub const fn new(http: reqwest::Client, ctx: egui::Context) -> Self {
        Self { http, ctx }
    }

    pub fn fetch(&self, url: &str) -> Fut<(String, Option<Image>)> {
        let this = self.clone();
        let url = url.to_string();

        Fut::spawn(
            async move {
                let image = match this.download(&url).await {
                    Ok(image) => Some(image),
                    Err(err) => {
                        log::warn!("cannot load image '{url}': {err}");
                        None
                    }
                };
                (url, image)
            },
            self.ctx.clone(),
        )
    }

    async fn download(&self, url: &str) -> anyhow::Result<Image> {
        let data = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let ctx = self.ctx.clone();
        let name = url.to_string();
        tokio::task::spawn_blocking(move || Image::decode(&ctx, &name, &data)).await?
    }
}
