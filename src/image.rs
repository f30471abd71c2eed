use std::{
    cell::Cell,
    time::{Duration, Instant},
};

use egui::{TextureHandle, TextureOptions, Vec2};

/// A decoded preview image, uploaded to the gpu.
pub enum Image {
    Static(TextureHandle),
    Animated(Animated),
}

impl Image {
    pub fn size(&self) -> Vec2 {
        match self {
            Self::Static(handle) => handle.size_vec2(),
            Self::Animated(animated) => animated.frames[0].1.size_vec2(),
        }
    }

    /// Scales the image to fit `max` while keeping its aspect ratio.
    pub fn fit(&self, max: Vec2) -> Vec2 {
        let size = self.size();
        if size.x <= 0.0 || size.y <= 0.0 {
            return max;
        }
        let scale = (max.x / size.x).min(max.y / size.y).min(1.0);
        size * scale
    }

    pub fn widget(&self, size: Vec2, dt: f32) -> egui::Image {
        match self {
            Self::Static(handle) => egui::Image::new(handle, size),
            Self::Animated(animated) => animated.frame(dt, size),
        }
    }

    pub fn decode(ctx: &egui::Context, name: &str, data: &[u8]) -> anyhow::Result<Self> {
        use ::image::ImageFormat;

        let format = ::image::guess_format(data)
            .map_err(|err| anyhow::anyhow!("unknown image format for '{name}': {err}"))?;

        match format {
            ImageFormat::Png => {
                let dec = ::image::codecs::png::PngDecoder::new(data)?;
                if dec.is_apng() {
                    Animated::decode(ctx, name, dec.apng()).map(Self::Animated)
                } else {
                    Self::decode_static(ctx, name, data)
                }
            }
            ImageFormat::Gif => {
                let dec = ::image::codecs::gif::GifDecoder::new(data)?;
                Animated::decode(ctx, name, dec).map(Self::Animated)
            }
            ImageFormat::Jpeg | ImageFormat::WebP => Self::decode_static(ctx, name, data),
            fmt => anyhow::bail!("unsupported image format for '{name}': {fmt:?}"),
        }
    }

    fn decode_static(ctx: &egui::Context, name: &str, data: &[u8]) -> anyhow::Result<Self> {
        let rgba = ::image::load_from_memory(data)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        let image = egui::ColorImage::from_rgba_unmultiplied([width as _, height as _], &rgba);
        Ok(Self::Static(ctx.load_texture(
            name,
            image,
            TextureOptions::LINEAR,
        )))
    }
}

pub struct Animated {
    frames: Vec<(Duration, TextureHandle)>,
    shown_at: Cell<Option<Instant>>,
    index: Cell<usize>,
}

impl Animated {
    fn frame(&self, dt: f32, size: Vec2) -> egui::Image {
        let index = self.index.get();
        let (delay, handle) = &self.frames[index];

        match self.shown_at.get() {
            Some(at) if at.elapsed().as_secs_f32() >= delay.as_secs_f32() - dt => {
                self.index.set((index + 1) % self.frames.len());
                self.shown_at.set(Some(Instant::now()));
            }
            Some(..) => {}
            None => self.shown_at.set(Some(Instant::now())),
        }

        egui::Image::new(handle, size)
    }

    fn decode<'a>(
        ctx: &egui::Context,
        name: &str,
        decoder: impl ::image::AnimationDecoder<'a>,
    ) -> anyhow::Result<Self> {
        let frames = decoder
            .into_frames()
            .enumerate()
            .map(|(i, frame)| {
                let frame = frame?;
                let delay = Duration::from(frame.delay());
                let rgba = frame.into_buffer();
                let (width, height) = rgba.dimensions();
                let image =
                    egui::ColorImage::from_rgba_unmultiplied([width as _, height as _], &rgba);
                let handle =
                    ctx.load_texture(format!("{name}#{i}"), image, TextureOptions::LINEAR);
                Ok((delay, handle))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        anyhow::ensure!(!frames.is_empty(), "'{name}' has no frames");

        Ok(Self {
            frames,
            shown_at: Cell::default(),
            index: Cell::default(),
        })
    }
}
