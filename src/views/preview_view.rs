use egui::{Color32, RichText, ScrollArea, Sense, TextEdit, Vec2};

use crate::{
    model::{timestamp, Embed, Field, Message},
    preview::{self, ContentSpan, Fragment},
    runtime::ImageCache,
    state::PreviewMode,
    widgets::{Badge, EmbedCard},
};

/// Shows a message the way a Discord client would, or as raw json.
pub struct PreviewView<'a> {
    pub message: &'a Message,
    pub images: &'a mut ImageCache,
    pub mode: PreviewMode,
}

impl<'a> PreviewView<'a> {
    const AVATAR: f32 = 40.0;
    const AUTHOR_ICON: f32 = 24.0;
    const EMBED_WIDTH: f32 = 432.0;
    const IMAGE_MAX: Vec2 = Vec2::new(400.0, 300.0);
    const INLINE_PER_ROW: usize = 3;

    pub fn display(self, ui: &mut egui::Ui) {
        match self.mode {
            PreviewMode::Discord => self.display_discord(ui),
            PreviewMode::Json => self.display_json(ui),
        }
    }

    fn display_json(self, ui: &mut egui::Ui) {
        let json = preview::raw_json(self.message)
            .unwrap_or_else(|err| format!("cannot render message: {err}"));

        ScrollArea::both()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.add(
                    TextEdit::multiline(&mut json.as_str())
                        .code_editor()
                        .desired_width(f32::INFINITY),
                );
            });
    }

    fn display_discord(self, ui: &mut egui::Ui) {
        let Self {
            message, images, ..
        } = self;
        let dt = ui.input(|i| i.stable_dt.min(0.1));

        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    let avatar = message.avatar_url.as_deref().unwrap_or_default();
                    match images.get(avatar) {
                        Some(image) => {
                            ui.add(image.widget(Vec2::splat(Self::AVATAR), dt));
                        }
                        None => {
                            let (rect, _) =
                                ui.allocate_exact_size(Vec2::splat(Self::AVATAR), Sense::hover());
                            ui.painter().circle_filled(
                                rect.center(),
                                Self::AVATAR / 2.0,
                                Badge::BLURPLE,
                            );
                        }
                    }

                    ui.vertical(|ui| {
                        Self::display_header(ui, message);
                        Self::display_content(ui, &message.content);
                        for embed in &message.embeds {
                            Self::display_embed(ui, images, embed, dt);
                            ui.add_space(4.0);
                        }
                    });
                });
            });
    }

    fn display_header(ui: &mut egui::Ui, message: &Message) {
        let username = message
            .username
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("Webhook");

        ui.horizontal(|ui| {
            ui.label(RichText::new(username).strong());
            Badge::app().display(ui);
            let now = timestamp::clock(time::OffsetDateTime::now_utc());
            ui.label(RichText::new(format!("Today at {now}")).small().weak());
        });
    }

    fn display_content(ui: &mut egui::Ui, content: &str) {
        if content.is_empty() {
            return;
        }

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for span in preview::parse_content(content) {
                match span {
                    ContentSpan::Text(text) => {
                        ui.label(text);
                    }
                    ContentSpan::Role(id) => {
                        Badge::role().display(ui).on_hover_text(id);
                    }
                }
            }
        });
    }

    fn display_embed(ui: &mut egui::Ui, images: &mut ImageCache, embed: &Embed, dt: f32) {
        let [r, g, b] = embed.color.to_rgb();

        EmbedCard {
            color: Color32::from_rgb(r, g, b),
        }
        .show(ui, |ui| {
            ui.set_max_width(Self::EMBED_WIDTH);

            if let Some(author) = embed.author.as_ref().filter(|a| !a.name.is_empty()) {
                ui.horizontal(|ui| {
                    let icon = author.icon_url.as_deref().unwrap_or_default();
                    if let Some(image) = images.get(icon) {
                        ui.add(image.widget(Vec2::splat(Self::AUTHOR_ICON), dt));
                    }

                    let name = RichText::new(&author.name).strong().small();
                    match author.url.as_deref().filter(|url| !url.is_empty()) {
                        Some(url) => ui.hyperlink_to(name, url),
                        None => ui.label(name),
                    };
                });
            }

            Self::display_fields(ui, &embed.fields);

            if let Some(url) = embed.image_url() {
                if images.is_broken(url) {
                    ui.label(RichText::new("image unavailable").small().weak());
                } else if let Some(image) = images.get(url) {
                    ui.add(image.widget(image.fit(Self::IMAGE_MAX), dt));
                } else {
                    ui.spinner();
                }
            }

            if let Some(line) = preview::footer_line(embed) {
                ui.label(RichText::new(line).small().weak());
            }
        });
    }

    /// Non-inline fields take a whole row, runs of inline fields share rows
    /// of up to three.
    fn display_fields(ui: &mut egui::Ui, fields: &[Field]) {
        let mut rest = fields;
        while let Some(first) = rest.first() {
            if !first.inline {
                Self::display_field(ui, first);
                rest = &rest[1..];
                continue;
            }

            let run = rest
                .iter()
                .take(Self::INLINE_PER_ROW)
                .take_while(|field| field.inline)
                .count();
            let (row, tail) = rest.split_at(run);
            ui.columns(run, |columns| {
                for (ui, field) in columns.iter_mut().zip(row) {
                    Self::display_field(ui, field);
                }
            });
            rest = tail;
        }
    }

    fn display_field(ui: &mut egui::Ui, field: &Field) {
        ui.label(RichText::new(&field.name).strong());
        Self::display_markdown(ui, &field.value);
        ui.add_space(4.0);
    }

    fn display_markdown(ui: &mut egui::Ui, text: &str) {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for fragment in preview::parse_markdown(text) {
                let (text, style) = match fragment {
                    Fragment::LineBreak => {
                        ui.end_row();
                        continue;
                    }
                    Fragment::Text { text, style } => (text, style),
                };

                let mut rich = RichText::new(text);
                if style.bold {
                    rich = rich.strong();
                }
                if style.strike {
                    rich = rich.strikethrough();
                }

                match style.link {
                    Some(url) => ui.hyperlink_to(rich, url),
                    None => ui.label(rich),
                };
            }
        });
    }
}
