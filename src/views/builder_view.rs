use egui::{Button, CentralPanel, CollapsingHeader, DragValue, RichText, ScrollArea, SidePanel, TextEdit};

use crate::{
    app::App,
    model::{timestamp, Author, Embed, Message},
    state::{Action, EmbedUpdate, FieldPatch, MetadataKey, Tab},
    widgets::{DraftEdit, HexColorEdit},
};

use super::{PreviewView, WebhookIntent, WebhookView};

pub struct BuilderView<'a> {
    pub app: &'a mut App,
}

impl<'a> BuilderView<'a> {
    pub fn display(self, ctx: &egui::Context) {
        let app = self.app;
        let mut actions = Vec::new();
        let mut intent = None;
        let (mut copy, mut import) = (false, false);

        SidePanel::left("builder_form")
            .resizable(true)
            .default_width(420.0)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    ui.heading("Embed Builder");
                    ui.add_space(4.0);

                    intent = WebhookView {
                        form: &mut app.builder_webhook,
                        busy: app.dispatch.is_busy(),
                        enabled: true,
                        allow_edit: true,
                        allow_save: true,
                    }
                    .display(ui);

                    ui.separator();
                    ui.horizontal(|ui| {
                        copy = ui.button("Copy JSON").clicked();
                        import = ui.button("Import from clipboard").clicked();
                    });
                    ui.separator();

                    Self::display_message_form(ui, app.builder.message(), &mut actions);
                });
            });

        CentralPanel::default().show(ctx, |ui| {
            PreviewView {
                message: app.builder.message(),
                images: &mut app.images,
                mode: app.view.builder_preview,
            }
            .display(ui)
        });

        for action in actions {
            log::trace!("{action:?}");
            if let Err(err) = app.builder.apply(action) {
                app.toasts.error(err.title(), err.description());
            }
        }

        match intent {
            Some(WebhookIntent::Save) => app.builder_webhook.confirm_save = true,
            Some(WebhookIntent::Paste) => app.paste_webhook(Tab::Builder),
            Some(WebhookIntent::Send) => app.send(Tab::Builder),
            None => {}
        }

        if copy {
            app.copy_json(Tab::Builder);
        }
        if import {
            app.import_from_clipboard();
        }

        if WebhookView::confirm_save(ctx, &mut app.builder_webhook) {
            app.save_webhook();
        }
    }

    fn display_message_form(ui: &mut egui::Ui, message: &Message, actions: &mut Vec<Action>) {
        ui.label(RichText::new("Bot Settings").strong());
        for (key, hint, value) in [
            (MetadataKey::Username, "Bot Username", &message.username),
            (MetadataKey::AvatarUrl, "Bot Avatar URL", &message.avatar_url),
        ] {
            let mut value = value.clone().unwrap_or_default();
            if Self::text_input(ui, &mut value, hint) {
                actions.push(Action::UpdateMetadata { key, value });
            }
        }

        ui.add_space(4.0);
        ui.label(RichText::new("Message Content").strong());
        let mut content = message.content.clone();
        if ui
            .add(
                TextEdit::multiline(&mut content)
                    .hint_text("Content above the embed")
                    .desired_rows(2)
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            actions.push(Action::UpdateMetadata {
                key: MetadataKey::Content,
                value: content,
            });
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Embeds").strong());
            if ui.small_button("➕ Add Embed").clicked() {
                actions.push(Action::AddEmbed);
            }
        });

        for (index, embed) in message.embeds.iter().enumerate() {
            CollapsingHeader::new(format!("Embed {}", index + 1))
                .id_source(("embed", index))
                .default_open(true)
                .show(ui, |ui| {
                    let removable = message.embeds.len() > 1;
                    Self::display_embed_form(ui, index, embed, removable, actions)
                });
        }
    }

    fn display_embed_form(
        ui: &mut egui::Ui,
        index: usize,
        embed: &Embed,
        removable: bool,
        actions: &mut Vec<Action>,
    ) {
        let update = |update| Action::UpdateEmbed {
            embed: index,
            update,
        };

        if removable && ui.small_button("🗑 Remove Embed").clicked() {
            actions.push(Action::RemoveEmbed { embed: index });
        }

        ui.label("Author");
        let mut author = embed.author.clone().unwrap_or_default();
        let mut url = author.url.clone().unwrap_or_default();
        let mut icon = author.icon_url.clone().unwrap_or_default();
        let changed = Self::text_input(ui, &mut author.name, "Name")
            | Self::text_input(ui, &mut url, "URL")
            | Self::text_input(ui, &mut icon, "Icon URL");
        if changed {
            actions.push(update(EmbedUpdate::Author(Some(Author {
                url: Some(url).filter(|s| !s.is_empty()),
                icon_url: Some(icon).filter(|s| !s.is_empty()),
                ..author
            }))));
        }

        ui.add_space(4.0);
        Self::display_fields_form(ui, index, embed, actions);

        ui.add_space(4.0);
        ui.label("Image");
        let mut image = embed.image.clone().unwrap_or_default();
        if Self::text_input(ui, &mut image.url, "Image URL") {
            actions.push(update(EmbedUpdate::Image(Some(image))));
        }

        ui.label("Footer");
        let mut footer = embed.footer.clone().unwrap_or_default();
        if Self::text_input(ui, &mut footer.text, "Footer text") {
            actions.push(update(EmbedUpdate::Footer(Some(footer))));
        }

        ui.label("Color");
        let mut color = embed.color;
        if (HexColorEdit {
            id: ui.id().with(("color", index)),
            color: &mut color,
        })
        .display(ui)
        {
            actions.push(update(EmbedUpdate::Color(color)));
        }

        ui.label("Timestamp");
        Self::display_timestamp_form(ui, index, embed, actions);
    }

    fn display_fields_form(ui: &mut egui::Ui, index: usize, embed: &Embed, actions: &mut Vec<Action>) {
        ui.horizontal(|ui| {
            ui.label("Fields");
            if ui.small_button("➕ Add Field").clicked() {
                actions.push(Action::AddField { embed: index });
            }
        });

        for (field_index, field) in embed.fields.iter().enumerate() {
            let patch = |patch| Action::UpdateField {
                embed: index,
                field: field_index,
                patch,
            };

            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("Field {}", field_index + 1))
                            .small()
                            .weak(),
                    );
                    if ui.small_button("🗑").on_hover_text("Remove field").clicked() {
                        actions.push(Action::RemoveField {
                            embed: index,
                            field: field_index,
                        });
                    }
                });

                let mut name = field.name.clone();
                if Self::text_input(ui, &mut name, "Name") {
                    actions.push(patch(FieldPatch {
                        name: Some(name),
                        ..FieldPatch::default()
                    }));
                }

                let mut value = field.value.clone();
                if ui
                    .add(
                        TextEdit::multiline(&mut value)
                            .hint_text("Value")
                            .desired_rows(2)
                            .desired_width(f32::INFINITY),
                    )
                    .changed()
                {
                    actions.push(patch(FieldPatch {
                        value: Some(value),
                        ..FieldPatch::default()
                    }));
                }

                let mut inline = field.inline;
                if ui.checkbox(&mut inline, "Inline").changed() {
                    actions.push(patch(FieldPatch {
                        inline: Some(inline),
                        ..FieldPatch::default()
                    }));
                }
            });
        }
    }

    fn display_timestamp_form(ui: &mut egui::Ui, index: usize, embed: &Embed, actions: &mut Vec<Action>) {
        let current = embed.timestamp.as_deref().and_then(timestamp::parse);

        ui.horizontal(|ui| {
            let date = current.map(|dt| dt.date().to_string()).unwrap_or_default();
            let edited = DraftEdit {
                id: ui.id().with(("date", index)),
                current: &date,
                hint: "YYYY-MM-DD",
                valid: |s| timestamp::parse_date(s).is_some(),
            }
            .display(ui);
            if let Some(date) = edited.as_deref().and_then(timestamp::parse_date) {
                actions.push(Action::SetDate { embed: index, date });
            }

            let (mut hours, mut minutes) = current.map_or((0, 0), |dt| (dt.hour(), dt.minute()));
            let changed = ui
                .add(DragValue::new(&mut hours).clamp_range(0..=23).suffix("h"))
                .changed()
                | ui
                    .add(DragValue::new(&mut minutes).clamp_range(0..=59).suffix("m"))
                    .changed();
            if changed {
                actions.push(Action::SetTime {
                    embed: index,
                    hours,
                    minutes,
                });
            }

            if ui
                .add_enabled(current.is_some(), Button::new("Clear"))
                .clicked()
            {
                actions.push(Action::UpdateEmbed {
                    embed: index,
                    update: EmbedUpdate::Timestamp(None),
                });
            }
        });
    }

    fn text_input(ui: &mut egui::Ui, value: &mut String, hint: &str) -> bool {
        ui.add(
            TextEdit::singleline(value)
                .hint_text(hint)
                .desired_width(f32::INFINITY),
        )
        .changed()
    }
}
