use egui::{Button, CentralPanel, RichText, ScrollArea, SidePanel, TextEdit};

use crate::{
    app::App,
    model::{Color, Message},
    state::Tab,
    widgets::HexColorEdit,
};

use super::{PreviewView, WebhookIntent, WebhookView};

pub struct GeneratorView<'a> {
    pub app: &'a mut App,
}

impl<'a> GeneratorView<'a> {
    pub fn display(self, ctx: &egui::Context) {
        let app = self.app;
        let mut prefs = app.generator.prefs().clone();
        let mut intent = None;
        let (mut copy, mut reload) = (false, false);

        SidePanel::left("generator_form")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    ui.heading("Free Games Embed");
                    ui.label(
                        RichText::new("Your settings are stored locally, except your webhook.")
                            .small()
                            .weak(),
                    );
                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        let source = app
                            .catalog_source()
                            .map(|source| source.to_string());
                        match &source {
                            Some(source) => ui.label(format!("Games from {source}")),
                            None => ui.label(RichText::new("No game catalog configured").weak()),
                        };

                        let loading = app.catalog.is_busy();
                        if loading {
                            ui.spinner();
                        }
                        reload = ui
                            .add_enabled(source.is_some() && !loading, Button::new("⟳"))
                            .on_hover_text("Reload games")
                            .clicked();
                    });
                    if app.generator.has_catalog() {
                        ui.label(
                            RichText::new(format!("{} game(s) loaded", app.generator.game_count()))
                                .small()
                                .weak(),
                        );
                    }

                    ui.separator();
                    intent = WebhookView {
                        form: &mut app.generator_webhook,
                        busy: app.dispatch.is_busy(),
                        enabled: !prefs.all_disabled(),
                        allow_edit: false,
                        allow_save: false,
                    }
                    .display(ui);

                    ui.separator();
                    ui.label(RichText::new("Message Content").strong());
                    ui.add(
                        TextEdit::singleline(&mut prefs.content)
                            .hint_text(Message::ROLE_MENTION)
                            .desired_width(f32::INFINITY),
                    );

                    ui.label(RichText::new("Embed Color").strong());
                    ui.horizontal(|ui| {
                        let mut color = prefs.color();
                        if (HexColorEdit {
                            id: ui.id().with("generator_color"),
                            color: &mut color,
                        })
                        .display(ui)
                        {
                            prefs.set_color(color);
                        }
                        if ui
                            .add_enabled(color != Color::DEFAULT, Button::new("Reset"))
                            .clicked()
                        {
                            prefs.set_color(Color::DEFAULT);
                        }
                    });

                    ui.add_space(4.0);
                    ui.checkbox(&mut prefs.include_current, "Include current games");
                    ui.checkbox(&mut prefs.include_upcoming, "Include upcoming games");
                    ui.add_enabled_ui(!prefs.all_disabled(), |ui| {
                        ui.checkbox(&mut prefs.include_footer, "Include footer");
                        ui.checkbox(&mut prefs.include_price, "Include price");
                        ui.checkbox(&mut prefs.include_image, "Include image");
                    });

                    ui.add_space(4.0);
                    copy = ui
                        .add_enabled(!prefs.all_disabled(), Button::new("Copy JSON"))
                        .clicked();
                    if prefs.all_disabled() {
                        ui.label(
                            RichText::new("Select current or upcoming games to build an embed.")
                                .weak(),
                        );
                    }
                });
            });

        app.generator.update(|current| *current = prefs);

        CentralPanel::default().show(ctx, |ui| {
            PreviewView {
                message: app.generator.message(),
                images: &mut app.images,
                mode: app.view.generator_preview,
            }
            .display(ui)
        });

        match intent {
            Some(WebhookIntent::Send) => app.send(Tab::Generator),
            Some(WebhookIntent::Paste) => app.paste_webhook(Tab::Generator),
            Some(WebhookIntent::Save) | None => {}
        }
        if copy {
            app.copy_json(Tab::Generator);
        }
        if reload {
            app.reload_catalog();
        }
    }
}
