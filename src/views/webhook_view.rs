use egui::{Align2, Button, RichText, TextEdit, Window};

use crate::state::WebhookForm;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WebhookIntent {
    Save,
    Paste,
    Send,
}

/// The webhook url box with its paste/save buttons and the send button.
pub struct WebhookView<'a> {
    pub form: &'a mut WebhookForm,
    pub busy: bool,
    pub enabled: bool,
    pub allow_edit: bool,
    pub allow_save: bool,
}

impl<'a> WebhookView<'a> {
    pub fn display(self, ui: &mut egui::Ui) -> Option<WebhookIntent> {
        let mut intent = None;
        let form = self.form;

        ui.label(RichText::new("Webhook URL").strong());
        ui.horizontal(|ui| {
            let reserved = if self.allow_save { 72.0 } else { 36.0 };
            let resp = ui.add(
                TextEdit::singleline(&mut form.url)
                    .password(!form.reveal)
                    .hint_text("https://")
                    .desired_width((ui.available_width() - reserved).max(96.0)),
            );
            form.reveal = resp.has_focus();

            if self.allow_save
                && ui
                    .add_enabled(form.can_save(), Button::new("💾"))
                    .on_hover_text("Save webhook")
                    .clicked()
            {
                intent = Some(WebhookIntent::Save);
            }

            if ui.button("📋").on_hover_text("Paste").clicked() {
                intent = Some(WebhookIntent::Paste);
            }
        });

        ui.horizontal(|ui| {
            let label = if self.allow_edit && form.is_edit() {
                "Edit Message"
            } else {
                "Send"
            };
            if ui
                .add_enabled(self.enabled && !self.busy, Button::new(label))
                .clicked()
            {
                intent = Some(WebhookIntent::Send);
            }
            if self.busy {
                ui.spinner();
            }
        });

        if self.allow_edit {
            ui.add(
                TextEdit::singleline(&mut form.message_id)
                    .hint_text("Message ID (leave empty to send a new message)")
                    .desired_width(f32::INFINITY),
            );
        }

        intent
    }

    /// Asks before the webhook is written to disk. Returns whether the
    /// user agreed.
    pub fn confirm_save(ctx: &egui::Context, form: &mut WebhookForm) -> bool {
        if !form.confirm_save {
            return false;
        }

        let mut open = true;
        let mut answer = None;
        Window::new("Warning")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label("This will encrypt and save your webhook locally, and it will be filled in automatically next time.");
                ui.label(
                    RichText::new(
                        "⚠ This might not be secure. Consider pasting the webhook manually instead.",
                    )
                    .strong(),
                );
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        answer = Some(false);
                    }
                    if ui.button("Save Anyway").clicked() {
                        answer = Some(true);
                    }
                });
            });

        if !open || answer.is_some() {
            form.confirm_save = false;
        }
        answer.unwrap_or(false)
    }
}
