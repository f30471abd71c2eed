use egui::{
    vec2, Color32, Frame, Id, InnerResponse, Margin, Rect, Rounding, Sense, Stroke, TextEdit,
    TextStyle,
};

use crate::model::Color;

/// A pill with a short label, like the `APP` tag or a role mention.
pub struct Badge<'a> {
    pub text: &'a str,
    pub fg: Color32,
    pub bg: Color32,
}

impl<'a> Badge<'a> {
    pub const BLURPLE: Color32 = Color32::from_rgb(0x58, 0x65, 0xf2);

    pub fn app() -> Self {
        Self {
            text: "APP",
            fg: Color32::WHITE,
            bg: Self::BLURPLE,
        }
    }

    pub fn role() -> Self {
        Self {
            text: "@role",
            fg: Color32::from_rgb(0xc9, 0xcd, 0xfb),
            bg: Self::BLURPLE.gamma_multiply(0.3),
        }
    }

    pub fn display(self, ui: &mut egui::Ui) -> egui::Response {
        let fid = TextStyle::Body.resolve(ui.style());
        let galley = ui
            .painter()
            .layout_no_wrap(self.text.to_string(), fid, self.fg);

        let padding = vec2(4.0, 1.0);
        let (rect, resp) = ui.allocate_exact_size(galley.size() + padding * 2.0, Sense::hover());
        if !ui.is_rect_visible(rect) {
            return resp;
        }

        ui.painter()
            .rect(rect, Rounding::same(3.0), self.bg, Stroke::NONE);
        ui.painter().galley(rect.min + padding, galley);
        resp
    }
}

/// The embed body with the colored strip down its left edge.
pub struct EmbedCard {
    pub color: Color32,
}

impl EmbedCard {
    const STRIP: f32 = 4.0;

    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> InnerResponse<R> {
        let fill = if ui.visuals().dark_mode {
            Color32::from_rgb(0x2b, 0x2d, 0x31)
        } else {
            Color32::from_rgb(0xf2, 0xf3, 0xf5)
        };

        let resp = Frame::none()
            .fill(fill)
            .rounding(Rounding::same(Self::STRIP))
            .inner_margin(Margin {
                left: Self::STRIP + 12.0,
                right: 16.0,
                top: 8.0,
                bottom: 12.0,
            })
            .show(ui, add_contents);

        let rect = resp.response.rect;
        ui.painter().rect_filled(
            Rect::from_min_size(rect.min, vec2(Self::STRIP, rect.height())),
            Rounding {
                nw: Self::STRIP,
                sw: Self::STRIP,
                ne: 0.0,
                se: 0.0,
            },
            self.color,
        );
        resp
    }
}

/// A color picker next to a `#RRGGBB` text box. The text box keeps its
/// own draft while focused, so partial input is never applied.
pub struct HexColorEdit<'a> {
    pub id: Id,
    pub color: &'a mut Color,
}

impl<'a> HexColorEdit<'a> {
    pub fn display(self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.horizontal(|ui| {
            let mut rgb = self.color.to_rgb();
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                *self.color = Color::from_rgb(rgb);
                changed = true;
            }

            let mut draft = ui
                .data_mut(|d| d.get_temp::<String>(self.id))
                .unwrap_or_else(|| self.color.to_hex());
            let valid = Color::from_hex(&draft).is_ok();

            let mut edit = TextEdit::singleline(&mut draft)
                .desired_width(72.0)
                .font(TextStyle::Monospace);
            if !valid {
                edit = edit.text_color(ui.visuals().error_fg_color);
            }

            let resp = ui.add(edit);
            if resp.changed() {
                if let Ok(color) = Color::from_hex(&draft) {
                    if color != *self.color {
                        *self.color = color;
                        changed = true;
                    }
                }
            }

            if resp.has_focus() {
                ui.data_mut(|d| d.insert_temp(self.id, draft));
            } else {
                ui.data_mut(|d| d.remove::<String>(self.id));
            }
        });

        changed
    }
}

/// A single line text box that only reports its contents once editing
/// finishes, keeping a draft in the meantime.
pub struct DraftEdit<'a> {
    pub id: Id,
    pub current: &'a str,
    pub hint: &'a str,
    pub valid: fn(&str) -> bool,
}

impl<'a> DraftEdit<'a> {
    pub fn display(self, ui: &mut egui::Ui) -> Option<String> {
        let mut draft = ui
            .data_mut(|d| d.get_temp::<String>(self.id))
            .unwrap_or_else(|| self.current.to_string());

        let invalid = !draft.is_empty() && !(self.valid)(&draft);
        let mut edit = TextEdit::singleline(&mut draft)
            .hint_text(self.hint)
            .desired_width(96.0);
        if invalid {
            edit = edit.text_color(ui.visuals().error_fg_color);
        }

        let resp = ui.add(edit);
        if resp.has_focus() {
            ui.data_mut(|d| d.insert_temp(self.id, draft));
            return None;
        }

        ui.data_mut(|d| d.remove::<String>(self.id));
        (resp.lost_focus() && draft != self.current).then_some(draft)
    }
}
