use std::{
    borrow::Cow,
    collections::VecDeque,
    time::{Duration, Instant},
};

use egui::{Align2, Area, Color32, Frame, Id, RichText, Rounding, Stroke};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

impl Level {
    const fn color(self) -> Color32 {
        match self {
            Self::Success => Color32::from_rgb(0x3b, 0xa5, 0x5c),
            Self::Error => Color32::from_rgb(0xed, 0x42, 0x45),
        }
    }
}

pub struct Toast {
    pub level: Level,
    pub title: Cow<'static, str>,
    pub description: Option<Cow<'static, str>>,
    created: Instant,
}

/// Short-lived notifications drawn in the bottom right corner. The oldest
/// toast is dropped once the queue is full.
pub struct Toasts {
    inner: VecDeque<Toast>,
    max: usize,
    lifetime: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::with_capacity(5)
    }
}

impl Toasts {
    pub fn with_capacity(max: usize) -> Self {
        assert!(max > 0, "max cannot be zero");
        Self {
            inner: VecDeque::with_capacity(max),
            max,
            lifetime: Duration::from_secs(4),
        }
    }

    pub fn push(
        &mut self,
        level: Level,
        title: impl Into<Cow<'static, str>>,
        description: Option<Cow<'static, str>>,
    ) {
        while self.inner.len() >= self.max {
            self.inner.pop_front();
        }
        let toast = Toast {
            level,
            title: title.into(),
            description,
            created: Instant::now(),
        };
        match toast.level {
            Level::Success => log::info!("{}", toast.title),
            Level::Error => log::warn!(
                "{}: {}",
                toast.title,
                toast.description.as_deref().unwrap_or_default()
            ),
        }
        self.inner.push_back(toast);
    }

    pub fn success(&mut self, title: impl Into<Cow<'static, str>>) {
        self.push(Level::Success, title, None)
    }

    pub fn error(
        &mut self,
        title: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) {
        self.push(Level::Error, title, Some(description.into()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> + ExactSizeIterator {
        self.inner.iter()
    }

    fn expire(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.inner
            .retain(|toast| now.duration_since(toast.created) < lifetime);
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.expire(Instant::now());
        if self.inner.is_empty() {
            return;
        }

        Area::new(Id::new("toasts"))
            .anchor(Align2::RIGHT_BOTTOM, [-12.0, -12.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in self.iter() {
                    Frame::popup(ui.style())
                        .rounding(Rounding::same(4.0))
                        .stroke(Stroke::new(1.0, toast.level.color()))
                        .show(ui, |ui| {
                            ui.set_max_width(280.0);
                            ui.label(RichText::new(&*toast.title).strong().color(toast.level.color()));
                            if let Some(description) = &toast.description {
                                ui.label(&**description);
                            }
                        });
                    ui.add_space(4.0);
                }
            });

        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
