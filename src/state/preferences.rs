use crate::{
    error::StorageError,
    model::Color,
    storage::{Key, LocalStorage},
};

/// Generator settings, persisted between runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub include_current: bool,
    pub include_upcoming: bool,
    pub include_footer: bool,
    pub include_price: bool,
    pub include_image: bool,
    pub content: String,
    color: Option<Color>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            include_current: true,
            include_upcoming: false,
            include_footer: true,
            include_price: true,
            include_image: true,
            content: String::new(),
            color: None,
        }
    }
}

impl Preferences {
    pub fn color(&self) -> Color {
        self.color.unwrap_or_default()
    }

    /// The default color is not stored.
    pub fn set_color(&mut self, color: Color) {
        self.color = Some(color).filter(|&c| c != Color::DEFAULT);
    }

    pub const fn all_disabled(&self) -> bool {
        !self.include_current && !self.include_upcoming
    }

    /// Reads every stored key, keeping the default for anything missing.
    pub fn load(storage: &LocalStorage<'_>) -> Result<Self, StorageError> {
        let mut this = Self::default();

        for (key, flag) in [
            (Key::IncludeCurrent, &mut this.include_current),
            (Key::IncludeUpcoming, &mut this.include_upcoming),
            (Key::IncludeFooter, &mut this.include_footer),
            (Key::IncludePrice, &mut this.include_price),
            (Key::IncludeImage, &mut this.include_image),
        ] {
            if let Some(value) = storage.get(key)? {
                *flag = value;
            }
        }

        if let Some(content) = storage.get(Key::EmbedContent)? {
            this.content = content;
        }

        if let Some(color) = storage.get::<String>(Key::EmbedColor)? {
            match Color::from_hex(&color) {
                Ok(color) => this.set_color(color),
                Err(err) => log::warn!("ignoring stored color: {err}"),
            }
        }

        Ok(this)
    }

    pub fn save(&self, storage: &LocalStorage<'_>) -> Result<(), StorageError> {
        storage.set(Key::EmbedContent, &self.content)?;
        storage.set(Key::IncludeCurrent, &self.include_current)?;
        storage.set(Key::IncludeUpcoming, &self.include_upcoming)?;
        storage.set(Key::IncludeFooter, &self.include_footer)?;
        storage.set(Key::IncludePrice, &self.include_price)?;
        storage.set(Key::IncludeImage, &self.include_image)?;

        match self.color {
            Some(color) => storage.set(Key::EmbedColor, &color.to_hex()),
            None => storage.remove(Key::EmbedColor).map(drop),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Connection;

    #[test]
    fn round_trip_through_storage() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(Preferences::load(&conn.local()).unwrap(), Preferences::default());

        let mut prefs = Preferences {
            include_upcoming: true,
            include_price: false,
            content: "hello".into(),
            ..Preferences::default()
        };
        prefs.set_color(Color::from_rgb([1, 2, 3]));
        prefs.save(&conn.local()).unwrap();

        assert_eq!(Preferences::load(&conn.local()).unwrap(), prefs);
        assert_eq!(
            conn.local().get::<String>(Key::EmbedColor).unwrap().as_deref(),
            Some("#010203")
        );
    }

    #[test]
    fn default_color_is_removed() {
        let conn = Connection::open_in_memory().unwrap();
        let mut prefs = Preferences::default();

        prefs.set_color(Color::from_rgb([1, 2, 3]));
        prefs.save(&conn.local()).unwrap();

        prefs.set_color(Color::DEFAULT);
        assert_eq!(prefs.color(), Color::DEFAULT);
        prefs.save(&conn.local()).unwrap();

        assert_eq!(conn.local().get::<String>(Key::EmbedColor).unwrap(), None);
    }

    #[test]
    fn all_disabled() {
        let prefs = Preferences {
            include_current: false,
            ..Preferences::default()
        };
        assert!(prefs.all_disabled());
        assert!(!Preferences::default().all_disabled());
    }
}
