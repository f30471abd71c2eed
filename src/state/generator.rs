use crate::{
    games::{self, Catalog},
    model::Message,
};

use super::Preferences;

/// The generator's inputs and the message derived from them.
pub struct Generator {
    prefs: Preferences,
    stored: Preferences,
    catalog: Option<Catalog>,
    message: Message,
}

impl Generator {
    pub fn new(prefs: Preferences) -> Self {
        let message = games::project(&Catalog::default(), &prefs);
        Self {
            stored: prefs.clone(),
            prefs,
            catalog: None,
            message,
        }
    }

    pub const fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    pub const fn message(&self) -> &Message {
        &self.message
    }

    pub const fn has_catalog(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn game_count(&self) -> usize {
        self.catalog
            .as_ref()
            .map_or(0, |c| c.current_games.len() + c.next_games.len())
    }

    /// Edits the preferences, recomputing the message if anything changed.
    pub fn update(&mut self, edit: impl FnOnce(&mut Preferences)) {
        let mut prefs = self.prefs.clone();
        edit(&mut prefs);
        if prefs != self.prefs {
            self.prefs = prefs;
            self.project();
        }
    }

    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = Some(catalog);
        self.project();
    }

    /// Preferences that changed since the last call, for writing back to storage.
    pub fn take_unsaved(&mut self) -> Option<&Preferences> {
        if self.prefs == self.stored {
            return None;
        }
        self.stored = self.prefs.clone();
        Some(&self.prefs)
    }

    fn project(&mut self) {
        let empty = Catalog::default();
        let catalog = self.catalog.as_ref().unwrap_or(&empty);
        self.message = games::project(catalog, &self.prefs);
    }
}
