use time::Date;

use crate::{
    error::{ActionError, ImportError},
    import,
    model::{limits, timestamp, Author, Color, Embed, EmbedImage, Field, Footer, Message},
};

/// A whole-value replacement of one embed member.
#[derive(Clone, Debug, PartialEq)]
pub enum EmbedUpdate {
    Color(Color),
    Author(Option<Author>),
    Footer(Option<Footer>),
    Timestamp(Option<String>),
    Image(Option<EmbedImage>),
}

/// The members of a field to overwrite, `None` keeps the current value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldPatch {
    pub name: Option<String>,
    pub value: Option<String>,
    pub inline: Option<bool>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MetadataKey {
    Content,
    Username,
    AvatarUrl,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    UpdateEmbed { embed: usize, update: EmbedUpdate },
    UpdateMetadata { key: MetadataKey, value: String },
    AddEmbed,
    RemoveEmbed { embed: usize },
    AddField { embed: usize },
    UpdateField { embed: usize, field: usize, patch: FieldPatch },
    RemoveField { embed: usize, field: usize },
    SetTime { embed: usize, hours: u8, minutes: u8 },
    SetDate { embed: usize, date: Date },
}

/// Owns the message being edited. Every change goes through [`Builder::apply`]
/// or [`Builder::import`], which validate the resulting state before
/// committing it; a rejected change leaves the message untouched.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    message: Message,
}

impl Builder {
    pub const fn message(&self) -> &Message {
        &self.message
    }

    pub fn apply(&mut self, action: Action) -> Result<(), ActionError> {
        match action {
            Action::UpdateEmbed { embed, update } => self.update_embed(embed, update),
            Action::UpdateMetadata { key, value } => {
                self.update_metadata(key, value);
                Ok(())
            }
            Action::AddEmbed => self.add_embed(),
            Action::RemoveEmbed { embed } => self.remove_embed(embed),
            Action::AddField { embed } => self.add_field(embed),
            Action::UpdateField {
                embed,
                field,
                patch,
            } => self.update_field(embed, field, patch),
            Action::RemoveField { embed, field } => self.remove_field(embed, field),
            Action::SetTime {
                embed,
                hours,
                minutes,
            } => self.set_time(embed, hours, minutes),
            Action::SetDate { embed, date } => self.set_date(embed, date),
        }
    }

    pub fn update_embed(&mut self, index: usize, update: EmbedUpdate) -> Result<(), ActionError> {
        self.commit_embed(index, |embed| {
            match update {
                EmbedUpdate::Color(color) => embed.color = color,
                EmbedUpdate::Author(author) => embed.author = author,
                EmbedUpdate::Footer(footer) => embed.footer = footer,
                EmbedUpdate::Timestamp(ts) => embed.timestamp = ts,
                EmbedUpdate::Image(image) => embed.image = image,
            }
            Ok(())
        })
    }

    pub fn update_metadata(&mut self, key: MetadataKey, value: String) {
        match key {
            MetadataKey::Content => self.message.content = value,
            MetadataKey::Username => self.message.username = Some(value),
            MetadataKey::AvatarUrl => self.message.avatar_url = Some(value),
        }
    }

    pub fn add_embed(&mut self) -> Result<(), ActionError> {
        let mut embeds = self.message.embeds.clone();
        embeds.push(Embed::default());
        self.commit(Message {
            embeds,
            ..self.message.clone()
        })
    }

    pub fn remove_embed(&mut self, index: usize) -> Result<(), ActionError> {
        if index >= self.message.embeds.len() {
            return Err(ActionError::NoSuchEmbed { index });
        }
        self.message.embeds.remove(index);
        Ok(())
    }

    pub fn add_field(&mut self, embed: usize) -> Result<(), ActionError> {
        self.commit_embed(embed, |embed| {
            embed.fields.push(Field::blank());
            Ok(())
        })
    }

    pub fn update_field(
        &mut self,
        embed: usize,
        field: usize,
        patch: FieldPatch,
    ) -> Result<(), ActionError> {
        self.commit_embed(embed, |target| {
            let target = target
                .fields
                .get_mut(field)
                .ok_or(ActionError::NoSuchField { embed, field })?;

            let FieldPatch {
                name,
                value,
                inline,
            } = patch;
            if let Some(name) = name {
                target.name = name;
            }
            if let Some(value) = value {
                target.value = value;
            }
            if let Some(inline) = inline {
                target.inline = inline;
            }
            Ok(())
        })
    }

    pub fn remove_field(&mut self, embed: usize, field: usize) -> Result<(), ActionError> {
        let target = self
            .message
            .embeds
            .get_mut(embed)
            .ok_or(ActionError::NoSuchEmbed { index: embed })?;
        if field >= target.fields.len() {
            return Err(ActionError::NoSuchField { embed, field });
        }
        target.fields.remove(field);
        Ok(())
    }

    pub fn set_time(&mut self, embed: usize, hours: u8, minutes: u8) -> Result<(), ActionError> {
        self.commit_embed(embed, |target| {
            let ts = timestamp::with_time(target.timestamp.as_deref(), hours, minutes)
                .ok_or(ActionError::InvalidTime { hours, minutes })?;
            target.timestamp.replace(ts);
            Ok(())
        })
    }

    pub fn set_date(&mut self, embed: usize, date: Date) -> Result<(), ActionError> {
        self.commit_embed(embed, |target| {
            let ts = timestamp::with_date(target.timestamp.as_deref(), date);
            target.timestamp.replace(ts);
            Ok(())
        })
    }

    /// Replaces the message with one parsed from `text`, filling in anything
    /// it leaves out from the current message.
    pub fn import(&mut self, text: &str) -> Result<(), ActionError> {
        let message = import::merge(text, &self.message).map_err(ImportError::from)?;
        self.commit(message)
    }

    pub fn export(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.message)
    }

    fn commit(&mut self, message: Message) -> Result<(), ActionError> {
        limits::check_message(&message)?;
        self.message = message;
        Ok(())
    }

    fn commit_embed(
        &mut self,
        index: usize,
        change: impl FnOnce(&mut Embed) -> Result<(), ActionError>,
    ) -> Result<(), ActionError> {
        let current = self
            .message
            .embeds
            .get_mut(index)
            .ok_or(ActionError::NoSuchEmbed { index })?;

        let mut next = current.clone();
        change(&mut next)?;
        limits::check_embed(&next)?;
        *current = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LimitError;

    fn author(name: String) -> EmbedUpdate {
        EmbedUpdate::Author(Some(Author {
            name,
            url: None,
            icon_url: None,
        }))
    }

    #[test]
    fn author_name_boundary() {
        let mut builder = Builder::default();
        builder.update_embed(0, author("a".repeat(256))).unwrap();
        assert_eq!(builder.message().embeds[0].author.as_ref().unwrap().name.len(), 256);

        let before = builder.message().clone();
        let err = builder.update_embed(0, author("b".repeat(257))).unwrap_err();
        assert!(matches!(
            err,
            ActionError::Limit(LimitError::AuthorName { len: 257 })
        ));
        assert_eq!(builder.message(), &before);
    }

    #[test]
    fn eleventh_embed_is_rejected() {
        let mut builder = Builder::default();
        for _ in 1..limits::MAX_EMBEDS {
            builder.add_embed().unwrap();
        }
        assert_eq!(builder.message().embeds.len(), 10);

        let err = builder.add_embed().unwrap_err();
        assert!(matches!(err, ActionError::Limit(LimitError::Embeds { len: 11 })));
        assert_eq!(builder.message().embeds.len(), 10);
    }

    #[test]
    fn twenty_sixth_field_is_rejected() {
        let mut builder = Builder::default();
        for _ in 1..limits::MAX_FIELDS {
            builder.add_field(0).unwrap();
        }
        assert_eq!(builder.message().embeds[0].fields.len(), 25);

        let err = builder.add_field(0).unwrap_err();
        assert!(matches!(err, ActionError::Limit(LimitError::Fields { len: 26 })));
        assert_eq!(builder.message().embeds[0].fields.len(), 25);
    }

    #[test]
    fn field_patch_is_all_or_nothing() {
        let mut builder = Builder::default();
        let before = builder.message().clone();

        let err = builder
            .update_field(
                0,
                0,
                FieldPatch {
                    name: Some("fine".into()),
                    value: Some("v".repeat(1025)),
                    inline: Some(false),
                },
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ActionError::Limit(LimitError::FieldValue { len: 1025 })
        ));
        assert_eq!(builder.message(), &before);

        builder
            .update_field(
                0,
                0,
                FieldPatch {
                    inline: Some(false),
                    ..FieldPatch::default()
                },
            )
            .unwrap();
        let field = &builder.message().embeds[0].fields[0];
        assert!(!field.inline);
        assert_eq!(field.name, "Game");
    }

    #[test]
    fn embed_budget_spans_fields() {
        let mut builder = Builder::default();
        builder
            .update_embed(0, EmbedUpdate::Footer(Some(Footer { text: "f".repeat(2000) })))
            .unwrap();
        for i in 0..4 {
            if i > 0 {
                builder.add_field(0).unwrap();
            }
            let patch = FieldPatch {
                name: Some(String::new()),
                value: Some("v".repeat(900)),
                inline: None,
            };
            builder.update_field(0, i, patch).unwrap();
        }
        // author (16) + footer (2000) + 3600
        assert_eq!(builder.message().embeds[0].char_count(), 5616);

        builder.add_field(0).unwrap();
        let patch = FieldPatch {
            value: Some("v".repeat(385)),
            ..FieldPatch::default()
        };
        let err = builder.update_field(0, 4, patch).unwrap_err();
        assert!(matches!(
            err,
            ActionError::Limit(LimitError::EmbedTotal { len: 6001 })
        ));
        assert!(builder.message().embeds[0].fields[4].value.is_empty());
    }

    #[test]
    fn out_of_range_indices() {
        let mut builder = Builder::default();
        assert!(matches!(
            builder.add_field(3),
            Err(ActionError::NoSuchEmbed { index: 3 })
        ));
        assert!(matches!(
            builder.remove_field(0, 9),
            Err(ActionError::NoSuchField { embed: 0, field: 9 })
        ));
        assert!(matches!(
            builder.remove_embed(1),
            Err(ActionError::NoSuchEmbed { index: 1 })
        ));
        assert_eq!(builder.message(), &Message::default());
    }

    #[test]
    fn remove_and_metadata() {
        let mut builder = Builder::default();
        builder.add_embed().unwrap();
        builder.remove_embed(0).unwrap();
        builder.remove_field(0, 0).unwrap();
        assert_eq!(builder.message().embeds.len(), 1);
        assert!(builder.message().embeds[0].fields.is_empty());

        builder.update_metadata(MetadataKey::Username, "bot".into());
        builder.update_metadata(MetadataKey::Content, String::new());
        assert_eq!(builder.message().username.as_deref(), Some("bot"));
        assert!(builder.message().content.is_empty());
    }

    #[test]
    fn time_actions() {
        let mut builder = Builder::default();
        builder
            .update_embed(
                0,
                EmbedUpdate::Timestamp(Some("2024-05-16T00:00:00.000Z".into())),
            )
            .unwrap();
        builder
            .apply(Action::SetTime {
                embed: 0,
                hours: 13,
                minutes: 37,
            })
            .unwrap();
        assert_eq!(
            builder.message().embeds[0].timestamp.as_deref(),
            Some("2024-05-16T13:37:00.000Z")
        );

        let err = builder
            .apply(Action::SetTime {
                embed: 0,
                hours: 25,
                minutes: 0,
            })
            .unwrap_err();
        assert!(matches!(err, ActionError::InvalidTime { hours: 25, .. }));
        assert_eq!(
            builder.message().embeds[0].timestamp.as_deref(),
            Some("2024-05-16T13:37:00.000Z")
        );
    }

    #[test]
    fn export_then_import_is_identity() {
        let mut builder = Builder::default();
        builder.add_embed().unwrap();
        builder
            .update_embed(1, EmbedUpdate::Color(Color::from_rgb([1, 2, 3])))
            .unwrap();
        let someone = Author {
            name: "someone else".into(),
            url: Some("https://example.com".into()),
            icon_url: Some("https://example.com/icon.png".into()),
        };
        builder
            .update_embed(1, EmbedUpdate::Author(Some(someone)))
            .unwrap();
        builder.add_field(1).unwrap();
        let before = builder.message().clone();

        let json = builder.export().unwrap();
        builder.import(&json).unwrap();
        assert_eq!(builder.message(), &before);
    }

    #[test]
    fn round_trip_without_embeds() {
        let mut source = Builder::default();
        source.remove_embed(0).unwrap();
        assert!(source.message().embeds.is_empty());

        let json = source.export().unwrap();
        let mut target = Builder::default();
        target.import(&json).unwrap();
        assert_eq!(target.message(), source.message());
    }

    #[test]
    fn malformed_import_is_not_a_limit_error() {
        let mut builder = Builder::default();
        let before = builder.message().clone();

        let err = builder.import("{ not json").unwrap_err();
        assert!(matches!(err, ActionError::Import(..)));
        assert_eq!(builder.message(), &before);

        let oversized = serde_json::json!({
            "embeds": [{ "footer": { "text": "x".repeat(2049) } }]
        });
        let err = builder.import(&oversized.to_string()).unwrap_err();
        assert!(matches!(
            err,
            ActionError::Limit(LimitError::FooterText { len: 2049 })
        ));
        assert_eq!(builder.message(), &before);
    }
}
