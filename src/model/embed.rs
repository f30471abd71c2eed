use serde::{Deserialize, Serialize};

use super::{timestamp, Color};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

impl Field {
    /// The blank field appended by "add field".
    pub fn blank() -> Self {
        Self {
            inline: true,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default)]
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedImage {
    #[serde(default)]
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,
}

impl Embed {
    pub const AUTHOR_NAME: &str = "Epic Games Store";
    pub const AUTHOR_ICON: &str = "https://wolfey.s-ul.eu/YcyMXrI1";

    /// An embed with no optional parts.
    pub const fn empty(color: Color) -> Self {
        Self {
            color,
            fields: Vec::new(),
            author: None,
            footer: None,
            timestamp: None,
            image: None,
        }
    }

    /// Characters that count towards the per-embed budget.
    pub fn char_count(&self) -> usize {
        let author = self.author.as_ref().map_or(0, |a| a.name.chars().count());
        let footer = self.footer.as_ref().map_or(0, |f| f.text.chars().count());
        self.fields.iter().fold(author + footer, |sum, field| {
            sum + field.name.chars().count() + field.value.chars().count()
        })
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image
            .as_ref()
            .map(|image| image.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

impl Default for Embed {
    fn default() -> Self {
        Self {
            color: Color::DEFAULT,
            fields: vec![Field {
                name: "Game".into(),
                value: "~~€~~ **Free**\n[Claim Game]()".into(),
                inline: true,
            }],
            author: Some(Author {
                name: Self::AUTHOR_NAME.into(),
                url: Some("https://free.wolfey.me/".into()),
                icon_url: Some(Self::AUTHOR_ICON.into()),
            }),
            footer: Some(Footer {
                text: "Offer ends".into(),
            }),
            timestamp: Some(timestamp::start_of_today()),
            image: Some(EmbedImage::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_count_covers_author_footer_and_fields() {
        let mut embed = Embed::empty(Color::DEFAULT);
        assert_eq!(embed.char_count(), 0);

        embed.author = Some(Author {
            name: "abc".into(),
            url: Some("not counted".into()),
            icon_url: None,
        });
        embed.footer = Some(Footer { text: "de".into() });
        embed.fields.push(Field {
            name: "€€".into(),
            value: "f".into(),
            inline: false,
        });
        assert_eq!(embed.char_count(), 8);
    }

    #[test]
    fn optional_parts_are_omitted() {
        let json = serde_json::to_value(Embed::empty(Color::DEFAULT)).unwrap();
        assert_eq!(json, serde_json::json!({ "color": 8769099, "fields": [] }));
    }
}
