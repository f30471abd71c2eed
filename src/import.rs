//! Loading a message pasted as JSON.
//!
//! Every member is optional. Whatever the input leaves out is taken from the
//! message being replaced: message-level members from the message itself,
//! embed-level members from its *first* embed. `embeds` and `fields` are
//! replaced wholesale when present.

use serde::Deserialize;

use crate::model::{Author, Color, Embed, EmbedImage, Field, Footer, Message};

#[derive(Default, Deserialize)]
struct PartialMessage {
    content: Option<String>,
    embeds: Option<Vec<PartialEmbed>>,
    username: Option<String>,
    avatar_url: Option<String>,
    attachments: Option<Vec<serde_json::Value>>,
}

#[derive(Default, Deserialize)]
struct PartialEmbed {
    color: Option<Color>,
    fields: Option<Vec<PartialField>>,
    author: Option<PartialAuthor>,
    footer: Option<PartialFooter>,
    timestamp: Option<String>,
    image: Option<PartialImage>,
}

#[derive(Default, Deserialize)]
struct PartialField {
    name: Option<String>,
    value: Option<String>,
    inline: Option<bool>,
}

#[derive(Default, Deserialize)]
struct PartialAuthor {
    name: Option<String>,
    url: Option<String>,
    icon_url: Option<String>,
}

#[derive(Default, Deserialize)]
struct PartialFooter {
    text: Option<String>,
}

#[derive(Default, Deserialize)]
struct PartialImage {
    url: Option<String>,
}

/// Parses `text` and fills the gaps from `current`.
pub fn merge(text: &str, current: &Message) -> serde_json::Result<Message> {
    let parsed: PartialMessage = serde_json::from_str(text)?;

    let fallback = current.embeds.first().cloned().unwrap_or_default();

    Ok(Message {
        content: parsed.content.unwrap_or_else(|| current.content.clone()),
        embeds: match parsed.embeds {
            Some(embeds) => embeds
                .into_iter()
                .map(|embed| merge_embed(embed, &fallback))
                .collect(),
            None => current.embeds.clone(),
        },
        username: parsed.username.or_else(|| current.username.clone()),
        avatar_url: parsed.avatar_url.or_else(|| current.avatar_url.clone()),
        attachments: parsed
            .attachments
            .unwrap_or_else(|| current.attachments.clone()),
    })
}

fn merge_embed(embed: PartialEmbed, fallback: &Embed) -> Embed {
    let PartialEmbed {
        color,
        fields,
        author,
        footer,
        timestamp,
        image,
    } = embed;

    Embed {
        color: color.unwrap_or(fallback.color),
        fields: match fields {
            Some(fields) => fields
                .into_iter()
                .map(|field| Field {
                    name: field.name.unwrap_or_default(),
                    value: field.value.unwrap_or_default(),
                    inline: field.inline.unwrap_or(true),
                })
                .collect(),
            None => fallback.fields.clone(),
        },
        author: merge_author(author.unwrap_or_default(), fallback.author.as_ref()),
        footer: footer
            .and_then(|footer| footer.text)
            .or_else(|| fallback.footer.as_ref().map(|f| f.text.clone()))
            .map(|text| Footer { text }),
        timestamp: timestamp.or_else(|| fallback.timestamp.clone()),
        image: image
            .and_then(|image| image.url)
            .or_else(|| fallback.image.as_ref().map(|i| i.url.clone()))
            .map(|url| EmbedImage { url }),
    }
}

fn merge_author(author: PartialAuthor, fallback: Option<&Author>) -> Option<Author> {
    let name = author.name.or_else(|| fallback.map(|a| a.name.clone()));
    let url = author.url.or_else(|| fallback.and_then(|a| a.url.clone()));
    let icon_url = author
        .icon_url
        .or_else(|| fallback.and_then(|a| a.icon_url.clone()));

    if name.is_none() && url.is_none() && icon_url.is_none() {
        return None;
    }

    Some(Author {
        name: name.unwrap_or_default(),
        url,
        icon_url,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn current() -> Message {
        let mut message = Message::default();
        message.embeds[0].timestamp = Some("2024-01-01T00:00:00.000Z".into());
        message
    }

    #[test]
    fn absent_members_come_from_the_current_message() {
        let current = current();
        let merged = merge(r#"{ "content": "hi" }"#, &current).unwrap();

        assert_eq!(merged.content, "hi");
        assert_eq!(merged.embeds, current.embeds);
        assert_eq!(merged.username, current.username);
        assert_eq!(merged.avatar_url, current.avatar_url);
    }

    #[test]
    fn every_imported_embed_falls_back_to_the_first() {
        let mut current = current();
        let mut second = Embed::empty(Color::from_rgb([9, 9, 9]));
        second.footer = Some(Footer {
            text: "second".into(),
        });
        current.embeds.push(second);

        let text = json!({
            "embeds": [
                { "color": 1 },
                { "footer": { "text": "own" }, "author": { "name": "me" } },
            ]
        })
        .to_string();
        let merged = merge(&text, &current).unwrap();
        let first = &current.embeds[0];

        assert_eq!(merged.embeds.len(), 2);
        assert_eq!(merged.embeds[0].color.get(), 1);
        assert_eq!(merged.embeds[0].fields, first.fields);
        assert_eq!(merged.embeds[0].footer, first.footer);
        assert_eq!(merged.embeds[1].color, first.color);
        assert_eq!(merged.embeds[1].footer.as_ref().unwrap().text, "own");
        assert_eq!(merged.embeds[1].timestamp, first.timestamp);

        let author = merged.embeds[1].author.as_ref().unwrap();
        assert_eq!(author.name, "me");
        assert_eq!(author.url, first.author.as_ref().unwrap().url);
    }

    #[test]
    fn imported_fields_are_replaced_wholesale() {
        let text = json!({
            "embeds": [{ "fields": [{ "name": "a" }, { "value": "b", "inline": false }] }]
        })
        .to_string();
        let merged = merge(&text, &current()).unwrap();

        assert_eq!(
            merged.embeds[0].fields,
            vec![
                Field {
                    name: "a".into(),
                    value: String::new(),
                    inline: true,
                },
                Field {
                    name: String::new(),
                    value: "b".into(),
                    inline: false,
                },
            ]
        );
    }

    #[test]
    fn null_means_absent() {
        let current = current();
        let merged = merge(r#"{ "content": null, "embeds": null }"#, &current).unwrap();
        assert_eq!(merged, current);
    }

    #[test]
    fn empty_current_falls_back_to_the_default_embed() {
        let mut current = current();
        current.embeds.clear();

        let merged = merge(r#"{ "embeds": [{}] }"#, &current).unwrap();
        assert_eq!(merged.embeds[0].fields, Embed::default().fields);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(merge("", &current()).is_err());
        assert!(merge(r#"{ "embeds": [{ "color": "red" }] }"#, &current()).is_err());
        assert!(merge(r#"{ "embeds": [{ "color": 16777216 }] }"#, &current()).is_err());
    }
}
