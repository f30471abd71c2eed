//! Size limits imposed by Discord on webhook messages.
//!
//! Checks run per-field first, then the per-embed budget, then the
//! collection sizes.

use crate::error::LimitError;

use super::{Embed, Message};

pub const AUTHOR_NAME: usize = 256;
pub const FOOTER_TEXT: usize = 2048;
pub const FIELD_NAME: usize = 256;
pub const FIELD_VALUE: usize = 1024;
pub const TOTAL_EMBED_CHARS: usize = 6000;
pub const MAX_FIELDS: usize = 25;
pub const MAX_EMBEDS: usize = 10;

fn check_len(
    text: &str,
    max: usize,
    err: impl FnOnce(usize) -> LimitError,
) -> Result<(), LimitError> {
    match text.chars().count() {
        len if len > max => Err(err(len)),
        _ => Ok(()),
    }
}

pub fn check_embed(embed: &Embed) -> Result<(), LimitError> {
    if let Some(author) = &embed.author {
        check_len(&author.name, AUTHOR_NAME, |len| LimitError::AuthorName { len })?;
    }
    if let Some(footer) = &embed.footer {
        check_len(&footer.text, FOOTER_TEXT, |len| LimitError::FooterText { len })?;
    }
    for field in &embed.fields {
        check_len(&field.name, FIELD_NAME, |len| LimitError::FieldName { len })?;
        check_len(&field.value, FIELD_VALUE, |len| LimitError::FieldValue { len })?;
    }

    let len = embed.char_count();
    if len > TOTAL_EMBED_CHARS {
        return Err(LimitError::EmbedTotal { len });
    }

    let len = embed.fields.len();
    if len > MAX_FIELDS {
        return Err(LimitError::Fields { len });
    }

    Ok(())
}

pub fn check_message(message: &Message) -> Result<(), LimitError> {
    message.embeds.iter().try_for_each(check_embed)?;

    let len = message.embeds.len();
    if len > MAX_EMBEDS {
        return Err(LimitError::Embeds { len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Field, Footer};

    fn field(name: usize, value: usize) -> Field {
        Field {
            name: "n".repeat(name),
            value: "v".repeat(value),
            inline: false,
        }
    }

    #[test]
    fn per_field_before_aggregate() {
        let mut embed = Embed::empty(Color::DEFAULT);
        embed.fields = (0..6).map(|_| field(256, 1024)).collect();
        embed.fields[5].value.push('x');
        assert_eq!(
            check_embed(&embed),
            Err(LimitError::FieldValue { len: 1025 })
        );

        embed.fields[5].value.pop();
        assert_eq!(check_embed(&embed), Err(LimitError::EmbedTotal { len: 7680 }));
    }

    #[test]
    fn aggregate_before_count() {
        let mut embed = Embed::empty(Color::DEFAULT);
        embed.fields = (0..26).map(|_| field(256, 1024)).collect();
        assert!(matches!(
            check_embed(&embed),
            Err(LimitError::EmbedTotal { .. })
        ));

        embed.fields = (0..26).map(|_| field(1, 1)).collect();
        assert_eq!(check_embed(&embed), Err(LimitError::Fields { len: 26 }));
    }

    #[test]
    fn budget_is_inclusive() {
        let mut embed = Embed::empty(Color::DEFAULT);
        embed.footer = Some(Footer {
            text: "f".repeat(2048),
        });
        embed.fields = (0..3).map(|_| field(256, 1024)).collect();
        embed.fields.push(field(0, 6000 - 2048 - 3 * 1280));
        assert_eq!(embed.char_count(), 6000);
        assert_eq!(check_embed(&embed), Ok(()));

        embed.fields[3].value.push('x');
        assert_eq!(check_embed(&embed), Err(LimitError::EmbedTotal { len: 6001 }));
    }
}
