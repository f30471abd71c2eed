//! Builds a message announcing free games from a catalog of promotions.

use url::Url;

use crate::{
    model::{timestamp, Author, Embed, EmbedImage, Field, Footer, Message},
    state::Preferences,
};

mod data;
pub use data::{
    Catalog, CatalogNs, Category, FmtPrice, Game, KeyImage, Mapping, Offer, OfferGroup, Price,
    Promotions, TotalPrice,
};

mod catalog;
pub use catalog::Source;

pub const STORE_URL: &str = "https://store.epicgames.com/en-US";
pub const AUTHOR_URL: &str = "https://egfreegames.vercel.app/";

/// One embed per selected game, current games first.
pub fn project(catalog: &Catalog, prefs: &Preferences) -> Message {
    let current = catalog
        .current_games
        .iter()
        .filter(|_| prefs.include_current);
    let upcoming = catalog
        .next_games
        .iter()
        .filter(|_| prefs.include_upcoming);

    let embeds = current
        .chain(upcoming)
        .filter_map(|game| project_game(game, prefs))
        .collect();

    let content = match prefs.content.as_str() {
        "" => Message::ROLE_MENTION.to_string(),
        content => content.to_string(),
    };

    Message::new(content, embeds)
}

/// Pretty json for a generated message. `embeds` is left out when nothing
/// was selected.
pub fn to_json(message: &Message) -> serde_json::Result<String> {
    let mut value = serde_json::to_value(message)?;
    if message.embeds.is_empty() {
        if let Some(object) = value.as_object_mut() {
            object.remove("embeds");
        }
    }
    serde_json::to_string_pretty(&value)
}

pub fn project_game(game: &Game, prefs: &Preferences) -> Option<Embed> {
    let Some(date) = game.promotion_date().and_then(timestamp::normalize) else {
        log::warn!("skipping '{}': no usable promotion date", game.title);
        return None;
    };

    let current = game.is_current();
    let bundle = game.is_bundle();
    let link = format!(
        "{STORE_URL}{prefix}{slug}",
        prefix = if bundle { "/bundles/" } else { "/p/" },
        slug = game.page_slug().unwrap_or_default(),
    );

    let price = game.original_price().filter(|_| prefs.include_price);
    let value = match (current, price) {
        (true, Some(price)) => format!(
            "~~{price}~~ **Free**\n[Claim {kind}]({link})",
            kind = if bundle { "Bundle" } else { "Game" }
        ),
        (true, None) => format!(
            "[Claim {kind}]({link})",
            kind = if bundle { "Bundle" } else { "Game" }
        ),
        (false, Some(price)) => format!("{price}\n[Game Link]({link})"),
        (false, None) => format!("[Game Link]({link})"),
    };

    let mut embed = Embed::empty(prefs.color());
    embed.fields.push(Field {
        name: game.title.clone(),
        value,
        inline: false,
    });
    embed.author = Some(Author {
        name: Embed::AUTHOR_NAME.into(),
        url: Some(AUTHOR_URL.into()),
        icon_url: Some(Embed::AUTHOR_ICON.into()),
    });

    if prefs.include_footer {
        let text = if current { "Offer ends" } else { "Offer starts" };
        embed.footer = Some(Footer { text: text.into() });
        embed.timestamp = Some(date);
    }

    if prefs.include_image {
        embed.image = game
            .wide_image()
            .and_then(|url| Url::parse(url).ok())
            .map(|url| EmbedImage { url: url.into() });
    }

    Some(embed)
}
