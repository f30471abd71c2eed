use hookcraft::{
    games::{self, Catalog},
    model::{Color, Message},
    state::Preferences,
};

const CATALOG: &str = r#"{
    "currentGames": [{
        "title": "Current Game",
        "urlSlug": "fallback-slug",
        "catalogNs": { "mappings": [{ "pageSlug": "current-game" }] },
        "categories": [{ "path": "games" }],
        "keyImages": [
            { "type": "Thumbnail", "url": "https://cdn.example.com/thumb.png" },
            { "type": "OfferImageWide", "url": "https://cdn.example.com/wide image.png" }
        ],
        "price": { "totalPrice": { "fmtPrice": { "originalPrice": "$19.99" } } },
        "promotions": {
            "promotionalOffers": [{
                "promotionalOffers": [{
                    "startDate": "2024-06-06T15:00:00.000Z",
                    "endDate": "2024-06-13T15:00:00.000Z"
                }]
            }],
            "upcomingPromotionalOffers": []
        }
    }],
    "nextGames": [{
        "title": "Upcoming Game",
        "urlSlug": "upcoming-game",
        "catalogNs": { "mappings": [] },
        "categories": [],
        "keyImages": [],
        "price": { "totalPrice": { "fmtPrice": { "originalPrice": "$19.99" } } },
        "promotions": {
            "promotionalOffers": [],
            "upcomingPromotionalOffers": [{
                "promotionalOffers": [{
                    "startDate": "2024-06-13T15:00:00.000Z",
                    "endDate": "2024-06-20T15:00:00.000Z"
                }]
            }]
        }
    }]
}"#;

fn catalog() -> Catalog {
    serde_json::from_str(CATALOG).unwrap()
}

fn both() -> Preferences {
    let mut prefs = Preferences::default();
    prefs.include_current = true;
    prefs.include_upcoming = true;
    prefs.include_footer = true;
    prefs.include_price = true;
    prefs.include_image = true;
    prefs
}

#[test]
fn current_and_upcoming_with_price_and_footer() {
    let message = games::project(&catalog(), &both());
    assert_eq!(message.content, Message::ROLE_MENTION);
    assert_eq!(message.embeds.len(), 2);

    let current = &message.embeds[0];
    assert_eq!(current.fields[0].name, "Current Game");
    assert_eq!(
        current.fields[0].value,
        "~~$19.99~~ **Free**\n[Claim Game](https://store.epicgames.com/en-US/p/current-game)"
    );
    assert_eq!(current.footer.as_ref().unwrap().text, "Offer ends");
    assert_eq!(current.timestamp.as_deref(), Some("2024-06-13T15:00:00.000Z"));
    assert_eq!(
        current.image_url(),
        Some("https://cdn.example.com/wide%20image.png")
    );
    assert_eq!(current.color, Color::DEFAULT);

    let author = current.author.as_ref().unwrap();
    assert_eq!(author.name, "Epic Games Store");
    assert_eq!(author.url.as_deref(), Some(games::AUTHOR_URL));

    let upcoming = &message.embeds[1];
    assert_eq!(
        upcoming.fields[0].value,
        "$19.99\n[Game Link](https://store.epicgames.com/en-US/p/upcoming-game)"
    );
    assert_eq!(upcoming.footer.as_ref().unwrap().text, "Offer starts");
    assert_eq!(upcoming.timestamp.as_deref(), Some("2024-06-13T15:00:00.000Z"));
    assert_eq!(upcoming.image, None);
}

#[test]
fn toggles_drop_optional_parts() {
    let mut prefs = both();
    prefs.include_price = false;
    prefs.include_footer = false;
    prefs.include_image = false;
    prefs.include_upcoming = false;
    prefs.content = "hello".into();
    prefs.set_color(Color::from_rgb([0x12, 0x34, 0x56]));

    let message = games::project(&catalog(), &prefs);
    assert_eq!(message.content, "hello");
    assert_eq!(message.embeds.len(), 1);

    let embed = &message.embeds[0];
    assert_eq!(
        embed.fields[0].value,
        "[Claim Game](https://store.epicgames.com/en-US/p/current-game)"
    );
    assert_eq!(embed.footer, None);
    assert_eq!(embed.timestamp, None);
    assert_eq!(embed.image, None);
    assert_eq!(embed.color.to_hex(), "#123456");
}

#[test]
fn bundles_link_to_the_bundle_page() {
    let mut catalog = catalog();
    catalog.current_games[0].categories[0].path = "bundles".into();

    let message = games::project(&catalog, &both());
    assert_eq!(
        message.embeds[0].fields[0].value,
        "~~$19.99~~ **Free**\n[Claim Bundle](https://store.epicgames.com/en-US/bundles/current-game)"
    );
}

#[test]
fn records_without_dates_are_skipped() {
    let mut catalog = catalog();
    catalog.next_games[0].promotions = None;

    let message = games::project(&catalog, &both());
    assert_eq!(message.embeds.len(), 1);
    assert_eq!(message.embeds[0].fields[0].name, "Current Game");
}

#[test]
fn nothing_selected() {
    let mut prefs = both();
    prefs.include_current = false;
    prefs.include_upcoming = false;
    assert!(prefs.all_disabled());

    let message = games::project(&catalog(), &prefs);
    assert!(message.embeds.is_empty());

    let json: serde_json::Value = serde_json::from_str(&games::to_json(&message).unwrap()).unwrap();
    assert!(json.get("embeds").is_none());
    assert_eq!(json["content"], Message::ROLE_MENTION);
}

#[test]
fn generated_json_keeps_selected_embeds() {
    let message = games::project(&catalog(), &both());
    let json: serde_json::Value = serde_json::from_str(&games::to_json(&message).unwrap()).unwrap();
    assert_eq!(json["embeds"].as_array().map(Vec::len), Some(2));
}

#[test]
fn null_lists_are_empty() {
    let catalog: Catalog = serde_json::from_str(r#"{ "currentGames": null }"#).unwrap();
    assert!(catalog.current_games.is_empty());
    assert!(catalog.next_games.is_empty());
}
