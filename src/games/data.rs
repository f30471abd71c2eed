//! Game records as published by the Epic Games Store promotions feed.

use serde::{Deserialize, Deserializer};

fn nullable<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(de).map(Option::unwrap_or_default)
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default, deserialize_with = "nullable")]
    pub current_games: Vec<Game>,
    #[serde(default, deserialize_with = "nullable")]
    pub next_games: Vec<Game>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub title: String,
    #[serde(default)]
    pub url_slug: Option<String>,
    #[serde(default)]
    pub catalog_ns: Option<CatalogNs>,
    #[serde(default, deserialize_with = "nullable")]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "nullable")]
    pub key_images: Vec<KeyImage>,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub promotions: Option<Promotions>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CatalogNs {
    #[serde(default, deserialize_with = "nullable")]
    pub mappings: Vec<Mapping>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mapping {
    #[serde(default)]
    pub page_slug: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Category {
    pub path: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct KeyImage {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub total_price: TotalPrice,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalPrice {
    pub fmt_price: FmtPrice,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FmtPrice {
    pub original_price: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotions {
    #[serde(default, deserialize_with = "nullable")]
    pub promotional_offers: Vec<OfferGroup>,
    #[serde(default, deserialize_with = "nullable")]
    pub upcoming_promotional_offers: Vec<OfferGroup>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferGroup {
    #[serde(default, deserialize_with = "nullable")]
    pub promotional_offers: Vec<Offer>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub start_date: String,
    pub end_date: String,
}

impl Game {
    /// A game is current while it has an active promotional offer.
    pub fn is_current(&self) -> bool {
        self.promotions
            .as_ref()
            .map_or(false, |p| !p.promotional_offers.is_empty())
    }

    pub fn is_bundle(&self) -> bool {
        self.categories.iter().any(|c| c.path == "bundles")
    }

    pub fn page_slug(&self) -> Option<&str> {
        self.catalog_ns
            .as_ref()
            .and_then(|ns| ns.mappings.first())
            .and_then(|mapping| mapping.page_slug.as_deref())
            .filter(|slug| !slug.is_empty())
            .or_else(|| self.url_slug.as_deref().filter(|slug| !slug.is_empty()))
    }

    pub fn original_price(&self) -> Option<&str> {
        self.price
            .as_ref()
            .map(|p| p.total_price.fmt_price.original_price.as_str())
    }

    pub fn wide_image(&self) -> Option<&str> {
        self.key_images
            .iter()
            .find(|image| image.kind == "OfferImageWide")
            .map(|image| image.url.as_str())
    }

    /// When the current offer ends, or when the upcoming one starts.
    pub fn promotion_date(&self) -> Option<&str> {
        let promotions = self.promotions.as_ref()?;
        if self.is_current() {
            let offer = promotions.promotional_offers.first()?.promotional_offers.first()?;
            return Some(&offer.end_date);
        }

        let offer = promotions
            .upcoming_promotional_offers
            .first()?
            .promotional_offers
            .first()?;
        Some(&offer.start_date)
    }
}
