//! Listing records as the backend emits them.
//!
//! The scraper upstream is best-effort, so every field except the source URL
//! (the record's identity) may be missing, and the numeric price arrives as a
//! JSON number, a numeric string, or null depending on what was scraped.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub id: Option<i64>,
    pub url: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "loose_number")]
    pub price: Option<f64>,
    #[serde(default)]
    pub price_raw: Option<String>,
    #[serde(default)]
    pub miles: Option<i64>,
    #[serde(default)]
    pub exterior_color: Option<String>,
    #[serde(default)]
    pub interior_color: Option<String>,
    #[serde(default)]
    pub body_style: Option<String>,
    #[serde(default)]
    pub transmission: Option<String>,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub vin: Option<String>,
    #[serde(default)]
    pub stock: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// The list endpoint answers either `{"items": [...]}` or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum InventoryPayload {
    Wrapped {
        #[serde(default)]
        items: Vec<Listing>,
    },
    Bare(Vec<Listing>),
}

impl InventoryPayload {
    pub fn into_items(self) -> Vec<Listing> {
        match self {
            Self::Wrapped { items } => items,
            Self::Bare(items) => items,
        }
    }
}

/// Accept a number, a numeric string, or anything else as absent.
fn loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_record_needs_only_url() {
        let listing: Listing = serde_json::from_str(r#"{"url": "https://cars.example/1"}"#).unwrap();
        assert_eq!(listing.url, "https://cars.example/1");
        assert!(listing.price.is_none());
        assert!(listing.status.is_none());
    }

    #[test]
    fn price_accepts_number_string_and_null() {
        let number: Listing =
            serde_json::from_str(r#"{"url": "u", "price": 32000}"#).unwrap();
        assert_eq!(number.price, Some(32000.0));

        let string: Listing =
            serde_json::from_str(r#"{"url": "u", "price": "45500"}"#).unwrap();
        assert_eq!(string.price, Some(45500.0));

        let null: Listing = serde_json::from_str(r#"{"url": "u", "price": null}"#).unwrap();
        assert!(null.price.is_none());

        let junk: Listing = serde_json::from_str(r#"{"url": "u", "price": "call us"}"#).unwrap();
        assert!(junk.price.is_none());
    }

    #[test]
    fn payload_accepts_wrapped_and_bare_shapes() {
        let wrapped: InventoryPayload =
            serde_json::from_str(r#"{"items": [{"url": "u1"}, {"url": "u2"}]}"#).unwrap();
        assert_eq!(wrapped.into_items().len(), 2);

        let bare: InventoryPayload = serde_json::from_str(r#"[{"url": "u1"}]"#).unwrap();
        assert_eq!(bare.into_items().len(), 1);
    }

    #[test]
    fn object_without_items_is_empty_inventory() {
        let odd: InventoryPayload = serde_json::from_str(r#"{"detail": "oops"}"#).unwrap();
        assert!(odd.into_items().is_empty());
    }
}
