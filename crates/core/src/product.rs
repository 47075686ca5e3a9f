//! Wire data model for the remote catalog resource.
//!
//! Field names follow the remote API's camelCase JSON (`creationAt`,
//! `categoryId`); the same shapes are used for the bundled static dataset so
//! both sources deserialize through one model.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::id::{CategoryId, ProductId};

/// Fallback image shown for products whose `images` list is empty.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400";

/// A grouping label referenced by products.
///
/// Categories are never stored independently here; they are always projected
/// from whatever product collection is currently loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub image: String,
}

/// A catalog item as returned by the remote list resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub images: Vec<String>,
    /// Creation timestamp, kept as the raw wire string. Parse on demand via
    /// [`Product::created_at_instant`]; upstream sources disagree on the
    /// exact format.
    pub creation_at: String,
}

impl Product {
    /// Parse `creationAt` into an instant.
    ///
    /// The remote resource emits RFC 3339; static datasets sometimes carry a
    /// naive datetime or a bare date, so those are accepted as fallbacks
    /// (interpreted as UTC).
    pub fn created_at_instant(&self) -> CatalogResult<DateTime<Utc>> {
        parse_creation_at(&self.creation_at)
    }

    /// First image URL, or [`PLACEHOLDER_IMAGE`] when the list is empty.
    pub fn primary_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// Payload for the remote creation resource (pass-through write).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub category_id: CategoryId,
    pub images: Vec<String>,
    pub description: String,
}

/// Parse a `creationAt` wire string into a UTC instant.
pub fn parse_creation_at(raw: &str) -> CatalogResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.and_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN).and_utc());
    }
    Err(CatalogError::parse(format!(
        "creationAt is not a recognized timestamp: {raw:?}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn product_deserializes_from_remote_shape() {
        let json = r#"{
            "id": 7,
            "title": "Classic Red Hoodie",
            "price": 35,
            "description": "A warm hoodie",
            "category": { "id": 1, "name": "Clothes", "image": "https://i.imgur.com/c.png" },
            "images": ["https://i.imgur.com/1.png", "https://i.imgur.com/2.png"],
            "creationAt": "2024-03-01T10:30:00.000Z"
        }"#;

        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, ProductId::new(7));
        assert_eq!(p.category.id, CategoryId::new(1));
        assert_eq!(p.images.len(), 2);
        assert_eq!(p.primary_image(), "https://i.imgur.com/1.png");

        let instant = p.created_at_instant().unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap());
    }

    #[test]
    fn missing_images_and_description_default_to_empty() {
        let json = r#"{
            "id": 9,
            "title": "Bare product",
            "price": 10,
            "category": { "id": 2, "name": "Misc", "image": "" },
            "creationAt": "2024-01-01"
        }"#;

        let p: Product = serde_json::from_str(json).unwrap();
        assert!(p.images.is_empty());
        assert!(p.description.is_empty());
        assert_eq!(p.primary_image(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn creation_at_accepts_bare_dates_and_naive_datetimes() {
        let d = parse_creation_at("2024-02-01").unwrap();
        assert_eq!(d, Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());

        let dt = parse_creation_at("2024-02-01T12:00:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn creation_at_rejects_garbage() {
        let err = parse_creation_at("last tuesday").unwrap_err();
        assert!(matches!(err, CatalogError::ParseFailure(_)));
    }

    #[test]
    fn new_product_serializes_with_camel_case_category_id() {
        let payload = NewProduct {
            title: "New thing".to_string(),
            price: 19.99,
            category_id: CategoryId::new(3),
            images: vec!["https://example.com/img.jpg".to_string()],
            description: "desc".to_string(),
        };

        let v = serde_json::to_value(&payload).unwrap();
        assert_eq!(v["categoryId"], 3);
        assert_eq!(v["price"], 19.99);
        assert!(v.get("category_id").is_none());
    }
}
