//! # Item Model
//!
//! Item records as served by the backend, plus decoding of the item list
//! response in either of the shapes deployments use.

use crate::storefront::error::{StorefrontError, StorefrontResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Item record (matches backend)
///
/// Backends disagree on field names for the image reference and category,
/// so the common spellings are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "category_name")]
    pub category: String,
    #[serde(
        default,
        alias = "image_name",
        alias = "image_filename",
        alias = "imagename"
    )]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ja_name: Option<String>,
}

impl Item {
    /// Create an item with only the primary fields set
    pub fn new(id: u64, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            image: None,
            en_name: None,
            ja_name: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_locale_names(mut self, en: impl Into<String>, ja: impl Into<String>) -> Self {
        self.en_name = Some(en.into());
        self.ja_name = Some(ja.into());
        self
    }

    /// Every name field present on this item, primary name first
    pub fn name_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.en_name.as_deref())
            .chain(self.ja_name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

/// `{ "items": [...] }` envelope
#[derive(Debug, Deserialize)]
struct ItemListEnvelope {
    items: Vec<Item>,
}

/// Shape of the item list body returned by `GET /items`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseShape {
    /// `{ "items": [...] }`
    #[default]
    Envelope,
    /// `[...]`
    Bare,
}

impl ResponseShape {
    /// Decode an item list body according to this shape
    pub fn decode_items(self, body: &str) -> StorefrontResult<Vec<Item>> {
        match self {
            ResponseShape::Envelope => {
                let envelope: ItemListEnvelope = serde_json::from_str(body)?;
                Ok(envelope.items)
            }
            ResponseShape::Bare => Ok(serde_json::from_str(body)?),
        }
    }
}

impl FromStr for ResponseShape {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "envelope" | "items" => Ok(ResponseShape::Envelope),
            "bare" | "array" => Ok(ResponseShape::Bare),
            other => Err(StorefrontError::Config(format!(
                "unknown response shape '{other}' (expected 'envelope' or 'bare')"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_should_decode_items() {
        let body = r#"{"items":[{"id":1,"name":"Hat","category":"Fashion","image":"hat.jpg"}]}"#;
        let items = ResponseShape::Envelope.decode_items(body).unwrap();
        assert_eq!(
            items,
            vec![Item::new(1, "Hat", "Fashion").with_image("hat.jpg")]
        );
    }

    #[test]
    fn bare_array_should_decode_items() {
        let body = r#"[{"id":2,"name":"Mug","category":"Home"}]"#;
        let items = ResponseShape::Bare.decode_items(body).unwrap();
        assert_eq!(items, vec![Item::new(2, "Mug", "Home")]);
    }

    #[test]
    fn image_aliases_should_be_accepted() {
        for key in ["image", "image_name", "image_filename", "imagename"] {
            let body = format!(r#"[{{"id":3,"name":"Pen","category":"Office","{key}":"pen.png"}}]"#);
            let items = ResponseShape::Bare.decode_items(&body).unwrap();
            assert_eq!(items[0].image.as_deref(), Some("pen.png"), "alias {key}");
        }
    }

    #[test]
    fn missing_id_should_default_to_zero() {
        let body = r#"{"items":[{"name":"Cup","category_name":"Kitchen"}]}"#;
        let items = ResponseShape::Envelope.decode_items(body).unwrap();
        assert_eq!(items[0].id, 0);
        assert_eq!(items[0].category, "Kitchen");
    }

    #[test]
    fn wrong_shape_should_be_decode_error() {
        let result = ResponseShape::Envelope.decode_items("[]");
        assert!(matches!(result, Err(StorefrontError::Decode(_))));
    }

    #[test]
    fn name_fields_should_skip_absent_and_empty() {
        let item = Item::new(1, "", "Home").with_locale_names("Mug", "マグ");
        let names: Vec<&str> = item.name_fields().collect();
        assert_eq!(names, vec!["Mug", "マグ"]);
    }

    #[test]
    fn response_shape_should_parse() {
        assert_eq!("bare".parse::<ResponseShape>().unwrap(), ResponseShape::Bare);
        assert_eq!(
            " Envelope ".parse::<ResponseShape>().unwrap(),
            ResponseShape::Envelope
        );
        assert!("xml".parse::<ResponseShape>().is_err());
    }
}
