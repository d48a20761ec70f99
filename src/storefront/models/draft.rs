//! # Listing Draft Model
//!
//! The in-progress listing held by the submission form. Pure data; the
//! view-model decides when it gets validated and reset.

use crate::storefront::error::StorefrontError;
use bytes::Bytes;
use std::path::Path;
use std::str::FromStr;

/// Binary file chosen for the image input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes: bytes.into(),
        }
    }

    /// Read an image from disk
    pub async fn read(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(file_name, bytes))
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Guess a MIME type from the file extension
fn content_type_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Text fields of the listing form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Category,
}

impl FromStr for DraftField {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(DraftField::Name),
            "category" => Ok(DraftField::Category),
            other => Err(StorefrontError::Config(format!("unknown form field '{other}'"))),
        }
    }
}

/// Listing draft: name, category and image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub category: String,
    pub image: Option<ImageFile>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Category => self.category = value,
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Category => &self.category,
        }
    }

    /// Check required fields, returning the user-facing reason on failure
    pub fn validate(&self, require_category: bool) -> Result<(), StorefrontError> {
        if self.name.trim().is_empty() {
            return Err(StorefrontError::Validation("Name is required!".to_string()));
        }
        if require_category && self.category.trim().is_empty() {
            return Err(StorefrontError::Validation(
                "Name and category are required!".to_string(),
            ));
        }
        match &self.image {
            Some(image) if !image.file_name.is_empty() => Ok(()),
            _ => Err(StorefrontError::Validation(
                "Please select an image file!".to_string(),
            )),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
