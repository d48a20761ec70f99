//! # Image Source Resolution
//!
//! Maps an item's image reference to the URL the renderer loads, and
//! remembers render-time load failures so a broken source falls back to the
//! placeholder for good.

use crate::storefront::models::Item;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct ImageResolver {
    base_url: String,
    placeholder: String,
    failed: HashSet<String>,
}

impl ImageResolver {
    pub fn new(base_url: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            placeholder: placeholder.into(),
            failed: HashSet::new(),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// `{base_url}/image/{reference}`, or the placeholder when there is no usable reference
    pub fn source_for(&self, item: &Item) -> String {
        match item.image.as_deref().map(str::trim) {
            Some(reference) if !reference.is_empty() => {
                let url = format!("{}/image/{}", self.base_url, reference);
                if self.failed.contains(&url) {
                    self.placeholder.clone()
                } else {
                    url
                }
            }
            _ => self.placeholder.clone(),
        }
    }

    /// Record that `source` failed to load. Returns true when this changed what renders.
    ///
    /// Failures of the placeholder itself are ignored so a missing
    /// placeholder never triggers another substitution.
    pub fn report_error(&mut self, source: &str) -> bool {
        if source == self.placeholder {
            return false;
        }
        let inserted = self.failed.insert(source.to_string());
        if inserted {
            tracing::debug!("Image failed to load, using placeholder: {source}");
        }
        inserted
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }
}
