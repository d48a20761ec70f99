//! # Filter State
//!
//! Transient catalog filter selections: category, search text and display
//! language. Never persisted.

use crate::storefront::error::StorefrontError;
use std::fmt;
use std::str::FromStr;

/// Category selection; `All` disables category filtering
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(selected) => selected == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value.to_string())
        }
    }
}

/// Display language for dual-locale item names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ja,
}

impl FromStr for Language {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "ja" | "japanese" => Ok(Language::Ja),
            other => Err(StorefrontError::Config(format!("unknown language '{other}'"))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Ja => write!(f, "ja"),
        }
    }
}

/// Case handling for the keyword search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchCase {
    Sensitive,
    #[default]
    Insensitive,
}

/// Catalog filter selections
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub search_text: String,
    pub language: Language,
    pub match_case: MatchCase,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_match_case(mut self, match_case: MatchCase) -> Self {
        self.match_case = match_case;
        self
    }
}
