//! # Catalog View Derivation
//!
//! Pure functions turning the fetched item list plus the filter state into
//! what the catalog displays. Nothing here mutates its input.

use crate::storefront::models::{FilterState, Item, Language, MatchCase};
use std::collections::HashSet;

/// An item as displayed: the record plus the name chosen for the active language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListedItem<'a> {
    pub item: &'a Item,
    pub display_name: &'a str,
}

/// Filter `items` by category and search text, keeping their order
pub fn derive_view<'a>(items: &'a [Item], filter: &FilterState) -> Vec<ListedItem<'a>> {
    let needle = match filter.match_case {
        MatchCase::Sensitive => filter.search_text.clone(),
        MatchCase::Insensitive => filter.search_text.to_lowercase(),
    };

    items
        .iter()
        .filter(|item| filter.category.matches(&item.category))
        .filter(|item| needle.is_empty() || matches_search(item, &needle, filter.match_case))
        .map(|item| ListedItem {
            item,
            display_name: display_name(item, filter.language),
        })
        .collect()
}

fn matches_search(item: &Item, needle: &str, match_case: MatchCase) -> bool {
    item.name_fields().any(|name| match match_case {
        MatchCase::Sensitive => name.contains(needle),
        MatchCase::Insensitive => name.to_lowercase().contains(needle),
    })
}

/// Name to show for `language`, falling back to the primary name
pub fn display_name(item: &Item, language: Language) -> &str {
    let localized = match language {
        Language::En => item.en_name.as_deref(),
        Language::Ja => item.ja_name.as_deref(),
    };
    localized
        .filter(|name| !name.is_empty())
        .unwrap_or(&item.name)
}

/// Distinct categories in order of first appearance
pub fn categories(items: &[Item]) -> Vec<&str> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(|item| item.category.as_str())
        .filter(|category| seen.insert(*category))
        .collect()
}
