//! # Model Events
//!
//! Events emitted by view-models when their state changes. The page
//! composition root routes them to the shared reload flag and to any
//! subscribers on the event bus.

/// Events emitted when storefront state changes
#[derive(Debug, Clone, PartialEq)]
pub enum ModelEvent {
    /// A catalog fetch was started
    LoadStarted { seq: u64 },

    /// The item list was replaced by a fetch response
    ItemsLoaded { seq: u64, count: usize },

    /// A fetch failed; the previous list is still displayed
    LoadFailed { seq: u64, message: String },

    /// A fetch response arrived after a newer one had already been applied
    StaleResponseDiscarded { seq: u64, latest: u64 },

    /// Load-completed signal; clears the reload flag
    LoadCompleted { seq: u64 },

    /// A listing was accepted by the backend
    ItemListed { name: String },

    /// A listing POST failed
    ListingFailed { message: String },

    /// Submission finished (either way); requests a catalog reload
    ListingCompleted,

    /// The reload flag flipped from false to true
    ReloadRequested,

    /// A single item was loaded for the detail view
    ItemDetailLoaded { id: u64 },

    /// Questions and answers for an item were loaded
    QasLoaded { item_id: u64, count: usize },

    /// A user registration was accepted
    UserRegistered { name: String },

    /// A user registration failed
    UserRegistrationFailed { message: String },
}

impl ModelEvent {
    /// Whether this event completes a listing submission
    pub fn is_listing_completion(&self) -> bool {
        matches!(self, ModelEvent::ListingCompleted)
    }

    /// Whether this event ends a catalog load, successfully or not
    pub fn is_load_completion(&self) -> bool {
        matches!(
            self,
            ModelEvent::LoadCompleted { .. } | ModelEvent::LoadFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_loaded_event_should_carry_count() {
        let event = ModelEvent::ItemsLoaded { seq: 3, count: 2 };

        match event {
            ModelEvent::ItemsLoaded { seq, count } => {
                assert_eq!(seq, 3);
                assert_eq!(count, 2);
            }
            _ => panic!("Expected ItemsLoaded event"),
        }
    }

    #[test]
    fn completion_predicates_should_match_their_events() {
        assert!(ModelEvent::ListingCompleted.is_listing_completion());
        assert!(!ModelEvent::ReloadRequested.is_listing_completion());
        assert!(ModelEvent::LoadCompleted { seq: 1 }.is_load_completion());
        assert!(ModelEvent::LoadFailed {
            seq: 1,
            message: "timeout".to_string()
        }
        .is_load_completion());
        assert!(!ModelEvent::ItemsLoaded { seq: 1, count: 0 }.is_load_completion());
    }
}
