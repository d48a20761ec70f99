//! # Listing Submission
//!
//! Owns the listing draft, validates it, and posts it to the backend as
//! multipart form data. Every submit that reaches the network ends with the
//! same finalizer: completion event, draft reset, image input cleared.

use crate::storefront::events::ModelEvent;
use crate::storefront::io::Notifier;
use crate::storefront::models::{Draft, DraftField, ImageFile};
use crate::storefront::services::StorefrontApi;

pub const LISTED_MESSAGE: &str = "Item listed successfully";
pub const LISTING_FAILED_MESSAGE: &str = "Failed to list this item";

/// Validation and reset rules for the listing form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionPolicy {
    pub require_category: bool,
    pub reset_on_failure: bool,
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self {
            require_category: false,
            reset_on_failure: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blocked client-side; no request was sent
    Rejected(String),
    /// Backend accepted the listing
    Listed,
    /// Transport or status failure
    Failed(String),
}

/// Outcome of a submit plus the events it emitted
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitResult {
    pub outcome: SubmitOutcome,
    pub events: Vec<ModelEvent>,
}

pub struct ListingViewModel {
    api: StorefrontApi,
    draft: Draft,
    policy: SubmissionPolicy,
    /// Bumped whenever the file input control must be cleared
    image_input_generation: u64,
}

impl ListingViewModel {
    pub fn new(api: StorefrontApi, policy: SubmissionPolicy) -> Self {
        Self {
            api,
            draft: Draft::new(),
            policy,
            image_input_generation: 0,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn policy(&self) -> SubmissionPolicy {
        self.policy
    }

    pub fn image_input_generation(&self) -> u64 {
        self.image_input_generation
    }

    /// Set one text field. No validation happens here.
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set_field(field, value.into());
    }

    pub fn set_image(&mut self, file: ImageFile) {
        self.draft.image = Some(file);
    }

    /// Validate and post the draft
    pub async fn submit(&mut self, notifier: &mut dyn Notifier) -> SubmitResult {
        tracing::debug!("Listing submitted: {:?}", self.draft.name);

        if let Err(e) = self.draft.validate(self.policy.require_category) {
            let reason = e.to_string();
            tracing::error!("Listing rejected: {reason}");
            notifier.alert(&reason);
            return SubmitResult {
                outcome: SubmitOutcome::Rejected(reason),
                events: Vec::new(),
            };
        }

        let mut events = Vec::new();
        let outcome = match self.api.post_item(&self.draft).await {
            Ok(()) => {
                tracing::info!("Item '{}' listed", self.draft.name);
                notifier.alert(LISTED_MESSAGE);
                events.push(ModelEvent::ItemListed {
                    name: self.draft.name.clone(),
                });
                SubmitOutcome::Listed
            }
            Err(e) => {
                tracing::error!("POST error: {e}");
                notifier.alert(LISTING_FAILED_MESSAGE);
                events.push(ModelEvent::ListingFailed {
                    message: e.to_string(),
                });
                SubmitOutcome::Failed(e.to_string())
            }
        };

        self.finish(&outcome);
        events.push(ModelEvent::ListingCompleted);

        SubmitResult { outcome, events }
    }

    /// Finalizer shared by the success and failure paths
    fn finish(&mut self, outcome: &SubmitOutcome) {
        let keep_draft =
            matches!(outcome, SubmitOutcome::Failed(_)) && !self.policy.reset_on_failure;
        if !keep_draft {
            self.draft.clear();
            self.image_input_generation += 1;
        }
    }
}
