//! # ViewModel Module
//!
//! One view-model per page component. Each owns its own state and talks to
//! the backend through [`crate::storefront::services::StorefrontApi`];
//! cross-component coordination happens in the page controller.

mod catalog;
mod derive;
mod images;
mod item_detail;
mod listing;
mod user_registration;

pub use catalog::{CatalogEntry, CatalogSource, CatalogViewModel, FetchState};
pub use derive::{categories, derive_view, display_name, ListedItem};
pub use images::ImageResolver;
pub use item_detail::ItemDetailViewModel;
pub use listing::{
    ListingViewModel, SubmissionPolicy, SubmitOutcome, SubmitResult, LISTED_MESSAGE,
    LISTING_FAILED_MESSAGE,
};
pub use user_registration::{
    UserRegistrationViewModel, REGISTERED_MESSAGE, REGISTRATION_FAILED_MESSAGE,
};
