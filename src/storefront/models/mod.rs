//! # Models
//!
//! Pure data: items and Q&A from the backend, form drafts and filter selections.

pub mod draft;
pub mod filter;
pub mod item;
pub mod qa;
pub mod user;

pub use draft::{Draft, DraftField, ImageFile};
pub use filter::{CategoryFilter, FilterState, Language, MatchCase};
pub use item::{Item, ResponseShape};
pub use qa::Qa;
pub use user::{UserDraft, UserField};
