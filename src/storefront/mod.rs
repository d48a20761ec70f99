//! # Storefront MVVM Implementation
//!
//! Models hold data, services talk to the backend, view-models own page
//! state, and the page controller composes them.

pub mod controllers;
pub mod error;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controllers::StorefrontPage;
pub use error::{StorefrontError, StorefrontResult};
pub use events::{EventBus, ModelEvent, SimpleEventBus};
pub use io::{Notifier, RecordingNotifier, TerminalNotifier};
pub use models::{
    CategoryFilter, Draft, DraftField, FilterState, ImageFile, Item, Language, MatchCase,
    Qa, ResponseShape, UserDraft, UserField,
};
pub use services::{ApiResponse, MockReply, MockTransport, ReqwestTransport, StorefrontApi, Transport};
pub use view_models::*;
pub use views::{TextRenderer, ViewRenderer};
