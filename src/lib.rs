//! # Simple Mercari - Storefront Client
//!
//! Client-side view-models for the Simple Mercari storefront: an item
//! catalog with category/keyword/language filtering and a listing form that
//! posts new items, both talking to the storefront REST backend.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   Entries    ┌──────────────┐    Items     ┌──────────┐
//! │    View     │◄─────────────│  ViewModel   │◄─────────────│ Services │
//! │             │              │              │              │          │
//! │ - Text      │              │ - Catalog    │              │ - API    │
//! │ - Alerts    │              │ - Listing    │              │ - reqwest│
//! └─────────────┘              └──────────────┘              └──────────┘
//!                                      ▲
//!                                      │ reload flag, events
//!                                      ▼
//!                               ┌──────────────┐
//!                               │  Controller  │
//!                               │              │
//!                               │ - Page root  │
//!                               │ - Commands   │
//!                               └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod storefront;

// Re-export main types for easy access
pub use storefront::*;
