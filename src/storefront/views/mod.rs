//! # View Layer
//!
//! Views turn view-model output into something a user sees.

pub mod catalog_renderer;

pub use catalog_renderer::{TextRenderer, ViewRenderer};
