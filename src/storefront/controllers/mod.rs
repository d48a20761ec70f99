//! # Controllers
//!
//! Page-level composition of the view-models, and the command dispatcher
//! that drives them from the terminal.

pub mod app_controller;
pub mod storefront_page;

pub use app_controller::AppController;
pub use storefront_page::StorefrontPage;
