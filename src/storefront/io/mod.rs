//! # I/O Abstraction Layer
//!
//! User-visible alerts go through the [`Notifier`] trait so view-models can
//! be driven headless.
//!
//! ```text
//! Production:  ListingViewModel ──▶ TerminalNotifier  ──▶ stderr
//! Testing:     ListingViewModel ──▶ RecordingNotifier ──▶ Vec<String>
//! ```

pub mod mock;
pub mod terminal;

pub use mock::RecordingNotifier;
pub use terminal::TerminalNotifier;

/// Sink for user-visible alert messages
pub trait Notifier: Send {
    fn alert(&mut self, message: &str);
}
