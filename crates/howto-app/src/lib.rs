//! # howto-app
//!
//! The view state controller. One [`App`] per process owns the active
//! screen ([`View`]), the navigation journal ([`History`]), and the
//! ports everything else is reached through:
//!
//! - the generation service (always settles with content),
//! - the saved-skills store,
//! - a [`MetadataSink`] standing in for the document head,
//! - a [`Clipboard`] and optional [`ShareTarget`] for sharing.
//!
//! ## Navigation model
//!
//! Every visited tutorial pushes a [`HistoryEntry`] whose `skill` field
//! holds the original query string. Going back or forward to such an
//! entry does not restore the old page: the query is replayed through
//! the generation path, so the regenerated tutorial may differ in
//! wording, time estimate, and difficulty. The root entry (and entries
//! pushed by navigating home) carry no query and land on the home
//! screen.
//!
//! The controller is single-threaded and event-driven; the one
//! suspension point is the generation await inside [`App::search`].

pub mod app;
pub mod clipboard;
pub mod history;
pub mod home;
pub mod share;
pub mod sink;
pub mod view;

pub use app::{App, Section, RANDOM_SKILLS};
pub use clipboard::{Clipboard, NoopClipboard, SystemClipboard};
pub use history::{History, HistoryEntry};
pub use share::{ShareOutcome, ShareRequest, ShareTarget};
pub use sink::{MemorySink, MetadataSink};
pub use view::View;
