//! # howto-store
//!
//! Persistence for the saved-skills list. A [`SavedSkillStore`] wraps a
//! single JSON file holding an ordered array of
//! [`howto_core::SavedSkillRecord`] values.
//!
//! The store is intentionally primitive: whole-file read on list,
//! whole-file rewrite on save, no deduplication, no indexes. Saved
//! skills are a small personal list, not a database.

pub mod store;

pub use store::SavedSkillStore;
