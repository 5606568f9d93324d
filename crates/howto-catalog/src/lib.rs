//! # howto-catalog
//!
//! The static skill library shown on the browse screen. Twelve curated
//! skills across twelve categories, each with a title, a one-line
//! description, and a handful of search tags.
//!
//! The catalog is deliberately a fixed, in-memory dataset. Entries are
//! seeded once via [`SkillCatalog::builtin`] and filtered on demand;
//! there is no runtime mutation, no persistence, and no remote fetch.
//! Anything a user actually learns flows through the generator, not the
//! catalog. The catalog exists to give people something to click on.
//!
//! ## Filtering
//!
//! [`SkillCatalog::filter`] intersects two predicates:
//!
//! 1. A case-insensitive substring search over title, description, and
//!    tags. The empty string matches every entry.
//! 2. An exact category match, with the `"All"` sentinel matching every
//!    category.
//!
//! Results always come back in library (insertion) order.

pub mod catalog;
pub mod entry;

pub use catalog::{SkillCatalog, CATEGORIES};
pub use entry::SkillCatalogEntry;
