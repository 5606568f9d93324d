//! # howto-seo
//!
//! Pure page-metadata helpers: URL slugs, meta-tag bundles, schema.org
//! HowTo structured data, and outline extraction from tutorial markup.

pub mod meta;
pub mod outline;
pub mod slug;
pub mod structured;

pub use meta::{MetaTagBundle, OpenGraph, meta_tags, placeholder_image, SITE_NAME};
pub use outline::{TutorialOutline, clean_markup, extract_outline};
pub use slug::slugify;
pub use structured::{HowTo, HowToStep, structured_data};
