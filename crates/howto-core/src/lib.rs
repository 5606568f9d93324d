//! # howto-core
//!
//! Core types and primitives for the HowTo Ninja tutorial generator.
//! This crate defines the shared vocabulary used by every other crate
//! in the workspace.

pub mod error;
pub mod types;

pub use error::{HowToError, Result};
pub use types::{Difficulty, SavedSkillRecord, TutorialContent};
