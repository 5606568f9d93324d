//! # howto-gen
//!
//! The tutorial generation service: an OpenAI-compatible chat-completions
//! backend behind a trait, a deterministic fallback template, and an
//! injectable time/difficulty estimator. The service never surfaces a
//! generation failure — the template absorbs it.

pub mod backend;
pub mod estimator;
pub mod fallback;
pub mod mock;
pub mod service;

pub use backend::{GenerationBackend, OpenAiBackend};
pub use estimator::{Estimate, Estimator, FixedEstimator, UniformEstimator};
pub use fallback::{clean_phrase, display_phrase, fallback_markup};
pub use mock::MockBackend;
pub use service::TutorialService;
