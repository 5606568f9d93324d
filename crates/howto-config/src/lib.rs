//! # howto-config
//!
//! Configuration system for HowTo Ninja. Reads from `howto.toml` and
//! environment variables — config file takes precedence where both are set.

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::HowToConfig;
pub use schema::{ConfigWarning, GeneratorConfig, ServicesConfig, SiteConfig, WarningSeverity};
