use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::schema::HowToConfig;

/// Loads the HowTo configuration from disk with env fallbacks.
pub struct ConfigLoader {
    config: Arc<RwLock<HowToConfig>>,
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > HOWTO_CONFIG env > ~/.howto/howto.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("HOWTO_CONFIG") {
            return PathBuf::from(p);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".howto")
            .join("howto.toml")
    }

    /// Load the config from disk, falling back to defaults.
    pub fn load(path: Option<&Path>) -> howto_core::Result<Self> {
        let config_path = Self::resolve_path(path);
        let config = if config_path.exists() {
            info!(?config_path, "loading configuration");
            let raw = std::fs::read_to_string(&config_path)?;
            toml::from_str::<HowToConfig>(&raw).map_err(|e| {
                howto_core::HowToError::Config(format!(
                    "failed to parse {}: {}",
                    config_path.display(),
                    e
                ))
            })?
        } else {
            warn!(?config_path, "config file not found, using defaults");
            HowToConfig::default()
        };

        // Apply environment variable overrides
        let config = Self::apply_env_overrides(config);

        // Validate config — log warnings, fail on errors
        match config.validate() {
            Ok(warnings) => {
                for w in &warnings {
                    warn!("{}", w);
                }
            }
            Err(e) => {
                return Err(howto_core::HowToError::Config(e));
            }
        }

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
        })
    }

    /// Get a read snapshot of the current config.
    pub fn get(&self) -> HowToConfig {
        self.config.read().clone()
    }

    /// Get a shared reference for subscription.
    pub fn shared(&self) -> Arc<RwLock<HowToConfig>> {
        Arc::clone(&self.config)
    }

    /// Path the config was loaded from.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Apply env var overrides (HOWTO_MODEL, HOWTO_LOG_LEVEL, etc.)
    fn apply_env_overrides(mut config: HowToConfig) -> HowToConfig {
        if let Ok(v) = std::env::var("HOWTO_MODEL") {
            config.generator.model = v;
        }
        if let Ok(v) = std::env::var("HOWTO_SITE_URL") {
            config.site.base_url = v;
        }
        if let Ok(v) = std::env::var("HOWTO_LOG_LEVEL") {
            config.logging.level = v;
        }
        // API key: env var fills in when config file doesn't have the key set.
        // This means config file takes priority, env is the fallback.
        if config.services.openai_api_key.is_none() {
            if let Ok(v) = std::env::var("OPENAI_API_KEY") {
                config.services.openai_api_key = Some(v);
            }
        }
        config
    }

    /// Reload the config from disk.
    pub fn reload(&self) -> howto_core::Result<()> {
        if !self.config_path.exists() {
            return Err(howto_core::HowToError::Config(format!(
                "config file not found: {}",
                self.config_path.display()
            )));
        }
        let raw = std::fs::read_to_string(&self.config_path)?;
        let new_config = toml::from_str::<HowToConfig>(&raw).map_err(|e| {
            howto_core::HowToError::Config(format!(
                "failed to parse {}: {}",
                self.config_path.display(),
                e
            ))
        })?;
        let new_config = Self::apply_env_overrides(new_config);
        *self.config.write() = new_config;
        info!("configuration reloaded");
        Ok(())
    }
}
