use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration — maps to `howto.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HowToConfig {
    pub site: SiteConfig,
    pub generator: GeneratorConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
    pub services: ServicesConfig,
}

// ── Site ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Canonical site origin used to build tutorial page URLs.
    pub base_url: String,
    /// Page title shown when no tutorial is active.
    pub default_title: String,
    /// Meta description shown when no tutorial is active.
    pub default_description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://howtoninja.com".into(),
            default_title: "HowTo Ninja - Learn Any Skill in Minutes".into(),
            default_description: "Learn any skill in minutes with AI-powered step-by-step \
                                  guides. Master cooking, tech, life hacks, DIY, and survival \
                                  skills with HowTo Ninja."
                .into(),
        }
    }
}

// ── Generator ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Chat-completions API base, e.g. "https://api.openai.com/v1".
    pub base_url: String,
    /// Model identifier sent with every generation request.
    pub model: String,
    /// Maximum tokens per generated tutorial.
    pub max_tokens: u32,
    /// Temperature (0.0 - 2.0).
    pub temperature: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".into(),
            model: "gpt-4o-mini".into(),
            max_tokens: 1200,
            temperature: 0.7,
        }
    }
}

// ── Store ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the saved-skills JSON file (None = ~/.howto/saved_skills.json).
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    /// Resolve the saved-skills path: explicit path > ~/.howto/saved_skills.json
    pub fn resolve_path(&self) -> PathBuf {
        if let Some(ref p) = self.path {
            return p.clone();
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".howto")
            .join("saved_skills.json")
    }
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Output format: "pretty", "json", "compact".
    pub format: String,
    /// Log file path (None = stderr only).
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
            file: None,
        }
    }
}

// ── Services ───────────────────────────────────────────────────

/// External service API keys.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServicesConfig {
    /// OpenAI API key — used for tutorial generation.
    /// Can also be set via OPENAI_API_KEY environment variable.
    /// Config file takes priority over environment variable.
    pub openai_api_key: Option<String>,
}

/// Values commonly left behind by setup templates. A key matching one of
/// these is treated as absent.
const PLACEHOLDER_KEYS: &[&str] = &["", "undefined", "your_openai_api_key_here"];

impl ServicesConfig {
    /// The OpenAI key, filtered of empty and template-placeholder values.
    /// `None` means generation falls back to the built-in template.
    pub fn usable_openai_key(&self) -> Option<&str> {
        let key = self.openai_api_key.as_deref()?.trim();
        if PLACEHOLDER_KEYS.contains(&key) {
            return None;
        }
        Some(key)
    }
}

// ── Default for root ───────────────────────────────────────────

impl Default for HowToConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            generator: GeneratorConfig::default(),
            store: StoreConfig::default(),
            logging: LoggingConfig::default(),
            services: ServicesConfig::default(),
        }
    }
}

// ── Validation ─────────────────────────────────────────────────

/// A single config validation issue.
#[derive(Debug)]
pub struct ConfigWarning {
    pub field: String,
    pub message: String,
    pub severity: WarningSeverity,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let icon = match self.severity {
            WarningSeverity::Error => "❌",
            WarningSeverity::Warning => "⚠️ ",
            WarningSeverity::Info => "💡",
        };
        write!(f, "{} {}: {}", icon, self.field, self.message)?;
        if let Some(ref h) = self.hint {
            write!(f, "\n   ↳ {}", h)?;
        }
        Ok(())
    }
}

impl HowToConfig {
    /// Validate the config and return a list of warnings/errors.
    /// Returns `Err` with all messages joined if any severity is Error.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, String> {
        let mut warnings = Vec::new();

        // ── Site base URL ───
        if self.site.base_url.is_empty() {
            warnings.push(ConfigWarning {
                field: "site.base_url".into(),
                message: "base URL is empty".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. 'https://howtoninja.com'".into()),
            });
        } else if url::Url::parse(&self.site.base_url).is_err() {
            warnings.push(ConfigWarning {
                field: "site.base_url".into(),
                message: format!("'{}' is not a valid URL", self.site.base_url),
                severity: WarningSeverity::Error,
                hint: Some("Include the scheme, e.g. 'https://howtoninja.com'".into()),
            });
        } else if self.site.base_url.ends_with('/') {
            warnings.push(ConfigWarning {
                field: "site.base_url".into(),
                message: "base URL has a trailing slash — tutorial URLs will double it".into(),
                severity: WarningSeverity::Warning,
                hint: Some("Use 'https://howtoninja.com', not 'https://howtoninja.com/'".into()),
            });
        }

        // ── Generator endpoint ───
        if url::Url::parse(&self.generator.base_url).is_err() {
            warnings.push(ConfigWarning {
                field: "generator.base_url".into(),
                message: format!("'{}' is not a valid URL", self.generator.base_url),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. 'https://api.openai.com/v1'".into()),
            });
        }

        // ── Generator model ───
        if self.generator.model.is_empty() {
            warnings.push(ConfigWarning {
                field: "generator.model".into(),
                message: "model is empty".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. 'gpt-4o-mini'".into()),
            });
        }

        // ── Max tokens ───
        if self.generator.max_tokens == 0 {
            warnings.push(ConfigWarning {
                field: "generator.max_tokens".into(),
                message: "max_tokens is 0 — generation won't produce output".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. 1200".into()),
            });
        }

        // ── Temperature ───
        if self.generator.temperature < 0.0 || self.generator.temperature > 2.0 {
            warnings.push(ConfigWarning {
                field: "generator.temperature".into(),
                message: format!("temperature {} is out of range", self.generator.temperature),
                severity: WarningSeverity::Error,
                hint: Some("Temperature must be between 0.0 and 2.0".into()),
            });
        }

        // ── API key ───
        match &self.services.openai_api_key {
            None => {
                warnings.push(ConfigWarning {
                    field: "services.openai_api_key".into(),
                    message: "no API key configured — tutorials will use the built-in template"
                        .into(),
                    severity: WarningSeverity::Info,
                    hint: Some(
                        "Set services.openai_api_key or the OPENAI_API_KEY environment variable"
                            .into(),
                    ),
                });
            }
            Some(_) if self.services.usable_openai_key().is_none() => {
                warnings.push(ConfigWarning {
                    field: "services.openai_api_key".into(),
                    message: "API key looks like a setup placeholder".into(),
                    severity: WarningSeverity::Warning,
                    hint: Some("Replace 'your_openai_api_key_here' with a real key".into()),
                });
            }
            Some(_) => {}
        }

        // ── Logging format ───
        let valid_formats = ["pretty", "json", "compact"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.format".into(),
                message: format!("unknown log format '{}'", self.logging.format),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", valid_formats.join(", "))),
            });
        }

        // ── Logging level ───
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.level".into(),
                message: format!("unknown log level '{}'", self.logging.level),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", valid_levels.join(", "))),
            });
        }

        // Check for hard errors
        let errors: Vec<String> = warnings
            .iter()
            .filter(|w| w.severity == WarningSeverity::Error)
            .map(|w| format!("{}: {}", w.field, w.message))
            .collect();

        if !errors.is_empty() {
            return Err(format!("Configuration errors:\n  • {}", errors.join("\n  • ")));
        }

        Ok(warnings)
    }
}
