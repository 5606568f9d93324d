use thiserror::Error;

/// Unified error type for the entire HowTo workspace.
#[derive(Error, Debug)]
pub enum HowToError {
    // ── Generation errors ──────────────────────────────────────
    #[error("generation backend error: {0}")]
    Generation(String),

    #[error("generation backend returned no content")]
    EmptyResponse,

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    #[error("config validation failed: {field}: {reason}")]
    ConfigValidation { field: String, reason: String },

    // ── Store errors ───────────────────────────────────────────
    #[error("saved skills store error: {0}")]
    Store(String),

    // ── Page metadata errors ───────────────────────────────────
    #[error("page metadata error: {0}")]
    Page(String),

    // ── Share errors ───────────────────────────────────────────
    #[error("share failed: {0}")]
    Share(String),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, HowToError>;
