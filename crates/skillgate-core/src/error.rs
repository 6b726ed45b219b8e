use thiserror::Error;

/// Unified error type for skillgate.
///
/// Only catalog loading is fatal to a turn. Missing prompts, unknown
/// languages and malformed memory entries degrade instead of erroring.
#[derive(Error, Debug)]
pub enum SkillgateError {
    // ── Catalog errors ─────────────────────────────────────────
    #[error("failed to load skill prompts from {source_name}: {reason}")]
    CatalogLoad { source_name: String, reason: String },

    // ── Memory errors ──────────────────────────────────────────
    #[error("memory error: {0}")]
    Memory(String),

    // ── Transport errors ───────────────────────────────────────
    #[error("llm transport error: {0}")]
    Transport(String),

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    #[error("config validation failed: {field}: {reason}")]
    ConfigValidation { field: String, reason: String },

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl SkillgateError {
    /// Shorthand for a catalog load failure.
    pub fn catalog(source_name: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::CatalogLoad {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SkillgateError>;
