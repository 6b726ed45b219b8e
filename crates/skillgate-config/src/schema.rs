use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use skillgate_core::{Result, SkillgateError};

/// Root configuration, maps to `skillgate.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillgateConfig {
    pub prompts: PromptsConfig,
    pub request: RequestConfig,
    pub memory: MemoryConfig,
    pub logging: LoggingConfig,
}

// ── Prompts ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptsConfig {
    /// Directory of prompt files. Files here override bundled prompts.
    pub dir: Option<PathBuf>,
    /// Fall back to the prompts compiled into the binary.
    pub bundled: bool,
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            dir: None,
            bundled: true,
        }
    }
}

// ── Request ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    /// Model identifier placed on every request.
    pub model: String,
    /// Sampling temperature (0.0 - 2.0).
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            model: "gemini-pro".into(),
            temperature: 0.7,
            max_output_tokens: 2048,
        }
    }
}

// ── Memory ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Characters of the model reply kept in each memory entry.
    pub preview_chars: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self { preview_chars: 200 }
    }
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Output format: "pretty" or "json".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

// ── Validation ─────────────────────────────────────────────────

/// A single config validation issue.
#[derive(Debug, Clone)]
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
        let label = match self.severity {
            WarningSeverity::Error => "error",
            WarningSeverity::Warning => "warning",
            WarningSeverity::Info => "info",
        };
        write!(f, "{} {}: {}", label, self.field, self.message)?;
        if let Some(ref h) = self.hint {
            write!(f, "\n   ↳ {}", h)?;
        }
        Ok(())
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

impl SkillgateConfig {
    /// Validate the config and return non-fatal findings.
    /// Any finding of severity Error turns the whole result into
    /// `SkillgateError::ConfigValidation`.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>> {
        let mut warnings = Vec::new();

        // ── Request ───
        if self.request.model.trim().is_empty() {
            warnings.push(ConfigWarning {
                field: "request.model".into(),
                message: "model is empty".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. 'gemini-pro'".into()),
            });
        }

        if !(0.0..=2.0).contains(&self.request.temperature) {
            warnings.push(ConfigWarning {
                field: "request.temperature".into(),
                message: format!("temperature {} is out of range", self.request.temperature),
                severity: WarningSeverity::Error,
                hint: Some("Temperature must be between 0.0 and 2.0".into()),
            });
        }

        if self.request.max_output_tokens == 0 {
            warnings.push(ConfigWarning {
                field: "request.max_output_tokens".into(),
                message: "max_output_tokens is 0, the model cannot reply".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. 2048".into()),
            });
        }

        // ── Memory ───
        if self.memory.preview_chars == 0 {
            warnings.push(ConfigWarning {
                field: "memory.preview_chars".into(),
                message: "preview_chars is 0, replies would never be recorded".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. 200".into()),
            });
        }

        // ── Prompts ───
        if self.prompts.dir.is_none() && !self.prompts.bundled {
            warnings.push(ConfigWarning {
                field: "prompts".into(),
                message: "no prompt directory and bundled prompts disabled".into(),
                severity: WarningSeverity::Warning,
                hint: Some("Every skill will be sent without a system instruction".into()),
            });
        }

        // ── Logging ───
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.level".into(),
                message: format!("unknown log level '{}'", self.logging.level),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", LOG_LEVELS.join(", "))),
            });
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.format".into(),
                message: format!("unknown log format '{}'", self.logging.format),
                severity: WarningSeverity::Info,
                hint: Some("Falling back to 'pretty'".into()),
            });
        }

        let errors: Vec<&ConfigWarning> = warnings
            .iter()
            .filter(|w| w.severity == WarningSeverity::Error)
            .collect();

        if !errors.is_empty() {
            return Err(SkillgateError::ConfigValidation {
                field: errors.iter().map(|w| w.field.as_str()).collect::<Vec<_>>().join(", "),
                reason: errors.iter().map(|w| w.message.as_str()).collect::<Vec<_>>().join("; "),
            });
        }

        Ok(warnings)
    }
}
