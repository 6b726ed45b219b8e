//! # skillgate-config
//!
//! Configuration for skillgate. Reads `skillgate.toml`, then applies
//! environment variable overrides and CLI flags, in that precedence order.

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{ConfigWarning, LoggingConfig, MemoryConfig, PromptsConfig, RequestConfig, SkillgateConfig, WarningSeverity};
