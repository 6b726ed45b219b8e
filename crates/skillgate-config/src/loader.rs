use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use skillgate_core::{Result, SkillgateError};

use crate::schema::{ConfigWarning, SkillgateConfig};

/// Loads the skillgate configuration and keeps the current snapshot.
pub struct ConfigLoader {
    config: Arc<RwLock<SkillgateConfig>>,
    warnings: RwLock<Vec<ConfigWarning>>,
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > SKILLGATE_CONFIG env > ~/.skillgate/skillgate.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("SKILLGATE_CONFIG") {
            return PathBuf::from(p);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".skillgate")
            .join("skillgate.toml")
    }

    /// Load the config from disk, falling back to defaults when the file is absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = Self::resolve_path(path);
        let config = if config_path.exists() {
            info!(?config_path, "loading configuration");
            Self::read(&config_path)?
        } else {
            warn!(?config_path, "config file not found, using defaults");
            SkillgateConfig::default()
        };

        let config = Self::apply_env_overrides(config);
        let warnings = config.validate()?;
        for w in &warnings {
            warn!("{}", w);
        }

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            warnings: RwLock::new(warnings),
            config_path,
        })
    }

    /// Parse a config from TOML text without touching the environment.
    pub fn parse(raw: &str) -> Result<SkillgateConfig> {
        toml::from_str::<SkillgateConfig>(raw)
            .map_err(|e| SkillgateError::Config(format!("failed to parse config: {}", e)))
    }

    fn read(path: &Path) -> Result<SkillgateConfig> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str::<SkillgateConfig>(&raw).map_err(|e| {
            SkillgateError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Get a snapshot of the current config.
    pub fn get(&self) -> SkillgateConfig {
        self.config.read().clone()
    }

    /// Non-fatal findings from the last successful load or reload.
    ///
    /// Loading usually happens before a tracing subscriber exists, so callers
    /// that install one afterwards can report these again.
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        self.warnings.read().clone()
    }

    pub fn shared(&self) -> Arc<RwLock<SkillgateConfig>> {
        Arc::clone(&self.config)
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Apply env var overrides (SKILLGATE_MODEL, SKILLGATE_PROMPTS_DIR, SKILLGATE_LOG_LEVEL).
    pub fn apply_env_overrides(mut config: SkillgateConfig) -> SkillgateConfig {
        if let Ok(v) = std::env::var("SKILLGATE_MODEL") {
            config.request.model = v;
        }
        if let Ok(v) = std::env::var("SKILLGATE_PROMPTS_DIR") {
            if !v.trim().is_empty() {
                config.prompts.dir = Some(PathBuf::from(v));
            }
        }
        if let Ok(v) = std::env::var("SKILLGATE_LOG_LEVEL") {
            config.logging.level = v;
        }
        config
    }

    /// Re-read the file. The previous snapshot is kept if the new one is invalid.
    ///
    /// Catalogs already built from the old snapshot keep their prompts;
    /// only components constructed afterwards see the change.
    pub fn reload(&self) -> Result<()> {
        if !self.config_path.exists() {
            return Err(SkillgateError::Config(format!(
                "config file not found: {}",
                self.config_path.display()
            )));
        }
        let new_config = Self::apply_env_overrides(Self::read(&self.config_path)?);
        let warnings = new_config.validate()?;
        *self.config.write() = new_config;
        *self.warnings.write() = warnings;
        info!("configuration reloaded");
        Ok(())
    }
}
