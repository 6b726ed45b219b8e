use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use skillgate_core::{Result, Skill, SkillgateError};

/// Prompt text keyed by canonical skill.
pub type PromptMap = HashMap<Skill, String>;

/// Where skill prompts come from.
///
/// A source is read once by [`crate::PromptCatalog`]. An error from `load`
/// is fatal to catalog initialization; a skill missing from the returned map
/// is a normal condition.
pub trait PromptSource: Send + Sync {
    /// Short description used in logs and errors.
    fn name(&self) -> String;

    /// Read every prompt this source provides.
    fn load(&self) -> Result<PromptMap>;
}

// ── Bundled ────────────────────────────────────────────────────

/// Prompts compiled into the binary.
pub struct BundledPrompts;

const BUNDLED: &[(&str, &str)] = &[
    ("dsa", include_str!("../prompts/dsa.md")),
    ("behavioral", include_str!("../prompts/behavioral.md")),
    ("sales", include_str!("../prompts/sales.md")),
    ("presentation", include_str!("../prompts/presentation.md")),
    ("data-science", include_str!("../prompts/data-science.md")),
    ("programming", include_str!("../prompts/programming.md")),
    ("devops", include_str!("../prompts/devops.md")),
    ("system-design", include_str!("../prompts/system-design.md")),
    ("negotiation", include_str!("../prompts/negotiation.md")),
];

impl PromptSource for BundledPrompts {
    fn name(&self) -> String {
        "bundled".into()
    }

    fn load(&self) -> Result<PromptMap> {
        Ok(BUNDLED
            .iter()
            .map(|(name, body)| (Skill::normalize(name), body.trim().to_string()))
            .collect())
    }
}

// ── Directory ──────────────────────────────────────────────────

/// Prompts read from a directory.
///
/// Two layouts are recognised, both keyed by the normalized name:
/// - `<skill>.md` files directly in the directory
/// - `<skill>/SKILL.md` subdirectories
///
/// YAML frontmatter (`---` ... `---`) at the top of a file is stripped.
/// A missing or unreadable directory is an error.
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_prompt(&self, path: &Path) -> Result<String> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SkillgateError::catalog(self.name(), format!("failed to read {}: {}", path.display(), e))
        })?;
        Ok(strip_frontmatter(&content).trim().to_string())
    }
}

impl PromptSource for DirectorySource {
    fn name(&self) -> String {
        self.dir.display().to_string()
    }

    fn load(&self) -> Result<PromptMap> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            SkillgateError::catalog(self.name(), format!("failed to read prompts dir: {}", e))
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SkillgateError::catalog(self.name(), e))?;
            paths.push(entry.path());
        }
        // read_dir order is unspecified; first alias in sorted order wins
        paths.sort();

        let mut prompts = PromptMap::new();
        for path in paths {
            let (stem, file) = if path.is_dir() {
                let skill_md = path.join("SKILL.md");
                if !skill_md.exists() {
                    continue;
                }
                (path.file_name().map(|n| n.to_string_lossy().to_string()), skill_md)
            } else if path.extension().is_some_and(|e| e == "md") {
                (path.file_stem().map(|n| n.to_string_lossy().to_string()), path.clone())
            } else {
                continue;
            };

            let Some(stem) = stem else { continue };
            let skill = Skill::normalize(&stem);
            let body = self.read_prompt(&file)?;

            if body.is_empty() {
                warn!(path = ?file, "prompt file is empty, skipping");
                continue;
            }
            if prompts.contains_key(&skill) {
                debug!(%skill, path = ?file, "prompt already loaded under another alias, skipping");
                continue;
            }

            debug!(%skill, path = ?file, "loaded prompt");
            prompts.insert(skill, body);
        }

        Ok(prompts)
    }
}

// ── Static ─────────────────────────────────────────────────────

/// In-memory prompts, for embedding and tests.
#[derive(Default)]
pub struct StaticPrompts {
    prompts: PromptMap,
}

impl StaticPrompts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prompt; the skill name is normalized.
    pub fn with(mut self, skill: impl Into<Skill>, prompt: impl Into<String>) -> Self {
        self.prompts.insert(skill.into(), prompt.into());
        self
    }
}

impl PromptSource for StaticPrompts {
    fn name(&self) -> String {
        "static".into()
    }

    fn load(&self) -> Result<PromptMap> {
        Ok(self.prompts.clone())
    }
}

// ── Layered ────────────────────────────────────────────────────

/// Several sources in precedence order: the first source that provides a
/// skill wins. Any layer failing to load fails the whole stack.
#[derive(Default)]
pub struct LayeredSource {
    layers: Vec<Box<dyn PromptSource>>,
}

impl LayeredSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a lower-precedence layer.
    pub fn layer(mut self, source: impl PromptSource + 'static) -> Self {
        self.layers.push(Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl PromptSource for LayeredSource {
    fn name(&self) -> String {
        let names: Vec<String> = self.layers.iter().map(|l| l.name()).collect();
        format!("[{}]", names.join(" > "))
    }

    fn load(&self) -> Result<PromptMap> {
        let mut merged = PromptMap::new();
        for layer in &self.layers {
            for (skill, prompt) in layer.load()? {
                merged.entry(skill).or_insert(prompt);
            }
        }
        Ok(merged)
    }
}

/// Drop a leading YAML frontmatter block, if present and closed.
fn strip_frontmatter(content: &str) -> &str {
    let trimmed = content.trim_start();
    let Some(after_first) = trimmed.strip_prefix("---") else {
        return content;
    };
    match after_first.find("\n---") {
        Some(end) => &after_first[end + 4..],
        None => content,
    }
}
