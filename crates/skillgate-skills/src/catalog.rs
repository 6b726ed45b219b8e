use once_cell::sync::OnceCell;
use std::path::Path;
use tracing::info;

use skillgate_core::{Result, Skill};

use crate::inject::inject_language;
use crate::source::{BundledPrompts, DirectorySource, LayeredSource, PromptMap, PromptSource, StaticPrompts};

/// The skill prompt catalog.
///
/// Constructed explicitly and shared by reference (`Arc<PromptCatalog>`).
/// The underlying [`PromptSource`] is read on first use and never again;
/// after that the catalog is read-only. A failed load leaves the catalog
/// unloaded so the error surfaces on every call instead of yielding an
/// empty catalog.
pub struct PromptCatalog {
    source: Box<dyn PromptSource>,
    prompts: OnceCell<PromptMap>,
}

impl PromptCatalog {
    pub fn new(source: impl PromptSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            prompts: OnceCell::new(),
        }
    }

    /// Catalog backed by the prompts compiled into the binary.
    pub fn bundled() -> Self {
        Self::new(BundledPrompts)
    }

    /// Catalog where `dir` overrides bundled prompts skill by skill.
    pub fn with_overrides(dir: &Path) -> Self {
        Self::new(
            LayeredSource::new()
                .layer(DirectorySource::new(dir))
                .layer(BundledPrompts),
        )
    }

    /// Catalog over a fixed set of prompts.
    pub fn from_static(prompts: StaticPrompts) -> Self {
        Self::new(prompts)
    }

    /// Load the source if not yet loaded. Idempotent; returns the prompt count.
    pub fn load(&self) -> Result<usize> {
        Ok(self.prompts()?.len())
    }

    pub fn is_loaded(&self) -> bool {
        self.prompts.get().is_some()
    }

    pub fn source_name(&self) -> String {
        self.source.name()
    }

    fn prompts(&self) -> Result<&PromptMap> {
        self.prompts.get_or_try_init(|| {
            let prompts = self.source.load()?;
            info!(source = %self.source.name(), count = prompts.len(), "loaded skill prompts");
            Ok(prompts)
        })
    }

    /// Raw prompt text for a canonical skill, or `None` if there is none.
    pub fn prompt(&self, skill: &Skill) -> Result<Option<&str>> {
        Ok(self.prompts()?.get(skill).map(String::as_str))
    }

    /// Prompt text with language directives applied.
    ///
    /// Injection happens only when `language` is non-blank and the skill
    /// requires a programming language.
    pub fn skill_prompt(&self, skill: &Skill, language: Option<&str>) -> Result<Option<String>> {
        let Some(prompt) = self.prompt(skill)? else {
            return Ok(None);
        };

        let prompt = match language.map(str::trim).filter(|l| !l.is_empty()) {
            Some(lang) if skill.requires_language() => inject_language(prompt, lang, skill),
            _ => prompt.to_string(),
        };
        Ok(Some(prompt))
    }

    /// Whether a prompt exists for the skill.
    pub fn contains(&self, skill: &Skill) -> Result<bool> {
        Ok(self.prompts()?.contains_key(skill))
    }

    /// Skills with a prompt, sorted by canonical name.
    pub fn available_skills(&self) -> Result<Vec<Skill>> {
        let mut skills: Vec<Skill> = self.prompts()?.keys().cloned().collect();
        skills.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(skills)
    }

    /// Number of prompts in the catalog.
    pub fn len(&self) -> Result<usize> {
        self.load()
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.load()? == 0)
    }
}
