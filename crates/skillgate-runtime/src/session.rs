use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

use skillgate_config::SkillgateConfig;
use skillgate_core::{Result, Skill};
use skillgate_llm::{GenerationConfig, LlmTransport};
use skillgate_memory::{MemoryEntry, MemoryRecorder, SessionTracker};
use skillgate_skills::{DirectorySource, LayeredSource, PromptCatalog};

use crate::builder::{PreparedRequest, RequestBuilder, RequestComponents, RequestDefaults};

/// Snapshot of what the session knows about its catalog and dispatches.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    /// Prompts in the catalog.
    pub total_prompts: usize,
    /// Distinct skills whose instruction this process dispatched.
    pub skills_used_in_session: usize,
    pub available_skills: Vec<Skill>,
    pub skills_used: Vec<Skill>,
    pub skills_requiring_programming_language: Vec<Skill>,
}

/// Result of a completed turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub prepared: PreparedRequest,
    pub response: String,
    /// The caller's memory with this turn appended.
    pub memory: Vec<MemoryEntry>,
}

/// Ties catalog, builder, recorder and tracker together for one process.
///
/// The session holds no conversation state of its own: memory goes in with
/// every call and comes back out extended.
pub struct SkillSession {
    builder: RequestBuilder,
    tracker: Arc<SessionTracker>,
    recorder: MemoryRecorder,
}

impl SkillSession {
    pub fn new(catalog: Arc<PromptCatalog>, defaults: RequestDefaults, recorder: MemoryRecorder) -> Self {
        let tracker = Arc::new(SessionTracker::new());
        Self {
            builder: RequestBuilder::new(catalog, Arc::clone(&tracker), defaults),
            tracker,
            recorder,
        }
    }

    /// Session wired from configuration. The catalog is not read until first use.
    pub fn from_config(config: &SkillgateConfig) -> Self {
        let defaults = RequestDefaults {
            model: config.request.model.clone(),
            generation: GenerationConfig {
                temperature: config.request.temperature,
                max_output_tokens: config.request.max_output_tokens,
            },
        };
        Self::new(
            Arc::new(catalog_from_config(config)),
            defaults,
            MemoryRecorder::new(config.memory.preview_chars),
        )
    }

    pub fn builder(&self) -> &RequestBuilder {
        &self.builder
    }

    pub fn catalog(&self) -> &PromptCatalog {
        self.builder.catalog()
    }

    pub fn recorder(&self) -> &MemoryRecorder {
        &self.recorder
    }

    /// Build the request for a turn without sending it.
    pub fn prepare_turn(
        &self,
        raw_skill: &str,
        user_message: &str,
        memory: &[MemoryEntry],
        language: Option<&str>,
    ) -> Result<PreparedRequest> {
        self.builder.build_request(raw_skill, user_message, memory, language)
    }

    pub fn components(
        &self,
        raw_skill: &str,
        user_message: &str,
        memory: &[MemoryEntry],
        language: Option<&str>,
    ) -> Result<RequestComponents> {
        self.builder.components(raw_skill, user_message, memory, language)
    }

    /// Append the entry for a prepared turn once it completed.
    pub fn record_turn(
        &self,
        memory: &[MemoryEntry],
        prepared: &PreparedRequest,
        user_message: &str,
        response: Option<&str>,
    ) -> Vec<MemoryEntry> {
        self.recorder.append(
            memory,
            &prepared.skill,
            prepared.used_instruction,
            user_message,
            response,
            prepared.programming_language.as_deref(),
        )
    }

    /// Build, send and record one turn.
    ///
    /// Memory is only extended when the transport succeeds, so a failed turn
    /// leaves the instruction undelivered and it is sent again next time.
    #[instrument(skip_all, fields(skill = raw_skill, transport = transport.name()))]
    pub async fn run_turn(
        &self,
        transport: &dyn LlmTransport,
        raw_skill: &str,
        user_message: &str,
        memory: &[MemoryEntry],
        language: Option<&str>,
    ) -> Result<TurnOutcome> {
        let prepared = self.prepare_turn(raw_skill, user_message, memory, language)?;
        let response = transport.generate(&prepared.request).await?;
        let memory = self.record_turn(memory, &prepared, user_message, Some(&response));
        info!(
            skill = %prepared.skill,
            used_instruction = prepared.used_instruction,
            memory_len = memory.len(),
            "turn completed"
        );
        Ok(TurnOutcome {
            prepared,
            response,
            memory,
        })
    }

    /// Whether the skill named by `raw_skill` gets language directives.
    pub fn requires_programming_language(raw_skill: &str) -> bool {
        Skill::normalize(raw_skill).requires_language()
    }

    pub fn skills_requiring_programming_language() -> Vec<Skill> {
        Skill::language_sensitive()
    }

    pub fn available_skills(&self) -> Result<Vec<Skill>> {
        self.catalog().available_skills()
    }

    pub fn stats(&self) -> Result<SessionStats> {
        let skills_used = self.tracker.snapshot();
        Ok(SessionStats {
            total_prompts: self.catalog().len()?,
            skills_used_in_session: skills_used.len(),
            available_skills: self.available_skills()?,
            skills_used,
            skills_requiring_programming_language: Self::skills_requiring_programming_language(),
        })
    }

    /// Seed the dispatch tracker from a persisted conversation.
    pub fn resume(&self, memory: &[MemoryEntry]) {
        self.tracker.seed(memory);
    }

    /// Forget which instructions this process dispatched.
    ///
    /// Decisions are unaffected; they follow whatever memory the caller passes.
    pub fn reset(&self) {
        self.tracker.reset();
        info!("session tracker reset");
    }
}

/// Catalog for the `[prompts]` section: directory over bundled, either alone, or empty.
pub fn catalog_from_config(config: &SkillgateConfig) -> PromptCatalog {
    match (&config.prompts.dir, config.prompts.bundled) {
        (Some(dir), true) => PromptCatalog::with_overrides(dir),
        (Some(dir), false) => PromptCatalog::new(DirectorySource::new(dir)),
        (None, true) => PromptCatalog::bundled(),
        (None, false) => PromptCatalog::new(LayeredSource::new()),
    }
}
