use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

use skillgate_core::{Result, Skill};
use skillgate_llm::{GenerationConfig, GenerationRequest};
use skillgate_memory::{MemoryEntry, SessionTracker, is_first_interaction, should_send_instruction};
use skillgate_skills::PromptCatalog;

/// Model and sampling parameters stamped on every request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDefaults {
    pub model: String,
    pub generation: GenerationConfig,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            model: "gemini-pro".into(),
            generation: GenerationConfig::default(),
        }
    }
}

/// Outcome of building one turn's request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedRequest {
    pub request: GenerationRequest,
    /// Whether the skill prompt rides along as the system instruction.
    /// Pass this to the recorder once the turn completes.
    pub used_instruction: bool,
    pub skill: Skill,
    pub programming_language: Option<String>,
}

/// Every input and intermediate decision behind a request, for callers
/// that assemble the transport payload themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestComponents {
    pub skill: Skill,
    pub user_message: String,
    pub skill_prompt: Option<String>,
    pub should_use_model_memory: bool,
    pub is_first_time: bool,
    /// The prompt, only when it will actually be sent.
    pub model_memory: Option<String>,
    pub programming_language: Option<String>,
    pub requires_programming_language: bool,
}

/// Turns a skill, a message and the conversation memory into a request.
///
/// The send/skip decision comes from the memory sequence alone; the shared
/// [`SessionTracker`] is only updated for bookkeeping.
pub struct RequestBuilder {
    catalog: Arc<PromptCatalog>,
    tracker: Arc<SessionTracker>,
    defaults: RequestDefaults,
}

impl RequestBuilder {
    pub fn new(catalog: Arc<PromptCatalog>, tracker: Arc<SessionTracker>, defaults: RequestDefaults) -> Self {
        Self {
            catalog,
            tracker,
            defaults,
        }
    }

    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    pub fn tracker(&self) -> &SessionTracker {
        &self.tracker
    }

    pub fn defaults(&self) -> &RequestDefaults {
        &self.defaults
    }

    /// Build the request for `raw_skill`, normalizing the name first.
    ///
    /// Fails only if the prompt catalog cannot be loaded. A skill without a
    /// prompt degrades to a plain user request.
    pub fn build_request(
        &self,
        raw_skill: &str,
        user_message: &str,
        memory: &[MemoryEntry],
        language: Option<&str>,
    ) -> Result<PreparedRequest> {
        let skill = Skill::normalize(raw_skill);
        self.build_for(skill, user_message, memory, language)
    }

    /// Same as [`build_request`](Self::build_request) for an already canonical skill.
    pub fn build_for(
        &self,
        skill: Skill,
        user_message: &str,
        memory: &[MemoryEntry],
        language: Option<&str>,
    ) -> Result<PreparedRequest> {
        let language = clean_language(language);
        let prompt = self.catalog.skill_prompt(&skill, language.as_deref())?;
        let send = should_send_instruction(&skill, memory);

        let base = GenerationRequest::user_only(
            self.defaults.model.clone(),
            self.defaults.generation.clone(),
            user_message,
        )
        .with_language_hint(language.as_deref());

        let (request, used_instruction) = match (send, prompt) {
            (true, Some(prompt)) => {
                let first = self.tracker.mark(&skill);
                debug!(skill = %skill, first_in_process = first, "sending skill instruction");
                (base.with_system_instruction(prompt), true)
            }
            (true, None) => {
                warn!(skill = %skill, "no prompt for skill, sending message without instruction");
                (base, false)
            }
            (false, _) => {
                debug!(skill = %skill, "instruction already in memory, sending message only");
                (base, false)
            }
        };

        Ok(PreparedRequest {
            request,
            used_instruction,
            skill,
            programming_language: language,
        })
    }

    /// Decision inputs for a turn, without building the request.
    pub fn components(
        &self,
        raw_skill: &str,
        user_message: &str,
        memory: &[MemoryEntry],
        language: Option<&str>,
    ) -> Result<RequestComponents> {
        let skill = Skill::normalize(raw_skill);
        let language = clean_language(language);
        let skill_prompt = self.catalog.skill_prompt(&skill, language.as_deref())?;
        let should_use_model_memory = should_send_instruction(&skill, memory);
        let model_memory = skill_prompt.clone().filter(|_| should_use_model_memory);

        Ok(RequestComponents {
            requires_programming_language: skill.requires_language(),
            skill,
            user_message: user_message.to_string(),
            skill_prompt,
            should_use_model_memory,
            is_first_time: is_first_interaction(memory),
            model_memory,
            programming_language: language,
        })
    }
}

fn clean_language(language: Option<&str>) -> Option<String> {
    language.map(str::trim).filter(|l| !l.is_empty()).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillgate_skills::StaticPrompts;

    fn builder() -> RequestBuilder {
        let catalog = PromptCatalog::from_static(
            StaticPrompts::new()
                .with(Skill::Dsa, "You are a DSA expert.")
                .with(Skill::Sales, "You are a sales coach."),
        );
        RequestBuilder::new(Arc::new(catalog), Arc::new(SessionTracker::new()), RequestDefaults::default())
    }

    #[test]
    fn defaults_stamped_on_request() {
        let prepared = builder().build_request("sales", "hi", &[], None).unwrap();
        assert_eq!(prepared.request.model, "gemini-pro");
        assert_eq!(prepared.request.generation_config.max_output_tokens, 2048);
        assert_eq!(prepared.request.user_text(), Some("hi"));
    }

    #[test]
    fn missing_prompt_degrades() {
        let b = builder();
        let prepared = b.build_request("negotiation", "hi", &[], None).unwrap();
        assert!(!prepared.used_instruction);
        assert!(!prepared.request.has_system_instruction());
        assert!(b.tracker().is_empty());
    }

    #[test]
    fn blank_language_treated_as_absent() {
        let prepared = builder().build_request("dsa", "q", &[], Some("   ")).unwrap();
        assert!(prepared.programming_language.is_none());
        assert_eq!(prepared.request.system_instruction.as_deref(), Some("You are a DSA expert."));
    }

    #[test]
    fn components_hide_prompt_when_not_sent() {
        let b = builder();
        let memory = vec![MemoryEntry {
            skill_used: Some(Skill::Sales),
            prompt_sent_as_memory: true,
            ..Default::default()
        }];
        let c = b.components("Sales", "pitch", &memory, None).unwrap();
        assert!(c.skill_prompt.is_some());
        assert!(!c.should_use_model_memory);
        assert!(c.model_memory.is_none());
        assert!(!c.is_first_time);
        assert!(!c.requires_programming_language);
    }
}
