use serde::{Deserialize, Serialize};

/// A request ready to be sent to an LLM backend.
///
/// `system_instruction` is present only on turns where the skill prompt has to
/// be (re-)established; otherwise the request carries just the user content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Model identifier, e.g. "gemini-pro".
    pub model: String,
    /// Skill prompt, sent with elevated priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<String>,
    /// Conversational content for this turn.
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
    /// Target programming language, passed through for the transport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_hint: Option<String>,
}

/// One block of conversational content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub role: ContentRole,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentRole {
    User,
    Model,
}

/// Sampling parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 2048,
        }
    }
}

impl GenerationRequest {
    /// A request carrying only the user's message.
    pub fn user_only(model: impl Into<String>, config: GenerationConfig, text: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_instruction: None,
            contents: vec![Content {
                role: ContentRole::User,
                text: text.into(),
            }],
            generation_config: config,
            language_hint: None,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_language_hint(mut self, language: Option<&str>) -> Self {
        self.language_hint = language
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from);
        self
    }

    pub fn has_system_instruction(&self) -> bool {
        self.system_instruction.is_some()
    }

    /// Text of the last user content block.
    pub fn user_text(&self) -> Option<&str> {
        self.contents
            .iter()
            .rev()
            .find(|c| c.role == ContentRole::User)
            .map(|c| c.text.as_str())
    }
}
