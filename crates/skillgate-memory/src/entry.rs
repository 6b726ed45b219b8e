use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use skillgate_core::{Result, Skill, SkillgateError};

/// One completed turn in a conversation's memory.
///
/// Entries are created by [`crate::MemoryRecorder`] and never modified
/// afterwards. The JSON form uses camelCase keys (`skillUsed`,
/// `promptSentAsMemory`, ...). Every field has a default so entries written by
/// older or partial clients still deserialize; an entry without `skillUsed`
/// never counts as an instruction delivery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MemoryEntry {
    #[serde(deserialize_with = "lenient")]
    pub timestamp: DateTime<Utc>,
    /// Canonical skill active for the turn. A blank stored name is no skill.
    #[serde(deserialize_with = "stored_skill")]
    pub skill_used: Option<Skill>,
    /// Whether the skill prompt went out as a system instruction this turn.
    #[serde(deserialize_with = "lenient")]
    pub prompt_sent_as_memory: bool,
    #[serde(deserialize_with = "lenient")]
    pub user_message: String,
    /// Truncated preview of the model's reply.
    #[serde(deserialize_with = "lenient")]
    pub ai_response: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub action: MemoryAction,
    #[serde(deserialize_with = "lenient")]
    pub programming_language: Option<String>,
}

/// `null` or a value of the wrong type falls back to the field's default.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn stored_skill<'de, D>(deserializer: D) -> std::result::Result<Option<Skill>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(name) if !name.trim().is_empty() => Ok(Some(Skill::normalize(&name))),
        _ => Ok(None),
    }
}

/// What a turn did with the skill prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemoryAction {
    ModelMemorySent,
    #[default]
    RegularMessage,
}

impl MemoryAction {
    pub fn from_sent(sent: bool) -> Self {
        if sent {
            MemoryAction::ModelMemorySent
        } else {
            MemoryAction::RegularMessage
        }
    }
}

impl MemoryEntry {
    /// True if this entry records delivery of `skill`'s instruction.
    pub fn delivered(&self, skill: &Skill) -> bool {
        self.prompt_sent_as_memory && self.skill_used.as_ref() == Some(skill)
    }
}

/// Parse a memory sequence from its JSON array form. Blank input is an empty
/// sequence.
///
/// Only a document that is not a JSON array is an error. Array elements that
/// are not objects are dropped with a warning; malformed fields inside an
/// object are defaulted.
pub fn parse_memory(json: &str) -> Result<Vec<MemoryEntry>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    let values: Vec<Value> = serde_json::from_str(json)
        .map_err(|e| SkillgateError::Memory(format!("invalid memory sequence: {}", e)))?;

    let mut memory = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<MemoryEntry>(value) {
            Ok(entry) => memory.push(entry),
            Err(e) => warn!(index, error = %e, "skipping malformed memory entry"),
        }
    }
    Ok(memory)
}

/// Serialize a memory sequence as a pretty JSON array.
pub fn memory_to_json(memory: &[MemoryEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(memory)?)
}
