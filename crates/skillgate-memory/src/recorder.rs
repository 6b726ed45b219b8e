use chrono::Utc;
use tracing::debug;

use skillgate_core::Skill;

use crate::entry::{MemoryAction, MemoryEntry};

/// Default length of the stored response preview, in characters.
pub const DEFAULT_PREVIEW_CHARS: usize = 200;

/// Builds memory entries after a turn completes.
///
/// Recording is copy-on-append: the caller's sequence is only read, and a new
/// sequence with the entry at the end is returned. Readers holding the old
/// sequence are unaffected.
#[derive(Debug, Clone, Copy)]
pub struct MemoryRecorder {
    preview_chars: usize,
}

impl Default for MemoryRecorder {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIEW_CHARS)
    }
}

impl MemoryRecorder {
    pub fn new(preview_chars: usize) -> Self {
        Self { preview_chars }
    }

    pub fn preview_chars(&self) -> usize {
        self.preview_chars
    }

    /// Build the entry for a turn that just completed, stamped with the
    /// current time.
    pub fn entry(
        &self,
        skill: &Skill,
        used_instruction: bool,
        user_message: &str,
        response: Option<&str>,
        language: Option<&str>,
    ) -> MemoryEntry {
        MemoryEntry {
            timestamp: Utc::now(),
            skill_used: Some(skill.clone()),
            prompt_sent_as_memory: used_instruction,
            user_message: user_message.to_string(),
            ai_response: self.preview(response),
            action: MemoryAction::from_sent(used_instruction),
            programming_language: language
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from),
        }
    }

    /// Return `memory` with a new entry for this turn appended.
    pub fn append(
        &self,
        memory: &[MemoryEntry],
        skill: &Skill,
        used_instruction: bool,
        user_message: &str,
        response: Option<&str>,
        language: Option<&str>,
    ) -> Vec<MemoryEntry> {
        let entry = self.entry(skill, used_instruction, user_message, response, language);
        debug!(
            %skill,
            used_instruction,
            turns = memory.len() + 1,
            "recorded turn"
        );
        with_entry(memory, entry)
    }

    /// Response preview: `None` for absent or empty text, otherwise at most
    /// `preview_chars` characters followed by `...` when cut.
    pub fn preview(&self, response: Option<&str>) -> Option<String> {
        let response = response.filter(|r| !r.is_empty())?;
        let mut chars = response.char_indices();
        match chars.nth(self.preview_chars) {
            Some((cut, _)) => Some(format!("{}...", &response[..cut])),
            None => Some(response.to_string()),
        }
    }
}

/// Append with the default recorder.
pub fn append_entry(
    memory: &[MemoryEntry],
    skill: &Skill,
    used_instruction: bool,
    user_message: &str,
    response: Option<&str>,
    language: Option<&str>,
) -> Vec<MemoryEntry> {
    MemoryRecorder::default().append(memory, skill, used_instruction, user_message, response, language)
}

/// Return a copy of `memory` with `entry` at the end.
pub fn with_entry(memory: &[MemoryEntry], entry: MemoryEntry) -> Vec<MemoryEntry> {
    let mut updated = Vec::with_capacity(memory.len() + 1);
    updated.extend_from_slice(memory);
    updated.push(entry);
    updated
}
