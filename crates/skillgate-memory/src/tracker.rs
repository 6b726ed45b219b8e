use parking_lot::Mutex;
use std::collections::BTreeSet;

use skillgate_core::Skill;

use crate::entry::MemoryEntry;
use crate::inspector::instructed_skills;

/// Skills whose instruction has been dispatched during this process run.
///
/// Advisory bookkeeping for stats and diagnostics. Decisions are made from
/// the memory sequence alone, so the tracker may be reset, reseeded or shared
/// between conversations without affecting them.
#[derive(Debug, Default)]
pub struct SessionTracker {
    sent: Mutex<BTreeSet<Skill>>,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker seeded from a persisted memory sequence.
    pub fn from_memory(memory: &[MemoryEntry]) -> Self {
        Self {
            sent: Mutex::new(instructed_skills(memory)),
        }
    }

    /// Record a dispatch. Returns `true` the first time a skill is marked.
    pub fn mark(&self, skill: &Skill) -> bool {
        self.sent.lock().insert(skill.clone())
    }

    pub fn contains(&self, skill: &Skill) -> bool {
        self.sent.lock().contains(skill)
    }

    /// Add every skill delivered in `memory`.
    pub fn seed(&self, memory: &[MemoryEntry]) {
        self.sent.lock().extend(instructed_skills(memory));
    }

    /// Sorted copy of the tracked skills.
    pub fn snapshot(&self) -> Vec<Skill> {
        self.sent.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.sent.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.lock().is_empty()
    }

    pub fn reset(&self) {
        self.sent.lock().clear();
    }
}
