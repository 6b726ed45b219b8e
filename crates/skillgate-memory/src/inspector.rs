use std::collections::BTreeSet;

use skillgate_core::Skill;

use crate::entry::MemoryEntry;

/// True when the conversation has no recorded turns yet.
pub fn is_first_interaction(memory: &[MemoryEntry]) -> bool {
    memory.is_empty()
}

/// Decide whether `skill`'s system instruction must go out with the next
/// request.
///
/// An empty memory always sends. Otherwise the instruction is sent unless some
/// entry records it as already delivered for this exact skill. Recency and
/// skill switches do not matter: each skill's instruction is delivered once
/// per conversation. Entries for the skill without the delivery flag do not
/// count.
///
/// Depends only on `memory`, so a resumed conversation decides the same way
/// as the process that recorded it.
pub fn should_send_instruction(skill: &Skill, memory: &[MemoryEntry]) -> bool {
    if is_first_interaction(memory) {
        return true;
    }
    !memory.iter().any(|entry| entry.delivered(skill))
}

/// Skills whose instruction has been delivered at least once.
pub fn instructed_skills(memory: &[MemoryEntry]) -> BTreeSet<Skill> {
    memory
        .iter()
        .filter(|e| e.prompt_sent_as_memory)
        .filter_map(|e| e.skill_used.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(skill: Option<Skill>, sent: bool) -> MemoryEntry {
        MemoryEntry {
            skill_used: skill,
            prompt_sent_as_memory: sent,
            ..Default::default()
        }
    }

    #[test]
    fn empty_memory_always_sends() {
        for skill in Skill::KNOWN.iter() {
            assert!(should_send_instruction(skill, &[]));
        }
        assert!(should_send_instruction(&Skill::Other("x".into()), &[]));
    }

    #[test]
    fn delivered_skill_is_not_resent() {
        let memory = vec![entry(Some(Skill::Dsa), true)];
        assert!(!should_send_instruction(&Skill::Dsa, &memory));
        assert!(should_send_instruction(&Skill::Behavioral, &memory));
    }

    #[test]
    fn regular_turns_do_not_count_as_delivery() {
        let memory = vec![
            entry(Some(Skill::Dsa), false),
            entry(Some(Skill::Dsa), false),
        ];
        assert!(should_send_instruction(&Skill::Dsa, &memory));
    }

    #[test]
    fn switching_back_does_not_resend() {
        let memory = vec![
            entry(Some(Skill::Dsa), true),
            entry(Some(Skill::Behavioral), true),
            entry(Some(Skill::Behavioral), false),
        ];
        assert!(!should_send_instruction(&Skill::Dsa, &memory));
        assert!(!should_send_instruction(&Skill::Behavioral, &memory));
    }

    #[test]
    fn entries_without_skill_never_match() {
        let memory = vec![entry(None, true)];
        assert!(should_send_instruction(&Skill::General, &memory));
        assert!(instructed_skills(&memory).is_empty());
    }

    #[test]
    fn instructed_skills_collects_delivered_only() {
        let memory = vec![
            entry(Some(Skill::Dsa), true),
            entry(Some(Skill::Sales), false),
            entry(Some(Skill::Dsa), true),
        ];
        let skills = instructed_skills(&memory);
        assert_eq!(skills.into_iter().collect::<Vec<_>>(), vec![Skill::Dsa]);
    }
}
