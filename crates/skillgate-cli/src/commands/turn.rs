use std::path::Path;
use tracing::info;

use skillgate_core::{Result, Skill, SkillgateError};
use skillgate_llm::MockTransport;
use skillgate_memory::{instructed_skills, is_first_interaction, should_send_instruction};
use skillgate_runtime::SkillSession;

use super::TurnArgs;
use crate::memory_file;

pub(super) fn cmd_prepare(session: &SkillSession, turn: &TurnArgs, components: bool) -> Result<()> {
    let memory = memory_file::load(turn.memory.as_deref())?;

    if components {
        let components =
            session.components(&turn.skill, &turn.message, &memory, turn.language.as_deref())?;
        println!("{}", serde_json::to_string_pretty(&components)?);
    } else {
        let prepared =
            session.prepare_turn(&turn.skill, &turn.message, &memory, turn.language.as_deref())?;
        println!("{}", serde_json::to_string_pretty(&prepared)?);
    }
    Ok(())
}

pub(super) fn cmd_record(
    session: &SkillSession,
    turn: &TurnArgs,
    response: Option<&str>,
    used_instruction: Option<bool>,
) -> Result<()> {
    let path = memory_path(turn)?;
    let memory = memory_file::load(Some(path))?;

    let mut prepared =
        session.prepare_turn(&turn.skill, &turn.message, &memory, turn.language.as_deref())?;
    if let Some(used) = used_instruction {
        prepared.used_instruction = used;
    }

    let memory = session.record_turn(&memory, &prepared, &turn.message, response);
    memory_file::save(path, &memory)?;
    info!(skill = %prepared.skill, entries = memory.len(), "turn recorded");
    println!(
        "Recorded {} turn ({}) to {}",
        prepared.skill,
        action_label(prepared.used_instruction),
        path.display()
    );
    Ok(())
}

pub(super) async fn cmd_turn(session: &SkillSession, turn: &TurnArgs, reply: &str) -> Result<()> {
    let memory = memory_file::load(turn.memory.as_deref())?;
    let transport = MockTransport::new("offline").with_response(reply);

    let outcome = session
        .run_turn(&transport, &turn.skill, &turn.message, &memory, turn.language.as_deref())
        .await?;

    if let Some(path) = turn.memory.as_deref() {
        memory_file::save(path, &outcome.memory)?;
    }

    println!("\x1b[1m{}\x1b[0m ({})", outcome.prepared.skill, action_label(outcome.prepared.used_instruction));
    println!("{}", outcome.response);
    Ok(())
}

pub(super) fn cmd_inspect(raw_skill: &str, memory: Option<&Path>) -> Result<()> {
    let memory = memory_file::load(memory)?;
    let skill = Skill::normalize(raw_skill);
    let send = should_send_instruction(&skill, &memory);

    println!("Skill:        {skill}");
    println!("Entries:      {}", memory.len());
    if is_first_interaction(&memory) {
        println!("Decision:     send instruction (first interaction)");
    } else if send {
        println!("Decision:     send instruction (not yet delivered)");
    } else {
        println!("Decision:     message only (instruction already delivered)");
    }

    let delivered: Vec<String> = instructed_skills(&memory).iter().map(ToString::to_string).collect();
    if !delivered.is_empty() {
        println!("Delivered:    {}", delivered.join(", "));
    }
    Ok(())
}

fn memory_path(turn: &TurnArgs) -> Result<&Path> {
    turn.memory
        .as_deref()
        .ok_or_else(|| SkillgateError::Memory("--memory is required to record a turn".into()))
}

fn action_label(used_instruction: bool) -> &'static str {
    if used_instruction {
        "instruction sent"
    } else {
        "message only"
    }
}
