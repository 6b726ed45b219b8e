use skillgate_core::{LanguageProfile, Result, Skill};
use skillgate_runtime::SkillSession;

pub(super) fn cmd_skills(
    session: &SkillSession,
    language_only: bool,
    show: Option<&str>,
    with_language: Option<&str>,
) -> Result<()> {
    if let Some(name) = show {
        let skill = Skill::normalize(name);
        match session.catalog().skill_prompt(&skill, with_language)? {
            Some(prompt) => println!("{prompt}"),
            None => println!("No prompt for skill '{skill}'."),
        }
        return Ok(());
    }

    let skills: Vec<Skill> = session
        .available_skills()?
        .into_iter()
        .filter(|s| !language_only || s.requires_language())
        .collect();

    if skills.is_empty() {
        println!("No skill prompts found in {}", session.catalog().source_name());
        return Ok(());
    }

    println!("\x1b[1mAvailable Skills ({}):\x1b[0m\n", skills.len());
    for skill in skills {
        let marker = if skill.requires_language() { " [language]" } else { "" };
        println!("  \x1b[36m{}\x1b[0m{}", skill, marker);
        let aliases: Vec<&str> = skill.aliases().into_iter().filter(|a| *a != skill.as_str()).collect();
        if !aliases.is_empty() {
            println!("    aliases: {}", aliases.join(", "));
        }
    }

    if language_only {
        println!("\nKnown languages: {}", LanguageProfile::known_titles().join(", "));
    }
    Ok(())
}

pub(super) fn cmd_normalize(name: &str) -> Result<()> {
    let skill = Skill::normalize(name);
    let kind = match skill {
        Skill::Other(_) => "unrecognized, passed through",
        Skill::General => "general",
        _ => "known skill",
    };
    println!("{skill} ({kind})");
    Ok(())
}
