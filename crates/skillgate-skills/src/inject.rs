use skillgate_core::{LanguageProfile, Skill};

/// Append programming-language directives to a skill prompt.
///
/// The DSA skill gets a strict implementation block; every other skill gets a
/// short generic directive naming the language and its fence tag. Not
/// idempotent: calling it twice appends two blocks.
pub fn inject_language(prompt: &str, raw_language: &str, skill: &Skill) -> String {
    let lang = LanguageProfile::resolve(raw_language);
    let block = match skill {
        Skill::Dsa => dsa_block(&lang),
        Skill::Behavioral
        | Skill::Sales
        | Skill::Presentation
        | Skill::DataScience
        | Skill::Programming
        | Skill::Devops
        | Skill::SystemDesign
        | Skill::Negotiation
        | Skill::General
        | Skill::Other(_) => generic_block(&lang),
    };

    let mut out = String::with_capacity(prompt.len() + block.len());
    out.push_str(prompt);
    out.push_str(&block);
    out
}

fn dsa_block(lang: &LanguageProfile) -> String {
    let title = &lang.title;
    let tag = &lang.fence_tag;
    format!(
        "\n\n## IMPLEMENTATION LANGUAGE: {heading}\n\
         STRICT REQUIREMENTS:\n\
         - Respond ONLY in {title}. Never include snippets or alternatives in any other language.\n\
         - Every code block must be fenced with triple backticks and the exact tag: ```{tag}```.\n\
         - Target the best achievable time and space complexity; choose optimal algorithms and data structures.\n\
         - Structure: brief approach, then the final {title} implementation, then time/space complexity.\n\
         - If the input is a bare problem statement without code, write a complete, runnable {title} solution directly. Do not ask for clarification.\n\
         - Keep it concise; favour correctness, clarity and efficiency over commentary.",
        heading = lang.heading(),
    )
}

fn generic_block(lang: &LanguageProfile) -> String {
    format!(
        "\n\n## PROGRAMMING LANGUAGE: {heading}\n\
         All code and examples must be in {title}. Use code fences with tag: ```{tag}```.",
        heading = lang.heading(),
        title = lang.title,
        tag = lang.fence_tag,
    )
}
