//! # skillgate-skills
//!
//! Skill prompts are system instructions that tell the LLM how to behave for a
//! domain (algorithm interviews, system design, sales calls, ...). This crate
//! owns where those prompts come from and how they are specialised.
//!
//! ## Prompt files
//!
//! A prompt directory holds one Markdown file per skill, named by any alias of
//! the skill, or one `SKILL.md` per skill subdirectory:
//!
//! ```text
//! prompts/
//! ├── dsa.md
//! ├── behavioral.md
//! └── system-design/
//!     └── SKILL.md
//! ```
//!
//! ## Loading
//!
//! 1. A [`PromptCatalog`] is built over a [`PromptSource`]
//! 2. The source is read once, on first lookup
//! 3. Lookups of skills without a prompt return `None`, never an error
//! 4. For language-sensitive skills, [`inject_language`] appends directives
//!    for the requested programming language

pub mod catalog;
pub mod inject;
pub mod source;

pub use catalog::PromptCatalog;
pub use inject::inject_language;
pub use source::{BundledPrompts, DirectorySource, LayeredSource, PromptMap, PromptSource, StaticPrompts};
