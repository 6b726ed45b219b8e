//! # skillgate-core
//!
//! Core types for the skillgate prompt memory protocol. This crate defines the
//! shared vocabulary used by every other crate in the workspace: the canonical
//! [`Skill`] set, programming-language profiles and the unified error type.

pub mod error;
pub mod language;
pub mod skill;

pub use error::{Result, SkillgateError};
pub use language::LanguageProfile;
pub use skill::Skill;
