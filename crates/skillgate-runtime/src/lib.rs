//! # skillgate-runtime
//!
//! Per-turn orchestration of the skill prompt protocol.
//!
//! ```text
//!   raw skill name ──► normalize ──► catalog lookup (+ language directives)
//!                                          │
//!   memory entries ──► inspector ──► send instruction?
//!                                          │
//!                                          ▼
//!                                  ┌───────────────┐
//!                                  │ RequestBuilder │ ──► GenerationRequest
//!                                  └───────────────┘
//!                                          │
//!                       transport reply ──► recorder ──► memory + 1 entry
//! ```
//!
//! [`SkillSession`] wires the pieces from a [`skillgate_config::SkillgateConfig`].

pub mod builder;
pub mod session;

pub use builder::{PreparedRequest, RequestBuilder, RequestComponents, RequestDefaults};
pub use session::{SessionStats, SkillSession, TurnOutcome, catalog_from_config};
