//! # skillgate-memory
//!
//! Conversation memory for the skill prompt protocol:
//!
//! - **Entries**: one [`MemoryEntry`] per completed turn, append-only.
//! - **Inspector**: [`should_send_instruction`] decides from the entries alone
//!   whether a skill's system instruction must be sent again.
//! - **Recorder**: [`MemoryRecorder`] returns a new sequence with the turn
//!   appended, never touching the caller's copy.
//! - **Tracker**: [`SessionTracker`] remembers which instructions this process
//!   dispatched. Advisory only.
//!
//! Storage of the sequence is left to the caller.

pub mod entry;
pub mod inspector;
pub mod recorder;
pub mod tracker;

pub use entry::{MemoryAction, MemoryEntry, memory_to_json, parse_memory};
pub use inspector::{instructed_skills, is_first_interaction, should_send_instruction};
pub use recorder::{DEFAULT_PREVIEW_CHARS, MemoryRecorder, append_entry, with_entry};
pub use tracker::SessionTracker;
