//! # skillgate-cli
//!
//! Command-line interface for skillgate.
//!
//! ## Commands
//!
//! - `skillgate skills`: List skills with a prompt
//! - `skillgate normalize`: Show the canonical name for a skill
//! - `skillgate prepare`: Build the request for a turn
//! - `skillgate record`: Append a turn to a memory file
//! - `skillgate turn`: Prepare, send to a canned reply, and record
//! - `skillgate inspect`: Explain the send/skip decision
//! - `skillgate stats`: Session statistics
//! - `skillgate config`: Show the effective configuration

pub mod commands;
pub mod memory_file;

pub use commands::Cli;
