//! go - launch command lines by short identifiers
//!
//! Identifiers and their command lines are kept in a tab-separated flat
//! file. Running `go <identifier>` resolves the identifier and starts the
//! stored command, falling back to the platform command interpreter when
//! the command cannot be started directly.

pub mod cli;
pub mod config;
pub mod launcher;
pub mod storage;
