//! Verb handlers.
//!
//! Each handler receives the full token list (verb first) and returns the
//! message to print, or a [`CommandError`](super::CommandError).

/// Store a new identifier.
pub mod add;

/// Delete the store file.
pub mod clear;

/// Static usage text.
pub mod help;

/// Report where the program and its store live.
pub mod info;

/// Print the stored records.
pub mod list;

/// Rename an identifier.
pub mod mv;

/// Drop an identifier.
pub mod remove;

/// Resolve an identifier and launch its command.
pub mod run;
