//! Command dispatch for the `go` launcher.
//!
//! Routes raw CLI tokens to a verb handler in [`commands`] or, when the first
//! token is not a verb, to the handler that runs a stored identifier. Every
//! handler failure is turned into a [`Reply`] here; nothing escapes the
//! dispatcher as an error.

/// Individual verb handlers.
pub mod commands;

mod verb;

use tracing::debug;

use crate::launcher::{LaunchError, Launcher};
use crate::storage::{Store, StoreError};

pub use verb::{is_reserved, Verb};

/// Message printed when the program is run without any tokens.
pub const NO_ARGUMENTS: &str = "Invalid number of arguments";

/// Errors a verb handler can report.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Wrong number of tokens for the verb.
    #[error("{0}")]
    InvalidArity(&'static str),

    /// The identifier spells a verb.
    #[error("Commands can not be identified using '{0}'")]
    ReservedIdentifier(String),

    /// The identifier is already stored.
    #[error("Command file already contains entry for '{identifier}' with command: {command}")]
    DuplicateIdentifier { identifier: String, command: String },

    /// No record for the identifier.
    #[error("Command '{0}' not found")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Launch(#[from] LaunchError),
}

/// The user-facing outcome of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to print. Empty means print nothing.
    pub message: String,
    /// Whether the message reports a failure.
    pub is_error: bool,
}

impl Reply {
    fn ok(message: String) -> Self {
        Self {
            message,
            is_error: false,
        }
    }

    fn error(message: String) -> Self {
        Self {
            message,
            is_error: true,
        }
    }
}

/// Routes an invocation to its handler.
///
/// Built once per process from the resolved store and launcher.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    store: Store,
    launcher: Launcher,
}

impl Dispatcher {
    pub fn new(store: Store, launcher: Launcher) -> Self {
        Self { store, launcher }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Dispatches `tokens` (program name excluded) and returns the reply.
    pub fn dispatch(&self, tokens: &[String]) -> Reply {
        let Some(first) = tokens.first() else {
            return Reply::error(NO_ARGUMENTS.to_string());
        };

        let verb = Verb::classify(first);
        debug!(?verb, token = %first, "dispatching");

        match self.run_verb(verb, tokens) {
            Ok(message) => Reply::ok(message),
            Err(e) => {
                debug!(?verb, error = %e, "handler failed");
                Reply::error(e.to_string())
            }
        }
    }

    fn run_verb(&self, verb: Verb, tokens: &[String]) -> Result<String, CommandError> {
        match verb {
            Verb::Add => commands::add::run(&self.store, tokens),
            Verb::List => commands::list::run(&self.store, tokens),
            Verb::Remove => commands::remove::run(&self.store, tokens),
            Verb::Move => commands::mv::run(&self.store, tokens),
            Verb::Clear => commands::clear::run(&self.store),
            Verb::Info => Ok(commands::info::run(&self.store)),
            Verb::Help => Ok(commands::help::usage()),
            Verb::Run => commands::run::run(&self.store, &self.launcher, tokens),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn create_test_dispatcher() -> (Dispatcher, tempfile::TempDir) {
        let dir = tempdir().expect("Failed to create temp directory");
        let store = Store::new(dir.path().join("GoCommands.dat"));
        (Dispatcher::new(store, Launcher::default()), dir)
    }

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_tokens() {
        let (dispatcher, _dir) = create_test_dispatcher();

        let reply = dispatcher.dispatch(&[]);

        assert!(reply.is_error);
        assert_eq!(reply.message, "Invalid number of arguments");
    }

    #[test]
    fn test_errors_become_replies() {
        let (dispatcher, _dir) = create_test_dispatcher();

        let reply = dispatcher.dispatch(&tokens(&["nothing-here"]));

        assert!(reply.is_error);
        assert_eq!(reply.message, "Command 'nothing-here' not found");
    }

    #[test]
    fn test_help_reply() {
        let (dispatcher, _dir) = create_test_dispatcher();

        for token in ["help", "-h", "/?"] {
            let reply = dispatcher.dispatch(&tokens(&[token]));
            assert!(!reply.is_error);
            assert!(reply.message.starts_with("Usage: go identifier"));
        }
    }

    #[test]
    fn test_clear_reply_is_empty() {
        let (dispatcher, _dir) = create_test_dispatcher();

        let reply = dispatcher.dispatch(&tokens(&["clear"]));

        assert_eq!(reply, Reply::ok(String::new()));
    }

    #[test]
    fn test_reserved_identifier_leaves_store_untouched() {
        let (dispatcher, _dir) = create_test_dispatcher();

        let reply = dispatcher.dispatch(&tokens(&["add", "list", "foo.exe"]));

        assert!(reply.is_error);
        assert_eq!(reply.message, "Commands can not be identified using 'list'");
        assert!(!dispatcher.store().path().exists());
    }

    #[test]
    fn test_verb_tokens_win_over_stored_identifiers() {
        let (dispatcher, _dir) = create_test_dispatcher();
        std::fs::write(dispatcher.store().path(), "info\techo shadowed\n").unwrap();

        let reply = dispatcher.dispatch(&tokens(&["info"]));

        assert!(reply.message.starts_with("Location: "));
    }
}
