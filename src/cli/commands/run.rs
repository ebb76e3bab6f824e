//! Run command - launch the command stored under an identifier.

use crate::cli::CommandError;
use crate::launcher::Launcher;
use crate::storage::Store;

/// Looks up `tokens[0]` and launches its command. Extra tokens are ignored.
pub fn run(store: &Store, launcher: &Launcher, tokens: &[String]) -> Result<String, CommandError> {
    let [identifier, ..] = tokens else {
        return Err(CommandError::InvalidArity("Invalid number of arguments"));
    };

    let record = store
        .lookup(identifier)?
        .ok_or_else(|| CommandError::NotFound(identifier.clone()))?;

    let launched = launcher.launch(&record.command)?;
    Ok(launched.message().to_string())
}
