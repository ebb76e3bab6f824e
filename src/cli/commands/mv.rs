//! Move command - rename an identifier.

use crate::cli::CommandError;
use crate::storage::Store;

const MOVE_USAGE: &str =
    "Invalid number of identifiers for move. Expected 'move identifier newIdentifier'";

/// Renames `tokens[1]` to `tokens[2]`.
///
/// Exactly three tokens are accepted. The new identifier is not checked
/// against reserved words or existing records.
pub fn run(store: &Store, tokens: &[String]) -> Result<String, CommandError> {
    let [_, old, new] = tokens else {
        return Err(CommandError::InvalidArity(MOVE_USAGE));
    };
    if old.is_empty() || new.is_empty() {
        return Err(CommandError::InvalidArity(MOVE_USAGE));
    }

    store.rename(old, new)?;
    Ok(format!("Successfully moved {old} to {new}"))
}
