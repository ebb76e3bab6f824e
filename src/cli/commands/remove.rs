//! Remove command - drop an identifier.

use crate::cli::CommandError;
use crate::storage::Store;

/// Drops every record stored under `tokens[1]`. Extra tokens are ignored.
///
/// Reports success even when nothing was stored under the identifier.
pub fn run(store: &Store, tokens: &[String]) -> Result<String, CommandError> {
    let identifier = match tokens {
        [_, identifier, ..] if !identifier.is_empty() => identifier,
        _ => {
            return Err(CommandError::InvalidArity(
                "Invalid number of identifiers for remove. Expected 'remove identifier'",
            ))
        }
    };

    store.remove(identifier)?;
    Ok(format!("Successfully removed {identifier}"))
}
