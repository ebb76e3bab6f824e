//! Clear command - delete every stored identifier.

use crate::cli::CommandError;
use crate::storage::Store;

/// Removes the store file. Prints nothing on success.
pub fn run(store: &Store) -> Result<String, CommandError> {
    store.clear()?;
    Ok(String::new())
}
