//! Info command - where things live.

use std::env;

use crate::storage::Store;

/// Reports the running executable and the store file in use.
pub fn run(store: &Store) -> String {
    let location = match env::current_exe() {
        Ok(path) => path.display().to_string(),
        Err(e) => format!("unknown ({e})"),
    };
    format!(
        "Location: {location}\nStore: {}",
        store.path().display()
    )
}
