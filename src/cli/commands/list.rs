//! List command - print stored records.

use std::fs;

use crate::cli::CommandError;
use crate::storage::Store;

/// Prints the store contents.
///
/// Any second token switches to sorted output with duplicate lines
/// collapsed. A missing store file is reported, not created.
pub fn run(store: &Store, tokens: &[String]) -> Result<String, CommandError> {
    let sorted = tokens.len() > 1;
    let lines = store.list_all(sorted)?;

    let path = fs::canonicalize(store.path()).unwrap_or_else(|_| store.path().to_path_buf());
    let mut message = format!("Contents of {}", path.display());
    for line in &lines {
        message.push('\n');
        message.push_str(line);
    }
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_list_missing_file() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("GoCommands.dat"));

        let err = run(&store, &tokens(&["list"])).unwrap_err();

        assert!(err.to_string().starts_with("Could not find file: "));
        assert!(!store.path().exists(), "listing must not create the store");
    }

    #[test]
    fn test_list_order_mode() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("GoCommands.dat"));
        fs::write(store.path(), "b\ttwo\na\tone\nb\ttwo\n").unwrap();

        let plain = run(&store, &tokens(&["list"])).unwrap();
        let ordered = run(&store, &tokens(&["-l", "order"])).unwrap();

        let plain_lines: Vec<&str> = plain.lines().skip(1).collect();
        let ordered_lines: Vec<&str> = ordered.lines().skip(1).collect();
        assert!(plain.starts_with("Contents of "));
        assert_eq!(plain_lines, vec!["b\ttwo", "a\tone", "b\ttwo"]);
        assert_eq!(ordered_lines, vec!["a\tone", "b\ttwo"]);
    }
}
