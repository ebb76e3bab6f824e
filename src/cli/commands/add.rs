//! Add command - store a new identifier.

use tracing::debug;

use crate::cli::{is_reserved, CommandError};
use crate::storage::Store;

/// Stores `tokens[2..]`, joined by single spaces, under `tokens[1]`.
///
/// Rejects reserved identifiers and identifiers that are already stored;
/// the existing mapping is never overwritten.
pub fn run(store: &Store, tokens: &[String]) -> Result<String, CommandError> {
    let (identifier, words) = match tokens {
        [_, identifier, words @ ..] if !identifier.is_empty() && !words.is_empty() => {
            (identifier, words)
        }
        _ => {
            return Err(CommandError::InvalidArity(
                "Invalid number of options provided",
            ))
        }
    };

    if is_reserved(identifier) {
        return Err(CommandError::ReservedIdentifier(identifier.clone()));
    }

    if let Some(existing) = store.lookup(identifier)? {
        return Err(CommandError::DuplicateIdentifier {
            identifier: existing.identifier,
            command: existing.command,
        });
    }

    let command = words.join(" ");
    store.append(identifier, &command)?;
    debug!(identifier = %identifier, command = %command, "added");

    Ok(format!(
        "Command: {command}\nAdded under identifier: {identifier}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn create_test_store() -> (Store, tempfile::TempDir) {
        let dir = tempdir().expect("Failed to create temp directory");
        (Store::new(dir.path().join("GoCommands.dat")), dir)
    }

    #[test]
    fn test_add_joins_command_words() {
        let (store, _dir) = create_test_store();

        let message = run(&store, &tokens(&["add", "logs", "notepad.exe", "c:\\logs.txt"]))
            .expect("add should succeed");

        assert_eq!(
            message,
            "Command: notepad.exe c:\\logs.txt\nAdded under identifier: logs"
        );
        let record = store.lookup("logs").unwrap().unwrap();
        assert_eq!(record.command, "notepad.exe c:\\logs.txt");
    }

    #[test]
    fn test_add_requires_command() {
        let (store, _dir) = create_test_store();

        for args in [&["add"][..], &["add", "logs"][..], &["add", "", "cmd"][..]] {
            let err = run(&store, &tokens(args)).unwrap_err();
            assert!(matches!(err, CommandError::InvalidArity(_)));
        }
        assert!(!store.path().exists());
    }

    #[test]
    fn test_add_rejects_reserved_any_case() {
        let (store, _dir) = create_test_store();

        let err = run(&store, &tokens(&["-a", "REMOVE", "x.exe"])).unwrap_err();

        assert!(matches!(err, CommandError::ReservedIdentifier(ref id) if id == "REMOVE"));
    }

    #[test]
    fn test_add_rejects_global_option_names() {
        let (store, _dir) = create_test_store();

        for identifier in ["-V", "--version", "--wait"] {
            let err = run(&store, &tokens(&["add", identifier, "x.exe"])).unwrap_err();
            assert!(matches!(err, CommandError::ReservedIdentifier(_)));
        }
        assert!(!store.path().exists());
    }

    #[test]
    fn test_add_duplicate_keeps_original() {
        let (store, _dir) = create_test_store();
        run(&store, &tokens(&["add", "ed", "vim", "-u", "NONE"])).unwrap();

        let err = run(&store, &tokens(&["add", "ed", "nano"])).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Command file already contains entry for 'ed' with command: vim -u NONE"
        );
        assert_eq!(store.lookup("ed").unwrap().unwrap().command, "vim -u NONE");
        assert_eq!(store.list_all(false).unwrap().len(), 1);
    }
}
