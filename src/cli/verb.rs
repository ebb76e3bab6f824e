//! Verb classification for the first CLI token.

/// What the first token asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Add,
    List,
    Remove,
    Move,
    Clear,
    Info,
    Help,
    /// Anything else: the token is an identifier to run.
    Run,
}

/// Verbs and the exact tokens that select them, in match order.
///
/// `Verb::Run` is not listed; it is what every unmatched token falls to.
const VERB_TABLE: &[(Verb, &[&str])] = &[
    (Verb::Add, &["add", "-a"]),
    (Verb::List, &["list", "-l"]),
    (Verb::Remove, &["remove", "-r"]),
    (Verb::Move, &["move", "-m"]),
    (Verb::Clear, &["clear", "-c"]),
    (Verb::Info, &["info", "-i"]),
    (Verb::Help, &["help", "-h", "--help", "/?"]),
];

impl Verb {
    /// Classifies a token. The first table entry with a matching alias wins;
    /// matching is exact and case-sensitive.
    pub fn classify(token: &str) -> Verb {
        VERB_TABLE
            .iter()
            .find(|(_, aliases)| aliases.contains(&token))
            .map(|(verb, _)| *verb)
            .unwrap_or(Verb::Run)
    }

    /// Tokens that select this verb. Empty for `Run`.
    pub fn aliases(self) -> &'static [&'static str] {
        VERB_TABLE
            .iter()
            .find(|(verb, _)| *verb == self)
            .map(|(_, aliases)| *aliases)
            .unwrap_or(&[])
    }
}

/// Global options the argument parser consumes before dispatch, lowercased.
///
/// As a first token these never reach the dispatcher, so an identifier
/// spelled this way could never be run.
const GLOBAL_OPTIONS: &[&str] = &["-v", "--version", "--store", "--wait", "--verbose"];

/// Returns true if `identifier` spells a verb alias or a global option,
/// ignoring case.
pub fn is_reserved(identifier: &str) -> bool {
    let lowered = identifier.to_lowercase();
    VERB_TABLE
        .iter()
        .flat_map(|(_, aliases)| aliases.iter())
        .chain(GLOBAL_OPTIONS.iter())
        .any(|word| *word == lowered)
        || lowered.starts_with("--store=")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_long_and_short_forms() {
        assert_eq!(Verb::classify("add"), Verb::Add);
        assert_eq!(Verb::classify("-a"), Verb::Add);
        assert_eq!(Verb::classify("list"), Verb::List);
        assert_eq!(Verb::classify("-l"), Verb::List);
        assert_eq!(Verb::classify("remove"), Verb::Remove);
        assert_eq!(Verb::classify("-r"), Verb::Remove);
        assert_eq!(Verb::classify("move"), Verb::Move);
        assert_eq!(Verb::classify("-m"), Verb::Move);
        assert_eq!(Verb::classify("clear"), Verb::Clear);
        assert_eq!(Verb::classify("-c"), Verb::Clear);
        assert_eq!(Verb::classify("info"), Verb::Info);
        assert_eq!(Verb::classify("-i"), Verb::Info);
        assert_eq!(Verb::classify("help"), Verb::Help);
        assert_eq!(Verb::classify("-h"), Verb::Help);
        assert_eq!(Verb::classify("/?"), Verb::Help);
    }

    #[test]
    fn test_classify_falls_through_to_run() {
        assert_eq!(Verb::classify("paint"), Verb::Run);
        assert_eq!(Verb::classify("padding"), Verb::Run);
        assert_eq!(Verb::classify("address"), Verb::Run);
        assert_eq!(Verb::classify(""), Verb::Run);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(Verb::classify("ADD"), Verb::Run);
        assert_eq!(Verb::classify("List"), Verb::Run);
    }

    #[test]
    fn test_reserved_ignores_case() {
        assert!(is_reserved("list"));
        assert!(is_reserved("LIST"));
        assert!(is_reserved("-A"));
        assert!(is_reserved("/?"));
        assert!(!is_reserved("paint"));
        assert!(!is_reserved("lists"));
    }

    #[test]
    fn test_reserved_includes_global_options() {
        assert!(is_reserved("-V"));
        assert!(is_reserved("--version"));
        assert!(is_reserved("--store"));
        assert!(is_reserved("--store=elsewhere.dat"));
        assert!(is_reserved("--wait"));
        assert!(is_reserved("--verbose"));
        assert!(!is_reserved("--fast"));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Verb::Move.aliases(), &["move", "-m"]);
        assert!(Verb::Run.aliases().is_empty());
    }
}
