//! Help command - usage text.

use crate::cli::Verb;

/// Returns the usage block.
pub fn usage() -> String {
    let forms = |verb: Verb| verb.aliases().join("|");
    format!(
        "Usage: go identifier\n\
         go {} identifier command\n\
         go {} [order]\n\
         go {}\n\
         go {} identifier\n\
         go {} identifier newIdentifier\n\
         go {}\n\
         go {}",
        forms(Verb::Add),
        forms(Verb::List),
        forms(Verb::Clear),
        forms(Verb::Remove),
        forms(Verb::Move),
        forms(Verb::Info),
        forms(Verb::Help),
    )
}
