//! Line codec for stored records.
//!
//! A record is persisted as a single line: the identifier, a tab, then the
//! command. Nothing is quoted or escaped. The command may itself contain
//! tabs, so matching only ever compares the `identifier + SEPARATOR` prefix.

/// Separator between the identifier and the command on a stored line.
pub const SEPARATOR: char = '\t';

/// An identifier and the command line it launches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Short user-chosen key.
    pub identifier: String,
    /// Full command line, stored verbatim.
    pub command: String,
}

impl Record {
    pub fn new(identifier: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            command: command.into(),
        }
    }

    /// Encodes the record as a stored line (without the trailing newline).
    pub fn encode(&self) -> String {
        encode(&self.identifier, &self.command)
    }

    /// Decodes a stored line by splitting on the first separator.
    ///
    /// Returns `None` for lines that carry no separator at all.
    pub fn decode(line: &str) -> Option<Self> {
        line.split_once(SEPARATOR)
            .map(|(identifier, command)| Self::new(identifier, command))
    }

    /// Decodes `line` as the record for `identifier`, if it is one.
    ///
    /// Unlike [`Record::decode`], this never splits the command: everything
    /// after the `identifier + SEPARATOR` prefix is the command.
    pub fn decode_for(identifier: &str, line: &str) -> Option<Self> {
        line.strip_prefix(identifier)
            .and_then(|rest| rest.strip_prefix(SEPARATOR))
            .map(|command| Self::new(identifier, command))
    }
}

/// Joins an identifier and command into a stored line.
pub fn encode(identifier: &str, command: &str) -> String {
    format!("{identifier}{SEPARATOR}{command}")
}

/// Returns true if `line` is a stored line for `identifier`.
pub fn line_matches(line: &str, identifier: &str) -> bool {
    Record::decode_for(identifier, line).is_some()
}
