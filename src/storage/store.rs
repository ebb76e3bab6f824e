//! Flat-file store of identifier records.
//!
//! Every operation opens the file fresh, scans it completely and, for
//! mutations, rewrites it whole. Nothing is cached between calls and no
//! locking is done: two processes mutating the same file at once can lose
//! an update (last writer wins).

use std::collections::BTreeSet;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::record::{self, Record};

/// Errors raised by store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store file does not exist (only reported by listing).
    #[error("Could not find file: {}", .0.display())]
    FileMissing(PathBuf),

    /// The file exists but could not be read, written or removed.
    #[error("Error {action} \"{}\": {source}", path.display())]
    Io {
        /// What the store was doing, e.g. "reading".
        action: &'static str,
        /// Path of the store file.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },
}

/// Handle on the store file. Holds only the path.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Finds the first record stored under `identifier`.
    ///
    /// A missing file is created empty first, so an absent identifier is
    /// `Ok(None)` rather than an error.
    pub fn lookup(&self, identifier: &str) -> Result<Option<Record>, StoreError> {
        self.ensure_exists()?;

        let file = File::open(&self.path).map_err(|e| self.io_error("reading", e))?;
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| self.io_error("reading", e))?;
            if let Some(found) = Record::decode_for(identifier, &line) {
                debug!(identifier, "found record");
                return Ok(Some(found));
            }
        }

        debug!(identifier, "no record found");
        Ok(None)
    }

    /// Appends one record line.
    ///
    /// Callers check for an existing record first; nothing here prevents a
    /// duplicate from being written.
    pub fn append(&self, identifier: &str, command: &str) -> Result<(), StoreError> {
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| self.io_error("opening", e))?;

        let mut line = String::new();
        if !ends_with_newline(&mut file).map_err(|e| self.io_error("reading", e))? {
            line.push('\n');
        }
        line.push_str(&record::encode(identifier, command));
        line.push('\n');

        file.write_all(line.as_bytes())
            .map_err(|e| self.io_error("writing", e))?;
        debug!(identifier, command, "appended record");
        Ok(())
    }

    /// Drops every line stored under `identifier`, keeping the rest in order.
    ///
    /// Returns how many lines were dropped.
    pub fn remove(&self, identifier: &str) -> Result<usize, StoreError> {
        self.ensure_exists()?;

        let lines = self.read_lines()?;
        let before = lines.len();
        let kept: Vec<String> = lines
            .into_iter()
            .filter(|line| !record::line_matches(line, identifier))
            .collect();
        let removed = before - kept.len();

        self.write_lines(&kept)?;
        debug!(identifier, removed, "removed records");
        Ok(removed)
    }

    /// Renames `old` to `new` on every line stored under `old`.
    ///
    /// The rename is a plain substring replacement over the whole matched
    /// line, so occurrences of `old` inside the command change too. Returns
    /// how many lines were rewritten. An empty `old` renames nothing.
    pub fn rename(&self, old: &str, new: &str) -> Result<usize, StoreError> {
        self.ensure_exists()?;
        if old.is_empty() {
            return Ok(0);
        }

        let mut moved = 0;
        let lines: Vec<String> = self
            .read_lines()?
            .into_iter()
            .map(|line| {
                if record::line_matches(&line, old) {
                    moved += 1;
                    line.replace(old, new)
                } else {
                    line
                }
            })
            .collect();

        self.write_lines(&lines)?;
        debug!(old, new, moved, "renamed records");
        Ok(moved)
    }

    /// Deletes the store file. Succeeds when it is already gone.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "cleared store");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error("deleting", e)),
        }
    }

    /// Returns the stored lines.
    ///
    /// With `sorted`, duplicate lines collapse and the result is in
    /// lexicographic order; otherwise file order and duplicates are kept.
    /// A missing file is an error here.
    pub fn list_all(&self, sorted: bool) -> Result<Vec<String>, StoreError> {
        let lines = self.read_lines()?;
        if sorted {
            Ok(lines.into_iter().collect::<BTreeSet<_>>().into_iter().collect())
        } else {
            Ok(lines)
        }
    }

    fn ensure_exists(&self) -> Result<(), StoreError> {
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map(drop)
            .map_err(|e| self.io_error("creating", e))
    }

    fn read_lines(&self) -> Result<Vec<String>, StoreError> {
        let file = File::open(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StoreError::FileMissing(self.path.clone())
            } else {
                self.io_error("reading", e)
            }
        })?;

        BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| self.io_error("reading", e))
    }

    fn write_lines(&self, lines: &[String]) -> Result<(), StoreError> {
        let mut contents = String::new();
        for line in lines {
            contents.push_str(line);
            contents.push('\n');
        }
        fs::write(&self.path, contents).map_err(|e| self.io_error("writing", e))
    }

    fn io_error(&self, action: &'static str, source: io::Error) -> StoreError {
        StoreError::Io {
            action,
            path: self.path.clone(),
            source,
        }
    }
}

/// True for an empty file or one whose last byte is a newline.
fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
