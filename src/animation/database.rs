//! Line-oriented text database of named hex animation blobs.
//!
//! The file alternates a name line with a hex data line. Blank lines
//! between pairs are ignored:
//!
//! ```text
//! WaveLeft
//! 01 00 6D 12 34 00 00 00 00
//!
//! WaveRight
//! 0100AA6D5678
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// Errors that make a database unusable.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Animation database not found at {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read animation database {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A single name/hex pair borrowed from the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationRecord<'a> {
    pub name: &'a str,
    pub raw_hex: &'a str,
}

/// Animations keyed by name, in first-insertion order.
///
/// Overwriting an existing name replaces its data but keeps its position.
#[derive(Debug, Clone, Default)]
pub struct AnimationDatabase {
    entries: IndexMap<String, String>,
}

impl AnimationDatabase {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse a database file.
    ///
    /// The file is read in full and closed before parsing begins.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

        if !absolute.is_file() {
            return Err(DatabaseError::NotFound(absolute));
        }

        let raw = fs::read(&absolute).map_err(|source| DatabaseError::Io {
            path: absolute.clone(),
            source,
        })?;

        // Invalid UTF-8 only spoils the records it appears in
        let db = Self::parse(&String::from_utf8_lossy(&raw));
        log::debug!(
            "Loaded {} animations from {}",
            db.len(),
            absolute.display()
        );
        Ok(db)
    }

    /// Parse database text.
    ///
    /// A name whose next line is missing or blank is dropped with a warning
    /// and scanning resumes at the line right after that name. Lines end at
    /// `\r\n`, `\n` or a lone `\r`, and a leading byte order mark is ignored.
    pub fn parse(contents: &str) -> Self {
        let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
        let lines: Vec<&str> = contents
            .split("\r\n")
            .flat_map(|line| line.split(['\n', '\r']))
            .collect();
        let mut db = Self::new();

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i];
            if line.trim().is_empty() {
                i += 1;
                continue;
            }

            let name = line.trim();
            let data = lines.get(i + 1).map(|l| l.trim()).unwrap_or("");

            if data.is_empty() {
                log::warn!("Missing hex data for animation: {}", name);
                i += 1;
                continue;
            }

            db.insert(name, data);
            i += 2;
        }

        db
    }

    /// Insert or overwrite an animation.
    pub fn insert(&mut self, name: impl Into<String>, raw_hex: impl Into<String>) {
        self.entries.insert(name.into(), raw_hex.into());
    }

    /// Number of animations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw hex data for a name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Animation names in database order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Records in database order.
    pub fn iter(&self) -> impl Iterator<Item = AnimationRecord<'_>> {
        self.entries.iter().map(|(name, raw_hex)| AnimationRecord {
            name,
            raw_hex,
        })
    }
}

impl<N: Into<String>, H: Into<String>> FromIterator<(N, H)> for AnimationDatabase {
    fn from_iter<I: IntoIterator<Item = (N, H)>>(iter: I) -> Self {
        let mut db = Self::new();
        for (name, raw_hex) in iter {
            db.insert(name, raw_hex);
        }
        db
    }
}
