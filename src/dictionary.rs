//! Word-list loading.
//!
//! A word list is UTF-8 text with one word per line. Each line is trimmed of
//! surrounding whitespace; blank lines are kept as empty words so the loaded
//! list lines up with the file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading a word list.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The file could not be opened.
    #[error("Failed to open dictionary {}: {source}", .path.display())]
    Open {
        /// Path that was being opened
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A line could not be read (I/O failure or invalid UTF-8).
    #[error("Failed to read dictionary line {line}: {source}")]
    Read {
        /// 1-based line number
        line: usize,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// A specialized `Result` type for word-list loading.
pub type Result<T> = std::result::Result<T, DictionaryError>;

/// Reads a word list from any buffered reader.
///
/// # Example
///
/// ```rust
/// use wagner_fischer::dictionary::read_dictionary;
///
/// let words = read_dictionary("world\n  word \nlord\n".as_bytes()).unwrap();
/// assert_eq!(words, ["world", "word", "lord"]);
/// ```
pub fn read_dictionary<R: BufRead>(reader: R) -> Result<Vec<String>> {
    reader
        .lines()
        .enumerate()
        .map(|(index, line)| {
            line.map(|line| line.trim().to_string())
                .map_err(|source| DictionaryError::Read {
                    line: index + 1,
                    source,
                })
        })
        .collect()
}

/// Loads a word list from a file.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DictionaryError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_dictionary(BufReader::new(file))
}
