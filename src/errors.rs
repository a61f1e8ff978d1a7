//! Error types for the fallible edges of the crate.
//!
//! Pattern compilation is total (see [`crate::patterns`]) and matching never
//! fails, so the only errors here are about getting a word list into memory.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word list from '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl From<WordListError> for io::Error {
    fn from(e: WordListError) -> Self {
        let message = e.to_string();
        match e {
            WordListError::Read { source, .. } => io::Error::new(source.kind(), message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_mentions_the_path() {
        let err = WordListError::Read {
            path: "words.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("words.txt"));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_converts_to_io_error_preserving_kind() {
        let err = WordListError::Read {
            path: "words.txt".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    }
}
