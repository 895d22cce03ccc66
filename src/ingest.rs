//! List ingestion from text sources.
//!
//! One record per line, tokens separated by commas. Tokens are returned
//! raw; trimming and empty-token filtering belong to the indexer, so a
//! blank line still occupies a list position.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Raw tokens of one input record, untrimmed.
pub type RawList = Vec<String>;

/// Token separator within a record.
pub const TOKEN_SEPARATOR: char = ',';

/// Error raised while reading list records.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The source could not be opened.
    #[error("Input unreadable: {path}: {source}")]
    Unreadable {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Reading failed partway through the source.
    #[error("Read failed at line {line}: {source}")]
    Read {
        /// 1-based line number of the failed read.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Split one record into raw tokens.
pub fn split_list(line: &str) -> RawList {
    line.split(TOKEN_SEPARATOR).map(str::to_string).collect()
}

/// Read every record from a buffered reader.
pub fn parse_lists<R: BufRead>(reader: R) -> Result<Vec<RawList>, IngestError> {
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| {
            line.map(|l| split_list(&l))
                .map_err(|source| IngestError::Read { line: i + 1, source })
        })
        .collect()
}

/// Read every record from the file at `path`.
///
/// The whole file is materialized before returning.
pub fn read_lists(path: impl AsRef<Path>) -> Result<Vec<RawList>, IngestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IngestError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let lists = parse_lists(BufReader::new(file))?;

    tracing::debug!(
        path = %path.display(),
        list_count = lists.len(),
        "Lists ingested"
    );

    Ok(lists)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_split_keeps_raw_tokens() {
        assert_eq!(split_list(" a, b ,,c"), vec![" a", " b ", "", "c"]);
    }

    #[test]
    fn test_parse_lists_one_per_line() {
        let lists = parse_lists(Cursor::new("a,b\n\nc\r\n")).unwrap();
        assert_eq!(lists.len(), 3);
        assert_eq!(lists[0], vec!["a", "b"]);
        assert_eq!(lists[1], vec![""]);
        assert_eq!(lists[2], vec!["c"]);
    }

    #[test]
    fn test_parse_empty_source() {
        let lists = parse_lists(Cursor::new("")).unwrap();
        assert!(lists.is_empty());
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let err = read_lists("/nonexistent/definitely/missing.txt").unwrap_err();
        match err {
            IngestError::Unreadable { path, .. } => {
                assert!(path.ends_with("missing.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_utf8_reports_line() {
        let bytes: &[u8] = b"a,b\n\xff\xfe\n";
        let err = parse_lists(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, IngestError::Read { line: 2, .. }));
    }
}
