//! core::source
//!
//! Inline update sources: a value given directly on the command line
//! (`-u`) or read from a file (`-U`), used in place of an editor session.

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::SecretsError;

/// Where an inline value comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateSource {
    /// A literal string value.
    Literal(String),
    /// A file whose raw bytes are the value.
    File(PathBuf),
}

impl UpdateSource {
    /// Build an update source from the two optional inputs.
    ///
    /// Empty values count as absent. Returns `Ok(None)` when neither is given.
    ///
    /// # Errors
    ///
    /// [`SecretsError::ConflictingUpdateSource`] if both are given. This is
    /// checked before any file is touched.
    pub fn from_parts(
        value: Option<&str>,
        file: Option<&Path>,
    ) -> Result<Option<Self>, SecretsError> {
        let value = value.filter(|v| !v.is_empty());
        let file = file.filter(|f| !f.as_os_str().is_empty());

        match (value, file) {
            (Some(_), Some(_)) => Err(SecretsError::ConflictingUpdateSource),
            (Some(v), None) => Ok(Some(Self::Literal(v.to_string()))),
            (None, Some(f)) => Ok(Some(Self::File(f.to_path_buf()))),
            (None, None) => Ok(None),
        }
    }

    /// Read the raw value.
    pub fn read(&self) -> Result<Vec<u8>, SecretsError> {
        match self {
            Self::Literal(value) => Ok(value.as_bytes().to_vec()),
            Self::File(path) => fs::read(path).map_err(|source| SecretsError::UpdateSourceRead {
                path: path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn neither_source() {
        assert_eq!(UpdateSource::from_parts(None, None).expect("ok"), None);
        assert_eq!(
            UpdateSource::from_parts(Some(""), Some(Path::new(""))).expect("ok"),
            None
        );
    }

    #[test]
    fn both_sources_conflict() {
        let result = UpdateSource::from_parts(Some("x"), Some(Path::new("/nonexistent")));
        assert!(matches!(result, Err(SecretsError::ConflictingUpdateSource)));
    }

    #[test]
    fn literal_reads_its_bytes() {
        let source = UpdateSource::from_parts(Some("test_val123"), None)
            .expect("ok")
            .expect("some");
        assert_eq!(source.read().expect("read"), b"test_val123");
    }

    #[test]
    fn file_reads_raw_bytes() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("value.bin");
        fs::write(&path, [0u8, 159, 146, 150, b'\n']).expect("write");

        let source = UpdateSource::from_parts(None, Some(&path))
            .expect("ok")
            .expect("some");
        assert_eq!(source.read().expect("read"), vec![0u8, 159, 146, 150, b'\n']);
    }

    #[test]
    fn unreadable_file() {
        let source = UpdateSource::File(PathBuf::from("/tmp/test_can_not_open.yml.missing"));
        assert!(matches!(
            source.read(),
            Err(SecretsError::UpdateSourceRead { .. })
        ));
    }
}
