//! core::ops
//!
//! The five secret operations: create, show, update, delete, list keys.
//!
//! # Lifecycle
//!
//! Each operation runs one load → mutate → save cycle against a single
//! file. `create` starts from a fresh document instead of loading, and
//! `show` / `list_keys` never write. Nothing is cached between calls.
//!
//! # Value sources
//!
//! `create` and `update` take their new value from an [`InlineUpdate`]
//! when one is supplied, and otherwise from an [`Editor`] session. The
//! inline inputs are validated before any file is touched.
//!
//! # Concurrency
//!
//! There is no locking. Two invocations writing the same file race and
//! the last writer wins.

use std::fmt;
use std::path::Path;

use super::document::{decode_value, encode_value, SecretDocument};
use super::errors::SecretsError;
use super::source::UpdateSource;
use crate::editor::Editor;

/// Inline value inputs as given at the boundary (`-u` and `-U`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineUpdate<'a> {
    /// Literal value.
    pub value: Option<&'a str>,
    /// File to read the value from.
    pub file: Option<&'a Path>,
}

impl<'a> InlineUpdate<'a> {
    /// No inline value; an editor session will be used.
    pub fn none() -> Self {
        Self::default()
    }

    /// A literal inline value.
    pub fn value(value: &'a str) -> Self {
        Self {
            value: Some(value),
            file: None,
        }
    }

    /// An inline value read from `file`.
    pub fn file(file: &'a Path) -> Self {
        Self {
            value: None,
            file: Some(file),
        }
    }

    fn resolve(self) -> Result<Option<UpdateSource>, SecretsError> {
        UpdateSource::from_parts(self.value, self.file)
    }
}

/// Outcome of [`update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    /// The new value was written.
    Updated,
    /// The new value matched the stored one; the file was not touched.
    NoUpdates,
}

impl fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateStatus::Updated => write!(f, "File updated"),
            UpdateStatus::NoUpdates => write!(f, "No updates"),
        }
    }
}

/// Stage an inline value on `doc`, reading it from its source.
fn stage_inline(doc: &mut SecretDocument, source: Option<UpdateSource>) -> Result<(), SecretsError> {
    if let Some(source) = source {
        doc.set_pending_update(source.read()?);
    }
    Ok(())
}

/// Create (or overwrite) `path` with a single key.
///
/// The document is built fresh: `v1`, `Secret`, `Opaque`, named after the
/// file. Any existing file at `path` is replaced, not merged.
///
/// # Errors
///
/// - [`SecretsError::ConflictingUpdateSource`] before any I/O
/// - [`SecretsError::MissingKeyParameter`] if `key` is empty
/// - Inline source and editor errors
/// - [`SecretsError::Serialize`] / [`SecretsError::Write`] on save
pub fn create(
    path: &Path,
    key: &str,
    inline: InlineUpdate<'_>,
    editor: &Editor,
) -> Result<(), SecretsError> {
    let source = inline.resolve()?;
    if key.is_empty() {
        return Err(SecretsError::MissingKeyParameter);
    }

    let mut doc = SecretDocument::for_path(path);
    stage_inline(&mut doc, source)?;

    let value = match doc.take_pending_update() {
        Some(raw) => encode_value(&raw),
        None => editor.edit(b"")?,
    };

    doc.set_encoded(key, value);
    doc.save(path)?;

    tracing::info!(path = %path.display(), key, "created secrets file");
    Ok(())
}

/// Return the decoded value stored under `key`.
///
/// # Errors
///
/// - Load errors (see [`SecretDocument::load`])
/// - [`SecretsError::MissingKeyParameter`] / [`SecretsError::KeyNotFound`]
/// - [`SecretsError::CorruptValue`] if the stored value is not base64
pub fn show(path: &Path, key: &str) -> Result<Vec<u8>, SecretsError> {
    let doc = SecretDocument::load(path)?;
    doc.decoded(key)
}

/// Set `key` to a new value, creating the key if it does not exist.
///
/// Without an inline value, the current decoded value is opened in the
/// editor. If the resulting value equals the stored one, the file is left
/// untouched and [`UpdateStatus::NoUpdates`] is returned.
///
/// # Errors
///
/// - [`SecretsError::ConflictingUpdateSource`] before any I/O
/// - [`SecretsError::MissingKeyParameter`] if `key` is empty
/// - Load errors (see [`SecretDocument::load`])
/// - [`SecretsError::CorruptValue`] if the current value cannot be decoded
///   for editing
/// - Inline source, editor, and save errors
pub fn update(
    path: &Path,
    key: &str,
    inline: InlineUpdate<'_>,
    editor: &Editor,
) -> Result<UpdateStatus, SecretsError> {
    let source = inline.resolve()?;
    if key.is_empty() {
        return Err(SecretsError::MissingKeyParameter);
    }

    let mut doc = SecretDocument::load(path)?;
    stage_inline(&mut doc, source)?;

    let candidate = match doc.take_pending_update() {
        Some(raw) => encode_value(&raw),
        None => {
            let current = match doc.data.get(key) {
                Some(stored) => decode_value(stored)
                    .ok_or_else(|| SecretsError::CorruptValue(key.to_string()))?,
                None => Vec::new(),
            };
            editor.edit(&current)?
        }
    };

    if doc.data.get(key) == Some(&candidate) {
        tracing::info!(path = %path.display(), key, "value unchanged, not writing");
        return Ok(UpdateStatus::NoUpdates);
    }

    doc.set_encoded(key, candidate);
    doc.save(path)?;

    tracing::info!(path = %path.display(), key, "updated secrets file");
    Ok(UpdateStatus::Updated)
}

/// Remove `key` from the document.
///
/// # Errors
///
/// - Load errors (see [`SecretDocument::load`])
/// - [`SecretsError::MissingKeyParameter`] / [`SecretsError::KeyNotFound`]
/// - Save errors
pub fn delete(path: &Path, key: &str) -> Result<(), SecretsError> {
    let mut doc = SecretDocument::load(path)?;
    doc.validate_key(key)?;

    doc.remove(key);
    doc.save(path)?;

    tracing::info!(path = %path.display(), key, "deleted key");
    Ok(())
}

/// All keys in byte-wise order.
pub fn keys(path: &Path) -> Result<Vec<String>, SecretsError> {
    let doc = SecretDocument::load(path)?;
    Ok(doc.sorted_keys().map(str::to_string).collect())
}

/// All keys in byte-wise order, each followed by a newline.
pub fn list_keys(path: &Path) -> Result<String, SecretsError> {
    Ok(keys(path)?
        .into_iter()
        .map(|key| format!("{}\n", key))
        .collect())
}
