//! core::document
//!
//! In-memory model of a Kubernetes `Secret` manifest and its persistence.
//!
//! # Format
//!
//! ```yaml
//! apiVersion: v1
//! kind: Secret
//! type: Opaque
//! metadata:
//!   name: test
//!   namespace: default
//! data:
//!   PASS: c2VjcmV0MQ==
//! ```
//!
//! Field order on save is fixed: `apiVersion`, `kind`, `type`,
//! `metadata{name, namespace}`, `data`. The `data` mapping is kept sorted,
//! so keys are written (and listed) in byte-wise order.
//!
//! # Encoding
//!
//! Values under `data` are standard base64 of the raw secret bytes.
//! Base64 is an encoding, not encryption: anyone who can read the file can
//! read the secrets.
//!
//! # Invariants
//!
//! - A loaded document always has `kind == "Secret"`
//! - `metadata.namespace` is never empty after [`SecretDocument::save`]

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Deserializer, Serialize};

use super::errors::SecretsError;

/// `apiVersion` written on newly created documents.
pub const API_VERSION: &str = "v1";

/// The only `kind` this tool operates on.
pub const SECRET_KIND: &str = "Secret";

/// `type` written on newly created documents.
pub const OPAQUE_TYPE: &str = "Opaque";

/// Namespace applied at save time when none is set.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Secret metadata block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub name: String,
    pub namespace: String,
}

/// A Kubernetes `Secret` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecretDocument {
    pub api_version: String,
    pub kind: String,
    #[serde(rename = "type")]
    pub secret_type: String,
    pub metadata: Metadata,
    #[serde(deserialize_with = "nullable_map")]
    pub data: BTreeMap<String, String>,

    /// Raw value supplied inline (`-u` / `-U`), never persisted.
    #[serde(skip)]
    pending_update: Option<Vec<u8>>,
}

/// `data:` with no entries parses as null; treat that as empty.
fn nullable_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SecretDocument {
    /// Create a fresh `v1` / `Secret` / `Opaque` document with no data.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: SECRET_KIND.to_string(),
            secret_type: OPAQUE_TYPE.to_string(),
            metadata: Metadata {
                name: name.into(),
                namespace: String::new(),
            },
            data: BTreeMap::new(),
            pending_update: None,
        }
    }

    /// Create a fresh document named after `path`.
    ///
    /// The name is the file's base name with its extension stripped, so
    /// `/tmp/test.yml` becomes `test`.
    pub fn for_path(path: &Path) -> Self {
        Self::new(name_from_path(path))
    }

    /// Load and validate a document from disk.
    ///
    /// # Errors
    ///
    /// - [`SecretsError::Load`] if the file cannot be read
    /// - [`SecretsError::Parse`] if the content is not a valid document
    /// - [`SecretsError::NotASecret`] if `kind` is not `Secret`
    pub fn load(path: &Path) -> Result<Self, SecretsError> {
        let bytes = fs::read(path).map_err(|source| SecretsError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let doc: Self = serde_yaml::from_slice(&bytes).map_err(|source| SecretsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if doc.kind != SECRET_KIND {
            return Err(SecretsError::NotASecret(doc.kind));
        }

        tracing::debug!(path = %path.display(), keys = doc.data.len(), "loaded secrets file");
        Ok(doc)
    }

    /// Encode the document as YAML.
    pub fn to_yaml(&self) -> Result<String, SecretsError> {
        serde_yaml::to_string(self).map_err(SecretsError::Serialize)
    }

    /// Persist the document to `path`, defaulting the namespace first.
    ///
    /// # Errors
    ///
    /// - [`SecretsError::Serialize`] if encoding fails
    /// - [`SecretsError::Write`] if the file cannot be written
    pub fn save(&mut self, path: &Path) -> Result<(), SecretsError> {
        if self.metadata.namespace.is_empty() {
            self.metadata.namespace = DEFAULT_NAMESPACE.to_string();
        }

        let content = self.to_yaml()?;
        let write_err = |source| SecretsError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o644);

        let mut file = options.open(path).map_err(write_err)?;
        file.write_all(content.as_bytes()).map_err(write_err)?;

        tracing::debug!(path = %path.display(), keys = self.data.len(), "wrote secrets file");
        Ok(())
    }

    /// Require a non-empty key that exists in `data`, returning its stored value.
    pub fn validate_key(&self, key: &str) -> Result<&str, SecretsError> {
        if key.is_empty() {
            return Err(SecretsError::MissingKeyParameter);
        }
        self.data
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| SecretsError::KeyNotFound(key.to_string()))
    }

    /// Decode the stored value for `key`.
    ///
    /// # Errors
    ///
    /// Fails like [`validate_key`](Self::validate_key), or with
    /// [`SecretsError::CorruptValue`] if the stored text is not base64.
    pub fn decoded(&self, key: &str) -> Result<Vec<u8>, SecretsError> {
        let stored = self.validate_key(key)?;
        decode_value(stored).ok_or_else(|| SecretsError::CorruptValue(key.to_string()))
    }

    /// Store an already-encoded value under `key`.
    pub fn set_encoded(&mut self, key: &str, encoded: String) {
        self.data.insert(key.to_string(), encoded);
    }

    /// Remove `key`, returning its stored value if present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.data.remove(key)
    }

    /// Keys of `data` in byte-wise order.
    pub fn sorted_keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Record a raw inline value to use instead of an editor session.
    pub fn set_pending_update(&mut self, raw: Vec<u8>) {
        self.pending_update = Some(raw);
    }

    /// Take the pending inline value, if any.
    pub fn take_pending_update(&mut self) -> Option<Vec<u8>> {
        self.pending_update.take()
    }
}

/// Derive `metadata.name` from a file path.
pub fn name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Base64-encode raw secret bytes for storage under `data`.
pub fn encode_value(raw: &[u8]) -> String {
    BASE64.encode(raw)
}

/// Decode a stored `data` value, `None` if it is not valid base64.
///
/// Whitespace anywhere in the text is ignored, so values wrapped across
/// lines (76-column output, YAML `|` blocks) decode like single-line ones.
pub fn decode_value(stored: &str) -> Option<Vec<u8>> {
    let compact: String = stored
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    BASE64.decode(compact).ok()
}
