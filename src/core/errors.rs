//! core::errors
//!
//! Error taxonomy for secret document operations.
//!
//! # Design
//!
//! Every operation returns either its result or exactly one
//! [`SecretsError`]. Each variant carries a short, stable message suitable
//! for direct display; underlying I/O and YAML causes are attached as
//! sources rather than folded into the message.
//!
//! # Security
//!
//! Messages never include secret values. Keys and paths are fine.
//!
//! # Example
//!
//! ```
//! use kube_secrets::core::errors::SecretsError;
//!
//! let err = SecretsError::KeyNotFound("db.password".to_string());
//! assert_eq!(err.to_string(), "key not found: db.password");
//! ```

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors from loading, mutating, and persisting a secret document.
#[derive(Debug, Error)]
pub enum SecretsError {
    /// The secrets file could not be read.
    #[error("error loading secrets file '{}'", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The secrets file is not valid YAML for a secret document.
    #[error("failed to parse yml in '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document parsed but its `kind` is not `Secret`.
    #[error("not a Kubernetes secret: kind is '{0}'")]
    NotASecret(String),

    /// A key was required but none was given.
    #[error("missing required parameter key")]
    MissingKeyParameter,

    /// The key does not exist in the document's data.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// Both an inline string and an inline file were supplied.
    #[error("can not use -u and -U together")]
    ConflictingUpdateSource,

    /// The file named as an inline update source could not be read.
    #[error("failed opening file to update '{}'", path.display())]
    UpdateSourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored value is not valid base64.
    #[error("stored value for key '{0}' is not valid base64")]
    CorruptValue(String),

    /// No editor is configured.
    #[error("missing EDITOR environment variable")]
    MissingEditor,

    /// The configured editor could not be resolved to an executable.
    #[error("failed to launch editor '{editor}'")]
    EditorLaunch {
        editor: String,
        #[source]
        source: which::Error,
    },

    /// The editor process could not be started or waited on.
    #[error("editor process '{editor}' failed")]
    EditorProcess {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    /// The editor ran but exited unsuccessfully.
    #[error("editor '{editor}' exited with {status}")]
    EditorExited { editor: String, status: ExitStatus },

    /// Staging or reading back the editor temp file failed.
    #[error("editor temp file error: {context}")]
    TempFile {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be encoded as YAML.
    #[error("failed to serialize secrets document")]
    Serialize(#[source] serde_yaml::Error),

    /// The secrets file could not be written.
    #[error("failed to write secrets file '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn messages_are_distinct_per_kind() {
        let io = || std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let messages = [
            SecretsError::Load {
                path: "a.yml".into(),
                source: io(),
            }
            .to_string(),
            SecretsError::NotASecret("ConfigMap".into()).to_string(),
            SecretsError::MissingKeyParameter.to_string(),
            SecretsError::KeyNotFound("k".into()).to_string(),
            SecretsError::ConflictingUpdateSource.to_string(),
            SecretsError::UpdateSourceRead {
                path: "v.txt".into(),
                source: io(),
            }
            .to_string(),
            SecretsError::CorruptValue("k".into()).to_string(),
            SecretsError::MissingEditor.to_string(),
            SecretsError::Write {
                path: "a.yml".into(),
                source: io(),
            }
            .to_string(),
        ];

        let unique: std::collections::HashSet<_> = messages.iter().collect();
        assert_eq!(unique.len(), messages.len());
    }

    #[test]
    fn load_error_keeps_io_source() {
        let err = SecretsError::Load {
            path: "/tmp/missing.yml".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };

        assert!(err.to_string().contains("/tmp/missing.yml"));
        assert!(err.source().is_some());
    }

    #[test]
    fn not_a_secret_names_the_kind() {
        let err = SecretsError::NotASecret("ConfigMap".into());
        assert!(err.to_string().contains("ConfigMap"));
    }
}
