//! kube-secrets - manage key/value entries in Kubernetes `Secret` manifests
//!
//! kube-secrets edits the `data` section of a single `Secret` YAML file:
//! creating the file, listing its keys, showing, updating, and deleting
//! individual values. Values are stored base64-encoded, as Kubernetes
//! expects. Base64 is an encoding, not encryption.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, calls operations)
//! - [`core`] - Document model, persistence, error taxonomy, operations
//! - [`editor`] - External editor round-trip for interactive values
//! - [`ui`] - Output and logging setup
//!
//! # Example
//!
//! ```no_run
//! use kube_secrets::core::ops::{self, InlineUpdate};
//! use kube_secrets::editor::Editor;
//! use std::path::Path;
//!
//! let path = Path::new("/tmp/test.yml");
//! ops::create(path, "PASS", InlineUpdate::value("secret1"), &Editor::default())?;
//! assert_eq!(ops::show(path, "PASS")?, b"secret1");
//! # Ok::<(), kube_secrets::core::errors::SecretsError>(())
//! ```

pub mod cli;
pub mod core;
pub mod editor;
pub mod ui;
