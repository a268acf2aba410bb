//! editor
//!
//! Interactive value entry through an external editor.
//!
//! # Round-trip
//!
//! 1. Resolve the configured editor command (`EDITOR`)
//! 2. Stage the initial content in a uniquely named temp file
//! 3. Resolve the command to an executable on `PATH`
//! 4. Run it with the temp file as its only argument, attached to the
//!    terminal, and wait for it to exit
//! 5. Read the file back
//! 6. Strip the trailing newline `vi`/`vim` add on save
//! 7. Base64-encode the result
//!
//! The temp file is owned by a [`tempfile::NamedTempFile`] and is removed
//! when it goes out of scope, on success and on every error path.
//!
//! # Limitations
//!
//! There is no timeout: if the editor never exits, neither does the tool.

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

use crate::core::config::Config;
use crate::core::document::encode_value;
use crate::core::errors::SecretsError;

/// Prefix for staged temp files.
const TEMP_PREFIX: &str = "tmp-kube-secrets.";

/// Editors that append a newline to every saved file.
const NEWLINE_APPENDING_EDITORS: &[&str] = &["vi", "vim"];

/// An external editor used to obtain secret values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Editor {
    command: Option<String>,
}

impl Editor {
    /// Create an editor from an optional command name.
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    /// Create an editor from resolved configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.editor.clone())
    }

    /// Run a full edit session and return the base64-encoded result.
    ///
    /// # Errors
    ///
    /// - [`SecretsError::MissingEditor`] if no editor is configured
    /// - [`SecretsError::EditorLaunch`] if the command is not on `PATH`
    /// - [`SecretsError::EditorProcess`] / [`SecretsError::EditorExited`]
    ///   if the process fails to run or exits unsuccessfully
    /// - [`SecretsError::TempFile`] if staging or reading back fails
    pub fn edit(&self, initial: &[u8]) -> Result<String, SecretsError> {
        let raw = self.edit_raw(initial)?;
        Ok(encode_value(&raw))
    }

    /// Run a full edit session and return the normalized raw bytes.
    pub fn edit_raw(&self, initial: &[u8]) -> Result<Vec<u8>, SecretsError> {
        let editor = match self.command.as_deref() {
            Some(cmd) if !cmd.is_empty() => cmd,
            _ => return Err(SecretsError::MissingEditor),
        };

        let staged = stage(initial)?;

        let program = which::which(editor).map_err(|source| SecretsError::EditorLaunch {
            editor: editor.to_string(),
            source,
        })?;

        tracing::debug!(editor, program = %program.display(), "launching editor");

        let status = Command::new(&program)
            .arg(staged.path())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .status()
            .map_err(|source| SecretsError::EditorProcess {
                editor: editor.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(SecretsError::EditorExited {
                editor: editor.to_string(),
                status,
            });
        }

        let content = fs::read(staged.path()).map_err(|source| SecretsError::TempFile {
            context: "cannot read edited value",
            source,
        })?;

        Ok(normalize(editor, content))
    }
}

/// Write `initial` into a fresh temp file.
fn stage(initial: &[u8]) -> Result<NamedTempFile, SecretsError> {
    let mut file = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .tempfile()
        .map_err(temp_err("cannot create temp file"))?;
    file.write_all(initial)
        .map_err(temp_err("cannot write temp file"))?;
    file.flush().map_err(temp_err("cannot flush temp file"))?;

    Ok(file)
}

fn temp_err(context: &'static str) -> impl FnOnce(std::io::Error) -> SecretsError {
    move |source| SecretsError::TempFile { context, source }
}

/// Strip exactly one trailing `\n` when `editor` is `vi` or `vim`.
///
/// Matches on the configured name as given, so `/usr/bin/vim` is left alone.
pub fn normalize(editor: &str, mut content: Vec<u8>) -> Vec<u8> {
    if NEWLINE_APPENDING_EDITORS.contains(&editor) && content.last() == Some(&b'\n') {
        content.pop();
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_one_newline_for_vim() {
        assert_eq!(normalize("vim", b"secret\n".to_vec()), b"secret");
        assert_eq!(normalize("vi", b"secret\n\n".to_vec()), b"secret\n");
        assert_eq!(normalize("vim", b"secret".to_vec()), b"secret");
        assert_eq!(normalize("vim", Vec::new()), b"");
    }

    #[test]
    fn normalize_leaves_other_editors_alone() {
        assert_eq!(normalize("nano", b"secret\n".to_vec()), b"secret\n");
        assert_eq!(normalize("/usr/bin/vim", b"secret\n".to_vec()), b"secret\n");
        assert_eq!(normalize("nvim", b"secret\n".to_vec()), b"secret\n");
    }

    #[test]
    fn missing_editor() {
        let result = Editor::new(None).edit(b"");
        assert!(matches!(result, Err(SecretsError::MissingEditor)));
    }

    #[test]
    fn empty_editor_counts_as_missing() {
        let result = Editor::new(Some(String::new())).edit(b"");
        assert!(matches!(result, Err(SecretsError::MissingEditor)));
    }

    #[test]
    fn from_config_takes_editor() {
        let config = Config {
            editor: Some("nano".into()),
        };
        assert_eq!(Editor::from_config(&config), Editor::new(Some("nano".into())));
        assert_eq!(Editor::from_config(&Config::default()), Editor::default());
    }

    #[cfg(unix)]
    mod process {
        use super::super::*;
        use std::os::unix::fs::PermissionsExt;
        use std::path::{Path, PathBuf};
        use std::sync::Mutex;
        use tempfile::TempDir;

        // Writing a script while another thread forks can leave the write fd
        // open in the child and make exec fail with ETXTBSY.
        static SPAWN_LOCK: Mutex<()> = Mutex::new(());

        fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
            let path = dir.join(name);
            fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("write script");
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");
            path
        }

        fn editor_for(path: &Path) -> Editor {
            Editor::new(Some(path.to_string_lossy().into_owned()))
        }

        #[test]
        fn editor_output_is_base64_encoded() {
            let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let dir = TempDir::new().expect("tempdir");
            let path = script(dir.path(), "emulate.sh", "printf 'TEST_DATA\\n' > \"$1\"");

            let value = editor_for(&path).edit(b"").expect("edit");
            assert_eq!(value, "VEVTVF9EQVRBCg==");
        }

        #[test]
        fn initial_content_reaches_the_editor() {
            let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let dir = TempDir::new().expect("tempdir");
            let path = script(
                dir.path(),
                "append.sh",
                "printf '%s-edited' \"$(cat \"$1\")\" > \"$1\"",
            );

            let raw = editor_for(&path).edit_raw(b"old").expect("edit");
            assert_eq!(raw, b"old-edited");
        }

        #[test]
        fn unchanged_content_round_trips() {
            let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let raw = Editor::new(Some("true".into()))
                .edit_raw(b"line one\nline two\n")
                .expect("edit");
            assert_eq!(raw, b"line one\nline two\n");
        }

        #[test]
        fn unknown_editor_fails_to_launch() {
            let result = Editor::new(Some("no_such_editor".into())).edit(b"");
            assert!(matches!(
                result,
                Err(SecretsError::EditorLaunch { editor, .. }) if editor == "no_such_editor"
            ));
        }

        #[test]
        fn failing_editor_is_reported() {
            let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let result = Editor::new(Some("false".into())).edit(b"");
            assert!(matches!(result, Err(SecretsError::EditorExited { .. })));
        }

        #[test]
        fn temp_file_is_removed_on_success_and_failure() {
            let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let dir = TempDir::new().expect("tempdir");
            let seen = dir.path().join("seen");

            let ok = script(
                dir.path(),
                "ok.sh",
                &format!("echo \"$1\" > '{}'", seen.display()),
            );
            editor_for(&ok).edit(b"x").expect("edit");
            let staged = fs::read_to_string(&seen).expect("seen path");
            assert!(staged.trim().contains(TEMP_PREFIX));
            assert!(!Path::new(staged.trim()).exists());

            let fail = script(
                dir.path(),
                "fail.sh",
                &format!("echo \"$1\" > '{}'\nexit 3", seen.display()),
            );
            assert!(editor_for(&fail).edit(b"x").is_err());
            let staged = fs::read_to_string(&seen).expect("seen path");
            assert!(!Path::new(staged.trim()).exists());
        }
    }
}
