//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands and may appear before or
//! after the command name:
//! - `--help` / `-h`: Show help
//! - `--version` / `-V`: Show version
//! - `-u <STRING>` / `--value`: Value to set instead of opening an editor
//! - `-U <FILE>` / `--from-file`: File whose contents are the value
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Suppress status messages

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// kube-secrets - Manage values in Kubernetes Secret manifests
#[derive(Parser, Debug)]
#[command(name = "kube-secrets")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
NOTES:
    Values are stored base64-encoded, as Kubernetes expects. Base64 is an
    encoding, not encryption: anyone who can read the file can read the
    secrets.

    Without -u or -U, create and update open $EDITOR on a temp file.")]
pub struct Cli {
    /// String to set the value with
    #[arg(short = 'u', long = "value", value_name = "STRING", global = true)]
    pub value: Option<String>,

    /// File to set the value with
    #[arg(short = 'U', long = "from-file", value_name = "FILENAME", global = true)]
    pub from_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress status messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create new secret file
    #[command(
        name = "create",
        long_about = "Create a new secret file holding a single key.\n\n\
            The secret is named after the file with its extension removed, so \
            db.yml becomes a Secret named 'db' in namespace 'default'. An \
            existing file at the same path is overwritten.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Set the value inline
    kube-secrets -u hunter2 create db.yml PASSWORD

    # Read the value from a file
    kube-secrets -U tls.key create tls.yml tls.key

    # Type the value in $EDITOR
    kube-secrets create db.yml PASSWORD"
    )]
    Create {
        /// Secret file to create
        filename: PathBuf,
        /// Key to set
        key: Option<String>,
    },

    /// Remove key
    #[command(name = "delete")]
    Delete {
        /// Secret file
        filename: PathBuf,
        /// Key to remove
        key: Option<String>,
    },

    /// List all keys in secret file
    #[command(name = "keys")]
    Keys {
        /// Secret file
        filename: PathBuf,
        /// Print keys as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Print the decoded value of a key
    #[command(name = "show")]
    Show {
        /// Secret file
        filename: PathBuf,
        /// Key to show
        key: Option<String>,
        /// Don't print a trailing newline (useful for piping)
        #[arg(short = 'n', long)]
        no_newline: bool,
    },

    /// Update value of key or create new key
    #[command(
        name = "update",
        long_about = "Update the value of a key, adding the key if it is missing.\n\n\
            Without -u or -U the current value is opened in $EDITOR. If the \
            result is identical to the stored value the file is not rewritten.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Rotate a password inline
    kube-secrets -u n3wpass update db.yml PASSWORD

    # Edit the current value
    EDITOR=vim kube-secrets update db.yml PASSWORD"
    )]
    Update {
        /// Secret file
        filename: PathBuf,
        /// Key to update or add
        key: Option<String>,
    },

    /// Print version
    #[command(name = "version")]
    Version,

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
INSTALLATION:
    # Bash
    kube-secrets completion bash > ~/.local/share/bash-completion/completions/kube-secrets

    # Zsh
    kube-secrets completion zsh > ~/.zfunc/_kube-secrets

    # Fish
    kube-secrets completion fish > ~/.config/fish/completions/kube-secrets.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion generation.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn value_flag_before_command() {
        let cli = Cli::try_parse_from([
            "kube-secrets",
            "-u",
            "secret1",
            "create",
            "/tmp/test.yml",
            "PASS",
        ])
        .expect("parse");
        assert_eq!(cli.value.as_deref(), Some("secret1"));
        match cli.command {
            Command::Create { filename, key } => {
                assert_eq!(filename, PathBuf::from("/tmp/test.yml"));
                assert_eq!(key.as_deref(), Some("PASS"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn file_flag_after_command() {
        let cli = Cli::try_parse_from(["kube-secrets", "update", "s.yml", "k", "-U", "v.txt"])
            .expect("parse");
        assert_eq!(cli.from_file, Some(PathBuf::from("v.txt")));
    }

    #[test]
    fn both_flags_parse_and_are_rejected_later() {
        let cli = Cli::try_parse_from([
            "kube-secrets", "-u", "a", "-U", "b", "create", "s.yml", "k",
        ])
        .expect("parse");
        assert!(cli.value.is_some() && cli.from_file.is_some());
    }

    #[test]
    fn key_is_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["kube-secrets", "show", "s.yml"]).expect("parse");
        assert!(matches!(cli.command, Command::Show { key: None, .. }));
    }

    #[test]
    fn keys_json_flag() {
        let cli = Cli::try_parse_from(["kube-secrets", "keys", "s.yml", "--json"]).expect("parse");
        assert!(matches!(cli.command, Command::Keys { json: true, .. }));
    }
}
