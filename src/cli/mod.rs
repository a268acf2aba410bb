//! cli
//!
//! Command-line interface layer for kube-secrets.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve configuration from the environment, once
//! - Delegate to command handlers, which call [`crate::core::ops`]
//!
//! # Architecture
//!
//! The CLI layer is thin. It turns parsed arguments into plain values and
//! hands them to the core operations. It does not read or write secret
//! files itself.

pub mod args;
pub mod commands;

pub use args::{Cli, Command, Shell};

use std::path::PathBuf;

use crate::core::config::Config;
use crate::core::ops::InlineUpdate;
use crate::editor::Editor;
use crate::ui::output::Verbosity;

/// Execution context shared by all command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Configuration resolved from the environment
    pub config: Config,
    /// Output verbosity
    pub verbosity: Verbosity,
    /// `-u` value, if given
    pub value: Option<String>,
    /// `-U` file, if given
    pub from_file: Option<PathBuf>,
}

impl Context {
    /// Build a context from parsed flags and resolved configuration.
    pub fn new(cli: &Cli, config: Config, verbosity: Verbosity) -> Self {
        Self {
            config,
            verbosity,
            value: cli.value.clone(),
            from_file: cli.from_file.clone(),
        }
    }

    /// Inline update inputs for create/update.
    pub fn inline(&self) -> InlineUpdate<'_> {
        InlineUpdate {
            value: self.value.as_deref(),
            file: self.from_file.as_deref(),
        }
    }

    /// Editor built from the resolved configuration.
    pub fn editor(&self) -> Editor {
        Editor::from_config(&self.config)
    }
}

/// Run the CLI with already-parsed arguments.
///
/// This is the main entry point called from `main.rs`, which has already
/// derived `verbosity` from the global flags.
pub fn run(cli: Cli, config: Config, verbosity: Verbosity) -> anyhow::Result<()> {
    let ctx = Context::new(&cli, config, verbosity);
    commands::dispatch(cli.command, &ctx)
}
