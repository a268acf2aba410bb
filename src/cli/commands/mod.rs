//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Converts its arguments to plain values
//! 2. Calls the matching operation in [`crate::core::ops`]
//! 3. Formats and displays the result
//!
//! Handlers return `anyhow::Result` so `main` can print the error chain;
//! the underlying error is always a
//! [`SecretsError`](crate::core::errors::SecretsError).

mod completion;
mod create;
mod delete;
mod keys;
mod show;
mod update;
mod version;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use create::create;
pub use delete::delete;
pub use keys::keys;
pub use show::show;
pub use update::update;
pub use version::version;

use crate::cli::args::Command;
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Create { filename, key } => create::create(ctx, &filename, key.as_deref()),
        Command::Delete { filename, key } => delete::delete(ctx, &filename, key.as_deref()),
        Command::Keys { filename, json } => keys::keys(&filename, json),
        Command::Show {
            filename,
            key,
            no_newline,
        } => show::show(&filename, key.as_deref(), no_newline),
        Command::Update { filename, key } => update::update(ctx, &filename, key.as_deref()),
        Command::Version => version::version(),
        Command::Completion { shell } => completion::completion(shell),
    }
}
