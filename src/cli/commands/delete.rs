//! delete command - Remove a key from a secret file

use std::path::Path;

use anyhow::Result;

use crate::cli::Context;
use crate::core::ops;
use crate::ui::output;

/// Remove `key` from `filename`.
pub fn delete(ctx: &Context, filename: &Path, key: Option<&str>) -> Result<()> {
    ops::delete(filename, key.unwrap_or_default())?;

    output::status("Key deleted", ctx.verbosity);
    Ok(())
}
