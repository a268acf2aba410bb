//! create command - Create a new secret file with one key

use std::path::Path;

use anyhow::Result;

use crate::cli::Context;
use crate::core::ops;
use crate::ui::output;

/// Create `filename` holding `key`.
///
/// The value comes from `-u`/`-U` if given, otherwise from `$EDITOR`.
pub fn create(ctx: &Context, filename: &Path, key: Option<&str>) -> Result<()> {
    let editor = ctx.editor();
    ops::create(filename, key.unwrap_or_default(), ctx.inline(), &editor)?;

    output::status("File created", ctx.verbosity);
    Ok(())
}
