//! update command - Change or add a key

use std::path::Path;

use anyhow::Result;

use crate::cli::Context;
use crate::core::ops;
use crate::ui::output;

/// Update `key` in `filename`, reporting whether anything changed.
pub fn update(ctx: &Context, filename: &Path, key: Option<&str>) -> Result<()> {
    let editor = ctx.editor();
    let status = ops::update(filename, key.unwrap_or_default(), ctx.inline(), &editor)?;

    output::status(status, ctx.verbosity);
    Ok(())
}
