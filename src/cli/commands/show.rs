//! show command - Print the decoded value of a key

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::core::ops;
use crate::ui::output;

/// Print the raw value stored under `key` in `filename`.
///
/// The value is written as-is; a newline is appended unless `no_newline`.
pub fn show(filename: &Path, key: Option<&str>, no_newline: bool) -> Result<()> {
    let value = ops::show(filename, key.unwrap_or_default())?;
    output::raw(&value, !no_newline).context("Failed to write value")?;
    Ok(())
}
