//! keys command - List the keys of a secret file

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::core::ops;

/// Print the keys of `filename`, sorted, one per line or as JSON.
pub fn keys(filename: &Path, json: bool) -> Result<()> {
    if json {
        let keys = ops::keys(filename)?;
        let rendered = serde_json::to_string_pretty(&keys).context("Failed to encode keys")?;
        println!("{}", rendered);
    } else {
        print!("{}", ops::list_keys(filename)?);
    }
    Ok(())
}
