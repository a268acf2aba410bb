//! version command - Print the version

use anyhow::Result;

/// Version string reported by `version`.
pub fn version_line() -> String {
    format!("kube-secrets version {}", env!("CARGO_PKG_VERSION"))
}

/// Print the version.
pub fn version() -> Result<()> {
    println!("{}", version_line());
    Ok(())
}
