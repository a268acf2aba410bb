//! core::config
//!
//! Runtime configuration resolved once at the process boundary.
//!
//! The core never reads the environment itself: `main` builds a
//! [`Config`] and passes it down, so tests can supply their own.

/// Environment variable naming the editor program.
pub const EDITOR_VAR: &str = "EDITOR";

/// Resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Editor command; `None` when `EDITOR` is unset.
    ///
    /// An empty value is kept as-is so the editor reports it the same way
    /// as an unset one, and only when an edit is actually needed.
    pub editor: Option<String>,
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            editor: lookup(EDITOR_VAR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_reads_editor_var() {
        let config = Config::from_lookup(|name| (name == "EDITOR").then(|| "vim".to_string()));
        assert_eq!(config.editor.as_deref(), Some("vim"));
    }

    #[test]
    fn unset_editor_is_none() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.editor, None);
    }

    #[test]
    fn empty_editor_is_preserved() {
        let config = Config::from_lookup(|_| Some(String::new()));
        assert_eq!(config.editor.as_deref(), Some(""));
    }
}
