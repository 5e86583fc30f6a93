//! Environment lookup layered over an optional `.env` file.
//!
//! # Format
//! One `KEY=VALUE` per line. Blank lines, lines starting with `#` and lines
//! without `=` are skipped. Keys and values are trimmed. Only the first `=`
//! splits, so values may contain `=`.
//!
//! # Precedence
//! A non-empty process variable always wins over a file value. The process
//! environment itself is never mutated.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Snapshot of environment variables with `.env` values filled in.
#[derive(Debug, Clone, Default)]
pub struct EnvVars {
    vars: HashMap<String, String>,
}

impl EnvVars {
    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Build from explicit pairs (later pairs replace earlier ones).
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Fill in values from the env file at `path`. A missing or unreadable
    /// file leaves the snapshot untouched.
    pub fn load_file(&mut self, path: &Path) {
        match fs::read_to_string(path) {
            Ok(content) => {
                let applied = self.merge(parse_env_file(&content));
                tracing::debug!(path = ?path, applied, "Loaded env file");
            }
            Err(e) => {
                tracing::debug!(path = ?path, error = %e, "No env file loaded");
            }
        }
    }

    /// Merge entries without overriding existing non-empty values.
    /// Returns how many entries were applied.
    pub fn merge(&mut self, entries: Vec<(String, String)>) -> usize {
        let mut applied = 0;
        for (key, value) in entries {
            if self.get(&key).is_none() {
                self.vars.insert(key, value);
                applied += 1;
            }
        }
        applied
    }

    /// Look up a variable. Empty values count as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Parse the contents of an env file into ordered key/value pairs.
pub fn parse_env_file(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}
