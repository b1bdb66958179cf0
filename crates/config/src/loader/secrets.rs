//! Parsing of `secrets.env`.
//!
//! Responsibilities:
//! - Parse flat `KEY=VALUE` lines into an in-memory secret map.
//! - Treat a missing file as an empty map.
//!
//! Does NOT handle:
//! - Variable interpolation, escapes, single quotes or `export` prefixes.
//!   The format is deliberately flatter than a shell `.env` file.
//!
//! Invariants:
//! - Each line is trimmed; blank lines and lines starting with `#` are skipped.
//! - Lines are split on the FIRST `=`; lines without `=` are ignored.
//! - Every leading and trailing `"` is stripped from the value. Interior
//!   quotes and surrounding whitespace are kept.
//! - A repeated key keeps its last value.
//! - Values are never logged or shown by `Debug`.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use secrecy::{ExposeSecret, SecretString};

use super::error::ConfigError;

/// Secret values loaded from `secrets.env`.
#[derive(Debug, Default)]
pub struct Secrets {
    values: HashMap<String, SecretString>,
}

impl Secrets {
    /// Parse secrets file content. Never fails; unparseable lines are skipped.
    pub fn parse(content: &str) -> Self {
        let mut values = HashMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };

            let value = value.trim_matches('"');
            values.insert(key.to_string(), SecretString::new(value.into()));
        }

        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&SecretString> {
        self.values.get(key)
    }

    /// Exposed value for `key`, or an empty string when it is not defined.
    ///
    /// Use only for values that end up in the generated inventory.
    pub fn expose_or_empty(&self, key: &str) -> String {
        self.values
            .get(key)
            .map(|value| value.expose_secret().to_string())
            .unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Defined keys, sorted for stable output.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Read the secrets file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::SecretsRead`] if the file exists but cannot be read.
/// A missing file yields empty [`Secrets`].
pub fn read_secrets_file(path: &Path) -> Result<Secrets, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No secrets file, using empty secrets");
            return Ok(Secrets::default());
        }
        Err(source) => {
            return Err(ConfigError::SecretsRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let secrets = Secrets::parse(&content);
    tracing::debug!(
        path = %path.display(),
        count = secrets.len(),
        "Secrets file parsed"
    );

    Ok(secrets)
}
