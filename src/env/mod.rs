//! Immutable environment snapshots.
//!
//! The validator never reads the process environment directly. Callers take
//! a snapshot once (from the process, an env file, or explicit pairs) and
//! pass it in, so every validation run is deterministic.

pub mod vars;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Errors raised while loading a dotenv-style file.
#[derive(Debug, thiserror::Error)]
pub enum EnvFileError {
    #[error("Failed to read env file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse env file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

impl EnvFileError {
    fn new(path: &Path, err: dotenvy::Error) -> Self {
        let path = path.to_path_buf();
        match err {
            dotenvy::Error::Io(source) => EnvFileError::Io { path, source },
            source => EnvFileError::Parse { path, source },
        }
    }
}

/// Read-only mapping from variable name to value, captured at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    values: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from explicit name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Capture the recognised variables from the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        let values: BTreeMap<String, String> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .filter(|(k, _)| vars::ALL.contains(&k.as_str()))
            .collect();

        debug!("Captured {} recognised variables from process environment", values.len());
        Self { values }
    }

    /// Load a dotenv-style file.
    ///
    /// Parsing follows `dotenvy`: comments (including trailing ` # ...`),
    /// `export` prefixes, quoting and escapes. The file is not applied to
    /// the process environment. Unlike [`EnvSnapshot::from_process`], every
    /// key is kept.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, EnvFileError> {
        let path = path.as_ref();
        let values = dotenvy::from_path_iter(path)
            .map_err(|e| EnvFileError::new(path, e))?
            .collect::<Result<BTreeMap<String, String>, _>>()
            .map_err(|e| EnvFileError::new(path, e))?;

        debug!("Loaded {} variables from {:?}", values.len(), path);
        Ok(Self { values })
    }

    /// Layer `other` on top of this snapshot; values in `other` win.
    pub fn overlay(mut self, other: EnvSnapshot) -> Self {
        self.values.extend(other.values);
        self
    }

    /// Raw value, if the variable exists (possibly empty).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// A variable is present when it exists with a non-empty value.
    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_empty())
    }

    /// A flag is set only when its value is exactly `"1"`.
    pub fn is_flag_set(&self, name: &str) -> bool {
        self.get(name) == Some(vars::FLAG_ON)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
