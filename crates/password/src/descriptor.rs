//! Runtime algorithm descriptors.
//!
//! A descriptor carries an algorithm's name and prefix as data, for code that
//! has to reason about algorithms without naming their types: dispatchers,
//! bindings, deployments that configure prefixes in a file.
//!
//! ```toml
//! name = "bcrypt"
//! prefix = "$2a$"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algorithm::{AlgorithmBase, PasswordAlgorithm};
use crate::error::{PasswordError, Result};
use crate::prefix::{declared, has_prefix};

/// Name and prefix of one algorithm. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmDescriptor {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
}

impl AlgorithmDescriptor {
    /// Creates a descriptor with a declared prefix.
    pub fn new(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: Some(prefix.into()),
        }
    }

    /// Creates a descriptor that declares no prefix.
    pub fn without_prefix(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: None,
        }
    }

    /// Snapshot of a statically declared algorithm.
    pub fn of<A: PasswordAlgorithm>() -> Self {
        Self {
            name: A::algorithm_name().to_string(),
            prefix: A::PREFIX.map(String::from),
        }
    }

    /// Parses a descriptor from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a descriptor from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let descriptor = Self::from_toml_str(&content).map_err(|e| match e {
            PasswordError::InvalidDescriptor(msg) => {
                PasswordError::InvalidDescriptor(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;

        tracing::debug!(
            name = %descriptor.name,
            path = %path.display(),
            "Loaded algorithm descriptor"
        );

        Ok(descriptor)
    }

    /// Algorithm name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared prefix, if any. Empty counts as none.
    pub fn prefix(&self) -> Option<&str> {
        declared(self.prefix.as_deref())
    }

    /// Returns the declared prefix or a configuration error.
    pub fn get_prefix(&self) -> Result<&str> {
        self.prefix().ok_or_else(|| {
            tracing::error!(
                algorithm = %self.name,
                "hash prefix requested but never declared"
            );
            PasswordError::missing_prefix(&self.name)
        })
    }

    /// Returns true if `hash` starts with this algorithm's prefix.
    pub fn detect(&self, hash: impl AsRef<[u8]>) -> bool {
        self.try_detect(hash).unwrap_or(false)
    }

    /// Like [`detect`](Self::detect) but reports a missing prefix.
    pub fn try_detect(&self, hash: impl AsRef<[u8]>) -> Result<bool> {
        let prefix = self.get_prefix()?;
        Ok(has_prefix(hash, prefix))
    }
}
