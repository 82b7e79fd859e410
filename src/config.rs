use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::checks::CheckKind;

/// Optional per-check tuning. A missing value (or a bare `null` in YAML)
/// means the engine applies its built-in defaults for that check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckParams {
    /// Pass/fail threshold, interpreted by the engine per check kind
    /// (p-value for the hypothesis tests, tolerance for the others).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

/// Which checks to run against which histograms.
///
/// Keys of `checks` are glob patterns matched against histogram names by the
/// engine; each pattern maps check names to optional parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub checks: IndexMap<String, IndexMap<CheckKind, Option<CheckParams>>>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

impl Config {
    /// Default configuration: every known check, unparameterized, against
    /// every histogram name.
    pub fn default_checks() -> Self {
        let mut per_pattern = IndexMap::new();
        for kind in CheckKind::ALL {
            per_pattern.insert(kind, None);
        }
        let mut checks = IndexMap::new();
        checks.insert("*".to_string(), per_pattern);
        Config { checks }
    }

    /// Loads a YAML configuration file. Unknown check names and unknown
    /// parameter keys are rejected rather than silently ignored.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml_ng::from_slice(&bytes).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// YAML rendering used for the configuration console panel.
    pub fn to_display_string(&self) -> String {
        serde_yaml_ng::to_string(self).unwrap_or_else(|_| String::from("<unprintable>"))
    }
}
