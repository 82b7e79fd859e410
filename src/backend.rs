use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::Serialize;
use thiserror::Error;

use crate::config::Config;
use crate::types::Comparison;

/// Executable looked up on PATH when neither `--engine` nor the environment
/// override names one.
pub const DEFAULT_ENGINE: &str = "histcmp-engine";

/// Environment variable naming the engine executable.
pub const ENGINE_ENV: &str = "HISTCMP_ENGINE";

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("analysis engine '{0}' could not be found")]
    NotFound(String),
    #[error("launch analysis engine {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("analysis engine i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("analysis engine exited with status {code}: {stderr}")]
    Failed { code: i32, stderr: String },
    #[error("malformed analysis engine output: {0}")]
    Protocol(#[from] serde_json::Error),
}

/// Request document written to the engine's stdin.
#[derive(Debug, Serialize)]
struct EngineRequest<'a> {
    config: &'a Config,
    monitored: &'a Path,
    reference: &'a Path,
}

/// Handle on the external comparison engine.
///
/// The engine owns everything the spec keeps out of this crate: histogram
/// file decoding, object matching, and the check numerics. The contract is
/// `engine compare <monitored> <reference>` with the configuration as JSON
/// on stdin and a `Comparison` as JSON on stdout.
#[derive(Debug)]
pub struct EngineBackend {
    program: PathBuf,
}

impl EngineBackend {
    /// Resolves the engine executable: an explicit path wins, then the
    /// `HISTCMP_ENGINE` environment variable, then `histcmp-engine` on PATH.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, EngineError> {
        if let Some(path) = explicit {
            if path.is_file() {
                return Ok(Self {
                    program: path.to_path_buf(),
                });
            }
            return Err(EngineError::NotFound(path.display().to_string()));
        }
        if let Some(named) = env::var_os(ENGINE_ENV) {
            let path = PathBuf::from(&named);
            if path.is_file() {
                return Ok(Self { program: path });
            }
            // A bare name in the variable still goes through PATH lookup.
            if path.components().count() == 1 {
                if let Some(found) = find_in_path(&named.to_string_lossy()) {
                    return Ok(Self { program: found });
                }
            }
            return Err(EngineError::NotFound(named.to_string_lossy().into_owned()));
        }
        find_in_path(DEFAULT_ENGINE)
            .map(|program| Self { program })
            .ok_or_else(|| EngineError::NotFound(DEFAULT_ENGINE.to_string()))
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Runs the comparison and parses the engine's verdicts.
    pub fn compare(
        &self,
        config: &Config,
        monitored: &Path,
        reference: &Path,
    ) -> Result<Comparison, EngineError> {
        let request = EngineRequest {
            config,
            monitored,
            reference,
        };
        let mut child = Command::new(&self.program)
            .arg("compare")
            .arg(monitored)
            .arg(reference)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| EngineError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;
        if let Some(mut stdin) = child.stdin.take() {
            let body = serde_json::to_vec(&request)?;
            stdin.write_all(&body)?;
            // Drop closes the pipe so the engine sees EOF.
        }
        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(EngineError::Failed {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        decode_output(&output.stdout)
    }
}

/// Parses the engine's stdout document.
pub fn decode_output(bytes: &[u8]) -> Result<Comparison, EngineError> {
    Ok(serde_json::from_slice(bytes)?)
}

fn find_in_path(name: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
