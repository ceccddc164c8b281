/*
 * Error types for the dialog layer.
 *
 * `ExecutionError` is the only failure a dialog call can report: the scripting
 * host could not be started, or it finished with a non-zero status. Bad builder
 * input (an odd directory, an empty title) is never validated here; whatever the
 * host makes of it comes back through the same error.
 *
 * `ConfigError` covers loading and saving the shell configuration file. It never
 * leaks out of a dialog call, since a broken config falls back to defaults.
 */
use super::models::DialogResult;
use std::io;

#[derive(Debug)]
pub enum ExecutionError {
    /// The host process could not be spawned or waited on.
    Spawn(io::Error),
    /// The host ran but reported failure.
    ExitStatus { code: Option<i32>, stderr: String },
}

impl ExecutionError {
    /*
     * The sentinel result paired with a failed invocation. Callers that keep a
     * single `DialogResult` around (e.g. for display) can use this instead of
     * matching on the error.
     */
    pub fn dialog_result(&self) -> DialogResult {
        DialogResult::Error
    }
}

impl From<io::Error> for ExecutionError {
    fn from(err: io::Error) -> Self {
        ExecutionError::Spawn(err)
    }
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionError::Spawn(e) => write!(f, "Failed to run scripting host: {e}"),
            ExecutionError::ExitStatus { code, stderr } => {
                match code {
                    Some(c) => write!(f, "Scripting host exited with status {c}")?,
                    None => write!(f, "Scripting host was terminated by a signal")?,
                }
                if !stderr.is_empty() {
                    write!(f, ": {stderr}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExecutionError::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Serde(serde_json::Error),
    NoConfigDirectory,
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serde(err)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Configuration I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "Configuration file format error: {e}"),
            ConfigError::NoConfigDirectory => {
                write!(f, "Could not determine configuration directory")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Serde(e) => Some(e),
            _ => None,
        }
    }
}
