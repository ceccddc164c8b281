/*
 * Settings for the scripting host that shows the dialogs: which executable to
 * run and which switches to pass it. They persist as `shell_config.json` in
 * the per-user local config directory.
 *
 * It uses a trait-based approach (`ConfigManagerOperations`) so callers and tests
 * can swap the storage location. `CoreConfigManager` resolves the directory
 * through `path_utils` unless it was given an explicit base directory.
 */
use super::error::ConfigError;
use super::path_utils;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

pub const SHELL_CONFIG_FILENAME: &str = "shell_config.json";
pub const DEFAULT_SHELL_PROGRAM: &str = "powershell.exe";

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Executable name or path. `pwsh.exe` works as well.
    pub program: String,
    pub no_profile: bool,
    /// WinForms dialogs need a single-threaded apartment.
    pub sta: bool,
    pub execution_policy_bypass: bool,
    /// Suppress the console window the host would otherwise flash up.
    pub hide_window: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            program: DEFAULT_SHELL_PROGRAM.to_string(),
            no_profile: true,
            sta: true,
            execution_policy_bypass: true,
            hide_window: true,
        }
    }
}

pub trait ConfigManagerOperations: Send + Sync {
    fn load_shell_config(&self, app_name: &str) -> Result<Option<ShellConfig>>;
    fn save_shell_config(&self, app_name: &str, config: &ShellConfig) -> Result<()>;
}

pub struct CoreConfigManager {
    base_dir_override: Option<PathBuf>,
}

impl CoreConfigManager {
    pub fn new() -> Self {
        CoreConfigManager {
            base_dir_override: None,
        }
    }

    /// Keeps the config file directly in `dir` instead of the per-user location.
    pub fn with_base_dir(dir: impl Into<PathBuf>) -> Self {
        CoreConfigManager {
            base_dir_override: Some(dir.into()),
        }
    }

    fn config_dir(&self, app_name: &str) -> Result<PathBuf> {
        match &self.base_dir_override {
            Some(dir) => Ok(dir.clone()),
            None => path_utils::config_local_dir(app_name).ok_or(ConfigError::NoConfigDirectory),
        }
    }

    fn config_file_path(&self, app_name: &str) -> Result<PathBuf> {
        Ok(self.config_dir(app_name)?.join(SHELL_CONFIG_FILENAME))
    }
}

impl Default for CoreConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManagerOperations for CoreConfigManager {
    /*
     * Reads the shell configuration for `app_name`. A missing file is not an
     * error and yields `Ok(None)`. Fields absent from the file take their
     * default values.
     */
    fn load_shell_config(&self, app_name: &str) -> Result<Option<ShellConfig>> {
        let file_path = self.config_file_path(app_name)?;
        log::trace!("CoreConfigManager: Loading shell config from {file_path:?}");

        let file = match File::open(&file_path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("CoreConfigManager: No shell config at {file_path:?}.");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let config: ShellConfig = serde_json::from_reader(BufReader::new(file))?;
        log::debug!("CoreConfigManager: Loaded shell config {config:?} from {file_path:?}.");
        Ok(Some(config))
    }

    fn save_shell_config(&self, app_name: &str, config: &ShellConfig) -> Result<()> {
        let dir = self.config_dir(app_name)?;
        path_utils::ensure_dir(&dir)?;
        let file_path = dir.join(SHELL_CONFIG_FILENAME);

        let mut writer = BufWriter::new(File::create(&file_path)?);
        serde_json::to_writer_pretty(&mut writer, config)?;
        writer.flush()?;
        log::debug!("CoreConfigManager: Saved shell config to {file_path:?}.");
        Ok(())
    }
}

/*
 * Loads the shell configuration, falling back to defaults when there is none
 * or it cannot be read. Dialog calls must never fail because of a config file.
 */
pub fn load_or_default(manager: &dyn ConfigManagerOperations, app_name: &str) -> ShellConfig {
    match manager.load_shell_config(app_name) {
        Ok(Some(config)) => config,
        Ok(None) => ShellConfig::default(),
        Err(e) => {
            log::warn!("Config: Ignoring unreadable shell config for '{app_name}': {e}");
            ShellConfig::default()
        }
    }
}
