/*
 * Per-user directory lookups. The config directory is only located here;
 * `ensure_dir` creates it when something is actually written.
 */
use directories::{BaseDirs, ProjectDirs};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/*
 * The local (non-roaming) configuration directory for `app_name`, e.g.
 * `%LOCALAPPDATA%\<app_name>\config` on Windows. Returns `None` when the
 * platform has no notion of a home directory.
 */
pub fn config_local_dir(app_name: &str) -> Option<PathBuf> {
    let dir = ProjectDirs::from("", "", app_name).map(|p| p.config_local_dir().to_path_buf());
    log::trace!("PathUtils: Config dir for '{app_name}' resolved to {dir:?}");
    dir
}

/// The user's home directory, used as a friendlier start directory than `C:\`.
pub fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|b| b.home_dir().to_path_buf())
}

pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        log::debug!("PathUtils: Created directory {dir:?}");
    }
    Ok(())
}
