/*
 * Open and save file pickers.
 *
 * `FileDialog` holds what both pickers share (title, start directory, filter).
 * `open()` and `save()` copy that into a specialised builder, so one configured
 * `FileDialog` can produce both.
 */
use super::executor::{self, ScriptExecutorOperations};
use super::models::{
    DEFAULT_FILE_DIALOG_TITLE, DEFAULT_FILTER, DEFAULT_INITIAL_DIR, DialogConfig, OpenSelection,
    SaveSelection,
};
use super::script::PowerShellScript;
use super::{output_parser, script};
use std::sync::Arc;

/// Builds a WinForms filter string such as `TEXT File (*.txt)|*.txt`.
pub fn extension_filter(description: &str, extension: &str) -> String {
    format!("{description} (*.{extension})|*.{extension}")
}

#[derive(Clone)]
pub struct FileDialog {
    pub(crate) base: DialogConfig,
    pub(crate) initial_dir: String,
    pub(crate) filter: String,
    pub(crate) executor: Option<Arc<dyn ScriptExecutorOperations>>,
}

impl FileDialog {
    pub fn new() -> Self {
        FileDialog {
            base: DialogConfig::new(DEFAULT_FILE_DIALOG_TITLE),
            initial_dir: DEFAULT_INITIAL_DIR.to_string(),
            filter: DEFAULT_FILTER.to_string(),
            executor: None,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.base.title = title.to_string();
        self
    }

    /// Directory the picker opens in. Not checked for existence.
    pub fn start_dir(mut self, dir: &str) -> Self {
        self.initial_dir = dir.to_string();
        self
    }

    pub fn ext_filter(mut self, description: &str, extension: &str) -> Self {
        self.filter = extension_filter(description, extension);
        self
    }

    pub fn with_executor(mut self, executor: Arc<dyn ScriptExecutorOperations>) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn open(&self) -> OpenFileDialog {
        OpenFileDialog {
            file: self.clone(),
            multiple: false,
        }
    }

    /// A save picker that prompts before overwriting and does not force creation.
    pub fn save(&self) -> SaveFileDialog {
        SaveFileDialog {
            file: self.clone(),
            overwrite_prompt: true,
            force_create: false,
        }
    }
}

impl Default for FileDialog {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct OpenFileDialog {
    pub(crate) file: FileDialog,
    pub(crate) multiple: bool,
}

impl OpenFileDialog {
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    pub fn script(&self) -> PowerShellScript {
        script::open_file_dialog(
            &self.file.base.title,
            &self.file.initial_dir,
            &self.file.filter,
            self.multiple,
        )
    }

    pub fn load(self) -> executor::Result<OpenSelection> {
        log::debug!(
            "OpenFileDialog: Showing '{}' in '{}' (multiple: {})",
            self.file.base.title,
            self.file.initial_dir,
            self.multiple
        );
        let script = self.script();
        let output = executor::resolve(self.file.executor).execute(&script)?;
        let selection = output_parser::parse_open_output(&output);
        log::info!(
            "OpenFileDialog: {} with {} file(s)",
            selection.result,
            selection.paths.len()
        );
        Ok(selection)
    }
}

#[derive(Clone)]
pub struct SaveFileDialog {
    pub(crate) file: FileDialog,
    pub(crate) overwrite_prompt: bool,
    pub(crate) force_create: bool,
}

impl SaveFileDialog {
    pub fn overwrite_warning_disable(mut self) -> Self {
        self.overwrite_prompt = false;
        self
    }

    /// Truncates an existing file at the chosen path instead of leaving it as is.
    pub fn overwrite_force_enable(mut self) -> Self {
        self.force_create = true;
        self
    }

    pub fn script(&self) -> PowerShellScript {
        script::save_file_dialog(
            &self.file.base.title,
            &self.file.initial_dir,
            &self.file.filter,
            self.overwrite_prompt,
            self.force_create,
        )
    }

    /*
     * Shows the picker. On acceptance the host creates the file before
     * reporting its path, so the returned path exists.
     */
    pub fn load(self) -> executor::Result<SaveSelection> {
        log::debug!(
            "SaveFileDialog: Showing '{}' in '{}' (prompt: {}, force: {})",
            self.file.base.title,
            self.file.initial_dir,
            self.overwrite_prompt,
            self.force_create
        );
        let script = self.script();
        let output = executor::resolve(self.file.executor).execute(&script)?;
        let selection = output_parser::parse_save_output(&output);
        log::info!("SaveFileDialog: {} '{}'", selection.result, selection.path);
        Ok(selection)
    }
}
