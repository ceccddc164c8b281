/*
 * This module holds the dialog builders and everything they need: the shared
 * value types (`models`), the PowerShell script serializer (`script`), the
 * subprocess seam (`ScriptExecutorOperations` in `executor`), the stdout
 * parser (`output_parser`) and the shell configuration (`config`).
 */
pub mod config;
pub mod error;
pub mod executor;
pub mod file_dialog;
pub mod input_box;
pub mod message_box;
pub mod models;
pub mod output_parser;
pub mod path_utils;
pub mod script;


pub use config::{ConfigManagerOperations, CoreConfigManager, ShellConfig};
pub use error::{ConfigError, ExecutionError};
pub use executor::{CorePowerShellExecutor, ScriptExecutorOperations};
pub use file_dialog::{FileDialog, OpenFileDialog, SaveFileDialog};
pub use input_box::InputBox;
pub use message_box::MessageBox;
pub use models::{ButtonSet, DialogConfig, DialogResult, Icon, OpenSelection, SaveSelection};
pub use script::PowerShellScript;
