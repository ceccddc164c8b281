/*
 * ps_dialog shows native Windows dialogs (message boxes, input prompts, open
 * and save file pickers) by handing a generated PowerShell script to
 * `powershell.exe` and reading back what it prints.
 *
 * ```no_run
 * use ps_dialog::{ButtonSet, DialogResult, Icon};
 *
 * let answer = ps_dialog::message("Overwrite the report?")
 *     .title("Report")
 *     .button(ButtonSet::YesNo)
 *     .icon(Icon::Question)
 *     .show()?;
 * if answer == DialogResult::Yes {
 *     let picked = ps_dialog::file().ext_filter("TEXT File", "txt").save().load()?;
 *     println!("{}", picked.path);
 * }
 * # Ok::<(), ps_dialog::ExecutionError>(())
 * ```
 */
pub mod core;

pub use crate::core::{
    ButtonSet, ConfigError, ConfigManagerOperations, CoreConfigManager, CorePowerShellExecutor,
    DialogConfig, DialogResult, ExecutionError, FileDialog, Icon, InputBox, MessageBox,
    OpenFileDialog, OpenSelection, PowerShellScript, SaveFileDialog, SaveSelection,
    ScriptExecutorOperations, ShellConfig,
};

use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::sync::Once;

/// A message box with title "Message Box", an OK button and no icon.
pub fn message(text: &str) -> MessageBox {
    MessageBox::new(text)
}

/// An input box titled "Input Box" with the prompt "Type in the below Box".
pub fn input_box() -> InputBox {
    InputBox::new()
}

/// A file dialog titled "File Dialog", starting in `C:\`, showing all files.
pub fn file() -> FileDialog {
    FileDialog::new()
}

static LOGGING_INIT: Once = Once::new();

/*
 * Installs a stderr logger for the demo binary and for tests. Safe to call more
 * than once; only the first call has an effect. Library users who already have
 * a `log` backend should simply not call this.
 */
pub fn initialize_logging() {
    LOGGING_INIT.call_once(|| {
        let config = ConfigBuilder::new()
            .set_target_level(LevelFilter::Error)
            .set_location_level(LevelFilter::Debug)
            .build();
        if let Err(e) = TermLogger::init(
            LevelFilter::Info,
            config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ) {
            eprintln!("Failed to initialize logging: {e}");
        }
    });
}
