// Shared value types for every dialog kind.

use std::fmt;

pub const DEFAULT_MESSAGE_BOX_TITLE: &str = "Message Box";
pub const DEFAULT_INPUT_BOX_TITLE: &str = "Input Box";
pub const DEFAULT_INPUT_BOX_PROMPT: &str = "Type in the below Box";
pub const DEFAULT_FILE_DIALOG_TITLE: &str = "File Dialog";
pub const DEFAULT_INITIAL_DIR: &str = "C:\\";
pub const DEFAULT_FILTER: &str = "All files (*.*)|*.*";

/// Line terminator the scripting host writes between output lines.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Token written by the file dialog scripts when the user dismisses the dialog.
pub const CANCEL_TOKEN: &str = "Cancel";

// Configuration shared by all dialog kinds. Each kind embeds one of these
// rather than repeating the fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogConfig {
    pub title: String,
}

impl DialogConfig {
    pub fn new(title: &str) -> Self {
        DialogConfig {
            title: title.to_string(),
        }
    }
}

/// Button layout of a message box. Discriminants are the WinForms
/// `MessageBoxButtons` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ButtonSet {
    #[default]
    Ok = 0,
    OkCancel = 1,
    AbortRetryIgnore = 2,
    YesNoCancel = 3,
    YesNo = 4,
    RetryCancel = 5,
    CancelTryContinue = 6,
}

impl ButtonSet {
    pub const ALL: [ButtonSet; 7] = [
        ButtonSet::Ok,
        ButtonSet::OkCancel,
        ButtonSet::AbortRetryIgnore,
        ButtonSet::YesNoCancel,
        ButtonSet::YesNo,
        ButtonSet::RetryCancel,
        ButtonSet::CancelTryContinue,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Icon shown in a message box. Discriminants are the WinForms
/// `MessageBoxIcon` codes, including the aliased members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Icon {
    #[default]
    None = 0,
    Error = 16,
    Hand = 17,
    Stop = 18,
    Question = 32,
    Exclamation = 48,
    Warning = 49,
    Asterisk = 64,
    Information = 65,
}

impl Icon {
    pub const ALL: [Icon; 9] = [
        Icon::None,
        Icon::Error,
        Icon::Hand,
        Icon::Stop,
        Icon::Question,
        Icon::Exclamation,
        Icon::Warning,
        Icon::Asterisk,
        Icon::Information,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }
}

/*
 * Outcome of a dialog. The named variants cover every `DialogResult` label
 * WinForms reports for the supported button sets, plus the `Error` sentinel for
 * failed invocations. Anything else the host prints is kept as `Other` so no
 * information is lost.
 */
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DialogResult {
    Ok,
    Cancel,
    Yes,
    No,
    Abort,
    Retry,
    Ignore,
    Continue,
    TryAgain,
    Error,
    Other(String),
}

impl DialogResult {
    pub fn from_label(label: &str) -> Self {
        match label {
            "OK" => DialogResult::Ok,
            "Cancel" => DialogResult::Cancel,
            "Yes" => DialogResult::Yes,
            "No" => DialogResult::No,
            "Abort" => DialogResult::Abort,
            "Retry" => DialogResult::Retry,
            "Ignore" => DialogResult::Ignore,
            "Continue" => DialogResult::Continue,
            "TryAgain" => DialogResult::TryAgain,
            "Error" => DialogResult::Error,
            other => DialogResult::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DialogResult::Ok => "OK",
            DialogResult::Cancel => "Cancel",
            DialogResult::Yes => "Yes",
            DialogResult::No => "No",
            DialogResult::Abort => "Abort",
            DialogResult::Retry => "Retry",
            DialogResult::Ignore => "Ignore",
            DialogResult::Continue => "Continue",
            DialogResult::TryAgain => "TryAgain",
            DialogResult::Error => "Error",
            DialogResult::Other(s) => s,
        }
    }
}

impl fmt::Display for DialogResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Files picked in an open dialog. `paths` is empty unless `result` is `Ok`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenSelection {
    pub paths: Vec<String>,
    pub result: DialogResult,
}

/// Target chosen in a save dialog. `path` is empty unless `result` is `Ok`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSelection {
    pub path: String,
    pub result: DialogResult,
}
