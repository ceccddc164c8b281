/*
 * Builds the PowerShell scripts that drive the WinForms dialogs.
 *
 * A `PowerShellScript` is an ordered list of statements. User-supplied text only
 * ever enters a statement through `quote_literal`, which produces a single-quoted
 * PowerShell literal with every quote character doubled, so a title such as
 * `Bob's file` cannot terminate the literal early. Typed values (button and icon
 * codes, booleans) are written directly.
 *
 * The host receives the rendered script as `-EncodedCommand`, i.e. base64 over
 * UTF-16LE, which keeps the text clear of the Windows command-line parser.
 */
use super::models::{ButtonSet, CANCEL_TOKEN, Icon};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

const OUTPUT_ENCODING_PREAMBLE: &str =
    "[Console]::OutputEncoding = [System.Text.Encoding]::UTF8";

// Turns a cmdlet error into a terminating one, so the host exits non-zero.
const STOP_ON_ERROR: &str = "-ErrorAction Stop";

// PowerShell treats all of these as a single quote inside a verbatim string.
const SINGLE_QUOTE_CHARS: [char; 5] = ['\'', '\u{2018}', '\u{2019}', '\u{201A}', '\u{201B}'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerShellScript {
    statements: Vec<String>,
}

impl PowerShellScript {
    /// Starts a script whose standard output is UTF-8.
    pub fn new() -> Self {
        PowerShellScript {
            statements: vec![OUTPUT_ENCODING_PREAMBLE.to_string()],
        }
    }

    pub fn statement(mut self, statement: impl Into<String>) -> Self {
        self.statements.push(statement.into());
        self
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    /// Script text as the host will execute it.
    pub fn render(&self) -> String {
        self.statements.join(";")
    }

    /// The rendered script in the form `-EncodedCommand` expects.
    pub fn encoded(&self) -> String {
        let utf16_le: Vec<u8> = self
            .render()
            .encode_utf16()
            .flat_map(|unit| unit.to_le_bytes())
            .collect();
        BASE64.encode(utf16_le)
    }
}

impl Default for PowerShellScript {
    fn default() -> Self {
        Self::new()
    }
}

/*
 * Wraps `text` in a verbatim (single-quoted) PowerShell string literal.
 * Quote characters are doubled, which is the only escape verbatim strings
 * understand. NUL is dropped since the host would truncate at it.
 */
pub fn quote_literal(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for c in text.chars() {
        if c == '\0' {
            continue;
        }
        if SINGLE_QUOTE_CHARS.contains(&c) {
            quoted.push(c);
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}

fn bool_literal(value: bool) -> &'static str {
    if value { "$true" } else { "$false" }
}

pub fn message_box(
    message: &str,
    title: &str,
    button: ButtonSet,
    icon: Icon,
) -> PowerShellScript {
    PowerShellScript::new()
        .statement("Add-Type -AssemblyName System.Windows.Forms")
        .statement(format!(
            "[System.Windows.Forms.MessageBox]::Show({}, {}, {}, {})",
            quote_literal(message),
            quote_literal(title),
            button.code(),
            icon.code()
        ))
}

pub fn input_box(prompt: &str, title: &str) -> PowerShellScript {
    PowerShellScript::new()
        .statement("[void][Reflection.Assembly]::LoadWithPartialName('Microsoft.VisualBasic')")
        .statement(format!(
            "[Microsoft.VisualBasic.Interaction]::InputBox({}, {})",
            quote_literal(prompt),
            quote_literal(title)
        ))
}

// Statements common to both file dialog kinds.
fn file_dialog_setup(
    class: &str,
    title: &str,
    initial_dir: &str,
    filter: &str,
) -> PowerShellScript {
    PowerShellScript::new()
        .statement("Add-Type -AssemblyName System.Windows.Forms")
        .statement(format!("$fdlg = New-Object System.Windows.Forms.{class}"))
        .statement(format!("$fdlg.Title = {}", quote_literal(title)))
        .statement(format!(
            "$fdlg.InitialDirectory = {}",
            quote_literal(initial_dir)
        ))
        .statement(format!("$fdlg.Filter = {}", quote_literal(filter)))
}

pub fn open_file_dialog(
    title: &str,
    initial_dir: &str,
    filter: &str,
    multiple: bool,
) -> PowerShellScript {
    file_dialog_setup("OpenFileDialog", title, initial_dir, filter)
        .statement(format!("$fdlg.Multiselect = {}", bool_literal(multiple)))
        .statement(format!(
            "if ($fdlg.ShowDialog() -eq [System.Windows.Forms.DialogResult]::OK) \
             {{ Write-Output $fdlg.FileNames }} else {{ Write-Output '{CANCEL_TOKEN}' }}"
        ))
}

/*
 * On acceptance the chosen file is created before its path is printed. With
 * `force_create` an existing file is truncated; without it an existing file is
 * left alone. New-Item's FileInfo output is discarded so stdout holds only the
 * path. A failed creation is terminating: the host exits non-zero and the path
 * is never printed.
 */
pub fn save_file_dialog(
    title: &str,
    initial_dir: &str,
    filter: &str,
    overwrite_prompt: bool,
    force_create: bool,
) -> PowerShellScript {
    let create = if force_create {
        format!("New-Item -ItemType File -Path $fdlg.FileName -Force {STOP_ON_ERROR} | Out-Null")
    } else {
        format!(
            "if (-not (Test-Path -LiteralPath $fdlg.FileName {STOP_ON_ERROR})) \
             {{ New-Item -ItemType File -Path $fdlg.FileName {STOP_ON_ERROR} | Out-Null }}"
        )
    };
    file_dialog_setup("SaveFileDialog", title, initial_dir, filter)
        .statement(format!(
            "$fdlg.OverwritePrompt = {}",
            bool_literal(overwrite_prompt)
        ))
        .statement(format!(
            "if ($fdlg.ShowDialog() -eq [System.Windows.Forms.DialogResult]::OK) \
             {{ {create}; Write-Output $fdlg.FileName }} else {{ Write-Output '{CANCEL_TOKEN}' }}"
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_literal_plain_text() {
        assert_eq!(quote_literal("Hello"), "'Hello'");
        assert_eq!(quote_literal(""), "''");
    }

    #[test]
    fn test_quote_literal_doubles_every_single_quote_variant() {
        assert_eq!(quote_literal("Bob's"), "'Bob''s'");
        assert_eq!(
            quote_literal("\u{2018}x\u{2019}"),
            "'\u{2018}\u{2018}x\u{2019}\u{2019}'"
        );
        assert_eq!(
            quote_literal("'); Remove-Item C:\\ #"),
            "'''); Remove-Item C:\\ #'"
        );
    }

    #[test]
    fn test_quote_literal_keeps_double_quotes_and_dollars_verbatim() {
        // Verbatim strings do not expand variables or subexpressions.
        assert_eq!(quote_literal("\"$env:USERNAME\""), "'\"$env:USERNAME\"'");
    }

    #[test]
    fn test_quote_literal_drops_nul() {
        assert_eq!(quote_literal("a\0b"), "'ab'");
    }

    #[test]
    fn test_every_script_starts_with_utf8_preamble() {
        let scripts = [
            message_box("m", "t", ButtonSet::Ok, Icon::None),
            input_box("p", "t"),
            open_file_dialog("t", "C:\\", "All files (*.*)|*.*", false),
            save_file_dialog("t", "C:\\", "All files (*.*)|*.*", true, false),
        ];
        for script in &scripts {
            assert_eq!(script.statements()[0], OUTPUT_ENCODING_PREAMBLE);
        }
    }

    #[test]
    fn test_message_box_embeds_every_button_and_icon_code() {
        for button in ButtonSet::ALL {
            for icon in Icon::ALL {
                let rendered = message_box("Body", "Head", button, icon).render();
                let expected = format!(
                    "[System.Windows.Forms.MessageBox]::Show('Body', 'Head', {}, {})",
                    button as u8, icon as u8
                );
                assert!(
                    rendered.ends_with(&expected),
                    "script for {button:?}/{icon:?} was: {rendered}"
                );
            }
        }
    }

    #[test]
    fn test_message_box_script_loads_forms_assembly() {
        let rendered = message_box("m", "t", ButtonSet::YesNo, Icon::Question).render();
        assert!(rendered.contains("Add-Type -AssemblyName System.Windows.Forms;"));
        assert!(rendered.ends_with("Show('m', 't', 4, 32)"));
    }

    #[test]
    fn test_input_box_script() {
        let rendered = input_box("Your name?", "Who").render();
        assert!(rendered.contains("LoadWithPartialName('Microsoft.VisualBasic')"));
        let expected = "[Microsoft.VisualBasic.Interaction]::InputBox('Your name?', 'Who')";
        assert!(rendered.ends_with(expected));
    }

    #[test]
    fn test_open_file_dialog_script() {
        let script = open_file_dialog("Pick", "C:\\Users", "TEXT File (*.txt)|*.txt", true);
        let rendered = script.render();
        assert!(rendered.contains("$fdlg = New-Object System.Windows.Forms.OpenFileDialog"));
        assert!(rendered.contains("$fdlg.Title = 'Pick'"));
        assert!(rendered.contains("$fdlg.InitialDirectory = 'C:\\Users'"));
        assert!(rendered.contains("$fdlg.Filter = 'TEXT File (*.txt)|*.txt'"));
        assert!(rendered.contains("$fdlg.Multiselect = $true"));
        assert!(rendered.contains("Write-Output $fdlg.FileNames"));
        assert!(rendered.contains("Write-Output 'Cancel'"));

        let single = open_file_dialog("Pick", "C:\\", "x", false).render();
        assert!(single.contains("$fdlg.Multiselect = $false"));
    }

    #[test]
    fn test_save_file_dialog_script_default_policy() {
        let rendered =
            save_file_dialog("Save", "C:\\", "All files (*.*)|*.*", true, false).render();
        assert!(rendered.contains("New-Object System.Windows.Forms.SaveFileDialog"));
        assert!(rendered.contains("$fdlg.OverwritePrompt = $true"));
        let guard = "if (-not (Test-Path -LiteralPath $fdlg.FileName -ErrorAction Stop))";
        assert!(rendered.contains(guard));
        assert!(!rendered.contains("-Force"));
        assert!(rendered.contains("Write-Output $fdlg.FileName }"));
    }

    #[test]
    fn test_save_file_dialog_script_forced_without_prompt() {
        let rendered = save_file_dialog("Save", "C:\\", "x", false, true).render();
        assert!(rendered.contains("$fdlg.OverwritePrompt = $false"));
        assert!(rendered.contains(
            "New-Item -ItemType File -Path $fdlg.FileName -Force -ErrorAction Stop | Out-Null"
        ));
        assert!(!rendered.contains("Test-Path"));
    }

    #[test]
    fn test_save_file_creation_failure_stops_before_path_is_printed() {
        for force in [false, true] {
            let script = save_file_dialog("Save", "C:\\", "x", true, force);
            let accept = script.statements().last().unwrap();
            let new_item = accept.find("New-Item").unwrap();
            let stop = new_item + accept[new_item..].find("-ErrorAction Stop").unwrap();
            let discard = new_item + accept[new_item..].find("| Out-Null").unwrap();
            let emit = accept.find("Write-Output $fdlg.FileName").unwrap();
            assert!(stop < discard, "New-Item must be terminating (force: {force})");
            assert!(discard < emit, "path must follow creation (force: {force})");
        }
    }

    #[test]
    fn test_user_text_with_quotes_stays_inside_literal() {
        let rendered = open_file_dialog("it's", "C:\\O'Neil", "x", false).render();
        assert!(rendered.contains("$fdlg.Title = 'it''s'"));
        assert!(rendered.contains("$fdlg.InitialDirectory = 'C:\\O''Neil'"));
    }

    #[test]
    fn test_encoded_is_base64_of_utf16_le() {
        let script = PowerShellScript {
            statements: vec!["ab".to_string()],
        };
        // 'a' = 61 00, 'b' = 62 00
        assert_eq!(script.encoded(), BASE64.encode([0x61, 0x00, 0x62, 0x00]));
        assert_eq!(script.encoded(), "YQBiAA==");
    }

    #[test]
    fn test_encoded_handles_non_ascii() {
        let script = PowerShellScript {
            statements: vec!["é".to_string()],
        };
        let bytes = BASE64.decode(script.encoded()).unwrap();
        assert_eq!(bytes, vec![0xE9, 0x00]);
    }
}
