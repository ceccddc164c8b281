// Turns the host's cleaned stdout into the typed outcome of each dialog kind.

use super::models::{CANCEL_TOKEN, DialogResult, OpenSelection, SaveSelection};

pub fn parse_message_result(output: &str) -> DialogResult {
    DialogResult::from_label(output)
}

/*
 * The VisualBasic input box returns an empty string both when the user cancels
 * and when they confirm an empty field. There is no way to tell the two apart
 * from its output, so the text is passed through unchanged.
 */
pub fn parse_input_text(output: &str) -> String {
    output.to_string()
}

pub fn parse_open_output(output: &str) -> OpenSelection {
    if output == CANCEL_TOKEN {
        return OpenSelection {
            paths: Vec::new(),
            result: DialogResult::Cancel,
        };
    }
    // `lines` splits on "\r\n" and tolerates a bare "\n".
    let paths = output
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    OpenSelection {
        paths,
        result: DialogResult::Ok,
    }
}

pub fn parse_save_output(output: &str) -> SaveSelection {
    if output == CANCEL_TOKEN {
        return SaveSelection {
            path: String::new(),
            result: DialogResult::Cancel,
        };
    }
    let path = output.lines().next().unwrap_or_default().to_string();
    SaveSelection {
        path,
        result: DialogResult::Ok,
    }
}
