// src/main.rs
//
// Walks through every dialog kind once: a Yes/No message box, an input box,
// a multi-select open dialog and a save dialog starting in the home directory.

use ps_dialog::core::path_utils;
use ps_dialog::{ButtonSet, DialogResult, ExecutionError, Icon};

fn main() -> Result<(), ExecutionError> {
    ps_dialog::initialize_logging();
    log::info!("Starting ps_dialog demo");

    let answer = ps_dialog::message("Show the rest of the dialogs?")
        .title("MessageBox")
        .button(ButtonSet::YesNo)
        .icon(Icon::Question)
        .show()?;
    println!("{answer}");
    if answer != DialogResult::Yes {
        return Ok(());
    }

    let text = ps_dialog::input_box()
        .title("InputBox")
        .description("Type in the below box")
        .show()?;
    println!("{text}");

    let start_dir = path_utils::home_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "C:\\".to_string());
    let file_dlg = ps_dialog::file()
        .title("FileDialog")
        .start_dir(&start_dir)
        .ext_filter("TEXT File", "txt");

    let opened = file_dlg.open().multiple().load()?;
    println!("{:?} ({})", opened.paths, opened.result);

    let saved = file_dlg.save().load()?;
    println!("{} ({})", saved.path, saved.result);

    log::info!("ps_dialog demo finished");
    Ok(())
}
