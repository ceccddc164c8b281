use super::executor::{self, ScriptExecutorOperations};
use super::models::{DEFAULT_INPUT_BOX_PROMPT, DEFAULT_INPUT_BOX_TITLE, DialogConfig};
use super::script::PowerShellScript;
use super::{output_parser, script};
use std::sync::Arc;

/// A single-line text prompt. Create one with [`crate::input_box`].
#[derive(Clone)]
pub struct InputBox {
    pub(crate) base: DialogConfig,
    pub(crate) prompt: String,
    pub(crate) executor: Option<Arc<dyn ScriptExecutorOperations>>,
}

impl InputBox {
    pub fn new() -> Self {
        InputBox {
            base: DialogConfig::new(DEFAULT_INPUT_BOX_TITLE),
            prompt: DEFAULT_INPUT_BOX_PROMPT.to_string(),
            executor: None,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.base.title = title.to_string();
        self
    }

    /// Sets the prompt text shown above the entry field.
    pub fn description(mut self, prompt: &str) -> Self {
        self.prompt = prompt.to_string();
        self
    }

    pub fn with_executor(mut self, executor: Arc<dyn ScriptExecutorOperations>) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn script(&self) -> PowerShellScript {
        script::input_box(&self.prompt, &self.base.title)
    }

    /*
     * Shows the prompt and returns the entered text. An empty string is
     * returned both for empty input and for Cancel.
     */
    pub fn show(self) -> executor::Result<String> {
        log::debug!("InputBox: Showing '{}'", self.base.title);
        let script = self.script();
        let output = executor::resolve(self.executor).execute(&script)?;
        Ok(output_parser::parse_input_text(&output))
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}
