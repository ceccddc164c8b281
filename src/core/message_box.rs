use super::executor::{self, ScriptExecutorOperations};
use super::models::{ButtonSet, DEFAULT_MESSAGE_BOX_TITLE, DialogConfig, DialogResult, Icon};
use super::script::PowerShellScript;
use super::{output_parser, script};
use std::sync::Arc;

/// A WinForms message box. Create one with [`crate::message`].
#[derive(Clone)]
pub struct MessageBox {
    pub(crate) base: DialogConfig,
    pub(crate) message: String,
    pub(crate) button: ButtonSet,
    pub(crate) icon: Icon,
    pub(crate) executor: Option<Arc<dyn ScriptExecutorOperations>>,
}

impl MessageBox {
    pub fn new(message: &str) -> Self {
        MessageBox {
            base: DialogConfig::new(DEFAULT_MESSAGE_BOX_TITLE),
            message: message.to_string(),
            button: ButtonSet::default(),
            icon: Icon::default(),
            executor: None,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.base.title = title.to_string();
        self
    }

    pub fn button(mut self, button: ButtonSet) -> Self {
        self.button = button;
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_executor(mut self, executor: Arc<dyn ScriptExecutorOperations>) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn script(&self) -> PowerShellScript {
        script::message_box(&self.message, &self.base.title, self.button, self.icon)
    }

    /// Shows the box and returns the label of the button the user clicked.
    pub fn show(self) -> executor::Result<DialogResult> {
        log::debug!(
            "MessageBox: Showing '{}' ({:?}, {:?})",
            self.base.title,
            self.button,
            self.icon
        );
        let script = self.script();
        let output = executor::resolve(self.executor).execute(&script)?;
        let result = output_parser::parse_message_result(&output);
        log::info!("MessageBox: '{}' closed with {result}", self.base.title);
        Ok(result)
    }
}
