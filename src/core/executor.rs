/*
 * Runs a `PowerShellScript` in a child process and returns what it printed.
 *
 * `ScriptExecutorOperations` is the seam between the dialog builders and the
 * operating system; builders may hold an injected
 * `Arc<dyn ScriptExecutorOperations>` so tests can substitute a recording mock.
 * Otherwise `resolve` builds the default `CorePowerShellExecutor` when the
 * dialog is shown. `CorePowerShellExecutor` is the real implementation. It
 * blocks until the host exits, which for an interactive dialog means until the
 * user closes it. There is no timeout.
 */
use super::config::{self, CoreConfigManager, ShellConfig};
use super::error::ExecutionError;
use super::models::LINE_TERMINATOR;
use super::script::PowerShellScript;
use std::process::{Command, Output};
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, ExecutionError>;

/// Name under which the shell configuration is looked up.
pub const DEFAULT_APP_NAME: &str = "ps_dialog";

pub trait ScriptExecutorOperations: Send + Sync {
    /*
     * Executes `script` and returns its standard output with one trailing line
     * terminator removed. Non-zero exit is reported as `ExecutionError`.
     */
    fn execute(&self, script: &PowerShellScript) -> Result<String>;
}

#[derive(Debug, Clone, Default)]
pub struct CorePowerShellExecutor {
    config: ShellConfig,
}

impl CorePowerShellExecutor {
    pub fn new(config: ShellConfig) -> Self {
        CorePowerShellExecutor { config }
    }

    /// Uses the saved shell configuration for `app_name`, or defaults.
    pub fn from_config_or_default(app_name: &str) -> Self {
        let manager = CoreConfigManager::new();
        Self::new(config::load_or_default(&manager, app_name))
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    // Host switches, in the order PowerShell expects them (-EncodedCommand last).
    pub(crate) fn arguments(&self, script: &PowerShellScript) -> Vec<String> {
        let mut args = Vec::new();
        if self.config.no_profile {
            args.push("-NoProfile".to_string());
        }
        args.push("-NonInteractive".to_string());
        if self.config.sta {
            args.push("-STA".to_string());
        }
        if self.config.execution_policy_bypass {
            args.push("-ExecutionPolicy".to_string());
            args.push("Bypass".to_string());
        }
        args.push("-EncodedCommand".to_string());
        args.push(script.encoded());
        args
    }

    fn build_command(&self, script: &PowerShellScript) -> Command {
        let mut command = Command::new(&self.config.program);
        command.args(self.arguments(script));
        #[cfg(target_os = "windows")]
        {
            use std::os::windows::process::CommandExt;
            use windows::Win32::System::Threading::CREATE_NO_WINDOW;
            if self.config.hide_window {
                command.creation_flags(CREATE_NO_WINDOW.0);
            }
        }
        command
    }
}

impl ScriptExecutorOperations for CorePowerShellExecutor {
    fn execute(&self, script: &PowerShellScript) -> Result<String> {
        log::debug!(
            "CorePowerShellExecutor: Running '{}' with script: {}",
            self.config.program,
            script.render()
        );
        let output = self.build_command(script).output().map_err(|e| {
            log::error!(
                "CorePowerShellExecutor: Failed to start '{}': {e}",
                self.config.program
            );
            ExecutionError::Spawn(e)
        })?;
        interpret_output(output)
    }
}

/// The executor used by builders that were not given one.
pub fn default_executor() -> Arc<dyn ScriptExecutorOperations> {
    Arc::new(CorePowerShellExecutor::from_config_or_default(DEFAULT_APP_NAME))
}

/*
 * Picks the injected executor, if any. The shell configuration is only read
 * when the default is actually needed, i.e. at `show`/`load` time.
 */
pub(crate) fn resolve(
    injected: Option<Arc<dyn ScriptExecutorOperations>>,
) -> Arc<dyn ScriptExecutorOperations> {
    injected.unwrap_or_else(default_executor)
}

fn interpret_output(output: Output) -> Result<String> {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        log::error!(
            "CorePowerShellExecutor: Host exited with {:?}: {stderr}",
            output.status.code()
        );
        return Err(ExecutionError::ExitStatus {
            code: output.status.code(),
            stderr,
        });
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    log::trace!("CorePowerShellExecutor: Raw output {stdout:?}");
    Ok(clean_stdout(&stdout))
}

/*
 * Strips a UTF-8 byte order mark (PowerShell emits one after switching the
 * console to UTF-8) and a single trailing line terminator.
 */
pub(crate) fn clean_stdout(raw: &str) -> String {
    let text = raw.strip_prefix('\u{FEFF}').unwrap_or(raw);
    let text = text
        .strip_suffix(LINE_TERMINATOR)
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text);
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::script;

    #[test]
    fn test_clean_stdout_trims_one_terminator() {
        assert_eq!(clean_stdout("Yes\r\n"), "Yes");
        assert_eq!(clean_stdout("Yes\n"), "Yes");
        assert_eq!(clean_stdout("Yes"), "Yes");
        assert_eq!(clean_stdout("a\r\nb\r\n"), "a\r\nb");
        assert_eq!(clean_stdout("\r\n\r\n"), "\r\n");
        assert_eq!(clean_stdout(""), "");
    }

    #[test]
    fn test_clean_stdout_strips_bom() {
        assert_eq!(clean_stdout("\u{FEFF}OK\r\n"), "OK");
    }

    #[test]
    fn test_default_arguments() {
        let executor = CorePowerShellExecutor::default();
        let script = script::input_box("p", "t");
        let args = executor.arguments(&script);
        assert_eq!(
            &args[..6],
            &[
                "-NoProfile",
                "-NonInteractive",
                "-STA",
                "-ExecutionPolicy",
                "Bypass",
                "-EncodedCommand"
            ]
        );
        assert_eq!(args[6], script.encoded());
        assert_eq!(executor.config().program, "powershell.exe");
    }

    #[test]
    fn test_arguments_follow_config() {
        let executor = CorePowerShellExecutor::new(ShellConfig {
            program: "pwsh".to_string(),
            no_profile: false,
            sta: false,
            execution_policy_bypass: false,
            hide_window: false,
        });
        let script = script::input_box("p", "t");
        let args = executor.arguments(&script);
        assert_eq!(args.len(), 3);
        assert_eq!(args[0], "-NonInteractive");
        assert_eq!(args[1], "-EncodedCommand");
    }

    #[cfg(unix)]
    #[test]
    fn test_interpret_output_maps_exit_status() {
        use std::os::unix::process::ExitStatusExt;
        use std::process::ExitStatus;

        let failed = Output {
            status: ExitStatus::from_raw(1 << 8),
            stdout: Vec::new(),
            stderr: b"Exception calling \"Show\"\r\n".to_vec(),
        };
        match interpret_output(failed) {
            Err(ExecutionError::ExitStatus { code, stderr }) => {
                assert_eq!(code, Some(1));
                assert_eq!(stderr, "Exception calling \"Show\"");
            }
            other => panic!("Expected an exit status error, got {other:?}"),
        }

        let succeeded = Output {
            status: ExitStatus::from_raw(0),
            stdout: b"OK\r\n".to_vec(),
            stderr: Vec::new(),
        };
        assert_eq!(interpret_output(succeeded).unwrap(), "OK");
    }

    struct NullExecutor;

    impl ScriptExecutorOperations for NullExecutor {
        fn execute(&self, _script: &PowerShellScript) -> Result<String> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_resolve_prefers_injected_executor() {
        let injected: Arc<dyn ScriptExecutorOperations> = Arc::new(NullExecutor);
        let resolved = resolve(Some(Arc::clone(&injected)));
        assert!(Arc::ptr_eq(&resolved, &injected));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let executor = CorePowerShellExecutor::new(ShellConfig {
            program: format!("no-such-shell-{}", rand::random::<u64>()),
            ..ShellConfig::default()
        });
        let result = executor.execute(&script::input_box("p", "t"));
        match result {
            Err(ExecutionError::Spawn(e)) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("Expected a spawn error, got {other:?}"),
        }
    }
}
