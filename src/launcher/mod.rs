//! Process launching with a command-interpreter fallback.
//!
//! A resolved command line is first started directly as a program image.
//! When the OS cannot execute it directly (no such program, not executable,
//! unknown format), it is handed to the platform interpreter as an inline
//! instruction (`cmd /C ...` on Windows, `sh -c ...` elsewhere). That second
//! attempt is the last one.

use std::io;
use std::process::{Child, Command};

use tracing::{debug, warn};

/// How a command was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launched {
    /// Started directly as a process.
    Direct,
    /// Started through the command interpreter.
    Shelled,
}

impl Launched {
    /// User-facing message for the outcome. Direct launches are silent.
    pub fn message(&self) -> &'static str {
        match self {
            Launched::Direct => "",
            Launched::Shelled => "Shelled command",
        }
    }
}

/// Errors that can occur while starting a command.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// Direct creation failed for a reason the interpreter would not fix.
    #[error("Error executing command '{command}': {source}")]
    Direct {
        command: String,
        source: io::Error,
    },

    /// The interpreter fallback could not be started either.
    #[error("Error executing command in shell '{command}': {source}")]
    Shell {
        command: String,
        source: io::Error,
    },
}

/// Returns the platform interpreter and its inline-command flag.
pub fn default_shell() -> (String, String) {
    if cfg!(windows) {
        ("cmd".to_string(), "/C".to_string())
    } else {
        ("sh".to_string(), "-c".to_string())
    }
}

/// Starts command lines, falling back to the interpreter when needed.
#[derive(Debug, Clone)]
pub struct Launcher {
    pub(crate) shell: String,
    pub(crate) shell_flag: String,
    pub(crate) wait: bool,
}

impl Default for Launcher {
    fn default() -> Self {
        let (shell, shell_flag) = default_shell();
        Self::new(shell, shell_flag, false)
    }
}

impl Launcher {
    pub fn new(shell: impl Into<String>, shell_flag: impl Into<String>, wait: bool) -> Self {
        Self {
            shell: shell.into(),
            shell_flag: shell_flag.into(),
            wait,
        }
    }

    /// Starts `command`.
    ///
    /// Unless the launcher was built with `wait`, the child is left running
    /// and this returns as soon as it has been created.
    pub fn launch(&self, command: &str) -> Result<Launched, LaunchError> {
        match Command::new(command).spawn() {
            Ok(child) => {
                debug!(command, "started directly");
                self.finish(child, command);
                Ok(Launched::Direct)
            }
            Err(e) if needs_interpreter(&e) => {
                debug!(command, error = %e, "direct start failed, using interpreter");
                self.launch_shelled(command)
            }
            Err(source) => Err(LaunchError::Direct {
                command: command.to_string(),
                source,
            }),
        }
    }

    fn launch_shelled(&self, command: &str) -> Result<Launched, LaunchError> {
        let child = self
            .shell_command(command)
            .spawn()
            .map_err(|source| LaunchError::Shell {
                command: command.to_string(),
                source,
            })?;

        debug!(command, shell = %self.shell, "started through interpreter");
        self.finish(child, command);
        Ok(Launched::Shelled)
    }

    /// Builds `<shell> <flag> <command>`.
    ///
    /// cmd.exe does its own parsing and does not understand `\"` escapes, so
    /// on Windows the command is appended to the command line verbatim.
    fn shell_command(&self, command: &str) -> Command {
        let mut shell = Command::new(&self.shell);
        shell.arg(&self.shell_flag);

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            shell.raw_arg(command);
        }
        #[cfg(not(windows))]
        shell.arg(command);

        shell
    }

    fn finish(&self, mut child: Child, command: &str) {
        if !self.wait {
            return;
        }
        match child.wait() {
            Ok(status) => debug!(command, %status, "command exited"),
            Err(e) => warn!(command, error = %e, "failed to wait for command"),
        }
    }
}

/// True when direct creation failed because the OS has no way to execute
/// the string as a program image.
fn needs_interpreter(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
    ) || is_exec_format_error(err)
}

#[cfg(unix)]
fn is_exec_format_error(err: &io::Error) -> bool {
    err.raw_os_error() == Some(libc::ENOEXEC)
}

#[cfg(windows)]
fn is_exec_format_error(err: &io::Error) -> bool {
    // ERROR_BAD_EXE_FORMAT
    err.raw_os_error() == Some(193)
}

#[cfg(not(any(unix, windows)))]
fn is_exec_format_error(_err: &io::Error) -> bool {
    false
}
