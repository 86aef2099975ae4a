//! Background start of the UI server process

use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::{Child, Command};
use tracing::{error, info};

use crate::config::LauncherConfig;
use crate::domain::DomainError;

/// Program, arguments and port of the UI process to start
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub ui_port: u16,
}

impl LaunchCommand {
    /// Build from configuration; an empty command means the current executable
    pub fn from_config(config: &LauncherConfig) -> Result<Self, DomainError> {
        let program = if config.command.trim().is_empty() {
            std::env::current_exe().map_err(|e| {
                DomainError::configuration(format!("Cannot resolve current executable: {}", e))
            })?
        } else {
            PathBuf::from(config.command.trim())
        };

        Ok(Self {
            program,
            args: config.args.clone(),
            ui_port: config.ui_port,
        })
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .env("APP__SERVER__PORT", self.ui_port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

/// Start the UI process without waiting for it
///
/// A spawn failure is logged and reported as `None`; the caller keeps
/// serving redirects either way.
pub fn spawn_ui(launch: &LaunchCommand) -> Option<Child> {
    match launch.command().spawn() {
        Ok(child) => {
            info!(
                program = %launch.program.display(),
                args = ?launch.args,
                pid = ?child.id(),
                ui_port = launch.ui_port,
                "UI process started"
            );
            Some(child)
        }
        Err(e) => {
            error!(
                program = %launch.program.display(),
                error = %e,
                "Failed to start UI process"
            );
            None
        }
    }
}
