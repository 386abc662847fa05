//! Launching files with the operating system's default handler
//!
//! Launches are fire-and-forget: the handler process is spawned and never
//! waited on, so only a failure to start it is reported.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::info;

use crate::error::{self, Result};

/// Something that can hand a path to its handler application
pub trait Launcher {
    /// Start the handler for `path` without waiting for it
    fn launch(&self, path: &Path) -> Result<()>;
}

/// Launcher backed by the platform's "open" command
///
/// - Windows: `cmd /c start "" <path>`
/// - macOS: `open <path>`
/// - Others: `xdg-open <path>`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    fn command(path: &Path) -> Command {
        #[cfg(target_os = "windows")]
        {
            // `start` is a cmd.exe builtin and takes the window title first
            let mut cmd = Command::new("cmd");
            cmd.args(["/c", "start", ""]).arg(path);
            cmd
        }

        #[cfg(target_os = "macos")]
        {
            let mut cmd = Command::new("open");
            cmd.arg(path);
            cmd
        }

        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(path);
            cmd
        }
    }
}

impl Launcher for SystemLauncher {
    fn launch(&self, path: &Path) -> Result<()> {
        Self::command(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| error::convert::launch_failed(path, e))?;

        info!("Launched handler for {}", path.display());
        Ok(())
    }
}
