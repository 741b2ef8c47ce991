//! Relaunches programs from a saved argument vector.
use std::io;
use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};

use crate::errors::{Result, SnapError};

pub type ChildID = u32;

/// Starts the program behind a saved window.
pub trait Launcher {
    /// Spawns `command` (program followed by its arguments).
    ///
    /// # Errors
    ///
    /// Will error if the command is empty or the program cannot be executed.
    fn launch(&mut self, command: &[String]) -> Result<ChildID>;
}

/// Launches programs in a session of their own so they outlive us and are not
/// hit by signals aimed at our process group.
/// Assumes STDIN/STDERR/STDOUT unwanted.
#[derive(Debug, Default)]
pub struct DetachedLauncher;

impl Launcher for DetachedLauncher {
    fn launch(&mut self, command: &[String]) -> Result<ChildID> {
        let Some((program, args)) = command.split_first() else {
            return Err(SnapError::ProcessLaunch {
                command: String::new(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "empty command line"),
            });
        };
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        // SAFETY: `setsid` is async-signal-safe and touches no memory of the parent.
        unsafe {
            cmd.pre_exec(|| {
                nix::unistd::setsid()?;
                Ok(())
            });
        }
        let child = cmd.spawn().map_err(|source| SnapError::ProcessLaunch {
            command: program.clone(),
            source,
        })?;
        Ok(child.id())
    }
}
