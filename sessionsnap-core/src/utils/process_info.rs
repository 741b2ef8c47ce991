//! Looks up the command line and binary of a running process.
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};

/// What the process table knows about a window's owner.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessDetails {
    pub command: Vec<String>,
    /// Resolved path of the running binary, empty if unknown.
    pub exe_path: String,
}

pub trait ProcessInspector {
    /// Returns what is known about `pid`. Lookup failures give empty details.
    fn inspect(&mut self, pid: u32) -> ProcessDetails;
}

/// Reads process details through `sysinfo`.
pub struct SysinfoInspector {
    system: System,
}

impl SysinfoInspector {
    #[must_use]
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }
}

impl Default for SysinfoInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessInspector for SysinfoInspector {
    fn inspect(&mut self, pid: u32) -> ProcessDetails {
        let pid = Pid::from_u32(pid);
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing()
                .with_cmd(UpdateKind::Always)
                .with_exe(UpdateKind::Always),
        );
        let Some(process) = self.system.process(pid) else {
            tracing::debug!(?pid, "Process vanished before it could be inspected.");
            return ProcessDetails::default();
        };
        ProcessDetails {
            command: process
                .cmd()
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
            exe_path: process
                .exe()
                .map(|exe| exe.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }
}
