use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;

use thiserror::Error;

use super::DisplayServer;
use crate::errors::{Result, SnapError};
use crate::models::{WindowHandle, WindowState, Xyhw};
use crate::utils::child_process::{ChildID, Launcher};
use crate::utils::process_info::{ProcessDetails, ProcessInspector};

thread_local! {
    static NEXT_CONNECTION: RefCell<Option<MockDisplayServer>> = const { RefCell::new(None) };
}

#[derive(Debug, Error)]
pub enum MockError {
    #[error("no mock display installed")]
    NoDisplay,
    #[error("mock query failure")]
    Query,
}

#[derive(Debug, Clone, Default)]
pub struct MockWindow {
    pub handle: WindowHandle,
    pub pid: Option<u32>,
    pub title: Option<String>,
    pub xyhw: Xyhw,
    pub states: Vec<WindowState>,
    pub desktop: Option<i32>,
}

impl MockWindow {
    pub fn new(id: u64, pid: u32, title: &str) -> Self {
        Self {
            handle: WindowHandle(id),
            pid: Some(pid),
            title: Some(title.to_owned()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockAction {
    MoveResize(WindowHandle, Xyhw),
    Maximize(WindowHandle),
}

/// A scripted display: a fixed client list, windows that show up after a
/// number of syncs, and a log of every move/resize or maximize request.
#[derive(Debug)]
pub struct MockDisplayServer {
    pub supports_client_list: bool,
    /// Makes `client_list` fail as if the connection broke.
    pub broken: bool,
    pub windows: RefCell<Vec<MockWindow>>,
    /// Windows mapped once `sync` has been called this many times.
    pub pending: RefCell<Vec<(usize, MockWindow)>>,
    pub actions: RefCell<Vec<MockAction>>,
    pub syncs: Cell<usize>,
}

impl Default for MockDisplayServer {
    fn default() -> Self {
        Self {
            supports_client_list: true,
            broken: false,
            windows: RefCell::default(),
            pending: RefCell::default(),
            actions: RefCell::default(),
            syncs: Cell::new(0),
        }
    }
}

impl MockDisplayServer {
    pub fn with_windows(windows: Vec<MockWindow>) -> Self {
        Self {
            windows: RefCell::new(windows),
            ..Self::default()
        }
    }

    /// Makes the next `connect` on this thread return `self`.
    pub fn install(self) {
        NEXT_CONNECTION.with(|next| *next.borrow_mut() = Some(self));
    }

    pub fn actions(&self) -> Vec<MockAction> {
        self.actions.borrow().clone()
    }

    fn window<T>(&self, handle: WindowHandle, f: impl FnOnce(&MockWindow) -> T) -> Option<T> {
        self.windows
            .borrow()
            .iter()
            .find(|w| w.handle == handle)
            .map(f)
    }
}

impl DisplayServer for MockDisplayServer {
    type Error = MockError;

    fn connect() -> std::result::Result<Self, MockError> {
        NEXT_CONNECTION
            .with(|next| next.borrow_mut().take())
            .ok_or(MockError::NoDisplay)
    }

    fn client_list(&self) -> std::result::Result<Option<Vec<WindowHandle>>, MockError> {
        if self.broken {
            return Err(MockError::Query);
        }
        if !self.supports_client_list {
            return Ok(None);
        }
        Ok(Some(self.windows.borrow().iter().map(|w| w.handle).collect()))
    }

    fn window_pid(&self, window: WindowHandle) -> std::result::Result<Option<u32>, MockError> {
        self.window(window, |w| w.pid).ok_or(MockError::Query)
    }

    fn window_title(&self, window: WindowHandle) -> std::result::Result<Option<String>, MockError> {
        self.window(window, |w| w.title.clone())
            .ok_or(MockError::Query)
    }

    fn window_geometry(&self, window: WindowHandle) -> std::result::Result<Xyhw, MockError> {
        self.window(window, |w| w.xyhw).ok_or(MockError::Query)
    }

    fn window_states(
        &self,
        window: WindowHandle,
    ) -> std::result::Result<Vec<WindowState>, MockError> {
        self.window(window, |w| w.states.clone())
            .ok_or(MockError::Query)
    }

    fn window_desktop(&self, window: WindowHandle) -> std::result::Result<Option<i32>, MockError> {
        self.window(window, |w| w.desktop).ok_or(MockError::Query)
    }

    fn move_resize_window(
        &self,
        window: WindowHandle,
        xyhw: &Xyhw,
    ) -> std::result::Result<(), MockError> {
        self.actions
            .borrow_mut()
            .push(MockAction::MoveResize(window, *xyhw));
        Ok(())
    }

    fn request_maximize(&self, window: WindowHandle) -> std::result::Result<(), MockError> {
        self.actions.borrow_mut().push(MockAction::Maximize(window));
        Ok(())
    }

    fn sync(&self) -> std::result::Result<(), MockError> {
        let syncs = self.syncs.get() + 1;
        self.syncs.set(syncs);
        let mut pending = self.pending.borrow_mut();
        let (ready, waiting): (Vec<_>, Vec<_>) =
            pending.drain(..).partition(|(after, _)| *after <= syncs);
        *pending = waiting;
        self.windows
            .borrow_mut()
            .extend(ready.into_iter().map(|(_, w)| w));
        Ok(())
    }

    fn flush(&self) -> std::result::Result<(), MockError> {
        Ok(())
    }
}

/// A process table with fixed contents.
#[derive(Debug, Default)]
pub struct MockInspector {
    pub processes: HashMap<u32, ProcessDetails>,
}

impl MockInspector {
    pub fn with(mut self, pid: u32, command: &[&str]) -> Self {
        self.processes.insert(
            pid,
            ProcessDetails {
                command: command.iter().map(ToString::to_string).collect(),
                exe_path: command.first().map(ToString::to_string).unwrap_or_default(),
            },
        );
        self
    }
}

impl ProcessInspector for MockInspector {
    fn inspect(&mut self, pid: u32) -> ProcessDetails {
        self.processes.get(&pid).cloned().unwrap_or_default()
    }
}

/// Records launches instead of spawning anything. Programs under
/// `/nonexistent` fail to launch.
#[derive(Debug, Default)]
pub struct MockLauncher {
    pub launched: Vec<Vec<String>>,
}

impl Launcher for MockLauncher {
    fn launch(&mut self, command: &[String]) -> Result<ChildID> {
        self.launched.push(command.to_vec());
        match command.first() {
            Some(program) if !program.starts_with("/nonexistent") => {
                Ok(1000 + self.launched.len() as ChildID)
            }
            program => Err(SnapError::ProcessLaunch {
                command: program.cloned().unwrap_or_default(),
                source: io::Error::from(io::ErrorKind::NotFound),
            }),
        }
    }
}
