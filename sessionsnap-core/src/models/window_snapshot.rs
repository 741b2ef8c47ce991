//! Window Information
use crate::utils::helpers::truncate_chars;

use super::Xyhw;

/// Longest title kept for a window, in characters.
pub const MAX_TITLE_LEN: usize = 255;
/// Most command line arguments kept for a window.
pub const MAX_COMMAND_ARGS: usize = 64;
/// Longest single command line argument kept, in characters.
pub const MAX_ARG_LEN: usize = 511;

/// A backend-agnostic handle to a window.
///
/// Only meaningful for the display server connection it was obtained from,
/// it is never persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub u64);

/// One observed or remembered window.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WindowSnapshot {
    /// Set for windows seen on a live display, `None` once loaded from disk.
    pub handle: Option<WindowHandle>,
    pub pid: u32,
    pub xyhw: Xyhw,
    /// `_NET_WM_DESKTOP`, `-1` for windows shown on every desktop.
    pub desktop: i32,
    pub maximized: bool,
    pub minimized: bool,
    pub title: String,
    /// The argument vector used to relaunch the window's program.
    pub command: Vec<String>,
    pub exe_path: String,
}

impl WindowSnapshot {
    /// Applies the title and command line limits, dropping what overflows.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.title = truncate_chars(&self.title, MAX_TITLE_LEN);
        self.command.truncate(MAX_COMMAND_ARGS);
        for arg in &mut self.command {
            if arg.chars().count() > MAX_ARG_LEN {
                *arg = truncate_chars(arg, MAX_ARG_LEN);
            }
        }
        self
    }

    /// The program the window was started from, if known.
    pub fn program(&self) -> Option<&str> {
        self.command.first().map(String::as_str)
    }
}
