//! Objects (such as window snapshots) shared by capture, storage and restore.
mod profile;
mod session_snapshot;
mod window_snapshot;
mod window_state;
mod xyhw;

pub mod dto;

pub use profile::{Profile, DEFAULT_PROFILE};
pub use session_snapshot::{SessionSnapshot, MAX_WINDOWS};
pub use window_snapshot::{
    WindowHandle, WindowSnapshot, MAX_ARG_LEN, MAX_COMMAND_ARGS, MAX_TITLE_LEN,
};
pub use window_state::WindowState;
pub use xyhw::Xyhw;
