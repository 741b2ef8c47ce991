//! Capture, store and restore the windows of a desktop session.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
pub mod capture;
pub mod config;
pub mod display_servers;
pub mod errors;
pub mod models;
pub mod monitor;
pub mod restore;
pub mod session_store;
pub mod utils;

pub use capture::capture_windows;
pub use config::Config;
pub use display_servers::DisplayServer;
pub use errors::{Result, SnapError};
pub use models::{Profile, SessionSnapshot, WindowHandle, WindowSnapshot, WindowState, Xyhw};
pub use monitor::{Monitor, MonitorSignals};
pub use restore::{RestoreReport, RestoreState, Restorer};
pub use session_store::SessionStore;
pub use utils::child_process::{DetachedLauncher, Launcher};
pub use utils::process_info::{ProcessDetails, ProcessInspector, SysinfoInspector};
