#[cfg(test)]
pub(crate) mod mock_display_server;

use crate::models::{WindowHandle, WindowState, Xyhw};

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// The query and control surface the core needs from a windowing system.
///
/// Implementations only ever read window properties or ask the window
/// manager to move, resize or maximize; nothing is closed or killed.
pub trait DisplayServer: Sized {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Opens a connection to the display named by the environment.
    ///
    /// # Errors
    ///
    /// Will error if no display server can be reached.
    fn connect() -> Result<Self, Self::Error>;

    /// The managed top-level windows in the window manager's order.
    ///
    /// `Ok(None)` means the window manager does not publish a client list.
    ///
    /// # Errors
    ///
    /// Will error if the connection itself fails.
    fn client_list(&self) -> Result<Option<Vec<WindowHandle>>, Self::Error>;

    fn window_pid(&self, window: WindowHandle) -> Result<Option<u32>, Self::Error>;

    fn window_title(&self, window: WindowHandle) -> Result<Option<String>, Self::Error>;

    /// Position relative to the root window and size.
    fn window_geometry(&self, window: WindowHandle) -> Result<Xyhw, Self::Error>;

    fn window_states(&self, window: WindowHandle) -> Result<Vec<WindowState>, Self::Error>;

    /// `-1` for windows shown on every desktop.
    fn window_desktop(&self, window: WindowHandle) -> Result<Option<i32>, Self::Error>;

    fn move_resize_window(&self, window: WindowHandle, xyhw: &Xyhw) -> Result<(), Self::Error>;

    /// Asks the window manager to maximize `window` along both axes.
    fn request_maximize(&self, window: WindowHandle) -> Result<(), Self::Error>;

    /// Round trip to the server so that windows created since the last
    /// request become visible.
    fn sync(&self) -> Result<(), Self::Error>;

    fn flush(&self) -> Result<(), Self::Error>;
}
