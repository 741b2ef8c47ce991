//! `XWrap` setters.
use sessionsnap_core::models::Xyhw;
use x11rb::protocol::xproto::{self, ConnectionExt as _};

use super::XWrap;
use crate::error::Result;
use crate::xatom::{NET_WM_STATE_ADD, SOURCE_INDICATION_APPLICATION};

impl XWrap {
    /// Moves and resizes a window in one request.
    // `XMoveResizeWindow`: https://tronche.com/gui/x/xlib/window/XMoveResizeWindow.html
    pub fn set_window_xyhw(&self, window: xproto::Window, xyhw: &Xyhw) -> Result<()> {
        let (width, height) = xyhw.size();
        let changes = xproto::ConfigureWindowAux::new()
            .x(xyhw.x)
            .y(xyhw.y)
            .width(width)
            .height(height);
        self.set_window_config(window, &changes)
    }

    /// Sets a windows configuration.
    pub fn set_window_config(
        &self,
        window: xproto::Window,
        window_changes: &xproto::ConfigureWindowAux,
    ) -> Result<()> {
        self.conn.configure_window(window, window_changes)?;
        Ok(())
    }

    /// Asks the window manager to add both maximized states to a window.
    pub fn request_window_maximized(&self, window: xproto::Window) -> Result<()> {
        let event = xproto::ClientMessageEvent::new(
            32,
            window,
            self.atoms.NetWMState,
            [
                NET_WM_STATE_ADD,
                self.atoms.NetWMStateMaximizedVert,
                self.atoms.NetWMStateMaximizedHorz,
                SOURCE_INDICATION_APPLICATION,
                0,
            ],
        );
        self.send_root_xevent(&event)
    }
}
