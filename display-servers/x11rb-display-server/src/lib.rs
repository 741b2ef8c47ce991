//! x11rb backend for sessionsnap
use sessionsnap_core::models::{WindowHandle, WindowState, Xyhw};
use sessionsnap_core::DisplayServer;
use x11rb::protocol::xproto;

use crate::xwrap::XWrap;

mod error;
mod xatom;
mod xwrap;

pub use error::Error;

pub struct X11rbDisplayServer {
    xw: XWrap,
}

fn xwindow(handle: WindowHandle) -> Result<xproto::Window, Error> {
    xproto::Window::try_from(handle.0).map_err(|_| Error::InvalidHandle(handle.0))
}

impl DisplayServer for X11rbDisplayServer {
    type Error = Error;

    fn connect() -> Result<Self, Error> {
        Ok(Self {
            xw: XWrap::connect()?,
        })
    }

    fn client_list(&self) -> Result<Option<Vec<WindowHandle>>, Error> {
        Ok(self.xw.get_client_list()?.map(|windows| {
            windows
                .into_iter()
                .map(|w| WindowHandle(w.into()))
                .collect()
        }))
    }

    fn window_pid(&self, window: WindowHandle) -> Result<Option<u32>, Error> {
        self.xw.get_window_pid(xwindow(window)?)
    }

    fn window_title(&self, window: WindowHandle) -> Result<Option<String>, Error> {
        self.xw.get_window_name(xwindow(window)?)
    }

    fn window_geometry(&self, window: WindowHandle) -> Result<Xyhw, Error> {
        self.xw.get_window_geometry(xwindow(window)?)
    }

    fn window_states(&self, window: WindowHandle) -> Result<Vec<WindowState>, Error> {
        self.xw.get_window_states(xwindow(window)?)
    }

    fn window_desktop(&self, window: WindowHandle) -> Result<Option<i32>, Error> {
        self.xw.get_window_desktop(xwindow(window)?)
    }

    fn move_resize_window(&self, window: WindowHandle, xyhw: &Xyhw) -> Result<(), Error> {
        self.xw.set_window_xyhw(xwindow(window)?, xyhw)
    }

    fn request_maximize(&self, window: WindowHandle) -> Result<(), Error> {
        self.xw.request_window_maximized(xwindow(window)?)
    }

    fn sync(&self) -> Result<(), Error> {
        self.xw.sync()
    }

    fn flush(&self) -> Result<(), Error> {
        self.xw.flush()
    }
}
