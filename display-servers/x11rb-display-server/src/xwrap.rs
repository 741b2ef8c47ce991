use x11rb::{
    connection::Connection,
    protocol::xproto::{self, ConnectionExt as _},
    rust_connection::RustConnection,
    wrapper::ConnectionExt as _,
};

use crate::error::{Error, Result};
use crate::xatom::AtomCollection;

mod getters;
mod setters;

const MAX_PROPERTY_VALUE_LEN: u32 = 4096;

/// Contains Xserver information and origins.
pub(crate) struct XWrap {
    conn: RustConnection,
    root: xproto::Window,
    pub atoms: AtomCollection,
}

impl XWrap {
    /// Connects to the display named by `$DISPLAY` and interns our atoms.
    ///
    /// # Errors
    ///
    /// Will error if the server is unreachable or has no screen for the
    /// display.
    pub fn connect() -> Result<Self> {
        let (conn, display) = x11rb::connect(None)?;
        let atoms = AtomCollection::new(&conn)?.reply()?;
        let root = conn
            .setup()
            .roots
            .get(display)
            .ok_or(Error::RootWindowNotFound)?
            .root;
        tracing::debug!(root, "Connected to X server.");
        Ok(Self { conn, root, atoms })
    }

    /// Send a xevent to the root window, for the window manager to act on.
    // `XSendEvent`: https://tronche.com/gui/x/xlib/event-handling/XSendEvent.html
    pub fn send_root_xevent(&self, event: &xproto::ClientMessageEvent) -> Result<()> {
        self.conn.send_event(
            false,
            self.root,
            xproto::EventMask::SUBSTRUCTURE_REDIRECT | xproto::EventMask::SUBSTRUCTURE_NOTIFY,
            event,
        )?;
        Ok(())
    }

    /// Wait until the server has processed every request sent so far.
    // `XSync`: https://tronche.com/gui/x/xlib/event-handling/XSync.html
    pub fn sync(&self) -> Result<()> {
        self.conn.sync()?;
        Ok(())
    }

    /// Flush the xserver.
    // `XFlush`: https://tronche.com/gui/x/xlib/event-handling/XFlush.html
    pub fn flush(&self) -> Result<()> {
        self.conn.flush()?;
        Ok(())
    }
}
