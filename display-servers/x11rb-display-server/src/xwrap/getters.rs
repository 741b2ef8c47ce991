//! `XWrap` getters.
use sessionsnap_core::models::{WindowState, Xyhw};
use x11rb::protocol::xproto::{self, ConnectionExt as _};

use super::{XWrap, MAX_PROPERTY_VALUE_LEN};
use crate::error::Result;

/// `_NET_WM_DESKTOP` value of windows shown on all desktops.
const ALL_DESKTOPS: u32 = 0xFFFF_FFFF;

impl XWrap {
    // Public functions

    /// Returns the `_NET_CLIENT_LIST` of the root window, `None` when the
    /// window manager does not set it.
    pub fn get_client_list(&self) -> Result<Option<Vec<xproto::Window>>> {
        let reply = xproto::get_property(
            &self.conn,
            false,
            self.root,
            self.atoms.NetClientList,
            xproto::AtomEnum::WINDOW,
            0,
            u32::MAX,
        )?
        .reply()?;
        if reply.type_ == x11rb::NONE {
            return Ok(None);
        }
        Ok(Some(reply.value32().map(Iterator::collect).unwrap_or_default()))
    }

    /// Returns a windows root relative position and its size.
    pub fn get_window_geometry(&self, window: xproto::Window) -> Result<Xyhw> {
        let geo = self.conn.get_geometry(window)?.reply()?;
        // Reparenting window managers nest clients inside their frames.
        let origin = self
            .conn
            .translate_coordinates(window, self.root, 0, 0)?
            .reply()?;
        Ok(Xyhw::new(
            origin.dst_x.into(),
            origin.dst_y.into(),
            geo.width.into(),
            geo.height.into(),
        ))
    }

    /// Returns a windows name, preferring `_NET_WM_NAME`.
    pub fn get_window_name(&self, window: xproto::Window) -> Result<Option<String>> {
        let value = self.get_text_prop(window, self.atoms.NetWMName, self.atoms.UTF8String)?;
        match text_value(&value) {
            Some(name) => Ok(Some(name)),
            // fallback to legacy name
            None => self.get_window_legacy_name(window),
        }
    }

    /// Returns a `WM_NAME` (not `_NET`windows name).
    pub fn get_window_legacy_name(&self, window: xproto::Window) -> Result<Option<String>> {
        let value = self.get_text_prop(
            window,
            xproto::AtomEnum::WM_NAME.into(),
            xproto::AtomEnum::ANY.into(),
        )?;
        Ok(text_value(&value))
    }

    /// Returns a windows `_NET_WM_PID`.
    pub fn get_window_pid(&self, window: xproto::Window) -> Result<Option<u32>> {
        self.get_cardinal(window, self.atoms.NetWMPid)
    }

    /// Returns a windows `_NET_WM_DESKTOP`, `-1` meaning every desktop.
    pub fn get_window_desktop(&self, window: xproto::Window) -> Result<Option<i32>> {
        Ok(self
            .get_cardinal(window, self.atoms.NetWMDesktop)?
            .and_then(desktop_index))
    }

    /// Returns the states of a window that a snapshot records.
    pub fn get_window_states(&self, window: xproto::Window) -> Result<Vec<WindowState>> {
        Ok(self
            .get_window_states_atoms(window)?
            .iter()
            .filter_map(|a| match a {
                x if x == &self.atoms.NetWMStateMaximizedVert => Some(WindowState::MaximizedVert),
                x if x == &self.atoms.NetWMStateMaximizedHorz => Some(WindowState::MaximizedHorz),
                x if x == &self.atoms.NetWMStateHidden => Some(WindowState::Hidden),
                _ => None,
            })
            .collect())
    }

    /// Returns the atoms of a windows `_NET_WM_STATE`.
    pub fn get_window_states_atoms(&self, window: xproto::Window) -> Result<Vec<xproto::Atom>> {
        let reply = xproto::get_property(
            &self.conn,
            false,
            window,
            self.atoms.NetWMState,
            xproto::AtomEnum::ATOM,
            0,
            MAX_PROPERTY_VALUE_LEN / 4,
        )?
        .reply()?;

        Ok(reply.value32().map(Iterator::collect).unwrap_or_default())
    }

    // Internal functions

    /// Returns the first value of a cardinal property of a window.
    fn get_cardinal(&self, window: xproto::Window, property: xproto::Atom) -> Result<Option<u32>> {
        let reply = xproto::get_property(
            &self.conn,
            false,
            window,
            property,
            xproto::AtomEnum::CARDINAL,
            0,
            1,
        )?
        .reply()?;
        Ok(reply.value32().and_then(|mut values| values.next()))
    }

    /// Returns the raw bytes of a text property for a window.
    fn get_text_prop(
        &self,
        window: xproto::Window,
        atom: xproto::Atom,
        r#type: xproto::Atom,
    ) -> Result<Vec<u8>> {
        let prop = xproto::get_property(
            &self.conn,
            false,
            window,
            atom,
            r#type,
            0,
            MAX_PROPERTY_VALUE_LEN,
        )?
        .reply()?;
        Ok(prop.value)
    }
}

/// Clients do set malformed names, those still make usable titles.
fn text_value(value: &[u8]) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    Some(String::from_utf8_lossy(value).into_owned())
}

fn desktop_index(desktop: u32) -> Option<i32> {
    if desktop == ALL_DESKTOPS {
        return Some(-1);
    }
    i32::try_from(desktop).ok()
}
