use x11rb::atom_manager;

atom_manager! {
    /// The EWMH atoms read and written by this backend.
    pub AtomCollection:

    /// A handle to a response from the X11 server.
    AtomCollectionCookie {
        NetClientList: b"_NET_CLIENT_LIST" as &[u8],
        NetWMName: b"_NET_WM_NAME",
        NetWMPid: b"_NET_WM_PID",
        NetWMDesktop: b"_NET_WM_DESKTOP",

        NetWMState: b"_NET_WM_STATE",
        NetWMStateMaximizedVert: b"_NET_WM_STATE_MAXIMIZED_VERT",
        NetWMStateMaximizedHorz: b"_NET_WM_STATE_MAXIMIZED_HORZ",
        NetWMStateHidden: b"_NET_WM_STATE_HIDDEN",

        UTF8String: b"UTF8_STRING",
    }
}

/// `_NET_WM_STATE` client message actions.
pub const NET_WM_STATE_ADD: u32 = 1;

/// Source indication of a request coming from a normal application.
pub const SOURCE_INDICATION_APPLICATION: u32 = 1;
