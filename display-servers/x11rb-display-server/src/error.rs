//! Error handling and reporting for this backend

use thiserror::Error;
use x11rb::errors::{ConnectError, ConnectionError, ReplyError};

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to connect to the X server: {0}")]
    Connect(#[from] ConnectError),
    #[error("Unable to find the root window.")]
    RootWindowNotFound,
    #[error("{0:#x} is not an X11 window id.")]
    InvalidHandle(u64),

    // Errors from x11rb
    #[error("Connection error occured: {0}")]
    ConnectionError(#[from] ConnectionError),

    #[error("Unable to parse reply: {0}")]
    ReplyError(#[from] ReplyError),
}
