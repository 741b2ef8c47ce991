//! The on-disk shape of a saved session.
//!
//! Every field falls back to its zero value when absent or of the wrong type
//! so that files written by older or foreign versions still load.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{SessionSnapshot, WindowSnapshot, Xyhw};

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StoredSession {
    /// Redundant with `windows.len()`, kept for readers of the file.
    #[serde(deserialize_with = "lenient_int")]
    pub count: usize,
    pub windows: Vec<StoredWindow>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StoredWindow {
    #[serde(deserialize_with = "lenient_int")]
    pub pid: i64,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub exe_path: String,
    #[serde(deserialize_with = "lenient_int")]
    pub x: i32,
    #[serde(deserialize_with = "lenient_int")]
    pub y: i32,
    #[serde(deserialize_with = "lenient_int")]
    pub width: i32,
    #[serde(deserialize_with = "lenient_int")]
    pub height: i32,
    #[serde(deserialize_with = "lenient_int")]
    pub desktop: i32,
    #[serde(deserialize_with = "lenient_int")]
    pub is_maximized: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub is_minimized: i64,
    #[serde(deserialize_with = "lenient_args")]
    pub cmd: Vec<String>,
}

/// Any JSON number, fractions truncated. Other values and numbers out of
/// range read as zero.
#[allow(clippy::cast_possible_truncation)]
fn lenient_int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + Default,
{
    let value = Value::deserialize(deserializer)?;
    let number = value
        .as_i64()
        .or_else(|| value.as_f64().map(|float| float as i64));
    Ok(number
        .and_then(|number| T::try_from(number).ok())
        .unwrap_or_default())
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        _ => Ok(String::new()),
    }
}

/// The string elements of an array, everything else is dropped.
fn lenient_args<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Array(args) => Ok(args
            .into_iter()
            .filter_map(|arg| match arg {
                Value::String(arg) => Some(arg),
                _ => None,
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

impl From<&WindowSnapshot> for StoredWindow {
    fn from(w: &WindowSnapshot) -> Self {
        Self {
            pid: w.pid.into(),
            title: w.title.clone(),
            exe_path: w.exe_path.clone(),
            x: w.xyhw.x,
            y: w.xyhw.y,
            width: w.xyhw.w,
            height: w.xyhw.h,
            desktop: w.desktop,
            is_maximized: w.maximized.into(),
            is_minimized: w.minimized.into(),
            cmd: w.command.clone(),
        }
    }
}

impl From<StoredWindow> for WindowSnapshot {
    fn from(w: StoredWindow) -> Self {
        Self {
            handle: None,
            pid: u32::try_from(w.pid).unwrap_or(0),
            xyhw: Xyhw::new(w.x, w.y, w.width, w.height),
            desktop: w.desktop,
            maximized: w.is_maximized != 0,
            minimized: w.is_minimized != 0,
            title: w.title,
            command: w.cmd,
            exe_path: w.exe_path,
        }
        .normalized()
    }
}

impl From<&SessionSnapshot> for StoredSession {
    fn from(snapshot: &SessionSnapshot) -> Self {
        let windows: Vec<StoredWindow> = snapshot.iter().map(StoredWindow::from).collect();
        Self {
            count: windows.len(),
            windows,
        }
    }
}

impl From<StoredSession> for SessionSnapshot {
    fn from(stored: StoredSession) -> Self {
        stored.windows.into_iter().map(WindowSnapshot::from).collect()
    }
}
