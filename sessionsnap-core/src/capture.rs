//! The window enumerator.
use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::{Result, SnapError};
use crate::models::{SessionSnapshot, WindowHandle, WindowSnapshot, WindowState};
use crate::utils::process_info::ProcessInspector;

/// Collects the user application windows currently on `server`.
///
/// Query failures for a single window leave the affected fields at their
/// defaults. A window manager without a client list yields an empty snapshot.
///
/// # Errors
///
/// Will error if the client list query fails at the connection level.
pub fn capture_windows<S, P, C>(
    server: &S,
    inspector: &mut P,
    config: &C,
) -> Result<SessionSnapshot>
where
    S: DisplayServer,
    P: ProcessInspector,
    C: Config,
{
    let clients = match server.client_list() {
        Ok(Some(clients)) => clients,
        Ok(None) => {
            tracing::warn!("{}", SnapError::EnumerationUnsupported);
            return Ok(SessionSnapshot::new());
        }
        Err(err) => return Err(SnapError::Display(err.to_string())),
    };

    let mut snapshot = SessionSnapshot::new();
    for handle in clients {
        if snapshot.is_full() {
            tracing::debug!("Window limit reached, ignoring the remaining clients.");
            break;
        }
        if let Some(window) = capture_window(server, inspector, config, handle) {
            snapshot.push(window);
        }
    }
    Ok(snapshot)
}

fn capture_window<S, P, C>(
    server: &S,
    inspector: &mut P,
    config: &C,
    handle: WindowHandle,
) -> Option<WindowSnapshot>
where
    S: DisplayServer,
    P: ProcessInspector,
    C: Config,
{
    let pid = or_default(handle, "pid", server.window_pid(handle)).filter(|pid| *pid > 0)?;

    let details = inspector.inspect(pid);
    let program = details.command.first()?;
    if config.is_ignored_process(program) {
        tracing::trace!(window = ?handle, program = %program, "Skipping system process.");
        return None;
    }

    let states = or_default(handle, "state", server.window_states(handle));
    let window = WindowSnapshot {
        handle: Some(handle),
        pid,
        xyhw: or_default(handle, "geometry", server.window_geometry(handle)),
        desktop: or_default(handle, "desktop", server.window_desktop(handle)).unwrap_or(0),
        maximized: WindowState::is_maximized(&states),
        minimized: WindowState::is_minimized(&states),
        title: or_default(handle, "title", server.window_title(handle)).unwrap_or_default(),
        command: details.command,
        exe_path: details.exe_path,
    };
    Some(window.normalized())
}

fn or_default<T: Default, E: std::fmt::Display>(
    handle: WindowHandle,
    what: &str,
    result: std::result::Result<T, E>,
) -> T {
    result.unwrap_or_else(|err| {
        tracing::debug!(window = ?handle, "Unable to read window {what}: {err}");
        T::default()
    })
}
