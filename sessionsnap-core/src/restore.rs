//! The restore engine: relaunch saved programs and put their windows back.
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::{Result, SnapError};
use crate::models::{Profile, SessionSnapshot, WindowHandle, WindowSnapshot};
use crate::session_store::SessionStore;
use crate::utils::child_process::Launcher;
use crate::utils::helpers::truncate_chars;

/// Where a single saved window ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreState {
    PendingLaunch,
    /// Launched but not (yet) matched. Final for windows without a title.
    Launched,
    Matched(WindowHandle),
    Repositioned(WindowHandle),
    Maximized(WindowHandle),
    LaunchFailed(String),
    TimedOut,
}

impl RestoreState {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::LaunchFailed(_) | Self::TimedOut)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowOutcome {
    pub title: String,
    pub command: Vec<String>,
    pub state: RestoreState,
}

/// Per-window results of a restore, in stored order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreReport {
    pub windows: Vec<WindowOutcome>,
}

impl RestoreReport {
    pub fn failures(&self) -> impl Iterator<Item = &WindowOutcome> {
        self.windows.iter().filter(|w| w.state.is_failure())
    }

    pub fn count_where(&self, f: impl Fn(&RestoreState) -> bool) -> usize {
        self.windows.iter().filter(|w| f(&w.state)).count()
    }
}

pub struct Restorer<'a, C, L> {
    config: &'a C,
    store: &'a SessionStore,
    launcher: L,
}

impl<'a, C: Config, L: Launcher> Restorer<'a, C, L> {
    pub fn new(config: &'a C, store: &'a SessionStore, launcher: L) -> Self {
        Self {
            config,
            store,
            launcher,
        }
    }

    /// Relaunches everything saved under `profile`.
    ///
    /// Windows that fail to launch or to reappear are reported, not returned
    /// as errors.
    ///
    /// # Errors
    ///
    /// Will error if the session cannot be loaded or no display is reachable.
    pub fn restore<S: DisplayServer>(&mut self, profile: &Profile) -> Result<RestoreReport> {
        let snapshot = self.store.load(profile)?;
        if snapshot.is_empty() {
            tracing::info!(%profile, "Saved session is empty, nothing to restore.");
            return Ok(RestoreReport::default());
        }
        let server = S::connect().map_err(|e| SnapError::DisplayUnavailable(e.to_string()))?;
        tracing::info!(%profile, windows = snapshot.len(), "Restoring session.");
        Ok(self.restore_snapshot(&server, &snapshot))
    }

    pub fn restore_snapshot<S: DisplayServer>(
        &mut self,
        server: &S,
        snapshot: &SessionSnapshot,
    ) -> RestoreReport {
        let mut windows: Vec<WindowOutcome> = snapshot
            .iter()
            .map(|w| WindowOutcome {
                title: w.title.clone(),
                command: w.command.clone(),
                state: RestoreState::PendingLaunch,
            })
            .collect();

        for (i, (saved, outcome)) in snapshot.iter().zip(&mut windows).enumerate() {
            if i > 0 {
                thread::sleep(self.config.launch_delay());
            }
            outcome.state = self.launch(saved);
        }

        thread::sleep(self.config.settle_delay());

        for (saved, outcome) in snapshot.iter().zip(&mut windows) {
            if outcome.state != RestoreState::Launched || saved.title.is_empty() {
                continue;
            }
            outcome.state = match self.wait_for_window(server, &saved.title) {
                Some(handle) => place_window(server, handle, saved),
                None => {
                    tracing::warn!(
                        "{}",
                        SnapError::WindowMatchTimeout {
                            title: saved.title.clone()
                        }
                    );
                    RestoreState::TimedOut
                }
            };
        }

        if let Err(err) = server.flush() {
            tracing::warn!("Unable to flush display requests: {err}");
        }
        RestoreReport { windows }
    }

    fn launch(&mut self, saved: &WindowSnapshot) -> RestoreState {
        match self.launcher.launch(&saved.command) {
            Ok(pid) => {
                tracing::debug!(pid, command = ?saved.command, "Launched.");
                RestoreState::Launched
            }
            Err(err) => {
                tracing::warn!("{err}");
                RestoreState::LaunchFailed(err.to_string())
            }
        }
    }

    /// Polls the client list until a window whose title contains the saved
    /// title's prefix shows up, or the match timeout passes.
    fn wait_for_window<S: DisplayServer>(&self, server: &S, title: &str) -> Option<WindowHandle> {
        let needle = truncate_chars(title, self.config.title_match_len());
        let interval = self.config.match_poll_interval();
        for _ in 0..poll_attempts(self.config.match_timeout(), interval) {
            thread::sleep(interval);
            if let Err(err) = server.sync() {
                tracing::debug!("Sync failed while waiting for {needle:?}: {err}");
            }
            if let Some(handle) = find_by_title(server, &needle) {
                return Some(handle);
            }
        }
        None
    }
}

/// Number of polls that fit into `timeout`, at least one.
fn poll_attempts(timeout: Duration, interval: Duration) -> u128 {
    timeout
        .as_nanos()
        .checked_div(interval.as_nanos())
        .unwrap_or(1)
        .max(1)
}

/// First listed window whose title contains `needle`.
fn find_by_title<S: DisplayServer>(server: &S, needle: &str) -> Option<WindowHandle> {
    let clients = server.client_list().ok().flatten()?;
    clients.into_iter().find(|&handle| {
        server
            .window_title(handle)
            .ok()
            .flatten()
            .is_some_and(|title| title.contains(needle))
    })
}

fn place_window<S: DisplayServer>(
    server: &S,
    handle: WindowHandle,
    saved: &WindowSnapshot,
) -> RestoreState {
    let (result, placed) = if saved.maximized {
        // The window manager picks the maximized geometry.
        (server.request_maximize(handle), RestoreState::Maximized(handle))
    } else {
        (
            server.move_resize_window(handle, &saved.xyhw),
            RestoreState::Repositioned(handle),
        )
    };
    match result {
        Ok(()) => {
            tracing::debug!(window = ?handle, title = %saved.title, "Window placed.");
            placed
        }
        Err(err) => {
            tracing::warn!(window = ?handle, "Unable to place {:?}: {err}", saved.title);
            RestoreState::Matched(handle)
        }
    }
}
