//! Periodically saves the default profile until asked to stop.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::capture::capture_windows;
use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::{Result, SnapError};
use crate::models::Profile;
use crate::session_store::SessionStore;
use crate::utils::process_info::ProcessInspector;

/// Lower bound of the shutdown poll, a zero poll would spin.
const MIN_POLL_STEP: Duration = Duration::from_millis(10);

/// Requests to a running [`Monitor`], safe to set from a signal handler.
#[derive(Debug, Clone, Default)]
pub struct MonitorSignals {
    shutdown: Arc<AtomicBool>,
    snapshot_now: Arc<AtomicBool>,
}

impl MonitorSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// The monitor saves once more and returns.
    pub fn request_shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    /// The monitor saves as soon as it wakes, without waiting out the interval.
    pub fn trigger_snapshot(&self) {
        self.snapshot_now.store(true, Ordering::SeqCst);
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// The raw flag, for registering with a signal handler.
    pub fn shutdown_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    pub fn snapshot_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.snapshot_now)
    }

    fn take_snapshot_request(&self) -> bool {
        self.snapshot_now.swap(false, Ordering::SeqCst)
    }
}

pub struct Monitor<'a, S, C, P> {
    config: &'a C,
    store: &'a SessionStore,
    inspector: P,
    signals: MonitorSignals,
    connection: Option<S>,
}

impl<'a, S, C, P> Monitor<'a, S, C, P>
where
    S: DisplayServer,
    C: Config,
    P: ProcessInspector,
{
    pub fn new(
        config: &'a C,
        store: &'a SessionStore,
        inspector: P,
        signals: MonitorSignals,
    ) -> Self {
        Self {
            config,
            store,
            inspector,
            signals,
            connection: None,
        }
    }

    /// Saves every interval until shutdown is requested, then saves a final
    /// time. Failed cycles are logged and retried on the next interval.
    pub fn run(mut self) {
        tracing::info!(
            interval = ?self.config.monitor_interval(),
            dir = %self.store.base_dir().display(),
            "Monitoring windows."
        );
        while !self.signals.is_shutdown_requested() {
            self.snapshot_logged();
            self.wait_interval();
        }
        tracing::info!("Shutdown requested, saving a final snapshot.");
        self.snapshot_logged();
    }

    /// One capture-and-save cycle. An empty capture is not saved so that a
    /// transient state cannot replace a good session.
    ///
    /// # Returns
    /// - `Ok(true)` if the session was written
    /// - `Ok(false)` if nothing was captured
    ///
    /// # Errors
    ///
    /// Will error if the display is unreachable or the session cannot be
    /// written.
    pub fn snapshot_once(&mut self) -> Result<bool> {
        let server = match self.connection.take() {
            Some(server) => server,
            None => S::connect().map_err(|e| SnapError::DisplayUnavailable(e.to_string()))?,
        };
        // A failed capture drops the connection, the next cycle reconnects.
        let snapshot = capture_windows(&server, &mut self.inspector, self.config)?;
        self.connection = Some(server);
        if snapshot.is_empty() {
            tracing::info!("No windows captured, keeping the previous session.");
            return Ok(false);
        }
        let path = self.store.save(&snapshot, &Profile::default())?;
        tracing::info!(windows = snapshot.len(), path = %path.display(), "Session saved.");
        Ok(true)
    }

    fn snapshot_logged(&mut self) {
        if let Err(err) = self.snapshot_once() {
            tracing::error!("Snapshot failed: {err}");
        }
    }

    /// How long a single sleep of the wait lasts.
    fn poll_step(&self) -> Duration {
        self.config.shutdown_poll_interval().max(MIN_POLL_STEP)
    }

    fn wait_interval(&mut self) {
        // Measured from the start so huge intervals cannot overflow an `Instant`.
        let started = Instant::now();
        let interval = self.config.monitor_interval();
        let step = self.poll_step();
        loop {
            if self.signals.is_shutdown_requested() {
                return;
            }
            if self.signals.take_snapshot_request() {
                tracing::debug!("Immediate snapshot requested.");
                self.snapshot_logged();
            }
            let elapsed = started.elapsed();
            if elapsed >= interval {
                return;
            }
            thread::sleep(step.min(interval - elapsed));
        }
    }
}
