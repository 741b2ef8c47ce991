use sessionsnap_core::MonitorSignals;
use signal_hook::consts::signal::{SIGINT, SIGTERM, SIGUSR1};

/// Routes SIGINT and SIGTERM to a monitor shutdown and SIGUSR1 to an
/// immediate snapshot. The handlers only set flags, the monitor does the work.
pub fn register_monitor_signals(signals: &MonitorSignals) {
    for signal in [SIGINT, SIGTERM] {
        _ = signal_hook::flag::register(signal, signals.shutdown_flag()).map_err(|err| {
            tracing::error!("Cannot register shutdown handler for signal {signal}: {err:?}");
        });
    }
    _ = signal_hook::flag::register(SIGUSR1, signals.snapshot_flag())
        .map_err(|err| tracing::error!("Cannot register SIGUSR1 signal handler: {err:?}"));
}
