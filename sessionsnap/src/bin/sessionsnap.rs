//! Snapshots the windows of the running X11 session and restores them later.
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sessionsnap::report::{format_restore_report, format_window_list};
use sessionsnap::utils::signals::register_monitor_signals;
use sessionsnap::Config;
use sessionsnap_core::models::DEFAULT_PROFILE;
use sessionsnap_core::{
    capture_windows, DetachedLauncher, DisplayServer, Monitor, MonitorSignals, Profile,
    Restorer, SessionSnapshot, SessionStore, SnapError, SysinfoInspector,
};
use x11rb_display_server::X11rbDisplayServer;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct SessionsnapCli {
    #[command(subcommand)]
    command: SessionsnapCommand,
}

#[derive(Debug, Subcommand)]
enum SessionsnapCommand {
    /// Capture the current windows and save them
    Snapshot {
        /// Name of the session profile
        #[arg(short, long, default_value = DEFAULT_PROFILE)]
        profile: Profile,
    },
    /// Relaunch the programs of a saved session and put their windows back
    Restore {
        #[arg(short, long, default_value = DEFAULT_PROFILE)]
        profile: Profile,
    },
    /// Save the default profile periodically until interrupted.
    /// SIGUSR1 saves immediately.
    Daemon,
    /// List the windows a snapshot would capture
    List,
    /// Exit successfully if the profile has been saved
    Exists {
        #[arg(short, long, default_value = DEFAULT_PROFILE)]
        profile: Profile,
    },
}

fn main() -> ExitCode {
    sessionsnap::utils::log::setup_logging();
    let cli = SessionsnapCli::parse();
    let config = sessionsnap::load();
    let store = SessionStore::from_config(&config);

    match run(cli.command, &config, &store) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: SessionsnapCommand, config: &Config, store: &SessionStore) -> Result<ExitCode> {
    match command {
        SessionsnapCommand::Snapshot { profile } => {
            let snapshot = capture(config)?;
            let path = store.save(&snapshot, &profile)?;
            println!(
                "sessionsnap: saved {} windows to {}",
                snapshot.len(),
                path.display()
            );
        }
        SessionsnapCommand::Restore { profile } => {
            let mut restorer = Restorer::new(config, store, DetachedLauncher);
            let report = restorer.restore::<X11rbDisplayServer>(&profile)?;
            print!("{}", format_restore_report(&report));
        }
        SessionsnapCommand::Daemon => {
            let signals = MonitorSignals::new();
            register_monitor_signals(&signals);
            Monitor::<X11rbDisplayServer, _, _>::new(config, store, SysinfoInspector::new(), signals)
                .run();
        }
        SessionsnapCommand::List => {
            print!("{}", format_window_list(&capture(config)?));
        }
        SessionsnapCommand::Exists { profile } => {
            let exists = store.exists(&profile);
            tracing::debug!(%profile, exists, path = %store.path_for(&profile).display());
            return Ok(if exists {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn capture(config: &Config) -> Result<SessionSnapshot> {
    let server = X11rbDisplayServer::connect()
        .map_err(|err| SnapError::DisplayUnavailable(err.to_string()))?;
    Ok(capture_windows(&server, &mut SysinfoInspector::new(), config)?)
}
