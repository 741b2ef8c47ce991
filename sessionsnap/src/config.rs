use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use sessionsnap_core::config::{
    DEFAULT_IGNORED_PROCESSES, DEFAULT_LAUNCH_DELAY, DEFAULT_MATCH_POLL_INTERVAL,
    DEFAULT_MATCH_TIMEOUT, DEFAULT_MONITOR_INTERVAL, DEFAULT_SETTLE_DELAY,
    DEFAULT_SHUTDOWN_POLL_INTERVAL, DEFAULT_TITLE_MATCH_LEN,
};
use xdg::BaseDirectories;

const CONFIG_FILE: &str = "config.toml";

/// User settings, read from `$XDG_CONFIG_HOME/sessionsnap/config.toml`.
///
/// Every field is optional in the file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub monitor_interval_secs: u64,
    pub shutdown_poll_interval_ms: u64,
    pub launch_delay_ms: u64,
    pub settle_delay_ms: u64,
    pub match_poll_interval_ms: u64,
    pub match_timeout_ms: u64,
    pub title_match_len: usize,
    pub ignored_processes: Vec<String>,
    /// Where sessions are stored, `~` is expanded.
    pub session_dir: Option<String>,
}

fn millis(duration: Duration) -> u64 {
    duration.as_millis().try_into().unwrap_or(u64::MAX)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            monitor_interval_secs: DEFAULT_MONITOR_INTERVAL.as_secs(),
            shutdown_poll_interval_ms: millis(DEFAULT_SHUTDOWN_POLL_INTERVAL),
            launch_delay_ms: millis(DEFAULT_LAUNCH_DELAY),
            settle_delay_ms: millis(DEFAULT_SETTLE_DELAY),
            match_poll_interval_ms: millis(DEFAULT_MATCH_POLL_INTERVAL),
            match_timeout_ms: millis(DEFAULT_MATCH_TIMEOUT),
            title_match_len: DEFAULT_TITLE_MATCH_LEN,
            ignored_processes: DEFAULT_IGNORED_PROCESSES
                .iter()
                .map(ToString::to_string)
                .collect(),
            session_dir: None,
        }
    }
}

/// Loads the config file, falling back to the defaults if it is missing or
/// broken.
#[must_use]
pub fn load() -> Config {
    load_from_file()
        .map_err(|err| tracing::error!("Unable to load config, using defaults: {err:#}"))
        .unwrap_or_default()
}

/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist or if
/// config.toml cannot be read (access rights, malformed file, etc.).
fn load_from_file() -> Result<Config> {
    let path = BaseDirectories::with_prefix("sessionsnap")?;
    match path.find_config_file(CONFIG_FILE) {
        Some(config_filename) => load_from_path(&config_filename),
        None => {
            tracing::debug!("No {CONFIG_FILE} found, using defaults.");
            Ok(Config::default())
        }
    }
}

/// # Errors
///
/// Will error if the file cannot be read or is not a valid config.
pub fn load_from_path(path: &Path) -> Result<Config> {
    tracing::debug!("Loading config file: {}", path.display());
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

impl sessionsnap_core::Config for Config {
    fn monitor_interval(&self) -> Duration {
        Duration::from_secs(self.monitor_interval_secs)
    }

    fn shutdown_poll_interval(&self) -> Duration {
        Duration::from_millis(self.shutdown_poll_interval_ms)
    }

    fn launch_delay(&self) -> Duration {
        Duration::from_millis(self.launch_delay_ms)
    }

    fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    fn match_poll_interval(&self) -> Duration {
        Duration::from_millis(self.match_poll_interval_ms)
    }

    fn match_timeout(&self) -> Duration {
        Duration::from_millis(self.match_timeout_ms)
    }

    fn title_match_len(&self) -> usize {
        self.title_match_len
    }

    fn ignored_processes(&self) -> &[String] {
        &self.ignored_processes
    }

    fn session_dir(&self) -> Option<PathBuf> {
        self.session_dir
            .as_deref()
            .map(|dir| PathBuf::from(shellexpand::tilde(dir).into_owned()))
    }
}
