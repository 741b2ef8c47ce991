//! Tunables shared by capture, restore and the monitor loop.
use std::path::PathBuf;
use std::time::Duration;

/// How often the monitor saves the default profile.
pub const DEFAULT_MONITOR_INTERVAL: Duration = Duration::from_secs(60);
/// How often a sleeping monitor checks whether it was asked to stop.
pub const DEFAULT_SHUTDOWN_POLL_INTERVAL: Duration = Duration::from_secs(1);
/// Pause between two launches during a restore.
pub const DEFAULT_LAUNCH_DELAY: Duration = Duration::from_millis(300);
/// Pause after the last launch before windows are matched.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(2);
pub const DEFAULT_MATCH_POLL_INTERVAL: Duration = Duration::from_millis(500);
pub const DEFAULT_MATCH_TIMEOUT: Duration = Duration::from_secs(5);
/// Stored titles are compared by this many leading characters, window
/// managers and applications like to append suffixes.
pub const DEFAULT_TITLE_MATCH_LEN: usize = 63;

/// Programs that are part of the desktop itself rather than user applications.
pub const DEFAULT_IGNORED_PROCESSES: &[&str] = &[
    "systemd",
    "dbus",
    "Xorg",
    "xfce4-session",
    "xfwm4",
    "xfdesktop",
    "xfce4-panel",
    "pulseaudio",
    "pipewire",
    "bash",
    "sh",
    "zsh",
    "fish",
];

pub trait Config {
    fn monitor_interval(&self) -> Duration;

    fn shutdown_poll_interval(&self) -> Duration {
        DEFAULT_SHUTDOWN_POLL_INTERVAL
    }

    fn launch_delay(&self) -> Duration;

    fn settle_delay(&self) -> Duration;

    fn match_poll_interval(&self) -> Duration;

    fn match_timeout(&self) -> Duration;

    fn title_match_len(&self) -> usize;

    /// Substrings which, found in the first argument of a command line, mark
    /// the window's process as a system process.
    fn ignored_processes(&self) -> &[String];

    /// Overrides the directory sessions are stored in.
    fn session_dir(&self) -> Option<PathBuf>;

    /// Returns true if `program` (the first argument of a command line)
    /// belongs to the deny-list.
    fn is_ignored_process(&self, program: &str) -> bool {
        self.ignored_processes()
            .iter()
            .any(|ignored| program.contains(ignored.as_str()))
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    /// A config without any delays so tests never sleep.
    #[derive(Debug, Clone)]
    pub struct TestConfig {
        pub ignored: Vec<String>,
        pub session_dir: Option<PathBuf>,
        pub title_match_len: usize,
        pub monitor_interval: Duration,
        pub shutdown_poll_interval: Duration,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                ignored: DEFAULT_IGNORED_PROCESSES
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
                session_dir: None,
                title_match_len: DEFAULT_TITLE_MATCH_LEN,
                monitor_interval: Duration::ZERO,
                shutdown_poll_interval: Duration::ZERO,
            }
        }
    }

    impl Config for TestConfig {
        fn monitor_interval(&self) -> Duration {
            self.monitor_interval
        }

        fn shutdown_poll_interval(&self) -> Duration {
            self.shutdown_poll_interval
        }

        fn launch_delay(&self) -> Duration {
            Duration::ZERO
        }

        fn settle_delay(&self) -> Duration {
            Duration::ZERO
        }

        fn match_poll_interval(&self) -> Duration {
            Duration::ZERO
        }

        fn match_timeout(&self) -> Duration {
            Duration::ZERO
        }

        fn title_match_len(&self) -> usize {
            self.title_match_len
        }

        fn ignored_processes(&self) -> &[String] {
            &self.ignored
        }

        fn session_dir(&self) -> Option<PathBuf> {
            self.session_dir.clone()
        }
    }

    #[test]
    fn shells_and_desktop_daemons_are_ignored() {
        let config = TestConfig::default();
        assert!(config.is_ignored_process("bash"));
        assert!(config.is_ignored_process("/usr/bin/zsh"));
        assert!(config.is_ignored_process("/usr/bin/pipewire"));
        assert!(config.is_ignored_process("xfce4-panel"));
        assert!(!config.is_ignored_process("firefox"));
        assert!(!config.is_ignored_process("/usr/lib/gimp/gimp"));
    }

    #[test]
    fn empty_deny_list_ignores_nothing() {
        let config = TestConfig {
            ignored: vec![],
            ..TestConfig::default()
        };
        assert!(!config.is_ignored_process("bash"));
    }
}
