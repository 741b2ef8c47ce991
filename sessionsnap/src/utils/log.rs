use std::env;

use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, fmt, layer::SubscriberExt, EnvFilter};

#[cfg(feature = "journald")]
mod journald;

/// Read first for the log filter, `RUST_LOG` is the fallback.
pub const LOG_ENV: &str = "SESSIONSNAP_LOG";

/// Installs the global subscriber. Logs go to stderr, stdout is kept for
/// command output.
pub fn setup_logging() {
    let level = env::var(LOG_ENV)
        .or_else(|_| env::var(EnvFilter::DEFAULT_ENV))
        .unwrap_or_default();
    let (subscriber, parse_err) = parse_log_level(&level);
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Couldn't setup global subscriber (logger): {err}");
        return;
    }
    if let Some(err) = parse_err {
        tracing::warn!("Ignoring invalid log filter {level:?}: {err}");
    }
}

#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::new("info")
        });
    (get_subscribers(filter), parse_err)
}

#[allow(clippy::let_and_return)]
pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr));

    #[cfg(feature = "journald")]
    let subscriber = journald::add_layer(subscriber);

    subscriber
}
