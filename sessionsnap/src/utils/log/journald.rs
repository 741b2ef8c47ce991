use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

/// Adds a journald layer, or nothing if journald is not running.
pub fn add_layer<S>(subscriber: S) -> impl Subscriber + for<'span> LookupSpan<'span>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let layer = tracing_journald::layer()
        .map_err(|err| eprintln!("Couldn't connect to journald, not logging there: {err}"))
        .ok();
    subscriber.with(layer)
}
