use strum_macros::Display as EnumToString;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

#[derive(Debug, EnumToString, PartialEq, Eq)]
#[strum(serialize_all = "kebab_case")]
pub enum LogKey {
    Cli,
    DatasetIntegrity,
    DatasetLoad,
    DatasetLoadFailed,
    LookupInvalidArgument,
    LookupNotFound,
    Test, // For test cases
}

/// Creates a tracing subscriber that writes JSON lines to `sink` and sets it
/// as the global default.
pub fn init_tracing<Sink>(log_level: &str, sink: Sink)
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    // Filter out any events that are below `log_level`.
    let env_filter = EnvFilter::new(log_level);

    let format_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(false)
        .with_span_list(false)
        .with_writer(sink);

    let subscriber = Registry::default().with(env_filter).with(format_layer);

    LogTracer::init().expect("Failed to set logger");
    set_global_default(subscriber).expect("Failed to set subscriber");
}

pub fn debug(log_key: &LogKey, message: &str) {
    tracing::debug!(r#type = log_key.to_string().as_str(), message);
}

pub fn info(log_key: &LogKey, message: &str) {
    tracing::info!(r#type = log_key.to_string().as_str(), message);
}

pub fn warn(log_key: &LogKey, message: &str) {
    tracing::warn!(r#type = log_key.to_string().as_str(), message);
}

pub fn error(log_key: &LogKey, message: &str, error: Option<Box<dyn std::error::Error>>) {
    match error {
        Some(err) => tracing::error!(
            r#type = log_key.to_string().as_str(),
            "Message: '{}'. Original error: {:?}",
            message,
            err
        ),
        None => tracing::error!(r#type = log_key.to_string().as_str(), message),
    };
}

#[cfg(test)]
mod test_telemetry {
    use super::*;

    #[test]
    fn log_keys_are_kebab_case() {
        assert_eq!(LogKey::DatasetLoadFailed.to_string(), "dataset-load-failed");
        assert_eq!(LogKey::LookupNotFound.to_string(), "lookup-not-found");
        assert_eq!(LogKey::Cli.to_string(), "cli");
    }
}
