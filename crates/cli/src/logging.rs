use storefront_core::config::{AppConfig, LoadOptions, LogFormat, LoggingConfig};
use tracing::Level;

/// Installs the global subscriber. Logs go to stderr so command output on
/// stdout stays machine-readable.
pub fn init(logging: &LoggingConfig) {
    let log_level = logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(std::io::stderr);

    // a subscriber may already be installed when commands run inside tests
    let _ = match logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

/// Falls back to default logging when the config does not load; the command
/// itself reports the config failure.
pub fn init_from_env() {
    let config = AppConfig::load(LoadOptions::default()).unwrap_or_default();
    init(&config.logging);
}
