//! Logging setup shared by the server and the admin CLI.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `log_level` is an `EnvFilter` directive string such as `info` or
/// `shortlink=debug,tower_http=info`; an unparsable value falls back to
/// `info`. `log_format` selects human-readable (`text`) or JSON lines (`json`).
pub fn init(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
