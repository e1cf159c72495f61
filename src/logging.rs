use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a log file to write to instead of stderr.
pub const LOG_FILE_ENV: &str = "USER_STATE_LOG";

/// Initialize tracing.
///
/// Filter comes from `RUST_LOG` (default `warn`). Output goes to stderr
/// unless `USER_STATE_LOG` names a file path; in that case logs are written
/// to `{path}.{timestamp}.{pid}` so concurrent runs don't clobber each other.
/// If that file can't be created, logging stays on stderr.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(file) = std::env::var(LOG_FILE_ENV).ok().and_then(|path| open_log_file(&path)) {
        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();
}

/// Create the unique log file for `base`; `None` (with a warning) falls back to stderr.
fn open_log_file(base: &str) -> Option<std::fs::File> {
    let unique_path = unique_log_path(base);
    match std::fs::File::create(&unique_path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!(
                "Warning: Failed to create log file {}: {}; logging to stderr",
                unique_path, e
            );
            None
        }
    }
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}
