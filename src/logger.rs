//! File logging for the `signboard` binary.

use std::{path::Path, sync::OnceLock};
use tracing_subscriber::{EnvFilter, fmt};

static GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
static INIT: OnceLock<()> = OnceLock::new();

/// Used when neither `RUST_LOG` nor the caller's filter parses.
pub const DEFAULT_FILTER: &str = "signboard=info";

/// Install the global subscriber, writing to `path`.
///
/// `filter` is an `EnvFilter` directive such as
/// `"signboard::moves::execute=trace,signboard::session=debug"`; a set
/// `RUST_LOG` replaces it. Only the first successful call does anything.
pub fn init_logging<P: AsRef<Path>>(path: P, filter: &str) -> std::io::Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }

    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    INIT.get_or_init(|| {
        let (writer, guard) = tracing_appender::non_blocking(file);
        // Dropping the guard stops the background writer.
        let _ = GUARD.set(guard);

        let env_filter = if std::env::var_os("RUST_LOG").is_some() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        };

        let subscriber = fmt()
            .with_env_filter(env_filter)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(writer)
            .finish();

        // Fails if a test harness installed its own subscriber first.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });

    Ok(())
}
