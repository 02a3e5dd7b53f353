use std::{fs::File, path::Path, sync::Mutex};

use anyhow::Context;
use tracing::Subscriber;
use tracing_subscriber::{fmt, fmt::MakeWriter, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

/// `RUST_LOG` if set, otherwise warnings and errors only.
pub fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn subscriber<W>(
    filter: EnvFilter,
    writer: W,
    ansi: bool,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .finish()
}

/// Installs the global subscriber.
///
/// Standard error is used unless `log_file` is given; `ansi` only applies
/// there. A subscriber that is already installed is left in place.
pub fn init(log_file: Option<&Path>, ansi: bool) -> anyhow::Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Error creating log file: {}", path.display()))?;
            let _ = subscriber(filter(), Mutex::new(file), false).try_init();
        }
        None => {
            let _ = subscriber(filter(), std::io::stderr, ansi).try_init();
        }
    }

    Ok(())
}
