use std::{env, fs::OpenOptions, path::Path, sync::Mutex};

use anyhow::Context as _;
use tracing_subscriber::{EnvFilter, filter::ParseError, fmt, prelude::*};

const DEFAULT_FILTER: &str = "info";

/// Routes `tracing` output to `path`.
///
/// The terminal belongs to the TUI, so nothing is ever written to stdout or
/// stderr. A malformed `RUST_LOG` falls back to `info` and is reported in the
/// log itself.
pub fn init(path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let directives = env::var(EnvFilter::DEFAULT_ENV).ok();
    let (env_filter, ignored) = build_filter(directives.as_deref());

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!(path = %path.display(), "logging initialized");
    if let Some(err) = ignored {
        tracing::warn!(
            directives = directives.as_deref().unwrap_or_default(),
            %err,
            "ignoring malformed {}, using {DEFAULT_FILTER:?}",
            EnvFilter::DEFAULT_ENV,
        );
    }
    Ok(())
}

/// Parses `directives`, falling back to [`DEFAULT_FILTER`].
///
/// Returns the parse error when the fallback replaced a malformed value.
fn build_filter(directives: Option<&str>) -> (EnvFilter, Option<ParseError>) {
    match directives.map(EnvFilter::try_new) {
        Some(Ok(filter)) => (filter, None),
        Some(Err(err)) => (EnvFilter::new(DEFAULT_FILTER), Some(err)),
        None => (EnvFilter::new(DEFAULT_FILTER), None),
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn test_missing_directives_use_default() {
        let (filter, ignored) = build_filter(None);
        assert!(ignored.is_none());
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_valid_directives_are_kept() {
        let (filter, ignored) = build_filter(Some("debug"));
        assert!(ignored.is_none());
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_malformed_directives_are_reported() {
        let (filter, ignored) = build_filter(Some("mathdrop=loudest"));
        assert!(ignored.is_some());
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
