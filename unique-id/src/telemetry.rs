use std::io::{self, IsTerminal};
use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::filter::{Directive, LevelFilter, ParseError};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, filter, fmt};

/// Crate target prefix used to filter only library-originated logs.
pub const TARGET_PREFIX: &str = "unique_id";

/// RFC3339 UTC timer, e.g. `2025-09-12T10:20:30Z`.
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        w.write_str(&now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
    }
}

/// Formatting layer that renders ONLY events emitted by this crate.
///
/// - RFC3339 UTC timestamps
/// - Compact single-line format with target and `file:line`
/// - ANSI colors only when stderr is a terminal
///
/// Written to stderr so identifiers printed on stdout stay pipeable.
/// Compose it in the binary together with your global subscriber.
pub fn layer<S>() -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let use_ansi = io::stderr().is_terminal();

    let only_this_crate = filter::filter_fn(|meta| is_own_target(meta.target()));

    let format = fmt::format()
        .compact()
        .with_timer(ChronoRfc3339Utc)
        .with_level(true)
        .with_target(true)
        .with_source_location(true);

    fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(use_ansi)
        .event_format(format)
        .with_filter(only_this_crate)
}

/// `unique_id` or one of its modules, but not `unique_id_tool`.
fn is_own_target(target: &str) -> bool {
    target
        .strip_prefix(TARGET_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
}

/// Level directive for this library only, e.g. `unique_id=debug`.
pub fn level_directive(level: Level) -> Directive {
    directive_for(level).unwrap_or_else(|_| LevelFilter::INFO.into())
}

fn directive_for(level: Level) -> Result<Directive, ParseError> {
    Directive::from_str(&format!(
        "{TARGET_PREFIX}={}",
        level.as_str().to_lowercase()
    ))
}

/// EnvFilter from `RUST_LOG` (or `default` when unset/invalid), with a
/// per-crate level directive for this library on top.
pub fn env_filter_with_level(default: &str, level: Level) -> EnvFilter {
    let base = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    base.add_directive(level_directive(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_targets_this_crate() {
        assert_eq!(level_directive(Level::DEBUG).to_string(), "unique_id=debug");
        assert_eq!(level_directive(Level::TRACE).to_string(), "unique_id=trace");
    }

    #[test]
    fn own_targets_only() {
        assert!(is_own_target("unique_id"));
        assert!(is_own_target("unique_id::generate"));
        assert!(!is_own_target("unique_id_tool"));
        assert!(!is_own_target("uuid_msgs"));
    }
}
