mod cli;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing::{Level, debug};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, Layer, filter, fmt, layer::SubscriberExt};

use crate::cli::Cli;
use crate::config::ToolConfig;

fn main() -> Result<()> {
    // Optional .env file; a present but malformed one is still an error.
    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e.into()),
    }

    let cli = Cli::parse();
    let cfg = ToolConfig::from_env();
    init_tracing(&cfg, cli.verbose)?;
    debug!(?cfg, "configuration loaded");

    let out = cli::run(cli.command, &cfg)?;
    println!("{out}");

    Ok(())
}

fn init_tracing(cfg: &ToolConfig, verbose: u8) -> Result<()> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter)),
        1 => verbose_filter(cfg, Level::DEBUG)?,
        _ => verbose_filter(cfg, Level::TRACE)?,
    };

    let app_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter::filter_fn(|meta| {
            !meta.target().starts_with(unique_id::telemetry::TARGET_PREFIX)
                || meta.target().starts_with(env!("CARGO_CRATE_NAME"))
        }));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(unique_id::telemetry::layer())
        .with(app_layer);

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// `unique_id` at `level` plus the same level for the message crate and this tool.
fn verbose_filter(cfg: &ToolConfig, level: Level) -> Result<EnvFilter> {
    let mut filter = unique_id::telemetry::env_filter_with_level(&cfg.log_filter, level);
    for directive in companion_directives(level) {
        filter = filter.add_directive(directive.parse::<Directive>()?);
    }
    Ok(filter)
}

fn companion_directives(level: Level) -> Vec<String> {
    let level = level.as_str().to_lowercase();
    ["uuid_msgs", env!("CARGO_CRATE_NAME")]
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_reaches_message_crate_and_tool() {
        assert_eq!(
            companion_directives(Level::DEBUG),
            ["uuid_msgs=debug", "unique_id_tool=debug"]
        );
        for directive in companion_directives(Level::TRACE) {
            assert!(directive.parse::<Directive>().is_ok(), "{directive}");
        }
    }
}
