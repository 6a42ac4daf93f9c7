//! Command-line surface and command execution.
//!
//! Commands render to a `String` so they can be tested without a terminal;
//! `main` only prints the result.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;
use unique_id::{Discriminator, UniqueId, from_url, generate, namespaces};
use uuid_msgs::UniqueIdentifier;

use crate::config::ToolConfig;

#[derive(Parser, Debug)]
#[command(
    name = "unique-id",
    about = "Deterministic name-based identifiers for map entities",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Raise log verbosity of unique_id, uuid_msgs and this tool (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the identifier for an id within a namespace.
    Generate(GenerateArgs),
    /// Validate an identifier and show its byte form.
    Parse(ParseArgs),
    /// Identifier for an OpenStreetMap node, way, or relation.
    Osm(OsmArgs),
    /// Identifier for a directed route segment between two way points.
    Route(RouteArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Namespace URL; falls back to `UNIQUE_ID_NAMESPACE`.
    #[arg(long, short)]
    pub namespace: Option<String>,

    /// Integer discriminator (decimal, optional sign).
    #[arg(long, allow_hyphen_values = true)]
    pub id: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Identifier in `8-4-4-4-12` hex form.
    pub uuid: String,
}

#[derive(Args, Debug)]
pub struct OsmArgs {
    #[arg(value_enum)]
    pub kind: OsmKind,

    /// OpenStreetMap id.
    #[arg(allow_hyphen_values = true)]
    pub id: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Package that generated the route network.
    pub package: String,
    /// Start way point identifier.
    pub start: String,
    /// End way point identifier.
    pub end: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Hyphenated lowercase hex.
    Text,
    /// The 16 raw bytes as a decimal list.
    Bytes,
    /// A `UniqueIdentifier` record as JSON.
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OsmKind {
    /// A single point (`http://openstreetmap.org/node/`).
    Node,
    /// An ordered list of nodes (`http://openstreetmap.org/way/`).
    Way,
    /// A group of nodes, ways, and relations (`http://openstreetmap.org/relation/`).
    Relation,
}

impl OsmKind {
    fn namespace(self) -> &'static str {
        match self {
            Self::Node => namespaces::OSM_NODE,
            Self::Way => namespaces::OSM_WAY,
            Self::Relation => namespaces::OSM_RELATION,
        }
    }
}

/// Runs `command` and returns what should be printed on stdout.
pub fn run(command: Commands, cfg: &ToolConfig) -> Result<String> {
    match command {
        Commands::Generate(args) => {
            let namespace = cfg.namespace(args.namespace.as_deref())?;
            let id = generate(namespace, Discriminator::from(args.id))?;
            render(id, args.format)
        }
        Commands::Parse(args) => describe(&args.uuid),
        Commands::Osm(args) => {
            let id = generate(args.kind.namespace(), args.id)?;
            render(id, args.format)
        }
        Commands::Route(args) => {
            let url = namespaces::route_segment(&args.package, &args.start, &args.end);
            debug!(%url, "route segment namespace");
            render(from_url(&url), args.format)
        }
    }
}

fn render(id: UniqueId, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => id.to_string(),
        OutputFormat::Bytes => format!("{:?}", id.as_bytes()),
        OutputFormat::Json => serde_json::to_string(&UniqueIdentifier::from(id))
            .context("serializing UniqueIdentifier")?,
    })
}

fn describe(text: &str) -> Result<String> {
    let id = UniqueId::parse(text)?;
    Ok(format!(
        "uuid: {id}\nbytes: {:?}\nversion: {}\nname_based: {}",
        id.as_bytes(),
        id.version(),
        id.is_name_based()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use unique_id::UniqueIdError;

    fn cfg(namespace: Option<&str>) -> ToolConfig {
        ToolConfig {
            default_namespace: namespace.map(str::to_owned),
            log_filter: "warn".into(),
        }
    }

    fn run_args(args: &[&str], cfg: &ToolConfig) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("unique-id").chain(args.iter().copied()))?;
        run(cli.command, cfg)
    }

    #[test]
    fn generate_with_explicit_namespace() {
        let out = run_args(
            &["generate", "--namespace", "http://openstreetmap.org/node/", "--id", "123456"],
            &cfg(None),
        )
        .unwrap();
        assert_eq!(out, "b0e56dff-61bd-5eac-8afe-d04c3e16669b");
    }

    #[test]
    fn generate_uses_env_namespace_and_negative_ids() {
        let out = run_args(
            &["generate", "--id", "-42"],
            &cfg(Some("http://openstreetmap.org/node/")),
        )
        .unwrap();
        assert_eq!(out, "5934ac62-ad75-5e00-9627-6851c6319738");
    }

    #[test]
    fn generate_without_id_hashes_the_namespace() {
        let out = run_args(&["generate", "-n", "http://openstreetmap.org/node/"], &cfg(None)).unwrap();
        assert_eq!(out, "0691e286-4872-54b9-8868-64594ba4bfe6");
    }

    #[test]
    fn generate_without_any_namespace_fails() {
        let err = run_args(&["generate", "--id", "1"], &cfg(None)).unwrap_err();
        assert!(err.to_string().contains("missing required setting"), "{err}");
    }

    #[test]
    fn invalid_id_surfaces_typed_error() {
        let err = run_args(&["osm", "way", "xxx"], &cfg(None)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<UniqueIdError>(),
            Some(&UniqueIdError::InvalidDiscriminator {
                value: "xxx".into()
            })
        );
    }

    #[test]
    fn osm_shortcut_and_formats() {
        assert_eq!(
            run_args(&["osm", "way", "1"], &cfg(None)).unwrap(),
            "b3180681-b125-5e41-bd04-3c8b046175b4"
        );
        assert_eq!(
            run_args(&["osm", "node", "1", "--format", "json"], &cfg(None)).unwrap(),
            r#"{"uuid":"ef362ac8-9659-5481-b954-88e9b741c8f9"}"#
        );
        assert_eq!(
            run_args(&["osm", "node", "0001", "--format", "bytes"], &cfg(None)).unwrap(),
            "[239, 54, 42, 200, 150, 89, 84, 129, 185, 84, 136, 233, 183, 65, 200, 249]"
        );
    }

    #[test]
    fn every_osm_kind_is_documented_in_help() {
        use clap::CommandFactory;

        let mut cmd = Cli::command();
        let osm = cmd.find_subcommand_mut("osm").unwrap();
        let help = osm.render_long_help().to_string();
        for url in [
            "http://openstreetmap.org/node/",
            "http://openstreetmap.org/way/",
            "http://openstreetmap.org/relation/",
        ] {
            assert!(help.contains(url), "{help}");
        }
    }

    #[test]
    fn route_segment_command() {
        let out = run_args(
            &[
                "route",
                "road_network",
                "da7c242f-2efe-5175-9961-49cc621b80b9",
                "812f1c08-a34b-5a21-92b9-18b2b0cf4950",
            ],
            &cfg(None),
        )
        .unwrap();
        assert_eq!(out, "acaa906e-8411-5b45-a446-ccdc2fc39f29");
    }

    #[test]
    fn parse_describes_and_rejects() {
        let out = run_args(&["parse", "8E0B7D8A-C433-5C42-BE2E-FBD97DDFF9AC"], &cfg(None)).unwrap();
        assert!(out.starts_with("uuid: 8e0b7d8a-c433-5c42-be2e-fbd97ddff9ac\n"), "{out}");
        assert!(out.ends_with("version: 5\nname_based: true"), "{out}");

        let err = run_args(&["parse", "8e0b7d8ac4335c42be2efbd97ddff9ac"], &cfg(None)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<UniqueIdError>(),
            Some(UniqueIdError::InvalidIdentifierFormat { .. })
        ));
    }
}
