//! Command-line interface for specgen
//! Generates JSON schema files describing the elements and attributes of markup specifications.
//!
//! Usage:
//!   specgen [--all | --html] [-o `<dir>`]            - Fetch the HTML standard and write html.json
//!   specgen --input `<file>` [-o `<dir>`]            - Scan a local copy instead of fetching
//!   specgen --config `<file>` [--compact] [-v...]    - Layer a config file, tune output and logging
//!
//! A `specgen.toml` in the working directory is read automatically when present.

mod generate;

use clap::{Arg, ArgAction, ArgMatches, Command};
use generate::Source;
use specgen_config::{ConfigError, Loader, SpecgenConfig, LOCAL_CONFIG_FILE};
use specgen_schema::SpecName;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("specgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate element and attribute schemas from markup specifications")
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("DIR")
                .help("Directory the schema files are written to (default: specs)"),
        )
        .arg(
            Arg::new("all")
                .long("all")
                .help("Generate every supported specification (the default)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("html")
                .long("html")
                .help("Generate the HTML specification only")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("html-spec-site")
                .long("html-spec-site")
                .value_name("URL")
                .help("Address of the HTML standard (default: https://html.spec.whatwg.org/)"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("FILE")
                .help("Scan a local HTML file instead of fetching the standard")
                .conflicts_with("html-spec-site"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("TOML configuration file layered over the defaults and ./specgen.toml"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Write single-line JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let config = load_config(&matches).unwrap_or_else(|e| {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let source = match matches.get_one::<String>("input") {
        Some(path) => Source::File(PathBuf::from(path)),
        None => Source::Url(config.html.source_url.clone()),
    };

    if let Err(e) = generate::run(&config, &targets(&matches), &source) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let fallback = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Defaults, then ./specgen.toml if present, then --config, then flag overrides
fn load_config(matches: &ArgMatches) -> Result<SpecgenConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(dir) = matches.get_one::<String>("output") {
        loader = loader.set_override("output.dir", dir.as_str())?;
    }
    if let Some(url) = matches.get_one::<String>("html-spec-site") {
        loader = loader.set_override("html.source_url", url.as_str())?;
    }
    if matches.get_flag("compact") {
        loader = loader.set_override("output.pretty", false)?;
    }
    loader.build()
}

/// Specifications with a generator, in generation order
const ALL_TARGETS: &[SpecName] = &[SpecName::Html];

fn targets(matches: &ArgMatches) -> Vec<SpecName> {
    if matches.get_flag("html") && !matches.get_flag("all") {
        return vec![SpecName::Html];
    }
    ALL_TARGETS.to_vec()
}
