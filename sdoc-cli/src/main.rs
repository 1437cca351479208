// Command-line interface for sdoc
//
// sdoc is a library for building HTML reports from code. This binary exposes the parts of it
// that make sense without writing a program: a demonstration report, the theme stylesheets and
// the list of block types known to the registry.
//
// Usage:
//  sdoc demo [-o <file>]               - Write a report that uses every block type
//  sdoc generate-css [--theme <name>]  - Print a theme's stylesheet
//  sdoc --list-blocks                  - List registered block types
//
// Configuration:
//
// Settings come from the embedded defaults, then ./sdoc.toml when present, then the file given
// with --config. --theme and --title override all of them.
//
// Logging goes to stderr and follows RUST_LOG (default: info).

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use sdoc::{demo_document, registered_block_types, DocumentOptions, Theme};
use sdoc_config::{Loader, SdocConfig, PROJECT_CONFIG_FILE};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    Command::new("sdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for building HTML reports from composable blocks")
        .long_about(
            "sdoc builds self-contained HTML reports from typed content blocks.\n\n\
            Commands:\n  \
            - demo:         Write a demonstration report using every block type\n  \
            - generate-css: Print the stylesheet of a theme\n\n\
            Examples:\n  \
            sdoc demo                          # Write the demo report to the configured path\n  \
            sdoc demo -o report.html           # Write it somewhere else\n  \
            sdoc --theme dark demo             # Use the dark theme\n  \
            sdoc generate-css --theme dark     # Print the dark theme CSS\n  \
            sdoc --list-blocks                 # List block types"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-blocks")
                .long("list-blocks")
                .help("List registered block types")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an sdoc.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_name("NAME")
                .help("Theme preset (default, dark); unknown names use default")
                .value_hint(ValueHint::Other)
                .global(true),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .value_name("TEXT")
                .help("Document title")
                .global(true),
        )
        .subcommand(
            Command::new("demo")
                .about("Write a demonstration report")
                .long_about(
                    "Builds a report that uses every built-in block type and writes it\n\
                    as a single HTML file. The written path is printed on stdout.\n\n\
                    Examples:\n  \
                    sdoc demo                   # Write to [demo] output from the config\n  \
                    sdoc demo -o out.html       # Write to out.html"
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("PATH")
                        .help("Output file path (defaults to [demo] output)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the CSS of a theme")
                .long_about(
                    "Outputs the stylesheet that is inlined into reports.\n\n\
                    Use this as a starting point for custom styling. The theme comes from\n\
                    --theme, or from the configuration when not given.\n\n\
                    Examples:\n  \
                    sdoc generate-css                   # Print CSS to stdout\n  \
                    sdoc generate-css > custom.css      # Save to file for editing"
                ),
        )
}

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();
    if let Err(err) = run(&matches) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

/// `RUST_LOG`-style directives, falling back to `info` when none are given.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn run(matches: &ArgMatches) -> Result<()> {
    if matches.get_flag("list-blocks") {
        handle_list_blocks_command();
        return Ok(());
    }

    let config = load_cli_config(matches)?;

    match matches.subcommand() {
        Some(("demo", sub_matches)) => {
            let output = sub_matches.get_one::<String>("output").map(PathBuf::from);
            handle_demo_command(&config, output)
        }
        Some(("generate-css", _)) => {
            handle_generate_css_command(&config);
            Ok(())
        }
        _ => anyhow::bail!("Unknown subcommand. Use --help for usage information."),
    }
}

fn load_cli_config(matches: &ArgMatches) -> Result<SdocConfig> {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        debug!(path = %path, "layering configuration file");
        loader = loader.with_file(path);
    }
    if let Some(theme) = matches.get_one::<String>("theme") {
        loader = loader.set_override("document.theme", theme.as_str())?;
    }
    if let Some(title) = matches.get_one::<String>("title") {
        loader = loader.set_override("document.title", title.as_str())?;
    }

    loader.build().context("Failed to load configuration")
}

/// Handle the demo command
fn handle_demo_command(config: &SdocConfig, output: Option<PathBuf>) -> Result<()> {
    let destination = output.unwrap_or_else(|| config.demo.output.clone());
    let options = DocumentOptions::from(&config.document).with_destination(&destination);
    info!(theme = %options.theme, path = %destination.display(), "building demo report");

    let doc = demo_document(&config.document.title, options)
        .context("Failed to build the demo report")?;
    let written = doc
        .save(None)
        .with_context(|| format!("Failed to write '{}'", destination.display()))?;

    println!("{}", written.display());
    Ok(())
}

/// Handle the generate-css command
fn handle_generate_css_command(config: &SdocConfig) {
    let theme: Theme = config.document.theme();
    print!("{}", theme.css());
}

fn handle_list_blocks_command() {
    println!("Available block types:\n");
    for name in registered_block_types() {
        println!("  {name}");
    }
}
