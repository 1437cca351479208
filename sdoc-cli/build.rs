use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("sdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for building HTML reports from composable blocks")
        .arg_required_else_help(true)
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
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("PATH")
                        .help("Output file path")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(Command::new("generate-css").about("Output the CSS of a theme"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "sdoc", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "sdoc", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "sdoc", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
