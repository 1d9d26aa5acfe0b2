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

    let mut cmd = Command::new("sb2md")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Scrapbox pages to Markdown")
        .arg(
            Arg::new("input")
                .help("Scrapbox page to convert (reads stdin when omitted or '-')")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a sb2md.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-rules")
                .long("list-rules")
                .help("List the rewrite rules in the order they apply")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "sb2md", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "sb2md", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "sb2md", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
