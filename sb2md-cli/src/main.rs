// Command-line interface for sb2md
//
// Reads a Scrapbox page and writes it back as Markdown. With no arguments the page is read from
// stdin until end of stream and the Markdown goes to stdout, which makes the tool usable in a
// pipe:
//
//  pbpaste | sb2md > page.md
//
// Usage:
//  sb2md [<input>] [--output <file>]   - Convert a page (stdin / stdout by default)
//  sb2md --list-rules                  - List the rewrite rules in the order they apply
//
// Configuration:
//
// Conversion knobs are read from the embedded defaults, then `sb2md.toml` in the working
// directory, then the file given with --config. A malformed sb2md.toml in the working directory
// is an error even for a plain stdin conversion. Diagnostics go to stderr, filtered by the
// `log.filter` setting or RUST_LOG; an unparsable RUST_LOG is ignored with a warning.

mod logging;

use clap::{Arg, ArgAction, Command, ValueHint};
use sb2md::rules::RULES;
use sb2md::ConvertOptions;
use sb2md_config::{Loader, Sb2mdConfig};
use std::fs;
use std::io::{self, Read, Write};
use tracing::{debug, info};

/// Input path meaning "read from stdin"
const STDIN_PATH: &str = "-";

fn build_cli() -> Command {
    Command::new("sb2md")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Scrapbox pages to Markdown")
        .long_about(
            "sb2md converts a page written in Scrapbox notation into Markdown.\n\n\
            The first line of the page becomes the level 1 heading. Brackets, links,\n\
            images, indented lists and code: blocks are rewritten line by line.\n\n\
            Examples:\n  \
            sb2md < page.txt                  # Convert stdin to stdout\n  \
            sb2md page.txt -o page.md         # Convert a file into a file\n  \
            sb2md --config custom.toml page.txt\n  \
            sb2md --list-rules                # Show the rewrite rules",
        )
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
                .long_help(
                    "Path to write the converted Markdown.\n\n\
                    If not specified, output is written to stdout.",
                )
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
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    if let Err(err) = logging::init_logging(&config.log) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    if matches.get_flag("list-rules") {
        handle_list_rules_command();
        return;
    }

    let options = convert_options_from_config(&config);
    if let Err(err) = options.validate() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    let input = matches.get_one::<String>("input").map(|s| s.as_str());
    let output = matches.get_one::<String>("output").map(|s| s.as_str());
    handle_convert_command(input, output, &options);
}

/// Handle the convert command (the default and only action)
fn handle_convert_command(input: Option<&str>, output: Option<&str>, options: &ConvertOptions) {
    let source = read_source(input).unwrap_or_else(|e| {
        match input {
            Some(path) if path != STDIN_PATH => eprintln!("Error reading file '{path}': {e}"),
            _ => eprintln!("Error reading stdin: {e}"),
        }
        std::process::exit(1);
    });
    debug!(bytes = source.len(), "read source");

    let markdown = sb2md::convert_with(&source, options);

    match output {
        Some(path) => {
            write_file(path, &markdown).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            info!(path, "wrote markdown");
        }
        None => {
            let stdout = io::stdout();
            write_markdown(&mut stdout.lock(), &markdown).unwrap_or_else(|e| {
                eprintln!("Error writing stdout: {e}");
                std::process::exit(1);
            });
        }
    }
}

/// Handle the list-rules command
fn handle_list_rules_command() {
    println!("Rewrite rules, in the order they apply:\n");
    for (index, rule) in RULES.iter().enumerate() {
        println!(
            "  {:>2}. {:<14} {:<11} {}",
            index + 1,
            rule.name,
            rule.scope.as_str(),
            rule.description
        );
    }
    println!("\nThe first line always becomes a level 1 heading.");
    println!("Fenced code lines (from code: blocks) are never rewritten.");
}

/// Reads the whole page, from stdin when no path (or `-`) is given.
fn read_source(input: Option<&str>) -> io::Result<String> {
    match input {
        Some(path) if path != STDIN_PATH => fs::read_to_string(path),
        _ => {
            let mut source = String::new();
            io::stdin().lock().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Writes the Markdown followed by a single line terminator.
fn write_markdown(out: &mut impl Write, markdown: &str) -> io::Result<()> {
    out.write_all(markdown.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

fn write_file(path: &str, markdown: &str) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    write_markdown(&mut file, markdown)
}

fn load_cli_config(explicit_path: Option<&str>) -> Sb2mdConfig {
    let loader = Loader::new().with_local_file();
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Error: failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn convert_options_from_config(config: &Sb2mdConfig) -> ConvertOptions {
    ConvertOptions::from(&config.convert)
}
