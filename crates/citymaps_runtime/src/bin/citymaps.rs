//! Citymaps CLI entry point.

use citymaps_router::{Revision, RouterConfig, manifest};
use citymaps_runtime::{Repl, Session, logging, render};
use std::env;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    paths: Vec<String>,
    revision: Option<Revision>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    manifest: bool,
    names: bool,
    verbose: u8,
    // Matching options
    case_sensitive: bool,
    strict_trailing_slash: bool,
}

impl CliConfig {
    fn router_config(&self) -> RouterConfig {
        RouterConfig::default()
            .with_case_sensitive(self.case_sensitive)
            .with_strict_trailing_slash(self.strict_trailing_slash)
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-v" | "--verbose" => config.verbose = config.verbose.saturating_add(1),
            "-vv" => config.verbose = config.verbose.saturating_add(2),
            "--manifest" => config.manifest = true,
            "--names" => config.names = true,
            "--case-sensitive" => config.case_sensitive = true,
            "--strict" => config.strict_trailing_slash = true,
            "-r" | "--revision" => {
                i += 1;
                if i >= args.len() {
                    return Err("--revision requires a value".into());
                }
                config.revision = Some(args[i].parse()?);
            }
            arg if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.paths.push(path.to_string()),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("citymaps {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(config.verbose)?;

    let revision = config.revision.unwrap_or(Revision::CURRENT);
    let mut session = Session::with_config(revision, config.router_config())?;

    if config.manifest {
        println!("{}", manifest::to_json(session.table())?);
    }

    if config.names {
        print!("{}", render::names(session.table(), None));
    }

    for path in &config.paths {
        println!("{}", render::resolution(session.resolve(path)));
    }

    if config.batch_mode {
        return Ok(());
    }

    // Paths on the command line already set the context
    let mut repl = Repl::new()?.with_session(session);
    if !config.paths.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mCitymaps\x1b[0m - Route tables for the city transport data explorer

\x1b[1mUSAGE:\x1b[0m
    citymaps [OPTIONS] [PATHS...]

\x1b[1mARGUMENTS:\x1b[0m
    [PATHS...]    URL paths to resolve before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -b, --batch            Resolve paths and exit (no REPL)
    -r, --revision NAME    Route table revision (default: current)
    -v, --verbose          Log more (repeat for debug and trace)
    --manifest             Print the route manifest as JSON
    --names                List route names and their paths

\x1b[1mMATCHING OPTIONS:\x1b[0m
    --case-sensitive       Match path segments case-sensitively
    --strict               Treat a trailing slash as significant

\x1b[1mREVISIONS:\x1b[0m
    emissions, mode-share (current), mode-share-flow, mode-share-2023

\x1b[1mEXAMPLES:\x1b[0m
    citymaps                                 Start interactive REPL
    citymaps -b /emissions/dunedin           Resolve one path and exit
    citymaps -r emissions --manifest -b      Dump the emissions routes
    RUST_LOG=debug citymaps -b /nowhere      Resolve with debug logging

\x1b[1mREPL COMMANDS:\x1b[0m
    /some/path             Resolve a path, following redirects
    :go NAME               Navigate to a named route
    :match PATH            Show the matched route without redirects
    :revision [NAME]       List or switch revisions
    :round VALUE [PLACES]  Format a number
    :help                  List all commands
    Ctrl+D                 Exit REPL"
    );
}
