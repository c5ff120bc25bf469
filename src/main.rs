//! marlin-profiles — per-printer Marlin configuration manager.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use marlin_profiles::commands;
use marlin_profiles::config::Config;
use marlin_profiles::models::Layout;
use marlin_profiles::output::{Event, Reporter, TerminalReporter};

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use cli::args::{Cli, Command};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load(&cli.root).context("failed to load configuration")?;
    let layout = Layout::new(&cli.root, &config.layout);
    tracing::debug!(
        base = %layout.base_store().display(),
        printers = %layout.printers_root().display(),
        "resolved layout"
    );

    let mut reporter = TerminalReporter;

    match cli.command {
        Command::Diff(args) => commands::diff(&layout, &args.path, &mut reporter)?,
        Command::Update(args) => {
            commands::update(&layout, &args.path, &mut reporter)?;
        }
        Command::New(args) => {
            commands::create_profile(&layout, &args.name, &mut reporter)?;
        }
        Command::Apply(args) => {
            commands::apply(&layout, &args.name, &args.path, &mut reporter)?;
        }
        Command::List => run_list(&layout, &mut reporter)?,
    }

    Ok(())
}

/// List printer profiles, with a hint when there are none.
fn run_list(layout: &Layout, reporter: &mut dyn Reporter) -> Result<()> {
    let profiles = commands::list_profiles(layout, reporter)?;
    if profiles.is_empty() {
        reporter.report(Event::Warning(format!(
            "No printer profiles found in {}. Use `{} new <NAME>` to create one.",
            layout.printers_root().display(),
            marlin_profiles::constants::APP_NAME,
        )));
    }
    Ok(())
}

/// Initialise the stderr `tracing` subscriber.
///
/// `--verbose` forces debug output for this crate; otherwise `RUST_LOG`
/// is honoured and the default level is `warn`.
fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("marlin_profiles=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
