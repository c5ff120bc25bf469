//! Clap argument types.

use clap::Parser;
use std::path::PathBuf;

/// Manage per-printer Marlin configuration profiles.
#[derive(Parser, Debug)]
#[command(name = "marlin-profiles", version, about)]
pub struct Cli {
    /// Working directory holding `base/` and `printers/`.
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Print debug diagnostics to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Show the difference between the base files and a Marlin checkout.
    Diff(UpstreamArgs),

    /// Update the base files from a Marlin checkout.
    Update(UpstreamArgs),

    /// Create a new printer profile from the base files.
    New(NewArgs),

    /// Copy a printer profile into a Marlin checkout.
    Apply(ApplyArgs),

    /// List printer profiles.
    List,
}

/// Arguments for commands that only need a Marlin checkout.
#[derive(Parser, Debug)]
pub struct UpstreamArgs {
    /// Path to the root of the Marlin checkout.
    pub path: PathBuf,
}

/// Arguments for the `new` subcommand.
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Name of the printer.
    pub name: String,
}

/// Arguments for the `apply` subcommand.
#[derive(Parser, Debug)]
pub struct ApplyArgs {
    /// Name of the printer.
    pub name: String,

    /// Path to the root of the Marlin checkout.
    pub path: PathBuf,
}
