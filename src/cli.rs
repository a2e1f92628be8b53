// Command-line interface definition.
//
// Uses clap's derive API. Top level selects `auth` or `release`;
// `release` takes its own `create` / `delete` / `list` subcommand.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Manage GitHub releases from the command line.
#[derive(Parser, Debug)]
#[command(name = "github", version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Create new authentication token
    Auth,

    /// List, create or delete releases
    Release {
        #[command(subcommand)]
        command: ReleaseCommand,
    },

    /// List releases (same as `release list`)
    #[command(hide = true)]
    List,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ReleaseCommand {
    /// Create a release (not implemented)
    Create(ReleaseArgs),
    /// Delete a release (not implemented)
    Delete(ReleaseArgs),
    /// List the five newest releases of the current repository
    List,
}

/// Flags accepted by `create` and `delete`.
#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct ReleaseArgs {
    /// Release name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Tag used in the current release
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Release file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}
