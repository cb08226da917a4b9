//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - fetch: Fetch command arguments
//! - inspect: Inspect command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod fetch;
pub mod inspect;

pub use completions::CompletionsArgs;
pub use fetch::FetchArgs;
pub use inspect::InspectArgs;

/// replaymod-fetch - keep ReplayMod installed for a Fabric instance
#[derive(Parser, Debug)]
#[command(
    name = "replaymod-fetch",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Keeps a single, up-to-date ReplayMod jar in a managed mod directory",
    long_about = "Downloads the ReplayMod release pinned for a Minecraft version into \
                  <mods-dir>/replaymod/, reusing the installed jar when its embedded \
                  metadata is current and replacing it otherwise."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install or update ReplayMod in a mod directory
    Fetch(FetchArgs),

    /// List supported Minecraft versions
    Versions,

    /// Show the metadata embedded in a jar
    Inspect(InspectArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
