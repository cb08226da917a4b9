use clap::Parser;
use std::path::PathBuf;

/// Arguments for the fetch command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install ReplayMod for Minecraft 1.20.4:\n    \
                  replaymod-fetch fetch --game-version 1.20.4 --mods-dir ~/.minecraft/mods\n\n\
                  The jar is kept in a 'replaymod' subdirectory of the mods directory.")]
pub struct FetchArgs {
    /// Minecraft version to install ReplayMod for
    #[arg(long, short = 'g')]
    pub game_version: String,

    /// Mod directory of the Fabric installation
    #[arg(long, short = 'm')]
    pub mods_dir: PathBuf,

    /// Do not draw a download progress bar
    #[arg(long)]
    pub no_progress: bool,
}
