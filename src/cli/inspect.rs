use clap::Parser;
use std::path::PathBuf;

/// Arguments for the inspect command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show embedded metadata:\n    replaymod-fetch inspect mods/replaymod/replaymod-1.20.4-2.6.15.jar\n\n\
                  Check the jar against a game version:\n    \
                  replaymod-fetch inspect mods/replaymod/replaymod-1.20.4-2.6.15.jar --game-version 1.20.4")]
pub struct InspectArgs {
    /// Jar file to inspect
    pub jar: PathBuf,

    /// Validate the jar against the release registered for this Minecraft version
    #[arg(long, short = 'g')]
    pub game_version: Option<String>,
}
