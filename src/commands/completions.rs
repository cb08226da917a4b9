//! Shell completions command

use clap::CommandFactory;

use replaymod_fetch::error::Result;

use crate::cli::CompletionsArgs;

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(
        args.shell,
        &mut cmd,
        "replaymod-fetch",
        &mut std::io::stdout().lock(),
    );

    Ok(())
}
