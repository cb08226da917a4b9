use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    replaymod-fetch completions bash > ~/.bash_completion.d/replaymod-fetch\n\n\
                  Generate zsh completions:\n    replaymod-fetch completions zsh > ~/.zfunc/_replaymod-fetch")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
