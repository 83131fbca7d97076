use clap::Parser;

/// Re-runs the most recently executed `git` command with its mistyped
/// subcommand replaced by the closest valid one.
#[derive(Debug, Parser)]
#[command(name = "regit", version)]
pub struct Cli {
    /// Prompt for a choice when multiple equally good candidates exist;
    /// without this flag the first-ranked candidate is used.
    #[arg(short = 'p', long = "prompt")]
    pub prompt: bool,
}
