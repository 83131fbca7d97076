mod cli;
mod prompt;

use std::io::IsTerminal;
use std::io::Write;

use anyhow::bail;
pub use cli::Cli;
use regit_core::GIT_COMMANDS;
use regit_core::resolve;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::prompt::Choice;

pub fn run_main(cli: Cli) -> anyhow::Result<()> {
    let default_level = "error";
    let _ = tracing_subscriber::fmt()
        // Fallback to the `default_level` log filter if the environment
        // variable is not set _or_ contains an invalid value
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();

    let last = regit_history::last_command()?;
    let mut tokens = last.split(' ').filter(|token| !token.is_empty());
    match tokens.next() {
        Some("git") => {}
        _ => bail!("most recent command is not a git invocation: {last}"),
    }
    let Some(mistyped) = tokens.next() else {
        bail!("git invocation has no subcommand");
    };
    let trailing: Vec<String> = tokens.map(str::to_string).collect();

    let resolution = resolve(mistyped, GIT_COMMANDS)?;
    let chosen = if resolution.commands.len() == 1 || !cli.prompt {
        resolution.commands[0].clone()
    } else {
        match prompt::select("Select the git command to run", &resolution.commands)? {
            Choice::Selected(idx) => resolution.commands[idx].clone(),
            Choice::Cancelled => bail!("selection cancelled; nothing executed"),
        }
    };
    info!(mistyped, %chosen, "correcting subcommand");

    let mut args = Vec::with_capacity(trailing.len() + 1);
    args.push(chosen);
    args.extend(trailing);
    let invoked = regit_exec::invoke("git", &args)?;

    let output = invoked.output();
    if !output.is_empty() {
        let mut stdout = std::io::stdout();
        stdout.write_all(output)?;
        stdout.flush()?;
    }
    invoked.exit_ok()?;
    Ok(())
}
