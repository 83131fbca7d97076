use std::sync::LazyLock;

use regex::Regex;

use crate::HistoryError;

/// zsh EXTENDED_HISTORY entries look like
/// `: <beginning time>:<elapsed seconds>;<command>`.
#[allow(clippy::expect_used)]
static EXT_HISTORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^: \d+:\d+;(.*)$").expect("static pattern compiles"));

/// Extracts the command from one zsh history line.
///
/// Plain lines are returned verbatim; a line starting with `:` must be a
/// well-formed extended-history entry with a non-empty command portion.
pub fn parse_history_line(line: &str) -> Result<String, HistoryError> {
    if line.is_empty() {
        return Err(HistoryError::EmptyHistory);
    }
    if !line.starts_with(':') {
        return Ok(line.to_string());
    }

    let command = EXT_HISTORY
        .captures(line)
        .map(|caps| caps[1].to_string())
        .filter(|command| !command.is_empty())
        .ok_or_else(|| HistoryError::MalformedEntry(line.to_string()))?;
    Ok(command)
}
