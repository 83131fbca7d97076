//! Reads the most recently executed command out of the shell's history
//! file. Only zsh is supported; the history file is consulted read-only via
//! a bounded tail read, never a full-file scan.

mod zsh;

use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::path::Path;

use tracing::debug;

pub use zsh::parse_history_line;

/// How much of the history file tail is inspected when looking for the last
/// command. One command line fits comfortably; anything further back is
/// irrelevant.
const TAIL_BYTES: u64 = 256;

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("unable to detect current working shell (SHELL is unset)")]
    ShellUnset,
    #[error("unsupported shell: {0}")]
    UnsupportedShell(String),
    #[error("failed to locate home directory")]
    HomeDirNotFound,
    #[error("failed to read history file: {0}")]
    Io(#[from] std::io::Error),
    #[error("history is empty")]
    EmptyHistory,
    #[error("invalid zsh extended-history entry: {0}")]
    MalformedEntry(String),
}

/// Returns the command line most recently recorded by the current shell.
///
/// The shell is identified through `$SHELL`; only an executable named `zsh`
/// is supported. The last complete non-empty line of `~/.zsh_history` is
/// extracted and, when in extended-history format, stripped down to the
/// bare command.
pub fn last_command() -> Result<String, HistoryError> {
    let shell = std::env::var("SHELL").unwrap_or_default();
    if shell.is_empty() {
        return Err(HistoryError::ShellUnset);
    }
    if Path::new(&shell).file_name() != Some(OsStr::new("zsh")) {
        return Err(HistoryError::UnsupportedShell(shell));
    }

    let home = dirs::home_dir().ok_or(HistoryError::HomeDirNotFound)?;
    let line = read_last_line(&home.join(".zsh_history"))?;
    debug!(%line, "last history line");
    parse_history_line(&line)
}

/// Reads at most the final [`TAIL_BYTES`] bytes of `path` and returns its
/// last non-empty line. Files shorter than the window are read whole.
fn read_last_line(path: &Path) -> Result<String, HistoryError> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    let take = len.min(TAIL_BYTES);

    file.seek(SeekFrom::End(-(take as i64)))?;
    let mut buf = Vec::with_capacity(take as usize);
    file.read_to_end(&mut buf)?;

    // zsh metafies some bytes; a lossy decode keeps the line structure.
    let text = String::from_utf8_lossy(&buf);
    let line = text
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .ok_or(HistoryError::EmptyHistory)?;
    Ok(line.to_string())
}
