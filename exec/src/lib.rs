//! Synchronous subprocess wrapper for the corrected git invocation: spawns
//! the command, drains stdout and stderr concurrently, and surfaces the exit
//! status without reinterpreting it.

use std::io;
use std::io::Read;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;

use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        source: io::Error,
    },
    #[error("failed to read command output: {0}")]
    Io(#[from] io::Error),
    #[error("command exited with {0}")]
    ExitStatus(ExitStatus),
}

/// Captured result of one completed subprocess run.
#[derive(Debug)]
pub struct Invoked {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub status: ExitStatus,
}

impl Invoked {
    /// The stream to relay to the user: stdout when it carries anything,
    /// otherwise stderr.
    pub fn output(&self) -> &[u8] {
        if self.stdout.is_empty() {
            &self.stderr
        } else {
            &self.stdout
        }
    }

    /// Maps a non-success exit status into [`InvokeError::ExitStatus`] so
    /// the caller can propagate the child's failure as its own.
    pub fn exit_ok(&self) -> Result<(), InvokeError> {
        if self.status.success() {
            Ok(())
        } else {
            Err(InvokeError::ExitStatus(self.status))
        }
    }
}

/// Runs `program` with `args` to completion and captures both output
/// streams.
///
/// Stderr is drained on a helper thread while stdout is read here, so a
/// child that fills one pipe before writing the other cannot deadlock the
/// relay. The child is always waited on.
pub fn invoke(program: &str, args: &[String]) -> Result<Invoked, InvokeError> {
    debug!(program, ?args, "spawning");
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| InvokeError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let mut stdout_pipe = child
        .stdout
        .take()
        .ok_or_else(|| io::Error::other("child stdout was not captured"))?;
    let mut stderr_pipe = child
        .stderr
        .take()
        .ok_or_else(|| io::Error::other("child stderr was not captured"))?;

    let stderr_reader = std::thread::spawn(move || -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        stderr_pipe.read_to_end(&mut buf)?;
        Ok(buf)
    });

    let mut stdout = Vec::new();
    stdout_pipe.read_to_end(&mut stdout)?;
    let stderr = stderr_reader
        .join()
        .map_err(|_| io::Error::other("stderr reader thread panicked"))??;
    let status = child.wait()?;
    debug!(?status, "child exited");

    Ok(Invoked {
        stdout,
        stderr,
        status,
    })
}
