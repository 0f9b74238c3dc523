//! External command execution.

use crate::error::{JavaCheckError, Result};
use std::fmt;
use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// How often a child with a timeout is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    fn from_status(status: ExitStatus, stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: status.code(),
            stdout,
            stderr,
            duration,
            success: status.success(),
        }
    }

    /// Standard output followed by standard error as one blob.
    pub fn combined_output(&self) -> String {
        let mut combined = String::with_capacity(self.stdout.len() + self.stderr.len() + 1);
        combined.push_str(&self.stdout);
        if !self.stdout.is_empty() && !self.stdout.ends_with('\n') && !self.stderr.is_empty() {
            combined.push('\n');
        }
        combined.push_str(&self.stderr);
        combined
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Give up if the command (including draining its output) takes longer
    /// than this. None waits forever.
    pub timeout: Option<Duration>,
}

/// Which output stream a reader thread drains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Stdout => f.write_str("stdout"),
            Stream::Stderr => f.write_str("stderr"),
        }
    }
}

type ReaderMessage = (Stream, io::Result<String>);

/// Render a program and its arguments the way a user would type them.
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run a program directly (no shell) and capture both output streams.
///
/// A non-zero exit status is reported through [`CommandResult::success`],
/// not as an error. Errors are reserved for failing to start the program,
/// failing to wait on it or read its output, or exceeding `options.timeout`.
/// The timeout covers the whole run: a child that exits but leaves a
/// background process holding its pipes open still times out.
pub fn execute(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let deadline = options.timeout.map(|t| start + t);
    let command = display_command(program, args);

    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|e| JavaCheckError::CommandFailed {
        command: command.clone(),
        message: e.to_string(),
    })?;

    // Drain both pipes on their own threads so a chatty child can't block
    // on a full pipe while we wait on it.
    let (tx, rx) = mpsc::channel();
    let mut readers = 0;
    if let Some(stdout) = child.stdout.take() {
        spawn_reader(Stream::Stdout, stdout, tx.clone());
        readers += 1;
    }
    if let Some(stderr) = child.stderr.take() {
        spawn_reader(Stream::Stderr, stderr, tx.clone());
        readers += 1;
    }
    drop(tx);

    let status = match options.timeout {
        Some(timeout) => wait_until(&mut child, start + timeout, timeout, &command)?,
        None => child.wait().map_err(|e| JavaCheckError::CommandFailed {
            command: command.clone(),
            message: e.to_string(),
        })?,
    };

    let (stdout, stderr) = collect_output(&rx, readers, deadline, options.timeout, &command)?;

    Ok(CommandResult::from_status(
        status,
        stdout,
        stderr,
        start.elapsed(),
    ))
}

fn spawn_reader<R>(stream: Stream, mut pipe: R, tx: Sender<ReaderMessage>)
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = Vec::new();
        let result = pipe
            .read_to_end(&mut buf)
            .map(|_| String::from_utf8_lossy(&buf).into_owned());
        let _ = tx.send((stream, result));
    });
}

/// Wait for `readers` reader threads to report, giving up at `deadline`.
///
/// A read error, or a reader that goes away without reporting, is a
/// `CommandFailed`; running past the deadline is a `Timeout`.
fn collect_output(
    rx: &Receiver<ReaderMessage>,
    readers: usize,
    deadline: Option<Instant>,
    timeout: Option<Duration>,
    command: &str,
) -> Result<(String, String)> {
    let mut stdout = String::new();
    let mut stderr = String::new();

    for _ in 0..readers {
        let message = match deadline {
            Some(deadline) => {
                let remaining = deadline.saturating_duration_since(Instant::now());
                rx.recv_timeout(remaining)
            }
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        let (stream, result) = match message {
            Ok(message) => message,
            Err(RecvTimeoutError::Timeout) => {
                return Err(JavaCheckError::Timeout {
                    command: command.to_string(),
                    timeout: timeout.unwrap_or_default(),
                });
            }
            Err(RecvTimeoutError::Disconnected) => {
                return Err(JavaCheckError::CommandFailed {
                    command: command.to_string(),
                    message: "output reader stopped without reporting".to_string(),
                });
            }
        };

        let text = result.map_err(|e| JavaCheckError::CommandFailed {
            command: command.to_string(),
            message: format!("failed to read {}: {}", stream, e),
        })?;

        match stream {
            Stream::Stdout => stdout = text,
            Stream::Stderr => stderr = text,
        }
    }

    Ok((stdout, stderr))
}

fn wait_until(
    child: &mut Child,
    deadline: Instant,
    timeout: Duration,
    command: &str,
) -> Result<ExitStatus> {
    loop {
        let polled = child.try_wait().map_err(|e| JavaCheckError::CommandFailed {
            command: command.to_string(),
            message: e.to_string(),
        })?;
        if let Some(status) = polled {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(JavaCheckError::Timeout {
                command: command.to_string(),
                timeout,
            });
        }
        thread::sleep(POLL_INTERVAL);
    }
}
