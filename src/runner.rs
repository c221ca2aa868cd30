//! Shell command execution with live stderr classification.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::classify::{decorate, Severity};
use crate::error::RunnerError;
use crate::logger::{ConsoleLogger, Logger};
use crate::sink::LineSink;

/// Size of the stderr read buffer. Chunk boundaries are whatever the pipe
/// delivers, up to this many bytes at a time.
const READ_BUFFER_SIZE: usize = 4096;

/// Description of a shell command to run.
#[derive(Debug, Clone)]
pub struct ShellCommand {
    pub command: String,
    pub working_dir: Option<PathBuf>,
    pub env: HashMap<String, String>,
    pub stdin: Option<String>,
}

pub struct ShellCommandBuilder {
    command: ShellCommand,
}

impl ShellCommandBuilder {
    pub fn new(command: &str) -> Self {
        Self {
            command: ShellCommand {
                command: command.to_string(),
                working_dir: None,
                env: HashMap::new(),
                stdin: None,
            },
        }
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.command.working_dir = Some(dir.to_path_buf());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.command.env.insert(key.to_string(), value.to_string());
        self
    }

    pub fn stdin(mut self, input: String) -> Self {
        self.command.stdin = Some(input);
        self
    }

    pub fn build(self) -> ShellCommand {
        self.command
    }
}

/// Aggregated stderr output of a successful run.
///
/// A zero exit code with non-empty lists is legal: classification is about
/// output content, not process success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    /// Decorated warning chunks, in arrival order.
    pub warnings: Vec<String>,
    /// Decorated error chunks, in arrival order.
    pub errors: Vec<String>,
}

/// Options accepted by [`run_command`].
#[derive(Default)]
pub struct RunOptions {
    pub working_dir: Option<PathBuf>,
    pub stdin: Option<String>,
    /// Logger receiving live output. Resolved to [`ConsoleLogger`] at call
    /// time when absent.
    pub logger: Option<Arc<dyn Logger>>,
}

/// Seam for executing shell commands, so callers can substitute runners.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(
        &self,
        command: ShellCommand,
        logger: &dyn Logger,
    ) -> Result<RunResult, RunnerError>;
}

/// Tokio-backed [`CommandRunner`] spawning through the platform shell.
///
/// Stderr is read in raw chunks and classified per chunk; reassembled lines
/// reach the logger live, strictly in byte-arrival order. Stdout is
/// discarded. Each run owns its process handle and line buffers; nothing is
/// shared across concurrent runs.
pub struct ShellRunner;

impl ShellRunner {
    fn configure_command(command: &ShellCommand) -> tokio::process::Command {
        let mut cmd = if cfg!(windows) {
            let mut c = tokio::process::Command::new("cmd");
            c.arg("/C").arg(&command.command);
            c
        } else {
            let mut c = tokio::process::Command::new("sh");
            c.arg("-c").arg(&command.command);
            c
        };

        for (key, value) in &command.env {
            cmd.env(key, value);
        }
        if let Some(dir) = &command.working_dir {
            cmd.current_dir(dir);
        }

        cmd.stdin(if command.stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        });
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::piped());
        cmd.kill_on_drop(true);
        cmd
    }

    fn map_spawn_error(error: std::io::Error, command: &ShellCommand) -> RunnerError {
        if error.kind() == std::io::ErrorKind::NotFound {
            RunnerError::CommandNotFound(command.command.clone())
        } else {
            RunnerError::SpawnFailed {
                command: command.command.clone(),
                source: error,
            }
        }
    }

    async fn write_stdin(
        child: &mut tokio::process::Child,
        input: &str,
    ) -> Result<(), RunnerError> {
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.as_bytes()).await?;
            stdin.shutdown().await?;
        }
        Ok(())
    }

    fn check_exit(status: std::process::ExitStatus) -> Result<(), RunnerError> {
        if status.success() {
            return Ok(());
        }
        match status.code() {
            Some(code) => Err(RunnerError::ExitCode(code)),
            None => Err(Self::signal_error(status)),
        }
    }

    #[cfg(unix)]
    fn signal_error(status: std::process::ExitStatus) -> RunnerError {
        use std::os::unix::process::ExitStatusExt;
        match status.signal() {
            Some(signal) => RunnerError::Signal(signal),
            None => RunnerError::ExitCode(-1),
        }
    }

    #[cfg(not(unix))]
    fn signal_error(_status: std::process::ExitStatus) -> RunnerError {
        RunnerError::ExitCode(-1)
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(
        &self,
        command: ShellCommand,
        logger: &dyn Logger,
    ) -> Result<RunResult, RunnerError> {
        tracing::debug!(
            command = %command.command,
            working_dir = ?command.working_dir,
            "spawning shell command"
        );

        let mut child = Self::configure_command(&command)
            .spawn()
            .map_err(|e| Self::map_spawn_error(e, &command))?;

        if let Some(input) = &command.stdin {
            Self::write_stdin(&mut child, input).await?;
        }

        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| RunnerError::Io(std::io::Error::other("failed to capture stderr")))?;

        let mut warnings: Vec<String> = Vec::new();
        let mut errors: Vec<String> = Vec::new();
        let mut log_sink = LineSink::new(|line: &str| logger.log(line));
        let mut warn_sink = LineSink::new(|line: &str| logger.warn(line));

        let mut buf = [0u8; READ_BUFFER_SIZE];
        loop {
            let n = stderr.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            let chunk = String::from_utf8_lossy(&buf[..n]);
            match Severity::of_chunk(&chunk) {
                Severity::Error => {
                    let decorated = decorate(Severity::Error, &chunk);
                    errors.push(decorated.clone());
                    warn_sink.push(Some(&decorated));
                }
                Severity::Warning => {
                    let decorated = decorate(Severity::Warning, &chunk);
                    warnings.push(decorated.clone());
                    log_sink.push(Some(&decorated));
                }
                Severity::Plain => log_sink.push(Some(&chunk)),
            }
        }

        // stderr hit end of stream; flush unterminated tails to the logger
        // before the exit code decides the outcome
        log_sink.push(None);
        warn_sink.push(None);

        let status = child.wait().await?;
        tracing::debug!(
            command = %command.command,
            status = ?status,
            warnings = warnings.len(),
            errors = errors.len(),
            "shell command exited"
        );
        Self::check_exit(status)?;

        Ok(RunResult { warnings, errors })
    }
}

/// Run `command` through the platform shell, streaming classified stderr
/// lines to the logger and collecting decorated warnings and errors.
///
/// Resolves with a [`RunResult`] only on exit code zero; a non-zero exit
/// (or a failure to spawn) surfaces as [`RunnerError`]. Lines already
/// delivered to the logger are never retracted on failure.
pub async fn run_command(command: &str, options: RunOptions) -> Result<RunResult, RunnerError> {
    let logger: Arc<dyn Logger> = options
        .logger
        .unwrap_or_else(|| Arc::new(ConsoleLogger));

    let mut builder = ShellCommandBuilder::new(command);
    if let Some(dir) = &options.working_dir {
        builder = builder.current_dir(dir);
    }
    if let Some(input) = options.stdin {
        builder = builder.stdin(input);
    }

    ShellRunner.run(builder.build(), logger.as_ref()).await
}
