use std::io;

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Failed to spawn '{command}': {source}")]
    SpawnFailed { command: String, source: io::Error },

    #[error("Process exited with code {0}")]
    ExitCode(i32),

    #[error("Process terminated by signal {0}")]
    Signal(i32),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl RunnerError {
    /// Exit code carried by the error, if the process ran to an exit.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            RunnerError::ExitCode(code) => Some(*code),
            _ => None,
        }
    }
}
