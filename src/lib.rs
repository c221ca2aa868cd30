//! # cmdstream
//!
//! Run a shell command, stream its stderr live, and collect classified
//! warnings and errors.
//!
//! Stderr arrives from the pipe in arbitrary chunks. Each raw chunk is
//! classified once (by substring, "error" before "warning"), decorated for
//! the matching severity, and routed both to a pluggable [`Logger`] — as
//! fully reassembled lines, in arrival order — and into the aggregated
//! result lists. A zero exit code resolves to a [`RunResult`]; anything
//! else surfaces as a [`RunnerError`].
//!
//! ## Modules
//!
//! - `line_buffer` - Resumable line splitting over arbitrarily-chunked text
//! - `sink` - Push-style adapter from chunks to per-line delivery
//! - `classify` - Chunk severity detection and ANSI decoration
//! - `logger` - The `log`/`warn` capability consumed by the runner
//! - `runner` - Shell command execution and result aggregation
//! - `events` - Init workflow lifecycle events (external collaborator)
//! - `error` - Error taxonomy for spawn, stream, and exit failures

pub mod classify;
pub mod error;
pub mod events;
pub mod line_buffer;
pub mod logger;
pub mod runner;
pub mod sink;

pub use classify::Severity;
pub use error::RunnerError;
pub use events::InitEvent;
pub use line_buffer::LineBuffer;
pub use logger::{Channel, ConsoleLogger, Logger, MemoryLogger};
pub use runner::{
    run_command, CommandRunner, RunOptions, RunResult, ShellCommand, ShellCommandBuilder,
    ShellRunner,
};
pub use sink::LineSink;
