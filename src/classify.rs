//! Chunk severity detection and decoration.

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Severity of a raw stderr chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Plain,
}

impl Severity {
    /// Classify a raw chunk by case-sensitive substring search.
    ///
    /// "error" is checked before "warning", so a chunk containing both
    /// classifies as an error. Classification runs on whole chunks as the
    /// pipe delivers them, not on reassembled lines: a chunk spanning
    /// several lines gets a single severity, and a line split across
    /// chunks may be judged against only part of its own text.
    pub fn of_chunk(chunk: &str) -> Self {
        if chunk.contains("error") {
            Severity::Error
        } else if chunk.contains("warning") {
            Severity::Warning
        } else {
            Severity::Plain
        }
    }

    fn color(self) -> Option<&'static str> {
        match self {
            Severity::Error => Some(RED),
            Severity::Warning => Some(YELLOW),
            Severity::Plain => None,
        }
    }
}

/// Indent a chunk three spaces and wrap it in the severity's color.
///
/// `Plain` chunks pass through untouched.
pub fn decorate(severity: Severity, chunk: &str) -> String {
    match severity.color() {
        Some(color) => format!("{color}   {chunk}{RESET}"),
        None => chunk.to_string(),
    }
}
