//! The line-oriented logging capability consumed by the runner.

use std::sync::Mutex;

/// Destination for the runner's live output.
///
/// `log` receives plain and warning lines, `warn` receives error lines,
/// once per fully reassembled (or flushed) line. Implementations may be
/// shared across concurrent runs; the runner only ever calls these two
/// operations.
pub trait Logger: Send + Sync {
    fn log(&self, line: &str);
    fn warn(&self, line: &str);
}

/// Default logger writing `log` to stdout and `warn` to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, line: &str) {
        println!("{line}");
    }

    fn warn(&self, line: &str) {
        eprintln!("{line}");
    }
}

/// Which logger operation received a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Log,
    Warn,
}

/// Logger recording every delivered line, for assertions in tests.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<(Channel, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded `(channel, line)` pairs in arrival order.
    pub fn lines(&self) -> Vec<(Channel, String)> {
        self.lines.lock().unwrap().clone()
    }

    /// Only the lines delivered to the given channel.
    pub fn channel(&self, channel: Channel) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, line)| line.clone())
            .collect()
    }

    fn record(&self, channel: Channel, line: &str) {
        self.lines.lock().unwrap().push((channel, line.to_string()));
    }
}

impl Logger for MemoryLogger {
    fn log(&self, line: &str) {
        self.record(Channel::Log, line);
    }

    fn warn(&self, line: &str) {
        self.record(Channel::Warn, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_preserves_order_across_channels() {
        let logger = MemoryLogger::new();
        logger.log("first");
        logger.warn("second");
        logger.log("third");

        assert_eq!(
            logger.lines(),
            vec![
                (Channel::Log, "first".to_string()),
                (Channel::Warn, "second".to_string()),
                (Channel::Log, "third".to_string()),
            ]
        );
        assert_eq!(logger.channel(Channel::Warn), vec!["second"]);
    }
}
