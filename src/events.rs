//! Init workflow lifecycle events.
//!
//! A closed set of named events that an init-workflow orchestrator fires
//! around command runs, each rendering one fixed console message. The
//! runner never emits these itself; they share the [`Logger`] capability
//! so a caller can route workflow narration and command output to the same
//! destination.

use crate::logger::Logger;

/// Lifecycle events of the init workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitEvent {
    Start,
    CopyingProjectFiles { destination_path: String },
    Succeed,
    Fail { error: String },
}

impl InitEvent {
    /// Event name as fired by workflow orchestrators.
    pub fn name(&self) -> &'static str {
        match self {
            InitEvent::Start => "init:start",
            InitEvent::CopyingProjectFiles { .. } => "init:copyingProjectFiles",
            InitEvent::Succeed => "init:succeed",
            InitEvent::Fail { .. } => "init:fail",
        }
    }

    /// The fixed console message for this event.
    pub fn message(&self) -> String {
        match self {
            InitEvent::Start => "\nStarting init...\n================".to_string(),
            InitEvent::CopyingProjectFiles { destination_path } => {
                format!("\n> Copying project files to {destination_path}")
            }
            InitEvent::Succeed => "\nInit successful, Ready to launch!\n".to_string(),
            InitEvent::Fail { error } => {
                format!("\nSomething went wrong while copying files!\n{error}\n")
            }
        }
    }

    /// Print the event's message through the logger.
    pub fn emit(&self, logger: &dyn Logger) {
        logger.log(&self.message());
    }
}
