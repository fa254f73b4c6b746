//! Commands for the terminal widget.

use folio_core::command::Command;
use uuid::Uuid;

use super::app::TerminalApp;

/// Command to switch the terminal to another app.
#[derive(Debug, Clone)]
pub struct SelectApp {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The terminal to switch.
    pub terminal_id: Uuid,
    /// The app to start.
    pub app: TerminalApp,
}

impl Command for SelectApp {
    fn command_type(&self) -> &'static str {
        "terminal.select_app"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to submit one line of input to the active app.
#[derive(Debug, Clone)]
pub struct SubmitLine {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The terminal receiving input.
    pub terminal_id: Uuid,
    /// The raw line as typed.
    pub line: String,
}

impl Command for SubmitLine {
    fn command_type(&self) -> &'static str {
        "terminal.submit_line"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
