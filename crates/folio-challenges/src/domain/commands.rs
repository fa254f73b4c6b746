//! Commands for the challenges playground.

use folio_core::command::Command;
use uuid::Uuid;

use super::playground::{CounterAction, CounterKey};

/// Command to call the run-once demo.
#[derive(Debug, Clone)]
pub struct CallOnce {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The playground the demo lives in.
    pub playground_id: Uuid,
    /// Argument passed to `addByTwoOnce`.
    pub argument: i64,
}

impl Command for CallOnce {
    fn command_type(&self) -> &'static str {
        "challenges.call_once"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to apply an action to a demo counter.
#[derive(Debug, Clone)]
pub struct ApplyCounterAction {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The playground the demo lives in.
    pub playground_id: Uuid,
    /// Which counter to act on.
    pub counter: CounterKey,
    /// What to do to it.
    pub action: CounterAction,
}

impl Command for ApplyCounterAction {
    fn command_type(&self) -> &'static str {
        "challenges.apply_counter_action"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to advance the day cycle.
#[derive(Debug, Clone)]
pub struct AdvanceDay {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The playground the demo lives in.
    pub playground_id: Uuid,
}

impl Command for AdvanceDay {
    fn command_type(&self) -> &'static str {
        "challenges.advance_day"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to click the `after` demo once.
#[derive(Debug, Clone)]
pub struct CallAfter {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The playground the demo lives in.
    pub playground_id: Uuid,
}

impl Command for CallAfter {
    fn command_type(&self) -> &'static str {
        "challenges.call_after"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to replace the `after` demo with a new threshold.
#[derive(Debug, Clone)]
pub struct RearmAfter {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The playground the demo lives in.
    pub playground_id: Uuid,
    /// Calls needed before the new gate fires.
    pub threshold: u32,
}

impl Command for RearmAfter {
    fn command_type(&self) -> &'static str {
        "challenges.rearm_after"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
