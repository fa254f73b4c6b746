//! The playground aggregate: one visitor's set of live challenge demos.

use super::after::After;
use super::counter::Counter;
use super::cycle::CycleIterator;
use super::once::Once;
use folio_core::error::DomainError;
use serde::Deserialize;

/// Days the cycle demo loops through.
pub const WEEKEND_DAYS: [&str; 3] = ["Friday", "Saturday", "Sunday"];

/// Number of days kept in the cycle demo's history strip.
const DAY_HISTORY_LIMIT: usize = 6;

/// Calls the `after` demo needs before it fires, until re-armed.
pub const DEFAULT_AFTER_THRESHOLD: u32 = 3;

/// Largest threshold the `after` demo accepts.
pub const MAX_AFTER_THRESHOLD: u32 = 10;

fn add_by_two(n: i64) -> i64 {
    n + 2
}

fn hello(subject: &'static str) -> String {
    format!("hello {subject}")
}

/// Which of the two demo counters an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterKey {
    /// "Photo Edits", starts at 0 with step 2.
    PhotoEdits,
    /// "New Clients", starts at 10 with step 1.
    NewClients,
}

/// An operation on a demo counter.
///
/// Deserializes from `{"type": "increment"}` or `{"type": "reset", "value": 0}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CounterAction {
    Increment,
    Decrement,
    /// The demo's reset button always resets to 0; other values are allowed.
    Reset(i64),
    SetStep(i64),
}

/// Result of calling the run-once demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnceOutcome {
    /// The argument passed on this call.
    pub argument: i64,
    /// The value returned (always the first call's result).
    pub result: i64,
    /// Whether this call executed the callback body.
    pub executed: bool,
}

/// Result of calling the `after` demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AfterOutcome {
    pub calls: u32,
    pub threshold: u32,
    pub remaining: u32,
    /// `None` until the gate opens.
    pub result: Option<String>,
}

/// Result of advancing the day cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOutcome {
    /// The day handed out by this advance.
    pub day: &'static str,
    /// Most recent days, oldest first, ending with `day`.
    pub history: Vec<&'static str>,
}

/// Snapshot of a demo counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub label: String,
    pub value: i64,
    pub step: i64,
}

impl From<&Counter> for CounterSnapshot {
    fn from(counter: &Counter) -> Self {
        Self {
            label: counter.label().to_owned(),
            value: counter.value(),
            step: counter.step(),
        }
    }
}

/// One visitor's demos. Cloned in and out of the session repository.
#[derive(Debug, Clone)]
pub struct Playground {
    photo_edits: Counter,
    new_clients: Counter,
    days: CycleIterator<&'static str>,
    current_day: &'static str,
    day_history: Vec<&'static str>,
    add_by_two_once: Once<fn(i64) -> i64, i64>,
    greeting: After<fn(&'static str) -> String>,
    last_greeting: Option<String>,
}

impl Default for Playground {
    fn default() -> Self {
        let [first, rest @ ..] = WEEKEND_DAYS;
        Self {
            photo_edits: Counter::new("Photo Edits", 0, 2),
            new_clients: Counter::new("New Clients", 10, 1),
            days: CycleIterator::from_first(first, rest),
            current_day: first,
            day_history: vec![first],
            add_by_two_once: Once::new(add_by_two as fn(i64) -> i64),
            greeting: After::new(DEFAULT_AFTER_THRESHOLD, hello as fn(&'static str) -> String),
            last_greeting: None,
        }
    }
}

impl Playground {
    /// Calls `addByTwoOnce(argument)`.
    pub fn call_once(&mut self, argument: i64) -> OnceOutcome {
        let executed = !self.add_by_two_once.has_run();
        let result = *self.add_by_two_once.call(argument);
        OnceOutcome {
            argument,
            result,
            executed,
        }
    }

    /// Applies an action to one of the demo counters.
    pub fn apply_counter_action(&mut self, key: CounterKey, action: CounterAction) -> CounterSnapshot {
        let counter = self.counter_mut(key);
        match action {
            CounterAction::Increment => {
                counter.increment();
            }
            CounterAction::Decrement => {
                counter.decrement();
            }
            CounterAction::Reset(value) => {
                counter.reset(value);
            }
            CounterAction::SetStep(step) => counter.set_step(step),
        }
        CounterSnapshot::from(&*counter)
    }

    /// Advances the day cycle and returns the day handed out.
    pub fn advance_day(&mut self) -> &'static str {
        let day = *self.days.advance();
        self.current_day = day;
        self.day_history.push(day);
        if self.day_history.len() > DAY_HISTORY_LIMIT {
            let overflow = self.day_history.len() - DAY_HISTORY_LIMIT;
            self.day_history.drain(..overflow);
        }
        day
    }

    /// Registers one click on the `after` demo.
    pub fn call_after(&mut self) -> AfterOutcome {
        if let Some(greeting) = self.greeting.call("world") {
            self.last_greeting = Some(greeting);
        }
        self.after_outcome()
    }

    /// Replaces the `after` demo with a fresh gate of `threshold` calls.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` unless `1 <= threshold <= 10`.
    pub fn rearm_after(&mut self, threshold: u32) -> Result<AfterOutcome, DomainError> {
        if !(1..=MAX_AFTER_THRESHOLD).contains(&threshold) {
            return Err(DomainError::Validation(format!(
                "after threshold must be between 1 and {MAX_AFTER_THRESHOLD}"
            )));
        }
        self.greeting = After::new(threshold, hello as fn(&'static str) -> String);
        self.last_greeting = None;
        Ok(self.after_outcome())
    }

    #[must_use]
    pub fn counter(&self, key: CounterKey) -> &Counter {
        match key {
            CounterKey::PhotoEdits => &self.photo_edits,
            CounterKey::NewClients => &self.new_clients,
        }
    }

    #[must_use]
    pub fn current_day(&self) -> &'static str {
        self.current_day
    }

    #[must_use]
    pub fn day_history(&self) -> &[&'static str] {
        &self.day_history
    }

    /// The cached `addByTwoOnce` result, if it has run.
    #[must_use]
    pub fn once_result(&self) -> Option<i64> {
        self.add_by_two_once.cached().copied()
    }

    #[must_use]
    pub fn after_outcome(&self) -> AfterOutcome {
        AfterOutcome {
            calls: self.greeting.calls(),
            threshold: self.greeting.threshold(),
            remaining: self.greeting.remaining(),
            result: self.last_greeting.clone(),
        }
    }

    fn counter_mut(&mut self, key: CounterKey) -> &mut Counter {
        match key {
            CounterKey::PhotoEdits => &mut self.photo_edits,
            CounterKey::NewClients => &mut self.new_clients,
        }
    }
}
