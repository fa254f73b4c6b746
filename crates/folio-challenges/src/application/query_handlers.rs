//! Query handlers for the challenges playground.
//!
//! The stateless demos (pluralize, censor) are answered directly from
//! request input; the stateful ones are read from the stored playground.

use folio_core::error::DomainError;
use folio_core::repository::SessionRepository;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::censor::censor_text;
use crate::domain::playground::{AfterOutcome, CounterKey, CounterSnapshot, Playground};
use crate::domain::pluralize::{pluralize, split_word_list};

/// Result of the pluralize demo.
#[derive(Debug, Serialize)]
pub struct PluralizeView {
    /// Pluralized words in input order.
    pub words: Vec<String>,
}

/// Result of the censor demo.
#[derive(Debug, Serialize)]
pub struct CensorView {
    /// The censored text.
    pub censored: String,
    /// Whether anything was replaced.
    pub changed: bool,
}

/// Read-only view of a demo counter.
#[derive(Debug, Serialize)]
pub struct CounterView {
    pub label: String,
    pub value: i64,
    pub step: i64,
}

impl From<CounterSnapshot> for CounterView {
    fn from(snapshot: CounterSnapshot) -> Self {
        Self {
            label: snapshot.label,
            value: snapshot.value,
            step: snapshot.step,
        }
    }
}

/// Read-only view of the `after` demo.
#[derive(Debug, Serialize)]
pub struct AfterView {
    pub calls: u32,
    pub threshold: u32,
    pub remaining: u32,
    pub fired: bool,
    pub result: Option<String>,
}

impl From<AfterOutcome> for AfterView {
    fn from(outcome: AfterOutcome) -> Self {
        Self {
            calls: outcome.calls,
            threshold: outcome.threshold,
            remaining: outcome.remaining,
            fired: outcome.result.is_some(),
            result: outcome.result,
        }
    }
}

/// Read-only view of a whole playground.
#[derive(Debug, Serialize)]
pub struct PlaygroundView {
    /// The playground identifier.
    pub playground_id: Uuid,
    /// The two demo counters.
    pub counters: Vec<CounterView>,
    /// Day currently shown by the cycle demo.
    pub current_day: &'static str,
    /// Most recent days, oldest first.
    pub day_history: Vec<&'static str>,
    /// Cached `addByTwoOnce` result, if called.
    pub once_result: Option<i64>,
    /// State of the `after` demo.
    pub after: AfterView,
    /// Current version (save count).
    pub version: i64,
}

/// Pluralizes comma-separated input.
#[must_use]
pub fn pluralize_input(input: &str) -> PluralizeView {
    PluralizeView {
        words: pluralize(&split_word_list(input)),
    }
}

/// Censors `text` using comma-separated `bad_words`.
#[must_use]
pub fn censor_input(text: &str, bad_words: &str) -> CensorView {
    let words: Vec<&str> = bad_words.split(',').collect();
    let censored = censor_text(text, &words);
    CensorView {
        changed: censored != text,
        censored,
    }
}

/// Retrieves a playground by its identifier.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` if nothing is stored for the ID.
pub async fn get_playground_by_id(
    playground_id: Uuid,
    repo: &dyn SessionRepository<Playground>,
) -> Result<PlaygroundView, DomainError> {
    let stored = repo
        .load(playground_id)
        .await?
        .ok_or(DomainError::AggregateNotFound(playground_id))?;
    let playground = &stored.state;
    Ok(PlaygroundView {
        playground_id,
        counters: [CounterKey::PhotoEdits, CounterKey::NewClients]
            .into_iter()
            .map(|key| CounterSnapshot::from(playground.counter(key)).into())
            .collect(),
        current_day: playground.current_day(),
        day_history: playground.day_history().to_vec(),
        once_result: playground.once_result(),
        after: playground.after_outcome().into(),
        version: stored.version,
    })
}
