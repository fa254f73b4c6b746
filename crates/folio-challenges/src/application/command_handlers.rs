//! Command handlers for the challenges playground.
//!
//! Each handler loads the visitor's playground (starting a fresh one when
//! none is stored), runs the demo operation, and saves the result with the
//! loaded version.

use folio_core::clock::Clock;
use folio_core::command::Command;
use folio_core::error::DomainError;
use folio_core::repository::SessionRepository;
use tracing::debug;
use uuid::Uuid;

use crate::domain::commands::{AdvanceDay, ApplyCounterAction, CallAfter, CallOnce, RearmAfter};
use crate::domain::playground::{
    AfterOutcome, CounterSnapshot, DayOutcome, OnceOutcome, Playground,
};

/// Loads a playground, defaulting to a fresh one at version 0.
///
/// # Errors
///
/// Returns `DomainError` if the repository load fails.
pub(crate) async fn load_or_default(
    playground_id: Uuid,
    repo: &dyn SessionRepository<Playground>,
) -> Result<(Playground, i64), DomainError> {
    Ok(repo
        .load(playground_id)
        .await?
        .map_or_else(|| (Playground::default(), 0), |stored| (stored.state, stored.version)))
}

async fn run<T>(
    command: &dyn Command,
    playground_id: Uuid,
    clock: &dyn Clock,
    repo: &dyn SessionRepository<Playground>,
    operation: impl FnOnce(&mut Playground) -> Result<T, DomainError> + Send,
) -> Result<T, DomainError> {
    let (mut playground, version) = load_or_default(playground_id, repo).await?;
    let outcome = operation(&mut playground)?;
    let saved_version = repo
        .save(playground_id, version, playground, clock.now())
        .await?;
    debug!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        %playground_id,
        version = saved_version,
        "playground updated"
    );
    Ok(outcome)
}

/// Handles the `CallOnce` command.
///
/// # Errors
///
/// Returns `DomainError` if loading or saving the playground fails.
pub async fn handle_call_once(
    command: &CallOnce,
    clock: &dyn Clock,
    repo: &dyn SessionRepository<Playground>,
) -> Result<OnceOutcome, DomainError> {
    let argument = command.argument;
    run(command, command.playground_id, clock, repo, |playground| {
        Ok(playground.call_once(argument))
    })
    .await
}

/// Handles the `ApplyCounterAction` command.
///
/// # Errors
///
/// Returns `DomainError` if loading or saving the playground fails.
pub async fn handle_apply_counter_action(
    command: &ApplyCounterAction,
    clock: &dyn Clock,
    repo: &dyn SessionRepository<Playground>,
) -> Result<CounterSnapshot, DomainError> {
    let (counter, action) = (command.counter, command.action);
    run(command, command.playground_id, clock, repo, |playground| {
        Ok(playground.apply_counter_action(counter, action))
    })
    .await
}

/// Handles the `AdvanceDay` command, returning the day handed out and the
/// updated history strip.
///
/// # Errors
///
/// Returns `DomainError` if loading or saving the playground fails.
pub async fn handle_advance_day(
    command: &AdvanceDay,
    clock: &dyn Clock,
    repo: &dyn SessionRepository<Playground>,
) -> Result<DayOutcome, DomainError> {
    run(command, command.playground_id, clock, repo, |playground| {
        let day = playground.advance_day();
        Ok(DayOutcome {
            day,
            history: playground.day_history().to_vec(),
        })
    })
    .await
}

/// Handles the `CallAfter` command.
///
/// # Errors
///
/// Returns `DomainError` if loading or saving the playground fails.
pub async fn handle_call_after(
    command: &CallAfter,
    clock: &dyn Clock,
    repo: &dyn SessionRepository<Playground>,
) -> Result<AfterOutcome, DomainError> {
    run(command, command.playground_id, clock, repo, |playground| {
        Ok(playground.call_after())
    })
    .await
}

/// Handles the `RearmAfter` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` for an out-of-range threshold, or
/// `DomainError` if loading or saving the playground fails.
pub async fn handle_rearm_after(
    command: &RearmAfter,
    clock: &dyn Clock,
    repo: &dyn SessionRepository<Playground>,
) -> Result<AfterOutcome, DomainError> {
    let threshold = command.threshold;
    run(command, command.playground_id, clock, repo, |playground| {
        playground.rearm_after(threshold)
    })
    .await
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use folio_core::error::DomainError;
    use uuid::Uuid;

    use crate::application::command_handlers::{
        handle_advance_day, handle_apply_counter_action, handle_call_after, handle_call_once,
        handle_rearm_after,
    };
    use crate::domain::commands::{AdvanceDay, ApplyCounterAction, CallAfter, CallOnce, RearmAfter};
    use crate::domain::playground::{CounterAction, CounterKey, Playground};
    use folio_test_support::{FailingSessionRepository, FixedClock, RecordingSessionRepository};

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    #[tokio::test]
    async fn test_handle_call_once_on_new_playground_saves_at_version_zero() {
        let playground_id = Uuid::new_v4();
        let repo: RecordingSessionRepository<Playground> =
            RecordingSessionRepository::empty();
        let command = CallOnce {
            correlation_id: Uuid::new_v4(),
            playground_id,
            argument: 5,
        };

        let outcome = handle_call_once(&command, &fixed_clock(), &repo).await.unwrap();

        assert_eq!(outcome.result, 7);
        assert!(outcome.executed);
        let saved = repo.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, playground_id);
        assert_eq!(saved[0].1, 0);
        assert_eq!(saved[0].2.once_result(), Some(7));
    }

    #[tokio::test]
    async fn test_handle_call_once_uses_stored_playground() {
        let playground_id = Uuid::new_v4();
        let mut stored = Playground::default();
        stored.call_once(40);
        let repo =
            RecordingSessionRepository::with_state(playground_id, 4, stored, fixed_clock().0);
        let command = CallOnce {
            correlation_id: Uuid::new_v4(),
            playground_id,
            argument: 1,
        };

        let outcome = handle_call_once(&command, &fixed_clock(), &repo).await.unwrap();

        assert_eq!(outcome.result, 42);
        assert!(!outcome.executed);
        assert_eq!(repo.saved()[0].1, 4);
    }

    #[tokio::test]
    async fn test_handle_apply_counter_action_returns_snapshot() {
        let repo: RecordingSessionRepository<Playground> =
            RecordingSessionRepository::empty();
        let command = ApplyCounterAction {
            correlation_id: Uuid::new_v4(),
            playground_id: Uuid::new_v4(),
            counter: CounterKey::PhotoEdits,
            action: CounterAction::Increment,
        };

        let snapshot = handle_apply_counter_action(&command, &fixed_clock(), &repo)
            .await
            .unwrap();

        assert_eq!(snapshot.label, "Photo Edits");
        assert_eq!(snapshot.value, 2);
    }

    #[tokio::test]
    async fn test_handle_advance_day_returns_first_day_on_new_playground() {
        let repo: RecordingSessionRepository<Playground> =
            RecordingSessionRepository::empty();
        let command = AdvanceDay {
            correlation_id: Uuid::new_v4(),
            playground_id: Uuid::new_v4(),
        };

        let outcome = handle_advance_day(&command, &fixed_clock(), &repo).await.unwrap();

        assert_eq!(outcome.day, "Friday");
        assert_eq!(outcome.history, vec!["Friday", "Friday"]);
    }

    #[tokio::test]
    async fn test_handle_call_after_counts_click() {
        let repo: RecordingSessionRepository<Playground> =
            RecordingSessionRepository::empty();
        let command = CallAfter {
            correlation_id: Uuid::new_v4(),
            playground_id: Uuid::new_v4(),
        };

        let outcome = handle_call_after(&command, &fixed_clock(), &repo).await.unwrap();

        assert_eq!(outcome.calls, 1);
        assert_eq!(outcome.remaining, 2);
        assert!(outcome.result.is_none());
    }

    #[tokio::test]
    async fn test_handle_rearm_after_with_invalid_threshold_saves_nothing() {
        let repo: RecordingSessionRepository<Playground> =
            RecordingSessionRepository::empty();
        let command = RearmAfter {
            correlation_id: Uuid::new_v4(),
            playground_id: Uuid::new_v4(),
            threshold: 0,
        };

        let result = handle_rearm_after(&command, &fixed_clock(), &repo).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(repo.saved().is_empty());
    }

    #[tokio::test]
    async fn test_handler_propagates_repository_failure() {
        let command = AdvanceDay {
            correlation_id: Uuid::new_v4(),
            playground_id: Uuid::new_v4(),
        };

        let result = handle_advance_day(&command, &fixed_clock(), &FailingSessionRepository).await;

        match result.unwrap_err() {
            DomainError::Infrastructure(msg) => assert_eq!(msg, "connection refused"),
            other => panic!("expected Infrastructure, got {other:?}"),
        }
    }
}
