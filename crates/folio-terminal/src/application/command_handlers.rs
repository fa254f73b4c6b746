//! Command handlers for the terminal widget.
//!
//! Handlers load the visitor's terminal (creating one when none is stored),
//! apply the command, save with the loaded version, and return the lines
//! the command produced.

use std::sync::Mutex;

use folio_core::clock::Clock;
use folio_core::command::Command;
use folio_core::error::DomainError;
use folio_core::repository::SessionRepository;
use folio_core::rng::DeterministicRng;
use tracing::debug;
use uuid::Uuid;

use crate::domain::commands::{SelectApp, SubmitLine};
use crate::domain::terminal::Terminal;

async fn load_or_create(
    terminal_id: Uuid,
    repo: &dyn SessionRepository<Terminal>,
) -> Result<(Terminal, i64), DomainError> {
    Ok(repo
        .load(terminal_id)
        .await?
        .map_or_else(|| (Terminal::new(terminal_id), 0), |stored| (stored.state, stored.version)))
}

async fn save(
    command: &dyn Command,
    terminal: Terminal,
    version: i64,
    clock: &dyn Clock,
    repo: &dyn SessionRepository<Terminal>,
) -> Result<(), DomainError> {
    let terminal_id = terminal.id;
    let app = terminal.active_app();
    let saved_version = repo.save(terminal_id, version, terminal, clock.now()).await?;
    debug!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        %terminal_id,
        %app,
        version = saved_version,
        "terminal updated"
    );
    Ok(())
}

/// Handles the `SelectApp` command, returning the new app's banner.
///
/// # Errors
///
/// Returns `DomainError` if loading or saving the terminal fails.
pub async fn handle_select_app(
    command: &SelectApp,
    clock: &dyn Clock,
    repo: &dyn SessionRepository<Terminal>,
) -> Result<Vec<String>, DomainError> {
    let (mut terminal, version) = load_or_create(command.terminal_id, repo).await?;
    let banner = terminal.select_app(command.app);
    save(command, terminal, version, clock, repo).await?;
    Ok(banner)
}

/// Handles the `SubmitLine` command, returning the echoed input and the
/// app's reply. Blank lines return nothing and are not saved.
///
/// The `Mutex` is locked only around the synchronous domain call.
///
/// # Errors
///
/// Returns `DomainError` if loading or saving the terminal fails, or if the
/// RNG mutex is poisoned.
pub async fn handle_submit_line(
    command: &SubmitLine,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng + Send>,
    repo: &dyn SessionRepository<Terminal>,
) -> Result<Vec<String>, DomainError> {
    let (mut terminal, version) = load_or_create(command.terminal_id, repo).await?;

    let added = {
        let mut rng_guard = rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
        terminal.submit_line(&command.line, &mut *rng_guard)
    };

    if added.is_empty() {
        return Ok(added);
    }

    save(command, terminal, version, clock, repo).await?;
    Ok(added)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::{TimeZone, Utc};
    use folio_core::error::DomainError;
    use uuid::Uuid;

    use crate::application::command_handlers::{handle_select_app, handle_submit_line};
    use crate::domain::app::TerminalApp;
    use crate::domain::coffee::CoffeeState;
    use crate::domain::commands::{SelectApp, SubmitLine};
    use crate::domain::dialogue::DialogueSession;
    use crate::domain::terminal::Terminal;
    use folio_test_support::{
        FailingSessionRepository, FixedClock, MockRng, RecordingSessionRepository, SequenceRng,
    };

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    fn submit(terminal_id: Uuid, line: &str) -> SubmitLine {
        SubmitLine {
            correlation_id: Uuid::new_v4(),
            terminal_id,
            line: line.to_owned(),
        }
    }

    #[tokio::test]
    async fn test_handle_select_app_creates_terminal_and_returns_banner() {
        let terminal_id = Uuid::new_v4();
        let repo: RecordingSessionRepository<Terminal> = RecordingSessionRepository::empty();
        let command = SelectApp {
            correlation_id: Uuid::new_v4(),
            terminal_id,
            app: TerminalApp::Physics,
        };

        let banner = handle_select_app(&command, &fixed_clock(), &repo).await.unwrap();

        assert_eq!(banner[0], ">>> Physics Calculator Loaded");
        let saved = repo.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, terminal_id);
        assert_eq!(saved[0].1, 0);
        assert_eq!(saved[0].2.active_app(), TerminalApp::Physics);
        assert_eq!(saved[0].2.transcript(), banner.as_slice());
    }

    #[tokio::test]
    async fn test_handle_submit_line_advances_stored_dialogue() {
        let terminal_id = Uuid::new_v4();
        let mut stored = Terminal::new(terminal_id);
        stored.select_app(TerminalApp::Coffee);
        let repo = RecordingSessionRepository::with_state(terminal_id, 3, stored, fixed_clock().0);
        let rng = Mutex::new(MockRng);

        let added = handle_submit_line(&submit(terminal_id, "c"), &fixed_clock(), &rng, &repo)
            .await
            .unwrap();

        assert_eq!(added[0], "$ c");
        assert_eq!(added[1], "And what type of brew for your Large coffee?");
        let saved = repo.saved();
        assert_eq!(saved[0].1, 3);
        assert!(matches!(
            saved[0].2.dialogue(),
            DialogueSession::Coffee(CoffeeState::AwaitingBrew { .. })
        ));
    }

    #[tokio::test]
    async fn test_handle_submit_line_uses_rng_for_magic8() {
        let terminal_id = Uuid::new_v4();
        let mut stored = Terminal::new(terminal_id);
        stored.select_app(TerminalApp::Magic8);
        let repo = RecordingSessionRepository::with_state(terminal_id, 1, stored, fixed_clock().0);
        let rng = Mutex::new(SequenceRng::new(vec![8]));

        let added = handle_submit_line(&submit(terminal_id, "Rain?"), &fixed_clock(), &rng, &repo)
            .await
            .unwrap();

        assert_eq!(added[2], "Magic 8-Ball says: \"Very doubtful.\"");
    }

    #[tokio::test]
    async fn test_handle_submit_line_blank_input_saves_nothing() {
        let repo: RecordingSessionRepository<Terminal> = RecordingSessionRepository::empty();
        let rng = Mutex::new(MockRng);

        let added = handle_submit_line(&submit(Uuid::new_v4(), "  "), &fixed_clock(), &rng, &repo)
            .await
            .unwrap();

        assert!(added.is_empty());
        assert!(repo.saved().is_empty());
    }

    #[tokio::test]
    async fn test_handler_propagates_repository_failure() {
        let rng = Mutex::new(MockRng);

        let result = handle_submit_line(
            &submit(Uuid::new_v4(), "5"),
            &fixed_clock(),
            &rng,
            &FailingSessionRepository,
        )
        .await;

        match result.unwrap_err() {
            DomainError::Infrastructure(msg) => assert_eq!(msg, "connection refused"),
            other => panic!("expected Infrastructure, got {other:?}"),
        }
    }
}
