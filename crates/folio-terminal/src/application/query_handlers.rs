//! Query handlers for the terminal widget.

use folio_core::error::DomainError;
use folio_core::repository::SessionRepository;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::app::TerminalApp;
use crate::domain::terminal::{LineKind, Terminal};

/// One transcript line with its display style.
#[derive(Debug, Serialize)]
pub struct LineView {
    pub text: String,
    pub kind: LineKind,
}

/// Read-only view of a terminal.
#[derive(Debug, Serialize)]
pub struct TerminalView {
    /// The terminal identifier.
    pub terminal_id: Uuid,
    /// The app currently running.
    pub active_app: TerminalApp,
    /// Script name shown in the editor tab.
    pub file_name: &'static str,
    /// Whether the app is mid-conversation.
    pub waiting_for_input: bool,
    /// Prompt hint for the input field.
    pub placeholder: &'static str,
    /// Everything printed so far, oldest first.
    pub transcript: Vec<LineView>,
    /// Stored version, for optimistic concurrency.
    pub version: i64,
}

impl TerminalView {
    fn new(terminal: &Terminal, version: i64) -> Self {
        let app = terminal.active_app();
        let waiting_for_input = terminal.waiting_for_input();
        Self {
            terminal_id: terminal.id,
            active_app: app,
            file_name: app.file_name(),
            waiting_for_input,
            placeholder: if waiting_for_input {
                "Waiting for input..."
            } else {
                "Type a command..."
            },
            transcript: terminal
                .transcript()
                .iter()
                .map(|line| LineView {
                    kind: LineKind::classify(line),
                    text: line.clone(),
                })
                .collect(),
            version,
        }
    }
}

/// Retrieves a terminal by its identifier.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` if no terminal is stored under
/// `terminal_id`, or `DomainError` if the repository load fails.
pub async fn get_terminal_by_id(
    terminal_id: Uuid,
    repo: &dyn SessionRepository<Terminal>,
) -> Result<TerminalView, DomainError> {
    let stored = repo
        .load(terminal_id)
        .await?
        .ok_or(DomainError::AggregateNotFound(terminal_id))?;
    Ok(TerminalView::new(&stored.state, stored.version))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use folio_core::error::DomainError;
    use uuid::Uuid;

    use crate::application::query_handlers::get_terminal_by_id;
    use crate::domain::app::TerminalApp;
    use crate::domain::terminal::{LineKind, Terminal};
    use folio_test_support::{MockRng, RecordingSessionRepository};

    #[tokio::test]
    async fn test_get_terminal_by_id_returns_view() {
        let terminal_id = Uuid::new_v4();
        let mut terminal = Terminal::new(terminal_id);
        terminal.select_app(TerminalApp::Physics);
        terminal.submit_line("1", &mut MockRng);
        let repo = RecordingSessionRepository::with_state(
            terminal_id,
            2,
            terminal,
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        );

        let view = get_terminal_by_id(terminal_id, &repo).await.unwrap();

        assert_eq!(view.terminal_id, terminal_id);
        assert_eq!(view.active_app, TerminalApp::Physics);
        assert_eq!(view.file_name, "physics_calc.py");
        assert!(view.waiting_for_input);
        assert_eq!(view.placeholder, "Waiting for input...");
        assert_eq!(view.version, 2);
        assert_eq!(view.transcript[0].kind, LineKind::Banner);
        assert_eq!(view.transcript[3].text, "$ 1");
        assert_eq!(view.transcript[3].kind, LineKind::Command);
    }

    #[tokio::test]
    async fn test_view_serializes_snake_case_kinds() {
        let terminal_id = Uuid::new_v4();
        let mut terminal = Terminal::new(terminal_id);
        terminal.submit_line("heavy", &mut MockRng);
        let repo = RecordingSessionRepository::with_state(
            terminal_id,
            1,
            terminal,
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        );

        let view = get_terminal_by_id(terminal_id, &repo).await.unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["active_app"], "shipping");
        assert_eq!(json["placeholder"], "Type a command...");
        let last = json["transcript"].as_array().unwrap().last().unwrap().clone();
        assert_eq!(last["kind"], "error");
    }

    #[tokio::test]
    async fn test_get_terminal_by_id_missing_returns_not_found() {
        let terminal_id = Uuid::new_v4();
        let repo: RecordingSessionRepository<Terminal> = RecordingSessionRepository::empty();

        let result = get_terminal_by_id(terminal_id, &repo).await;

        match result.unwrap_err() {
            DomainError::AggregateNotFound(id) => assert_eq!(id, terminal_id),
            other => panic!("expected AggregateNotFound, got {other:?}"),
        }
    }
}
