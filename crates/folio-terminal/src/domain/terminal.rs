//! The terminal aggregate: active app, its dialogue, and the transcript.

use folio_core::rng::DeterministicRng;
use serde::Serialize;
use uuid::Uuid;

use super::app::TerminalApp;
use super::dialogue::DialogueSession;

/// Oldest lines are dropped once the transcript grows past this.
pub const TRANSCRIPT_LIMIT: usize = 500;

/// How a transcript line is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Error,
    Command,
    Banner,
    Output,
}

impl LineKind {
    #[must_use]
    pub fn classify(line: &str) -> Self {
        if line.starts_with("Error") {
            Self::Error
        } else if line.starts_with('$') {
            Self::Command
        } else if line.starts_with(">>>") {
            Self::Banner
        } else {
            Self::Output
        }
    }
}

/// A visitor's terminal window.
#[derive(Debug, Clone)]
pub struct Terminal {
    /// Aggregate identifier.
    pub id: Uuid,
    dialogue: DialogueSession,
    transcript: Vec<String>,
}

impl Terminal {
    /// Creates a terminal running the shipping calculator.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        let (dialogue, banner) = DialogueSession::start(TerminalApp::Shipping);
        Self {
            id,
            dialogue,
            transcript: banner,
        }
    }

    /// Switches to `app`, wiping the transcript and any half-finished
    /// conversation. Returns the new banner.
    pub fn select_app(&mut self, app: TerminalApp) -> Vec<String> {
        let (dialogue, banner) = DialogueSession::start(app);
        self.dialogue = dialogue;
        self.transcript.clear();
        self.append(&banner);
        banner
    }

    /// Runs one line of user input through the active app and returns the
    /// lines it added. Blank input is ignored.
    pub fn submit_line(&mut self, line: &str, rng: &mut dyn DeterministicRng) -> Vec<String> {
        if line.trim().is_empty() {
            return Vec::new();
        }

        let (dialogue, output) = self.dialogue.step(line, rng);
        self.dialogue = dialogue;

        let mut added = Vec::with_capacity(output.len() + 1);
        added.push(format!("$ {line}"));
        added.extend(output);
        self.append(&added);
        added
    }

    fn append(&mut self, lines: &[String]) {
        self.transcript.extend_from_slice(lines);
        if self.transcript.len() > TRANSCRIPT_LIMIT {
            let excess = self.transcript.len() - TRANSCRIPT_LIMIT;
            self.transcript.drain(..excess);
        }
    }

    #[must_use]
    pub fn active_app(&self) -> TerminalApp {
        self.dialogue.app()
    }

    #[must_use]
    pub fn dialogue(&self) -> DialogueSession {
        self.dialogue
    }

    /// True once the active app is mid-conversation.
    #[must_use]
    pub fn waiting_for_input(&self) -> bool {
        self.dialogue.step_index() > 0
    }

    #[must_use]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_test_support::{MockRng, SequenceRng};

    #[test]
    fn test_new_terminal_shows_shipping_banner() {
        let terminal = Terminal::new(Uuid::new_v4());

        assert_eq!(terminal.active_app(), TerminalApp::Shipping);
        assert_eq!(terminal.transcript()[0], ">>> Sal's Shipping Calculator Loaded");
        assert!(!terminal.waiting_for_input());
    }

    #[test]
    fn test_select_app_clears_transcript_and_resets_dialogue() {
        let mut terminal = Terminal::new(Uuid::new_v4());
        terminal.select_app(TerminalApp::Coffee);
        terminal.submit_line("b", &mut MockRng);
        assert!(terminal.waiting_for_input());

        let banner = terminal.select_app(TerminalApp::Coffee);

        assert_eq!(terminal.transcript(), banner.as_slice());
        assert!(!terminal.waiting_for_input());
    }

    #[test]
    fn test_submit_line_echoes_input_then_output() {
        let mut terminal = Terminal::new(Uuid::new_v4());
        terminal.select_app(TerminalApp::Magic8);

        let added = terminal.submit_line("Will it ship?", &mut SequenceRng::new(vec![0]));

        assert_eq!(
            added,
            vec![
                "$ Will it ship?",
                "Question: Will it ship?",
                "Magic 8-Ball says: \"Yes - definitely.\"",
            ]
        );
        assert!(terminal.transcript().ends_with(&added));
    }

    #[test]
    fn test_blank_input_changes_nothing() {
        let mut terminal = Terminal::new(Uuid::new_v4());
        let before = terminal.transcript().to_vec();

        let added = terminal.submit_line("   ", &mut MockRng);

        assert!(added.is_empty());
        assert_eq!(terminal.transcript(), before.as_slice());
    }

    #[test]
    fn test_transcript_is_capped() {
        let mut terminal = Terminal::new(Uuid::new_v4());
        terminal.select_app(TerminalApp::Scrabble);

        for _ in 0..TRANSCRIPT_LIMIT {
            terminal.submit_line("cab", &mut MockRng);
        }

        assert_eq!(terminal.transcript().len(), TRANSCRIPT_LIMIT);
        assert_eq!(terminal.transcript().last().unwrap(), "Score: 7 points");
    }

    #[test]
    fn test_classify_lines() {
        assert_eq!(
            LineKind::classify("Error: Please enter a valid number for weight."),
            LineKind::Error
        );
        assert_eq!(LineKind::classify("$ 4.8"), LineKind::Command);
        assert_eq!(LineKind::classify(">>> Magic 8-Ball Loaded"), LineKind::Banner);
        assert_eq!(LineKind::classify("Score: 7 points"), LineKind::Output);
    }
}
