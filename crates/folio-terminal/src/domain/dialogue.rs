//! The conversation state of whichever app the terminal is running.

use folio_core::rng::DeterministicRng;

use super::app::TerminalApp;
use super::coffee::{self, CoffeeState};
use super::physics::{self, PhysicsState};
use super::{magic8, scrabble, shipping};

/// What the active interpreter remembers between lines.
///
/// The stateless apps carry nothing; coffee and physics carry the step
/// they are waiting on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogueSession {
    Shipping,
    Magic8,
    Scrabble,
    Coffee(CoffeeState),
    Physics(PhysicsState),
}

impl DialogueSession {
    /// Starts a fresh conversation for `app`, returning its banner.
    #[must_use]
    pub fn start(app: TerminalApp) -> (Self, Vec<String>) {
        match app {
            TerminalApp::Shipping => (Self::Shipping, shipping::banner()),
            TerminalApp::Magic8 => (Self::Magic8, magic8::banner()),
            TerminalApp::Scrabble => (Self::Scrabble, scrabble::banner()),
            TerminalApp::Coffee => (Self::Coffee(CoffeeState::default()), coffee::banner()),
            TerminalApp::Physics => (Self::Physics(PhysicsState::default()), physics::banner()),
        }
    }

    #[must_use]
    pub fn app(self) -> TerminalApp {
        match self {
            Self::Shipping => TerminalApp::Shipping,
            Self::Magic8 => TerminalApp::Magic8,
            Self::Scrabble => TerminalApp::Scrabble,
            Self::Coffee(_) => TerminalApp::Coffee,
            Self::Physics(_) => TerminalApp::Physics,
        }
    }

    /// Feeds one line to the interpreter.
    ///
    /// Never fails: malformed input produces a re-prompt line and leaves the
    /// state where it was.
    pub fn step(self, input: &str, rng: &mut dyn DeterministicRng) -> (Self, Vec<String>) {
        match self {
            Self::Shipping => (self, shipping::step(input)),
            Self::Magic8 => (self, magic8::step(input, rng)),
            Self::Scrabble => (self, scrabble::step(input)),
            Self::Coffee(state) => {
                let (next, lines) = coffee::step(state, input);
                (Self::Coffee(next), lines)
            }
            Self::Physics(state) => {
                let (next, lines) = physics::step(state, input);
                (Self::Physics(next), lines)
            }
        }
    }

    /// 0 while the interpreter is at its first prompt.
    #[must_use]
    pub fn step_index(self) -> u8 {
        match self {
            Self::Shipping
            | Self::Magic8
            | Self::Scrabble
            | Self::Coffee(CoffeeState::AwaitingSize) => 0,
            Self::Coffee(CoffeeState::AwaitingBrew { .. }) => 1,
            Self::Physics(state) => state.step_index(),
        }
    }
}
