//! The scripts a terminal can run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the terminal's mini-apps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalApp {
    /// Sal's shipping rate calculator.
    Shipping,
    /// Magic 8-ball fortune teller.
    Magic8,
    /// Scrabble word scorer.
    Scrabble,
    /// Coffee ordering bot.
    Coffee,
    /// Temperature and force calculator.
    Physics,
}

impl TerminalApp {
    /// Every app, in sidebar order.
    pub const ALL: [Self; 5] = [
        Self::Shipping,
        Self::Magic8,
        Self::Scrabble,
        Self::Coffee,
        Self::Physics,
    ];

    /// Script file name shown in the editor tab.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Shipping => "sals_shipping.py",
            Self::Magic8 => "magic_8_ball.py",
            Self::Scrabble => "scrabble_score.py",
            Self::Coffee => "coffee_bot.py",
            Self::Physics => "physics_calc.py",
        }
    }

    /// Identifier used in requests and views.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Shipping => "shipping",
            Self::Magic8 => "magic8",
            Self::Scrabble => "scrabble",
            Self::Coffee => "coffee",
            Self::Physics => "physics",
        }
    }
}

impl fmt::Display for TerminalApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
