//! Coffee ordering bot: a two-question order loop.

use std::fmt;

use super::RULE;

/// Drink size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    fn parse(input: &str) -> Option<Self> {
        if input == "a" || input.contains("small") {
            Some(Self::Small)
        } else if input == "b" || input.contains("medium") {
            Some(Self::Medium)
        } else if input == "c" || input.contains("large") {
            Some(Self::Large)
        } else {
            None
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        })
    }
}

/// Brew type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brew {
    Brewed,
    Espresso,
    ColdBrew,
}

impl Brew {
    fn parse(input: &str) -> Option<Self> {
        if input == "a" || input.contains("brewed") {
            Some(Self::Brewed)
        } else if input == "b" || input.contains("espresso") {
            Some(Self::Espresso)
        } else if input == "c" || input.contains("cold") {
            Some(Self::ColdBrew)
        } else {
            None
        }
    }
}

impl fmt::Display for Brew {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Brewed => "Brewed",
            Self::Espresso => "Espresso",
            Self::ColdBrew => "Cold Brew",
        })
    }
}

/// Where the order conversation stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoffeeState {
    #[default]
    AwaitingSize,
    AwaitingBrew {
        size: Size,
    },
}

fn size_prompt() -> [String; 2] {
    [
        "What size drink can I get for you?".to_owned(),
        "[a] Small, [b] Medium, [c] Large".to_owned(),
    ]
}

#[must_use]
pub fn banner() -> Vec<String> {
    vec![
        ">>> Coffee Chatbot v1.0 initialized".to_owned(),
        "Welcome to the cafe! What size drink can I get for you?".to_owned(),
        "[a] Small, [b] Medium, [c] Large".to_owned(),
    ]
}

/// Advances the order conversation by one answer.
///
/// Answers match case-insensitively, either the option letter exactly or
/// the option word anywhere in the input. Unrecognised answers re-prompt and
/// keep the state.
#[must_use]
pub fn step(state: CoffeeState, input: &str) -> (CoffeeState, Vec<String>) {
    let input = input.trim().to_lowercase();
    match state {
        CoffeeState::AwaitingSize => match Size::parse(&input) {
            Some(size) => (
                CoffeeState::AwaitingBrew { size },
                vec![
                    format!("And what type of brew for your {size} coffee?"),
                    "[a] Brewed, [b] Espresso, [c] Cold Brew".to_owned(),
                ],
            ),
            None => (
                state,
                vec!["I didn't understand that size. Please choose [a], [b], or [c].".to_owned()],
            ),
        },
        CoffeeState::AwaitingBrew { size } => match Brew::parse(&input) {
            Some(brew) => {
                let mut lines = vec![
                    "Great choice!".to_owned(),
                    format!("Here is your {size} {brew} Coffee ☕."),
                    RULE.to_owned(),
                    "Starting new order...".to_owned(),
                ];
                lines.extend(size_prompt());
                (CoffeeState::AwaitingSize, lines)
            }
            None => (
                state,
                vec!["Sorry, please select [a] Brewed, [b] Espresso, or [c] Cold Brew.".to_owned()],
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_espresso_order_completes_and_restarts() {
        let (state, _) = step(CoffeeState::default(), "a");
        assert_eq!(state, CoffeeState::AwaitingBrew { size: Size::Small });

        let (state, lines) = step(state, "b");

        assert_eq!(state, CoffeeState::AwaitingSize);
        assert_eq!(lines[1], "Here is your Small Espresso Coffee ☕.");
        assert_eq!(lines.last().unwrap(), "[a] Small, [b] Medium, [c] Large");
        let confirmation = lines.iter().find(|l| l.contains("Here is your")).unwrap();
        assert!(confirmation.contains("Small") && confirmation.contains("Espresso"));
    }

    #[test]
    fn test_size_prompt_names_chosen_size() {
        let (_, lines) = step(CoffeeState::AwaitingSize, "I'd like a LARGE please");
        assert_eq!(lines[0], "And what type of brew for your Large coffee?");
    }

    #[test]
    fn test_words_match_case_insensitively() {
        let (state, _) = step(CoffeeState::AwaitingSize, "Medium");
        assert_eq!(state, CoffeeState::AwaitingBrew { size: Size::Medium });

        let (_, lines) = step(state, "COLD please");
        assert_eq!(lines[1], "Here is your Medium Cold Brew Coffee ☕.");
    }

    #[test]
    fn test_invalid_size_keeps_state() {
        let (state, lines) = step(CoffeeState::AwaitingSize, "venti");

        assert_eq!(state, CoffeeState::AwaitingSize);
        assert_eq!(
            lines,
            vec!["I didn't understand that size. Please choose [a], [b], or [c]."]
        );
    }

    #[test]
    fn test_invalid_brew_keeps_stored_size() {
        let start = CoffeeState::AwaitingBrew { size: Size::Large };

        let (state, lines) = step(start, "tea");

        assert_eq!(state, start);
        assert_eq!(
            lines,
            vec!["Sorry, please select [a] Brewed, [b] Espresso, or [c] Cold Brew."]
        );
    }

    #[test]
    fn test_letter_must_match_exactly() {
        let (state, _) = step(CoffeeState::AwaitingSize, "d");
        assert_eq!(state, CoffeeState::AwaitingSize);
    }

    #[test]
    fn test_banner_prompts_for_size() {
        let lines = banner();
        assert_eq!(lines[0], ">>> Coffee Chatbot v1.0 initialized");
        assert_eq!(lines[2], "[a] Small, [b] Medium, [c] Large");
    }
}
