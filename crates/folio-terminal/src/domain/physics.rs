//! Physics calculator: temperature conversion and F = m·a.

use super::RULE;
use super::number::{format_fixed, format_number, parse_leading_float};

/// Where the calculator conversation stands.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PhysicsState {
    /// Waiting for a menu number.
    #[default]
    AwaitingSelection,
    AwaitingFahrenheit,
    AwaitingCelsius,
    AwaitingMass,
    /// Mass has been entered; waiting for acceleration.
    AwaitingAcceleration { mass: f64 },
}

impl PhysicsState {
    /// Position in the conversation: 0 at the menu, 1 after choosing a
    /// function, 2 while waiting for acceleration.
    #[must_use]
    pub fn step_index(self) -> u8 {
        match self {
            Self::AwaitingSelection => 0,
            Self::AwaitingFahrenheit | Self::AwaitingCelsius | Self::AwaitingMass => 1,
            Self::AwaitingAcceleration { .. } => 2,
        }
    }
}

#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

#[must_use]
pub fn banner() -> Vec<String> {
    vec![
        ">>> Physics Calculator Loaded".to_owned(),
        "Available functions: [1] F to C Temp, [2] C to F Temp, [3] Force (F=ma)".to_owned(),
        "Select a function number:".to_owned(),
    ]
}

fn back_to_menu(mut lines: Vec<String>) -> (PhysicsState, Vec<String>) {
    lines.push(RULE.to_owned());
    lines.push("Select a function number: [1] F->C, [2] C->F, [3] Force".to_owned());
    (PhysicsState::AwaitingSelection, lines)
}

fn invalid_number(state: PhysicsState) -> (PhysicsState, Vec<String>) {
    (state, vec!["Please enter a valid number.".to_owned()])
}

/// Advances the calculator by one input line.
#[must_use]
pub fn step(state: PhysicsState, input: &str) -> (PhysicsState, Vec<String>) {
    if state == PhysicsState::AwaitingSelection {
        return match input.trim() {
            "1" => (
                PhysicsState::AwaitingFahrenheit,
                vec!["Enter temperature in Fahrenheit:".to_owned()],
            ),
            "2" => (
                PhysicsState::AwaitingCelsius,
                vec!["Enter temperature in Celsius:".to_owned()],
            ),
            "3" => (
                PhysicsState::AwaitingMass,
                vec!["Enter mass (kg):".to_owned()],
            ),
            _ => (
                state,
                vec!["Invalid option. Select [1], [2], or [3].".to_owned()],
            ),
        };
    }

    let Some(value) = parse_leading_float(input) else {
        return invalid_number(state);
    };

    match state {
        PhysicsState::AwaitingSelection => (state, Vec::new()),
        PhysicsState::AwaitingFahrenheit => back_to_menu(vec![format!(
            "{}°F is {}°C",
            format_number(value),
            format_fixed(fahrenheit_to_celsius(value), 1)
        )]),
        PhysicsState::AwaitingCelsius => back_to_menu(vec![format!(
            "{}°C is {}°F",
            format_number(value),
            format_fixed(celsius_to_fahrenheit(value), 1)
        )]),
        PhysicsState::AwaitingMass => (
            PhysicsState::AwaitingAcceleration { mass: value },
            vec!["Enter acceleration (m/s^2):".to_owned()],
        ),
        PhysicsState::AwaitingAcceleration { mass } => back_to_menu(vec![
            format!("Force = {} Newtons", format_fixed(mass * value, 2)),
            "(Calculated using F = m * a)".to_owned(),
        ]),
    }
}
