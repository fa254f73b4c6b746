//! Folio — portfolio content.
//!
//! Employment history and project cards are authored as YAML, compiled into
//! the binary, and parsed once on first access.

use std::sync::LazyLock;

use folio_core::error::DomainError;
use serde::{Deserialize, Serialize};
use tracing::error;

const EXPERIENCE_YAML: &str = include_str!("../content/experience.yaml");
const PROJECTS_YAML: &str = include_str!("../content/projects.yaml");

/// One position in the employment history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub location: String,
    /// Human-readable date range, e.g. "Nov 2020 — Present".
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// A project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    /// Primary technology, shown as the card's kicker.
    pub tech: String,
    pub description: String,
}

static EXPERIENCE: LazyLock<Result<Vec<Experience>, String>> =
    LazyLock::new(|| parse("experience", EXPERIENCE_YAML));
static PROJECTS: LazyLock<Result<Vec<Project>, String>> =
    LazyLock::new(|| parse("projects", PROJECTS_YAML));

fn parse<T: for<'de> Deserialize<'de>>(name: &str, source: &str) -> Result<Vec<T>, String> {
    serde_yaml::from_str(source).map_err(|e| {
        error!(document = name, error = %e, "failed to parse embedded content");
        format!("{name} content is malformed: {e}")
    })
}

fn loaded<T>(content: &'static Result<Vec<T>, String>) -> Result<&'static [T], DomainError> {
    content
        .as_deref()
        .map_err(|message| DomainError::Infrastructure(message.clone()))
}

/// Employment history, most prominent first.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the embedded YAML is malformed.
pub fn list_experience() -> Result<&'static [Experience], DomainError> {
    loaded(&EXPERIENCE)
}

/// Project cards in display order.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the embedded YAML is malformed.
pub fn list_projects() -> Result<&'static [Project], DomainError> {
    loaded(&PROJECTS)
}
