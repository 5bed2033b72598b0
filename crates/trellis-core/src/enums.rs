//! Audit actions and entity types for Trellis.
//!
//! Both enums are stored as upper-case strings (`"CREATE"`, `"BOARD"`) in SQL
//! and JSON. `EntityType` is a closed set. `Action` keeps whatever it was given
//! when the value is not one of the known mutations, so entries written by a
//! newer deployment still load and render.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// Kind of mutation recorded in an audit log entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    Create,
    Update,
    Delete,
    /// A value outside the known set, kept verbatim.
    Unrecognized(String),
}

impl Action {
    /// Every action the recorder accepts.
    pub const KNOWN: [Self; 3] = [Self::Create, Self::Update, Self::Delete];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Whether this is one of the known mutation kinds.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<&str> for Action {
    fn from(value: &str) -> Self {
        match value {
            "CREATE" => Self::Create,
            "UPDATE" => Self::Update,
            "DELETE" => Self::Delete,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for Action {
    fn from(value: String) -> Self {
        match value.as_str() {
            "CREATE" | "UPDATE" | "DELETE" => Self::from(value.as_str()),
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        match action {
            Action::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Kind of domain object an audit entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Board,
    List,
    Card,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Board => "BOARD",
            Self::List => "LIST",
            Self::Card => "CARD",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
