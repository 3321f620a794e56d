//! Cue domain model.
//!
//! # Responsibility
//! - Define the training command record and its learning status.
//!
//! # Invariants
//! - New cues start at `CueStatus::Learning` with no practice timestamp.
//! - Status transitions are unrestricted; any status is reachable from any
//!   other.
//! - `dog_id` is trusted to reference an existing dog; nothing enforces it.

use crate::model::dog::DogId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Numeric cue identity, creation-time derived.
pub type CueId = i64;

/// Learning progression for one cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CueStatus {
    /// Being taught; default for new cues.
    Learning,
    /// Performed reliably in easy settings.
    Knows,
    /// Performed reliably everywhere.
    Mastered,
}

impl CueStatus {
    /// Board column order.
    pub const ALL: [CueStatus; 3] = [Self::Learning, Self::Knows, Self::Mastered];

    /// Stable string id used in the persisted document.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Learning => "learning",
            Self::Knows => "knows",
            Self::Mastered => "mastered",
        }
    }

    /// Capitalized column title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Learning => "Learning",
            Self::Knows => "Knows",
            Self::Mastered => "Mastered",
        }
    }
}

impl Display for CueStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CueStatus {
    type Err = ParseCueStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "learning" => Ok(Self::Learning),
            "knows" => Ok(Self::Knows),
            "mastered" => Ok(Self::Mastered),
            other => Err(ParseCueStatusError(other.to_string())),
        }
    }
}

/// Raised when a status string is not one of `learning|knows|mastered`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCueStatusError(pub String);

impl Display for ParseCueStatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported cue status `{}`; expected learning|knows|mastered",
            self.0
        )
    }
}

impl Error for ParseCueStatusError {}

/// One training command tracked for a dog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cue {
    pub id: CueId,
    pub name: String,
    pub status: CueStatus,
    /// ISO-8601 UTC timestamp of the last practice, `null` when never
    /// practiced.
    pub last_practiced: Option<String>,
    pub dog_id: DogId,
}

impl Cue {
    /// Creates a cue in its initial state.
    pub fn new(id: CueId, name: impl Into<String>, dog_id: DogId) -> Self {
        Self {
            id,
            name: name.into(),
            status: CueStatus::Learning,
            last_practiced: None,
            dog_id,
        }
    }
}
