//! User intents accepted by the reducer.

use crate::model::cue::{CueId, CueStatus};
use crate::model::dog::DogId;

/// One dispatched intent with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Adds a dog, drops every placeholder dog and makes the new dog active.
    AddDog {
        name: String,
        image_url: Option<String>,
    },
    /// Selects the active dog. The id is not checked against `dogs`.
    SetActiveDog { id: DogId },
    /// Appends a new cue for `dog_id` in `Learning` status.
    AddCue { name: String, dog_id: DogId },
    /// Moves a cue to any status.
    UpdateCueStatus { id: CueId, status: CueStatus },
    /// Removes a cue.
    DeleteCue { id: CueId },
    /// Stamps a cue's last-practiced time with the current instant.
    PracticeCue { id: CueId },
}

impl Action {
    /// Stable event name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddDog { .. } => "add_dog",
            Self::SetActiveDog { .. } => "set_active_dog",
            Self::AddCue { .. } => "add_cue",
            Self::UpdateCueStatus { .. } => "update_cue_status",
            Self::DeleteCue { .. } => "delete_cue",
            Self::PracticeCue { .. } => "practice_cue",
        }
    }

    pub fn add_dog(name: impl Into<String>) -> Self {
        Self::AddDog {
            name: name.into(),
            image_url: None,
        }
    }

    pub fn add_cue(name: impl Into<String>, dog_id: DogId) -> Self {
        Self::AddCue {
            name: name.into(),
            dog_id,
        }
    }
}
