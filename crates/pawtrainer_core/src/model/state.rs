//! Root aggregate persisted as a single JSON document.
//!
//! # Invariants
//! - `active_dog_id`, when set, is expected to reference a dog in `dogs`.
//!   It is not cleared automatically because dogs are never removed.
//! - Collection order carries no business meaning.

use crate::model::cue::{Cue, CueId};
use crate::model::dog::{Dog, DogId};
use serde::{Deserialize, Serialize};

/// Full tracker state: dogs, cues and the active dog selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub dogs: Vec<Dog>,
    pub cues: Vec<Cue>,
    pub active_dog_id: Option<DogId>,
}

impl AppState {
    /// Creates the fallback document: one placeholder dog, active, no cues.
    pub fn with_placeholder(dog_id: DogId) -> Self {
        Self {
            dogs: vec![Dog::placeholder(dog_id)],
            cues: Vec::new(),
            active_dog_id: Some(dog_id),
        }
    }

    pub fn dog(&self, id: DogId) -> Option<&Dog> {
        self.dogs.iter().find(|dog| dog.id == id)
    }

    pub fn cue(&self, id: CueId) -> Option<&Cue> {
        self.cues.iter().find(|cue| cue.id == id)
    }

    /// Returns the active dog, or `None` when unset or dangling.
    pub fn active_dog(&self) -> Option<&Dog> {
        self.active_dog_id.and_then(|id| self.dog(id))
    }

    /// Cues owned by `dog_id`, in collection order.
    pub fn cues_for_dog(&self, dog_id: DogId) -> impl Iterator<Item = &Cue> {
        self.cues.iter().filter(move |cue| cue.dog_id == dog_id)
    }

    /// Largest id used by any dog or cue in the document.
    ///
    /// Used to seed id generation so new ids never collide with loaded ones.
    pub fn max_entity_id(&self) -> Option<i64> {
        let dog_ids = self.dogs.iter().map(|dog| dog.id);
        let cue_ids = self.cues.iter().map(|cue| cue.id);
        dog_ids.chain(cue_ids).max()
    }
}
