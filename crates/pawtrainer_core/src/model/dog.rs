//! Dog domain model.
//!
//! # Invariants
//! - At most one dog carries `PLACEHOLDER_DOG_NAME` after any `AddDog`
//!   transition.
//! - Dogs are never deleted.

use serde::{Deserialize, Serialize};

/// Numeric dog identity, creation-time derived.
pub type DogId = i64;

/// Name of the default dog seeded into an empty document.
///
/// Adding any dog removes every dog carrying this exact name.
pub const PLACEHOLDER_DOG_NAME: &str = "My Dog";

/// One trained dog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dog {
    pub id: DogId,
    pub name: String,
    /// Omitted from the document when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Dog {
    pub fn new(id: DogId, name: impl Into<String>, image_url: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image_url,
        }
    }

    /// Creates the default placeholder dog.
    pub fn placeholder(id: DogId) -> Self {
        Self::new(id, PLACEHOLDER_DOG_NAME, None)
    }

    /// Returns whether this dog bears the placeholder name.
    ///
    /// Comparison is exact; `"my dog"` is a real dog.
    pub fn is_placeholder(&self) -> bool {
        self.name == PLACEHOLDER_DOG_NAME
    }
}
