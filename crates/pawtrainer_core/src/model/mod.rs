//! Domain model for the training tracker document.
//!
//! # Responsibility
//! - Define the persisted shapes (`Dog`, `Cue`, `AppState`).
//! - Provide presentation-boundary validation helpers.
//!
//! # Invariants
//! - Every entity is identified by a numeric id unique within the document.
//! - Serialized field names follow the persisted JSON document
//!   (`imageUrl`, `lastPracticed`, `dogId`, `activeDogId`).

pub mod cue;
pub mod dog;
pub mod state;
pub mod validation;
