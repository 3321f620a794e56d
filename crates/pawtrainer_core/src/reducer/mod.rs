//! Pure state transitions for the tracker document.
//!
//! # Responsibility
//! - Define the closed set of user intents (`Action`).
//! - Map `(state, action)` to the next state with no I/O.
//!
//! # Invariants
//! - The reducer is total: every action yields a state, unknown ids are
//!   no-ops, payloads are never validated here.
//! - Persistence happens at the dispatch boundary, never inside `reduce`.

pub mod action;
pub mod app_reducer;
