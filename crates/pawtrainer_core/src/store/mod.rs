//! Local key-value storage and the document persistence adapter.
//!
//! # Responsibility
//! - Define the key-value contract the tracker document is written to.
//! - Serialize/deserialize `AppState` under one fixed key.
//!
//! # Invariants
//! - The adapter only ever holds serialized snapshots, never live state.
//! - `load_state` and `save_state` never return errors to callers.

pub mod kv_store;
pub mod persistence;
