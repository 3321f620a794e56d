//! Persistence adapter for the tracker document.
//!
//! # Invariants
//! - Absent or unreadable documents degrade to the placeholder state.
//! - Write failures are logged and swallowed.
//! - The stored document carries no schema version; incompatible documents
//!   are discarded on load.

use crate::env::TransitionEnv;
use crate::model::state::AppState;
use crate::store::kv_store::{KeyValueStore, StoreError, StoreResult};
use log::{debug, error, info, warn};

/// Fixed key the document is stored under.
pub const STORAGE_KEY: &str = "pawsomeTrainerData";

/// Reads the stored document, falling back to the placeholder state.
///
/// On success every loaded id is reported to `env` so fresh ids never
/// collide with persisted ones. The fallback dog draws a fresh id.
pub fn load_state(store: &impl KeyValueStore, env: &impl TransitionEnv) -> AppState {
    match try_load_state(store) {
        Ok(Some(state)) => {
            if let Some(max_id) = state.max_entity_id() {
                env.observe_id(max_id);
            }
            info!(
                "event=state_load module=store status=ok dogs={} cues={}",
                state.dogs.len(),
                state.cues.len()
            );
            state
        }
        Ok(None) => {
            info!("event=state_load module=store status=default reason=absent");
            AppState::with_placeholder(env.fresh_id())
        }
        Err(err) => {
            warn!(
                "event=state_load module=store status=default reason={} error={}",
                failure_reason(&err),
                err
            );
            AppState::with_placeholder(env.fresh_id())
        }
    }
}

/// Serializes `state` and overwrites the stored document.
///
/// Never fails from the caller's point of view.
pub fn save_state(store: &impl KeyValueStore, state: &AppState) {
    match try_save_state(store, state) {
        Ok(bytes) => debug!("event=state_save module=store status=ok bytes={bytes}"),
        Err(err) => error!(
            "event=state_save module=store status=error reason={} error={}",
            failure_reason(&err),
            err
        ),
    }
}

/// Fallible read used by `load_state`. `Ok(None)` means no document.
pub fn try_load_state(store: &impl KeyValueStore) -> StoreResult<Option<AppState>> {
    let Some(raw) = store.get(STORAGE_KEY)? else {
        return Ok(None);
    };
    let state = serde_json::from_str::<AppState>(&raw)?;
    Ok(Some(state))
}

/// Fallible write used by `save_state`. Returns the document size.
pub fn try_save_state(store: &impl KeyValueStore, state: &AppState) -> StoreResult<usize> {
    let document = serde_json::to_string(state)?;
    store.set(STORAGE_KEY, &document)?;
    Ok(document.len())
}

fn failure_reason(err: &StoreError) -> &'static str {
    match err {
        StoreError::Db(_) => "db",
        StoreError::Serialization(_) => "corrupt",
        StoreError::Unavailable(_) => "unavailable",
    }
}

#[cfg(test)]
mod tests {
    use super::{load_state, save_state, STORAGE_KEY};
    use crate::env::TransitionEnv;
    use crate::model::cue::Cue;
    use crate::model::dog::Dog;
    use crate::model::state::AppState;
    use crate::reducer::app_reducer::test_env::FixedEnv;
    use crate::store::kv_store::{KeyValueStore, MemoryKeyValueStore};

    #[test]
    fn absent_document_loads_placeholder_state() {
        let store = MemoryKeyValueStore::new();
        let env = FixedEnv::starting_at(7);

        let state = load_state(&store, &env);
        assert_eq!(state, AppState::with_placeholder(7));
    }

    #[test]
    fn corrupt_document_loads_placeholder_state() {
        let store = MemoryKeyValueStore::new();
        store.set(STORAGE_KEY, "{not json").unwrap();

        let state = load_state(&store, &FixedEnv::starting_at(3));
        assert_eq!(state, AppState::with_placeholder(3));
    }

    #[test]
    fn wrong_shape_document_loads_placeholder_state() {
        let store = MemoryKeyValueStore::new();
        store
            .set(STORAGE_KEY, r#"{"dogs":"nope","cues":[],"activeDogId":null}"#)
            .unwrap();

        let state = load_state(&store, &FixedEnv::starting_at(3));
        assert!(state.dogs[0].is_placeholder());
    }

    #[test]
    fn saved_document_loads_back_equal() {
        let store = MemoryKeyValueStore::new();
        let mut state = AppState {
            dogs: vec![Dog::new(1, "Rex", Some("rex.png".to_string()))],
            cues: vec![Cue::new(2, "Sit", 1)],
            active_dog_id: Some(1),
        };
        state.cues[0].last_practiced = Some("2024-01-01T00:00:00.000Z".to_string());

        save_state(&store, &state);
        assert_eq!(load_state(&store, &FixedEnv::starting_at(100)), state);
    }

    #[test]
    fn documents_written_by_browser_clients_are_readable() {
        let store = MemoryKeyValueStore::new();
        store
            .set(
                STORAGE_KEY,
                r#"{"dogs":[{"id":1,"name":"My Dog"},{"id":1700000000000,"name":"Rex","imageUrl":"rex.jpg"}],
                   "cues":[{"id":1700000000001,"name":"Sit","status":"knows","lastPracticed":"2024-02-01T10:00:00.000Z","dogId":1700000000000}],
                   "activeDogId":1700000000000}"#,
            )
            .unwrap();

        let state = load_state(&store, &FixedEnv::starting_at(1));
        assert_eq!(state.dogs.len(), 2);
        assert_eq!(state.active_dog().map(|d| d.name.as_str()), Some("Rex"));
        assert_eq!(state.cues[0].status.as_str(), "knows");
    }

    #[test]
    fn load_reports_max_id_to_environment() {
        struct Recording(std::cell::Cell<i64>);
        impl TransitionEnv for Recording {
            fn fresh_id(&self) -> i64 {
                0
            }
            fn now_timestamp(&self) -> String {
                String::new()
            }
            fn observe_id(&self, id: i64) {
                self.0.set(id);
            }
        }

        let store = MemoryKeyValueStore::new();
        let state = AppState {
            dogs: vec![Dog::new(5, "Rex", None)],
            cues: vec![Cue::new(50, "Sit", 5)],
            active_dog_id: Some(5),
        };
        save_state(&store, &state);

        let env = Recording(std::cell::Cell::new(0));
        load_state(&store, &env);
        assert_eq!(env.0.get(), 50);
    }
}
