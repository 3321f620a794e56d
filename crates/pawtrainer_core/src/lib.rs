//! Core state model for the dog-training tracker.
//!
//! Front ends dispatch `Action`s through a `TrainerSession`; everything
//! else here (reducer, persistence, timers, feedback hooks) hangs off that
//! boundary.

pub mod config;
pub mod db;
pub mod env;
pub mod feedback;
pub mod logging;
pub mod model;
pub mod reducer;
pub mod selector;
pub mod service;
pub mod store;
pub mod timer;

pub use config::{parse_timer_presets, ConfigError, TimerPreset, TrainerConfig};
pub use env::{IdGenerator, SystemEnv, TransitionEnv};
pub use feedback::{Clicker, FeedbackError, LogNotifier, NoopNotifier, Notifier};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::cue::{Cue, CueId, CueStatus};
pub use model::dog::{Dog, DogId, PLACEHOLDER_DOG_NAME};
pub use model::state::AppState;
pub use model::validation::{validate_cue_name, validate_dog_name, ValidationError};
pub use reducer::action::Action;
pub use reducer::app_reducer::reduce;
pub use service::trainer_session::{CueBoard, SessionError, TrainerSession};
pub use store::kv_store::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
};
pub use store::persistence::{load_state, save_state, STORAGE_KEY};
pub use timer::countdown::{Countdown, TickOutcome, TimerPhase};
pub use timer::training_timer::{TimerBank, TimerSnapshot, TrainingTimer};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
