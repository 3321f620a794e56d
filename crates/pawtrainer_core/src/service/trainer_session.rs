//! Trainer session: the single owner of tracker state.
//!
//! # Invariants
//! - Every `dispatch` saves the resulting state before returning.
//! - A failed save never rolls back or hides the transition.
//! - Validated intents reject bad input before anything is dispatched.

use crate::env::{SystemEnv, TransitionEnv};
use crate::feedback::{notify_best_effort, practice_message, Notifier};
use crate::model::cue::{Cue, CueId, CueStatus};
use crate::model::dog::Dog;
use crate::model::state::AppState;
use crate::model::validation::{validate_cue_name, validate_dog_name, ValidationError};
use crate::reducer::action::Action;
use crate::reducer::app_reducer::reduce;
use crate::selector::choose_cue;
use crate::store::kv_store::KeyValueStore;
use crate::store::persistence::{load_state, save_state};
use log::debug;
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Rejection of a validated intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    Validation(ValidationError),
    /// Cue intents need an active dog to attach to.
    NoActiveDog,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NoActiveDog => write!(f, "no active dog selected"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NoActiveDog => None,
        }
    }
}

impl From<ValidationError> for SessionError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Active-dog cues grouped by status, each column in collection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CueBoard {
    pub learning: Vec<Cue>,
    pub knows: Vec<Cue>,
    pub mastered: Vec<Cue>,
}

impl CueBoard {
    pub fn column(&self, status: CueStatus) -> &[Cue] {
        match status {
            CueStatus::Learning => &self.learning,
            CueStatus::Knows => &self.knows,
            CueStatus::Mastered => &self.mastered,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.learning.is_empty() && self.knows.is_empty() && self.mastered.is_empty()
    }

    fn push(&mut self, cue: Cue) {
        match cue.status {
            CueStatus::Learning => self.learning.push(cue),
            CueStatus::Knows => self.knows.push(cue),
            CueStatus::Mastered => self.mastered.push(cue),
        }
    }
}

/// Owns state, store and environment for one running front end.
pub struct TrainerSession<S: KeyValueStore, E: TransitionEnv = SystemEnv> {
    store: S,
    env: E,
    notifier: Arc<dyn Notifier>,
    state: AppState,
}

impl<S: KeyValueStore> TrainerSession<S, SystemEnv> {
    /// Loads the stored document using the system clock for new ids.
    pub fn open(store: S, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_env(store, SystemEnv::new(), notifier)
    }
}

impl<S: KeyValueStore, E: TransitionEnv> TrainerSession<S, E> {
    /// Loads the stored document with a caller-provided environment.
    pub fn with_env(store: S, env: E, notifier: Arc<dyn Notifier>) -> Self {
        let state = load_state(&store, &env);
        Self {
            store,
            env,
            notifier,
            state,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies `action`, persists the result and returns the new state.
    pub fn dispatch(&mut self, action: Action) -> &AppState {
        debug!("event=dispatch module=service action={}", action.kind());
        self.state = reduce(&self.state, &action, &self.env);
        save_state(&self.store, &self.state);
        &self.state
    }

    pub fn active_dog(&self) -> Option<&Dog> {
        self.state.active_dog()
    }

    /// Cues of the active dog; empty when no dog is active.
    pub fn active_dog_cues(&self) -> Vec<&Cue> {
        match self.state.active_dog_id {
            Some(dog_id) => self.state.cues_for_dog(dog_id).collect(),
            None => Vec::new(),
        }
    }

    /// Groups the active dog's cues into status columns.
    pub fn board(&self) -> CueBoard {
        let mut board = CueBoard::default();
        for cue in self.active_dog_cues() {
            board.push(cue.clone());
        }
        board
    }

    /// Validates the name, then dispatches `AddDog`.
    pub fn add_dog(
        &mut self,
        name: &str,
        image_url: Option<String>,
    ) -> Result<&AppState, SessionError> {
        let name = validate_dog_name(name)?;
        Ok(self.dispatch(Action::AddDog {
            name: name.to_string(),
            image_url,
        }))
    }

    /// Validates the name, then adds a cue for the active dog.
    pub fn add_cue(&mut self, name: &str) -> Result<&AppState, SessionError> {
        let name = validate_cue_name(name)?;
        let dog_id = self.state.active_dog_id.ok_or(SessionError::NoActiveDog)?;
        Ok(self.dispatch(Action::add_cue(name, dog_id)))
    }

    /// Picks a random active-dog cue and marks it practiced.
    ///
    /// Returns the cue as stored after the practice stamp. With no eligible
    /// cues nothing is dispatched and no notification is sent.
    pub fn pick_random_cue(&mut self, rng: &mut impl Rng) -> Option<Cue> {
        let picked: CueId = {
            let eligible = self.active_dog_cues();
            choose_cue(&eligible, rng)?.id
        };
        self.dispatch(Action::PracticeCue { id: picked });
        let cue = self.state.cue(picked)?.clone();
        notify_best_effort(self.notifier.as_ref(), &practice_message(&cue.name));
        Some(cue)
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionError, TrainerSession};
    use crate::feedback::NoopNotifier;
    use crate::model::cue::CueStatus;
    use crate::model::validation::ValidationError;
    use crate::reducer::action::Action;
    use crate::reducer::app_reducer::test_env::FixedEnv;
    use crate::store::kv_store::MemoryKeyValueStore;
    use std::sync::Arc;

    fn session() -> TrainerSession<MemoryKeyValueStore, FixedEnv> {
        TrainerSession::with_env(
            MemoryKeyValueStore::new(),
            FixedEnv::starting_at(1),
            Arc::new(NoopNotifier),
        )
    }

    #[test]
    fn new_session_starts_with_placeholder_dog() {
        let session = session();
        assert!(session.active_dog().unwrap().is_placeholder());
        assert!(session.board().is_empty());
    }

    #[test]
    fn validated_intents_reject_before_dispatch() {
        let mut session = session();
        let before = session.state().clone();

        assert_eq!(
            session.add_dog("  ", None).unwrap_err(),
            SessionError::Validation(ValidationError::EmptyDogName)
        );
        assert!(matches!(
            session.add_cue("a name that is far too long"),
            Err(SessionError::Validation(ValidationError::CueNameTooLong { .. }))
        ));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn add_cue_without_active_dog_is_rejected() {
        let mut session = session();
        session.state.active_dog_id = None;
        assert_eq!(session.add_cue("Sit").unwrap_err(), SessionError::NoActiveDog);
    }

    #[test]
    fn board_groups_only_active_dog_cues() {
        let mut session = session();
        let rex = session.add_dog("Rex", None).unwrap().active_dog_id.unwrap();
        session.add_cue("Sit").unwrap();
        session.add_cue("Down").unwrap();
        let down = session.state().cues[1].id;
        session.dispatch(Action::UpdateCueStatus {
            id: down,
            status: CueStatus::Mastered,
        });

        session.add_dog("Fido", None).unwrap();
        session.add_cue("Paw").unwrap();

        let fido_board = session.board();
        assert_eq!(fido_board.learning.len(), 1);
        assert_eq!(fido_board.learning[0].name, "Paw");

        session.dispatch(Action::SetActiveDog { id: rex });
        let rex_board = session.board();
        assert_eq!(rex_board.column(CueStatus::Learning)[0].name, "Sit");
        assert_eq!(rex_board.column(CueStatus::Mastered)[0].name, "Down");
        assert!(rex_board.knows.is_empty());
    }

    #[test]
    fn active_dog_cues_empty_without_active_dog() {
        let mut session = session();
        session.add_cue("Sit").unwrap();
        session.state.active_dog_id = None;
        assert!(session.active_dog_cues().is_empty());
    }
}
