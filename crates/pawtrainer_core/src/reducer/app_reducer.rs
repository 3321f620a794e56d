//! Transition function for `AppState`.
//!
//! # Invariants
//! - `AddDog` leaves no placeholder-named dog other than the one just
//!   added, if it happens to carry that name.
//! - Cue mutations touch only the matching cue; a missing id leaves the
//!   collection identical.

use crate::env::TransitionEnv;
use crate::model::cue::{Cue, CueId};
use crate::model::dog::Dog;
use crate::model::state::AppState;
use crate::reducer::action::Action;

/// Returns the state that follows `state` under `action`.
///
/// Fresh ids and practice timestamps are drawn from `env`; nothing else is
/// impure.
pub fn reduce(state: &AppState, action: &Action, env: &impl TransitionEnv) -> AppState {
    let mut next = state.clone();
    match action {
        Action::AddDog { name, image_url } => {
            let dog = Dog::new(env.fresh_id(), name.clone(), image_url.clone());
            next.dogs.retain(|existing| !existing.is_placeholder());
            next.active_dog_id = Some(dog.id);
            next.dogs.push(dog);
        }
        Action::SetActiveDog { id } => {
            next.active_dog_id = Some(*id);
        }
        Action::AddCue { name, dog_id } => {
            next.cues.push(Cue::new(env.fresh_id(), name.clone(), *dog_id));
        }
        Action::UpdateCueStatus { id, status } => {
            if let Some(cue) = find_cue_mut(&mut next, *id) {
                cue.status = *status;
            }
        }
        Action::DeleteCue { id } => {
            next.cues.retain(|cue| cue.id != *id);
        }
        Action::PracticeCue { id } => {
            if let Some(cue) = find_cue_mut(&mut next, *id) {
                cue.last_practiced = Some(env.now_timestamp());
            }
        }
    }
    next
}

fn find_cue_mut(state: &mut AppState, id: CueId) -> Option<&mut Cue> {
    state.cues.iter_mut().find(|cue| cue.id == id)
}
