//! Uniform random choice over eligible cues.

use crate::model::cue::Cue;
use rand::Rng;

/// Picks one cue uniformly at random, `None` for an empty slice.
///
/// Selection alone has no side effect; `TrainerSession::pick_random_cue`
/// pairs it with the practice stamp.
pub fn choose_cue<'a>(cues: &[&'a Cue], rng: &mut impl Rng) -> Option<&'a Cue> {
    if cues.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..cues.len());
    Some(cues[index])
}

#[cfg(test)]
mod tests {
    use super::choose_cue;
    use crate::model::cue::Cue;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_input_yields_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(choose_cue(&[], &mut rng).is_none());
    }

    #[test]
    fn single_cue_is_always_chosen() {
        let sit = Cue::new(1, "Sit", 1);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..10 {
            assert_eq!(choose_cue(&[&sit], &mut rng).map(|c| c.id), Some(1));
        }
    }

    #[test]
    fn every_cue_is_reachable() {
        let cues: Vec<Cue> = (0..4).map(|i| Cue::new(i, format!("c{i}"), 1)).collect();
        let refs: Vec<&Cue> = cues.iter().collect();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [0usize; 4];
        for _ in 0..4_000 {
            let cue = choose_cue(&refs, &mut rng).unwrap();
            seen[cue.id as usize] += 1;
        }
        for count in seen {
            assert!(count > 800, "distribution skewed: {seen:?}");
        }
    }
}
