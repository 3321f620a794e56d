//! Input checks applied at the presentation boundary.
//!
//! The reducer never calls these; it accepts any payload. Front ends run
//! them before dispatching and show the message inline on failure.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Longest accepted cue name, in characters.
pub const MAX_CUE_NAME_CHARS: usize = 20;

/// User-facing validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyDogName,
    EmptyCueName,
    CueNameTooLong { chars: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDogName => write!(f, "Dog name is required"),
            Self::EmptyCueName => write!(f, "Cue name is required"),
            Self::CueNameTooLong { .. } => write!(
                f,
                "Cue name must be under {MAX_CUE_NAME_CHARS} characters"
            ),
        }
    }
}

impl Error for ValidationError {}

/// Rejects blank dog names. Returns the name unchanged on success.
pub fn validate_dog_name(name: &str) -> Result<&str, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyDogName);
    }
    Ok(name)
}

/// Rejects blank cue names and names longer than `MAX_CUE_NAME_CHARS`.
///
/// Length is counted on the raw input, not the trimmed value.
pub fn validate_cue_name(name: &str) -> Result<&str, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyCueName);
    }
    let chars = name.chars().count();
    if chars > MAX_CUE_NAME_CHARS {
        return Err(ValidationError::CueNameTooLong { chars });
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::{validate_cue_name, validate_dog_name, ValidationError};

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(validate_dog_name("   "), Err(ValidationError::EmptyDogName));
        assert_eq!(validate_cue_name(""), Err(ValidationError::EmptyCueName));
    }

    #[test]
    fn cue_name_limit_is_twenty_characters() {
        assert_eq!(validate_cue_name("abcdefghijklmnopqrst"), Ok("abcdefghijklmnopqrst"));
        let err = validate_cue_name("abcdefghijklmnopqrstu").unwrap_err();
        assert_eq!(err, ValidationError::CueNameTooLong { chars: 21 });
        assert_eq!(err.to_string(), "Cue name must be under 20 characters");
    }

    #[test]
    fn multibyte_names_count_characters_not_bytes() {
        assert!(validate_cue_name("ÄÖÜäöüßÄÖÜäöüßÄÖÜäöü").is_ok());
    }
}
