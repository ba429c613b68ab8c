use crate::core::{
    AgeBracket, FormInput, PageState, ProfileCard, SanitizedInput, ValidationErrors,
};
use crate::utils::sanitize::sanitize;

const NAME_MIN_CHARS: usize = 2;
const HOBBY_MIN_CHARS: usize = 3;
const AGE_MIN: u32 = 0;
const AGE_MAX: u32 = 120;

/// Runs a submission through the whole pipeline: sanitize each field exactly
/// once, validate the sanitized values, and classify when everything is clean.
/// Malformed input never fails; every invalid case comes back as a field
/// message inside `PageState::ResultWithErrors`.
pub fn process(input: &FormInput) -> PageState {
    let sanitized = SanitizedInput {
        name: sanitize(&input.name),
        age: sanitize(&input.age),
        hobby: sanitize(&input.hobby),
    };

    let errors = validate(&sanitized.name, &sanitized.age, &sanitized.hobby);
    if !errors.is_empty() {
        tracing::debug!(
            name_err = errors.name.is_some(),
            age_err = errors.age.is_some(),
            hobby_err = errors.hobby.is_some(),
            "Submission rejected by validation"
        );
        return PageState::ResultWithErrors {
            input: sanitized,
            errors,
        };
    }

    // Validation guarantees the age string is all digits and in range.
    let age: u32 = sanitized
        .age
        .parse()
        .unwrap_or(AGE_MAX);
    let bracket = classify(age);
    tracing::debug!(age, label = bracket.label(), "Submission classified");

    let card = ProfileCard {
        name: sanitized.name.clone(),
        age,
        hobby: sanitized.hobby.clone(),
        bracket,
    };
    PageState::Result {
        input: sanitized,
        card,
    }
}

/// Checks all three fields independently and collects every applicable
/// message; no short-circuit on the first failure. Lengths are measured in
/// Unicode code points.
pub fn validate(name: &str, age: &str, hobby: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if name.chars().count() < NAME_MIN_CHARS {
        errors.name = Some("Name required (min 2 characters)".to_string());
    }

    if age.is_empty() || !age.chars().all(|c| c.is_ascii_digit()) {
        errors.age = Some("Enter a valid age (integer)".to_string());
    } else {
        // A digit string too long for u32 is certainly above the maximum.
        let out_of_range = match age.parse::<u32>() {
            Ok(n) => !(AGE_MIN..=AGE_MAX).contains(&n),
            Err(_) => true,
        };
        if out_of_range {
            errors.age = Some("Age must be between 0 and 120".to_string());
        }
    }

    if hobby.chars().count() < HOBBY_MIN_CHARS {
        errors.hobby = Some("Hobby required (min 3 characters)".to_string());
    }

    errors
}

/// Maps a valid age onto its bracket. Brackets are contiguous, half-open and
/// exhaustive over [0, 120]; each boundary belongs to the upper bracket.
pub fn classify(age: u32) -> AgeBracket {
    if age < 18 {
        AgeBracket::Developing
    } else if age < 30 {
        AgeBracket::YoungPro
    } else if age < 60 {
        AgeBracket::Professional
    } else {
        AgeBracket::Senior
    }
}
