use strsim::jaro_winkler;

use crate::error::{GradeError, Result};
use crate::models::{DietaryRestriction, MedicalCondition};

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Closest known tag to `input`, if any is similar enough.
pub fn suggest<'a>(input: &str, known: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let input = input.trim().to_lowercase().replace(['-', ' '], "_");

    known
        .into_iter()
        .map(|tag| (tag, jaro_winkler(tag, &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(tag, _)| tag)
}

fn unknown_tag(kind: &str, input: &str, suggestion: Option<&str>) -> GradeError {
    match suggestion {
        Some(tag) => GradeError::InvalidInput(format!(
            "unknown {} '{}' (did you mean '{}'?)",
            kind, input, tag
        )),
        None => GradeError::InvalidInput(format!("unknown {} '{}'", kind, input)),
    }
}

/// Parse a dietary restriction, suggesting the nearest tag on failure.
pub fn resolve_restriction(input: &str) -> Result<DietaryRestriction> {
    input.parse().map_err(|_| {
        let known = DietaryRestriction::ALL.into_iter().map(|r| r.as_str());
        unknown_tag("dietary restriction", input, suggest(input, known))
    })
}

/// Parse a medical condition, suggesting the nearest tag on failure.
pub fn resolve_condition(input: &str) -> Result<MedicalCondition> {
    input.parse().map_err(|_| {
        let known = MedicalCondition::ALL.into_iter().map(|c| c.as_str());
        unknown_tag("medical condition", input, suggest(input, known))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact() {
        assert_eq!(resolve_restriction("diabetic").unwrap(), DietaryRestriction::Diabetic);
        assert_eq!(
            resolve_condition("Heart-Disease").unwrap(),
            MedicalCondition::HeartDisease
        );
    }

    #[test]
    fn test_typo_gets_suggestion() {
        let err = resolve_condition("hypertention").unwrap_err();
        assert!(err.to_string().contains("did you mean 'hypertension'"));
    }

    #[test]
    fn test_garbage_has_no_suggestion() {
        let err = resolve_restriction("qqqq").unwrap_err();
        assert!(!err.to_string().contains("did you mean"));
    }
}
