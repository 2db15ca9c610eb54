use dialoguer::{Confirm, Input, MultiSelect};

use crate::error::{GradeError, Result};
use crate::models::{ConsumerProfile, CustomLimits, DietaryRestriction, MedicalCondition};

/// Parse an optional limit. Empty input means no custom limit.
pub fn parse_limit(input: &str) -> Result<Option<f64>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let value: f64 = input
        .parse()
        .map_err(|_| GradeError::InvalidInput(format!("Invalid number: {}", input)))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(GradeError::InvalidInput(
            "Limit must be a positive number".to_string(),
        ));
    }

    Ok(Some(value))
}

/// Prompt for an optional per-nutrient ceiling.
pub fn prompt_limit(nutrient: &str, current: Option<f64>) -> Result<Option<f64>> {
    let default = current.map(|v| v.to_string()).unwrap_or_default();
    let input: String = Input::new()
        .with_prompt(format!(
            "Custom {} limit in g/100g (press Enter for none)",
            nutrient
        ))
        .default(default)
        .allow_empty(true)
        .interact_text()?;

    parse_limit(&input)
}

/// Prompt for dietary restrictions, preselecting the current ones.
pub fn prompt_restrictions(current: &ConsumerProfile) -> Result<Vec<DietaryRestriction>> {
    let items: Vec<&str> = DietaryRestriction::ALL.iter().map(|r| r.as_str()).collect();
    let defaults: Vec<bool> = DietaryRestriction::ALL
        .iter()
        .map(|r| current.restrictions.contains(r))
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt("Dietary restrictions (space to toggle, enter to confirm)")
        .items(&items)
        .defaults(&defaults)
        .interact()?;

    Ok(chosen.into_iter().map(|i| DietaryRestriction::ALL[i]).collect())
}

/// Prompt for medical conditions, preselecting the current ones.
pub fn prompt_conditions(current: &ConsumerProfile) -> Result<Vec<MedicalCondition>> {
    let items: Vec<&str> = MedicalCondition::ALL.iter().map(|c| c.as_str()).collect();
    let defaults: Vec<bool> = MedicalCondition::ALL
        .iter()
        .map(|c| current.conditions.contains(c))
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt("Medical conditions (space to toggle, enter to confirm)")
        .items(&items)
        .defaults(&defaults)
        .interact()?;

    Ok(chosen.into_iter().map(|i| MedicalCondition::ALL[i]).collect())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk the user through building a profile, starting from `current`.
pub fn collect_profile(current: &ConsumerProfile) -> Result<ConsumerProfile> {
    let mut profile = ConsumerProfile::new();

    for restriction in prompt_restrictions(current)? {
        profile = profile.with_restriction(restriction);
    }
    for condition in prompt_conditions(current)? {
        profile = profile.with_condition(condition);
    }

    if prompt_yes_no("Set custom nutrient limits?", current.has_custom_limits())? {
        let limits = CustomLimits {
            max_sugar: prompt_limit("sugar", current.custom_limits.max_sugar)?,
            max_fat: prompt_limit("fat", current.custom_limits.max_fat)?,
            max_salt: prompt_limit("salt", current.custom_limits.max_salt)?,
        };
        profile = profile.with_custom_limits(limits);
    }

    Ok(profile)
}
