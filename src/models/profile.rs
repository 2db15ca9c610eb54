use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GradeError, Result};

/// Normalize a user-typed tag: lowercase, `-` and spaces become `_`.
fn normalize_tag(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .replace(['-', ' '], "_")
}

/// Dietary restriction tags a consumer can select.
///
/// Only `LowSodium` and `Diabetic` change grading; the rest matter to
/// ingredient checks handled elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryRestriction {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    NutFree,
    LowSodium,
    Diabetic,
    #[serde(other)]
    Other,
}

impl DietaryRestriction {
    pub const ALL: [DietaryRestriction; 7] = [
        DietaryRestriction::Vegetarian,
        DietaryRestriction::Vegan,
        DietaryRestriction::GlutenFree,
        DietaryRestriction::DairyFree,
        DietaryRestriction::NutFree,
        DietaryRestriction::LowSodium,
        DietaryRestriction::Diabetic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryRestriction::Vegetarian => "vegetarian",
            DietaryRestriction::Vegan => "vegan",
            DietaryRestriction::GlutenFree => "gluten_free",
            DietaryRestriction::DairyFree => "dairy_free",
            DietaryRestriction::NutFree => "nut_free",
            DietaryRestriction::LowSodium => "low_sodium",
            DietaryRestriction::Diabetic => "diabetic",
            DietaryRestriction::Other => "other",
        }
    }
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietaryRestriction {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize_tag(s);
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == key)
            .ok_or_else(|| GradeError::InvalidInput(format!("unknown dietary restriction '{}'", s)))
    }
}

/// Medical condition tags a consumer can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicalCondition {
    Diabetes,
    Hypertension,
    HeartDisease,
    KidneyDisease,
    None,
    #[serde(other)]
    Other,
}

impl MedicalCondition {
    pub const ALL: [MedicalCondition; 5] = [
        MedicalCondition::Diabetes,
        MedicalCondition::Hypertension,
        MedicalCondition::HeartDisease,
        MedicalCondition::KidneyDisease,
        MedicalCondition::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MedicalCondition::Diabetes => "diabetes",
            MedicalCondition::Hypertension => "hypertension",
            MedicalCondition::HeartDisease => "heart_disease",
            MedicalCondition::KidneyDisease => "kidney_disease",
            MedicalCondition::None => "none",
            MedicalCondition::Other => "other",
        }
    }
}

impl fmt::Display for MedicalCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MedicalCondition {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize_tag(s);
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == key)
            .ok_or_else(|| GradeError::InvalidInput(format!("unknown medical condition '{}'", s)))
    }
}

/// Per-nutrient ceilings (g/100g) that replace the band-D defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomLimits {
    #[serde(default, alias = "maxSugar", skip_serializing_if = "Option::is_none")]
    pub max_sugar: Option<f64>,

    #[serde(default, alias = "maxFat", skip_serializing_if = "Option::is_none")]
    pub max_fat: Option<f64>,

    #[serde(default, alias = "maxSalt", skip_serializing_if = "Option::is_none")]
    pub max_salt: Option<f64>,
}

impl CustomLimits {
    pub fn is_empty(&self) -> bool {
        self.max_sugar.is_none() && self.max_fat.is_none() && self.max_salt.is_none()
    }

    /// Overlay `other` on top of `self`; values set in `other` win.
    pub fn merged(self, other: CustomLimits) -> Self {
        Self {
            max_sugar: other.max_sugar.or(self.max_sugar),
            max_fat: other.max_fat.or(self.max_fat),
            max_salt: other.max_salt.or(self.max_salt),
        }
    }
}

/// A consumer's dietary restrictions, medical conditions and custom limits.
///
/// Treated as an immutable value by the grading engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumerProfile {
    #[serde(default, alias = "dietaryRestrictions")]
    pub restrictions: BTreeSet<DietaryRestriction>,

    #[serde(default, alias = "medicalConditions")]
    pub conditions: BTreeSet<MedicalCondition>,

    #[serde(default, alias = "preferences")]
    pub custom_limits: CustomLimits,
}

impl ConsumerProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_restriction(mut self, restriction: DietaryRestriction) -> Self {
        self.restrictions.insert(restriction);
        self
    }

    pub fn with_condition(mut self, condition: MedicalCondition) -> Self {
        self.conditions.insert(condition);
        self
    }

    pub fn with_custom_limits(mut self, limits: CustomLimits) -> Self {
        self.custom_limits = limits;
        self
    }

    pub fn is_diabetic(&self) -> bool {
        self.restrictions.contains(&DietaryRestriction::Diabetic)
            || self.conditions.contains(&MedicalCondition::Diabetes)
    }

    pub fn is_sodium_restricted(&self) -> bool {
        self.restrictions.contains(&DietaryRestriction::LowSodium)
            || self.conditions.contains(&MedicalCondition::Hypertension)
    }

    pub fn has_heart_disease(&self) -> bool {
        self.conditions.contains(&MedicalCondition::HeartDisease)
    }

    pub fn has_custom_limits(&self) -> bool {
        !self.custom_limits.is_empty()
    }

    /// True if grading for this profile differs from the default table.
    pub fn is_personalized(&self) -> bool {
        self.has_custom_limits()
            || self.is_diabetic()
            || self.is_sodium_restricted()
            || self.has_heart_disease()
    }

    /// Reject custom limits that are not finite and positive.
    ///
    /// The grading engine never calls this; loaders and the CLI do.
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("sugar", self.custom_limits.max_sugar),
            ("fat", self.custom_limits.max_fat),
            ("salt", self.custom_limits.max_salt),
        ];
        for (nutrient, value) in limits {
            if let Some(v) = value {
                if !v.is_finite() || v <= 0.0 {
                    return Err(GradeError::InvalidProfile(format!(
                        "custom {} limit must be a positive number, got {}",
                        nutrient, v
                    )));
                }
            }
        }
        Ok(())
    }
}
