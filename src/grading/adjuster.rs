use serde::Serialize;
use tracing::{debug, trace};

use crate::grading::constants::*;
use crate::grading::thresholds::{rescaled_column, Nutrient, ThresholdTable};
use crate::models::{ConsumerProfile, CustomLimits};

/// A pure table → table adjustment gated on a profile predicate.
///
/// `advises` lists the nutrients whose condition advisory this rule turns
/// on when it applies.
#[derive(Debug, Clone, Copy)]
pub struct TighteningRule {
    pub name: &'static str,
    pub applies: fn(&ConsumerProfile) -> bool,
    pub tighten: fn(ThresholdTable) -> ThresholdTable,
    pub advises: &'static [Nutrient],
}

impl TighteningRule {
    pub fn applies_to(&self, profile: &ConsumerProfile) -> bool {
        (self.applies)(profile)
    }

    pub fn apply(&self, table: ThresholdTable) -> ThresholdTable {
        (self.tighten)(table)
    }
}

fn tighten_diabetic(table: ThresholdTable) -> ThresholdTable {
    table.scale_column(Nutrient::Sugar, DIABETIC_SUGAR_MULTIPLIERS)
}

fn tighten_sodium(table: ThresholdTable) -> ThresholdTable {
    table.scale_column(Nutrient::Salt, SODIUM_SALT_MULTIPLIERS)
}

fn tighten_heart(table: ThresholdTable) -> ThresholdTable {
    table
        .scale_column(Nutrient::Fat, HEART_FAT_MULTIPLIERS)
        .scale_column(Nutrient::Salt, HEART_SALT_MULTIPLIERS)
}

static DEFAULT_RULES: [TighteningRule; 3] = [
    TighteningRule {
        name: "diabetic",
        applies: ConsumerProfile::is_diabetic,
        tighten: tighten_diabetic,
        advises: &[Nutrient::Sugar],
    },
    TighteningRule {
        name: "low_sodium",
        applies: ConsumerProfile::is_sodium_restricted,
        tighten: tighten_sodium,
        advises: &[Nutrient::Salt],
    },
    TighteningRule {
        name: "heart_disease",
        applies: ConsumerProfile::has_heart_disease,
        tighten: tighten_heart,
        advises: &[Nutrient::Fat],
    },
];

/// Diabetic, low-sodium and heart-disease rules, applied in that order.
///
/// Heart disease and low sodium both scale salt, so a profile with both
/// gets the product of the two multipliers.
pub fn default_rules() -> &'static [TighteningRule] {
    &DEFAULT_RULES
}

/// A profile-specific table and whether it differs from the base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdjustedTable {
    pub table: ThresholdTable,
    pub personalized: bool,
    /// Nutrients with an advisory enabled by an applied rule, indexed as
    /// `Nutrient::ALL`.
    #[serde(skip)]
    pub advised: [bool; 3],
}

impl AdjustedTable {
    /// `table` as-is, with no personalization and no advisories.
    pub fn unadjusted(table: ThresholdTable) -> Self {
        Self {
            table,
            personalized: false,
            advised: [false; 3],
        }
    }

    /// Whether an over-limit `nutrient` should carry its condition advisory.
    #[inline]
    pub fn advises(&self, nutrient: Nutrient) -> bool {
        self.advised[nutrient.index()]
    }
}

/// Replace the D ceiling of each customized nutrient and rescale A/B/C
/// from it. Nutrients without a custom limit keep the base column.
pub fn apply_custom_limits(base: ThresholdTable, limits: &CustomLimits) -> ThresholdTable {
    let custom = [limits.max_sugar, limits.max_fat, limits.max_salt];

    Nutrient::ALL
        .into_iter()
        .zip(custom)
        .fold(base, |table, (nutrient, limit)| match limit {
            Some(d) => {
                trace!(%nutrient, d, "custom band-D ceiling");
                table.with_column(nutrient, rescaled_column(d))
            }
            None => table,
        })
}

/// Derive the table to grade against for `profile`.
///
/// Custom limits are applied first, then every matching rule is folded
/// over the result in order.
pub fn adjust(
    base: &ThresholdTable,
    profile: Option<&ConsumerProfile>,
    rules: &[TighteningRule],
) -> AdjustedTable {
    let Some(profile) = profile else {
        return AdjustedTable::unadjusted(*base);
    };

    let customized = apply_custom_limits(*base, &profile.custom_limits);

    let mut matched = 0usize;
    let mut advised = [false; 3];
    let table = rules
        .iter()
        .filter(|rule| rule.applies_to(profile))
        .fold(customized, |table, rule| {
            debug!(rule = rule.name, "applying tightening rule");
            matched += 1;
            for nutrient in rule.advises {
                advised[nutrient.index()] = true;
            }
            rule.apply(table)
        });

    AdjustedTable {
        table,
        personalized: profile.has_custom_limits() || matched > 0,
        advised,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietaryRestriction, Grade, MedicalCondition};
    use assert_float_eq::assert_float_absolute_eq;

    fn base() -> ThresholdTable {
        ThresholdTable::base()
    }

    #[test]
    fn test_no_profile_is_base() {
        let adjusted = adjust(&base(), None, default_rules());
        assert_eq!(adjusted.table, base());
        assert!(!adjusted.personalized);
    }

    #[test]
    fn test_empty_profile_is_base() {
        let profile = ConsumerProfile::new();
        let adjusted = adjust(&base(), Some(&profile), default_rules());
        assert_eq!(adjusted.table, base());
        assert!(!adjusted.personalized);
    }

    #[test]
    fn test_unrecognized_tags_ignored() {
        let profile = ConsumerProfile::new()
            .with_restriction(DietaryRestriction::Vegan)
            .with_restriction(DietaryRestriction::Other)
            .with_condition(MedicalCondition::KidneyDisease);
        let adjusted = adjust(&base(), Some(&profile), default_rules());
        assert_eq!(adjusted.table, base());
        assert!(!adjusted.personalized);
    }

    #[test]
    fn test_custom_sugar_rescales_only_sugar() {
        let profile = ConsumerProfile::new().with_custom_limits(CustomLimits {
            max_sugar: Some(10.0),
            ..Default::default()
        });
        let adjusted = adjust(&base(), Some(&profile), default_rules());
        let sugar = adjusted.table.column(Nutrient::Sugar);
        assert_float_absolute_eq!(sugar[0], 3.0, 1e-9);
        assert_float_absolute_eq!(sugar[1], 5.0, 1e-9);
        assert_float_absolute_eq!(sugar[2], 7.0, 1e-9);
        assert_float_absolute_eq!(sugar[3], 10.0, 1e-9);
        assert_eq!(adjusted.table.column(Nutrient::Fat), base().column(Nutrient::Fat));
        assert_eq!(adjusted.table.column(Nutrient::Salt), base().column(Nutrient::Salt));
        assert!(adjusted.personalized);
    }

    #[test]
    fn test_diabetic_multipliers() {
        let profile = ConsumerProfile::new().with_restriction(DietaryRestriction::Diabetic);
        let adjusted = adjust(&base(), Some(&profile), default_rules());
        let sugar = adjusted.table.column(Nutrient::Sugar);
        assert_float_absolute_eq!(sugar[0], 2.5, 1e-9);
        assert_float_absolute_eq!(sugar[1], 5.25, 1e-9);
        assert_float_absolute_eq!(sugar[2], 12.6, 1e-9);
        assert_float_absolute_eq!(sugar[3], 20.25, 1e-9);
        assert!(adjusted.personalized);
    }

    #[test]
    fn test_diabetes_condition_equals_diabetic_restriction() {
        let by_restriction = ConsumerProfile::new().with_restriction(DietaryRestriction::Diabetic);
        let by_condition = ConsumerProfile::new().with_condition(MedicalCondition::Diabetes);
        let both = by_restriction.clone().with_condition(MedicalCondition::Diabetes);

        let a = adjust(&base(), Some(&by_restriction), default_rules());
        let b = adjust(&base(), Some(&by_condition), default_rules());
        let c = adjust(&base(), Some(&both), default_rules());
        assert_eq!(a, b);
        // One rule, not applied twice.
        assert_eq!(a, c);
    }

    #[test]
    fn test_heart_disease_tightens_fat_and_salt() {
        let profile = ConsumerProfile::new().with_condition(MedicalCondition::HeartDisease);
        let table = adjust(&base(), Some(&profile), default_rules()).table;
        let a = table.band(Grade::A).unwrap();
        assert_float_absolute_eq!(a.fat, 1.8, 1e-9);
        assert_float_absolute_eq!(a.salt, 0.15, 1e-9);
        assert_float_absolute_eq!(a.sugar, 5.0, 1e-9);
    }

    #[test]
    fn test_heart_and_hypertension_compound_on_salt() {
        let profile = ConsumerProfile::new()
            .with_condition(MedicalCondition::HeartDisease)
            .with_condition(MedicalCondition::Hypertension);
        let table = adjust(&base(), Some(&profile), default_rules()).table;
        let d = table.worst();
        assert_float_absolute_eq!(d.salt, 1.5 * 0.9 * 0.9, 1e-9);
        assert_float_absolute_eq!(table.band(Grade::A).unwrap().salt, 0.3 * 0.5 * 0.5, 1e-9);
    }

    #[test]
    fn test_custom_limit_then_tightening() {
        let profile = ConsumerProfile::new()
            .with_restriction(DietaryRestriction::LowSodium)
            .with_custom_limits(CustomLimits {
                max_salt: Some(1.0),
                ..Default::default()
            });
        let salt = adjust(&base(), Some(&profile), default_rules())
            .table
            .column(Nutrient::Salt);
        assert_float_absolute_eq!(salt[0], 0.15, 1e-9);
        assert_float_absolute_eq!(salt[1], 0.35, 1e-9);
        assert_float_absolute_eq!(salt[2], 0.56, 1e-9);
        assert_float_absolute_eq!(salt[3], 0.9, 1e-9);
    }

    #[test]
    fn test_adjusted_tables_stay_ordered() {
        let profile = ConsumerProfile::new()
            .with_restriction(DietaryRestriction::Diabetic)
            .with_restriction(DietaryRestriction::LowSodium)
            .with_condition(MedicalCondition::HeartDisease)
            .with_custom_limits(CustomLimits {
                max_sugar: Some(12.0),
                max_fat: Some(9.0),
                max_salt: Some(0.8),
            });
        let table = adjust(&base(), Some(&profile), default_rules()).table;
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_empty_rule_list_keeps_custom_limits_only() {
        let profile = ConsumerProfile::new()
            .with_condition(MedicalCondition::HeartDisease)
            .with_custom_limits(CustomLimits {
                max_fat: Some(10.0),
                ..Default::default()
            });
        let adjusted = adjust(&base(), Some(&profile), &[]);
        assert_float_absolute_eq!(adjusted.table.worst().fat, 10.0, 1e-9);
        assert_float_absolute_eq!(adjusted.table.worst().salt, 1.5, 1e-9);
        assert!(adjusted.personalized);
        assert!(Nutrient::ALL.into_iter().all(|n| !adjusted.advises(n)));
    }

    #[test]
    fn test_applied_rules_enable_their_advisories() {
        let profile = ConsumerProfile::new()
            .with_restriction(DietaryRestriction::Diabetic)
            .with_condition(MedicalCondition::HeartDisease);
        let adjusted = adjust(&base(), Some(&profile), default_rules());
        assert!(adjusted.advises(Nutrient::Sugar));
        assert!(adjusted.advises(Nutrient::Fat));
        // Heart disease tightens salt but only low sodium advises on it.
        assert!(!adjusted.advises(Nutrient::Salt));
    }
}
