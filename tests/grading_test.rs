use nutri_grade_rs::grading::{
    GradingEngine, ThresholdTable, DIABETES_ADVISORY, HIGH_FAT_WARNING, HIGH_SALT_WARNING,
    HIGH_SUGAR_WARNING, SODIUM_ADVISORY,
};
use nutri_grade_rs::models::{
    ConsumerProfile, CustomLimits, DietaryRestriction, Grade, MedicalCondition, NutrientReading,
};

fn diabetic() -> ConsumerProfile {
    ConsumerProfile::new().with_restriction(DietaryRestriction::Diabetic)
}

#[test]
fn test_boundary_reading_is_a() {
    let engine = GradingEngine::default();
    let result = engine.evaluate(&NutrientReading::new(5.0, 3.0, 0.3), None);
    assert_eq!(result.grade, Grade::A);
    assert_eq!(result.description, "Excellent nutritional value");
}

#[test]
fn test_over_every_ceiling_is_e() {
    let engine = GradingEngine::default();
    let result = engine.evaluate(&NutrientReading::new(23.0, 18.0, 2.0), None);
    assert_eq!(result.grade, Grade::E);
    assert_eq!(
        result.warnings,
        vec![HIGH_SUGAR_WARNING, HIGH_FAT_WARNING, HIGH_SALT_WARNING]
    );
}

#[test]
fn test_sugar_only_warning() {
    let engine = GradingEngine::default();
    let result = engine.evaluate(&NutrientReading::new(30.0, 0.0, 0.0), None);
    assert_eq!(result.warnings, vec![HIGH_SUGAR_WARNING]);
    assert_eq!(result.grade, Grade::E);
}

#[test]
fn test_missing_nutrient_is_unknown_for_any_profile() {
    let engine = GradingEngine::default();
    let readings = [
        NutrientReading {
            sugar: None,
            fat: Some(0.0),
            salt: Some(0.0),
            energy: None,
        },
        NutrientReading {
            sugar: Some(0.0),
            fat: None,
            salt: Some(0.0),
            energy: Some(100.0),
        },
        NutrientReading {
            sugar: Some(0.0),
            fat: Some(0.0),
            salt: None,
            energy: None,
        },
        NutrientReading::default(),
    ];
    let profiles = [None, Some(diabetic())];

    for reading in &readings {
        for profile in &profiles {
            let result = engine.evaluate(reading, profile.as_ref());
            assert_eq!(result.grade, Grade::Unknown);
            assert_eq!(result.color, "#9e9e9e");
        }
    }
}

#[test]
fn test_diabetic_drops_one_band() {
    // Default A sugar ceiling is 5.0, diabetic A is 2.5 and diabetic B is 5.25.
    let engine = GradingEngine::default();
    let reading = NutrientReading::new(4.0, 1.0, 0.1);

    let default = engine.evaluate(&reading, None);
    let personalized = engine.evaluate(&reading, Some(&diabetic()));

    assert_eq!(default.grade, Grade::A);
    assert_eq!(personalized.grade, Grade::B);
    assert!(personalized.personalized);
    assert!(personalized.warnings.is_empty());
}

#[test]
fn test_diabetic_warning_uses_tightened_d() {
    // 21.0 is under the default D (22.5) but over diabetic D (20.25).
    let engine = GradingEngine::default();
    let reading = NutrientReading::new(21.0, 1.0, 0.1);

    assert!(engine.evaluate(&reading, None).warnings.is_empty());
    assert_eq!(
        engine.evaluate(&reading, Some(&diabetic())).warnings,
        vec![HIGH_SUGAR_WARNING, DIABETES_ADVISORY]
    );
}

#[test]
fn test_low_sodium_salt_advisory() {
    let engine = GradingEngine::default();
    let profile = ConsumerProfile::new().with_restriction(DietaryRestriction::LowSodium);
    // Salt D tightens to 1.35.
    let result = engine.evaluate(&NutrientReading::new(1.0, 1.0, 1.4), Some(&profile));
    assert_eq!(result.grade, Grade::E);
    assert_eq!(result.warnings, vec![HIGH_SALT_WARNING, SODIUM_ADVISORY]);
}

#[test]
fn test_custom_limit_moves_d_ceiling() {
    let engine = GradingEngine::default();
    let profile = ConsumerProfile::new().with_custom_limits(CustomLimits {
        max_fat: Some(10.0),
        ..Default::default()
    });
    // Fat 11 is C by default, over the custom D of 10.
    let reading = NutrientReading::new(1.0, 11.0, 0.1);
    assert_eq!(engine.evaluate(&reading, None).grade, Grade::C);

    let result = engine.evaluate(&reading, Some(&profile));
    assert_eq!(result.grade, Grade::E);
    assert_eq!(result.warnings, vec![HIGH_FAT_WARNING]);
    assert!(result.personalized);
}

#[test]
fn test_personalized_flag() {
    let engine = GradingEngine::default();
    let reading = NutrientReading::new(1.0, 1.0, 0.1);

    assert!(!engine.evaluate(&reading, None).personalized);
    assert!(!engine.evaluate(&reading, Some(&ConsumerProfile::new())).personalized);

    let ignored = ConsumerProfile::new()
        .with_restriction(DietaryRestriction::Vegan)
        .with_restriction(DietaryRestriction::GlutenFree)
        .with_condition(MedicalCondition::KidneyDisease)
        .with_condition(MedicalCondition::None);
    assert!(!engine.evaluate(&reading, Some(&ignored)).personalized);

    for profile in [
        ConsumerProfile::new().with_restriction(DietaryRestriction::LowSodium),
        ConsumerProfile::new().with_condition(MedicalCondition::Hypertension),
        ConsumerProfile::new().with_condition(MedicalCondition::HeartDisease),
        ConsumerProfile::new().with_condition(MedicalCondition::Diabetes),
        ConsumerProfile::new().with_custom_limits(CustomLimits {
            max_salt: Some(2.0),
            ..Default::default()
        }),
    ] {
        assert!(engine.evaluate(&reading, Some(&profile)).personalized);
    }
}

#[test]
fn test_custom_base_table_is_used() {
    let strict = ThresholdTable::from_d_ceilings(10.0, 8.0, 0.8);
    assert!(strict.validate().is_ok());

    let engine = GradingEngine::new(strict);
    let result = engine.evaluate(&NutrientReading::new(12.0, 1.0, 0.1), None);
    assert_eq!(result.grade, Grade::E);
    assert!(!result.personalized);
}

#[test]
fn test_concurrent_callers_agree() {
    let engine = GradingEngine::default();
    let profile = diabetic();
    let reading = NutrientReading::new(4.0, 1.0, 0.1);
    let expected = engine.evaluate(&reading, Some(&profile));

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| engine.evaluate(&reading, Some(&profile))))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
