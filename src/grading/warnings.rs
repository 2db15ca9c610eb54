use crate::grading::adjuster::AdjustedTable;
use crate::grading::constants::*;
use crate::grading::thresholds::Nutrient;
use crate::models::NutrientReading;

/// Generic warning and condition advisory for a nutrient.
fn messages_for(nutrient: Nutrient) -> (&'static str, &'static str) {
    match nutrient {
        Nutrient::Sugar => (HIGH_SUGAR_WARNING, DIABETES_ADVISORY),
        Nutrient::Fat => (HIGH_FAT_WARNING, HEART_ADVISORY),
        Nutrient::Salt => (HIGH_SALT_WARNING, SODIUM_ADVISORY),
    }
}

/// Advisory messages for nutrients above the adjusted band-D ceilings.
///
/// Independent of the grade: a reading can be graded `Unknown` and still
/// warn about the nutrients it does report. Order is sugar, fat, salt,
/// each followed by its condition advisory when a tightening rule that
/// advises on it was applied.
pub fn generate_warnings(reading: &NutrientReading, adjusted: &AdjustedTable) -> Vec<String> {
    let worst = adjusted.table.worst();
    let mut warnings = Vec::new();

    for nutrient in Nutrient::ALL {
        let exceeded = nutrient
            .value(reading)
            .map(|v| v > nutrient.ceiling(worst))
            .unwrap_or(false);
        if !exceeded {
            continue;
        }

        let (warning, advisory) = messages_for(nutrient);
        warnings.push(warning.to_string());
        if adjusted.advises(nutrient) {
            warnings.push(advisory.to_string());
        }
    }

    warnings
}
