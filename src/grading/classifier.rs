use tracing::trace;

use crate::grading::thresholds::ThresholdTable;
use crate::models::{Grade, NutrientReading};

/// Grade a reading against a threshold table.
///
/// A missing core nutrient yields `Unknown` before any band is checked.
/// Otherwise the first band (A, B, C, D) admitting all three nutrients
/// wins, and a reading no band admits is `E`.
pub fn classify(reading: &NutrientReading, table: &ThresholdTable) -> Grade {
    if !reading.is_complete() {
        trace!("incomplete reading, grade unknown");
        return Grade::Unknown;
    }

    let grade = table
        .bands()
        .iter()
        .find(|band| band.admits(reading))
        .map(|band| band.grade)
        .unwrap_or(Grade::E);

    trace!(%grade, "classified reading");
    grade
}
