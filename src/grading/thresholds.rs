use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{GradeError, Result};
use crate::grading::constants::*;
use crate::models::{Grade, NutrientReading};

/// The three nutrients that drive grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Sugar,
    Fat,
    Salt,
}

impl Nutrient {
    pub const ALL: [Nutrient; 3] = [Nutrient::Sugar, Nutrient::Fat, Nutrient::Salt];

    /// Measured value of this nutrient, if present.
    #[inline]
    pub fn value(&self, reading: &NutrientReading) -> Option<f64> {
        match self {
            Nutrient::Sugar => reading.sugar,
            Nutrient::Fat => reading.fat,
            Nutrient::Salt => reading.salt,
        }
    }

    /// Ceiling of this nutrient within a band.
    #[inline]
    pub fn ceiling(&self, band: &ThresholdBand) -> f64 {
        match self {
            Nutrient::Sugar => band.sugar,
            Nutrient::Fat => band.fat,
            Nutrient::Salt => band.salt,
        }
    }

    /// Position in `ALL`.
    pub(crate) fn index(&self) -> usize {
        match self {
            Nutrient::Sugar => 0,
            Nutrient::Fat => 1,
            Nutrient::Salt => 2,
        }
    }

    fn ceiling_mut<'a>(&self, band: &'a mut ThresholdBand) -> &'a mut f64 {
        match self {
            Nutrient::Sugar => &mut band.sugar,
            Nutrient::Fat => &mut band.fat,
            Nutrient::Salt => &mut band.salt,
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Nutrient::Sugar => "sugar",
            Nutrient::Fat => "fat",
            Nutrient::Salt => "salt",
        };
        f.write_str(name)
    }
}

/// Ceilings (g/100g) a reading must stay within to earn `grade`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBand {
    pub grade: Grade,
    pub sugar: f64,
    pub fat: f64,
    pub salt: f64,
}

impl ThresholdBand {
    pub fn new(grade: Grade, sugar: f64, fat: f64, salt: f64) -> Self {
        Self {
            grade,
            sugar,
            fat,
            salt,
        }
    }

    /// Inclusive check of all three nutrients against this band.
    ///
    /// An absent nutrient never passes.
    pub fn admits(&self, reading: &NutrientReading) -> bool {
        Nutrient::ALL.iter().all(|n| {
            n.value(reading)
                .map(|v| v <= n.ceiling(self))
                .unwrap_or(false)
        })
    }
}

/// Bands A→D. Anything exceeding D on any nutrient is grade E.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdTable {
    bands: [ThresholdBand; 4],
}

/// Process-wide reference table. Read-only.
pub static BASE_THRESHOLDS: LazyLock<ThresholdTable> = LazyLock::new(ThresholdTable::base);

impl Default for ThresholdTable {
    fn default() -> Self {
        *BASE_THRESHOLDS
    }
}

impl ThresholdTable {
    /// Build the reference table from the fixed low/high limits.
    pub fn base() -> Self {
        Self {
            bands: [
                ThresholdBand::new(Grade::A, SUGAR_LOW, FAT_LOW, SALT_LOW),
                ThresholdBand::new(
                    Grade::B,
                    SUGAR_LOW * BAND_B_FROM_A,
                    FAT_LOW * BAND_B_FROM_A,
                    SALT_LOW * BAND_B_FROM_A,
                ),
                ThresholdBand::new(
                    Grade::C,
                    SUGAR_HIGH * BAND_C_FROM_D,
                    FAT_HIGH * BAND_C_FROM_D,
                    SALT_HIGH * BAND_C_FROM_D,
                ),
                ThresholdBand::new(Grade::D, SUGAR_HIGH, FAT_HIGH, SALT_HIGH),
            ],
        }
    }

    /// Build a table from explicit A/B/C/D bands. Not validated.
    pub fn from_bands(bands: [ThresholdBand; 4]) -> Self {
        Self { bands }
    }

    /// Table whose every column is rescaled from the given D ceilings.
    pub fn from_d_ceilings(sugar: f64, fat: f64, salt: f64) -> Self {
        let mut table = Self::base();
        for (nutrient, d) in Nutrient::ALL.into_iter().zip([sugar, fat, salt]) {
            table = table.with_column(nutrient, rescaled_column(d));
        }
        table
    }

    /// Bands in evaluation order (A first).
    pub fn bands(&self) -> &[ThresholdBand; 4] {
        &self.bands
    }

    pub fn band(&self, grade: Grade) -> Option<&ThresholdBand> {
        self.bands.iter().find(|b| b.grade == grade)
    }

    /// The D band: the loosest ceilings before grade E.
    pub fn worst(&self) -> &ThresholdBand {
        &self.bands[3]
    }

    /// Ceilings of one nutrient across A/B/C/D.
    pub fn column(&self, nutrient: Nutrient) -> [f64; 4] {
        self.bands.map(|b| nutrient.ceiling(&b))
    }

    /// Replace one nutrient's A/B/C/D ceilings.
    pub fn with_column(mut self, nutrient: Nutrient, values: [f64; 4]) -> Self {
        for (band, value) in self.bands.iter_mut().zip(values) {
            *nutrient.ceiling_mut(band) = value;
        }
        self
    }

    /// Multiply one nutrient's A/B/C/D ceilings band-wise.
    pub fn scale_column(mut self, nutrient: Nutrient, multipliers: [f64; 4]) -> Self {
        for (band, m) in self.bands.iter_mut().zip(multipliers) {
            *nutrient.ceiling_mut(band) *= m;
        }
        self
    }

    /// Check band order, finiteness and that ceilings never decrease A→D.
    pub fn validate(&self) -> Result<()> {
        for (band, expected) in self.bands.iter().zip(Grade::BANDED) {
            if band.grade != expected {
                return Err(GradeError::InvalidThresholds(format!(
                    "expected band {} but found band {}",
                    expected, band.grade
                )));
            }
        }

        for nutrient in Nutrient::ALL {
            let column = self.column(nutrient);
            if let Some(bad) = column.iter().find(|v| !v.is_finite() || **v < 0.0) {
                return Err(GradeError::InvalidThresholds(format!(
                    "{} ceiling {} is not a non-negative number",
                    nutrient, bad
                )));
            }
            for (i, pair) in column.windows(2).enumerate() {
                if pair[1] < pair[0] {
                    return Err(GradeError::InvalidThresholds(format!(
                        "{} ceiling decreases from band {} ({}) to band {} ({})",
                        nutrient,
                        Grade::BANDED[i],
                        pair[0],
                        Grade::BANDED[i + 1],
                        pair[1]
                    )));
                }
            }
        }

        Ok(())
    }
}

/// A/B/C/D column derived from a single D ceiling.
pub fn rescaled_column(d: f64) -> [f64; 4] {
    CUSTOM_BAND_RATIOS.map(|ratio| d * ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_base_table_values() {
        let table = ThresholdTable::base();
        let b = table.band(Grade::B).unwrap();
        assert_float_absolute_eq!(b.sugar, 7.5, 1e-9);
        assert_float_absolute_eq!(b.fat, 4.5, 1e-9);
        assert_float_absolute_eq!(b.salt, 0.45, 1e-9);

        let c = table.band(Grade::C).unwrap();
        assert_float_absolute_eq!(c.sugar, 15.75, 1e-9);
        assert_float_absolute_eq!(c.fat, 12.25, 1e-9);
        assert_float_absolute_eq!(c.salt, 1.05, 1e-9);

        assert_eq!(table.worst().grade, Grade::D);
        assert_float_absolute_eq!(table.worst().sugar, 22.5, 1e-9);
        assert!(table.band(Grade::E).is_none());
    }

    #[test]
    fn test_base_table_is_valid() {
        assert!(ThresholdTable::base().validate().is_ok());
        assert_eq!(ThresholdTable::default(), ThresholdTable::base());
    }

    #[test]
    fn test_validate_rejects_decreasing_column() {
        let table = ThresholdTable::base().with_column(Nutrient::Fat, [3.0, 2.0, 5.0, 6.0]);
        assert!(matches!(table.validate(), Err(GradeError::InvalidThresholds(_))));
    }

    #[test]
    fn test_validate_rejects_misordered_bands() {
        let base = ThresholdTable::base();
        let [a, b, c, d] = *base.bands();
        let table = ThresholdTable::from_bands([b, a, c, d]);
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_admits_is_inclusive() {
        let band = ThresholdBand::new(Grade::A, 5.0, 3.0, 0.3);
        assert!(band.admits(&NutrientReading::new(5.0, 3.0, 0.3)));
        assert!(!band.admits(&NutrientReading::new(5.01, 3.0, 0.3)));
    }

    #[test]
    fn test_scale_column_only_touches_one_nutrient() {
        let table = ThresholdTable::base().scale_column(Nutrient::Sugar, [0.5, 0.5, 0.5, 0.5]);
        assert_float_absolute_eq!(table.worst().sugar, 11.25, 1e-9);
        assert_float_absolute_eq!(table.worst().fat, 17.5, 1e-9);
        assert_float_absolute_eq!(table.worst().salt, 1.5, 1e-9);
    }

    #[test]
    fn test_from_d_ceilings() {
        let table = ThresholdTable::from_d_ceilings(10.0, 20.0, 1.0);
        assert_eq!(table.column(Nutrient::Sugar), rescaled_column(10.0));
        assert_float_absolute_eq!(table.band(Grade::A).unwrap().fat, 6.0, 1e-9);
        assert!(table.validate().is_ok());
    }
}
