use serde::{Deserialize, Serialize};

use crate::error::{GradeError, Result};

/// Per-100g nutrient measurements for one product.
///
/// Each core nutrient is independently present or absent. `Some(0.0)` is a
/// real measurement; `None` means the value was never reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientReading {
    #[serde(rename = "sugars_100g", default)]
    pub sugar: Option<f64>,

    #[serde(rename = "fat_100g", default)]
    pub fat: Option<f64>,

    #[serde(rename = "salt_100g", default)]
    pub salt: Option<f64>,

    /// Energy in kJ per 100g. Informational only.
    #[serde(rename = "energy_100g", default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,
}

impl NutrientReading {
    /// Reading with all three core nutrients present.
    pub fn new(sugar: f64, fat: f64, salt: f64) -> Self {
        Self {
            sugar: Some(sugar),
            fat: Some(fat),
            salt: Some(salt),
            energy: None,
        }
    }

    pub fn with_energy(mut self, energy: f64) -> Self {
        self.energy = Some(energy);
        self
    }

    /// True when sugar, fat and salt are all present.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.sugar.is_some() && self.fat.is_some() && self.salt.is_some()
    }

    /// Energy converted from kJ to kcal.
    pub fn energy_kcal(&self) -> Option<f64> {
        self.energy.map(|kj| kj / 4.184)
    }

    /// Reject present values that are negative or not finite.
    ///
    /// Absent values are fine; they make the grade `Unknown` instead.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("sugar", self.sugar),
            ("fat", self.fat),
            ("salt", self.salt),
            ("energy", self.energy),
        ];
        for (name, value) in fields {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(GradeError::InvalidInput(format!(
                        "{} must be a finite, non-negative amount, got {}",
                        name, v
                    )));
                }
            }
        }
        Ok(())
    }
}
