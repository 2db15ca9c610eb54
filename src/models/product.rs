use serde::{Deserialize, Serialize};

use crate::models::NutrientReading;

/// A scanned product record in Open Food Facts layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub product_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brands: Option<String>,

    #[serde(default)]
    pub nutriments: NutrientReading,
}

impl Product {
    /// Display label: name when known, otherwise the barcode.
    pub fn label(&self) -> &str {
        if self.product_name.trim().is_empty() {
            &self.code
        } else {
            &self.product_name
        }
    }
}

/// Open Food Facts product lookup payload. `status == 0` means not found.
#[derive(Debug, Clone, Deserialize)]
pub struct OffResponse {
    pub status: i32,

    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub status_verbose: Option<String>,

    #[serde(default)]
    pub product: Option<Product>,
}

/// Flat CSV row for batch grading. Empty cells are absent nutrients.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRow {
    pub code: String,

    #[serde(default)]
    pub product_name: String,

    #[serde(default)]
    pub sugars_100g: Option<f64>,

    #[serde(default)]
    pub fat_100g: Option<f64>,

    #[serde(default)]
    pub salt_100g: Option<f64>,

    #[serde(default)]
    pub energy_100g: Option<f64>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            code: row.code,
            product_name: row.product_name,
            brands: None,
            nutriments: NutrientReading {
                sugar: row.sugars_100g,
                fat: row.fat_100g,
                salt: row.salt_100g,
                energy: row.energy_100g,
            },
        }
    }
}
