use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{GradeError, Result};
use crate::grading::{ProductGrade, ThresholdTable};
use crate::models::{ConsumerProfile, NutrientReading, OffResponse, Product, ProductRow};

/// Load and validate a consumer profile from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<ConsumerProfile> {
    let content = fs::read_to_string(path.as_ref())?;
    let profile: ConsumerProfile = serde_json::from_str(&content)?;
    profile.validate()?;

    info!(path = %path.as_ref().display(), "loaded profile");
    Ok(profile)
}

/// Save a consumer profile as pretty JSON.
pub fn save_profile<P: AsRef<Path>>(path: P, profile: &ConsumerProfile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path.as_ref(), json)?;

    info!(path = %path.as_ref().display(), "saved profile");
    Ok(())
}

/// Load a threshold table from JSON, rejecting tables that break band order.
pub fn load_thresholds<P: AsRef<Path>>(path: P) -> Result<ThresholdTable> {
    let content = fs::read_to_string(path.as_ref())?;
    let table: ThresholdTable = serde_json::from_str(&content)?;
    table.validate()?;

    info!(path = %path.as_ref().display(), "loaded threshold table");
    Ok(table)
}

/// A product file without the lookup envelope. Stricter than `Product`:
/// the barcode and nutriments are required and stray keys are rejected.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BareProduct {
    code: String,
    #[serde(default)]
    product_name: String,
    #[serde(default)]
    brands: Option<String>,
    nutriments: NutrientReading,
}

impl From<BareProduct> for Product {
    fn from(bare: BareProduct) -> Self {
        Product {
            code: bare.code,
            product_name: bare.product_name,
            brands: bare.brands,
            nutriments: bare.nutriments,
        }
    }
}

/// Reject products whose reported nutriments are negative or not finite.
fn checked(product: Product) -> Result<Product> {
    match product.nutriments.validate() {
        Ok(()) => Ok(product),
        Err(GradeError::InvalidInput(msg)) => Err(GradeError::InvalidInput(format!(
            "product {}: {}",
            product.label(),
            msg
        ))),
        Err(e) => Err(e),
    }
}

/// Load one product from a JSON file.
///
/// A top-level `status` key marks a product lookup payload
/// (`{"status": 1, "product": {...}}`); anything else must be a bare
/// product object.
pub fn load_product<P: AsRef<Path>>(path: P) -> Result<Product> {
    let content = fs::read_to_string(path.as_ref())?;
    let value: serde_json::Value = serde_json::from_str(&content)?;

    let product = if value.get("status").is_some() {
        let response: OffResponse = serde_json::from_value(value)?;
        match response.product {
            Some(product) if response.status != 0 => product,
            _ => {
                return Err(GradeError::ProductNotFound(
                    response
                        .code
                        .or(response.status_verbose)
                        .unwrap_or_else(|| path.as_ref().display().to_string()),
                ));
            }
        }
    } else {
        Product::from(serde_json::from_value::<BareProduct>(value)?)
    };

    checked(product)
}

/// Load products from a CSV with a header row.
///
/// Columns: code, product_name, sugars_100g, fat_100g, salt_100g,
/// energy_100g. Empty nutrient cells are treated as missing; a negative
/// or non-finite cell fails the whole load, naming the product.
pub fn load_products_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let mut products = Vec::new();
    for row in rdr.deserialize::<ProductRow>() {
        products.push(checked(Product::from(row?))?);
    }

    info!(
        path = %path.as_ref().display(),
        count = products.len(),
        "loaded products"
    );
    Ok(products)
}

/// Write graded products to a CSV report.
pub fn write_report_csv<P: AsRef<Path>>(path: P, grades: &[ProductGrade]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;

    wtr.write_record([
        "code",
        "product_name",
        "grade",
        "description",
        "personalized",
        "warnings",
    ])?;

    for g in grades {
        wtr.write_record([
            g.code.clone(),
            g.product_name.clone(),
            g.result.grade.to_string(),
            g.result.description.clone(),
            g.result.personalized.to_string(),
            g.result.warnings.join("; "),
        ])?;
    }

    wtr.flush()?;
    info!(path = %path.as_ref().display(), rows = grades.len(), "wrote report");
    Ok(())
}
