use serde::Serialize;
use tracing::debug;

use crate::grading::adjuster::{adjust, default_rules, AdjustedTable, TighteningRule};
use crate::grading::classifier::classify;
use crate::grading::descriptor::describe;
use crate::grading::thresholds::ThresholdTable;
use crate::grading::warnings::generate_warnings;
use crate::models::{ConsumerProfile, GradeResult, NutrientReading, Product};

/// Grades readings against an immutable base table.
///
/// Holds no mutable state; share one instance across threads by reference.
#[derive(Debug, Clone)]
pub struct GradingEngine {
    base: ThresholdTable,
    rules: Vec<TighteningRule>,
}

impl Default for GradingEngine {
    fn default() -> Self {
        Self::new(ThresholdTable::default())
    }
}

impl GradingEngine {
    /// Engine over `base` with the standard tightening rules.
    pub fn new(base: ThresholdTable) -> Self {
        Self {
            base,
            rules: default_rules().to_vec(),
        }
    }

    /// Replace the tightening rules. They are folded in the given order.
    pub fn with_rules(mut self, rules: Vec<TighteningRule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn base(&self) -> &ThresholdTable {
        &self.base
    }

    pub fn rules(&self) -> &[TighteningRule] {
        &self.rules
    }

    /// The table a reading would be graded against for `profile`.
    pub fn thresholds_for(&self, profile: Option<&ConsumerProfile>) -> AdjustedTable {
        adjust(&self.base, profile, &self.rules)
    }

    /// Full pipeline: adjust, classify, warn, describe.
    pub fn evaluate(
        &self,
        reading: &NutrientReading,
        profile: Option<&ConsumerProfile>,
    ) -> GradeResult {
        let adjusted = self.thresholds_for(profile);
        let grade = classify(reading, &adjusted.table);
        let warnings = generate_warnings(reading, &adjusted);
        let descriptor = describe(grade);

        debug!(
            %grade,
            personalized = adjusted.personalized,
            warnings = warnings.len(),
            "evaluated reading"
        );

        GradeResult {
            grade,
            color: descriptor.color.to_string(),
            description: descriptor.description.to_string(),
            warnings,
            personalized: adjusted.personalized,
        }
    }

    /// Grade a product's nutriments.
    pub fn evaluate_product(
        &self,
        product: &Product,
        profile: Option<&ConsumerProfile>,
    ) -> ProductGrade {
        ProductGrade {
            code: product.code.clone(),
            product_name: product.label().to_string(),
            result: self.evaluate(&product.nutriments, profile),
        }
    }
}

/// A product's identity alongside its grade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductGrade {
    pub code: String,
    pub product_name: String,
    #[serde(flatten)]
    pub result: GradeResult,
}

/// Grade every product with the same profile, preserving input order.
pub fn grade_products(
    engine: &GradingEngine,
    products: &[Product],
    profile: Option<&ConsumerProfile>,
) -> Vec<ProductGrade> {
    products
        .iter()
        .map(|p| engine.evaluate_product(p, profile))
        .collect()
}
