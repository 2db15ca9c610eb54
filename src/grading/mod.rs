pub mod adjuster;
pub mod classifier;
pub mod constants;
pub mod descriptor;
pub mod engine;
pub mod thresholds;
pub mod warnings;

pub use adjuster::{adjust, apply_custom_limits, default_rules, AdjustedTable, TighteningRule};
pub use classifier::classify;
pub use constants::*;
pub use descriptor::{describe, GradeDescriptor};
pub use engine::{grade_products, GradingEngine, ProductGrade};
pub use thresholds::{rescaled_column, Nutrient, ThresholdBand, ThresholdTable, BASE_THRESHOLDS};
pub use warnings::generate_warnings;
