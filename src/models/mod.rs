mod grade;
mod product;
mod profile;
mod reading;

pub use grade::{Grade, GradeResult};
pub use product::{OffResponse, Product, ProductRow};
pub use profile::{ConsumerProfile, CustomLimits, DietaryRestriction, MedicalCondition};
pub use reading::NutrientReading;
