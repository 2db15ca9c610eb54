pub mod cli;
pub mod error;
pub mod grading;
pub mod interface;
pub mod logging;
pub mod models;
pub mod state;

pub use error::{GradeError, Result};
pub use grading::GradingEngine;
pub use models::{ConsumerProfile, Grade, GradeResult, NutrientReading};
