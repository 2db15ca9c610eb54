use serde::Serialize;

use crate::models::Grade;

/// Badge color and one-line summary for a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeDescriptor {
    pub color: &'static str,
    pub description: &'static str,
}

pub fn describe(grade: Grade) -> GradeDescriptor {
    let (color, description) = match grade {
        Grade::A => ("#1fa363", "Excellent nutritional value"),
        Grade::B => ("#8bc34a", "Good nutritional value"),
        Grade::C => ("#ffeb3b", "Average nutritional value"),
        Grade::D => ("#ff9800", "Below average nutritional value"),
        Grade::E => ("#f44336", "Poor nutritional value"),
        Grade::Unknown => ("#9e9e9e", "Unknown nutritional value"),
    };
    GradeDescriptor { color, description }
}
