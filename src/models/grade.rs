use std::fmt;

use serde::{Deserialize, Serialize};

/// Nutrition quality grade, best (A) to worst (E).
///
/// `Unknown` means a core nutrient was missing from the reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    #[serde(rename = "U")]
    Unknown,
}

impl Grade {
    /// Grades that have a threshold band, in evaluation order.
    pub const BANDED: [Grade; 4] = [Grade::A, Grade::B, Grade::C, Grade::D];

    pub fn letter(&self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::E => 'E',
            Grade::Unknown => 'U',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(Grade::A),
            'B' => Some(Grade::B),
            'C' => Some(Grade::C),
            'D' => Some(Grade::D),
            'E' => Some(Grade::E),
            'U' => Some(Grade::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Display-ready outcome of grading one reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeResult {
    pub grade: Grade,

    /// Hex color for the grade badge.
    pub color: String,

    pub description: String,

    /// Advisory messages, in sugar, fat, salt order.
    pub warnings: Vec<String>,

    /// Whether a profile-adjusted table was used.
    pub personalized: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_roundtrip() {
        for grade in [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E, Grade::Unknown] {
            assert_eq!(Grade::from_letter(grade.letter()), Some(grade));
        }
        assert_eq!(Grade::from_letter('b'), Some(Grade::B));
        assert_eq!(Grade::from_letter('F'), None);
    }

    #[test]
    fn test_ordering_best_first() {
        assert!(Grade::A < Grade::B);
        assert!(Grade::D < Grade::E);
    }

    #[test]
    fn test_unknown_serializes_as_u() {
        assert_eq!(serde_json::to_string(&Grade::Unknown).unwrap(), "\"U\"");
        assert_eq!(serde_json::to_string(&Grade::C).unwrap(), "\"C\"");
    }
}
