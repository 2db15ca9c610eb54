use crate::grading::{AdjustedTable, ProductGrade};
use crate::models::{ConsumerProfile, GradeResult, NutrientReading};

fn format_nutrient(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2} g", v))
        .unwrap_or_else(|| "missing".to_string())
}

/// Widest product name in characters, for padding the batch listing.
fn name_width(grades: &[ProductGrade]) -> usize {
    grades
        .iter()
        .map(|g| g.product_name.chars().count())
        .max()
        .unwrap_or(10)
}

/// Display one graded reading.
pub fn display_grade_result(label: &str, reading: &NutrientReading, result: &GradeResult) {
    println!();
    println!("=== {} ===", label);
    println!();
    println!("  Grade: {}  ({})", result.grade, result.color);
    println!("  {}", result.description);
    if result.personalized {
        println!("  Graded against your personal limits.");
    }
    println!();
    println!("  Sugar: {}", format_nutrient(reading.sugar));
    println!("  Fat:   {}", format_nutrient(reading.fat));
    println!("  Salt:  {}", format_nutrient(reading.salt));
    if let Some(kcal) = reading.energy_kcal() {
        println!("  Energy: {:.0} kcal", kcal);
    }

    if !result.warnings.is_empty() {
        println!();
        println!("--- Warnings ---");
        for warning in &result.warnings {
            println!("  • {}", warning);
        }
    }

    println!();
}

/// Display the threshold table a profile grades against.
pub fn display_thresholds(adjusted: &AdjustedTable, profile: Option<&ConsumerProfile>) {
    println!();
    if adjusted.personalized {
        println!("=== Personalized thresholds (g/100g) ===");
    } else {
        println!("=== Default thresholds (g/100g) ===");
    }
    println!();

    if let Some(profile) = profile {
        if !profile.restrictions.is_empty() {
            let tags: Vec<&str> = profile.restrictions.iter().map(|r| r.as_str()).collect();
            println!("Restrictions: {}", tags.join(", "));
        }
        if !profile.conditions.is_empty() {
            let tags: Vec<&str> = profile.conditions.iter().map(|c| c.as_str()).collect();
            println!("Conditions: {}", tags.join(", "));
        }
    }

    println!("{:>5}  {:>8}  {:>8}  {:>8}", "Grade", "Sugar", "Fat", "Salt");
    for band in adjusted.table.bands() {
        println!(
            "{:>5}  {:>8.3}  {:>8.3}  {:>8.3}",
            band.grade.to_string(),
            band.sugar,
            band.fat,
            band.salt
        );
    }
    println!("{:>5}  above any D ceiling", "E");
    println!();
}

/// Display a batch of graded products as a table plus a grade tally.
pub fn display_batch(grades: &[ProductGrade]) {
    if grades.is_empty() {
        println!("No products to grade.");
        return;
    }

    println!();
    println!("=== Graded products ({} items) ===", grades.len());
    println!();

    let max_name_len = name_width(grades);

    for (i, g) in grades.iter().enumerate() {
        let warnings = if g.result.warnings.is_empty() {
            String::new()
        } else {
            format!("  [{}]", g.result.warnings.join(", "))
        };
        println!(
            "{:>3}. {:<width$}  {}{}",
            i + 1,
            g.product_name,
            g.result.grade,
            warnings,
            width = max_name_len
        );
    }

    println!();
    println!("--- Summary ---");
    for letter in ['A', 'B', 'C', 'D', 'E', 'U'] {
        let count = grades
            .iter()
            .filter(|g| g.result.grade.letter() == letter)
            .count();
        if count > 0 {
            println!("{}: {}", letter, count);
        }
    }
    println!();
}
