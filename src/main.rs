use clap::Parser;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

use nutri_grade_rs::cli::{Cli, Command};
use nutri_grade_rs::error::Result;
use nutri_grade_rs::grading::{grade_products, GradingEngine, ThresholdTable};
use nutri_grade_rs::interface::{
    collect_profile, display_batch, display_grade_result, display_thresholds, prompt_yes_no,
    resolve_condition, resolve_restriction,
};
use nutri_grade_rs::logging;
use nutri_grade_rs::models::{ConsumerProfile, CustomLimits, NutrientReading};
use nutri_grade_rs::state::{
    load_product, load_products_csv, load_profile, load_thresholds, save_profile,
    write_report_csv,
};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let base = match &cli.thresholds {
        Some(path) => load_thresholds(path)?,
        None => ThresholdTable::default(),
    };
    let engine = GradingEngine::new(base);
    let profile = build_profile(&cli)?;

    let command = cli.command.unwrap_or_default();
    debug!(
        ?command,
        has_profile = profile.is_some(),
        personalized = engine.thresholds_for(profile.as_ref()).personalized,
        "dispatching"
    );

    match command {
        Command::Grade {
            sugar,
            fat,
            salt,
            energy,
        } => {
            let reading = NutrientReading {
                sugar,
                fat,
                salt,
                energy,
            };
            cmd_grade(&engine, &reading, profile.as_ref(), cli.json)
        }
        Command::Product { file } => cmd_product(&engine, &file, profile.as_ref(), cli.json),
        Command::Batch { input, output } => cmd_batch(
            &engine,
            &input,
            output.as_deref(),
            profile.as_ref(),
            cli.json,
        ),
        Command::Thresholds => cmd_thresholds(&engine, profile.as_ref(), cli.json),
        Command::Profile { file } => cmd_profile(&file, profile.as_ref()),
    }
}

/// Combine the profile file with tags and limits given on the command line.
///
/// Returns `None` when nothing personalizes grading.
fn build_profile(cli: &Cli) -> Result<Option<ConsumerProfile>> {
    let overlay = CustomLimits {
        max_sugar: cli.max_sugar,
        max_fat: cli.max_fat,
        max_salt: cli.max_salt,
    };
    let has_overrides =
        !cli.restrictions.is_empty() || !cli.conditions.is_empty() || !overlay.is_empty();

    let mut profile = match &cli.profile {
        Some(path) => load_profile(path)?,
        None if has_overrides => ConsumerProfile::new(),
        None => return Ok(None),
    };

    for tag in &cli.restrictions {
        profile = profile.with_restriction(resolve_restriction(tag)?);
    }
    for tag in &cli.conditions {
        profile = profile.with_condition(resolve_condition(tag)?);
    }
    profile.custom_limits = profile.custom_limits.merged(overlay);
    profile.validate()?;

    Ok(Some(profile))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Grade a single reading from the command line.
fn cmd_grade(
    engine: &GradingEngine,
    reading: &NutrientReading,
    profile: Option<&ConsumerProfile>,
    json: bool,
) -> Result<()> {
    reading.validate()?;
    let result = engine.evaluate(reading, profile);

    if json {
        return print_json(&result);
    }
    display_grade_result("Reading", reading, &result);
    Ok(())
}

/// Grade a product JSON file.
fn cmd_product(
    engine: &GradingEngine,
    file: &Path,
    profile: Option<&ConsumerProfile>,
    json: bool,
) -> Result<()> {
    let product = load_product(file)?;
    let graded = engine.evaluate_product(&product, profile);

    if json {
        return print_json(&graded);
    }
    display_grade_result(&graded.product_name, &product.nutriments, &graded.result);
    Ok(())
}

/// Grade a CSV of products, optionally writing a report.
fn cmd_batch(
    engine: &GradingEngine,
    input: &Path,
    output: Option<&Path>,
    profile: Option<&ConsumerProfile>,
    json: bool,
) -> Result<()> {
    let products = load_products_csv(input)?;
    if products.is_empty() {
        warn!(path = %input.display(), "no products in input");
    }

    let grades = grade_products(engine, &products, profile);

    if let Some(path) = output {
        write_report_csv(path, &grades)?;
        if !json {
            println!("Wrote report to {}", path.display());
        }
    }

    if json {
        return print_json(&grades);
    }
    display_batch(&grades);
    Ok(())
}

/// Show the table the current profile grades against.
fn cmd_thresholds(
    engine: &GradingEngine,
    profile: Option<&ConsumerProfile>,
    json: bool,
) -> Result<()> {
    let adjusted = engine.thresholds_for(profile);

    if json {
        return print_json(&adjusted);
    }
    display_thresholds(&adjusted, profile);
    Ok(())
}

/// Build a profile interactively and save it.
fn cmd_profile(file: &Path, current: Option<&ConsumerProfile>) -> Result<()> {
    let starting = match current {
        Some(profile) => profile.clone(),
        None if file.exists() => load_profile(file)?,
        None => ConsumerProfile::new(),
    };

    let profile = collect_profile(&starting)?;
    profile.validate()?;

    println!();
    print_json(&profile)?;
    println!();

    if !profile.is_personalized() {
        println!("This profile does not change grading.");
    }

    if prompt_yes_no(&format!("Save profile to {}?", file.display()), true)? {
        save_profile(file, &profile)?;
        println!("Profile saved.");
    }

    Ok(())
}
