use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// NutriGrade — grade food products A–E from their per-100g nutrients.
#[derive(Parser, Debug)]
#[command(name = "nutri_grade")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Consumer profile JSON file.
    #[arg(short, long, global = true, env = "NUTRI_GRADE_PROFILE")]
    pub profile: Option<PathBuf>,

    /// Threshold table JSON file replacing the built-in bands.
    #[arg(long, global = true, env = "NUTRI_GRADE_THRESHOLDS")]
    pub thresholds: Option<PathBuf>,

    /// Dietary restriction to add to the profile (repeatable).
    #[arg(long = "restriction", global = true)]
    pub restrictions: Vec<String>,

    /// Medical condition to add to the profile (repeatable).
    #[arg(long = "condition", global = true)]
    pub conditions: Vec<String>,

    /// Custom sugar ceiling in g/100g.
    #[arg(long, global = true)]
    pub max_sugar: Option<f64>,

    /// Custom fat ceiling in g/100g.
    #[arg(long, global = true)]
    pub max_fat: Option<f64>,

    /// Custom salt ceiling in g/100g.
    #[arg(long, global = true)]
    pub max_salt: Option<f64>,

    /// Print JSON instead of formatted text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Grade a single nutrient reading. Omitted nutrients are missing.
    Grade {
        /// Sugars in g/100g.
        #[arg(long)]
        sugar: Option<f64>,

        /// Fat in g/100g.
        #[arg(long)]
        fat: Option<f64>,

        /// Salt in g/100g.
        #[arg(long)]
        salt: Option<f64>,

        /// Energy in kJ/100g.
        #[arg(long)]
        energy: Option<f64>,
    },

    /// Grade a product stored as JSON.
    Product {
        /// Product or product-lookup JSON file.
        file: PathBuf,
    },

    /// Grade every product in a CSV file.
    Batch {
        /// Input CSV (code, product_name, sugars_100g, fat_100g, salt_100g, energy_100g).
        input: PathBuf,

        /// Write a CSV report here.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the threshold table for the current profile.
    Thresholds,

    /// Build a consumer profile interactively.
    Profile {
        /// Where to save the profile.
        #[arg(short, long, default_value = "profile.json")]
        file: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Thresholds
    }
}
