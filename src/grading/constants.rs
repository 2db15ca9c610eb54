// ─────────────────────────────────────────────────────────────────────────────
// Reference limits (g per 100g)
// ─────────────────────────────────────────────────────────────────────────────

/// Sugar ceiling for the best band (A).
pub const SUGAR_LOW: f64 = 5.0;

/// Sugar ceiling for the worst passing band (D).
pub const SUGAR_HIGH: f64 = 22.5;

pub const FAT_LOW: f64 = 3.0;
pub const FAT_HIGH: f64 = 17.5;

pub const SALT_LOW: f64 = 0.3;
pub const SALT_HIGH: f64 = 1.5;

/// Band B = band A × this.
pub const BAND_B_FROM_A: f64 = 1.5;

/// Band C = band D × this.
pub const BAND_C_FROM_D: f64 = 0.7;

/// A/B/C/D ceilings as fractions of a custom D ceiling.
pub const CUSTOM_BAND_RATIOS: [f64; 4] = [0.3, 0.5, 0.7, 1.0];

// ─────────────────────────────────────────────────────────────────────────────
// Tightening multipliers, per band A/B/C/D
// ─────────────────────────────────────────────────────────────────────────────

pub const DIABETIC_SUGAR_MULTIPLIERS: [f64; 4] = [0.5, 0.7, 0.8, 0.9];

pub const SODIUM_SALT_MULTIPLIERS: [f64; 4] = [0.5, 0.7, 0.8, 0.9];

pub const HEART_FAT_MULTIPLIERS: [f64; 4] = [0.6, 0.7, 0.8, 0.9];

pub const HEART_SALT_MULTIPLIERS: [f64; 4] = [0.5, 0.7, 0.8, 0.9];

// ─────────────────────────────────────────────────────────────────────────────
// Warning texts
// ─────────────────────────────────────────────────────────────────────────────

pub const HIGH_SUGAR_WARNING: &str = "High sugar content";
pub const HIGH_FAT_WARNING: &str = "High fat content";
pub const HIGH_SALT_WARNING: &str = "High salt content";

pub const DIABETES_ADVISORY: &str =
    "Not recommended for diabetics: sugar exceeds your personal limit";
pub const HEART_ADVISORY: &str =
    "Not recommended for heart health: fat exceeds your personal limit";
pub const SODIUM_ADVISORY: &str =
    "Not recommended for a low-sodium diet: salt exceeds your personal limit";
