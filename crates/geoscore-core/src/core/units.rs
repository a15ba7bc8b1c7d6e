//! System of units used throughout the crate.
//!
//! All quantities are stored in internal base units: lengths in millimetres,
//! masses in grams, amounts of substance in moles and energies in MeV.
//! Multiply a literal by a unit constant to convert it into base units and
//! divide by the same constant to read it back, e.g. `1.39 * G_PER_CM3`.

pub const MILLIMETER: f64 = 1.0;
pub const CENTIMETER: f64 = 10.0 * MILLIMETER;
pub const METER: f64 = 1000.0 * MILLIMETER;

pub const CM3: f64 = CENTIMETER * CENTIMETER * CENTIMETER;
pub const M3: f64 = METER * METER * METER;

pub const GRAM: f64 = 1.0;
pub const MILLIGRAM: f64 = 1.0e-3 * GRAM;
pub const KILOGRAM: f64 = 1.0e3 * GRAM;

pub const MOLE: f64 = 1.0;

pub const G_PER_CM3: f64 = GRAM / CM3;
pub const MG_PER_CM3: f64 = MILLIGRAM / CM3;
pub const G_PER_MOLE: f64 = GRAM / MOLE;

pub const PERCENT: f64 = 0.01;

pub const MEV: f64 = 1.0;
pub const KEV: f64 = 1.0e-3 * MEV;
pub const JOULE: f64 = MEV / 1.602_176_634e-13;

/// Absorbed dose, one joule per kilogram.
pub const GRAY: f64 = JOULE / KILOGRAM;

/// Materials lighter than this are classified as gases by default.
pub const GAS_DENSITY_THRESHOLD: f64 = 10.0 * MG_PER_CM3;

/// Resolves a length unit name (`mm`, `cm`, `m`) to its scale factor.
pub fn length_unit(name: &str) -> Option<f64> {
    match name.trim().to_ascii_lowercase().as_str() {
        "mm" | "millimeter" | "millimetre" => Some(MILLIMETER),
        "cm" | "centimeter" | "centimetre" => Some(CENTIMETER),
        "m" | "meter" | "metre" => Some(METER),
        _ => None,
    }
}
