use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of quantities a sensitive region can accumulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum QuantityKind {
    /// Total deposited energy (MeV).
    EnergyDeposit,
    /// Absorbed dose: deposited energy divided by the region's mass (Gy).
    DoseDeposit,
}

impl QuantityKind {
    /// The primitive scorer name used when none is given.
    pub fn default_scorer_name(&self) -> &'static str {
        match self {
            QuantityKind::EnergyDeposit => "eDep",
            QuantityKind::DoseDeposit => "dose",
        }
    }

    pub fn unit_label(&self) -> &'static str {
        match self {
            QuantityKind::EnergyDeposit => "MeV",
            QuantityKind::DoseDeposit => "Gy",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unsupported scoring quantity '{0}'")]
pub struct ParseQuantityError(pub String);

impl FromStr for QuantityKind {
    type Err = ParseQuantityError;

    /// Parses a quantity name; case-insensitive, accepting the common spellings
    /// (`energy-deposit`, `edep`, `dose`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "energydeposit" | "energy-deposit" | "energy_deposit" | "edep" | "energy" => {
                Ok(QuantityKind::EnergyDeposit)
            }
            "dosedeposit" | "dose-deposit" | "dose_deposit" | "dose" => {
                Ok(QuantityKind::DoseDeposit)
            }
            _ => Err(ParseQuantityError(s.to_string())),
        }
    }
}

impl TryFrom<String> for QuantityKind {
    type Error = ParseQuantityError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                QuantityKind::EnergyDeposit => "EnergyDeposit",
                QuantityKind::DoseDeposit => "DoseDeposit",
            }
        )
    }
}
