use crate::core::units::G_PER_MOLE;
use phf::{Map, phf_map};

/// Raw periodic-table entry. Molar masses are standard atomic weights in g/mole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementData {
    pub z: u32,
    pub name: &'static str,
    pub molar_mass: f64,
}

static PERIODIC_TABLE: Map<&'static str, ElementData> = phf_map! {
    "H"  => ElementData { z: 1, name: "Hydrogen", molar_mass: 1.008 },
    "He" => ElementData { z: 2, name: "Helium", molar_mass: 4.0026 },
    "Li" => ElementData { z: 3, name: "Lithium", molar_mass: 6.94 },
    "Be" => ElementData { z: 4, name: "Beryllium", molar_mass: 9.0122 },
    "B"  => ElementData { z: 5, name: "Boron", molar_mass: 10.81 },
    "C"  => ElementData { z: 6, name: "Carbon", molar_mass: 12.011 },
    "N"  => ElementData { z: 7, name: "Nitrogen", molar_mass: 14.007 },
    "O"  => ElementData { z: 8, name: "Oxygen", molar_mass: 15.999 },
    "F"  => ElementData { z: 9, name: "Fluorine", molar_mass: 18.998 },
    "Ne" => ElementData { z: 10, name: "Neon", molar_mass: 20.180 },
    "Na" => ElementData { z: 11, name: "Sodium", molar_mass: 22.990 },
    "Mg" => ElementData { z: 12, name: "Magnesium", molar_mass: 24.305 },
    "Al" => ElementData { z: 13, name: "Aluminium", molar_mass: 26.982 },
    "Si" => ElementData { z: 14, name: "Silicon", molar_mass: 28.085 },
    "P"  => ElementData { z: 15, name: "Phosphorus", molar_mass: 30.974 },
    "S"  => ElementData { z: 16, name: "Sulfur", molar_mass: 32.06 },
    "Cl" => ElementData { z: 17, name: "Chlorine", molar_mass: 35.45 },
    "Ar" => ElementData { z: 18, name: "Argon", molar_mass: 39.948 },
    "K"  => ElementData { z: 19, name: "Potassium", molar_mass: 39.098 },
    "Ca" => ElementData { z: 20, name: "Calcium", molar_mass: 40.078 },
    "Sc" => ElementData { z: 21, name: "Scandium", molar_mass: 44.956 },
    "Ti" => ElementData { z: 22, name: "Titanium", molar_mass: 47.867 },
    "V"  => ElementData { z: 23, name: "Vanadium", molar_mass: 50.942 },
    "Cr" => ElementData { z: 24, name: "Chromium", molar_mass: 51.996 },
    "Mn" => ElementData { z: 25, name: "Manganese", molar_mass: 54.938 },
    "Fe" => ElementData { z: 26, name: "Iron", molar_mass: 55.845 },
    "Co" => ElementData { z: 27, name: "Cobalt", molar_mass: 58.933 },
    "Ni" => ElementData { z: 28, name: "Nickel", molar_mass: 58.693 },
    "Cu" => ElementData { z: 29, name: "Copper", molar_mass: 63.546 },
    "Zn" => ElementData { z: 30, name: "Zinc", molar_mass: 65.38 },
    "Ga" => ElementData { z: 31, name: "Gallium", molar_mass: 69.723 },
    "Ge" => ElementData { z: 32, name: "Germanium", molar_mass: 72.630 },
    "As" => ElementData { z: 33, name: "Arsenic", molar_mass: 74.922 },
    "Se" => ElementData { z: 34, name: "Selenium", molar_mass: 78.971 },
    "Br" => ElementData { z: 35, name: "Bromine", molar_mass: 79.904 },
    "Kr" => ElementData { z: 36, name: "Krypton", molar_mass: 83.798 },
    "Rb" => ElementData { z: 37, name: "Rubidium", molar_mass: 85.468 },
    "Sr" => ElementData { z: 38, name: "Strontium", molar_mass: 87.62 },
    "Y"  => ElementData { z: 39, name: "Yttrium", molar_mass: 88.906 },
    "Zr" => ElementData { z: 40, name: "Zirconium", molar_mass: 91.224 },
    "Nb" => ElementData { z: 41, name: "Niobium", molar_mass: 92.906 },
    "Mo" => ElementData { z: 42, name: "Molybdenum", molar_mass: 95.95 },
    "Tc" => ElementData { z: 43, name: "Technetium", molar_mass: 98.0 },
    "Ru" => ElementData { z: 44, name: "Ruthenium", molar_mass: 101.07 },
    "Rh" => ElementData { z: 45, name: "Rhodium", molar_mass: 102.91 },
    "Pd" => ElementData { z: 46, name: "Palladium", molar_mass: 106.42 },
    "Ag" => ElementData { z: 47, name: "Silver", molar_mass: 107.87 },
    "Cd" => ElementData { z: 48, name: "Cadmium", molar_mass: 112.41 },
    "In" => ElementData { z: 49, name: "Indium", molar_mass: 114.82 },
    "Sn" => ElementData { z: 50, name: "Tin", molar_mass: 118.71 },
    "Sb" => ElementData { z: 51, name: "Antimony", molar_mass: 121.76 },
    "Te" => ElementData { z: 52, name: "Tellurium", molar_mass: 127.60 },
    "I"  => ElementData { z: 53, name: "Iodine", molar_mass: 126.90 },
    "Xe" => ElementData { z: 54, name: "Xenon", molar_mass: 131.29 },
    "Cs" => ElementData { z: 55, name: "Caesium", molar_mass: 132.91 },
    "Ba" => ElementData { z: 56, name: "Barium", molar_mass: 137.33 },
    "La" => ElementData { z: 57, name: "Lanthanum", molar_mass: 138.91 },
    "Ce" => ElementData { z: 58, name: "Cerium", molar_mass: 140.12 },
    "Pr" => ElementData { z: 59, name: "Praseodymium", molar_mass: 140.91 },
    "Nd" => ElementData { z: 60, name: "Neodymium", molar_mass: 144.24 },
    "Pm" => ElementData { z: 61, name: "Promethium", molar_mass: 145.0 },
    "Sm" => ElementData { z: 62, name: "Samarium", molar_mass: 150.36 },
    "Eu" => ElementData { z: 63, name: "Europium", molar_mass: 151.96 },
    "Gd" => ElementData { z: 64, name: "Gadolinium", molar_mass: 157.25 },
    "Tb" => ElementData { z: 65, name: "Terbium", molar_mass: 158.93 },
    "Dy" => ElementData { z: 66, name: "Dysprosium", molar_mass: 162.50 },
    "Ho" => ElementData { z: 67, name: "Holmium", molar_mass: 164.93 },
    "Er" => ElementData { z: 68, name: "Erbium", molar_mass: 167.26 },
    "Tm" => ElementData { z: 69, name: "Thulium", molar_mass: 168.93 },
    "Yb" => ElementData { z: 70, name: "Ytterbium", molar_mass: 173.05 },
    "Lu" => ElementData { z: 71, name: "Lutetium", molar_mass: 174.97 },
    "Hf" => ElementData { z: 72, name: "Hafnium", molar_mass: 178.49 },
    "Ta" => ElementData { z: 73, name: "Tantalum", molar_mass: 180.95 },
    "W"  => ElementData { z: 74, name: "Tungsten", molar_mass: 183.84 },
    "Re" => ElementData { z: 75, name: "Rhenium", molar_mass: 186.21 },
    "Os" => ElementData { z: 76, name: "Osmium", molar_mass: 190.23 },
    "Ir" => ElementData { z: 77, name: "Iridium", molar_mass: 192.22 },
    "Pt" => ElementData { z: 78, name: "Platinum", molar_mass: 195.08 },
    "Au" => ElementData { z: 79, name: "Gold", molar_mass: 196.97 },
    "Hg" => ElementData { z: 80, name: "Mercury", molar_mass: 200.59 },
    "Tl" => ElementData { z: 81, name: "Thallium", molar_mass: 204.38 },
    "Pb" => ElementData { z: 82, name: "Lead", molar_mass: 207.2 },
    "Bi" => ElementData { z: 83, name: "Bismuth", molar_mass: 208.98 },
    "Po" => ElementData { z: 84, name: "Polonium", molar_mass: 209.0 },
    "At" => ElementData { z: 85, name: "Astatine", molar_mass: 210.0 },
    "Rn" => ElementData { z: 86, name: "Radon", molar_mass: 222.0 },
    "Fr" => ElementData { z: 87, name: "Francium", molar_mass: 223.0 },
    "Ra" => ElementData { z: 88, name: "Radium", molar_mass: 226.0 },
    "Ac" => ElementData { z: 89, name: "Actinium", molar_mass: 227.0 },
    "Th" => ElementData { z: 90, name: "Thorium", molar_mass: 232.04 },
    "Pa" => ElementData { z: 91, name: "Protactinium", molar_mass: 231.04 },
    "U"  => ElementData { z: 92, name: "Uranium", molar_mass: 238.03 },
};

/// Looks up the standard periodic-table entry for a chemical symbol.
///
/// Symbols are case-sensitive (`"Ar"`, not `"AR"`); surrounding whitespace is ignored.
pub fn lookup(symbol: &str) -> Option<&'static ElementData> {
    PERIODIC_TABLE.get(symbol.trim())
}

/// A chemical element resolved from the periodic table.
///
/// Elements are created once by the registry and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// The chemical symbol (e.g. "O").
    pub symbol: String,
    /// The full element name (e.g. "Oxygen").
    pub name: String,
    /// The atomic number.
    pub z: u32,
    /// The molar mass in internal units (see [`crate::core::units`]).
    pub molar_mass: f64,
}

impl Element {
    pub(crate) fn from_table(symbol: &str) -> Option<Self> {
        let symbol = symbol.trim();
        lookup(symbol).map(|data| Self {
            symbol: symbol.to_string(),
            name: data.name.to_string(),
            z: data.z,
            molar_mass: data.molar_mass * G_PER_MOLE,
        })
    }
}
