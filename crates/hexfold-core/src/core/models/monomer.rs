use crate::core::lattice::{MAX_STEPS, MIN_STEPS};
use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const AVERAGE_RESIDUE_MASS: f64 = 110.0; // Da, used for abstract and unknown monomers

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonomerType {
    // --- Abstract lattice-model units ---
    Flexible,  // FLX
    Straight,  // STR
    Left60,    // L60
    Right60,   // R60
    Left120,   // L120
    Right120,  // R120
    Cation,    // POS
    Anion,     // NEG
    Apolar,    // HPB
    Polar,     // HPL
    Rigid,     // RGD

    // --- Amino acids, hydrophobic ---
    Alanine,
    Valine,
    Leucine,
    Isoleucine,
    Methionine,
    Phenylalanine,
    Tryptophan,
    Cysteine,

    // --- Amino acids, polar ---
    Serine,
    Threonine,
    Asparagine,
    Glutamine,
    Tyrosine,
    Histidine,

    // --- Amino acids, charged ---
    Arginine,
    Lysine,
    AsparticAcid,
    GlutamicAcid,

    // --- Amino acids, special ---
    Glycine,
    Proline,

    // --- DNA nucleotides ---
    Adenine,
    Cytosine,
    Guanine,
    Thymine,
}

static MONOMER_CODES: Map<&'static str, MonomerType> = phf_map! {
    "FLX" => MonomerType::Flexible,
    "STR" => MonomerType::Straight,
    "L60" => MonomerType::Left60,
    "R60" => MonomerType::Right60,
    "L120" => MonomerType::Left120,
    "R120" => MonomerType::Right120,
    "POS" => MonomerType::Cation,
    "NEG" => MonomerType::Anion,
    "HPB" => MonomerType::Apolar,
    "HPL" => MonomerType::Polar,
    "RGD" => MonomerType::Rigid,
    "ALA" => MonomerType::Alanine,
    "VAL" => MonomerType::Valine,
    "LEU" => MonomerType::Leucine,
    "ILE" => MonomerType::Isoleucine,
    "MET" => MonomerType::Methionine,
    "PHE" => MonomerType::Phenylalanine,
    "TRP" => MonomerType::Tryptophan,
    "CYS" => MonomerType::Cysteine,
    "SER" => MonomerType::Serine,
    "THR" => MonomerType::Threonine,
    "ASN" => MonomerType::Asparagine,
    "GLN" => MonomerType::Glutamine,
    "TYR" => MonomerType::Tyrosine,
    "HIS" => MonomerType::Histidine,
    "ARG" => MonomerType::Arginine,
    "LYS" => MonomerType::Lysine,
    "ASP" => MonomerType::AsparticAcid,
    "GLU" => MonomerType::GlutamicAcid,
    "GLY" => MonomerType::Glycine,
    "PRO" => MonomerType::Proline,
    "DA" => MonomerType::Adenine,
    "DC" => MonomerType::Cytosine,
    "DG" => MonomerType::Guanine,
    "DT" => MonomerType::Thymine,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChargeClass {
    Neutral,
    Positive,
    Negative,
}

impl ChargeClass {
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            ChargeClass::Neutral => 0.0,
            ChargeClass::Positive => 1.0,
            ChargeClass::Negative => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hydropathy {
    None,
    Hydrophobic,
    Hydrophilic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoldPreference {
    Flexible,
    Preferred(i8),
    /// Only the given fold state is admitted.
    Rigid(i8),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonomerProperties {
    pub mass: f64,
    pub charge: ChargeClass,
    pub hydropathy: Hydropathy,
    pub fold: FoldPreference,
}

impl MonomerProperties {
    const fn new(
        mass: f64,
        charge: ChargeClass,
        hydropathy: Hydropathy,
        fold: FoldPreference,
    ) -> Self {
        Self {
            mass,
            charge,
            hydropathy,
            fold,
        }
    }

    const fn neutral(mass: f64) -> Self {
        Self::new(
            mass,
            ChargeClass::Neutral,
            Hydropathy::None,
            FoldPreference::Flexible,
        )
    }

    const fn charged(mass: f64, charge: ChargeClass) -> Self {
        Self::new(mass, charge, Hydropathy::None, FoldPreference::Flexible)
    }

    const fn with_hydropathy(mass: f64, hydropathy: Hydropathy) -> Self {
        Self::new(mass, ChargeClass::Neutral, hydropathy, FoldPreference::Flexible)
    }

    const fn folding(fold: FoldPreference) -> Self {
        Self::new(
            AVERAGE_RESIDUE_MASS,
            ChargeClass::Neutral,
            Hydropathy::None,
            fold,
        )
    }

    pub fn preferred_steps(&self) -> Option<i8> {
        match self.fold {
            FoldPreference::Flexible => None,
            FoldPreference::Preferred(steps) | FoldPreference::Rigid(steps) => Some(steps),
        }
    }

    pub fn admits(&self, steps: i8) -> bool {
        match self.fold {
            FoldPreference::Rigid(fixed) => steps == fixed,
            _ => (MIN_STEPS..=MAX_STEPS).contains(&steps),
        }
    }

    pub fn admitted_steps(&self) -> impl Iterator<Item = i8> + '_ {
        (MIN_STEPS..=MAX_STEPS).filter(move |&steps| self.admits(steps))
    }
}

impl MonomerType {
    pub fn from_code(code: &str) -> Option<Self> {
        MONOMER_CODES
            .get(code.trim().to_ascii_uppercase().as_str())
            .copied()
    }

    pub fn code(self) -> &'static str {
        match self {
            MonomerType::Flexible => "FLX",
            MonomerType::Straight => "STR",
            MonomerType::Left60 => "L60",
            MonomerType::Right60 => "R60",
            MonomerType::Left120 => "L120",
            MonomerType::Right120 => "R120",
            MonomerType::Cation => "POS",
            MonomerType::Anion => "NEG",
            MonomerType::Apolar => "HPB",
            MonomerType::Polar => "HPL",
            MonomerType::Rigid => "RGD",
            MonomerType::Alanine => "ALA",
            MonomerType::Valine => "VAL",
            MonomerType::Leucine => "LEU",
            MonomerType::Isoleucine => "ILE",
            MonomerType::Methionine => "MET",
            MonomerType::Phenylalanine => "PHE",
            MonomerType::Tryptophan => "TRP",
            MonomerType::Cysteine => "CYS",
            MonomerType::Serine => "SER",
            MonomerType::Threonine => "THR",
            MonomerType::Asparagine => "ASN",
            MonomerType::Glutamine => "GLN",
            MonomerType::Tyrosine => "TYR",
            MonomerType::Histidine => "HIS",
            MonomerType::Arginine => "ARG",
            MonomerType::Lysine => "LYS",
            MonomerType::AsparticAcid => "ASP",
            MonomerType::GlutamicAcid => "GLU",
            MonomerType::Glycine => "GLY",
            MonomerType::Proline => "PRO",
            MonomerType::Adenine => "DA",
            MonomerType::Cytosine => "DC",
            MonomerType::Guanine => "DG",
            MonomerType::Thymine => "DT",
        }
    }

    pub fn properties(self) -> MonomerProperties {
        use ChargeClass::{Negative, Positive};
        use Hydropathy::{Hydrophilic, Hydrophobic};

        match self {
            MonomerType::Flexible => MonomerProperties::neutral(AVERAGE_RESIDUE_MASS),
            MonomerType::Straight => MonomerProperties::folding(FoldPreference::Preferred(0)),
            MonomerType::Left60 => MonomerProperties::folding(FoldPreference::Preferred(1)),
            MonomerType::Right60 => MonomerProperties::folding(FoldPreference::Preferred(-1)),
            MonomerType::Left120 => MonomerProperties::folding(FoldPreference::Preferred(2)),
            MonomerType::Right120 => MonomerProperties::folding(FoldPreference::Preferred(-2)),
            MonomerType::Cation => MonomerProperties::charged(AVERAGE_RESIDUE_MASS, Positive),
            MonomerType::Anion => MonomerProperties::charged(AVERAGE_RESIDUE_MASS, Negative),
            MonomerType::Apolar => {
                MonomerProperties::with_hydropathy(AVERAGE_RESIDUE_MASS, Hydrophobic)
            }
            MonomerType::Polar => {
                MonomerProperties::with_hydropathy(AVERAGE_RESIDUE_MASS, Hydrophilic)
            }
            MonomerType::Rigid => MonomerProperties::folding(FoldPreference::Rigid(0)),

            MonomerType::Alanine => MonomerProperties::with_hydropathy(71.08, Hydrophobic),
            MonomerType::Valine => MonomerProperties::with_hydropathy(99.13, Hydrophobic),
            MonomerType::Leucine => MonomerProperties::with_hydropathy(113.16, Hydrophobic),
            MonomerType::Isoleucine => MonomerProperties::with_hydropathy(113.16, Hydrophobic),
            MonomerType::Methionine => MonomerProperties::with_hydropathy(131.19, Hydrophobic),
            MonomerType::Phenylalanine => MonomerProperties::with_hydropathy(147.18, Hydrophobic),
            MonomerType::Tryptophan => MonomerProperties::with_hydropathy(186.21, Hydrophobic),
            MonomerType::Cysteine => MonomerProperties::with_hydropathy(103.14, Hydrophobic),

            MonomerType::Serine => MonomerProperties::with_hydropathy(87.08, Hydrophilic),
            MonomerType::Threonine => MonomerProperties::with_hydropathy(101.10, Hydrophilic),
            MonomerType::Asparagine => MonomerProperties::with_hydropathy(114.10, Hydrophilic),
            MonomerType::Glutamine => MonomerProperties::with_hydropathy(128.13, Hydrophilic),
            MonomerType::Tyrosine => MonomerProperties::with_hydropathy(163.18, Hydrophilic),
            MonomerType::Histidine => MonomerProperties::with_hydropathy(137.14, Hydrophilic),

            MonomerType::Arginine => MonomerProperties::charged(156.19, Positive),
            MonomerType::Lysine => MonomerProperties::charged(128.17, Positive),
            MonomerType::AsparticAcid => MonomerProperties::charged(115.09, Negative),
            MonomerType::GlutamicAcid => MonomerProperties::charged(129.12, Negative),

            MonomerType::Glycine => MonomerProperties::neutral(57.05),
            MonomerType::Proline => MonomerProperties::neutral(97.12),

            // Phosphate backbone carries one negative charge per nucleotide
            MonomerType::Adenine => MonomerProperties::charged(313.21, Negative),
            MonomerType::Cytosine => MonomerProperties::charged(289.18, Negative),
            MonomerType::Guanine => MonomerProperties::charged(329.21, Negative),
            MonomerType::Thymine => MonomerProperties::charged(304.20, Negative),
        }
    }
}

impl fmt::Display for MonomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown monomer code '{0}'")]
pub struct ParseMonomerTypeError(pub String);

impl FromStr for MonomerType {
    type Err = ParseMonomerTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ParseMonomerTypeError(s.to_string()))
    }
}

/// A chain unit. Codes missing from the catalogue are kept verbatim and
/// behave as neutral, flexible units of average mass.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Monomer {
    Known(MonomerType),
    Unknown(String),
}

impl Monomer {
    pub fn from_code(code: &str) -> Self {
        match MonomerType::from_code(code) {
            Some(kind) => Monomer::Known(kind),
            None => Monomer::Unknown(code.trim().to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Monomer::Known(kind) => kind.code(),
            Monomer::Unknown(code) => code,
        }
    }

    pub fn kind(&self) -> Option<MonomerType> {
        match self {
            Monomer::Known(kind) => Some(*kind),
            Monomer::Unknown(_) => None,
        }
    }

    pub fn properties(&self) -> MonomerProperties {
        match self {
            Monomer::Known(kind) => kind.properties(),
            Monomer::Unknown(_) => MonomerProperties::neutral(AVERAGE_RESIDUE_MASS),
        }
    }
}

impl From<MonomerType> for Monomer {
    fn from(kind: MonomerType) -> Self {
        Monomer::Known(kind)
    }
}

impl fmt::Display for Monomer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
