use std::ops::{Add, AddAssign};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyBreakdown {
    pub electrostatic: f64,
    pub hydrophobic: f64,
    pub folding: f64,
    pub steric: f64,
}

impl EnergyBreakdown {
    pub fn new(electrostatic: f64, hydrophobic: f64, folding: f64, steric: f64) -> Self {
        Self {
            electrostatic,
            hydrophobic,
            folding,
            steric,
        }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.electrostatic + self.hydrophobic + self.folding + self.steric
    }
}

impl Add for EnergyBreakdown {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            electrostatic: self.electrostatic + rhs.electrostatic,
            hydrophobic: self.hydrophobic + rhs.hydrophobic,
            folding: self.folding + rhs.folding,
            steric: self.steric + rhs.steric,
        }
    }
}

impl AddAssign for EnergyBreakdown {
    fn add_assign(&mut self, rhs: Self) {
        self.electrostatic += rhs.electrostatic;
        self.hydrophobic += rhs.hydrophobic;
        self.folding += rhs.folding;
        self.steric += rhs.steric;
    }
}
