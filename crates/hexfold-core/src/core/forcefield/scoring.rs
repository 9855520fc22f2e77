use super::energy::EnergyCalculator;
use super::params::EnergyParams;
use super::term::EnergyBreakdown;
use crate::core::models::chain::Chain;
use crate::core::models::layout::{Layout, LayoutError};
use tracing::{trace, warn};

pub struct Scorer<'a> {
    params: &'a EnergyParams,
}

impl<'a> Scorer<'a> {
    pub fn new(params: &'a EnergyParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EnergyParams {
        self.params
    }

    pub fn score(&self, chain: &Chain) -> Result<EnergyBreakdown, LayoutError> {
        let layout = Layout::build(chain)?;
        Ok(self.score_layout(chain, &layout))
    }

    pub fn score_layout(&self, chain: &Chain, layout: &Layout) -> EnergyBreakdown {
        EnergyBreakdown {
            electrostatic: EnergyCalculator::electrostatic(chain, layout, self.params),
            hydrophobic: EnergyCalculator::hydrophobic(chain, layout, self.params),
            folding: EnergyCalculator::folding(chain, self.params),
            steric: EnergyCalculator::steric(layout, self.params),
        }
    }

    /// Total energy of the chain, or `f64::INFINITY` if its layout self-overlaps.
    pub fn full_energy(&self, chain: &Chain) -> f64 {
        match self.score(chain) {
            Ok(breakdown) => breakdown.total(),
            Err(LayoutError::Overlap { first, second, .. }) => {
                trace!(first, second, "Layout overlaps; energy is infinite.");
                f64::INFINITY
            }
            Err(e) => {
                warn!("Layout could not be built ({e}); treating energy as infinite.");
                f64::INFINITY
            }
        }
    }
}
