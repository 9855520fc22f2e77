use crate::core::forcefield::params::EnergyParams;
use crate::core::forcefield::scoring::Scorer;
use crate::core::forcefield::term::EnergyBreakdown;
use crate::core::lattice::HexCoord;
use crate::core::models::chain::Chain;
use crate::core::models::layout::{Layout, LayoutError};
use crate::engine::config::{KineticsConfig, KineticsConfigBuilder};
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use crate::engine::transitions::{self, TransitionMatrix};
use std::path::Path;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct SurveyReport {
    pub chain: Chain,
    /// One coordinate per monomer, also for overlapping chains.
    pub positions: Vec<HexCoord>,
    pub energy: Result<EnergyBreakdown, LayoutError>,
    pub matrix: TransitionMatrix,
}

impl SurveyReport {
    pub fn total_energy(&self) -> f64 {
        self.energy
            .as_ref()
            .map_or(f64::INFINITY, EnergyBreakdown::total)
    }

    pub fn overlaps(&self) -> bool {
        matches!(self.energy, Err(LayoutError::Overlap { .. }))
    }
}

/// Finishes `builder`, first loading energy parameters from `params_path` if given.
pub fn configure(
    params_path: Option<&Path>,
    builder: KineticsConfigBuilder,
) -> Result<KineticsConfig, EngineError> {
    let builder = match params_path {
        Some(path) => {
            info!(path = %path.display(), "Loading energy parameters.");
            builder.energy(EnergyParams::load(path)?)
        }
        None => builder,
    };
    Ok(builder.build()?)
}

#[instrument(skip_all, name = "survey_workflow", fields(chain = %chain))]
pub fn run(
    chain: &Chain,
    config: &KineticsConfig,
    reporter: &ProgressReporter,
) -> Result<SurveyReport, EngineError> {
    let positions = reporter.phase("Layout", || Layout::trace(chain))?;

    let energy = reporter.phase("Scoring", || Scorer::new(&config.energy).score(chain));
    match &energy {
        Ok(breakdown) => info!(total = breakdown.total(), "Chain scored."),
        Err(e) => info!("Chain has no finite energy: {e}"),
    }

    let matrix = reporter.phase("Transitions", || {
        transitions::build_transition_matrix(chain, config, reporter)
    })?;

    Ok(SurveyReport {
        chain: chain.clone(),
        positions,
        energy,
        matrix,
    })
}
