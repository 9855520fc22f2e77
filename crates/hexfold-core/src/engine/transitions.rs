use super::config::KineticsConfig;
use super::error::EngineError;
use super::kinetics::{self, rotational_barrier, transition_rate};
use super::progress::{Progress, ProgressReporter};
use crate::core::forcefield::scoring::Scorer;
use crate::core::models::chain::{Chain, ChainError};
use crate::core::models::layout::Layout;
use std::cmp::Ordering;
use tracing::{debug, info, instrument, trace, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How the residual "no transition" weight of a matrix is derived.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StayPolicy {
    /// `max(enumerated candidates, 1) - total_rate`, clamped at zero. Every
    /// rate is at most 1, so this uniformizes the jump chain.
    #[default]
    Uniformized,
    Constant(f64),
}

impl StayPolicy {
    pub fn stay_rate(self, enumerated: usize, total_rate: f64) -> f64 {
        match self {
            StayPolicy::Uniformized => (enumerated.max(1) as f64 - total_rate).max(0.0),
            StayPolicy::Constant(weight) => weight.max(0.0),
        }
    }
}

/// One re-fold of a single pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub position: usize,
    pub from_steps: i8,
    pub to_steps: i8,
    pub rate: f64,
}

impl Transition {
    #[inline]
    pub fn angle_degrees(&self) -> f64 {
        rotation_angle(self.from_steps, self.to_steps)
    }

    /// The chain this transition leads to. The input chain is left untouched.
    pub fn apply(&self, chain: &Chain) -> Result<Chain, ChainError> {
        chain.with_fold_state(self.position, self.to_steps)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransitionMatrix {
    pub transitions: Vec<Transition>,
    pub total_rate: f64,
    pub stay_rate: f64,
}

impl TransitionMatrix {
    #[inline]
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Selection probability of every transition, in order, and of staying put.
    pub fn probabilities(&self) -> (Vec<f64>, f64) {
        let weight = self.total_rate + self.stay_rate;
        if weight <= 0.0 {
            return (vec![0.0; self.transitions.len()], 1.0);
        }
        let moves = self.transitions.iter().map(|t| t.rate / weight).collect();
        (moves, self.stay_rate / weight)
    }

    pub fn fastest(&self) -> Option<&Transition> {
        self.transitions
            .iter()
            .max_by(|a, b| a.rate.partial_cmp(&b.rate).unwrap_or(Ordering::Equal))
    }
}

#[inline]
fn rotation_angle(from_steps: i8, to_steps: i8) -> f64 {
    f64::from((to_steps - from_steps).unsigned_abs()) * 60.0
}

struct PivotOutcome {
    transitions: Vec<Transition>,
    enumerated: usize,
}

/// Enumerates every admitted re-fold of every pivot and rates it.
///
/// Candidates whose layout overlaps are left out of the matrix but still
/// count as enumerated slots for [`StayPolicy::Uniformized`]. Transitions
/// are ordered by pivot, then by target fold state.
#[instrument(skip_all, name = "transition_matrix", fields(monomers = chain.len()))]
pub fn build_transition_matrix(
    chain: &Chain,
    config: &KineticsConfig,
    reporter: &ProgressReporter<'_>,
) -> Result<TransitionMatrix, EngineError> {
    let scorer = Scorer::new(&config.energy);
    let current_energy = scorer.full_energy(chain);
    if current_energy == f64::INFINITY {
        warn!("Current conformation overlaps; every valid candidate is treated as downhill.");
    }

    let positions = Layout::trace(chain)?;
    let masses = kinetics::masses(chain);
    let pivots: Vec<usize> = chain.pivot_positions().collect();

    info!(
        pivots = pivots.len(),
        temperature = config.temperature,
        energy = current_energy,
        "Building transition matrix."
    );
    reporter.report(Progress::TaskStart {
        total_steps: pivots.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = pivots.iter();

    #[cfg(feature = "parallel")]
    let iterator = pivots.par_iter();

    let outcomes: Vec<PivotOutcome> = iterator
        .map(|&position| {
            let moment = kinetics::pivot_moment(&masses, &positions, position);
            let outcome = evaluate_pivot(
                chain,
                position,
                moment,
                current_energy,
                &scorer,
                config,
                reporter,
            );
            reporter.report(Progress::TaskIncrement);
            outcome
        })
        .collect::<Result<_, EngineError>>()?;

    reporter.report(Progress::TaskFinish);

    let enumerated: usize = outcomes.iter().map(|o| o.enumerated).sum();
    let transitions: Vec<Transition> = outcomes
        .into_iter()
        .flat_map(|o| o.transitions)
        .collect();
    let total_rate = transitions.iter().fold(0.0, |total, t| total + t.rate);
    let stay_rate = config.stay_policy.stay_rate(enumerated, total_rate);

    info!(
        transitions = transitions.len(),
        skipped = enumerated - transitions.len(),
        total_rate,
        stay_rate,
        "Transition matrix complete."
    );

    Ok(TransitionMatrix {
        transitions,
        total_rate,
        stay_rate,
    })
}

fn evaluate_pivot(
    chain: &Chain,
    position: usize,
    moment: f64,
    current_energy: f64,
    scorer: &Scorer<'_>,
    config: &KineticsConfig,
    reporter: &ProgressReporter<'_>,
) -> Result<PivotOutcome, EngineError> {
    let from = chain
        .fold_state(position)
        .ok_or(EngineError::NotAPivot { position })?;
    let targets: Vec<i8> = chain.monomers()[position]
        .properties()
        .admitted_steps()
        .filter(|&to| to != from)
        .collect();

    let mut transitions = Vec::with_capacity(targets.len());
    for &to in &targets {
        let candidate = chain.with_fold_state(position, to)?;
        let energy = scorer.full_energy(&candidate);
        if energy == f64::INFINITY {
            debug!(position, to_steps = to, "Skipping overlapping candidate.");
            reporter.report(Progress::CandidateSkipped {
                position,
                to_steps: to,
            });
            continue;
        }

        let delta_e = energy - current_energy;
        let barrier = rotational_barrier(
            moment,
            rotation_angle(from, to),
            config.barrier_coefficient,
        );
        let rate = transition_rate(barrier, delta_e, config.temperature);
        trace!(
            position,
            from_steps = from,
            to_steps = to,
            delta_e,
            barrier,
            rate,
            "Rated candidate."
        );

        transitions.push(Transition {
            position,
            from_steps: from,
            to_steps: to,
            rate,
        });
    }

    Ok(PivotOutcome {
        transitions,
        enumerated: targets.len(),
    })
}
