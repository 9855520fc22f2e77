use super::error::EngineError;
use crate::core::lattice::HexCoord;
use crate::core::models::chain::{Chain, ChainError};
use crate::core::models::layout::Layout;

/// kcal/(mol·K).
pub const BOLTZMANN_CONSTANT: f64 = 0.0019872041;
pub const DEFAULT_TEMPERATURE: f64 = 300.0;
/// kcal/(mol·Da·deg²). Hex distance never exceeds sequence separation, so the
/// straight chain bounds the moment; at this value a 120° move of a 200-residue
/// chain of the heaviest monomers stays near 130 kT at the default temperature.
pub const DEFAULT_BARRIER_COEFFICIENT: f64 = 1e-10;

/// Moment of inertia of the chain in its current layout.
///
/// With a pivot, the chain is treated as two rigid arms hinged at that
/// monomer and the reduced moment `I_left·I_right / (I_left + I_right)` is
/// returned; an arm with no mass contributes nothing and the other arm's
/// moment is used as is. Without a pivot, the moment is taken about the
/// center of mass in the planar embedding of the lattice.
///
/// Overlapping layouts are accepted; only the coordinates matter here.
pub fn moment_of_inertia(chain: &Chain, pivot: Option<usize>) -> Result<f64, EngineError> {
    let positions = Layout::trace(chain)?;
    let masses = masses(chain);
    match pivot {
        Some(index) if index >= chain.len() => Err(ChainError::IndexOutOfRange {
            index,
            len: chain.len(),
        }
        .into()),
        Some(index) => Ok(pivot_moment(&masses, &positions, index)),
        None => Ok(center_of_mass_moment(&masses, &positions)),
    }
}

/// Barrier for rotating the chain by `angle_degrees` about `pivot`, using
/// [`DEFAULT_BARRIER_COEFFICIENT`].
pub fn kinetic_barrier(
    chain: &Chain,
    angle_degrees: f64,
    pivot: usize,
) -> Result<f64, EngineError> {
    let moment = moment_of_inertia(chain, Some(pivot))?;
    Ok(rotational_barrier(
        moment,
        angle_degrees,
        DEFAULT_BARRIER_COEFFICIENT,
    ))
}

#[inline]
pub fn rotational_barrier(moment: f64, angle_degrees: f64, coefficient: f64) -> f64 {
    coefficient * moment * angle_degrees * angle_degrees
}

/// Arrhenius rate with the energy difference charged only to uphill moves.
///
/// For a fixed barrier `rate(ΔE) / rate(-ΔE) = exp(-ΔE / kT)`. Rates that
/// would underflow are clamped to the smallest positive `f64`.
#[inline]
pub fn transition_rate(barrier: f64, delta_e: f64, temperature: f64) -> f64 {
    let kt = BOLTZMANN_CONSTANT * temperature;
    let activation = if delta_e > 0.0 {
        barrier + delta_e
    } else {
        barrier
    };
    (-activation / kt).exp().max(f64::MIN_POSITIVE)
}

pub(crate) fn masses(chain: &Chain) -> Vec<f64> {
    chain.monomers().iter().map(|m| m.properties().mass).collect()
}

pub(crate) fn pivot_moment(masses: &[f64], positions: &[HexCoord], pivot: usize) -> f64 {
    let hinge = positions[pivot];
    let arm = |indices: std::ops::Range<usize>| -> f64 {
        indices
            .map(|i| {
                let d = positions[i].distance(hinge) as f64;
                masses[i] * d * d
            })
            .sum()
    };
    let left = arm(0..pivot);
    let right = arm(pivot + 1..positions.len());

    match (left > 0.0, right > 0.0) {
        (true, true) => left * right / (left + right),
        (true, false) => left,
        (false, true) => right,
        (false, false) => 0.0,
    }
}

fn center_of_mass_moment(masses: &[f64], positions: &[HexCoord]) -> f64 {
    let total: f64 = masses.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }
    let points: Vec<(f64, f64)> = positions.iter().map(|p| p.to_cartesian()).collect();
    let (sx, sy) = points
        .iter()
        .zip(masses)
        .fold((0.0, 0.0), |(sx, sy), (&(x, y), &m)| (sx + m * x, sy + m * y));
    let (cx, cy) = (sx / total, sy / total);

    points
        .iter()
        .zip(masses)
        .map(|(&(x, y), &m)| m * ((x - cx).powi(2) + (y - cy).powi(2)))
        .sum()
}
