use super::params::EnergyParams;
use super::potentials;
use crate::core::models::chain::Chain;
use crate::core::models::layout::Layout;
use crate::core::models::monomer::{ChargeClass, Hydropathy};
use itertools::Itertools;

pub struct EnergyCalculator;

impl EnergyCalculator {
    pub fn electrostatic(chain: &Chain, layout: &Layout, params: &EnergyParams) -> f64 {
        let charged: Vec<(usize, f64)> = chain
            .monomers()
            .iter()
            .enumerate()
            .filter_map(|(i, m)| match m.properties().charge {
                ChargeClass::Neutral => None,
                charge => Some((i, charge.value())),
            })
            .collect();

        charged
            .iter()
            .tuple_combinations()
            .map(|(&(i, q1), &(j, q2))| {
                let dist = layout.positions()[i].distance(layout.positions()[j]) as f64;
                potentials::log_coulomb(dist, q1, q2, params.electrostatic_constant)
            })
            .fold(0.0, |total, e| total + e)
    }

    pub fn hydrophobic(chain: &Chain, layout: &Layout, params: &EnergyParams) -> f64 {
        chain
            .monomers()
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let (exposed, buried) = match m.properties().hydropathy {
                    Hydropathy::Hydrophobic => {
                        (params.hydrophobic_exposed, params.hydrophobic_buried)
                    }
                    Hydropathy::Hydrophilic => {
                        (params.hydrophilic_exposed, params.hydrophilic_buried)
                    }
                    Hydropathy::None => return 0.0,
                };
                let exposure = potentials::solvent_exposure(layout.occupied_neighbor_count(i));
                potentials::exposure_energy(exposure, exposed, buried)
            })
            .fold(0.0, |total, e| total + e)
    }

    pub fn folding(chain: &Chain, params: &EnergyParams) -> f64 {
        chain
            .monomers()
            .iter()
            .zip(chain.fold_states())
            .filter_map(|(m, &actual)| {
                m.properties().preferred_steps().map(|preferred| {
                    potentials::angular_penalty(actual, preferred, params.angular_penalty)
                })
            })
            .fold(0.0, |total, e| total + e)
    }

    /// Near-contact repulsion between monomers that are not sequence neighbors.
    pub fn steric(layout: &Layout, params: &EnergyParams) -> f64 {
        let positions = layout.positions();
        (0..positions.len())
            .tuple_combinations()
            .filter(|&(i, j)| j > i + 1)
            .map(|(i, j)| {
                let dist = positions[i].distance(positions[j]) as f64;
                potentials::steric_repulsion(dist, params.clash_threshold, params.steric_strength)
            })
            .fold(0.0, |total, e| total + e)
    }
}
